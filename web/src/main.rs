use dioxus::prelude::*;

use ui::components::site_header::{register_header_links, HeaderLinks};
use ui::components::SiteHeader;
use ui::core::catalog;
use ui::core::entity::CoreEntity;
use ui::core::viewer::ViewerContext;
use ui::views::{EntityDetail, Home};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebChrome)]
    #[route("/")]
    Home {},
    #[route("/catalog")]
    Catalog {},
    #[route("/entity/:id")]
    Entity { id: String },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

// Shared theme lives in the ui crate; inline it so web and desktop stay in sync.
const THEME_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "site-header__link",
        to: Route::Home {},
        "{label}"
    })
}
fn nav_catalog(label: &str) -> Element {
    rsx!(Link {
        class: "site-header__link",
        to: Route::Catalog {},
        "{label}"
    })
}

fn entity_link(entity: &CoreEntity) -> Element {
    let id = entity.id.clone();
    let name = entity.name.clone();
    rsx!(Link {
        class: "page-catalog__link",
        to: Route::Entity { id },
        "{name}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    // Register localized header navigation builders
    register_header_links(HeaderLinks {
        home: nav_home,
        catalog: nav_catalog,
    });

    // Root viewer session: locale switcher in the header updates this, and
    // views receive it as explicit props.
    let viewer = use_signal(ViewerContext::default);
    use_context_provider(|| viewer);

    rsx! {
        // Global app resources
        document::Style { "{THEME_CSS_INLINE}" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        // Keyed wrapper forces a full remount when the viewer locale changes,
        // so chrome strings resolved via the global loader refresh too.
        div {
            key: "{viewer().user.locale}",
            Router::<Route> {}
        }
    }
}

/// Catalog page wrapper supplying the web `Route`-aware link builder.
#[component]
fn Catalog() -> Element {
    rsx! {
        ui::views::Catalog { entity_link }
    }
}

/// Entity page wrapper: resolves the id against the demo catalog and passes
/// the viewer bundle down as plain props.
#[component]
fn Entity(id: String) -> Element {
    let viewer = use_context::<Signal<ViewerContext>>();
    let entity = catalog::find_entity(&id);

    rsx! {
        EntityDetail {
            viewer: viewer(),
            entity_id: id,
            entity,
        }
    }
}

/// A web-specific layout wrapping every page with the shared `SiteHeader`,
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebChrome() -> Element {
    rsx! {
        SiteHeader {}
        Outlet::<Route> {}
    }
}
