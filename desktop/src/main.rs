#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
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
    #[layout(DesktopChrome)]
    #[route("/")]
    Home {},
    #[route("/catalog")]
    Catalog {},
    #[route("/entity/:id")]
    Entity { id: String },
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css); no separate desktop /assets needed.

#[cfg(feature = "desktop")]
fn main() {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("Linernotes – v{}", env!("CARGO_PKG_VERSION"))),
            ),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

fn nav_home(label: &str) -> Element {
    rsx!(Link { class: "site-header__link", to: Route::Home {}, "{label}" })
}
fn nav_catalog(label: &str) -> Element {
    rsx!(Link { class: "site-header__link", to: Route::Catalog {}, "{label}" })
}

fn entity_link(entity: &CoreEntity) -> Element {
    let id = entity.id.clone();
    let name = entity.name.clone();
    rsx!(Link { class: "page-catalog__link", to: Route::Entity { id }, "{name}" })
}

#[component]
fn App() -> Element {
    // Initialize i18n once
    ui::i18n::init();

    // Register localized header navigation builders (desktop)
    register_header_links(HeaderLinks {
        home: nav_home,
        catalog: nav_catalog,
    });

    // Root viewer session, provided via context and passed down as props.
    let viewer = use_signal(ViewerContext::default);
    use_context_provider(|| viewer);

    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        // Keyed wrapper forces a full remount on locale change so chrome
        // strings resolved via the global loader refresh as well.
        div {
            key: "{viewer().user.locale}",
            Router::<Route> {}
        }
    }
}

/// Catalog page wrapper supplying the desktop `Route`-aware link builder.
#[component]
fn Catalog() -> Element {
    rsx! {
        ui::views::Catalog { entity_link }
    }
}

/// Entity page wrapper: resolves the id against the demo catalog.
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

/// A desktop-specific layout wrapping every page with the shared `SiteHeader`,
/// which allows us to use the desktop-specific `Route` enum.
#[component]
fn DesktopChrome() -> Element {
    rsx! {
        SiteHeader {}

        Outlet::<Route> {}
    }
}
