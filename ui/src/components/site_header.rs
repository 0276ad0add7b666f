use crate::core::viewer::ViewerContext;
use crate::i18n;
use crate::t;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

// Header stylesheet (asset on web, inlined in release native builds)
const HEADER_CSS: Asset = asset!("/assets/styling/header.css");
const HEADER_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/header.css"
));

/// Platforms register fully constructed `Link` elements here so this crate
/// never needs to know each platform's `Route` enum. Each closure receives the
/// localized label and returns a link that contains it.
///
/// Registration happens once, before the root is first rendered:
/// ```ignore
/// use ui::components::site_header::{register_header_links, HeaderLinks};
/// register_header_links(HeaderLinks {
///     home: |label| rsx!( Link { class: "site-header__link", to: Route::Home {}, "{label}" } ),
///     catalog: |label| rsx!( Link { class: "site-header__link", to: Route::Catalog {}, "{label}" } ),
/// });
/// ```
pub struct HeaderLinks {
    pub home: fn(label: &str) -> Element,
    pub catalog: fn(label: &str) -> Element,
}

static HEADER_LINKS: OnceCell<HeaderLinks> = OnceCell::new();

pub fn register_header_links(links: HeaderLinks) {
    let _ = HEADER_LINKS.set(links);
}

/// Site chrome: brand, navigation, and the locale switcher.
///
/// Switching locale updates both the global fluent language (for `t!` chrome
/// strings) and, when the host provided one, the root `Signal<ViewerContext>`
/// so viewer-scoped rendering follows along.
#[component]
pub fn SiteHeader() -> Element {
    i18n::init();

    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    let viewer_ctx: Option<Signal<ViewerContext>> = try_use_context::<Signal<ViewerContext>>();
    let current_lang = viewer_ctx
        .as_ref()
        .map(|viewer| viewer().user.locale.clone())
        .unwrap_or_else(|| "en-US".to_string());

    #[cfg(debug_assertions)]
    println!("[i18n] SiteHeader render lang={current_lang}");

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        if i18n::set_language(&val).is_ok() {
            if let Some(mut viewer) = viewer_ctx {
                let mut next = viewer();
                next.user.locale = val;
                viewer.set(next);
            }
        }
    };

    // Localized nav links, when the platform registered its builders.
    let nav: Option<VNode> = HEADER_LINKS.get().map(|links| {
        let home = (links.home)(&t!("nav-home"));
        let catalog = (links.catalog)(&t!("nav-catalog"));
        rsx! {
            nav { class: "site-header__nav",
                {home}
                {catalog}
            }
        }
        .expect("SiteHeader: rsx render failed")
    });

    let tagline = t!("tagline");

    rsx! {
        document::Link { rel: "stylesheet", href: HEADER_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{HEADER_CSS_INLINE}" }
        }

        header { class: "site-header",
            div { class: "site-header__inner",
                div { class: "site-header__brand",
                    span { class: "site-header__brand-mark", "Linernotes" }
                    span { class: "site-header__brand-subtitle", "{tagline}" }
                }

                if let Some(nav) = nav {
                    {nav}
                }

                if show_switcher {
                    div { class: "site-header__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang}",
                            oninput: on_change,
                            { langs().iter().map(|code| {
                                let c = code.clone();
                                rsx!{
                                    option { key: "{c}", value: "{c}", "{c}" }
                                }
                            })}
                        }
                    }
                }
            }
        }
    }
}
