use dioxus::prelude::*;

use crate::core::catalog;
use crate::core::entity::CoreEntity;
use crate::t;

/// Shared state for the catalog view aggregating loadable entities or a load error.
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    pub entities: Vec<CoreEntity>,
    pub error: Option<String>,
}

impl CatalogState {
    pub fn load() -> Self {
        match catalog::load_entities() {
            Ok(entities) => Self {
                entities,
                error: None,
            },
            Err(err) => {
                eprintln!("[catalog] load failed: {err}");
                Self {
                    entities: Vec::new(),
                    error: Some(err.to_string()),
                }
            }
        }
    }
}

/// Catalog listing. The host supplies `entity_link` so this crate stays
/// ignorant of platform `Route` enums; each entry is rendered as whatever
/// link element the host builds for it.
#[component]
pub fn Catalog(entity_link: fn(&CoreEntity) -> Element) -> Element {
    let state = use_signal(CatalogState::load);
    let state = state();

    rsx! {
        section { class: "page page-catalog",
            h1 { {t!("catalog-title")} }

            if let Some(reason) = state.error.as_ref() {
                p { class: "page-catalog__error",
                    {t!("catalog-error", reason = reason.clone())}
                }
            } else if state.entities.is_empty() {
                p { class: "page-catalog__placeholder", {t!("catalog-empty")} }
            } else {
                ul { class: "page-catalog__items",
                    for entity in state.entities.iter() {
                        li { key: "{entity.id}", {entity_link(entity)} }
                    }
                }
            }
        }
    }
}
