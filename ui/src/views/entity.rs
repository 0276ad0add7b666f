use dioxus::prelude::*;

use crate::components::entity_sidebar::EntitySidebar;
use crate::core::entity::CoreEntity;
use crate::core::viewer::ViewerContext;
use crate::t;

/// Entity detail page: heading plus the sidebar with the last-updated line.
///
/// The host resolves `entity_id` against its data source and passes the result
/// in; an unresolved id renders a localized not-found notice.
#[component]
pub fn EntityDetail(
    viewer: ViewerContext,
    entity_id: String,
    entity: Option<CoreEntity>,
) -> Element {
    match entity {
        Some(entity) => {
            let name = entity.name.clone();
            rsx! {
                section { class: "page page-entity",
                    h1 { "{name}" }
                    div { class: "page-entity__layout",
                        EntitySidebar { viewer, entity }
                    }
                }
            }
        }
        None => rsx! {
            section { class: "page page-entity",
                p { class: "page-entity__missing",
                    {t!("entity-not-found", id = entity_id)}
                }
            }
        },
    }
}
