//! Entity sidebar: kind badge, catalog id, and the last-updated line.

use dioxus::prelude::*;

use crate::components::last_updated::LastUpdated;
use crate::core::entity::{CoreEntity, EntityKind};
use crate::core::viewer::ViewerContext;
use crate::t;

fn kind_label(kind: EntityKind) -> String {
    match kind {
        EntityKind::Artist => t!("entity-kind-artist"),
        EntityKind::Release => t!("entity-kind-release"),
        EntityKind::Label => t!("entity-kind-label"),
    }
}

#[component]
pub fn EntitySidebar(viewer: ViewerContext, entity: CoreEntity) -> Element {
    let kind = kind_label(entity.kind);
    let id = entity.id.clone();

    rsx! {
        aside { class: "entity-sidebar",
            h2 { class: "entity-sidebar__heading", {t!("entity-sidebar-heading")} }
            span { class: "entity-sidebar__kind", "{kind}" }
            dl { class: "entity-sidebar__rows",
                dt { {t!("entity-id-label")} }
                dd { class: "entity-sidebar__id", "{id}" }
            }
            LastUpdated { viewer, entity }
        }
    }
}
