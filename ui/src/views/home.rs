use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "page page-home",
            h1 { {crate::t!("home-title")} }
            p { {crate::t!("home-intro-1")} }
            p { class: "page-home__cta",
                {crate::t!("home-cta")}
            }
        }
    }
}
