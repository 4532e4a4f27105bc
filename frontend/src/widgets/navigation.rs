use dioxus::prelude::*;
use crate::theme::{spacing, AppColors};

#[component]
pub fn Navigation(on_home: EventHandler<()>) -> Element {
    rsx! {
        nav { style: "display: flex; padding: {spacing::LG}; font-size: 1.5rem; background: {AppColors::SURFACE};",
            a {
                href: "#",
                onclick: move |ev| {
                    ev.prevent_default();
                    on_home.call(());
                },
                style: "color: {AppColors::TITLE}; margin-right: 18px; text-decoration: none;",
                "Home"
            }
        }
    }
}
