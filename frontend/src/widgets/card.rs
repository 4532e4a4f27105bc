use dioxus::prelude::*;
use crate::theme::{spacing, AppColors};

#[component]
pub fn Card(children: Element) -> Element {
    rsx! {
        div {
            style: "background: {AppColors::SURFACE}; border-radius: {spacing::CARD_RADIUS}; padding: {spacing::MD}; box-shadow: 0 10px 15px rgba(0,0,0,0.15);",
            {children}
        }
    }
}
