use dioxus::prelude::*;
use crate::theme::{spacing, AppColors};

/// Full-height page backdrop: the given image URL (cover), or the header green when empty.
#[component]
pub fn PageBackground(image: String, children: Element) -> Element {
    let background = if image.trim().is_empty() {
        AppColors::HEADER.to_string()
    } else {
        format!("url(\"{}\") center / cover no-repeat", image.trim())
    };
    rsx! {
        div {
            style: "min-height: 100vh; padding: {spacing::MD}; box-sizing: border-box; background: {background}; text-align: center;",
            {children}
        }
    }
}
