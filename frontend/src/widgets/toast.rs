use dioxus::prelude::*;
use eventboard_core::Notice;
use crate::theme::{spacing, AppColors};

#[component]
pub fn Toast(notice: Notice, on_dismiss: EventHandler<()>) -> Element {
    let background = if notice.is_error() { AppColors::ERROR } else { AppColors::SUCCESS };
    rsx! {
        div {
            role: "status",
            style: "position: fixed; bottom: {spacing::LG}; left: 50%; transform: translateX(-50%); min-width: 300px; max-width: 560px; padding: 12px {spacing::MD}; border-radius: 6px; background: {background}; color: {AppColors::ON_HEADER}; display: flex; gap: {spacing::MD}; align-items: flex-start; text-align: left; z-index: 20;",
            div { style: "flex: 1;",
                div { style: "font-weight: 700;", "{notice.title}" }
                div { "{notice.description}" }
            }
            button {
                onclick: move |_| on_dismiss.call(()),
                style: "background: none; border: none; color: inherit; cursor: pointer;",
                "✕"
            }
        }
    }
}
