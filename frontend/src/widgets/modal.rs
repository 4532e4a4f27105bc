use dioxus::prelude::*;
use crate::theme::{spacing, AppColors};

/// Centered dialog over a dimmed overlay. Clicking the overlay or the close button closes it,
/// unless `closable` is false (a request is in flight).
#[component]
pub fn Modal(
    title: String,
    on_close: EventHandler<()>,
    #[props(default = true)] closable: bool,
    children: Element,
) -> Element {
    rsx! {
        div {
            style: "position: fixed; inset: 0; background: {AppColors::OVERLAY}; display: flex; align-items: flex-start; justify-content: center; padding-top: 64px; z-index: 10;",
            onclick: move |_| {
                if closable {
                    on_close.call(());
                }
            },
            div {
                style: "background: {AppColors::SURFACE}; border-radius: {spacing::CARD_RADIUS}; width: 100%; max-width: 448px; max-height: 80vh; overflow: auto; text-align: left;",
                onclick: move |ev| ev.stop_propagation(),
                div { style: "display: flex; justify-content: space-between; align-items: center; padding: {spacing::MD}; background: {AppColors::ACCENT_SOFT}; color: {AppColors::TITLE};",
                    h2 { style: "margin: 0; font-size: 1.25rem;", "{title}" }
                    button {
                        r#type: "button",
                        disabled: !closable,
                        onclick: move |_| on_close.call(()),
                        style: "background: none; border: none; font-size: 1.25rem; cursor: pointer; color: {AppColors::TITLE};",
                        "✕"
                    }
                }
                div { style: "padding: {spacing::MD};", {children} }
            }
        }
    }
}
