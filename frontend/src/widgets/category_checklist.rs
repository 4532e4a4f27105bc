use dioxus::prelude::*;
use eventboard_core::{Category, CategoryId, CategorySelection};
use crate::theme::spacing;

/// One checkbox per category; each toggles independently.
#[component]
pub fn CategoryChecklist(
    categories: Vec<Category>,
    selected: CategorySelection,
    color: &'static str,
    on_change: EventHandler<(CategoryId, bool)>,
) -> Element {
    rsx! {
        div { style: "display: flex; flex-wrap: wrap; gap: {spacing::SM} {spacing::MD}; justify-content: center; margin-bottom: {spacing::MD};",
            {categories.iter().map(|category| {
                let id = category.id;
                let checked = selected.contains(id);
                rsx! {
                    label {
                        key: "{id}",
                        style: "display: inline-flex; align-items: center; gap: {spacing::XS}; color: {color}; font-size: 1.1rem; cursor: pointer;",
                        input {
                            r#type: "checkbox",
                            checked,
                            onchange: move |ev| on_change.call((id, ev.checked())),
                            style: "width: 18px; height: 18px; accent-color: #DD6B20;",
                        }
                        "{category.name}"
                    }
                }
            })}
        }
    }
}
