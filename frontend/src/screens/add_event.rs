use dioxus::prelude::*;
use eventboard_core::pages::add_event::{self, AddEventDraft};
use eventboard_core::{Category, CategoryId, Event};
use crate::gateway;
use crate::theme::{spacing, AppColors, INPUT_STYLE};
use crate::widgets::CategoryChecklist;

#[component]
pub fn AddEventForm(categories: Vec<Category>, on_created: EventHandler<Event>) -> Element {
    let mut draft = use_signal(AddEventDraft::default);
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let d = draft();
    let field_style = "display: block; margin-bottom: 12px;";
    let label_style = "display: block; margin-bottom: 4px; color: #22543D; font-size: 0.875rem;";

    rsx! {
        form {
            onsubmit: move |ev| {
                ev.prevent_default();
                if submitting() {
                    return;
                }
                let current = draft();
                if let Err(e) = current.validate() {
                    error.set(Some(e.to_string()));
                    return;
                }
                submitting.set(true);
                error.set(None);
                spawn(async move {
                    let result = add_event::submit(gateway(), &current).await;
                    submitting.set(false);
                    match result {
                        Ok(event) => {
                            draft.write().clear();
                            on_created.call(event);
                        }
                        Err(e) => {
                            tracing::error!(error = %e, "adding event failed");
                            draft.write().remember_creator(&e);
                            error.set(Some(e.to_string()));
                        }
                    }
                });
            },
            label { style: "{field_style}",
                span { style: "{label_style}", "Title" }
                input {
                    r#type: "text",
                    placeholder: "Title",
                    value: "{d.title}",
                    oninput: move |ev| draft.write().title = ev.value(),
                    style: "{INPUT_STYLE}",
                }
            }
            label { style: "{field_style}",
                span { style: "{label_style}", "Description" }
                textarea {
                    placeholder: "Description",
                    value: "{d.description}",
                    oninput: move |ev| draft.write().description = ev.value(),
                    style: "{INPUT_STYLE} min-height: 80px;",
                }
            }
            label { style: "{field_style}",
                span { style: "{label_style}", "Image URL" }
                input {
                    r#type: "url",
                    placeholder: "https://…",
                    value: "{d.image}",
                    oninput: move |ev| draft.write().image = ev.value(),
                    style: "{INPUT_STYLE}",
                }
            }
            div { style: "display: flex; gap: {spacing::SM};",
                label { style: "{field_style} flex: 1;",
                    span { style: "{label_style}", "Start time" }
                    input {
                        r#type: "datetime-local",
                        value: "{d.start_time}",
                        oninput: move |ev| draft.write().start_time = ev.value(),
                        style: "{INPUT_STYLE}",
                    }
                }
                label { style: "{field_style} flex: 1;",
                    span { style: "{label_style}", "End time" }
                    input {
                        r#type: "datetime-local",
                        value: "{d.end_time}",
                        oninput: move |ev| draft.write().end_time = ev.value(),
                        style: "{INPUT_STYLE}",
                    }
                }
            }
            span { style: "{label_style}", "Categories" }
            CategoryChecklist {
                categories,
                selected: d.categories.clone(),
                color: AppColors::TITLE,
                on_change: move |(id, checked): (CategoryId, bool)| draft.write().categories.set(id, checked),
            }
            label { style: "{field_style}",
                span { style: "{label_style}", "Created by (optional)" }
                input {
                    r#type: "text",
                    placeholder: "Your name",
                    value: "{d.creator_name}",
                    oninput: move |ev| draft.write().creator_name = ev.value(),
                    style: "{INPUT_STYLE}",
                }
            }
            if !d.creator_name.trim().is_empty() {
                label { style: "{field_style}",
                    span { style: "{label_style}", "Your photo URL" }
                    input {
                        r#type: "url",
                        placeholder: "https://…",
                        value: "{d.creator_image}",
                        oninput: move |ev| draft.write().creator_image = ev.value(),
                        style: "{INPUT_STYLE}",
                    }
                }
            }
            if let Some(ref e) = error() {
                p { style: "color: {AppColors::ERROR}; font-size: 0.875rem; margin-bottom: 12px;", "{e}" }
            }
            button {
                r#type: "submit",
                disabled: submitting(),
                style: "width: 100%; padding: 10px; border-radius: 6px; border: none; background: {AppColors::HEADER}; color: {AppColors::ON_HEADER}; font-weight: 600; cursor: pointer;",
                if submitting() { "Adding…" } else { "Add Event" }
            }
        }
    }
}
