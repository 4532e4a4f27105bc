use dioxus::prelude::*;
use eventboard_core::datetime::format_date_time;
use eventboard_core::pages::detail::{DeleteFlow, EventDetailState, EventField};
use eventboard_core::pages::LoadPhase;
use eventboard_core::{CategoryId, CategorySelection, EventId, Notice};
use crate::gateway;
use crate::theme::{spacing, AppColors, INPUT_STYLE};
use crate::widgets::{Card, CategoryChecklist, Modal, PageBackground, Toast};

const BUTTON: &str = "padding: 8px 16px; border-radius: 6px; border: none; color: white; font-weight: 600; cursor: pointer;";

#[component]
pub fn EventScreen(event_id: EventId, on_deleted: EventHandler<()>) -> Element {
    let mut state = use_signal(|| EventDetailState::new(event_id));
    let mut notice = use_signal(|| Option::<Notice>::None);

    use_future(move || async move {
        match gateway().load_detail_page(event_id).await {
            Ok((event, categories, users)) => state.write().loaded(event, categories, users),
            Err(e) => {
                tracing::error!(error = %e, id = %event_id, "loading event failed");
                state.write().failed(&e);
            }
        }
    });

    let save = move |ev: FormEvent| {
        ev.prevent_default();
        let Some((id, payload)) = state.write().begin_save() else {
            return;
        };
        spawn(async move {
            let outcome = match gateway().update_event(id, &payload).await {
                Ok(updated) => state.write().edit_succeeded(updated),
                Err(e) => {
                    tracing::error!(error = %e, %id, "editing event failed");
                    state.write().edit_failed(&e)
                }
            };
            notice.set(Some(outcome));
        });
    };

    let confirm_delete = move |_: MouseEvent| {
        let Some(id) = state.write().confirm_delete() else {
            return;
        };
        spawn(async move {
            match gateway().delete_event(id).await {
                Ok(()) => {
                    tracing::info!(%id, "event deleted");
                    on_deleted.call(());
                }
                Err(e) => {
                    tracing::error!(error = %e, %id, "deleting event failed");
                    let outcome = state.write().delete_failed(&e);
                    notice.set(Some(outcome));
                }
            }
        });
    };

    let snapshot = state.read().clone();
    let background = snapshot.event().map(|e| e.image.clone()).unwrap_or_default();
    let deleting = snapshot.delete() == DeleteFlow::Deleting;
    let delete_pending = snapshot.delete() != DeleteFlow::Idle;

    let body = match (snapshot.phase(), snapshot.event(), snapshot.view()) {
        (LoadPhase::Ready, Some(event), Some(view)) => rsx! {
            h1 { style: "color: {AppColors::TITLE}; margin: 0 0 {spacing::MD};", "{event.title}" }
            p { style: "color: {AppColors::BODY}; font-size: 1.5rem; margin: 0 0 {spacing::LG};", "{event.description}" }
            p { style: "color: {AppColors::MUTED}; margin: 0;", "Start Time: {format_date_time(&event.start_time)}" }
            p { style: "color: {AppColors::MUTED}; margin: 0 0 {spacing::LG};", "End Time: {format_date_time(&event.end_time)}" }
            p { style: "color: {AppColors::BODY}; margin: 0 0 {spacing::LG};", "Categories: {view.category_names.join(\", \")}" }
            div { style: "display: flex; align-items: center; justify-content: center; gap: {spacing::LG}; color: {AppColors::TITLE}; margin-bottom: {spacing::LG};",
                span { "Created By: {view.creator_name}" }
                if !view.creator_image.is_empty() {
                    img {
                        src: "{view.creator_image}",
                        alt: "{view.creator_name}",
                        style: "width: 100px; height: 100px; border-radius: 50%; object-fit: cover;",
                    }
                }
            }
            div { style: "display: flex; justify-content: center; gap: {spacing::SM};",
                button {
                    disabled: delete_pending,
                    onclick: move |_| state.write().begin_edit(),
                    style: "{BUTTON} background: {AppColors::ACCENT};",
                    "Edit"
                }
                button {
                    disabled: deleting,
                    onclick: move |_| state.write().request_delete(),
                    style: "{BUTTON} background: {AppColors::DANGER};",
                    if deleting { "Deleting…" } else { "Delete" }
                }
            }
        },
        (LoadPhase::Failed(message), _, _) => rsx! {
            h2 { style: "color: {AppColors::ERROR}; margin-top: 0;", "Could not load this event." }
            p { style: "color: {AppColors::BODY}; font-size: 0.875rem;", "{message}" }
        },
        _ => rsx! {
            h2 { style: "color: {AppColors::TITLE};", "Loading..." }
        },
    };

    let edit_modal = snapshot.draft().cloned().map(|draft| {
        let selected = CategorySelection::from_ids(draft.category_ids.iter().copied());
        let categories = snapshot.categories().to_vec();
        let users = snapshot.users().to_vec();
        let saving = snapshot.is_saving();
        rsx! {
            Modal {
                title: "Edit Event",
                closable: !saving,
                on_close: move |_| state.write().cancel_edit(),
                form { onsubmit: save,
                    div { style: "display: flex; flex-direction: column; gap: 12px;",
                        input {
                            r#type: "text",
                            placeholder: "Title",
                            value: "{draft.title}",
                            oninput: move |ev| state.write().edit_field(EventField::Title, ev.value()),
                            style: "{INPUT_STYLE}",
                        }
                        textarea {
                            placeholder: "Description",
                            value: "{draft.description}",
                            oninput: move |ev| state.write().edit_field(EventField::Description, ev.value()),
                            style: "{INPUT_STYLE} min-height: 80px;",
                        }
                        input {
                            r#type: "text",
                            placeholder: "Image URL",
                            value: "{draft.image}",
                            oninput: move |ev| state.write().edit_field(EventField::Image, ev.value()),
                            style: "{INPUT_STYLE}",
                        }
                        input {
                            r#type: "text",
                            placeholder: "Start Time",
                            value: "{draft.start_time}",
                            oninput: move |ev| state.write().edit_field(EventField::StartTime, ev.value()),
                            style: "{INPUT_STYLE}",
                        }
                        input {
                            r#type: "text",
                            placeholder: "End Time",
                            value: "{draft.end_time}",
                            oninput: move |ev| state.write().edit_field(EventField::EndTime, ev.value()),
                            style: "{INPUT_STYLE}",
                        }
                        CategoryChecklist {
                            categories,
                            selected,
                            color: AppColors::TITLE,
                            on_change: move |(id, checked): (CategoryId, bool)| state.write().set_draft_category(id, checked),
                        }
                        select {
                            onchange: move |ev| state.write().set_draft_creator(ev.value().parse().ok()),
                            style: "{INPUT_STYLE}",
                            option { value: "", selected: draft.created_by.is_none(), "Created by: unknown" }
                            {users.iter().map(|user| rsx! {
                                option {
                                    key: "{user.id}",
                                    value: "{user.id}",
                                    selected: draft.created_by == Some(user.id),
                                    "Created by: {user.name}"
                                }
                            })}
                        }
                        button {
                            r#type: "submit",
                            disabled: saving,
                            style: "{BUTTON} background: {AppColors::ACCENT};",
                            if saving { "Saving…" } else { "Save Changes" }
                        }
                    }
                }
            }
        }
    });

    rsx! {
        PageBackground { image: background,
            div { style: "display: flex; align-items: center; justify-content: center; min-height: 80vh;",
                div { style: "width: 400px; max-width: 100%;",
                    Card { {body} }
                }
            }
            {edit_modal}
            if snapshot.delete() != DeleteFlow::Idle {
                Modal {
                    title: "Delete event",
                    on_close: move |_| state.write().cancel_delete(),
                    p { style: "color: {AppColors::BODY}; margin-top: 0;", "Are you sure you want to delete this event?" }
                    div { style: "display: flex; justify-content: flex-end; gap: {spacing::SM};",
                        button {
                            disabled: deleting,
                            onclick: move |_| state.write().cancel_delete(),
                            style: "{BUTTON} background: #718096;",
                            "Cancel"
                        }
                        button {
                            disabled: deleting,
                            onclick: confirm_delete,
                            style: "{BUTTON} background: {AppColors::DANGER};",
                            "Delete"
                        }
                    }
                }
            }
            if let Some(n) = notice() {
                Toast { notice: n, on_dismiss: move |_| notice.set(None) }
            }
        }
    }
}
