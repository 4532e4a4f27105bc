use dioxus::prelude::*;
use eventboard_core::pages::list::EventListState;
use eventboard_core::pages::LoadPhase;
use eventboard_core::{CategoryId, Event, EventId, Notice};
use crate::gateway;
use crate::screens::AddEventForm;
use crate::theme::{spacing, AppColors, INPUT_STYLE};
use crate::widgets::{Card, CategoryChecklist, EventCard, Modal, PageBackground, Toast};

#[component]
pub fn EventsScreen(on_open_event: EventHandler<EventId>) -> Element {
    let mut state = use_signal(EventListState::new);
    let mut notice = use_signal(|| Option::<Notice>::None);

    // Task is owned by this screen; if it unmounts mid-fetch the result is dropped.
    use_future(move || async move {
        match gateway().load_list_page().await {
            Ok((events, categories)) => state.write().loaded(events, categories),
            Err(e) => {
                tracing::error!(error = %e, "loading event list failed");
                state.write().failed(&e);
            }
        }
    });

    let snapshot = state.read().clone();
    let search = snapshot.filter().search_term().to_string();
    let categories = snapshot.categories().to_vec();
    let selected = snapshot.filter().selected.clone();

    let content = match snapshot.phase() {
        LoadPhase::Loading => rsx! {
            p { style: "color: {AppColors::ON_HEADER};", "Loading events…" }
        },
        LoadPhase::Failed(message) => rsx! {
            div { style: "max-width: 480px; margin: 0 auto;",
                Card {
                    p { style: "color: {AppColors::ERROR}; margin: 0 0 {spacing::SM};", "Could not load events." }
                    p { style: "color: {AppColors::BODY}; margin: 0; font-size: 0.875rem;", "{message}" }
                }
            }
        },
        LoadPhase::Ready => {
            let cards = snapshot.visible();
            if cards.is_empty() {
                rsx! {
                    p { style: "color: {AppColors::ON_HEADER};", "No events match your search." }
                }
            } else {
                rsx! {
                    div { style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 32px; justify-items: center;",
                        for listed in cards.into_iter() {
                            EventCard {
                                key: "{listed.event.id}",
                                listed,
                                on_open: on_open_event,
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        PageBackground { image: String::new(),
            h1 { style: "color: {AppColors::ON_HEADER}; margin: 0 0 {spacing::MD};", "List of events" }
            input {
                r#type: "text",
                placeholder: "Search events...",
                value: "{search}",
                oninput: move |ev| state.write().set_search(ev.value()),
                style: "{INPUT_STYLE} max-width: 400px; text-align: center; margin-bottom: {spacing::MD}; color: {AppColors::TITLE};",
            }
            CategoryChecklist {
                categories: categories.clone(),
                selected,
                color: AppColors::ON_HEADER,
                on_change: move |(id, checked): (CategoryId, bool)| state.write().set_category(id, checked),
            }
            button {
                onclick: move |_| state.write().open_add_modal(),
                style: "width: 400px; max-width: 100%; padding: 10px; margin-bottom: {spacing::LG}; border-radius: 6px; border: none; background: {AppColors::SURFACE}; color: {AppColors::MUTED}; font-weight: 600; cursor: pointer;",
                "Click here to add your event"
            }
            {content}
            if snapshot.add_modal_open() {
                Modal {
                    title: "Add Event",
                    on_close: move |_| state.write().close_add_modal(),
                    AddEventForm {
                        categories: categories.clone(),
                        on_created: move |event: Event| {
                            state.write().event_added(event);
                            notice.set(Some(Notice::success("Event Added", "Your event was added to the list.")));
                        },
                    }
                }
            }
            if let Some(n) = notice() {
                Toast { notice: n, on_dismiss: move |_| notice.set(None) }
            }
        }
    }
}
