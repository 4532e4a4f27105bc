use dioxus::prelude::*;
use eventboard_core::pages::list::ListedEvent;
use eventboard_core::EventId;
use crate::theme::{spacing, AppColors};

#[component]
pub fn EventCard(listed: ListedEvent, on_open: EventHandler<EventId>) -> Element {
    let event = &listed.event;
    let id = event.id;
    let categories = listed.view.category_label();

    rsx! {
        div {
            onclick: move |_| on_open.call(id),
            style: "background: {AppColors::SURFACE}; border-radius: {spacing::CARD_RADIUS}; box-shadow: 0 10px 15px rgba(0,0,0,0.15); cursor: pointer; min-width: 200px; max-width: 300px; overflow: hidden; transition: transform 0.2s ease-in-out;",
            img {
                src: "{event.image}",
                alt: "{event.title}",
                style: "width: 100%; height: 170px; object-fit: cover; margin-bottom: {spacing::MD};",
            }
            p { style: "color: {AppColors::TITLE}; font-weight: bold; text-transform: uppercase; margin: 0 {spacing::SM};", "{event.title}" }
            p { style: "color: {AppColors::BODY}; padding-bottom: {spacing::MD}; margin: 0 {spacing::SM};", "{event.description}" }
            p { style: "color: {AppColors::MUTED}; margin: 0;", "Start: {event.start_time}" }
            p { style: "color: {AppColors::MUTED}; padding-bottom: {spacing::MD}; margin: 0;", "End: {event.end_time}" }
            p { style: "color: {AppColors::FAINT}; padding-bottom: {spacing::LG}; margin: 0;", "Category: {categories}" }
        }
    }
}
