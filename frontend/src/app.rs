use dioxus::prelude::*;
use eventboard_core::EventId;
use crate::screens::{EventScreen, EventsScreen};
use crate::widgets::Navigation;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Route {
    Events,
    Event(EventId),
}

#[component]
pub fn App() -> Element {
    let mut route = use_signal(|| Route::Events);

    let current_screen = match route() {
        Route::Events => rsx! {
            EventsScreen {
                on_open_event: move |id| route.set(Route::Event(id)),
            }
        },
        Route::Event(id) => rsx! {
            EventScreen {
                key: "{id}",
                event_id: id,
                on_deleted: move |_| route.set(Route::Events),
            }
        },
    };

    rsx! {
        div { style: "font-family: system-ui, sans-serif; margin: 0;",
            Navigation { on_home: move |_| route.set(Route::Events) }
            {current_screen}
        }
    }
}
