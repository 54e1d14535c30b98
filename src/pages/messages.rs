//! Messages Page
//!
//! Administrators get the patient roster next to the selected patient's
//! thread; patients get their own thread with the care team. Page state
//! lives in a [`MessagesView`]; this component renders it and forwards
//! events, bumping a revision signal so Dioxus re-renders after each change.

use std::sync::Arc;

use carelink_core::MessagesView;
use dioxus::prelude::*;

use crate::components::messages::{MessageComposer, MessageThread, PatientRoster};
use crate::context::{use_session, use_store};

/// Force a re-render after view state changed outside a signal.
fn refresh(mut revision: Signal<u64>) {
    *revision.write() += 1;
}

/// Messages page - roster, thread and composer.
#[component]
pub fn Messages() -> Element {
    let session = use_session();
    let store = use_store();
    let view = use_hook(|| Arc::new(MessagesView::new(session, store)));
    let revision: Signal<u64> = use_signal(|| 0);

    // Load once on mount
    use_hook({
        let view = view.clone();
        move || {
            spawn(async move {
                view.load().await;
                if view.is_active() {
                    refresh(revision);
                }
            });
        }
    });

    // Late results from in-flight calls must not touch a dropped page
    use_drop({
        let view = view.clone();
        move || view.deactivate()
    });

    let on_search = {
        let view = view.clone();
        move |term: String| {
            view.set_search_term(term);
            refresh(revision);
        }
    };

    let on_select = {
        let view = view.clone();
        move |patient_id: String| {
            view.select_patient(patient_id);
            refresh(revision);
        }
    };

    let on_input = {
        let view = view.clone();
        move |text: String| {
            view.set_composer(text);
            refresh(revision);
        }
    };

    let on_send = {
        let view = view.clone();
        move |_: ()| {
            let view = view.clone();
            spawn(async move {
                view.handle_send_message().await;
                if view.is_active() {
                    refresh(revision);
                }
            });
        }
    };

    // Subscribe this render to view changes
    let _ = revision();

    let roster_visible = view.roster_visible();
    let layout_class = if roster_visible {
        "messages-layout messages-layout-admin"
    } else {
        "messages-layout"
    };

    rsx! {
        div { class: "messages-page",
            header { class: "page-header",
                h1 { class: "page-title", "Messages" }
                p { class: "page-subtitle", "{view.subtitle()}" }
            }

            div { class: "{layout_class}",
                if roster_visible {
                    PatientRoster {
                        entries: view.roster(),
                        search_term: view.search_term(),
                        on_search: on_search,
                        on_select: on_select,
                    }
                }

                section { class: "thread-panel",
                    div { class: "thread-header",
                        h2 { "Message history" }
                    }

                    MessageThread {
                        entries: view.active_thread_entries(),
                        loading: view.is_loading(),
                    }

                    if view.composer_visible() {
                        MessageComposer {
                            value: view.composer(),
                            can_send: view.can_send(),
                            on_input: on_input,
                            on_send: on_send,
                        }
                    }
                }
            }
        }
    }
}
