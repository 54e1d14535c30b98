use std::sync::Arc;

use carelink_core::{AuthSession, DataStore, InMemoryApi};
use dioxus::prelude::*;

use crate::context::AppServices;
use crate::pages::Messages;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Messages page
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Messages {},
}

/// Root application component.
///
/// Provides global styles, the session and data store, and routing.
#[component]
pub fn App() -> Element {
    let services = use_hook(|| {
        crate::get_services().unwrap_or_else(|| {
            tracing::warn!("Services not initialized, using empty in-memory store");
            AppServices {
                session: Arc::new(AuthSession::anonymous()),
                store: DataStore::shared(Arc::new(InMemoryApi::new())),
            }
        })
    });

    use_context_provider(|| services.session.clone());
    use_context_provider(|| services.store.clone());

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
