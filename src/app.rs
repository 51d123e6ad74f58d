//! Root application component and shared state context.

use leptos::prelude::*;

use crate::pages::manager::ManagerPage;
use crate::state::subscriptions::SubscriptionsState;

/// Root application component.
///
/// Owns the subscription view state and provides it as context to the
/// manager page and its children.
#[component]
pub fn App() -> impl IntoView {
    let subscriptions = RwSignal::new(SubscriptionsState::default());
    provide_context(subscriptions);

    view! {
        <main class="app">
            <ManagerPage/>
        </main>
    }
}
