//! Subscription manager page: the subscription table, the detail modal, and
//! the initial load against the NCOF Events Subscription service.

use leptos::prelude::*;

use crate::components::detail_modal::DetailModal;
use crate::components::subscription_row::SubscriptionRow;
use crate::state::subscriptions::SubscriptionsState;

/// Subscription manager page — lists subscriptions with inspect and
/// unsubscribe actions. Fetches the collection once on mount.
#[component]
pub fn ManagerPage() -> impl IntoView {
    let state = expect_context::<RwSignal<SubscriptionsState>>();

    // Initial load. Errors are recorded in view state and rendered inline;
    // the page stays interactive on the last known-good collection.
    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_subscriptions().await;
            if let Err(message) = &result {
                leptos::logging::warn!("Error fetching subscriptions: {message}");
            }
            state.update(|s| crate::net::actions::apply_load_result(s, result));
        });
    }

    let ids = move || state.with(|s| s.subscriptions.keys().cloned().collect::<Vec<_>>());

    view! {
        <div class="manager-page">
            <header class="manager-page__header">
                <h1>"NCOF Event Subscriptions"</h1>
            </header>

            <Show when=move || state.with(|s| s.error.is_some())>
                <p class="manager-page__error">
                    {move || state.with(|s| s.error.clone().unwrap_or_default())}
                </p>
            </Show>

            <Show
                when=move || state.with(SubscriptionsState::has_subscriptions)
                fallback=|| view! { <p class="manager-page__empty">"No subscriptions found."</p> }
            >
                <table class="subscription-table">
                    <thead>
                        <tr>
                            <th>"Subscription ID"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            ids()
                                .into_iter()
                                .map(|id| view! { <SubscriptionRow id=id/> })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </Show>

            <Show when=move || state.with(|s| s.modal_visible)>
                <DetailModal/>
            </Show>
        </div>
    }
}
