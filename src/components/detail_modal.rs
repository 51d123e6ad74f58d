//! Modal dialog showing the full JSON payload of one subscription.

use leptos::prelude::*;

use crate::state::subscriptions::SubscriptionsState;

/// Detail modal — pretty-prints the selected record. Clicking the backdrop
/// or the close button clears the selection and hides the modal.
#[component]
pub fn DetailModal() -> impl IntoView {
    let state = expect_context::<RwSignal<SubscriptionsState>>();

    view! {
        <div class="dialog-backdrop" on:click=move |_| state.update(SubscriptionsState::close)>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Subscription Details"</h2>
                <pre class="dialog__json">{move || state.with(SubscriptionsState::pretty_json)}</pre>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| state.update(SubscriptionsState::close)>
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}
