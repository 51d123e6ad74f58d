//! Table row for one subscription with inspect and unsubscribe actions.

use leptos::prelude::*;

use crate::state::subscriptions::SubscriptionsState;

/// One row of the subscription table: the id plus its action buttons.
///
/// Buttons stay enabled while a delete is in flight; an overlapping delete
/// for the same id fails server-side and surfaces as a failure notification.
#[component]
pub fn SubscriptionRow(id: String) -> impl IntoView {
    let state = expect_context::<RwSignal<SubscriptionsState>>();

    let view_id = id.clone();
    let on_view = move |_| {
        let record = state.with_untracked(|s| s.subscriptions.get(&view_id).cloned());
        if let Some(record) = record {
            state.update(|s| s.inspect(record));
        }
    };

    let delete_id = id.clone();
    let on_unsubscribe = move |_| {
        #[cfg(feature = "csr")]
        {
            use crate::net::actions::{self, UnsubscribeOutcome};

            let id = delete_id.clone();
            leptos::task::spawn_local(async move {
                let outcome = actions::unsubscribe(
                    &crate::util::dialogs::BrowserDialogs,
                    &id,
                    || crate::net::api::delete_subscription(&id),
                )
                .await;

                match outcome {
                    UnsubscribeOutcome::Removed => {
                        state.update(|s| {
                            s.remove(&id);
                        });
                    }
                    UnsubscribeOutcome::Failed(message) => {
                        leptos::logging::warn!("Error unsubscribing: {message}");
                    }
                    UnsubscribeOutcome::Declined => {}
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = &delete_id;
        }
    };

    view! {
        <tr class="subscription-row">
            <td class="subscription-row__id">{id}</td>
            <td class="subscription-row__actions">
                <button class="btn" on:click=on_view>
                    "View Details"
                </button>
                <button class="btn btn--danger" on:click=on_unsubscribe>
                    "Unsubscribe"
                </button>
            </td>
        </tr>
    }
}
