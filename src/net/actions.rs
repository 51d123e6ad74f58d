//! Bridges user actions to REST requests and state updates.
//!
//! The dialog seam and the delete request are injected so the
//! decide-then-request-then-update flows run headless in tests, without a
//! browser or a live endpoint.

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

use std::future::Future;

use serde_json::{Map, Value};

use crate::state::subscriptions::SubscriptionsState;
use crate::util::dialogs::Dialogs;

/// Result of an unsubscribe attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UnsubscribeOutcome {
    /// The user declined the confirmation prompt; no request was sent.
    Declined,
    /// The server confirmed the delete; the caller should drop the entry.
    Removed,
    /// The delete failed; the collection must be left unchanged.
    Failed(String),
}

/// Run the unsubscribe flow for one subscription id.
///
/// Asks for confirmation first; a decline is a full no-op. On a confirmed
/// delete the user is notified of the result either way. A repeat attempt
/// against an already-removed id fails remotely and comes back as
/// [`UnsubscribeOutcome::Failed`].
pub async fn unsubscribe<D, F, Fut>(dialogs: &D, id: &str, send_delete: F) -> UnsubscribeOutcome
where
    D: Dialogs,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<(), String>>,
{
    if !dialogs.confirm(&format!("Are you sure you want to unsubscribe from {id}?")) {
        return UnsubscribeOutcome::Declined;
    }

    match send_delete().await {
        Ok(()) => {
            dialogs.notify(&format!("Successfully unsubscribed from {id}"));
            UnsubscribeOutcome::Removed
        }
        Err(message) => {
            dialogs.notify(&format!("Error unsubscribing: {message}"));
            UnsubscribeOutcome::Failed(message)
        }
    }
}

/// Apply a load result to the view state: success replaces the collection,
/// failure records the message and leaves the collection untouched.
pub fn apply_load_result(
    state: &mut SubscriptionsState,
    result: Result<Map<String, Value>, String>,
) {
    match result {
        Ok(subscriptions) => state.apply_loaded(subscriptions),
        Err(message) => state.record_load_error(message),
    }
}
