use super::*;

use std::cell::{Cell, RefCell};

use futures::executor::block_on;

/// Scripted dialogs: answers every confirmation the same way and records
/// everything shown to the user.
struct ScriptedDialogs {
    accept: bool,
    prompts: RefCell<Vec<String>>,
    notices: RefCell<Vec<String>>,
}

impl ScriptedDialogs {
    fn new(accept: bool) -> Self {
        Self {
            accept,
            prompts: RefCell::new(Vec::new()),
            notices: RefCell::new(Vec::new()),
        }
    }
}

impl Dialogs for ScriptedDialogs {
    fn confirm(&self, message: &str) -> bool {
        self.prompts.borrow_mut().push(message.to_owned());
        self.accept
    }

    fn notify(&self, message: &str) {
        self.notices.borrow_mut().push(message.to_owned());
    }
}

fn sample() -> Map<String, Value> {
    let mut map = Map::new();
    map.insert("sub-1".to_owned(), serde_json::json!({"a": 1}));
    map.insert("sub-2".to_owned(), serde_json::json!({"b": 2}));
    map
}

// =============================================================
// Unsubscribe flow
// =============================================================

#[test]
fn declined_confirmation_sends_no_request() {
    let dialogs = ScriptedDialogs::new(false);
    let sent = Cell::new(false);

    let outcome = block_on(unsubscribe(&dialogs, "sub-1", || {
        sent.set(true);
        async { Ok::<(), String>(()) }
    }));

    assert_eq!(outcome, UnsubscribeOutcome::Declined);
    assert!(!sent.get());
    assert!(dialogs.notices.borrow().is_empty());
    assert_eq!(
        dialogs.prompts.borrow().as_slice(),
        ["Are you sure you want to unsubscribe from sub-1?"]
    );
}

#[test]
fn confirmed_delete_notifies_success() {
    let dialogs = ScriptedDialogs::new(true);
    let sent = Cell::new(false);

    let outcome = block_on(unsubscribe(&dialogs, "sub-1", || {
        sent.set(true);
        async { Ok::<(), String>(()) }
    }));

    assert_eq!(outcome, UnsubscribeOutcome::Removed);
    assert!(sent.get());
    assert_eq!(
        dialogs.notices.borrow().as_slice(),
        ["Successfully unsubscribed from sub-1"]
    );
}

#[test]
fn failed_delete_notifies_with_server_message() {
    let dialogs = ScriptedDialogs::new(true);

    let outcome = block_on(unsubscribe(&dialogs, "sub-2", || async {
        Err::<(), String>("not found".to_owned())
    }));

    assert_eq!(outcome, UnsubscribeOutcome::Failed("not found".to_owned()));
    assert_eq!(
        dialogs.notices.borrow().as_slice(),
        ["Error unsubscribing: not found"]
    );
}

#[test]
fn repeat_attempt_on_removed_id_degrades_to_failure() {
    let dialogs = ScriptedDialogs::new(true);

    let outcome = block_on(unsubscribe(&dialogs, "sub-1", || async {
        Err::<(), String>("Failed to unsubscribe: 404".to_owned())
    }));

    assert_eq!(
        outcome,
        UnsubscribeOutcome::Failed("Failed to unsubscribe: 404".to_owned())
    );
}

// =============================================================
// Load results
// =============================================================

#[test]
fn load_success_replaces_collection() {
    let mut state = SubscriptionsState::default();

    apply_load_result(&mut state, Ok(sample()));

    assert_eq!(state.subscriptions.len(), 2);
    assert!(state.subscriptions.contains_key("sub-1"));
    assert!(state.subscriptions.contains_key("sub-2"));
}

#[test]
fn load_failure_keeps_collection_and_records_message() {
    let mut state = SubscriptionsState::default();
    state.apply_loaded(sample());
    let before = state.subscriptions.clone();

    apply_load_result(&mut state, Err("Network response was not ok (500)".to_owned()));

    assert_eq!(state.subscriptions, before);
    assert_eq!(
        state.error.as_deref(),
        Some("Network response was not ok (500)")
    );
}

#[test]
fn load_transport_failure_on_mount_keeps_empty_collection() {
    let mut state = SubscriptionsState::default();

    apply_load_result(&mut state, Err("Failed to fetch".to_owned()));

    assert!(state.subscriptions.is_empty());
    assert_eq!(state.error.as_deref(), Some("Failed to fetch"));
}
