#[cfg(test)]
#[path = "subscriptions_test.rs"]
mod subscriptions_test;

use serde_json::{Map, Value};

/// View state for the subscription manager page.
///
/// The collection maps server-assigned subscription ids to opaque JSON
/// records; no client-side schema is enforced. The selected record and the
/// modal visibility move together: set on inspect, cleared on close.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubscriptionsState {
    pub subscriptions: Map<String, Value>,
    pub selected: Option<Value>,
    pub modal_visible: bool,
    pub error: Option<String>,
}

impl SubscriptionsState {
    /// Whether any subscriptions are known locally.
    pub fn has_subscriptions(&self) -> bool {
        !self.subscriptions.is_empty()
    }

    /// Pretty-printed JSON (2-space indent) of the selected record, or an
    /// empty string when nothing is selected.
    pub fn pretty_json(&self) -> String {
        self.selected
            .as_ref()
            .and_then(|record| serde_json::to_string_pretty(record).ok())
            .unwrap_or_default()
    }

    /// Replace the whole collection with the latest server truth.
    pub fn apply_loaded(&mut self, subscriptions: Map<String, Value>) {
        self.subscriptions = subscriptions;
    }

    /// Record a load failure, leaving the current collection untouched.
    pub fn record_load_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Select a record and show the modal.
    pub fn inspect(&mut self, record: Value) {
        self.selected = Some(record);
        self.modal_visible = true;
    }

    /// Hide the modal and clear the selection.
    pub fn close(&mut self) {
        self.modal_visible = false;
        self.selected = None;
    }

    /// Remove one entry, replacing the collection with a new mapping so
    /// observers always see a fresh value. Returns whether the entry existed.
    pub fn remove(&mut self, id: &str) -> bool {
        if !self.subscriptions.contains_key(id) {
            return false;
        }
        let next: Map<String, Value> = self
            .subscriptions
            .iter()
            .filter(|(key, _)| key.as_str() != id)
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        self.subscriptions = next;
        true
    }
}
