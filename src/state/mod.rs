//! View state for the manager page.
//!
//! Plain data structs; the root component wraps them in `RwSignal`s and
//! provides them via context.

pub mod subscriptions;
