//! REST helpers for the subscription endpoint and the action flows built on
//! top of them.

pub mod actions;
pub mod api;
