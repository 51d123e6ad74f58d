//! Blocking confirmation and notification dialogs.
//!
//! The manager page funnels its confirm/notify interactions through the
//! [`Dialogs`] trait so the unsubscribe flow can run headless in tests.
//! [`BrowserDialogs`] is the real implementation backed by `window.confirm()`
//! and `window.alert()`. Requires a browser environment.

#[cfg(test)]
#[path = "dialogs_test.rs"]
mod dialogs_test;

/// Blocking yes/no confirmation and one-shot notification surface.
pub trait Dialogs {
    /// Ask the user to confirm an action; `false` means decline.
    fn confirm(&self, message: &str) -> bool;

    /// Show a blocking, one-shot notification.
    fn notify(&self, message: &str);
}

/// Native browser dialogs. Outside the browser, `confirm` declines (the
/// safe default: no request gets sent) and `notify` is a no-op.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserDialogs;

impl Dialogs for BrowserDialogs {
    fn confirm(&self, message: &str) -> bool {
        #[cfg(feature = "csr")]
        {
            web_sys::window()
                .and_then(|w| w.confirm_with_message(message).ok())
                .unwrap_or(false)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = message;
            false
        }
    }

    fn notify(&self, message: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(w) = web_sys::window() {
                let _ = w.alert_with_message(message);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = message;
        }
    }
}
