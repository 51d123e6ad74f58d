//! REST helpers for the NCOF Events Subscription service.
//!
//! Browser builds (`csr`) issue real HTTP calls via `gloo-net`; outside the
//! browser the calls are inert stubs so the rest of the crate stays
//! natively testable. Failures surface as human-readable `String` messages:
//! every error here is terminal at the call site and ends up either in view
//! state or in a notification.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::{Map, Value};

/// Collection endpoint of the NCOF Events Subscription service. The exact
/// path is compatibility-significant.
pub const SUBSCRIPTIONS_URI: &str =
    "/ETRI_INRS_TEAM/NCOF_Nncof_EventSubscription/1.0.0/subscriptions";

/// Endpoint for one individual subscription resource.
pub fn subscription_uri(subscription_id: &str) -> String {
    format!("{SUBSCRIPTIONS_URI}/{subscription_id}")
}

/// Error payload of the service, shaped like a 3GPP ProblemDetails object.
#[derive(Debug, serde::Deserialize)]
struct ProblemDetails {
    detail: Option<String>,
}

/// Message for a load that came back with a non-success status.
pub fn load_failure_message(status: u16) -> String {
    format!("Network response was not ok ({status})")
}

/// Message for a delete that came back with a non-204 status: the body's
/// `detail` field when present, else a generic message with the status code.
pub fn delete_failure_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ProblemDetails>(body)
        .ok()
        .and_then(|problem| problem.detail)
        .unwrap_or_else(|| format!("Failed to unsubscribe: {status}"))
}

/// Fetch the full subscription collection (id → record).
pub async fn fetch_subscriptions() -> Result<Map<String, Value>, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(SUBSCRIPTIONS_URI)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(load_failure_message(resp.status()));
        }
        resp.json::<Map<String, Value>>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        Err("not available outside the browser".to_owned())
    }
}

/// Delete one subscription. Only 204 No Content counts as success.
pub async fn delete_subscription(subscription_id: &str) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::delete(&subscription_uri(subscription_id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if resp.status() == 204 {
            return Ok(());
        }
        let body = resp.text().await.unwrap_or_default();
        Err(delete_failure_message(resp.status(), &body))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = subscription_id;
        Err("not available outside the browser".to_owned())
    }
}
