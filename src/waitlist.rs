//! Delivery of waitlist sign-ups.
//!
//! No mailing provider is assumed. Without a configured endpoint the address
//! is only logged and the sign-up counts as accepted.

use gloo_net::http::Request;
use serde::Serialize;
use thiserror::Error;

use crate::config;

/// Which form on the page the address came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    Hero,
    Waitlist,
}

#[derive(Serialize)]
struct WaitlistRequest<'a> {
    email: &'a str,
    source: Placement,
}

#[derive(Debug, Error)]
pub enum SubscribeError {
    #[error("could not encode request: {0}")]
    Encode(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("status {0}")]
    Status(u16),
}

pub async fn subscribe(email: &str, source: Placement) -> Result<(), SubscribeError> {
    let Some(endpoint) = config::waitlist_endpoint() else {
        log::info!("Waitlist sign-up ({:?}): {}", source, email);
        return Ok(());
    };

    let request = Request::post(endpoint)
        .json(&WaitlistRequest { email, source })
        .map_err(|e| SubscribeError::Encode(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| SubscribeError::Network(e.to_string()))?;

    if (200..300).contains(&response.status()) {
        log::info!("Waitlist sign-up accepted ({:?})", source);
        Ok(())
    } else {
        log::warn!("Waitlist endpoint answered {}", response.status());
        Err(SubscribeError::Status(response.status()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_names_its_source() {
        let body = serde_json::to_value(WaitlistRequest { email: "ada@example.com", source: Placement::Hero }).unwrap();
        assert_eq!(body, serde_json::json!({ "email": "ada@example.com", "source": "hero" }));
    }

    #[test]
    fn errors_read_well_inline() {
        assert_eq!(SubscribeError::Status(503).to_string(), "status 503");
    }
}
