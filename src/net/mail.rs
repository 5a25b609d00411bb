//! Mail relay client (EmailJS REST contract).
//!
//! Client-side (hydrate): real HTTP call via `gloo-net`.
//! Native builds: stub returning an error, since delivery is only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<(), String>` so a failed delivery degrades to one
//! notification instead of crashing anything. There are no retries; the
//! user may resubmit manually.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "mail_test.rs"]
mod mail_test;

use serde::Serialize;

/// Hosted relay endpoint accepting structured field payloads.
pub const SEND_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Relay credentials, baked in at build time.
///
/// When any of the three env vars is absent the form reports a
/// configuration error rather than pretending delivery succeeded, so a
/// misconfigured deploy is visible instead of silently "working".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MailConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl MailConfig {
    /// Read the relay configuration from compile-time env, if complete.
    #[must_use]
    pub fn from_build_env() -> Option<Self> {
        let service_id = option_env!("PORTFOLIO_EMAILJS_SERVICE_ID")?;
        let template_id = option_env!("PORTFOLIO_EMAILJS_TEMPLATE_ID")?;
        let public_key = option_env!("PORTFOLIO_EMAILJS_PUBLIC_KEY")?;
        Some(Self {
            service_id: service_id.to_owned(),
            template_id: template_id.to_owned(),
            public_key: public_key.to_owned(),
        })
    }
}

/// The four template fields delivered per submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MailFields {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
}

/// Request body for [`SEND_ENDPOINT`].
#[must_use]
pub fn build_payload(config: &MailConfig, fields: &MailFields) -> serde_json::Value {
    serde_json::json!({
        "service_id": config.service_id,
        "template_id": config.template_id,
        "user_id": config.public_key,
        "template_params": fields,
    })
}

#[cfg(any(test, feature = "hydrate"))]
fn send_failed_message(status: u16) -> String {
    format!("mail relay send failed: {status}")
}

/// Deliver one submission through the relay.
///
/// # Errors
///
/// Returns an error string when the request cannot be sent or the relay
/// rejects it.
pub async fn send(config: &MailConfig, fields: &MailFields) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = build_payload(config, fields);
        let resp = gloo_net::http::Request::post(SEND_ENDPOINT)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(send_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, fields);
        Err("not available outside the browser".to_owned())
    }
}
