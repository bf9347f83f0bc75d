use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where Twilio should deliver incoming WhatsApp messages.
pub const WEBHOOK_URL: &str = "https://asistan-orcin.vercel.app/api/webhooks/whatsapp";

/// A Twilio Messaging Service as returned by the Messaging v1 API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessagingService {
    pub sid: String,

    #[serde(default)]
    pub friendly_name: Option<String>,

    /// Currently configured inbound webhook, if any
    #[serde(default)]
    pub inbound_request_url: Option<String>,

    #[serde(default)]
    pub inbound_method: Option<String>,

    #[serde(default)]
    pub date_created: Option<DateTime<Utc>>,

    #[serde(default)]
    pub date_updated: Option<DateTime<Utc>>,
}

impl MessagingService {
    pub fn display_name(&self) -> &str {
        self.friendly_name.as_deref().unwrap_or(&self.sid)
    }
}

/// One page of the `GET /Services` listing
#[derive(Debug, Deserialize)]
pub(crate) struct ServicesPage {
    #[serde(default)]
    pub services: Vec<MessagingService>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two inbound fields written on a service. Serializes to the form
/// parameters the update endpoint expects.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct WebhookConfig {
    pub inbound_request_url: String,
    pub inbound_method: HttpMethod,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            inbound_request_url: WEBHOOK_URL.to_string(),
            inbound_method: HttpMethod::Post,
        }
    }
}
