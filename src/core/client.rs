use std::pin::Pin;

use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, info};
use url::Url;

use crate::core::auth::Credentials;
use crate::core::service::{MessagingService, ServicesPage, WebhookConfig};
use crate::error::{Result, SetupError};

const MESSAGING_BASE: &str = "https://messaging.twilio.com/v1";
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub type ApiFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T>> + Send + 'a>>;

/// The two Messaging Service operations the setup needs from Twilio.
pub trait MessagingApi {
    /// List at most `limit` messaging services, in the order Twilio returns them.
    fn list_services(&self, limit: u32) -> ApiFuture<'_, Vec<MessagingService>>;

    /// Overwrite the inbound webhook fields of service `sid`.
    fn update_service<'a>(
        &'a self,
        sid: &'a str,
        webhook: &'a WebhookConfig,
    ) -> ApiFuture<'a, MessagingService>;
}

/// Error body Twilio sends with non-2xx responses
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    code: Option<u32>,
    message: Option<String>,
}

pub struct TwilioClient {
    http: reqwest::Client,
    base: Url,
    credentials: Credentials,
}

impl TwilioClient {
    /// Build a client for the public Messaging API. No request is made here.
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_base_url(credentials, MESSAGING_BASE)
    }

    pub fn with_base_url(credentials: Credentials, base: &str) -> Result<Self> {
        let base = Url::parse(base).map_err(|e| SetupError::Client(format!("{base}: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(SetupError::Client(format!("{base} cannot be used as an API root")));
        }

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| SetupError::Client(e.to_string()))?;

        debug!("Created Twilio client for {} at {base}", credentials.account_sid);

        Ok(Self {
            http,
            base,
            credentials,
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        // cannot_be_a_base was rejected in with_base_url
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn fetch_services(&self, limit: u32) -> Result<Vec<MessagingService>> {
        let mut url = self.endpoint(&["Services"]);
        url.query_pairs_mut()
            .append_pair("PageSize", &limit.to_string());

        debug!("Listing messaging services: {url}");
        let response = self
            .http
            .get(url)
            .basic_auth(&self.credentials.account_sid, Some(&self.credentials.auth_token))
            .send()
            .await?;

        let text = check_status(response).await?;
        let page: ServicesPage = serde_json::from_str(&text)
            .map_err(|e| SetupError::Parse(format!("services list: {e}")))?;

        let mut services = page.services;
        services.truncate(limit as usize);
        info!("Found {} messaging service(s)", services.len());
        Ok(services)
    }

    async fn post_webhook(&self, sid: &str, webhook: &WebhookConfig) -> Result<MessagingService> {
        let url = self.endpoint(&["Services", sid]);

        info!(
            "Setting inbound webhook of {sid} to {} {}",
            webhook.inbound_method, webhook.inbound_request_url
        );
        let response = self
            .http
            .post(url)
            .basic_auth(&self.credentials.account_sid, Some(&self.credentials.auth_token))
            .form(webhook)
            .send()
            .await?;

        let text = check_status(response).await?;
        serde_json::from_str(&text).map_err(|e| SetupError::Parse(format!("updated service: {e}")))
    }
}

impl MessagingApi for TwilioClient {
    fn list_services(&self, limit: u32) -> ApiFuture<'_, Vec<MessagingService>> {
        Box::pin(self.fetch_services(limit))
    }

    fn update_service<'a>(
        &'a self,
        sid: &'a str,
        webhook: &'a WebhookConfig,
    ) -> ApiFuture<'a, MessagingService> {
        Box::pin(self.post_webhook(sid, webhook))
    }
}

/// Returns the body of a successful response, or the Twilio error it carries.
async fn check_status(response: reqwest::Response) -> Result<String> {
    let status = response.status();
    let text = response.text().await?;

    if status.is_success() {
        return Ok(text);
    }

    let snippet: String = text.chars().take(500).collect();
    debug!("Twilio returned {status}: {snippet}");
    Err(api_error(status, &text))
}

fn api_error(status: StatusCode, body: &str) -> SetupError {
    let parsed = serde_json::from_str::<ErrorResponse>(body).ok();
    let code = parsed.as_ref().and_then(|e| e.code);
    let message = parsed
        .and_then(|e| e.message)
        .or_else(|| status.canonical_reason().map(String::from))
        .unwrap_or_else(|| "unknown error".to_string());

    SetupError::Api {
        status: status.as_u16(),
        code,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> TwilioClient {
        TwilioClient::with_base_url(Credentials::new("AC1", "tok"), base).unwrap()
    }

    #[test]
    fn endpoints_extend_the_base_path() {
        let c = client("https://messaging.twilio.com/v1");
        assert_eq!(
            c.endpoint(&["Services", "MG1"]).as_str(),
            "https://messaging.twilio.com/v1/Services/MG1"
        );

        let c = client("http://127.0.0.1:8080/");
        assert_eq!(
            c.endpoint(&["Services"]).as_str(),
            "http://127.0.0.1:8080/Services"
        );
    }

    #[test]
    fn rejects_unusable_base_urls() {
        let creds = Credentials::new("AC1", "tok");
        assert!(matches!(
            TwilioClient::with_base_url(creds.clone(), "not a url"),
            Err(SetupError::Client(_))
        ));
        assert!(matches!(
            TwilioClient::with_base_url(creds, "mailto:ops@example.com"),
            Err(SetupError::Client(_))
        ));
    }

    #[test]
    fn api_errors_use_the_twilio_body() {
        let body = r#"{"code": 20003, "message": "Authenticate", "more_info": "https://www.twilio.com/docs/errors/20003", "status": 401}"#;
        match api_error(StatusCode::UNAUTHORIZED, body) {
            SetupError::Api {
                status,
                code,
                message,
            } => {
                assert_eq!(status, 401);
                assert_eq!(code, Some(20003));
                assert_eq!(message, "Authenticate");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn api_errors_fall_back_to_the_reason_phrase() {
        match api_error(StatusCode::BAD_GATEWAY, "<html>upstream down</html>") {
            SetupError::Api { code, message, .. } => {
                assert_eq!(code, None);
                assert_eq!(message, "Bad Gateway");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
