use tracing::{info, warn};

use crate::core::auth::Credentials;
use crate::core::client::MessagingApi;
use crate::core::service::{MessagingService, WebhookConfig};
use crate::error::Result;

#[derive(Debug, Clone, Default)]
pub struct SetupOptions {
    pub webhook: WebhookConfig,
    /// Locate the service but leave it untouched
    pub dry_run: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupOutcome {
    /// The first service now points at the webhook. Holds the record Twilio returned.
    Configured(MessagingService),
    /// The account has no messaging service; nothing was changed.
    NotFound,
    /// Dry run: this service would have been updated.
    Planned(MessagingService),
}

/// Hooks for showing where the setup currently is.
pub trait SetupProgress {
    fn on_connecting(&self) {}
    fn on_configuring(&self) {}
    fn on_finish(&self) {}
}

impl SetupProgress for () {}

/// Build the client and point the first messaging service at `options.webhook`.
///
/// Every failure after the credentials are known ends up in the returned
/// `Result`, whichever step raised it, so the caller reports it in one place.
pub async fn configure<A, F>(
    credentials: Credentials,
    connect: F,
    options: &SetupOptions,
    progress: &dyn SetupProgress,
) -> Result<SetupOutcome>
where
    A: MessagingApi,
    F: FnOnce(Credentials) -> Result<A>,
{
    progress.on_connecting();
    let api = connect(credentials)?;

    progress.on_configuring();
    let Some(service) = api.list_services(1).await?.into_iter().next() else {
        warn!("No messaging service found on this account");
        return Ok(SetupOutcome::NotFound);
    };

    if options.dry_run {
        info!("Dry run, leaving {} unchanged", service.sid);
        return Ok(SetupOutcome::Planned(service));
    }

    let updated = api.update_service(&service.sid, &options.webhook).await?;
    info!("Webhook configured on {}", updated.sid);
    Ok(SetupOutcome::Configured(updated))
}
