use std::io::{self, Write};

use crate::core::service::{MessagingService, WebhookConfig};
use crate::core::setup::SetupOutcome;
use crate::error::SetupError;

const TROUBLESHOOTING: [&str; 3] = [
    "1. Make sure the Account SID and Auth Token were entered correctly",
    "2. Check that your Twilio account is active",
    "3. Check your internet connection",
];

/// Writes the final, human-readable result of a setup run.
pub struct Reporter<W> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn report(
        &mut self,
        result: &Result<SetupOutcome, SetupError>,
        webhook: &WebhookConfig,
    ) -> io::Result<()> {
        match result {
            Ok(SetupOutcome::Configured(_)) => self.success(webhook),
            Ok(SetupOutcome::NotFound) => self.not_found(),
            Ok(SetupOutcome::Planned(service)) => self.planned(service, webhook),
            Err(e) => self.failure(e),
        }
    }

    fn success(&mut self, webhook: &WebhookConfig) -> io::Result<()> {
        writeln!(
            self.out,
            "✅ Success! Webhook configured: {}",
            webhook.inbound_request_url
        )?;
        writeln!(self.out)?;
        writeln!(self.out, "📱 Now send 'Merhaba' from your phone.")?;
        writeln!(self.out, "Aura will answer you in Turkish!")
    }

    fn not_found(&mut self) -> io::Result<()> {
        writeln!(self.out, "⚠️ No Messaging Service found.")?;
        writeln!(self.out, "Please contact Twilio support or")?;
        writeln!(
            self.out,
            "configure the webhook manually at console.twilio.com."
        )
    }

    fn planned(
        &mut self,
        service: &MessagingService,
        webhook: &WebhookConfig,
    ) -> io::Result<()> {
        writeln!(
            self.out,
            "🔎 Dry run: {} ({}) was not changed.",
            service.display_name(),
            service.sid
        )?;
        writeln!(
            self.out,
            "Current inbound webhook: {} {}",
            service.inbound_method.as_deref().unwrap_or("-"),
            service.inbound_request_url.as_deref().unwrap_or("(none)")
        )?;
        writeln!(
            self.out,
            "Would set:               {} {}",
            webhook.inbound_method, webhook.inbound_request_url
        )
    }

    fn failure(&mut self, error: &SetupError) -> io::Result<()> {
        writeln!(self.out, "❌ ERROR: {error}")?;
        writeln!(self.out)?;
        writeln!(self.out, "Possible fixes:")?;
        for hint in TROUBLESHOOTING {
            writeln!(self.out, "{hint}")?;
        }
        Ok(())
    }
}
