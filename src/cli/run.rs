use std::io::{self, Write};

use anyhow::Result;
use tracing::{error, info};

use crate::cli::commands::SetupArgs;
use crate::cli::progress::StepProgress;
use crate::cli::report::Reporter;
use crate::core::auth::{CredentialSource, Credentials, PromptCredentials};
use crate::core::client::{MessagingApi, TwilioClient};
use crate::core::setup::{self, SetupOptions, SetupProgress};

pub async fn run_setup(args: SetupArgs) -> Result<()> {
    let stdin = io::stdin();
    let mut source = PromptCredentials::new(stdin.lock(), io::stdout())
        .with_account_sid(args.account_sid)
        .with_auth_token(args.auth_token);

    let options = SetupOptions {
        dry_run: args.dry_run,
        ..Default::default()
    };

    execute(
        &mut source,
        TwilioClient::new,
        &options,
        &StepProgress::new(),
        io::stdout(),
    )
    .await
}

/// One full setup pass. A failed Twilio step is reported on `out` and is not
/// an error; only credential input and writing the report can fail the run.
pub async fn execute<S, F, A, W>(
    source: &mut S,
    connect: F,
    options: &SetupOptions,
    progress: &dyn SetupProgress,
    out: W,
) -> Result<()>
where
    S: CredentialSource,
    F: FnOnce(Credentials) -> crate::Result<A>,
    A: MessagingApi,
    W: Write,
{
    let credentials = source.collect()?;
    info!("Configuring webhook for account {}", credentials.account_sid);

    let result = setup::configure(credentials, connect, options, progress).await;
    progress.on_finish();

    if let Err(e) = &result {
        error!("Webhook setup failed: {e}");
    }

    let mut reporter = Reporter::new(out);
    reporter.report(&result, &options.webhook)?;
    Ok(())
}
