use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::core::setup::SetupProgress;

/// Prints each setup step and spins while Twilio is answering.
pub struct StepProgress {
    spinner: ProgressBar,
}

impl StepProgress {
    pub fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        Self { spinner }
    }

    fn step(&self, line: &str, waiting_on: &str) {
        self.spinner.suspend(|| println!("{line}"));
        self.spinner.set_message(waiting_on.to_string());
        self.spinner.enable_steady_tick(Duration::from_millis(80));
    }
}

impl Default for StepProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl SetupProgress for StepProgress {
    fn on_connecting(&self) {
        self.step("\n🔧 Connecting to the Twilio API...", "Creating client...");
    }

    fn on_configuring(&self) {
        self.step("📡 Setting the webhook URL...", "Waiting for Twilio...");
    }

    fn on_finish(&self) {
        self.spinner.finish_and_clear();
    }
}
