use std::fmt;
use std::io::{BufRead, Write};

use crate::error::{Result, SetupError};

const ACCOUNT_SID_PROMPT: &str = "Enter your Twilio Account SID: ";
const AUTH_TOKEN_PROMPT: &str = "Enter your Twilio Auth Token: ";

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub account_sid: String,
    pub auth_token: String,
}

impl Credentials {
    /// Both values are trimmed; nothing else is checked, Twilio rejects bad ones on first use.
    pub fn new(account_sid: &str, auth_token: &str) -> Self {
        Self {
            account_sid: account_sid.trim().to_string(),
            auth_token: auth_token.trim().to_string(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("account_sid", &self.account_sid)
            .field("auth_token", &"<redacted>")
            .finish()
    }
}

/// Somewhere the account SID and auth token come from.
pub trait CredentialSource {
    fn collect(&mut self) -> Result<Credentials>;
}

/// Fixed credentials, already known before the run starts.
pub struct StaticCredentials {
    account_sid: String,
    auth_token: String,
}

impl StaticCredentials {
    pub fn new(account_sid: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Self {
            account_sid: account_sid.into(),
            auth_token: auth_token.into(),
        }
    }
}

impl CredentialSource for StaticCredentials {
    fn collect(&mut self) -> Result<Credentials> {
        Ok(Credentials::new(&self.account_sid, &self.auth_token))
    }
}

/// Asks the operator for whatever was not supplied up front, one line per value.
pub struct PromptCredentials<R, W> {
    input: R,
    output: W,
    account_sid: Option<String>,
    auth_token: Option<String>,
}

impl<R: BufRead, W: Write> PromptCredentials<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            account_sid: None,
            auth_token: None,
        }
    }

    pub fn with_account_sid(mut self, account_sid: Option<String>) -> Self {
        self.account_sid = account_sid;
        self
    }

    pub fn with_auth_token(mut self, auth_token: Option<String>) -> Self {
        self.auth_token = auth_token;
        self
    }

    fn prompt(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SetupError::Input(format!(
                "input closed while waiting for '{}'",
                label.trim_end_matches([':', ' '])
            )));
        }
        Ok(line)
    }
}

impl<R: BufRead, W: Write> CredentialSource for PromptCredentials<R, W> {
    fn collect(&mut self) -> Result<Credentials> {
        let account_sid = match self.account_sid.take() {
            Some(sid) => sid,
            None => self.prompt(ACCOUNT_SID_PROMPT)?,
        };
        let auth_token = match self.auth_token.take() {
            Some(token) => token,
            None => self.prompt(AUTH_TOKEN_PROMPT)?,
        };

        Ok(Credentials::new(&account_sid, &auth_token))
    }
}
