use thiserror::Error;

#[derive(Error, Debug)]
pub enum SetupError {
    #[error("Could not create Twilio client: {0}")]
    Client(String),

    #[error("Twilio API error {status}: {message}{}", code_suffix(.code))]
    Api {
        status: u16,
        code: Option<u32>,
        message: String,
    },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Input error: {0}")]
    Input(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, SetupError>;

fn code_suffix(code: &Option<u32>) -> String {
    code.map(|c| format!(" (code {c})")).unwrap_or_default()
}
