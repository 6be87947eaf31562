use thiserror::Error;

/// Which rule of the validator rejected a single token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GibberishKind {
    /// Long word built from very few distinct characters.
    Repetitive,
    /// Very long word that is not in the word list.
    Unrecognized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Operational,
    Startup,
}

#[derive(Error, Debug)]
pub enum SentimentError {
    #[error("Input cannot be empty.")]
    EmptyInput,

    #[error("Input is not valid UTF-8 text.")]
    InvalidEncoding,

    #[error("Input too short. Please provide at least {min} words.")]
    TooShort { min: usize },

    #[error("Input too long. Please limit to {max} words.")]
    TooLong { max: usize },

    #[error("Input contains too many unrecognized words. Please provide meaningful text.")]
    LowMeaningfulRatio { ratio: f64 },

    #[error("Input contains {}: '{word}'.", gibberish_label(.kind))]
    GibberishToken { word: String, kind: GibberishKind },

    #[error("API rate limit reached. Please try again later.")]
    RateLimited,

    #[error("API request failed: {status} {message}")]
    RequestFailed { status: u16, message: String },

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Empty predictions in API response.")]
    EmptyPredictions,

    #[error("{}", describe_payload(.payload))]
    UnexpectedFormat { payload: serde_json::Value },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration value: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("API key not found. Set {var} in the environment or a .env file.")]
    MissingCredential { var: String },
}

impl SentimentError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyInput
            | Self::InvalidEncoding
            | Self::TooShort { .. }
            | Self::TooLong { .. }
            | Self::LowMeaningfulRatio { .. }
            | Self::GibberishToken { .. } => ErrorCategory::Input,
            Self::RateLimited
            | Self::RequestFailed { .. }
            | Self::NetworkError(_)
            | Self::EmptyPredictions
            | Self::UnexpectedFormat { .. }
            | Self::Io(_) => ErrorCategory::Operational,
            Self::ConfigError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingCredential { .. } => ErrorCategory::Startup,
        }
    }

    /// One line suitable for the console, prefixed by category.
    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("Input error: {}", self),
            _ => format!("Error: {}", self),
        }
    }
}

fn gibberish_label(kind: &GibberishKind) -> &'static str {
    match kind {
        GibberishKind::Repetitive => "repetitive gibberish",
        GibberishKind::Unrecognized => "likely gibberish",
    }
}

fn describe_payload(payload: &serde_json::Value) -> String {
    match payload.get("error") {
        Some(serde_json::Value::String(message)) => format!("API error: {}", message),
        Some(other) => format!("API error: {}", other),
        None => format!("Unexpected response format: {}", payload),
    }
}

pub type Result<T> = std::result::Result<T, SentimentError>;
