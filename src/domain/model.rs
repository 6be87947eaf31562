use serde::Deserialize;
use std::fmt;

/// A comment that passed validation, already normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment(String);

impl Comment {
    pub(crate) fn new(text: String) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One `{label, score}` entry of the classifier's prediction list.
#[derive(Debug, Clone, Deserialize)]
pub struct Prediction {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SentimentResult {
    pub label: String,
    pub score: f64,
}

impl fmt::Display for SentimentResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sentiment: {}, Confidence: {:.2}%",
            self.label,
            self.score * 100.0
        )
    }
}

/// Raw classifier output plus the advisory rate-limit header.
#[derive(Debug, Clone)]
pub struct ClassifierResponse {
    pub body: serde_json::Value,
    pub remaining_calls: String,
}
