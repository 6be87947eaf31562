use crate::domain::model::Comment;
use crate::domain::ports::WordList;
use crate::utils::error::{GibberishKind, Result, SentimentError};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static TERMINAL_PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("static punctuation pattern"));

pub const DEFAULT_MEANINGFUL_RATIO: f64 = 0.6;
pub const DEFAULT_REPETITIVE_LENGTH: usize = 10;
pub const DEFAULT_REPETITIVE_DISTINCT: usize = 4;
pub const DEFAULT_UNRECOGNIZED_LENGTH: usize = 15;

/// Thresholds for the plausibility checks.
///
/// Lengths are strict lower bounds: a token is only considered once its
/// character count exceeds the threshold. `repetitive_distinct_threshold`
/// is a strict upper bound on the number of distinct characters.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationPolicy {
    pub min_words: usize,
    pub max_words: usize,
    pub meaningful_ratio: f64,
    pub repetitive_length_threshold: usize,
    pub repetitive_distinct_threshold: usize,
    pub unrecognized_length_threshold: usize,
}

impl ValidationPolicy {
    pub fn new(min_words: usize, max_words: usize) -> Self {
        Self {
            min_words,
            max_words,
            meaningful_ratio: DEFAULT_MEANINGFUL_RATIO,
            repetitive_length_threshold: DEFAULT_REPETITIVE_LENGTH,
            repetitive_distinct_threshold: DEFAULT_REPETITIVE_DISTINCT,
            unrecognized_length_threshold: DEFAULT_UNRECOGNIZED_LENGTH,
        }
    }
}

/// Collapses whitespace runs and squashes `.`/`!`/`?` runs into one period.
pub fn normalize(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    TERMINAL_PUNCTUATION.replace_all(&collapsed, ".").into_owned()
}

pub struct InputValidator<W: WordList> {
    policy: ValidationPolicy,
    words: W,
}

impl<W: WordList> InputValidator<W> {
    pub fn new(policy: ValidationPolicy, words: W) -> Self {
        Self { policy, words }
    }

    pub fn validate(&self, raw: &str) -> Result<Comment> {
        let text = normalize(raw);
        if text.is_empty() {
            return Err(SentimentError::EmptyInput);
        }

        let tokens: Vec<&str> = text.split(' ').collect();
        if tokens.len() < self.policy.min_words {
            return Err(SentimentError::TooShort {
                min: self.policy.min_words,
            });
        }
        if tokens.len() > self.policy.max_words {
            return Err(SentimentError::TooLong {
                max: self.policy.max_words,
            });
        }

        let ratio = self.meaningful_ratio(&tokens);
        tracing::debug!("meaningful-word ratio {:.2} over {} tokens", ratio, tokens.len());
        if ratio < self.policy.meaningful_ratio {
            return Err(SentimentError::LowMeaningfulRatio { ratio });
        }

        for token in &tokens {
            if let Some(kind) = self.gibberish_kind(token) {
                return Err(SentimentError::GibberishToken {
                    word: token.to_string(),
                    kind,
                });
            }
        }

        Ok(Comment::new(text))
    }

    fn meaningful_ratio(&self, tokens: &[&str]) -> f64 {
        let known = tokens
            .iter()
            .filter(|token| self.words.contains(token))
            .count();
        known as f64 / tokens.len() as f64
    }

    fn gibberish_kind(&self, token: &str) -> Option<GibberishKind> {
        let length = token.chars().count();
        if length > self.policy.repetitive_length_threshold {
            let distinct: HashSet<char> = token.to_lowercase().chars().collect();
            if distinct.len() < self.policy.repetitive_distinct_threshold {
                return Some(GibberishKind::Repetitive);
            }
        }
        if length > self.policy.unrecognized_length_threshold && !self.words.contains(token) {
            return Some(GibberishKind::Unrecognized);
        }
        None
    }
}
