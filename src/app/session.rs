use crate::core::interpreter;
use crate::core::persister::ResultPersister;
use crate::core::validator::InputValidator;
use crate::domain::model::{Comment, SentimentResult};
use crate::domain::ports::{Classifier, Storage, WordList};
use crate::utils::error::{ErrorCategory, Result, SentimentError};
use std::io::{BufRead, Write};

pub const COMMENT_PROMPT: &str = "Enter your restaurant comment (press Enter twice to finish):";
pub const SAVE_PROMPT: &str = "Save result to file? (y/n): ";

#[derive(Debug, Clone)]
pub struct Analysis {
    pub comment: Comment,
    pub result: SentimentResult,
    pub remaining_calls: String,
}

/// One interactive run: read a comment, classify it, optionally save it.
pub struct Session<W: WordList, C: Classifier, S: Storage> {
    validator: InputValidator<W>,
    classifier: C,
    persister: ResultPersister<S>,
}

impl<W: WordList, C: Classifier, S: Storage> Session<W, C, S> {
    pub fn new(validator: InputValidator<W>, classifier: C, persister: ResultPersister<S>) -> Self {
        Self {
            validator,
            classifier,
            persister,
        }
    }

    /// Validate, classify and interpret without touching the console.
    pub async fn analyze(&self, raw: &str) -> Result<Analysis> {
        let comment = self.validator.validate(raw)?;
        tracing::info!("Classifying comment of {} words", comment.as_str().split(' ').count());

        let response = self.classifier.classify(comment.as_str()).await?;
        let result = interpreter::interpret(&response.body)?;

        Ok(Analysis {
            comment,
            result,
            remaining_calls: response.remaining_calls,
        })
    }

    /// Drives the prompts. Input, validation and API failures are printed, not
    /// returned; only console I/O failures escape.
    pub async fn run<R: BufRead, O: Write>(&self, input: &mut R, output: &mut O) -> Result<()> {
        writeln!(output, "{}", COMMENT_PROMPT)?;
        output.flush()?;
        let raw = match read_comment(input) {
            Ok(raw) => raw,
            Err(e) if e.category() == ErrorCategory::Input => return report(output, &e),
            Err(e) => return Err(e),
        };

        let analysis = match self.analyze(&raw).await {
            Ok(analysis) => analysis,
            Err(e) => return report(output, &e),
        };

        writeln!(output, "\nResult:")?;
        writeln!(output, "{}", analysis.result)?;
        writeln!(output, "API calls remaining: {}", analysis.remaining_calls)?;

        write!(output, "\n{}", SAVE_PROMPT)?;
        output.flush()?;
        let choice = match read_line(input) {
            Ok(choice) => choice.unwrap_or_default(),
            Err(e) if e.category() == ErrorCategory::Input => return report(output, &e),
            Err(e) => return Err(e),
        };

        if choice.trim().eq_ignore_ascii_case("y") {
            match self.persister.save(&analysis.comment, &analysis.result).await {
                Ok(path) => writeln!(output, "Results saved to {}", path)?,
                Err(e) => return report(output, &e),
            }
        }

        Ok(())
    }
}

fn report<O: Write>(output: &mut O, error: &SentimentError) -> Result<()> {
    tracing::debug!("Run aborted ({:?}): {}", error.category(), error);
    writeln!(output, "{}", error.user_friendly_message())?;
    Ok(())
}

/// Reads one line without its terminator; `None` at end of input.
/// Bytes that are not UTF-8 are an input error, not an I/O failure.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut bytes = Vec::new();
    if input.read_until(b'\n', &mut bytes)? == 0 {
        return Ok(None);
    }
    let mut line = String::from_utf8(bytes).map_err(|_| SentimentError::InvalidEncoding)?;
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

/// Collects lines until an empty one (or end of input) and joins them with spaces.
pub fn read_comment<R: BufRead>(input: &mut R) -> Result<String> {
    let mut lines = Vec::new();
    while let Some(line) = read_line(input)? {
        if line.is_empty() {
            break;
        }
        lines.push(line);
    }
    Ok(lines.join(" "))
}
