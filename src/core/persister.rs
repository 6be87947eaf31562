use crate::domain::model::{Comment, SentimentResult};
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use chrono::{DateTime, Local};

pub const TASK_LABEL: &str = "Sentiment Analysis";

/// `results_YYYYMMDD_HHMMSS.txt`. Two saves within the same second map to
/// the same name; the second one fails instead of overwriting.
pub fn result_filename(at: DateTime<Local>) -> String {
    format!("results_{}.txt", at.format("%Y%m%d_%H%M%S"))
}

pub fn render_record(comment: &Comment, result: &SentimentResult) -> String {
    format!(
        "Task: {}\nInput Text:\n{}\n\nResult:\n{}\n",
        TASK_LABEL, comment, result
    )
}

pub struct ResultPersister<S: Storage> {
    storage: S,
}

impl<S: Storage> ResultPersister<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub async fn save(&self, comment: &Comment, result: &SentimentResult) -> Result<String> {
        self.save_at(comment, result, Local::now()).await
    }

    pub async fn save_at(
        &self,
        comment: &Comment,
        result: &SentimentResult,
        at: DateTime<Local>,
    ) -> Result<String> {
        let filename = result_filename(at);
        let record = render_record(comment, result);

        tracing::debug!("Writing {} bytes to {}", record.len(), filename);
        let path = self.storage.write_new_file(&filename, record.as_bytes()).await?;
        tracing::info!("Saved result to {}", path);

        Ok(path)
    }
}
