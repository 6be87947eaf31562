use crate::domain::model::ClassifierResponse;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    /// Writes `data` to a new file at `path`; fails if the file already exists.
    fn write_new_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// Case-insensitive membership test against a reference English word list.
pub trait WordList: Send + Sync {
    fn contains(&self, word: &str) -> bool;
}

#[async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(&self, text: &str) -> Result<ClassifierResponse>;
}
