pub mod interpreter;
pub mod persister;
pub mod validator;

pub use crate::domain::model::{ClassifierResponse, Comment, SentimentResult};
pub use crate::domain::ports::{Classifier, Storage, WordList};
pub use crate::utils::error::Result;
