pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{http::SentimentClient, storage::LocalStorage, word_list::WordSet};
pub use app::{Analysis, Session};
pub use config::AppConfig;
pub use crate::core::{persister::ResultPersister, validator::InputValidator};
pub use utils::error::{Result, SentimentError};
