// Adapters layer: concrete implementations for external systems (storage, http, word list).

pub mod http;
pub mod storage;
pub mod word_list;
