pub mod session;

pub use session::{Analysis, Session};
