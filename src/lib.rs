pub mod backend;
pub mod chat;
pub mod config;
pub mod console;
pub mod error;
pub mod transcript;

pub use chat::ChatClient;
pub use error::{Error, Result};
