mod client;
mod types;

pub use client::{Backend, HttpBackend};
pub use types::*;
