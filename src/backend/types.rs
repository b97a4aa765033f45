use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub username: String,
    pub prompt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRequest {
    pub username: String,
    pub prompt: String,
}

/// `image` is passed through untouched: a URL, a relative path or a data URI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageResponse {
    pub image: String,
}

impl ChatRequest {
    pub fn new(username: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            prompt: prompt.into(),
        }
    }
}

impl ImageRequest {
    pub fn new(username: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            prompt: prompt.into(),
        }
    }
}
