use async_trait::async_trait;
use chatwire::{
    Error, Result,
    backend::{Backend, ChatRequest, ChatResponse, ImageRequest, ImageResponse},
    transcript::{Fragment, OutputSink},
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mock backend for testing. Replies are derived from the prompt unless a
/// failure is configured.
#[derive(Debug, Default)]
pub struct MockBackend {
    pub chat_replies: Arc<Mutex<HashMap<String, String>>>,
    pub image_refs: Arc<Mutex<HashMap<String, String>>>,
    pub delays: Arc<Mutex<HashMap<String, Duration>>>,
    pub chat_requests: Arc<Mutex<Vec<ChatRequest>>>,
    pub image_requests: Arc<Mutex<Vec<ImageRequest>>>,
    pub error: Option<String>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reply(self, prompt: &str, reply: &str) -> Self {
        self.chat_replies
            .lock()
            .unwrap()
            .insert(prompt.to_string(), reply.to_string());
        self
    }

    pub fn with_image(self, prompt: &str, image: &str) -> Self {
        self.image_refs
            .lock()
            .unwrap()
            .insert(prompt.to_string(), image.to_string());
        self
    }

    pub fn with_delay(self, prompt: &str, delay: Duration) -> Self {
        self.delays
            .lock()
            .unwrap()
            .insert(prompt.to_string(), delay);
        self
    }

    /// Every call fails as if the connection had been refused.
    pub fn with_error(mut self, error: &str) -> Self {
        self.error = Some(error.to_string());
        self
    }

    pub fn get_chat_requests(&self) -> Vec<ChatRequest> {
        self.chat_requests.lock().unwrap().clone()
    }

    pub fn get_image_requests(&self) -> Vec<ImageRequest> {
        self.image_requests.lock().unwrap().clone()
    }

    async fn wait_for(&self, prompt: &str) {
        let delay = self.delays.lock().unwrap().get(prompt).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl Backend for MockBackend {
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse> {
        self.chat_requests.lock().unwrap().push(request.clone());
        self.wait_for(&request.prompt).await;

        if let Some(ref error) = self.error {
            return Err(Error::internal(error.clone()));
        }

        let reply = self
            .chat_replies
            .lock()
            .unwrap()
            .get(&request.prompt)
            .cloned()
            .unwrap_or_else(|| format!("echo: {}", request.prompt));
        Ok(ChatResponse { reply })
    }

    async fn image(&self, request: ImageRequest) -> Result<ImageResponse> {
        self.image_requests.lock().unwrap().push(request.clone());
        self.wait_for(&request.prompt).await;

        if let Some(ref error) = self.error {
            return Err(Error::internal(error.clone()));
        }

        let image = self
            .image_refs
            .lock()
            .unwrap()
            .get(&request.prompt)
            .cloned()
            .unwrap_or_else(|| format!("/img/{}.png", request.prompt.replace(' ', "-")));
        Ok(ImageResponse { image })
    }
}

/// Sink that rejects every append.
#[derive(Debug, Default)]
pub struct FailingSink {
    pub attempts: Arc<Mutex<usize>>,
}

impl FailingSink {
    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

#[async_trait]
impl OutputSink for FailingSink {
    async fn append(&self, _fragment: &Fragment) -> Result<()> {
        *self.attempts.lock().unwrap() += 1;
        Err(Error::internal("sink unavailable"))
    }
}
