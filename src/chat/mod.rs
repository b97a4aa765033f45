use crate::{
    Error, Result,
    backend::{Backend, ChatRequest, ImageRequest},
    transcript::{Fragment, OutputSink},
};
use std::sync::Arc;
use tracing::{Instrument, debug, info_span, warn};
use uuid::Uuid;

/// Sends prompts to the backend and appends the rendered results to an
/// output sink. Safe to share between tasks; concurrent submissions append
/// in completion order.
pub struct ChatClient {
    backend: Arc<dyn Backend>,
    sink: Arc<dyn OutputSink>,
    surface_errors: bool,
}

impl ChatClient {
    pub fn new(backend: Arc<dyn Backend>, sink: Arc<dyn OutputSink>) -> Self {
        Self {
            backend,
            sink,
            surface_errors: false,
        }
    }

    /// When enabled a failed request also appends a notice fragment before
    /// the error is returned.
    pub fn with_error_surfacing(mut self, enabled: bool) -> Self {
        self.surface_errors = enabled;
        self
    }

    pub async fn submit_chat(&self, username: &str, prompt: &str) -> Result<Fragment> {
        let span = info_span!("submit", request_id = %Uuid::new_v4(), kind = "chat");
        self.chat(username, prompt).instrument(span).await
    }

    pub async fn submit_image(&self, username: &str, prompt: &str) -> Result<Fragment> {
        let span = info_span!("submit", request_id = %Uuid::new_v4(), kind = "image");
        self.image(username, prompt).instrument(span).await
    }

    async fn chat(&self, username: &str, prompt: &str) -> Result<Fragment> {
        let request = ChatRequest::new(username, prompt);
        let response = match self.backend.chat(request).await {
            Ok(response) => response,
            Err(e) => return Err(self.fail("chat", e).await),
        };

        let fragment = Fragment::exchange(username, prompt, response.reply);
        self.sink.append(&fragment).await?;
        debug!("Chat fragment appended");
        Ok(fragment)
    }

    async fn image(&self, username: &str, prompt: &str) -> Result<Fragment> {
        let request = ImageRequest::new(username, prompt);
        let response = match self.backend.image(request).await {
            Ok(response) => response,
            Err(e) => return Err(self.fail("image", e).await),
        };

        let fragment = Fragment::image(username, prompt, response.image);
        self.sink.append(&fragment).await?;
        debug!("Image fragment appended");
        Ok(fragment)
    }

    async fn fail(&self, kind: &str, error: Error) -> Error {
        warn!("{} request failed: {}", kind, error);
        if self.surface_errors {
            let notice = Fragment::notice(format!("{} request failed: {}", kind, error));
            if let Err(e) = self.sink.append(&notice).await {
                warn!("Could not append failure notice: {}", e);
            }
        }
        error
    }
}
