use super::types::*;
use crate::{Error, Result, config::BackendConfig};
use async_trait::async_trait;
use reqwest::Url;
use serde::{Serialize, de::DeserializeOwned};
use std::time::Duration;
use tracing::debug;

#[async_trait]
pub trait Backend: Send + Sync {
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse>;

    async fn image(&self, request: ImageRequest) -> Result<ImageResponse>;
}

pub struct HttpBackend {
    client: reqwest::Client,
    chat_url: Url,
    image_url: Url,
}

impl HttpBackend {
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let base = Url::parse(&config.base_url).map_err(|e| {
            Error::config(format!("Invalid backend URL '{}': {}", config.base_url, e))
        })?;

        let chat_url = join(&base, &config.chat_path)?;
        let image_url = join(&base, &config.image_path)?;

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        debug!("Backend endpoints: chat={} image={}", chat_url, image_url);

        Ok(Self {
            client,
            chat_url,
            image_url,
        })
    }

    pub fn chat_url(&self) -> &Url {
        &self.chat_url
    }

    pub fn image_url(&self) -> &Url {
        &self.image_url
    }

    async fn post_json<Req, Resp>(&self, url: &Url, request: &Req) -> Result<Resp>
    where
        Req: Serialize + Sync,
        Resp: DeserializeOwned,
    {
        let endpoint = url.path().to_string();

        // `json` sets Content-Type: application/json
        let response = self.client.post(url.clone()).json(request).send().await?;

        let status = response.status();
        let body = response.text().await?;
        debug!("{} responded {} ({} bytes)", endpoint, status, body.len());

        if !status.is_success() {
            return Err(Error::status(endpoint, status.as_u16(), body));
        }

        serde_json::from_str(&body).map_err(|e| Error::decode(endpoint, e))
    }
}

fn join(base: &Url, path: &str) -> Result<Url> {
    base.join(path)
        .map_err(|e| Error::config(format!("Invalid endpoint path '{}': {}", path, e)))
}

#[async_trait]
impl Backend for HttpBackend {
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse> {
        debug!("Sending chat request for user: {}", request.username);
        self.post_json(&self.chat_url, &request).await
    }

    async fn image(&self, request: ImageRequest) -> Result<ImageResponse> {
        debug!("Sending image request for user: {}", request.username);
        self.post_json(&self.image_url, &request).await
    }
}
