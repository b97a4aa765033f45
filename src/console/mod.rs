mod command;

pub use command::{Command, HELP};

use crate::{
    Result,
    backend::HttpBackend,
    chat::ChatClient,
    config::Config,
    transcript::{FanoutSink, HtmlFileSink, OutputSink, Renderer, TerminalSink},
};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Wires the configured backend and sinks together and reads commands from
/// stdin until EOF or `/quit`.
pub async fn run(config: Config) -> Result<()> {
    let backend = HttpBackend::new(&config.backend)?;
    let sink = build_sink(&config).await?;

    let client = ChatClient::new(Arc::new(backend), sink)
        .with_error_surfacing(config.render.surface_errors);

    info!(
        "Connected to {} as {}",
        config.backend.base_url, config.user.username
    );

    let console = Console::new(Arc::new(client), config.user.username.clone());
    console
        .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await
}

pub async fn build_sink(config: &Config) -> Result<Arc<dyn OutputSink>> {
    let renderer = Renderer::new(&config.render);
    let mut sink = FanoutSink::new();

    if config.output.terminal {
        sink = sink.with(Arc::new(TerminalSink::stdout(renderer.clone())));
    }
    if let Some(path) = &config.output.transcript_path {
        sink = sink.with(Arc::new(HtmlFileSink::open(path, renderer).await?));
    }
    if sink.is_empty() {
        warn!("No output configured; responses will be discarded");
    }

    Ok(Arc::new(sink))
}

pub struct Console {
    client: Arc<ChatClient>,
    username: String,
    pending: JoinSet<()>,
}

impl Console {
    pub fn new(client: Arc<ChatClient>, username: impl Into<String>) -> Self {
        Self {
            client,
            username: username.into(),
            pending: JoinSet::new(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Each submission runs as its own task so several may be in flight.
    /// Returns once input ends and every pending request has finished.
    pub async fn run<R, W>(mut self, input: R, mut output: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();

        while let Some(line) = lines.next_line().await? {
            self.reap_finished();
            match Command::parse(&line) {
                Command::Chat(prompt) => self.spawn_chat(prompt),
                Command::Image(prompt) => self.spawn_image(prompt),
                Command::User(username) => {
                    debug!("Username changed to {}", username);
                    self.username = username;
                }
                Command::Help => output.write_all(HELP.as_bytes()).await?,
                Command::Invalid(msg) => {
                    output.write_all(format!("{}\n", msg).as_bytes()).await?;
                }
                Command::Empty => {}
                Command::Quit => break,
            }
            output.flush().await?;
        }

        self.drain().await;
        Ok(())
    }

    fn spawn_chat(&mut self, prompt: String) {
        let client = self.client.clone();
        let username = self.username.clone();
        self.pending.spawn(async move {
            // The client already logs and optionally surfaces the failure.
            let _ = client.submit_chat(&username, &prompt).await;
        });
    }

    fn spawn_image(&mut self, prompt: String) {
        let client = self.client.clone();
        let username = self.username.clone();
        self.pending.spawn(async move {
            let _ = client.submit_image(&username, &prompt).await;
        });
    }

    /// Drops completed submissions so a long session does not accumulate them.
    fn reap_finished(&mut self) {
        while let Some(joined) = self.pending.try_join_next() {
            if let Err(e) = joined {
                warn!("Request task failed: {}", e);
            }
        }
    }

    async fn drain(&mut self) {
        debug!("Waiting for {} pending requests", self.pending.len());
        while let Some(joined) = self.pending.join_next().await {
            if let Err(e) = joined {
                warn!("Request task failed: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        backend::{Backend, ChatRequest, ChatResponse, ImageRequest, ImageResponse},
        transcript::MemorySink,
    };
    use async_trait::async_trait;
    use std::time::Duration;

    struct EchoBackend;

    #[async_trait]
    impl Backend for EchoBackend {
        async fn chat(&self, request: ChatRequest) -> Result<ChatResponse> {
            Ok(ChatResponse {
                reply: request.prompt,
            })
        }

        async fn image(&self, request: ImageRequest) -> Result<ImageResponse> {
            Ok(ImageResponse {
                image: request.prompt,
            })
        }
    }

    #[tokio::test]
    async fn test_finished_submissions_are_reaped() {
        let sink = MemorySink::default();
        let client = ChatClient::new(Arc::new(EchoBackend), Arc::new(sink.clone()));
        let mut console = Console::new(Arc::new(client), "amy");

        for i in 0..5 {
            console.spawn_chat(format!("p{i}"));
        }
        console.spawn_image("a cat".to_string());
        assert_eq!(console.pending.len(), 6);

        // Wait until every task has appended its fragment
        while sink.fragments().unwrap().len() < 6 {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;

        console.reap_finished();

        assert!(console.pending.is_empty());
    }
}
