use super::{Fragment, Renderer};
use crate::{Error, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tokio::fs::{File, OpenOptions};
use tokio::io::{AsyncWrite, AsyncWriteExt, Stdout};
use tracing::{debug, warn};

/// Destination for rendered fragments. Appends never replace prior content
/// and each append is atomic with respect to other appends on the same sink.
#[async_trait]
pub trait OutputSink: Send + Sync {
    async fn append(&self, fragment: &Fragment) -> Result<()>;
}

#[derive(Default)]
struct Region {
    fragments: Vec<Fragment>,
    html: String,
}

/// In-process output region: the fragment list plus its concatenated HTML.
#[derive(Clone, Default)]
pub struct MemorySink {
    renderer: Renderer,
    region: Arc<Mutex<Region>>,
}

impl MemorySink {
    pub fn new(renderer: Renderer) -> Self {
        Self {
            renderer,
            region: Arc::new(Mutex::new(Region::default())),
        }
    }

    /// A region that already holds `html` before any fragment arrives.
    pub fn seeded(renderer: Renderer, html: impl Into<String>) -> Self {
        let region = Region {
            fragments: Vec::new(),
            html: html.into(),
        };
        Self {
            renderer,
            region: Arc::new(Mutex::new(region)),
        }
    }

    pub fn contents(&self) -> Result<String> {
        let region = self
            .region
            .lock()
            .map_err(|e| Error::internal(format!("Mutex lock failed: {e}")))?;
        Ok(region.html.clone())
    }

    pub fn fragments(&self) -> Result<Vec<Fragment>> {
        let region = self
            .region
            .lock()
            .map_err(|e| Error::internal(format!("Mutex lock failed: {e}")))?;
        Ok(region.fragments.clone())
    }
}

#[async_trait]
impl OutputSink for MemorySink {
    async fn append(&self, fragment: &Fragment) -> Result<()> {
        let rendered = self.renderer.html(fragment);
        let mut region = self
            .region
            .lock()
            .map_err(|e| Error::internal(format!("Mutex lock failed: {e}")))?;
        region.html.push_str(&rendered);
        region.fragments.push(fragment.clone());
        Ok(())
    }
}

/// Appends HTML to a transcript file, keeping whatever it already holds.
pub struct HtmlFileSink {
    renderer: Renderer,
    path: PathBuf,
    file: tokio::sync::Mutex<File>,
}

impl HtmlFileSink {
    pub async fn open(path: impl AsRef<Path>, renderer: Renderer) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await?;

        debug!("Appending transcript to {}", path.display());

        Ok(Self {
            renderer,
            path,
            file: tokio::sync::Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl OutputSink for HtmlFileSink {
    async fn append(&self, fragment: &Fragment) -> Result<()> {
        let mut line = self.renderer.html(fragment);
        line.push('\n');

        let mut file = self.file.lock().await;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }
}

/// Plain-text rendering to a terminal (stdout by default).
pub struct TerminalSink<W = Stdout> {
    renderer: Renderer,
    writer: tokio::sync::Mutex<W>,
}

impl TerminalSink<Stdout> {
    pub fn stdout(renderer: Renderer) -> Self {
        Self::new(tokio::io::stdout(), renderer)
    }
}

impl<W> TerminalSink<W>
where
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(writer: W, renderer: Renderer) -> Self {
        Self {
            renderer,
            writer: tokio::sync::Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

#[async_trait]
impl<W> OutputSink for TerminalSink<W>
where
    W: AsyncWrite + Unpin + Send,
{
    async fn append(&self, fragment: &Fragment) -> Result<()> {
        let text = self.renderer.text(fragment);
        let mut writer = self.writer.lock().await;
        writer.write_all(text.as_bytes()).await?;
        writer.flush().await?;
        Ok(())
    }
}

/// Forwards every fragment to each inner sink. All sinks are attempted;
/// the first failure is returned.
#[derive(Clone, Default)]
pub struct FanoutSink {
    sinks: Vec<Arc<dyn OutputSink>>,
}

impl FanoutSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, sink: Arc<dyn OutputSink>) -> Self {
        self.sinks.push(sink);
        self
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

#[async_trait]
impl OutputSink for FanoutSink {
    async fn append(&self, fragment: &Fragment) -> Result<()> {
        let mut first_error = None;
        for sink in &self.sinks {
            if let Err(e) = sink.append(fragment).await {
                warn!("Output sink failed: {}", e);
                first_error.get_or_insert(e);
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
