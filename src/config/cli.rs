use crate::core::DigestSink;
use crate::utils::error::Result;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Writes the digest to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl DigestSink for StdoutSink {
    async fn write_digest(&self, rendered: &str) -> Result<String> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(rendered.as_bytes())?;
        if !rendered.ends_with('\n') {
            handle.write_all(b"\n")?;
        }
        handle.flush()?;
        Ok("stdout".to_string())
    }
}

/// Writes the digest to a file, creating parent directories as needed.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DigestSink for FileSink {
    async fn write_digest(&self, rendered: &str) -> Result<String> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(&self.path, rendered).await?;
        Ok(self.path.to_string_lossy().to_string())
    }
}

/// Either sink, picked at startup from the configuration.
#[derive(Debug, Clone)]
pub enum OutputSink {
    Stdout(StdoutSink),
    File(FileSink),
}

impl OutputSink {
    pub fn from_path(path: Option<&str>) -> Self {
        match path {
            Some(path) => OutputSink::File(FileSink::new(path)),
            None => OutputSink::Stdout(StdoutSink),
        }
    }
}

impl DigestSink for OutputSink {
    async fn write_digest(&self, rendered: &str) -> Result<String> {
        match self {
            OutputSink::Stdout(sink) => sink.write_digest(rendered).await,
            OutputSink::File(sink) => sink.write_digest(rendered).await,
        }
    }
}
