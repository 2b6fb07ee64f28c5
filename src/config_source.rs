use std::future::Future;
use std::path::PathBuf;

use vibe_core::configuration::Configuration;
use vibe_core::error::{DirectoryError, Result};

/// Where the configuration document comes from.
pub trait ConfigSource {
    /// Raw bytes of the document. Any transport failure is a `ConfigLoad`.
    fn fetch(&self) -> impl Future<Output = Result<Vec<u8>>> + Send;
}

/// The document as a file in the served static directory.
#[derive(Debug, Clone)]
pub struct StaticFileSource {
    path: PathBuf,
}

impl StaticFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ConfigSource for StaticFileSource {
    async fn fetch(&self) -> Result<Vec<u8>> {
        tracing::trace!("Reading configuration from {}", self.path.display());

        tokio::fs::read(&self.path)
            .await
            .map_err(|e| DirectoryError::ConfigLoad(format!("{}: {e}", self.path.display())))
    }
}

/// Fetches and parses the document. Nothing is cached, every call goes back
/// to the source.
pub async fn load_config<S: ConfigSource>(source: &S) -> Result<Configuration> {
    let body = source.fetch().await?;
    Configuration::from_slice(&body)
}
