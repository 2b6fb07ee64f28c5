use thiserror::Error;

pub type Result<T> = std::result::Result<T, DirectoryError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// The reason is kept for logs only, the page shows the generic message.
    #[error("Configuration error: Failed to load configuration file")]
    ConfigLoad(String),
    #[error("Configuration error: {0}")]
    ConfigParse(String),
    #[error("No projects found in configuration")]
    NoProjects,
}

impl From<serde_json::Error> for DirectoryError {
    fn from(e: serde_json::Error) -> Self {
        DirectoryError::ConfigParse(e.to_string())
    }
}
