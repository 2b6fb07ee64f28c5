use thiserror::Error;

pub type Result<T> = anyhow::Result<T>;

#[derive(Error, Debug)]
pub enum VibeError {
    #[error("Invalid value {1:?} for setting {0}")]
    InvalidSetting(String, String),
}
