use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use vibe_core::page::PageOptions;

use crate::error::{Result, VibeError};

pub const DEFAULT_PORT: u16 = 8080;

/// Server settings, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    pub port: u16,
    pub static_dir: PathBuf,
    /// Relative to `static_dir`.
    pub config_file: PathBuf,
    pub page: PageOptions,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            static_dir: PathBuf::from("static"),
            config_file: PathBuf::from("config.json"),
            page: PageOptions::default(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();

        // unset and empty are the same thing here
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        if let Some(port) = get("PORT") {
            settings.port = port
                .parse()
                .map_err(|_| VibeError::InvalidSetting("PORT".to_string(), port.clone()))?;
        }

        if let Some(dir) = get("VIBE_STATIC_DIR") {
            settings.static_dir = PathBuf::from(dir);
        }

        if let Some(file) = get("VIBE_CONFIG_FILE") {
            settings.config_file = PathBuf::from(file);
        }

        if let Some(title) = get("VIBE_DEFAULT_TITLE") {
            settings.page.default_title = title;
        }

        if let Some(value) = get("VIBE_REPOSITORIES") {
            settings.page.show_repositories = parse_flag("VIBE_REPOSITORIES", &value)?;
        }

        if let Some(value) = get("VIBE_REPO_SEARCH") {
            settings.page.repository_search = parse_flag("VIBE_REPO_SEARCH", &value)?;
        }

        Ok(settings)
    }

    pub fn config_path(&self) -> PathBuf {
        self.static_dir.join(&self.config_file)
    }

    pub fn address(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

fn parse_flag(name: &str, value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(VibeError::InvalidSetting(name.to_string(), value.to_string()).into()),
    }
}
