//! Run configuration assembled from command-line flags and environment variables

use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;
use crate::rooms::RoomSelection;

pub const DEFAULT_ARCHIVE_NAME: &str = "slackdump.zip";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub token: String,
    pub rooms: RoomSelection,
    /// Archive destination
    pub output: PathBuf,
    pub api_url: String,
    pub timeout: Duration,
    /// Keep the working directory after the archive is written
    pub keep_dir: bool,
    /// Parent of the working directory, the system temp dir when unset
    pub work_root: Option<PathBuf>,
}

impl ExportConfig {
    /// Config with defaults for everything but the token
    pub fn new(token: Option<String>) -> Result<Self, ConfigError> {
        let token = token.map(|t| t.trim().to_string()).unwrap_or_default();
        if token.is_empty() {
            return Err(ConfigError::MissingToken);
        }

        Ok(Self {
            token,
            rooms: RoomSelection::all(),
            output: PathBuf::from(DEFAULT_ARCHIVE_NAME),
            api_url: crate::api::client::DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            keep_dir: false,
            work_root: None,
        })
    }

    pub fn with_rooms(mut self, rooms: RoomSelection) -> Self {
        self.rooms = rooms;
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_api_url(mut self, api_url: &str) -> Result<Self, ConfigError> {
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(ConfigError::InvalidApiUrl(api_url.to_string()));
        }
        self.api_url = api_url.to_string();
        Ok(self)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_keep_dir(mut self, keep_dir: bool) -> Self {
        self.keep_dir = keep_dir;
        self
    }

    pub fn with_work_root(mut self, work_root: Option<PathBuf>) -> Self {
        self.work_root = work_root;
        self
    }
}
