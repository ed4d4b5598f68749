use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{ArgAction, Parser};

use crate::api::HttpSlackApi;
use crate::api::client::DEFAULT_API_URL;
use crate::config::{DEFAULT_ARCHIVE_NAME, DEFAULT_TIMEOUT_SECS, ExportConfig};
use crate::error::ConfigError;
use crate::export::export_workspace;
use crate::rooms::RoomSelection;
use crate::utils::init_logging;

#[derive(Parser, Debug)]
#[command(name = "slack-dump")]
#[command(version = "0.1.0")]
#[command(about = "Export channel and group history to the Slack export format", long_about = None)]
pub struct Cli {
    /// A Slack API token (see: https://api.slack.com/web)
    #[arg(short, long, env = "SLACK_API_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Path of the zip archive to write
    #[arg(short, long, default_value = DEFAULT_ARCHIVE_NAME)]
    pub output: PathBuf,

    /// Slack Web API base URL
    #[arg(long, env = "SLACK_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Keep the working directory after the archive is written
    #[arg(long)]
    pub keep_dir: bool,

    /// Create the working directory inside DIR instead of the system temp dir
    #[arg(long, value_name = "DIR")]
    pub work_dir: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only export the channels and groups with these exact names
    pub rooms: Vec<String>,
}

impl Cli {
    pub fn to_config(&self) -> Result<ExportConfig, ConfigError> {
        Ok(ExportConfig::new(self.token.clone())?
            .with_rooms(RoomSelection::new(self.rooms.iter().cloned()))
            .with_output(&self.output)
            .with_api_url(&self.api_url)?
            .with_timeout(Duration::from_secs(self.timeout))
            .with_keep_dir(self.keep_dir)
            .with_work_root(self.work_dir.clone()))
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.to_config()?;
    let api = HttpSlackApi::new(&config.token, &config.api_url, config.timeout)?;
    export_workspace(&api, &config)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rooms_and_flags() {
        let cli = Cli::try_parse_from([
            "slack-dump",
            "--token",
            "xoxp-1",
            "-o",
            "out.zip",
            "--timeout",
            "5",
            "-vv",
            "--work-dir",
            "scratch",
            "general",
            "random",
        ])
        .unwrap();

        assert_eq!(cli.rooms, vec!["general", "random"]);
        assert_eq!(cli.verbose, 2);

        let config = cli.to_config().unwrap();
        assert_eq!(config.token, "xoxp-1");
        assert_eq!(config.output, PathBuf::from("out.zip"));
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.work_root, Some(PathBuf::from("scratch")));
        assert!(config.rooms.matches("general"));
        assert!(!config.rooms.matches("dev"));
    }

    #[test]
    fn test_missing_token_is_config_error() {
        let cli = Cli {
            token: None,
            output: PathBuf::from(DEFAULT_ARCHIVE_NAME),
            api_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
            keep_dir: false,
            work_dir: None,
            verbose: 0,
            rooms: Vec::new(),
        };
        assert!(matches!(cli.to_config(), Err(ConfigError::MissingToken)));
    }
}
