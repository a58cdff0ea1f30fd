//! Command-line flags layered over an optional RON config file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context};
use chunker_engine::ClientSettings;
use clap::Parser;
use log::LevelFilter;
use serde::Deserialize;

use super::logging::LogDestination;

const DEFAULT_CONFIG_FILENAME: &str = "chunker.ron";
const DEFAULT_LOG_FILENAME: &str = "chunker.log";

#[derive(Debug, Parser)]
#[command(
    name = "chunker",
    about = "Upload a document, search it, and ask for summaries or follow-up questions."
)]
pub struct Args {
    /// RON config file. Defaults to ./chunker.ron when it exists.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Backend base URL, e.g. http://127.0.0.1:8000.
    #[arg(long)]
    pub backend_url: Option<String>,
    /// Where log output goes.
    #[arg(long, value_enum)]
    pub log: Option<LogDestination>,
    /// Log at debug level.
    #[arg(long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub backend_url: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub log: LogDestination,
    pub log_file: PathBuf,
    #[serde(skip)]
    pub verbose: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        let settings = ClientSettings::default();
        Self {
            backend_url: settings.base_url,
            connect_timeout_secs: settings.connect_timeout.as_secs(),
            request_timeout_secs: settings.request_timeout.as_secs(),
            log: LogDestination::default(),
            log_file: PathBuf::from(DEFAULT_LOG_FILENAME),
            verbose: false,
        }
    }
}

impl AppConfig {
    /// Reads the config file (explicit or default location), then applies flag overrides.
    pub fn load(args: &Args) -> anyhow::Result<Self> {
        let mut config = match &args.config {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILENAME);
                if default_path.is_file() {
                    Self::from_file(&default_path)?
                } else {
                    Self::default()
                }
            }
        };

        if let Some(url) = &args.backend_url {
            config.backend_url = url.clone();
        }
        if let Some(log) = args.log {
            config.log = log;
        }
        config.verbose = args.verbose;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        if !path.is_file() {
            bail!("config file {} does not exist", path.display());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        ron::from_str(&content).with_context(|| format!("parsing config file {}", path.display()))
    }

    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            base_url: self.backend_url.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            ..ClientSettings::default()
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}
