//! simplelog setup for the terminal host.
//!
//! The rendered view owns stdout, so terminal logging always goes to stderr.

use std::fs::File;
use std::path::Path;

use anyhow::Context;
use log::LevelFilter;
use serde::Deserialize;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
pub enum LogDestination {
    /// The configured log file only.
    #[default]
    File,
    /// stderr only.
    Terminal,
    Both,
    Off,
}

impl LogDestination {
    fn writes_terminal(self) -> bool {
        matches!(self, Self::Terminal | Self::Both)
    }

    fn writes_file(self) -> bool {
        matches!(self, Self::File | Self::Both)
    }
}

/// Installs the global logger. The log file is truncated on every start.
pub fn initialize(
    destination: LogDestination,
    level: LevelFilter,
    log_file: &Path,
) -> anyhow::Result<()> {
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build();
    let loggers = build_loggers(destination, level, &config, log_file)?;
    if loggers.is_empty() {
        return Ok(());
    }
    // A logger may already be installed when running under a test harness.
    let _ = CombinedLogger::init(loggers);
    Ok(())
}

fn build_loggers(
    destination: LogDestination,
    level: LevelFilter,
    config: &Config,
    log_file: &Path,
) -> anyhow::Result<Vec<Box<dyn SharedLogger>>> {
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    if destination.writes_terminal() {
        loggers.push(TermLogger::new(
            level,
            config.clone(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ));
    }
    if destination.writes_file() {
        let file = File::create(log_file)
            .with_context(|| format!("creating log file {}", log_file.display()))?;
        loggers.push(WriteLogger::new(level, config.clone(), file));
    }
    Ok(loggers)
}
