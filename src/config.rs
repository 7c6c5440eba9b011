use clap::Parser;
use log::LevelFilter;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::File;
use std::path::PathBuf;
use thiserror::Error;

/// Card-draw initiative tracker for tabletop combat.
#[derive(Debug, Parser)]
#[command(name = "cardpal", version, about)]
pub struct Config {
    /// Seat an actor in the first row (repeatable)
    #[arg(short, long = "actor", value_name = "NAME")]
    pub actors: Vec<String>,

    /// Seed the shuffle for a reproducible session
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write logs to this file (the terminal is taken by the UI)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[arg(long, default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,

    /// Show face-down cards dimmed instead of as card backs
    #[arg(long)]
    pub debug: bool,
}

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("cannot open log file: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

impl Config {
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Installs a file logger when a log file is configured. Without one no
    /// logger is installed and log macros are no-ops.
    pub fn init_logging(&self) -> Result<(), LoggingError> {
        let Some(path) = &self.log_file else {
            return Ok(());
        };
        let config = simplelog::ConfigBuilder::new()
            .set_location_level(LevelFilter::Off)
            .set_target_level(LevelFilter::Off)
            .set_thread_level(LevelFilter::Off)
            .build();
        simplelog::WriteLogger::init(self.log_level, config, File::create(path)?)?;
        Ok(())
    }
}
