//! Runtime configuration and logging setup.
//!
//! Values come from the environment, after loading a `.env` file if present.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const ENV_LOG_CONFIG: &str = "SUBNET_REACH_LOG_CONFIG";
pub const ENV_LOG_LEVEL: &str = "SUBNET_REACH_LOG_LEVEL";

const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// log4rs YAML file, used when it exists.
    pub log_config: PathBuf,
    /// Level of the fallback console logger.
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_config: PathBuf::from(DEFAULT_LOG_CONFIG),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl Config {
    /// Load `.env` and read the configuration from the process environment.
    pub fn from_env() -> Config {
        dotenv::dotenv().ok();
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let default = Config::default();
        let log_config = lookup(ENV_LOG_CONFIG)
            .map(PathBuf::from)
            .unwrap_or(default.log_config);
        let log_level = match lookup(ENV_LOG_LEVEL) {
            Some(level) => LevelFilter::from_str(&level).unwrap_or_else(|_| {
                eprintln!("Ignoring invalid {ENV_LOG_LEVEL}={level}, using {DEFAULT_LOG_LEVEL}");
                DEFAULT_LOG_LEVEL
            }),
            None => default.log_level,
        };
        Config {
            log_config,
            log_level,
        }
    }
}

/// Initialise log4rs from the configured file, or a stderr logger if it is missing.
pub fn init_logging(config: &Config) -> Result<(), Box<dyn Error>> {
    if Path::new(&config.log_config).exists() {
        log4rs::init_file(&config.log_config, Default::default())?;
        log::info!("Logging configured from {}", config.log_config.display());
        return Ok(());
    }

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {h({l})} {t} - {m}{n}")))
        .build();
    let log_config = log4rs::config::Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(config.log_level))?;
    log4rs::init_config(log_config)?;
    log::warn!(
        "Log config {} not found, logging to stderr at {}",
        config.log_config.display(),
        config.log_level
    );
    Ok(())
}
