use log::LevelFilter;
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::json::JsonEncoder,
};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, Context as _, Result};
use once_cell::sync::OnceCell;

use crate::config::LoggingConfig;

pub struct Logger;

pub static LOGGER_ENABLED: OnceCell<bool> = OnceCell::new();

const DEFAULT_LOG_PATH: &str = "cluster-gateway.log";

#[macro_export]
macro_rules! logger {
    ($level:ident, $($arg:tt)+) => {
        if let Some(true) = $crate::logging::LOGGER_ENABLED.get() {
            ::log::$level!($($arg)+);
        }
    };
}

impl Logger {
    /// Installs a JSON file logger. Records emitted through `logger!` are dropped until this succeeds.
    pub fn init(config: &LoggingConfig) -> Result<()> {
        let level_filter = level_filter(config)?;

        let log_path = log_path(config);

        let logfile = FileAppender::builder()
            .append(false)
            .encoder(Box::new(JsonEncoder::new()))
            .build(&log_path)
            .with_context(|| format!("failed to open log file {}", log_path.display()))?;

        let config = Config::builder()
            .appender(Appender::builder().build("logfile", Box::new(logfile)))
            .build(Root::builder().appender("logfile").build(level_filter))?;

        log4rs::init_config(config)?;

        LOGGER_ENABLED
            .set(true)
            .map_err(|_| anyhow!("logger is already enabled"))?;

        Ok(())
    }
}

fn level_filter(config: &LoggingConfig) -> Result<LevelFilter> {
    let level = match &config.level {
        Some(level) => level.clone(),
        None => env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
    };

    LevelFilter::from_str(&level).with_context(|| format!("invalid log level: {}", level))
}

fn log_path(config: &LoggingConfig) -> PathBuf {
    config
        .path
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("trace", LevelFilter::Trace)]
    #[case("DEBUG", LevelFilter::Debug)]
    #[case("off", LevelFilter::Off)]
    fn level_from_config(#[case] level: &str, #[case] expected: LevelFilter) {
        let config = LoggingConfig {
            level: Some(level.into()),
            ..Default::default()
        };

        assert_eq!(level_filter(&config).unwrap(), expected);
    }

    #[test]
    fn invalid_level_is_error() {
        let config = LoggingConfig {
            level: Some("loud".into()),
            ..Default::default()
        };

        assert!(level_filter(&config).is_err());
        assert!(Logger::init(&config).is_err());
    }

    #[rstest]
    #[case(None, "cluster-gateway.log")]
    #[case(Some("/var/log/gw.log"), "/var/log/gw.log")]
    fn path_from_config(#[case] path: Option<&str>, #[case] expected: &str) {
        let config = LoggingConfig {
            path: path.map(PathBuf::from),
            ..Default::default()
        };

        assert_eq!(log_path(&config), PathBuf::from(expected));
    }
}
