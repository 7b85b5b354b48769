use std::path::PathBuf;

use crate::error::Result;
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::logger;

#[derive(Debug, Default, PartialEq)]
pub enum ConfigLoadOption {
    #[default]
    Default,

    Path(PathBuf),
}

impl ConfigLoadOption {
    /// Picks the config file under the XDG config directory when one exists.
    pub fn detect() -> Self {
        let Some(path) = config_home().map(|dir| dir.join("config.yaml")) else {
            return ConfigLoadOption::Default;
        };

        match path.try_exists() {
            Ok(true) => ConfigLoadOption::Path(path),
            Ok(false) => ConfigLoadOption::Default,
            Err(err) => {
                logger!(warn, "Failed to check config file exists: {}", err);

                ConfigLoadOption::Default
            }
        }
    }
}

#[derive(Default, Debug, PartialEq, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub path: Option<PathBuf>,
}

#[derive(Default, Debug, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    pub fn load(option: ConfigLoadOption) -> Result<Self> {
        let figment = Figment::new();

        let config = match option {
            ConfigLoadOption::Default => figment.merge(Serialized::defaults(Self::default())),
            ConfigLoadOption::Path(path) => figment
                .merge(Serialized::defaults(Self::default()))
                .merge(Yaml::file(path)),
        }
        .merge(Env::prefixed("CLUSTER_GATEWAY_").split("__"))
        .extract_lossy()?;

        Ok(config)
    }
}

fn config_home() -> Option<PathBuf> {
    match std::env::var_os("XDG_CONFIG_HOME") {
        Some(dir) => Some(PathBuf::from(dir).join("cluster-gateway")),
        None => dirs::home_dir().map(|home| home.join(".config").join("cluster-gateway")),
    }
}
