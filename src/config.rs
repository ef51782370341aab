use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::LevelFilter;
use secrecy::SecretString;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::model::event::Coordinates;
use crate::utils::constants::DEFAULT_AVERAGE_SPEED_KMH;

pub const CONFIG_PATH_ENV: &str = "BOT_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("missing required setting: {0}")]
    Missing(&'static str),

    #[error("api id must be a positive integer, got {0:?}")]
    InvalidApiId(String),

    #[error("invalid url in {field}: {source}")]
    InvalidUrl {
        field: &'static str,
        source: url::ParseError,
    },

    #[error("unknown log level {0:?}")]
    InvalidLogLevel(String),

    #[error("average speed must be positive, got {0}")]
    InvalidSpeed(f64),
}

/// Settings read once at startup and shared read-only with every handler.
#[derive(Debug)]
pub struct BotConfig {
    pub telegram: TelegramConfig,
    pub webapp: WebAppConfig,
    pub dispatch: Option<DispatchConfig>,
    pub logging: LoggingConfig,
}

#[derive(Debug)]
pub struct TelegramConfig {
    pub api_id: i32,
    /// Validated for MTProto deployments; the Bot API transport only uses `bot_token`.
    pub api_hash: SecretString,
    pub bot_token: SecretString,
}

#[derive(Debug)]
pub struct WebAppConfig {
    pub url: Url,
    pub driver_url: Option<Url>,
}

impl WebAppConfig {
    pub fn driver_url(&self) -> &Url {
        self.driver_url.as_ref().unwrap_or(&self.url)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct DispatchConfig {
    #[serde(flatten)]
    pub origin: Coordinates,
    #[serde(default = "default_average_speed")]
    pub average_speed_kmh: f64,
}

#[derive(Debug)]
pub struct LoggingConfig {
    pub level: LevelFilter,
    pub file: Option<PathBuf>,
}

fn default_average_speed() -> f64 {
    DEFAULT_AVERAGE_SPEED_KMH
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    #[serde(default)]
    telegram: RawTelegram,
    #[serde(default)]
    webapp: RawWebApp,
    dispatch: Option<DispatchConfig>,
    #[serde(default)]
    logging: RawLogging,
}

#[derive(Debug, Default, Deserialize)]
struct RawTelegram {
    api_id: Option<i64>,
    api_hash: Option<String>,
    bot_token: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawWebApp {
    url: Option<String>,
    driver_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawLogging {
    level: Option<String>,
    file: Option<PathBuf>,
}

impl BotConfig {
    /// Reads the file named by `BOT_CONFIG` (or `config.toml`) and applies
    /// environment overrides. A missing file is fine when the environment
    /// supplies every required value.
    pub fn from_env() -> Result<Self, ConfigError> {
        let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
        let path = Path::new(&path);
        let content = if path.exists() {
            std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?
        } else {
            String::new()
        };
        Self::from_toml(&content, |key| std::env::var(key).ok())
    }

    pub fn from_toml(
        content: &str,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(content)?;
        Self::resolve(raw, env)
    }

    fn resolve(raw: RawConfig, env: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_id = match env("TG_API_ID") {
            Some(value) => value
                .trim()
                .parse::<i64>()
                .map_err(|_| ConfigError::InvalidApiId(value.clone()))?,
            None => raw.telegram.api_id.ok_or(ConfigError::Missing("telegram.api_id"))?,
        };
        let api_id = i32::try_from(api_id)
            .ok()
            .filter(|id| *id > 0)
            .ok_or_else(|| ConfigError::InvalidApiId(api_id.to_string()))?;

        let api_hash = env("TG_API_HASH")
            .or(raw.telegram.api_hash)
            .ok_or(ConfigError::Missing("telegram.api_hash"))?;
        let bot_token = env("TELOXIDE_TOKEN")
            .or(raw.telegram.bot_token)
            .ok_or(ConfigError::Missing("telegram.bot_token"))?;

        let url = env("WEBAPP_URL")
            .or(raw.webapp.url)
            .ok_or(ConfigError::Missing("webapp.url"))?;
        let url = parse_url("webapp.url", &url)?;
        let driver_url = env("DRIVER_WEBAPP_URL")
            .or(raw.webapp.driver_url)
            .map(|value| parse_url("webapp.driver_url", &value))
            .transpose()?;

        if let Some(dispatch) = &raw.dispatch {
            if dispatch.average_speed_kmh <= 0.0 || dispatch.average_speed_kmh.is_nan() {
                return Err(ConfigError::InvalidSpeed(dispatch.average_speed_kmh));
            }
        }

        let level = match raw.logging.level {
            Some(level) => {
                LevelFilter::from_str(&level).map_err(|_| ConfigError::InvalidLogLevel(level))?
            }
            None => LevelFilter::Info,
        };

        Ok(BotConfig {
            telegram: TelegramConfig {
                api_id,
                api_hash: SecretString::new(api_hash),
                bot_token: SecretString::new(bot_token),
            },
            webapp: WebAppConfig { url, driver_url },
            dispatch: raw.dispatch,
            logging: LoggingConfig {
                level,
                file: raw.logging.file,
            },
        })
    }
}

fn parse_url(field: &'static str, value: &str) -> Result<Url, ConfigError> {
    Url::parse(value).map_err(|source| ConfigError::InvalidUrl { field, source })
}
