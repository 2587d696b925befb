use crate::services::display_order::{PriorityKeywordTable, DEFAULT_DISPLAY_ORDER};
use std::env;
use std::fs;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a valid integer: {source}")]
    InvalidEnv {
        var: &'static str,
        source: std::num::ParseIntError,
    },
    #[error("failed to read display order table {path}: {source}")]
    TableIo {
        path: String,
        source: std::io::Error,
    },
    #[error("malformed display order table {path}: {source}")]
    TableFormat {
        path: String,
        source: serde_json::Error,
    },
    #[error("display order table {path} contains an empty keyword group")]
    EmptyKeywordGroup { path: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub feed: FeedConfig,
    pub usage: UsageConfig,
    /// Optional JSON file (array of arrays of alias strings) overriding the
    /// built-in display-order table.
    pub display_order_table_path: Option<String>,
}

#[derive(Debug, Clone)]
pub struct FeedConfig {
    pub slider_limit: usize,
}

#[derive(Debug, Clone)]
pub struct UsageConfig {
    pub chat_usage_limit: usize,
    pub chat_usage_window_hours: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        Ok(Config {
            feed: FeedConfig {
                slider_limit: parse_var("HOME_SLIDER_LIMIT", 8)?,
            },
            usage: UsageConfig {
                chat_usage_limit: parse_var("CHAT_USAGE_LIMIT", 30)?,
                chat_usage_window_hours: parse_var("CHAT_USAGE_WINDOW_HOURS", 24)?,
            },
            display_order_table_path: env::var("DISPLAY_ORDER_TABLE").ok(),
        })
    }

    /// The business display-order table: the configured file when set, the
    /// built-in table otherwise.
    pub fn display_order_table(&self) -> Result<PriorityKeywordTable, ConfigError> {
        match &self.display_order_table_path {
            Some(path) => load_display_order_table(path),
            None => Ok(DEFAULT_DISPLAY_ORDER.clone()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feed: FeedConfig { slider_limit: 8 },
            usage: UsageConfig {
                chat_usage_limit: 30,
                chat_usage_window_hours: 24,
            },
            display_order_table_path: None,
        }
    }
}

fn parse_var<T>(var: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr<Err = std::num::ParseIntError>,
{
    match env::var(var) {
        Ok(value) => value
            .parse()
            .map_err(|source| ConfigError::InvalidEnv { var, source }),
        Err(_) => Ok(default),
    }
}

/// Load a display-order table from a JSON file. Group order is significant;
/// empty groups are rejected because they could never match anything.
pub fn load_display_order_table(path: &str) -> Result<PriorityKeywordTable, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::TableIo {
        path: path.to_string(),
        source,
    })?;

    let groups: Vec<Vec<String>> =
        serde_json::from_str(&raw).map_err(|source| ConfigError::TableFormat {
            path: path.to_string(),
            source,
        })?;

    if groups.iter().any(|g| g.is_empty()) {
        return Err(ConfigError::EmptyKeywordGroup {
            path: path.to_string(),
        });
    }

    Ok(PriorityKeywordTable::new(groups))
}
