use crate::constants::{
    DEFAULT_MARKER_PHRASE, DEFAULT_NODE_URL, DEFAULT_POLL_INTERVAL_SECS,
    DEFAULT_REQUEST_TIMEOUT_SECS,
};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Node whose peer list is used for every poll cycle
    pub node_url: String,
    pub poll_interval_secs: u64,
    pub request_timeout_secs: u64,
    pub marker_phrase: String,
    /// Bind address of the dashboard, it's not started when empty
    pub http_address: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            node_url: DEFAULT_NODE_URL.to_string(),
            poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            marker_phrase: DEFAULT_MARKER_PHRASE.to_string(),
            http_address: None,
        }
    }
}

pub fn load_config(file_path: &str) -> Result<Config, ConfigError> {
    let mut file = File::open(file_path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> Result<Config, ConfigError> {
    Ok(serde_yaml::from_str(contents)?)
}
