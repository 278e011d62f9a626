use thiserror::Error;

#[derive(Error, Debug)]
pub enum PollerError {
    #[error("Peer discovery failed: {status}")]
    Discovery { status: String },
    #[error("Polling peer {peer} failed: {reason}")]
    PeerPoll { peer: String, reason: String },
    #[error("Request to {url} returned {status}")]
    Status { url: String, status: String },
    #[error("Http Error: {source}")]
    Http {
        #[from]
        source: reqwest::Error,
    },
    #[error("Invalid node address: {0}")]
    Url(String),
    #[error("I/O Error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("Poller task stopped: {source}")]
    Task {
        #[from]
        source: tokio::task::JoinError,
    },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read configuration file: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("Invalid configuration: {source}")]
    Yaml {
        #[from]
        source: serde_yaml::Error,
    },
}
