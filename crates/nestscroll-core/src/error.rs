use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid scene: {0}")]
    Scene(String),

    #[error("Node not found: {0}")]
    UnknownNode(String),

    #[error("Host rejected scroll write: {0}")]
    Host(String),
}

pub type Result<T> = std::result::Result<T, Error>;
