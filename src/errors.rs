use thiserror::Error;

#[derive(Error, Debug)]
pub enum PayError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Config error: {0}")]
    Config(String),
}

/// pay-button specific Result type. Returns a result with a PayError.
pub type PayResult<T> = Result<T, PayError>;
