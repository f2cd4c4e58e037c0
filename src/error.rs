use crate::api::request::RequestError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("Please use Riot ID format: GameName#TAG")]
    InvalidRiotId,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("{0}")]
    Lookup(String),

    #[error("{0}")]
    Contact(String),

    #[error("{0}")]
    Network(String),

    #[error(transparent)]
    Request(#[from] RequestError),

    #[error("JSON parsing error: {0}")]
    JsonError(String),
}
