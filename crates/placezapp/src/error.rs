use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlacezError {
    #[error("Place not found: {0}")]
    PlaceNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    Invalid(String),

    #[error("Not logged in. Run `placez login <username>` first")]
    NotLoggedIn,

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, PlacezError>;
