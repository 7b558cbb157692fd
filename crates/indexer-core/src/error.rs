use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid management API endpoint '{0}'")]
    InvalidEndpoint(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Indexer management API error: {0}")]
    Api(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error")]
    Serialization(#[from] serde_json::Error),
}
