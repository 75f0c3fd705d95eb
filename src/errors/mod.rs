use thiserror::Error;

/// Message shown to the user whenever headlines cannot be fetched,
/// whatever the underlying cause was.
pub const FETCH_FAILURE_MESSAGE: &str = "headlines could not be retrieved, try again later";

#[derive(Error, Debug)]
pub enum HeadlinesError {
    // Configuration errors
    #[error("API_KEY is not defined.")]
    ConfigurationMissing,

    #[error("Configuration error: {0}")]
    Config(String),

    // Remote errors, cause is only reported to diagnostics
    #[error("{}", FETCH_FAILURE_MESSAGE)]
    FetchFailure,

    // Storage errors
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    // User input errors
    #[error("Article not found: {0}")]
    ArticleNotFound(String),
}

pub type HeadlinesResult<T> = Result<T, HeadlinesError>;
