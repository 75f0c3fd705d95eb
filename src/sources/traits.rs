use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Invalid endpoint: {0}")]
    InvalidUrl(String),

    #[error("Request failed: {0}")]
    Request(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait HttpTransport: Send + Sync {
    /// Issue a single GET with the given query parameters.
    /// Non-2xx statuses are returned as responses, not errors.
    fn get(&self, url: &str, params: &[(String, String)]) -> Result<HttpResponse, TransportError>;
}
