use reqwest::blocking::Client;
use url::Url;

use crate::sources::traits::{HttpResponse, HttpTransport, TransportError};

const USER_AGENT: &str = concat!("headlines/", env!("CARGO_PKG_VERSION"));

/// Blocking reqwest client. Uses reqwest's default timeout and never retries.
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .user_agent(USER_AGENT)
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

/// The URL of a failed request carries the credential, so it is stripped.
fn request_error(err: reqwest::Error) -> TransportError {
    TransportError::Request(err.without_url().to_string())
}

impl HttpTransport for ReqwestTransport {
    fn get(&self, url: &str, params: &[(String, String)]) -> Result<HttpResponse, TransportError> {
        let url = Url::parse(url).map_err(|e| TransportError::InvalidUrl(e.to_string()))?;

        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .map_err(request_error)?;

        let status = response.status().as_u16();
        let body = response.text().map_err(request_error)?;

        Ok(HttpResponse { status, body })
    }
}
