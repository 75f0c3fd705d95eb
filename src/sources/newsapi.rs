use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::domain::{Article, SourceInfo};
use crate::errors::{HeadlinesError, HeadlinesResult};

pub const API_KEY_PARAM: &str = "apiKey";

/// Connection settings for a NewsAPI-compatible provider, injected into the
/// fetcher once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsApiConfig {
    base_url: String,
    api_key: Option<String>,
}

impl NewsApiConfig {
    pub fn new(base_url: &str, api_key: Option<String>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    pub fn api_key(&self) -> HeadlinesResult<&str> {
        self.api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or(HeadlinesError::ConfigurationMissing)
    }

    pub fn headlines_url(&self) -> String {
        format!("{}/top-headlines", self.base_url)
    }

    pub fn sources_url(&self) -> String {
        format!("{}/top-headlines/sources", self.base_url)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct HeadlinesEnvelope {
    #[serde(default)]
    pub articles: Option<Vec<Article>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SourcesEnvelope {
    #[serde(default)]
    pub sources: Option<Vec<SourceInfo>>,
}

/// Decode a provider body. An empty body or a JSON `null` decodes to the
/// envelope's default (no results).
pub fn decode_envelope<T>(body: &str) -> Result<T, serde_json::Error>
where
    T: DeserializeOwned + Default,
{
    if body.trim().is_empty() {
        return Ok(T::default());
    }

    match serde_json::from_str::<serde_json::Value>(body)? {
        serde_json::Value::Null => Ok(T::default()),
        value => serde_json::from_value(value),
    }
}
