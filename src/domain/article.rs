use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::null_as_default;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSource {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

/// A single headline. `url` identifies the article everywhere in the crate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    pub url: String,
    #[serde(default)]
    pub url_to_image: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub published_at: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub source: ArticleSource,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
}

impl Article {
    pub fn new(url: String, title: String) -> Self {
        Self {
            url,
            title,
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: String) -> Self {
        self.description = description;
        self
    }

    pub fn with_source(mut self, id: String, name: String) -> Self {
        self.source = ArticleSource { id, name };
        self
    }

    pub fn with_published_at(mut self, published_at: String) -> Self {
        self.published_at = published_at;
        self
    }

    pub fn with_image(mut self, url_to_image: Option<String>) -> Self {
        self.url_to_image = url_to_image;
        self
    }

    /// Parsed `publishedAt`, if the provider sent a valid RFC 3339 timestamp
    pub fn published(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.published_at)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}
