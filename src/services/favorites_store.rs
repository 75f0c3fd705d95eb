use crate::diagnostics::{DiagnosticEvent, DiagnosticSink, TracingSink};
use crate::domain::Article;
use crate::storage::KeyValueStorage;

/// Storage key holding the JSON array of favorite articles.
pub const FAVORITES_KEY: &str = "favorites";

/// Saved articles, in insertion order, kept under a single storage key.
///
/// Nothing here returns an error: unavailable storage reads as empty and
/// ignores writes, and a corrupted blob reads as empty. A value that cannot
/// be read at all is listed as empty and never written over. Every call re-reads
/// the key, so callers refresh their copy with [`FavoritesStore::list`]
/// after mutating.
pub struct FavoritesStore<S: KeyValueStorage, D: DiagnosticSink = TracingSink> {
    storage: S,
    sink: D,
}

impl<S: KeyValueStorage> FavoritesStore<S, TracingSink> {
    pub fn new(storage: S) -> Self {
        Self::with_sink(storage, TracingSink)
    }
}

impl<S: KeyValueStorage, D: DiagnosticSink> FavoritesStore<S, D> {
    pub fn with_sink(storage: S, sink: D) -> Self {
        Self { storage, sink }
    }

    pub fn is_available(&self) -> bool {
        self.storage.probe()
    }

    pub fn list(&self) -> Vec<Article> {
        if !self.is_available() {
            return Vec::new();
        }
        self.read().unwrap_or_default()
    }

    /// Append an article. Duplicates are not filtered here; check with
    /// [`FavoritesStore::is_favorite`] first.
    pub fn add(&self, article: &Article) {
        if !self.is_available() {
            return;
        }

        let Some(mut current) = self.read() else {
            return;
        };
        current.push(article.clone());
        self.persist(&current);
    }

    /// Drop every entry with this url.
    pub fn remove(&self, url: &str) {
        if !self.is_available() {
            return;
        }

        let Some(mut current) = self.read() else {
            return;
        };
        let before = current.len();
        current.retain(|a| a.url != url);
        if current.len() != before {
            self.persist(&current);
        }
    }

    pub fn is_favorite(article: &Article, collection: &[Article]) -> bool {
        collection.iter().any(|a| a.url == article.url)
    }

    /// Save the article if it is not a favorite yet, otherwise remove it.
    /// Returns whether it is a favorite afterwards.
    pub fn toggle(&self, article: &Article) -> bool {
        if !self.is_available() {
            return false;
        }

        let Some(mut current) = self.read() else {
            return false;
        };
        let was_favorite = Self::is_favorite(article, &current);
        if was_favorite {
            current.retain(|a| a.url != article.url);
        } else {
            current.push(article.clone());
        }

        if self.persist(&current) {
            !was_favorite
        } else {
            was_favorite
        }
    }

    /// Stored favorites without probing again. `None` when the key could not
    /// be read, so callers never overwrite data they did not see. A corrupted
    /// blob reads as an empty collection.
    fn read(&self) -> Option<Vec<Article>> {
        let stored = match self.storage.get(FAVORITES_KEY) {
            Ok(Some(stored)) if !stored.trim().is_empty() => stored,
            Ok(_) => return Some(Vec::new()),
            Err(e) => {
                self.sink.record(DiagnosticEvent::StorageReadFailed {
                    cause: e.to_string(),
                });
                return None;
            }
        };

        match serde_json::from_str(&stored) {
            Ok(articles) => Some(articles),
            Err(e) => {
                self.sink.record(DiagnosticEvent::FavoritesCorrupted {
                    cause: e.to_string(),
                });
                Some(Vec::new())
            }
        }
    }

    fn persist(&self, articles: &[Article]) -> bool {
        let result = serde_json::to_string(articles)
            .map_err(|e| e.to_string())
            .and_then(|json| {
                self.storage
                    .set(FAVORITES_KEY, &json)
                    .map_err(|e| e.to_string())
            });

        match result {
            Ok(()) => true,
            Err(cause) => {
                self.sink.record(DiagnosticEvent::StorageWriteFailed { cause });
                false
            }
        }
    }
}
