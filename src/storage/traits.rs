use crate::errors::HeadlinesResult;

/// Disposable key written and deleted by [`KeyValueStorage::probe`].
pub const PROBE_KEY: &str = "__test__";

/// String key-value storage, the local equivalent of a browser's storage area.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStorage: Send + Sync {
    fn get(&self, key: &str) -> HeadlinesResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> HeadlinesResult<()>;
    fn remove(&self, key: &str) -> HeadlinesResult<()>;

    /// Whether the storage accepts writes right now. Never fails.
    fn probe(&self) -> bool {
        self.set(PROBE_KEY, PROBE_KEY).is_ok() && self.remove(PROBE_KEY).is_ok()
    }
}
