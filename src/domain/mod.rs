pub mod article;
pub mod category;
pub mod query;
pub mod source_info;

pub use article::{Article, ArticleSource};
pub use category::Category;
pub use query::HeadlineQuery;
pub use source_info::SourceInfo;

use serde::{Deserialize, Deserializer};

/// Provider payloads use `null` for missing values; we keep those as defaults.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
