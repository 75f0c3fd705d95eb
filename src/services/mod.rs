pub mod favorites_store;
pub mod headline_fetcher;

pub use favorites_store::{FavoritesStore, FAVORITES_KEY};
pub use headline_fetcher::HeadlineFetcher;
