pub mod memory;
pub mod sqlite;
pub mod traits;

pub use memory::MemoryStorage;
pub use sqlite::{SqliteKeyValueStorage, SqliteStorage};
pub use traits::{KeyValueStorage, PROBE_KEY};
