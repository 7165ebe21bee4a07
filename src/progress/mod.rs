//! Persisted progress: records, stores, and resumability validation.

pub mod record;
pub mod store;
pub mod validator;

pub use record::SavedRecord;
pub use store::{FileStore, MemoryStore, ProgressStore, StoreError};
pub use validator::is_resumable;
