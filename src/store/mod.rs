pub mod blob;

pub use blob::{load_json, persist_json, StoreError};
