//! Matrix store module
//!
//! Owns the named matrices and the active CFA pattern, and keeps them in sync
//! with an external key-value settings store.

mod backend;
mod config;
mod json_file_store;
mod matrix_store;
mod memory_store;
mod properties;


pub use backend::KeyValueStore;
pub use config::{CorrectionConfig, CorrectionSnapshot, StoreConfig, StoreConfigBuilder};
pub use json_file_store::JsonFileStore;
pub use matrix_store::MatrixStore;
pub use memory_store::MemoryStore;
pub use properties::Properties;
