//! Storage layer for focuswave.
//!
//! A key-value seam with a SQLite implementation for real runs and an
//! in-memory one for tests.

mod database;
mod kv;
mod migrations;

pub use database::Database;
pub use kv::{KeyValueStore, MemoryStore};
