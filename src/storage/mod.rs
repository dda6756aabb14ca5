//! Storage layer for the moneyball ETL pipeline
//!
//! A small document store over SQLite:
//! - `models`: Collections, the `Document`/`DocumentSink` traits and records
//! - `schema`: Database connection and schema management
//! - `queries`: Upsert and read operations

pub mod models;
pub mod queries;
pub mod schema;


pub use models::*;
pub use schema::DocumentStore;
