//! Collections listing command

use std::path::Path;

use crate::{storage::DocumentStore, Result};

/// Print every collection and its document count
pub fn handle_collections(database_path: &Path) -> Result<()> {
    let store = DocumentStore::open(database_path)?;

    println!("Available collections:");
    for (collection, count) in store.collections()? {
        println!("{:<20} {}", collection.name(), count);
    }
    Ok(())
}
