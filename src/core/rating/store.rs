//! Key-value persistence for per-tool votes

use crate::shared::error::{AppError, AppResult};
use directories::ProjectDirs;
use log::debug;
use redb::{Database, ReadableTable, TableDefinition};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Redb table for the key-value store
/// Key: storage key (`rating_<toolId>`), Value: raw string value
const KV_TABLE: TableDefinition<&str, &str> = TableDefinition::new("kv");

const DB_FILE: &str = "multitools.redb";

/// String key-value storage, the shape of browser local storage
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> AppResult<()>;
    fn remove(&self, key: &str) -> AppResult<()>;

    /// Write `value` only when `key` is unset, as one atomic step.
    /// Returns the value already stored, if any; nothing is written then.
    fn insert_if_absent(&self, key: &str, value: &str) -> AppResult<Option<String>>;
}

/// Process-local store; contents vanish with the process
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| AppError::Storage(format!("Mutex poisoned: {}", e)))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| AppError::Storage(format!("Mutex poisoned: {}", e)))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| AppError::Storage(format!("Mutex poisoned: {}", e)))?;
        entries.remove(key);
        Ok(())
    }

    fn insert_if_absent(&self, key: &str, value: &str) -> AppResult<Option<String>> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| AppError::Storage(format!("Mutex poisoned: {}", e)))?;
        if let Some(existing) = entries.get(key) {
            return Ok(Some(existing.clone()));
        }
        entries.insert(key.to_string(), value.to_string());
        Ok(None)
    }
}

/// Redb-based storage implementation
#[derive(Clone)]
pub struct RedbStore {
    db: Arc<Mutex<Database>>,
}

/// Platform data directory, e.g. `~/.local/share/multitools` on Linux
pub fn default_data_dir() -> AppResult<PathBuf> {
    let proj_dirs = ProjectDirs::from("com", "multitools", "multitools")
        .ok_or_else(|| AppError::Io("Failed to get project directories".to_string()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

impl RedbStore {
    /// Open (or create) the database file inside `data_dir`
    pub fn open(data_dir: &Path) -> AppResult<Self> {
        std::fs::create_dir_all(data_dir)
            .map_err(|e| AppError::Io(format!("Failed to create data directory: {}", e)))?;

        let db_path = data_dir.join(DB_FILE);
        debug!("[Storage] Opening {}", db_path.display());
        let db = Database::create(&db_path)
            .map_err(|e| AppError::Storage(format!("Failed to create database: {}", e)))?;

        // Initialize table so reads never hit a missing table
        {
            let write_txn = db
                .begin_write()
                .map_err(|e| AppError::Storage(format!("Failed to begin write transaction: {}", e)))?;
            {
                let _table = write_txn
                    .open_table(KV_TABLE)
                    .map_err(|e| AppError::Storage(format!("Failed to open table: {}", e)))?;
            }
            write_txn
                .commit()
                .map_err(|e| AppError::Storage(format!("Failed to commit transaction: {}", e)))?;
        }

        Ok(Self {
            db: Arc::new(Mutex::new(db)),
        })
    }

    pub fn open_default() -> AppResult<Self> {
        Self::open(&default_data_dir()?)
    }
}

impl KeyValueStore for RedbStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let db = self
            .db
            .lock()
            .map_err(|e| AppError::Storage(format!("Mutex poisoned: {}", e)))?;

        let read_txn = db
            .begin_read()
            .map_err(|e| AppError::Storage(format!("Failed to begin read: {}", e)))?;
        let table = read_txn
            .open_table(KV_TABLE)
            .map_err(|e| AppError::Storage(format!("Failed to open table: {}", e)))?;

        let value = table
            .get(key)
            .map_err(|e| AppError::Storage(format!("Failed to read '{}': {}", key, e)))?;
        Ok(value.map(|v| v.value().to_string()))
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let db = self
            .db
            .lock()
            .map_err(|e| AppError::Storage(format!("Mutex poisoned: {}", e)))?;

        let write_txn = db
            .begin_write()
            .map_err(|e| AppError::Storage(format!("Failed to begin write: {}", e)))?;
        {
            let mut table = write_txn
                .open_table(KV_TABLE)
                .map_err(|e| AppError::Storage(format!("Failed to open table: {}", e)))?;
            table
                .insert(key, value)
                .map_err(|e| AppError::Storage(format!("Failed to insert: {}", e)))?;
        }
        write_txn
            .commit()
            .map_err(|e| AppError::Storage(format!("Failed to commit: {}", e)))?;

        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let db = self
            .db
            .lock()
            .map_err(|e| AppError::Storage(format!("Mutex poisoned: {}", e)))?;

        let write_txn = db
            .begin_write()
            .map_err(|e| AppError::Storage(format!("Failed to begin write: {}", e)))?;
        {
            let mut table = write_txn
                .open_table(KV_TABLE)
                .map_err(|e| AppError::Storage(format!("Failed to open table: {}", e)))?;
            table
                .remove(key)
                .map_err(|e| AppError::Storage(format!("Failed to remove key: {}", e)))?;
        }
        write_txn
            .commit()
            .map_err(|e| AppError::Storage(format!("Failed to commit: {}", e)))?;

        Ok(())
    }

    fn insert_if_absent(&self, key: &str, value: &str) -> AppResult<Option<String>> {
        let db = self
            .db
            .lock()
            .map_err(|e| AppError::Storage(format!("Mutex poisoned: {}", e)))?;

        let write_txn = db
            .begin_write()
            .map_err(|e| AppError::Storage(format!("Failed to begin write: {}", e)))?;
        let existing = {
            let mut table = write_txn
                .open_table(KV_TABLE)
                .map_err(|e| AppError::Storage(format!("Failed to open table: {}", e)))?;
            let existing = table
                .get(key)
                .map_err(|e| AppError::Storage(format!("Failed to read '{}': {}", key, e)))?
                .map(|v| v.value().to_string());
            if existing.is_none() {
                table
                    .insert(key, value)
                    .map_err(|e| AppError::Storage(format!("Failed to insert: {}", e)))?;
            }
            existing
        };
        write_txn
            .commit()
            .map_err(|e| AppError::Storage(format!("Failed to commit: {}", e)))?;

        Ok(existing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn exercise(store: &dyn KeyValueStore) {
        assert_eq!(store.get("rating_bmi").unwrap(), None);
        store.set("rating_bmi", "4").unwrap();
        assert_eq!(store.get("rating_bmi").unwrap().as_deref(), Some("4"));
        store.set("rating_bmi", "5").unwrap();
        assert_eq!(store.get("rating_bmi").unwrap().as_deref(), Some("5"));
        store.remove("rating_bmi").unwrap();
        assert_eq!(store.get("rating_bmi").unwrap(), None);

        assert_eq!(store.insert_if_absent("rating_bmi", "2").unwrap(), None);
        assert_eq!(store.insert_if_absent("rating_bmi", "3").unwrap().as_deref(), Some("2"));
        assert_eq!(store.get("rating_bmi").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_memory_store() {
        exercise(&MemoryStore::new());
    }

    #[test]
    fn test_redb_store() {
        let dir = tempdir().unwrap();
        exercise(&RedbStore::open(dir.path()).unwrap());
    }

    #[test]
    fn test_redb_store_persists_across_reopen() {
        let dir = tempdir().unwrap();
        {
            let store = RedbStore::open(dir.path()).unwrap();
            store.set("rating_loan", "3").unwrap();
        }
        let store = RedbStore::open(dir.path()).unwrap();
        assert_eq!(store.get("rating_loan").unwrap().as_deref(), Some("3"));
    }
}
