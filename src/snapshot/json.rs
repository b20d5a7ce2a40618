// src/snapshot/json.rs
//! Directory-backed snapshot store: `clients.json`, `products.json`, `orders.json`.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{Snapshot, SnapshotSource};
use crate::error::{Result, StoreError};
use crate::types::{Client, Order, Product};

pub const CLIENTS_FILE: &str = "clients.json";
pub const PRODUCTS_FILE: &str = "products.json";
pub const ORDERS_FILE: &str = "orders.json";

/// Reads and writes snapshots as three JSON arrays inside one directory.
#[derive(Debug, Clone)]
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    /// Opens an existing directory. Individual files may be missing.
    ///
    /// # Errors
    /// Returns `Io` if `dir` is not a directory.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        if !dir.is_dir() {
            return Err(StoreError::Io {
                source: std::io::Error::new(ErrorKind::NotFound, "snapshot directory not found"),
                path: dir,
            });
        }
        Ok(Self { dir })
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Writes `snapshot` into `dir`, creating it if needed.
    ///
    /// # Errors
    /// Returns error if the directory or any file cannot be written.
    pub fn export(dir: impl Into<PathBuf>, snapshot: &Snapshot) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StoreError::Io {
            source,
            path: dir.clone(),
        })?;
        write_records(&dir.join(CLIENTS_FILE), &snapshot.clients)?;
        write_records(&dir.join(PRODUCTS_FILE), &snapshot.products)?;
        write_records(&dir.join(ORDERS_FILE), &snapshot.orders)?;
        tracing::info!(dir = %dir.display(), "snapshot exported");
        Ok(Self { dir })
    }
}

impl SnapshotSource for JsonStore {
    fn fetch_clients(&self) -> Result<Vec<Client>> {
        read_records(&self.dir.join(CLIENTS_FILE))
    }

    fn fetch_products(&self) -> Result<Vec<Product>> {
        read_records(&self.dir.join(PRODUCTS_FILE))
    }

    fn fetch_orders(&self) -> Result<Vec<Order>> {
        read_records(&self.dir.join(ORDERS_FILE))
    }
}

fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "missing snapshot file, treating as empty");
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(StoreError::Io {
                source,
                path: path.to_path_buf(),
            })
        }
    };

    serde_json::from_str(&content).map_err(|source| StoreError::Json {
        source,
        path: path.to_path_buf(),
    })
}

fn write_records<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    let json = serde_json::to_string_pretty(records).map_err(|source| StoreError::Json {
        source,
        path: path.to_path_buf(),
    })?;
    fs::write(path, json).map_err(|source| StoreError::Io {
        source,
        path: path.to_path_buf(),
    })
}
