// src/snapshot/csv_store.rs
//! Directory-backed snapshot store in CSV: `clients.csv`, `products.csv`, `orders.csv`.
//!
//! Every file starts with a header row. An order's `product_ids` column holds
//! a bracketed list such as `[10, 20]`.

use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{Snapshot, SnapshotSource};
use crate::error::{Result, StoreError};
use crate::types::{Client, ClientId, Order, OrderId, Product, ProductId};

pub const CLIENTS_FILE: &str = "clients.csv";
pub const PRODUCTS_FILE: &str = "products.csv";
pub const ORDERS_FILE: &str = "orders.csv";

/// Reads and writes snapshots as three CSV tables inside one directory.
#[derive(Debug, Clone)]
pub struct CsvStore {
    dir: PathBuf,
}

impl CsvStore {
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
        write_rows(
            &dir.join(CLIENTS_FILE),
            snapshot.clients.iter().map(ClientRow::from),
        )?;
        write_rows(&dir.join(PRODUCTS_FILE), snapshot.products.iter())?;
        write_rows(
            &dir.join(ORDERS_FILE),
            snapshot.orders.iter().map(OrderRow::from),
        )?;
        tracing::info!(dir = %dir.display(), "snapshot exported as csv");
        Ok(Self { dir })
    }
}

impl SnapshotSource for CsvStore {
    fn fetch_clients(&self) -> Result<Vec<Client>> {
        read_rows(&self.dir.join(CLIENTS_FILE))
    }

    fn fetch_products(&self) -> Result<Vec<Product>> {
        read_rows(&self.dir.join(PRODUCTS_FILE))
    }

    fn fetch_orders(&self) -> Result<Vec<Order>> {
        let rows: Vec<OrderRow> = read_rows(&self.dir.join(ORDERS_FILE))?;
        Ok(rows.into_iter().map(Order::from).collect())
    }
}

/// Client columns are fixed so that absent contacts still occupy a cell.
#[derive(Serialize)]
struct ClientRow<'a> {
    id: ClientId,
    name: &'a str,
    email: Option<&'a str>,
    phone: Option<&'a str>,
}

impl<'a> From<&'a Client> for ClientRow<'a> {
    fn from(client: &'a Client) -> Self {
        Self {
            id: client.id,
            name: &client.name,
            email: client.email.as_deref(),
            phone: client.phone.as_deref(),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct OrderRow {
    id: OrderId,
    client_id: ClientId,
    #[serde(with = "id_list")]
    product_ids: Vec<ProductId>,
    date: String,
    total: f64,
}

impl From<&Order> for OrderRow {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id,
            client_id: order.client_id,
            product_ids: order.product_ids.clone(),
            date: order.date.clone(),
            total: order.total,
        }
    }
}

impl From<OrderRow> for Order {
    fn from(row: OrderRow) -> Self {
        Order::new(row.id, row.client_id, row.product_ids, row.date, row.total)
    }
}

/// `[10, 20]` in a single cell. Brackets are optional when reading.
mod id_list {
    use serde::{de, Deserialize, Deserializer, Serializer};

    use crate::types::ProductId;

    pub fn serialize<S: Serializer>(ids: &[ProductId], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(ids))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<ProductId>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(de::Error::custom)
    }

    pub(super) fn format(ids: &[ProductId]) -> String {
        let joined: Vec<String> = ids.iter().map(ToString::to_string).collect();
        format!("[{}]", joined.join(", "))
    }

    pub(super) fn parse(raw: &str) -> Result<Vec<ProductId>, String> {
        let trimmed = raw.trim();
        let inner = trimmed
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .unwrap_or(trimmed);
        inner
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<ProductId>()
                    .map_err(|_| format!("invalid product id '{part}' in '{raw}'"))
            })
            .collect()
    }
}

fn read_rows<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = match File::open(path) {
        Ok(file) => file,
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

    csv::Reader::from_reader(file)
        .deserialize()
        .collect::<std::result::Result<Vec<T>, _>>()
        .map_err(|source| StoreError::Csv {
            source,
            path: path.to_path_buf(),
        })
}

fn write_rows<T: Serialize>(path: &Path, rows: impl Iterator<Item = T>) -> Result<()> {
    let csv_err = |source: csv::Error| StoreError::Csv {
        source,
        path: path.to_path_buf(),
    };
    let mut writer = csv::Writer::from_path(path).map_err(csv_err)?;
    for row in rows {
        writer.serialize(row).map_err(csv_err)?;
    }
    writer.flush().map_err(|source| StoreError::Io {
        source,
        path: path.to_path_buf(),
    })
}
