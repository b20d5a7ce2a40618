// src/snapshot/mod.rs
//! Immutable in-memory copies of the store's records.

pub mod csv_store;
pub mod json;

pub use csv_store::CsvStore;
pub use json::JsonStore;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use crate::error::{Result, StoreError};
use crate::types::{Client, ClientId, Order, OrderId, Product, ProductId, RefKind};

/// Anything that can hand over the full record set of one store.
pub trait SnapshotSource {
    /// # Errors
    /// Returns error if the backing store cannot be read.
    fn fetch_clients(&self) -> Result<Vec<Client>>;

    /// # Errors
    /// Returns error if the backing store cannot be read.
    fn fetch_products(&self) -> Result<Vec<Product>>;

    /// # Errors
    /// Returns error if the backing store cannot be read.
    fn fetch_orders(&self) -> Result<Vec<Order>>;
}

/// On-disk layout of a snapshot directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SnapshotFormat {
    #[default]
    Json,
    Csv,
}

impl SnapshotFormat {
    /// # Errors
    /// Returns `Io` if `dir` is not a directory.
    pub fn open(self, dir: &Path) -> Result<Box<dyn SnapshotSource>> {
        Ok(match self {
            Self::Json => Box::new(JsonStore::open(dir)?),
            Self::Csv => Box::new(CsvStore::open(dir)?),
        })
    }

    /// # Errors
    /// Returns error if any file cannot be written.
    pub fn export(self, dir: &Path, snapshot: &Snapshot) -> Result<()> {
        match self {
            Self::Json => JsonStore::export(dir, snapshot).map(drop),
            Self::Csv => CsvStore::export(dir, snapshot).map(drop),
        }
    }
}

impl fmt::Display for SnapshotFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

/// All clients, products and orders as of one point in time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub clients: Vec<Client>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub orders: Vec<Order>,
}

impl Snapshot {
    #[must_use]
    pub fn new(clients: Vec<Client>, products: Vec<Product>, orders: Vec<Order>) -> Self {
        Self {
            clients,
            products,
            orders,
        }
    }

    /// Materializes every record the source holds.
    ///
    /// # Errors
    /// Propagates the first fetch failure.
    pub fn load<S: SnapshotSource + ?Sized>(source: &S) -> Result<Self> {
        let snapshot = Self {
            clients: source.fetch_clients()?,
            products: source.fetch_products()?,
            orders: source.fetch_orders()?,
        };
        tracing::info!(
            clients = snapshot.clients.len(),
            products = snapshot.products.len(),
            orders = snapshot.orders.len(),
            "snapshot loaded"
        );
        Ok(snapshot)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clients.is_empty() && self.products.is_empty() && self.orders.is_empty()
    }

    /// Records a new order, pricing it against the product catalog.
    ///
    /// Without an explicit `id` the order takes the next id after the highest
    /// one present. Every reference must resolve.
    ///
    /// # Errors
    /// Returns `InvalidInput` for a blank date or a taken id, and
    /// `DanglingReference` for an unknown client or product.
    pub fn place_order(
        &mut self,
        id: Option<OrderId>,
        client_id: ClientId,
        product_ids: Vec<ProductId>,
        date: &str,
    ) -> Result<&Order> {
        let date = date.trim();
        if date.is_empty() {
            return Err(StoreError::InvalidInput("order date is blank".into()));
        }
        let id = match id {
            Some(id) if self.orders.iter().any(|o| o.id == id) => {
                return Err(StoreError::InvalidInput(format!("order id {id} is taken")));
            }
            Some(id) => id,
            None => self.orders.iter().map(|o| o.id).max().map_or(1, |max| max + 1),
        };

        if !self.clients.iter().any(|c| c.id == client_id) {
            return Err(StoreError::DanglingReference {
                kind: RefKind::Client,
                id: client_id,
                order_id: id,
            });
        }
        let catalog: HashSet<ProductId> = self.products.iter().map(|p| p.id).collect();
        if let Some(&missing) = product_ids.iter().find(|pid| !catalog.contains(pid)) {
            return Err(StoreError::DanglingReference {
                kind: RefKind::Product,
                id: missing,
                order_id: id,
            });
        }

        let order = Order::priced(id, client_id, product_ids, date, &self.products);
        tracing::debug!(order_id = order.id, total = order.total, "order placed");
        self.orders.push(order);
        Ok(&self.orders[self.orders.len() - 1])
    }
}

impl SnapshotSource for Snapshot {
    fn fetch_clients(&self) -> Result<Vec<Client>> {
        Ok(self.clients.clone())
    }

    fn fetch_products(&self) -> Result<Vec<Product>> {
        Ok(self.products.clone())
    }

    fn fetch_orders(&self) -> Result<Vec<Order>> {
        Ok(self.orders.clone())
    }
}
