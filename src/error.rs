// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

use crate::types::{OrderId, ProductId, RefKind};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Malformed JSON in {path}: {source}")]
    Json {
        source: serde_json::Error,
        path: PathBuf,
    },

    #[error("Malformed CSV in {path}: {source}")]
    Csv {
        source: csv::Error,
        path: PathBuf,
    },

    #[error("Order {order_id} references unknown {kind} {id}")]
    DanglingReference {
        kind: RefKind,
        id: i64,
        order_id: OrderId,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Product {product_id} is shared by {clients} clients (limit {limit})")]
    FanoutExceeded {
        product_id: ProductId,
        clients: usize,
        limit: usize,
    },

    #[error("Snapshot failed validation ({} issue(s))", .0.len())]
    Validation(Vec<String>),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;

// Allow `?` on std::io::Error by converting to StoreError::Io with unknown path.
impl From<std::io::Error> for StoreError {
    fn from(source: std::io::Error) -> Self {
        StoreError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

impl From<toml::de::Error> for StoreError {
    fn from(e: toml::de::Error) -> Self {
        StoreError::Config(e.to_string())
    }
}
