//! Storefront analytics: client and product rankings, revenue by date, and
//! the client co-purchase graph, computed from an in-memory snapshot.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod exit;
pub mod graph;
pub mod logger;
pub mod reporting;
pub mod snapshot;
pub mod types;
pub mod validation;

pub use analysis::{Analyzer, AnalysisOptions, ReferencePolicy};
pub use error::{Result, StoreError};
pub use graph::ClientGraph;
pub use snapshot::{CsvStore, JsonStore, Snapshot, SnapshotFormat, SnapshotSource};
pub use types::{Client, Order, Product, RankEntry, SalesPoint};
