// src/analysis/mod.rs
//! The analytics engine: rankings, revenue series and the co-purchase graph.
//!
//! Every operation is a pure function of an immutable [`Snapshot`]; nothing
//! here touches storage or global state.

pub mod options;
pub mod ranking;
pub mod series;

pub use options::{AnalysisOptions, ReferencePolicy};
pub use ranking::{top_clients, top_products};
pub use series::sales_dynamics;

use crate::error::Result;
use crate::graph::{self, ClientGraph};
use crate::snapshot::Snapshot;
use crate::types::{AnalyticsReport, RankEntry, SalesPoint};

/// Runs analyses over one snapshot with a fixed set of options.
pub struct Analyzer<'a> {
    snapshot: &'a Snapshot,
    options: AnalysisOptions,
}

impl<'a> Analyzer<'a> {
    /// # Errors
    /// Returns `InvalidInput` if the options carry an impossible threshold.
    pub fn new(snapshot: &'a Snapshot, options: AnalysisOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { snapshot, options })
    }

    /// # Errors
    /// Propagates the dangling-reference policy.
    pub fn top_clients(&self, n: usize) -> Result<Vec<RankEntry>> {
        top_clients(
            &self.snapshot.clients,
            &self.snapshot.orders,
            n,
            self.options.dangling,
        )
    }

    /// # Errors
    /// Propagates the dangling-reference policy.
    pub fn top_products(&self, n: usize) -> Result<Vec<RankEntry>> {
        top_products(
            &self.snapshot.products,
            &self.snapshot.orders,
            n,
            self.options.dangling,
        )
    }

    #[must_use]
    pub fn sales_dynamics(&self) -> Vec<SalesPoint> {
        sales_dynamics(&self.snapshot.orders)
    }

    /// # Errors
    /// Propagates the dangling-reference policy and the fan-out limit.
    pub fn client_graph(&self) -> Result<ClientGraph> {
        graph::client_graph(
            &self.snapshot.clients,
            &self.snapshot.products,
            &self.snapshot.orders,
            &self.options,
        )
    }

    /// Runs every analysis and bundles the results.
    ///
    /// # Errors
    /// Fails on the first analysis that fails.
    pub fn report(&self, n: usize) -> Result<AnalyticsReport> {
        Ok(AnalyticsReport {
            top_clients: self.top_clients(n)?,
            top_products: self.top_products(n)?,
            sales: self.sales_dynamics(),
            graph: self.client_graph()?,
        })
    }
}
