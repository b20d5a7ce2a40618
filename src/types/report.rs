use serde::{Deserialize, Serialize};

use crate::graph::ClientGraph;

/// One row of a ranking: an entity name and how often it was counted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankEntry {
    pub name: String,
    pub count: usize,
}

impl RankEntry {
    #[must_use]
    pub fn new(name: impl Into<String>, count: usize) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

/// Revenue summed over all orders sharing one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesPoint {
    pub date: String,
    pub total: f64,
}

/// Everything the `report` command renders in one pass.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsReport {
    pub top_clients: Vec<RankEntry>,
    pub top_products: Vec<RankEntry>,
    pub sales: Vec<SalesPoint>,
    pub graph: ClientGraph,
}
