// src/analysis/series.rs
//! Revenue grouped by order date.

use std::collections::BTreeMap;

use crate::types::{Order, SalesPoint};

/// Sums order totals per date string, ascending by date.
///
/// Dates are opaque tokens: they are grouped by exact equality and sorted
/// lexicographically, which matches chronological order for `YYYY-MM-DD`.
/// Dates without orders are not filled in.
#[must_use]
pub fn sales_dynamics(orders: &[Order]) -> Vec<SalesPoint> {
    let mut by_date: BTreeMap<&str, f64> = BTreeMap::new();
    for order in orders {
        *by_date.entry(order.date.as_str()).or_insert(0.0) += order.total;
    }

    by_date
        .into_iter()
        .map(|(date, total)| SalesPoint {
            date: date.to_string(),
            total,
        })
        .collect()
}
