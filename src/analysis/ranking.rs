// src/analysis/ranking.rs
//! Frequency rankings over clients and products.
//!
//! Counts accumulate in a `BTreeMap` keyed by entity id and are then sorted by
//! count descending with the id ascending as the tie-break, so equal counts
//! always come out in the same order.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use super::options::ReferencePolicy;
use crate::error::Result;
use crate::types::{Client, Order, Product, RankEntry, RefKind};

/// Top `n` clients by number of orders placed.
///
/// Each order counts once no matter how many products it holds. Clients
/// without orders never appear.
///
/// # Errors
/// Returns `DanglingReference` when an order's client is unknown and the policy is `Fail`.
pub fn top_clients(
    clients: &[Client],
    orders: &[Order],
    n: usize,
    policy: ReferencePolicy,
) -> Result<Vec<RankEntry>> {
    let names = name_index(clients.iter().map(|c| (c.id, c.name.as_str())));
    let mut counts: BTreeMap<i64, usize> = BTreeMap::new();

    for order in orders {
        if names.contains_key(&order.client_id) {
            *counts.entry(order.client_id).or_default() += 1;
        } else {
            policy.on_dangling(RefKind::Client, order.client_id, order.id)?;
        }
    }

    Ok(finish(counts, &names, n))
}

/// Top `n` products by how many times they were purchased.
///
/// Every occurrence inside `product_ids` counts, so an order listing the same
/// product twice adds two.
///
/// # Errors
/// Returns `DanglingReference` when a product id is unknown and the policy is `Fail`.
pub fn top_products(
    products: &[Product],
    orders: &[Order],
    n: usize,
    policy: ReferencePolicy,
) -> Result<Vec<RankEntry>> {
    let names = name_index(products.iter().map(|p| (p.id, p.name.as_str())));
    let mut counts: BTreeMap<i64, usize> = BTreeMap::new();

    for order in orders {
        for &pid in &order.product_ids {
            if names.contains_key(&pid) {
                *counts.entry(pid).or_default() += 1;
            } else {
                policy.on_dangling(RefKind::Product, pid, order.id)?;
            }
        }
    }

    Ok(finish(counts, &names, n))
}

/// Ranking comparator: higher count first, then lower id.
#[must_use]
pub fn by_count_then_id(a: &(i64, usize), b: &(i64, usize)) -> Ordering {
    b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0))
}

// First occurrence wins when the snapshot repeats an id.
fn name_index<'a>(pairs: impl Iterator<Item = (i64, &'a str)>) -> HashMap<i64, &'a str> {
    let mut names = HashMap::new();
    for (id, name) in pairs {
        names.entry(id).or_insert(name);
    }
    names
}

fn finish(counts: BTreeMap<i64, usize>, names: &HashMap<i64, &str>, n: usize) -> Vec<RankEntry> {
    let mut ranked: Vec<(i64, usize)> = counts.into_iter().collect();
    ranked.sort_by(by_count_then_id);
    ranked
        .into_iter()
        .take(n)
        .filter_map(|(id, count)| names.get(&id).map(|name| RankEntry::new(*name, count)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clients() -> Vec<Client> {
        vec![Client::new(1, "A"), Client::new(2, "B"), Client::new(3, "C")]
    }

    #[test]
    fn ties_break_by_id() {
        let orders = vec![
            Order::new(1, 3, vec![], "d", 0.0),
            Order::new(2, 2, vec![], "d", 0.0),
        ];
        let ranked = top_clients(&clients(), &orders, 5, ReferencePolicy::Skip).unwrap();
        assert_eq!(ranked, vec![RankEntry::new("B", 1), RankEntry::new("C", 1)]);
    }

    #[test]
    fn zero_n_is_empty() {
        let orders = vec![Order::new(1, 1, vec![], "d", 0.0)];
        let ranked = top_clients(&clients(), &orders, 0, ReferencePolicy::Skip).unwrap();
        assert!(ranked.is_empty());
    }

    #[test]
    fn dangling_client_skipped_before_truncation() {
        let orders = vec![
            Order::new(1, 99, vec![], "d", 0.0),
            Order::new(2, 99, vec![], "d", 0.0),
            Order::new(3, 1, vec![], "d", 0.0),
        ];
        let ranked = top_clients(&clients(), &orders, 1, ReferencePolicy::Skip).unwrap();
        assert_eq!(ranked, vec![RankEntry::new("A", 1)]);
    }

    #[test]
    fn duplicate_products_in_one_order_count_twice() {
        let products = vec![Product::new(10, "X", 1.0), Product::new(20, "Y", 1.0)];
        let orders = vec![Order::new(1, 1, vec![20, 20, 10], "d", 0.0)];
        let ranked = top_products(&products, &orders, 5, ReferencePolicy::Skip).unwrap();
        assert_eq!(ranked, vec![RankEntry::new("Y", 2), RankEntry::new("X", 1)]);
    }

    #[test]
    fn comparator_orders_count_then_id() {
        let mut v = vec![(5, 1), (2, 3), (1, 1), (9, 3)];
        v.sort_by(by_count_then_id);
        assert_eq!(v, vec![(2, 3), (9, 3), (1, 1), (5, 1)]);
    }
}
