// src/graph/builder.rs
//! Graph construction: inverted index and pairwise edge generation.
//!
//! A product bought by `k` distinct clients yields `k * (k - 1) / 2` edge
//! insertions, so the cost of a build is dominated by the most widely shared
//! products. `AnalysisOptions::fanout_warn` logs those products and
//! `AnalysisOptions::fanout_limit` refuses to expand them at all.

use std::collections::{BTreeMap, HashSet};

use super::client_graph::ClientGraph;
use crate::analysis::AnalysisOptions;
use crate::error::{Result, StoreError};
use crate::types::{Client, ClientId, Order, Product, ProductId, RefKind};

/// Product id -> distinct clients that ordered it, ascending.
pub type InvertedIndex = BTreeMap<ProductId, Vec<ClientId>>;

/// Builds the co-purchase graph.
///
/// Every client in the roster becomes a node, even without orders.
///
/// # Errors
/// Returns `DanglingReference` under the `Fail` policy, or `FanoutExceeded`
/// when a product crosses `fanout_limit`.
pub fn client_graph(
    clients: &[Client],
    products: &[Product],
    orders: &[Order],
    options: &AnalysisOptions,
) -> Result<ClientGraph> {
    let index = build_index(clients, products, orders, options)?;
    check_fanout(&index, options)?;

    let mut graph = ClientGraph::new();
    for client in clients {
        graph.add_node(client.id);
    }
    for buyers in index.values() {
        add_product_edges(buyers, &mut graph);
    }

    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        products = index.len(),
        "client graph built"
    );
    Ok(graph)
}

/// Maps each product to the distinct clients that bought it.
///
/// # Errors
/// Returns `DanglingReference` under the `Fail` policy.
pub fn build_index(
    clients: &[Client],
    products: &[Product],
    orders: &[Order],
    options: &AnalysisOptions,
) -> Result<InvertedIndex> {
    let known_clients: HashSet<ClientId> = clients.iter().map(|c| c.id).collect();
    let known_products: HashSet<ProductId> = products.iter().map(|p| p.id).collect();
    let mut index = InvertedIndex::new();

    for order in orders {
        if !known_clients.contains(&order.client_id) {
            options
                .dangling
                .on_dangling(RefKind::Client, order.client_id, order.id)?;
            continue;
        }
        for &pid in &order.product_ids {
            if known_products.contains(&pid) {
                index.entry(pid).or_default().push(order.client_id);
            } else {
                options.dangling.on_dangling(RefKind::Product, pid, order.id)?;
            }
        }
    }

    for buyers in index.values_mut() {
        buyers.sort_unstable();
        buyers.dedup();
    }
    Ok(index)
}

fn check_fanout(index: &InvertedIndex, options: &AnalysisOptions) -> Result<()> {
    for (&product_id, buyers) in index {
        let clients = buyers.len();
        if let Some(limit) = options.fanout_limit {
            if clients > limit {
                return Err(StoreError::FanoutExceeded {
                    product_id,
                    clients,
                    limit,
                });
            }
        }
        if clients > options.fanout_warn {
            tracing::warn!(
                product_id,
                clients,
                edges = clients * (clients - 1) / 2,
                "widely shared product dominates graph build"
            );
        }
    }
    Ok(())
}

fn add_product_edges(buyers: &[ClientId], graph: &mut ClientGraph) {
    for (i, &a) in buyers.iter().enumerate() {
        for &b in &buyers[i + 1..] {
            graph.add_edge(a, b);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::ReferencePolicy;

    #[test]
    fn index_dedups_repeat_buyers() {
        let clients = vec![Client::new(1, "A"), Client::new(2, "B")];
        let products = vec![Product::new(10, "X", 1.0)];
        let orders = vec![
            Order::new(1, 2, vec![10, 10], "d", 0.0),
            Order::new(2, 1, vec![10], "d", 0.0),
            Order::new(3, 2, vec![10], "d", 0.0),
        ];
        let index = build_index(&clients, &products, &orders, &AnalysisOptions::default()).unwrap();
        assert_eq!(index.get(&10), Some(&vec![1, 2]));
    }

    #[test]
    fn fanout_limit_aborts() {
        let clients: Vec<Client> = (1..=4).map(|i| Client::new(i, format!("c{i}"))).collect();
        let products = vec![Product::new(10, "X", 1.0)];
        let orders: Vec<Order> = (1..=4).map(|i| Order::new(i, i, vec![10], "d", 1.0)).collect();
        let opts = AnalysisOptions::default().with_fanout_limit(Some(3));
        let err = client_graph(&clients, &products, &orders, &opts).unwrap_err();
        assert!(matches!(
            err,
            StoreError::FanoutExceeded { product_id: 10, clients: 4, limit: 3 }
        ));
    }

    #[test]
    fn unknown_product_is_dropped_under_skip() {
        let clients = vec![Client::new(1, "A"), Client::new(2, "B")];
        let orders = vec![
            Order::new(1, 1, vec![99], "d", 0.0),
            Order::new(2, 2, vec![99], "d", 0.0),
        ];
        let g = client_graph(&clients, &[], &orders, &AnalysisOptions::default()).unwrap();
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.node_count(), 2);

        let strict = AnalysisOptions::default().with_policy(ReferencePolicy::Fail);
        assert!(client_graph(&clients, &[], &orders, &strict).is_err());
    }
}
