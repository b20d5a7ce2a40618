// tests/unit_analysis.rs
//! Rankings and revenue series over fixed snapshots.

mod common;

use storelens_core::analysis::{sales_dynamics, top_clients, top_products};
use storelens_core::types::RefKind;
use storelens_core::{
    AnalysisOptions, Analyzer, Client, Order, RankEntry, ReferencePolicy, Snapshot, StoreError,
};

#[test]
fn test_top_clients_scenario() {
    let s = common::scenario();
    let ranked = top_clients(&s.clients, &s.orders, 2, ReferencePolicy::Skip).unwrap();
    assert_eq!(ranked, vec![RankEntry::new("A", 2), RankEntry::new("B", 1)]);
}

#[test]
fn test_top_products_tie_breaks_by_id() {
    let s = common::scenario();
    let ranked = top_products(&s.products, &s.orders, 2, ReferencePolicy::Skip).unwrap();
    assert_eq!(ranked, vec![RankEntry::new("X", 2), RankEntry::new("Y", 2)]);
}

#[test]
fn test_top_n_truncates() {
    let s = common::scenario();
    let ranked = top_clients(&s.clients, &s.orders, 1, ReferencePolicy::Skip).unwrap();
    assert_eq!(ranked, vec![RankEntry::new("A", 2)]);
}

#[test]
fn test_clients_without_orders_excluded() {
    let mut s = common::scenario();
    s.clients.push(Client::new(3, "Idle"));
    let ranked = top_clients(&s.clients, &s.orders, 10, ReferencePolicy::Skip).unwrap();
    assert!(ranked.iter().all(|e| e.name != "Idle"));
    assert_eq!(ranked.len(), 2);
}

#[test]
fn test_sales_dynamics_scenario() {
    let series = sales_dynamics(&common::scenario().orders);
    let pairs: Vec<(&str, f64)> = series.iter().map(|p| (p.date.as_str(), p.total)).collect();
    assert_eq!(pairs, vec![("D1", 13.0), ("D2", 3.0)]);
}

#[test]
fn test_empty_snapshot_yields_empty_results() {
    let s = Snapshot::default();
    let analyzer = Analyzer::new(&s, AnalysisOptions::strict()).unwrap();
    assert!(analyzer.top_clients(5).unwrap().is_empty());
    assert!(analyzer.top_products(5).unwrap().is_empty());
    assert!(analyzer.sales_dynamics().is_empty());
    let graph = analyzer.client_graph().unwrap();
    assert_eq!(graph.node_count(), 0);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_empty_orders_keep_roster_nodes() {
    let mut s = common::scenario();
    s.orders.clear();
    let analyzer = Analyzer::new(&s, AnalysisOptions::default()).unwrap();
    assert!(analyzer.top_clients(5).unwrap().is_empty());
    assert!(analyzer.sales_dynamics().is_empty());
    let graph = analyzer.client_graph().unwrap();
    assert_eq!(graph.nodes().collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_dangling_client_policy() {
    let mut s = common::scenario();
    s.orders.push(Order::new(4, 42, vec![10], "D3", 5.0));

    let lenient = top_clients(&s.clients, &s.orders, 5, ReferencePolicy::Skip).unwrap();
    assert_eq!(lenient.iter().map(|e| e.count).sum::<usize>(), 3);

    let err = top_clients(&s.clients, &s.orders, 5, ReferencePolicy::Fail).unwrap_err();
    assert!(matches!(
        err,
        StoreError::DanglingReference { kind: RefKind::Client, id: 42, order_id: 4 }
    ));
}

#[test]
fn test_dangling_product_policy() {
    let mut s = common::scenario();
    s.orders.push(Order::new(4, 2, vec![99, 10], "D3", 5.0));

    let lenient = top_products(&s.products, &s.orders, 5, ReferencePolicy::Skip).unwrap();
    assert_eq!(lenient, vec![RankEntry::new("X", 3), RankEntry::new("Y", 2)]);

    assert!(top_products(&s.products, &s.orders, 5, ReferencePolicy::Fail).is_err());
}

#[test]
fn test_report_bundles_everything() {
    let s = common::scenario();
    let report = Analyzer::new(&s, AnalysisOptions::default())
        .unwrap()
        .report(2)
        .unwrap();
    assert_eq!(report.top_clients.len(), 2);
    assert_eq!(report.top_products.len(), 2);
    assert_eq!(report.sales.len(), 2);
    assert!(report.graph.contains_edge(1, 2));
}

#[test]
fn test_analyzer_rejects_zero_fanout_limit() {
    let s = common::scenario();
    let opts = AnalysisOptions::default().with_fanout_limit(Some(0));
    assert!(matches!(Analyzer::new(&s, opts), Err(StoreError::InvalidInput(_))));
}

#[test]
fn test_repeat_calls_are_identical() {
    let s = common::scenario();
    let analyzer = Analyzer::new(&s, AnalysisOptions::default()).unwrap();
    assert_eq!(analyzer.top_clients(5).unwrap(), analyzer.top_clients(5).unwrap());
    assert_eq!(analyzer.top_products(5).unwrap(), analyzer.top_products(5).unwrap());
    assert_eq!(analyzer.sales_dynamics(), analyzer.sales_dynamics());
    assert_eq!(analyzer.client_graph().unwrap(), analyzer.client_graph().unwrap());
}
