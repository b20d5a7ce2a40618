#![allow(dead_code)]

use storelens_core::{Client, Order, Product, Snapshot};

/// Two clients, two products, three orders across two dates.
pub fn scenario() -> Snapshot {
    Snapshot::new(
        vec![Client::new(1, "A"), Client::new(2, "B")],
        vec![Product::new(10, "X", 5.0), Product::new(20, "Y", 3.0)],
        vec![
            Order::new(1, 1, vec![10], "D1", 5.0),
            Order::new(2, 1, vec![10, 20], "D1", 8.0),
            Order::new(3, 2, vec![20], "D2", 3.0),
        ],
    )
}

/// A catalog where every order resolves, sized for property tests.
pub fn roster(clients: i64, products: i64) -> (Vec<Client>, Vec<Product>) {
    (
        (0..clients).map(|i| Client::new(i, format!("client-{i}"))).collect(),
        (0..products)
            .map(|i| Product::new(i, format!("product-{i}"), 1.0))
            .collect(),
    )
}
