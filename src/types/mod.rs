//! Record types shared by the loader, the analysis engine and the renderer.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fmt;

mod report;
pub use report::{AnalyticsReport, RankEntry, SalesPoint};

pub type ClientId = i64;
pub type ProductId = i64;
pub type OrderId = i64;

/// A storefront customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    #[serde(deserialize_with = "trimmed")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Client {
    #[must_use]
    pub fn new(id: ClientId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into().trim().to_string(),
            email: None,
            phone: None,
        }
    }

    /// Attaches contact details. They are only checked by the validator.
    #[must_use]
    pub fn with_contact(mut self, email: impl Into<String>, phone: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self.phone = Some(phone.into());
        self
    }
}

/// A catalog item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(deserialize_with = "trimmed")]
    pub name: String,
    pub price: f64,
}

impl Product {
    #[must_use]
    pub fn new(id: ProductId, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into().trim().to_string(),
            price,
        }
    }
}

/// A placed order.
///
/// `total` is captured when the order is created and is never recomputed
/// by the analysis engine, even if catalog prices change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub client_id: ClientId,
    #[serde(default)]
    pub product_ids: Vec<ProductId>,
    pub date: String,
    pub total: f64,
}

impl Order {
    #[must_use]
    pub fn new(
        id: OrderId,
        client_id: ClientId,
        product_ids: Vec<ProductId>,
        date: impl Into<String>,
        total: f64,
    ) -> Self {
        Self {
            id,
            client_id,
            product_ids,
            date: date.into(),
            total,
        }
    }

    /// Creates an order whose total is priced against `catalog`.
    ///
    /// Every occurrence in `product_ids` is charged, so two units of the same
    /// product cost twice its price. Ids missing from the catalog add nothing.
    #[must_use]
    pub fn priced(
        id: OrderId,
        client_id: ClientId,
        product_ids: Vec<ProductId>,
        date: impl Into<String>,
        catalog: &[Product],
    ) -> Self {
        let prices: HashMap<ProductId, f64> = catalog.iter().map(|p| (p.id, p.price)).collect();
        let total = product_ids.iter().filter_map(|pid| prices.get(pid)).sum();
        Self::new(id, client_id, product_ids, date, total)
    }
}

/// Names are stored trimmed however the record was built.
fn trimmed<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().to_string())
}

/// Which kind of entity an order reference points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RefKind {
    Client,
    Product,
}

impl fmt::Display for RefKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Client => write!(f, "client"),
            Self::Product => write!(f, "product"),
        }
    }
}

/// An order reference that does not resolve in the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct DanglingRef {
    pub order_id: OrderId,
    pub kind: RefKind,
    pub id: i64,
}

impl fmt::Display for DanglingRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "order {} references unknown {} {}", self.order_id, self.kind, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priced_order_charges_each_unit() {
        let catalog = vec![Product::new(10, "X", 5.0), Product::new(20, "Y", 3.0)];
        let order = Order::priced(1, 1, vec![10, 10, 20], "2025-08-16", &catalog);
        assert!((order.total - 13.0).abs() < f64::EPSILON);
    }

    #[test]
    fn priced_order_ignores_unknown_products() {
        let catalog = vec![Product::new(10, "X", 5.0)];
        let order = Order::priced(1, 1, vec![10, 99], "2025-08-16", &catalog);
        assert!((order.total - 5.0).abs() < f64::EPSILON);
        assert_eq!(order.product_ids, vec![10, 99]);
    }

    #[test]
    fn names_are_trimmed() {
        assert_eq!(Client::new(1, "  Ann ").name, "Ann");
        assert_eq!(Product::new(1, "Lamp\n", 1.0).name, "Lamp");
    }

    #[test]
    fn deserialized_names_are_trimmed() {
        let client: Client = serde_json::from_str(r#"{"id": 1, "name": "  Ann  "}"#).unwrap();
        assert_eq!(client, Client::new(1, "Ann"));
        let product: Product =
            serde_json::from_str(r#"{"id": 10, "name": "\tLamp ", "price": 2.5}"#).unwrap();
        assert_eq!(product.name, "Lamp");
    }

    #[test]
    fn dangling_ref_display() {
        let r = DanglingRef { order_id: 7, kind: RefKind::Product, id: 42 };
        assert_eq!(r.to_string(), "order 7 references unknown product 42");
    }
}
