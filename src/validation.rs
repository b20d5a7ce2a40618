// src/validation.rs
//! Field checks on snapshot records and a reference audit over orders.

use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

use crate::error::{Result, StoreError};
use crate::snapshot::Snapshot;
use crate::types::{Client, DanglingRef, Order, Product, RefKind};

pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";
pub const PHONE_PATTERN: &str = r"^\+\d{10,12}$";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Entity {
    Client,
    Product,
    Order,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Client => write!(f, "client"),
            Self::Product => write!(f, "product"),
            Self::Order => write!(f, "order"),
        }
    }
}

/// A single rejected field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Issue {
    pub entity: Entity,
    pub id: i64,
    pub message: String,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.entity, self.id, self.message)
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub issues: Vec<Issue>,
    pub dangling: Vec<DanglingRef>,
}

impl ValidationReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Converts field issues into an error. Dangling references are reported
    /// but left to the analysis policy.
    ///
    /// # Errors
    /// Returns `Validation` listing every issue.
    pub fn into_result(self) -> Result<()> {
        if self.is_clean() {
            return Ok(());
        }
        Err(StoreError::Validation(
            self.issues.iter().map(ToString::to_string).collect(),
        ))
    }
}

/// Compiled field rules.
pub struct Validator {
    email: Regex,
    phone: Regex,
}

impl Validator {
    /// # Errors
    /// Returns error if a built-in pattern fails to compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            email: Regex::new(EMAIL_PATTERN)?,
            phone: Regex::new(PHONE_PATTERN)?,
        })
    }

    /// Runs every field check plus the reference audit.
    #[must_use]
    pub fn validate(&self, snapshot: &Snapshot) -> ValidationReport {
        let mut issues = Vec::new();
        self.check_clients(&snapshot.clients, &mut issues);
        check_products(&snapshot.products, &mut issues);
        check_orders(&snapshot.orders, &mut issues);

        ValidationReport {
            issues,
            dangling: audit_references(snapshot),
        }
    }

    fn check_clients(&self, clients: &[Client], issues: &mut Vec<Issue>) {
        let mut seen = HashSet::new();
        for client in clients {
            let mut push = |message: String| {
                issues.push(Issue {
                    entity: Entity::Client,
                    id: client.id,
                    message,
                });
            };
            if !seen.insert(client.id) {
                push("duplicate id".to_string());
            }
            if client.name.trim().is_empty() {
                push("name is blank".to_string());
            }
            if let Some(email) = &client.email {
                if !self.email.is_match(email) {
                    push(format!("invalid email '{email}'"));
                }
            }
            if let Some(phone) = &client.phone {
                if !self.phone.is_match(phone) {
                    push(format!("invalid phone '{phone}'"));
                }
            }
        }
    }
}

fn check_products(products: &[Product], issues: &mut Vec<Issue>) {
    let mut seen = HashSet::new();
    for product in products {
        let mut push = |message: String| {
            issues.push(Issue {
                entity: Entity::Product,
                id: product.id,
                message,
            });
        };
        if !seen.insert(product.id) {
            push("duplicate id".to_string());
        }
        if product.name.trim().is_empty() {
            push("name is blank".to_string());
        }
        if !product.price.is_finite() || product.price < 0.0 {
            push(format!("price {} must be a non-negative number", product.price));
        }
    }
}

fn check_orders(orders: &[Order], issues: &mut Vec<Issue>) {
    let mut seen = HashSet::new();
    for order in orders {
        let mut push = |message: String| {
            issues.push(Issue {
                entity: Entity::Order,
                id: order.id,
                message,
            });
        };
        if !seen.insert(order.id) {
            push("duplicate id".to_string());
        }
        if order.date.trim().is_empty() {
            push("date is blank".to_string());
        }
        if !order.total.is_finite() {
            push(format!("total {} is not a number", order.total));
        }
    }
}

/// Lists every order reference that does not resolve, in order-id order.
#[must_use]
pub fn audit_references(snapshot: &Snapshot) -> Vec<DanglingRef> {
    let clients: HashSet<i64> = snapshot.clients.iter().map(|c| c.id).collect();
    let products: HashSet<i64> = snapshot.products.iter().map(|p| p.id).collect();
    let mut dangling = Vec::new();

    for order in &snapshot.orders {
        if !clients.contains(&order.client_id) {
            dangling.push(DanglingRef {
                order_id: order.id,
                kind: RefKind::Client,
                id: order.client_id,
            });
        }
        for &pid in &order.product_ids {
            if !products.contains(&pid) {
                dangling.push(DanglingRef {
                    order_id: order.id,
                    kind: RefKind::Product,
                    id: pid,
                });
            }
        }
    }

    dangling.sort();
    dangling.dedup();
    dangling
}
