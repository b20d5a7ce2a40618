// src/graph/mod.rs
//! Client co-purchase graph.
//!
//! Two distinct clients are connected iff they have each ordered at least one
//! common product, in any of their orders.

pub mod builder;
pub mod client_graph;
pub mod queries;

pub use builder::{build_index, client_graph, InvertedIndex};
pub use client_graph::ClientGraph;
