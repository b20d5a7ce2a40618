// src/graph/client_graph.rs
//! The co-purchase graph structure and query interface.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::ops::Bound;

use crate::types::ClientId;

/// Undirected client graph stored as adjacency sets.
///
/// Both directions of every edge are stored, so `a ∈ adj[b]` iff `b ∈ adj[a]`.
/// Self-loops are never inserted, and set semantics collapse parallel edges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "GraphView", from = "GraphView")]
pub struct ClientGraph {
    pub(crate) adjacency: BTreeMap<ClientId, BTreeSet<ClientId>>,
}

impl ClientGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, id: ClientId) {
        self.adjacency.entry(id).or_default();
    }

    /// Connects two clients. Returns false for self-loops and existing edges.
    pub fn add_edge(&mut self, a: ClientId, b: ClientId) -> bool {
        if a == b {
            return false;
        }
        let fresh = self.adjacency.entry(a).or_default().insert(b);
        self.adjacency.entry(b).or_default().insert(a);
        fresh
    }

    /// Node ids in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = ClientId> + '_ {
        self.adjacency.keys().copied()
    }

    /// Each edge once as `(low, high)`, in ascending order.
    pub fn edges(&self) -> impl Iterator<Item = (ClientId, ClientId)> + '_ {
        self.adjacency.iter().flat_map(|(&a, peers)| {
            peers
                .range((Bound::Excluded(a), Bound::Unbounded))
                .map(move |&b| (a, b))
        })
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).sum::<usize>() / 2
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    #[must_use]
    pub fn contains_node(&self, id: ClientId) -> bool {
        self.adjacency.contains_key(&id)
    }

    #[must_use]
    pub fn contains_edge(&self, a: ClientId, b: ClientId) -> bool {
        self.adjacency.get(&a).is_some_and(|peers| peers.contains(&b))
    }

    /// Clients sharing at least one product with `id`, ascending.
    #[must_use]
    pub fn neighbors(&self, id: ClientId) -> Vec<ClientId> {
        self.adjacency
            .get(&id)
            .map(|peers| peers.iter().copied().collect())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn degree(&self, id: ClientId) -> usize {
        self.adjacency.get(&id).map_or(0, BTreeSet::len)
    }

    /// Clients with at least `min_degree` neighbours, busiest first.
    #[must_use]
    pub fn hubs(&self, min_degree: usize) -> Vec<(ClientId, usize)> {
        super::queries::hubs(self, min_degree)
    }

    /// Connected components, each sorted, ordered by their smallest member.
    #[must_use]
    pub fn components(&self) -> Vec<Vec<ClientId>> {
        super::queries::components(self)
    }
}

/// Wire shape: `{ "nodes": [..], "edges": [[a, b], ..] }` with `a < b`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct GraphView {
    nodes: Vec<ClientId>,
    edges: Vec<(ClientId, ClientId)>,
}

impl From<ClientGraph> for GraphView {
    fn from(graph: ClientGraph) -> Self {
        Self {
            nodes: graph.nodes().collect(),
            edges: graph.edges().collect(),
        }
    }
}

impl From<GraphView> for ClientGraph {
    fn from(view: GraphView) -> Self {
        let mut graph = ClientGraph::new();
        for id in view.nodes {
            graph.add_node(id);
        }
        for (a, b) in view.edges {
            graph.add_edge(a, b);
        }
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_loops_rejected() {
        let mut g = ClientGraph::new();
        assert!(!g.add_edge(4, 4));
        assert_eq!(g.edge_count(), 0);
        assert!(!g.contains_node(4));
    }

    #[test]
    fn parallel_edges_collapse() {
        let mut g = ClientGraph::new();
        assert!(g.add_edge(1, 2));
        assert!(!g.add_edge(2, 1));
        assert_eq!(g.edges().collect::<Vec<_>>(), vec![(1, 2)]);
        assert!(g.contains_edge(2, 1));
    }

    #[test]
    fn edges_listed_low_high() {
        let mut g = ClientGraph::new();
        g.add_edge(3, 1);
        g.add_edge(2, 3);
        g.add_node(9);
        assert_eq!(g.edges().collect::<Vec<_>>(), vec![(1, 3), (2, 3)]);
        assert_eq!(g.nodes().collect::<Vec<_>>(), vec![1, 2, 3, 9]);
        assert_eq!(g.degree(3), 2);
        assert_eq!(g.degree(9), 0);
    }

    #[test]
    fn json_shape() {
        let mut g = ClientGraph::new();
        g.add_edge(2, 1);
        g.add_node(5);
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(json, r#"{"nodes":[1,2,5],"edges":[[1,2]]}"#);
        let back: ClientGraph = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }
}
