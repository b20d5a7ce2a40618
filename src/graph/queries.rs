// src/graph/queries.rs
use std::collections::BTreeSet;

use super::client_graph::ClientGraph;
use crate::analysis::ranking::by_count_then_id;
use crate::types::ClientId;

#[must_use]
pub fn hubs(graph: &ClientGraph, min_degree: usize) -> Vec<(ClientId, usize)> {
    let mut ranked: Vec<(ClientId, usize)> = graph
        .adjacency
        .iter()
        .map(|(&id, peers)| (id, peers.len()))
        .filter(|&(_, degree)| degree >= min_degree)
        .collect();
    ranked.sort_by(by_count_then_id);
    ranked
}

#[must_use]
pub fn components(graph: &ClientGraph) -> Vec<Vec<ClientId>> {
    let mut seen: BTreeSet<ClientId> = BTreeSet::new();
    let mut result = Vec::new();

    // Keys iterate ascending, so each component is discovered from its smallest member.
    for &start in graph.adjacency.keys() {
        if seen.insert(start) {
            result.push(collect_component(graph, start, &mut seen));
        }
    }

    result
}

fn collect_component(
    graph: &ClientGraph,
    start: ClientId,
    seen: &mut BTreeSet<ClientId>,
) -> Vec<ClientId> {
    let mut members = vec![start];
    let mut stack = vec![start];

    while let Some(node) = stack.pop() {
        let Some(peers) = graph.adjacency.get(&node) else {
            continue;
        };
        for &peer in peers {
            if seen.insert(peer) {
                members.push(peer);
                stack.push(peer);
            }
        }
    }

    members.sort_unstable();
    members
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ClientGraph {
        let mut g = ClientGraph::new();
        g.add_edge(1, 2);
        g.add_edge(2, 3);
        g.add_edge(5, 4);
        g.add_node(7);
        g
    }

    #[test]
    fn hubs_rank_by_degree() {
        let g = sample();
        assert_eq!(hubs(&g, 1), vec![(2, 2), (1, 1), (3, 1), (4, 1), (5, 1)]);
        assert_eq!(hubs(&g, 2), vec![(2, 2)]);
        assert_eq!(hubs(&g, 0).len(), 6);
    }

    #[test]
    fn components_partition_nodes() {
        let g = sample();
        assert_eq!(components(&g), vec![vec![1, 2, 3], vec![4, 5], vec![7]]);
    }

    #[test]
    fn empty_graph_has_no_components() {
        assert!(components(&ClientGraph::new()).is_empty());
    }
}
