//! [`AccessGraph`] for plain `petgraph::Graph` values.
//!
//! Node labels come from the node weight's `Display` impl, and edge weights
//! from the edge payload's [`WeightAttr`] impl. Parallel edges are allowed
//! by petgraph; lookups by endpoint pair see the first one.

use std::fmt;

use petgraph::{
    Direction, EdgeType,
    graph::{Graph, IndexType, NodeIndex},
};

use super::{AccessGraph, Edge, WeightAttr};

impl<N, E, Ty, Ix> AccessGraph for Graph<N, E, Ty, Ix>
where
    N: fmt::Display,
    E: WeightAttr,
    Ty: EdgeType,
    Ix: IndexType,
{
    type Node = NodeIndex<Ix>;

    fn is_directed(&self) -> bool {
        Ty::is_directed()
    }

    fn order(&self) -> usize {
        self.node_count()
    }

    fn node_ids(&self) -> Vec<Self::Node> {
        self.node_indices().collect()
    }

    fn label(&self, node: Self::Node) -> String {
        self[node].to_string()
    }

    fn out_edges(&self, node: Self::Node) -> Vec<Edge<Self::Node>> {
        self.neighbors_directed(node, Direction::Outgoing)
            .map(|target| Edge::new(node, target))
            .collect()
    }

    fn in_edges(&self, node: Self::Node) -> Vec<Edge<Self::Node>> {
        self.neighbors_directed(node, Direction::Incoming)
            .map(|source| Edge::new(source, node))
            .collect()
    }

    fn has_edge(&self, from: Self::Node, to: Self::Node) -> bool {
        self.contains_edge(from, to)
    }

    fn weight(&self, from: Self::Node, to: Self::Node) -> Option<f64> {
        self.find_edge(from, to)
            .and_then(|edge| self.edge_weight(edge))
            .and_then(WeightAttr::as_weight)
    }
}

#[cfg(test)]
mod tests {
    use petgraph::graph::{DiGraph, UnGraph};

    use crate::graph::{AccessGraph, Edge};

    #[test]
    fn directed_edges_keep_orientation() {
        let mut g = DiGraph::<&str, f64>::new();
        let a = g.add_node("A");
        let b = g.add_node("B");
        let c = g.add_node("C");
        g.add_edge(a, b, 2.0);
        g.add_edge(c, a, 1.0);

        assert!(AccessGraph::is_directed(&g));
        assert_eq!(g.order(), 3);
        assert_eq!(g.out_edges(a), vec![Edge::new(a, b)]);
        assert_eq!(g.in_edges(a), vec![Edge::new(c, a)]);
        assert!(g.has_edge(a, b));
        assert!(!g.has_edge(b, a));
        assert_eq!(AccessGraph::weight(&g, a, b), Some(2.0));
        assert_eq!(AccessGraph::weight(&g, b, a), None);
        assert_eq!(g.label(c), "C");
    }

    #[test]
    fn incident_edges_merge_both_directions() {
        let mut g = DiGraph::<&str, ()>::new();
        let a = g.add_node("A");
        let b = g.add_node("B");
        let c = g.add_node("C");
        g.add_edge(a, b, ());
        g.add_edge(b, a, ());
        g.add_edge(c, a, ());

        // A→B and B→A collapse into one (A, B) entry.
        assert_eq!(g.incident_edges(a), vec![Edge::new(a, b), Edge::new(a, c)]);
    }

    #[test]
    fn undirected_lookups_ignore_orientation() {
        let mut g = UnGraph::<&str, u32>::new_undirected();
        let a = g.add_node("A");
        let b = g.add_node("B");
        g.add_edge(a, b, 4);

        assert!(!AccessGraph::is_directed(&g));
        assert!(g.has_edge(b, a));
        assert_eq!(AccessGraph::weight(&g, b, a), Some(4.0));
        assert_eq!(g.out_edges(b), vec![Edge::new(b, a)]);
        assert_eq!(g.incident_edges(a), vec![Edge::new(a, b)]);
    }

    #[test]
    fn unit_payload_has_no_weight() {
        let mut g = DiGraph::<&str, ()>::new();
        let a = g.add_node("A");
        let b = g.add_node("B");
        g.add_edge(a, b, ());
        assert!(g.has_edge(a, b));
        assert_eq!(AccessGraph::weight(&g, a, b), None);
    }
}
