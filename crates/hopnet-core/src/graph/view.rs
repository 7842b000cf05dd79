//! Borrowing adapters that reinterpret an existing [`AccessGraph`].

use std::collections::BTreeSet;

use super::{AccessGraph, Edge};

// ---------------------------------------------------------------------------
// UndirectedView
// ---------------------------------------------------------------------------

/// Treats any graph as undirected.
///
/// An edge `u - v` exists if either `u -> v` or `v -> u` is stored. When
/// both are stored, lookups for `(u, v)` see the `u -> v` edge.
#[derive(Debug, Clone, Copy)]
pub struct UndirectedView<'a, G: ?Sized> {
    inner: &'a G,
}

impl<'a, G: AccessGraph + ?Sized> UndirectedView<'a, G> {
    #[must_use]
    pub const fn new(inner: &'a G) -> Self {
        Self { inner }
    }
}

impl<G: AccessGraph + ?Sized> AccessGraph for UndirectedView<'_, G> {
    type Node = G::Node;

    fn is_directed(&self) -> bool {
        false
    }

    fn order(&self) -> usize {
        self.inner.order()
    }

    fn node_ids(&self) -> Vec<Self::Node> {
        self.inner.node_ids()
    }

    fn label(&self, node: Self::Node) -> String {
        self.inner.label(node)
    }

    fn out_edges(&self, node: Self::Node) -> Vec<Edge<Self::Node>> {
        self.inner.incident_edges(node)
    }

    fn in_edges(&self, node: Self::Node) -> Vec<Edge<Self::Node>> {
        self.inner
            .incident_edges(node)
            .into_iter()
            .map(Edge::reversed)
            .collect()
    }

    fn incident_edges(&self, node: Self::Node) -> Vec<Edge<Self::Node>> {
        self.inner.incident_edges(node)
    }

    fn has_edge(&self, from: Self::Node, to: Self::Node) -> bool {
        self.inner.has_edge(from, to) || self.inner.has_edge(to, from)
    }

    fn weight(&self, from: Self::Node, to: Self::Node) -> Option<f64> {
        if self.inner.has_edge(from, to) {
            self.inner.weight(from, to)
        } else {
            self.inner.weight(to, from)
        }
    }
}

// ---------------------------------------------------------------------------
// InducedSubgraph
// ---------------------------------------------------------------------------

/// The subgraph induced by a node subset: those nodes and every edge whose
/// endpoints both belong to it.
#[derive(Debug, Clone)]
pub struct InducedSubgraph<'a, G: AccessGraph + ?Sized> {
    inner: &'a G,
    members: BTreeSet<G::Node>,
}

impl<'a, G: AccessGraph + ?Sized> InducedSubgraph<'a, G> {
    #[must_use]
    pub fn new(inner: &'a G, members: impl IntoIterator<Item = G::Node>) -> Self {
        Self {
            inner,
            members: members.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn contains(&self, node: G::Node) -> bool {
        self.members.contains(&node)
    }
}

impl<G: AccessGraph + ?Sized> AccessGraph for InducedSubgraph<'_, G> {
    type Node = G::Node;

    fn is_directed(&self) -> bool {
        self.inner.is_directed()
    }

    fn order(&self) -> usize {
        self.members.len()
    }

    fn node_ids(&self) -> Vec<Self::Node> {
        self.members.iter().copied().collect()
    }

    fn label(&self, node: Self::Node) -> String {
        self.inner.label(node)
    }

    fn out_edges(&self, node: Self::Node) -> Vec<Edge<Self::Node>> {
        if !self.contains(node) {
            return Vec::new();
        }
        self.inner
            .out_edges(node)
            .into_iter()
            .filter(|e| self.contains(e.target))
            .collect()
    }

    fn in_edges(&self, node: Self::Node) -> Vec<Edge<Self::Node>> {
        if !self.contains(node) {
            return Vec::new();
        }
        self.inner
            .in_edges(node)
            .into_iter()
            .filter(|e| self.contains(e.source))
            .collect()
    }

    fn has_edge(&self, from: Self::Node, to: Self::Node) -> bool {
        self.contains(from) && self.contains(to) && self.inner.has_edge(from, to)
    }

    fn weight(&self, from: Self::Node, to: Self::Node) -> Option<f64> {
        if self.contains(from) && self.contains(to) {
            self.inner.weight(from, to)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DiNetwork;

    #[test]
    fn undirected_view_accepts_either_orientation() {
        let net = DiNetwork::from_weighted_edges(&[("A", "B", 2.0)]);
        let a = net.node_index("A").expect("A node");
        let b = net.node_index("B").expect("B node");
        let view = UndirectedView::new(&net);

        assert!(!view.is_directed());
        assert!(view.has_edge(b, a));
        assert_eq!(view.weight(b, a), Some(2.0));
        assert_eq!(view.out_edges(b), vec![Edge::new(b, a)]);
        assert_eq!(view.in_edges(b), vec![Edge::new(a, b)]);
    }

    #[test]
    fn undirected_view_prefers_stored_orientation() {
        let net = DiNetwork::from_weighted_edges(&[("A", "B", 2.0), ("B", "A", 7.0)]);
        let a = net.node_index("A").expect("A node");
        let b = net.node_index("B").expect("B node");
        let view = UndirectedView::new(&net);

        assert_eq!(view.weight(a, b), Some(2.0));
        assert_eq!(view.weight(b, a), Some(7.0));
    }

    #[test]
    fn induced_subgraph_drops_outside_edges() {
        let net = DiNetwork::from_weighted_edges(&[
            ("A", "B", 1.0),
            ("B", "C", 1.0),
            ("C", "A", 1.0),
        ]);
        let a = net.node_index("A").expect("A node");
        let b = net.node_index("B").expect("B node");
        let c = net.node_index("C").expect("C node");
        let sub = InducedSubgraph::new(&net, [a, b]);

        assert_eq!(sub.order(), 2);
        assert_eq!(sub.out_edges(a), vec![Edge::new(a, b)]);
        assert!(sub.out_edges(b).is_empty(), "B -> C leaves the subgraph");
        assert!(sub.in_edges(a).is_empty(), "C -> A enters from outside");
        assert!(!sub.has_edge(c, a));
        assert_eq!(sub.weight(b, c), None);
        assert!(sub.out_edges(c).is_empty());
    }
}
