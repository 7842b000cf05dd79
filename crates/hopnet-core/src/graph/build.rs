//! Labeled network construction from edge lists.
//!
//! # Overview
//!
//! [`Network`] wraps a petgraph [`Graph`] whose nodes are string labels and
//! whose edges carry an optional `f64` weight. It keeps a label → index map
//! so callers can build graphs from `(from, to, weight)` triples and look
//! nodes up by name afterwards.
//!
//! ## Duplicate Edges
//!
//! petgraph allows parallel edges; `Network` does not. Re-adding an
//! existing edge replaces its weight, so the last write wins.
//!
//! ## Cache Invalidation
//!
//! [`Network::content_hash`] is a BLAKE3 hash of the sorted node labels and
//! the sorted weighted edge list. It changes only when the graph content
//! changes, so it can key cached metric results.

use std::collections::HashMap;

use petgraph::{
    Directed, EdgeType, Undirected,
    graph::{EdgeIndex, Graph, NodeIndex},
    visit::EdgeRef,
};

use super::{AccessGraph, Edge};

/// Directed labeled network.
pub type DiNetwork = Network<Directed>;

/// Undirected labeled network.
pub type UnNetwork = Network<Undirected>;

// ---------------------------------------------------------------------------
// Network
// ---------------------------------------------------------------------------

/// A labeled, optionally weighted graph.
#[derive(Debug, Clone)]
pub struct Network<Ty: EdgeType = Directed> {
    /// Nodes are labels, edges carry an optional weight attribute.
    pub graph: Graph<String, Option<f64>, Ty>,
    /// Mapping from node label to petgraph `NodeIndex`.
    pub node_map: HashMap<String, NodeIndex>,
}

impl<Ty: EdgeType> Default for Network<Ty> {
    fn default() -> Self {
        Self {
            graph: Graph::default(),
            node_map: HashMap::new(),
        }
    }
}

impl<Ty: EdgeType> Network<Ty> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a network from weighted `(from, to, weight)` triples.
    #[must_use]
    pub fn from_weighted_edges(edges: &[(&str, &str, f64)]) -> Self {
        let mut network = Self::new();
        for &(from, to, weight) in edges {
            network.add_edge(from, to, Some(weight));
        }
        network
    }

    /// Build a network from `(from, to)` pairs with no weight attribute.
    #[must_use]
    pub fn from_edges(edges: &[(&str, &str)]) -> Self {
        let mut network = Self::new();
        for &(from, to) in edges {
            network.add_edge(from, to, None);
        }
        network
    }

    /// Build a network that also contains `nodes`, including isolated ones.
    ///
    /// Nodes are inserted first, in the given order.
    #[must_use]
    pub fn with_nodes(nodes: &[&str], edges: &[(&str, &str, f64)]) -> Self {
        let mut network = Self::new();
        for node in nodes {
            network.add_node(node);
        }
        for &(from, to, weight) in edges {
            network.add_edge(from, to, Some(weight));
        }
        network
    }

    /// Insert `label` if absent and return its index.
    pub fn add_node(&mut self, label: &str) -> NodeIndex {
        if let Some(&idx) = self.node_map.get(label) {
            return idx;
        }
        let idx = self.graph.add_node(label.to_string());
        self.node_map.insert(label.to_string(), idx);
        idx
    }

    /// Insert or update edge `from -> to`, creating endpoints as needed.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: Option<f64>) -> EdgeIndex {
        let a = self.add_node(from);
        let b = self.add_node(to);
        if let Some(existing) = self.graph.find_edge(a, b) {
            self.graph[existing] = weight;
            return existing;
        }
        self.graph.add_edge(a, b, weight)
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Look up the `NodeIndex` for a label.
    #[must_use]
    pub fn node_index(&self, label: &str) -> Option<NodeIndex> {
        self.node_map.get(label).copied()
    }

    /// Return the label of a node.
    #[must_use]
    pub fn node_label(&self, idx: NodeIndex) -> Option<&str> {
        self.graph.node_weight(idx).map(String::as_str)
    }

    /// BLAKE3 hash of the node set and weighted edge set.
    ///
    /// Independent of insertion order. Undirected edges are hashed with
    /// their endpoints sorted.
    #[must_use]
    pub fn content_hash(&self) -> String {
        let mut labels: Vec<&str> = self.node_map.keys().map(String::as_str).collect();
        labels.sort_unstable();

        let mut edges: Vec<(&str, &str, Option<f64>)> = self
            .graph
            .edge_references()
            .map(|e| {
                let a = self.graph[e.source()].as_str();
                let b = self.graph[e.target()].as_str();
                let (a, b) = if Ty::is_directed() || a <= b {
                    (a, b)
                } else {
                    (b, a)
                };
                (a, b, *e.weight())
            })
            .collect();
        edges.sort_unstable_by(|x, y| x.0.cmp(y.0).then_with(|| x.1.cmp(y.1)));

        let mut hasher = blake3::Hasher::new();
        hasher.update(if Ty::is_directed() {
            b"directed\x00"
        } else {
            b"undirect\x00"
        });
        for label in labels {
            hasher.update(label.as_bytes());
            hasher.update(b"\x00");
        }
        hasher.update(b"\x01");
        for (a, b, weight) in edges {
            hasher.update(a.as_bytes());
            hasher.update(b"\x00");
            hasher.update(b.as_bytes());
            hasher.update(b"\x00");
            match weight {
                Some(w) => hasher.update(&w.to_bits().to_le_bytes()),
                None => hasher.update(b"-"),
            };
            hasher.update(b"\x00");
        }
        format!("blake3:{}", hasher.finalize())
    }
}

impl<Ty: EdgeType> AccessGraph for Network<Ty> {
    type Node = NodeIndex;

    fn is_directed(&self) -> bool {
        Ty::is_directed()
    }

    fn order(&self) -> usize {
        self.graph.node_count()
    }

    fn node_ids(&self) -> Vec<NodeIndex> {
        self.graph.node_ids()
    }

    fn label(&self, node: NodeIndex) -> String {
        self.graph.label(node)
    }

    fn out_edges(&self, node: NodeIndex) -> Vec<Edge<NodeIndex>> {
        self.graph.out_edges(node)
    }

    fn in_edges(&self, node: NodeIndex) -> Vec<Edge<NodeIndex>> {
        self.graph.in_edges(node)
    }

    fn has_edge(&self, from: NodeIndex, to: NodeIndex) -> bool {
        self.graph.has_edge(from, to)
    }

    fn weight(&self, from: NodeIndex, to: NodeIndex) -> Option<f64> {
        AccessGraph::weight(&self.graph, from, to)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
