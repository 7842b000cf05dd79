//! Direction strategy shared by the frontier builder and the entropy scorer.
//!
//! Each variant fixes three choices:
//!
//! | Variant     | Edge operator      | Reached endpoint | Anchor endpoint |
//! |-------------|--------------------|------------------|-----------------|
//! | `Symmetric` | all incident edges | target           | source          |
//! | `Out`       | outgoing edges     | target           | source          |
//! | `In`        | incoming edges     | source           | target          |
//!
//! The reached endpoint of a hop-`j` edge is both the node scored at hop
//! `j` and the node the hop-`j+1` expansion starts from.

use hopnet_core::graph::{AccessGraph, Edge, UndirectedView};
use serde::{Deserialize, Serialize};

/// Which edges an accessibility computation follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Edges are undirected neighbours regardless of storage direction.
    Symmetric,
    /// Who can reach the node: walk incoming edges backwards.
    In,
    /// What the node can reach: walk outgoing edges forwards.
    Out,
}

impl Direction {
    pub const ALL: [Self; 3] = [Self::Symmetric, Self::In, Self::Out];

    /// `In` and `Out` are only defined on directed graphs.
    #[must_use]
    pub const fn requires_directed(self) -> bool {
        !matches!(self, Self::Symmetric)
    }

    /// Public operation name, used in error messages and spans.
    #[must_use]
    pub const fn operation(self) -> &'static str {
        match self {
            Self::Symmetric => "accessibility",
            Self::In => "in_accessibility",
            Self::Out => "out_accessibility",
        }
    }

    /// Hop-1 frontier of `node`.
    #[must_use]
    pub fn seed_edges<G: AccessGraph + ?Sized>(
        self,
        graph: &G,
        node: G::Node,
    ) -> Vec<Edge<G::Node>> {
        self.step_edges(graph, node)
    }

    /// Edges leaving `node` during expansion under this direction.
    #[must_use]
    pub fn step_edges<G: AccessGraph + ?Sized>(
        self,
        graph: &G,
        node: G::Node,
    ) -> Vec<Edge<G::Node>> {
        match self {
            Self::Symmetric => graph.incident_edges(node),
            Self::In => graph.in_edges(node),
            Self::Out => graph.out_edges(node),
        }
    }

    /// The endpoint an edge leads to: scored at this hop, expanded at the next.
    #[must_use]
    pub fn reached_endpoint<N: Copy>(self, edge: Edge<N>) -> N {
        match self {
            Self::In => edge.source,
            Self::Symmetric | Self::Out => edge.target,
        }
    }

    /// The endpoint an edge was discovered from.
    #[must_use]
    pub fn anchor_endpoint<N: Copy>(self, edge: Edge<N>) -> N {
        match self {
            Self::In => edge.target,
            Self::Symmetric | Self::Out => edge.source,
        }
    }

    /// Rebuild the stored edge between an anchor and a reached node.
    #[must_use]
    pub fn orient<N>(self, anchor: N, reached: N) -> Edge<N> {
        match self {
            Self::In => Edge::new(reached, anchor),
            Self::Symmetric | Self::Out => Edge::new(anchor, reached),
        }
    }

    /// Whether `edge` exists under this direction's view of the graph.
    #[must_use]
    pub fn link_exists<G: AccessGraph + ?Sized>(self, graph: &G, edge: Edge<G::Node>) -> bool {
        match self {
            Self::Symmetric => UndirectedView::new(graph).has_edge(edge.source, edge.target),
            Self::In | Self::Out => graph.has_edge(edge.source, edge.target),
        }
    }

    /// Weight of `edge` under this direction's view of the graph.
    #[must_use]
    pub fn link_weight<G: AccessGraph + ?Sized>(
        self,
        graph: &G,
        edge: Edge<G::Node>,
    ) -> Option<f64> {
        match self {
            Self::Symmetric => UndirectedView::new(graph).weight(edge.source, edge.target),
            Self::In | Self::Out => graph.weight(edge.source, edge.target),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hopnet_core::graph::DiNetwork;

    #[test]
    fn only_symmetric_accepts_undirected_graphs() {
        assert!(!Direction::Symmetric.requires_directed());
        assert!(Direction::In.requires_directed());
        assert!(Direction::Out.requires_directed());
    }

    #[test]
    fn endpoints_follow_direction() {
        let edge = Edge::new(1, 2);
        assert_eq!(Direction::Out.reached_endpoint(edge), 2);
        assert_eq!(Direction::Symmetric.reached_endpoint(edge), 2);
        assert_eq!(Direction::In.reached_endpoint(edge), 1);
        assert_eq!(Direction::Out.anchor_endpoint(edge), 1);
        assert_eq!(Direction::In.anchor_endpoint(edge), 2);
    }

    #[test]
    fn orient_inverts_endpoint_choice() {
        for direction in Direction::ALL {
            let edge = Edge::new(3, 9);
            let rebuilt = direction.orient(
                direction.anchor_endpoint(edge),
                direction.reached_endpoint(edge),
            );
            assert_eq!(rebuilt, edge, "{direction:?}");
        }
    }

    #[test]
    fn step_edges_pick_operator() {
        let net = DiNetwork::from_weighted_edges(&[("A", "B", 1.0), ("C", "A", 1.0)]);
        let a = net.node_index("A").expect("A node");
        let b = net.node_index("B").expect("B node");
        let c = net.node_index("C").expect("C node");

        assert_eq!(Direction::Out.step_edges(&net, a), vec![Edge::new(a, b)]);
        assert_eq!(Direction::In.step_edges(&net, a), vec![Edge::new(c, a)]);
        assert_eq!(
            Direction::Symmetric.step_edges(&net, a),
            vec![Edge::new(a, b), Edge::new(a, c)]
        );
    }

    #[test]
    fn symmetric_links_ignore_storage_direction() {
        let net = DiNetwork::from_weighted_edges(&[("A", "B", 4.0)]);
        let a = net.node_index("A").expect("A node");
        let b = net.node_index("B").expect("B node");
        let backwards = Edge::new(b, a);

        assert!(Direction::Symmetric.link_exists(&net, backwards));
        assert_eq!(Direction::Symmetric.link_weight(&net, backwards), Some(4.0));
        assert!(!Direction::Out.link_exists(&net, backwards));
        assert_eq!(Direction::Out.link_weight(&net, backwards), None);
    }

    #[test]
    fn serde_uses_snake_case_names() {
        let json = serde_json::to_string(&Direction::Symmetric).expect("serialize");
        assert_eq!(json, "\"symmetric\"");
        let back: Direction = serde_json::from_str("\"in\"").expect("parse");
        assert_eq!(back, Direction::In);
    }
}
