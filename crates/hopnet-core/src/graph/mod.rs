//! Graph contract consumed by every hopnet metric.
//!
//! # Overview
//!
//! Metrics never own or mutate a graph. They read it through the
//! [`AccessGraph`] trait, which exposes exactly the primitives the
//! algorithms need: node enumeration, directed edge enumeration, edge
//! existence, and a numeric weight lookup.
//!
//! ```text
//! petgraph::Graph<N, E, Ty>  ──┐
//! Network (labeled builder)  ──┼──▶ AccessGraph ──▶ hopnet-metrics
//! UndirectedView / Induced   ──┘
//! ```
//!
//! Implementations are provided for [`petgraph::Graph`] (any `N: Display`,
//! any `E: WeightAttr`), for the labeled [`Network`] wrapper, and for the
//! [`UndirectedView`] and [`InducedSubgraph`] adapters.

use std::fmt;
use std::hash::Hash;

pub mod build;
pub mod petgraph_impl;
pub mod view;

pub use build::{DiNetwork, Network, UnNetwork};
pub use view::{InducedSubgraph, UndirectedView};

// ---------------------------------------------------------------------------
// Edge
// ---------------------------------------------------------------------------

/// An ordered `(source, target)` pair of node handles.
///
/// Ordering is lexicographic on `(source, target)`, which lets frontiers be
/// stored in ordered sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge<N> {
    pub source: N,
    pub target: N,
}

impl<N> Edge<N> {
    #[must_use]
    pub const fn new(source: N, target: N) -> Self {
        Self { source, target }
    }

    /// The same pair with endpoints swapped.
    #[must_use]
    pub fn reversed(self) -> Self {
        Self {
            source: self.target,
            target: self.source,
        }
    }
}

// ---------------------------------------------------------------------------
// WeightAttr
// ---------------------------------------------------------------------------

/// Extracts the numeric weight attribute from an edge payload.
///
/// `None` means the edge carries no weight at all; metrics running in
/// weighted mode report that as a data error rather than treating it as 0.
pub trait WeightAttr {
    fn as_weight(&self) -> Option<f64>;
}

impl WeightAttr for () {
    fn as_weight(&self) -> Option<f64> {
        None
    }
}

impl WeightAttr for f64 {
    fn as_weight(&self) -> Option<f64> {
        Some(*self)
    }
}

impl WeightAttr for f32 {
    fn as_weight(&self) -> Option<f64> {
        Some(f64::from(*self))
    }
}

macro_rules! lossless_weight {
    ($($t:ty),*) => {
        $(
            impl WeightAttr for $t {
                fn as_weight(&self) -> Option<f64> {
                    Some(f64::from(*self))
                }
            }
        )*
    };
}

lossless_weight!(u8, u16, u32, i8, i16, i32);

macro_rules! wide_weight {
    ($($t:ty),*) => {
        $(
            impl WeightAttr for $t {
                #[allow(clippy::cast_precision_loss)]
                fn as_weight(&self) -> Option<f64> {
                    Some(*self as f64)
                }
            }
        )*
    };
}

wide_weight!(u64, i64, usize);

impl<T: WeightAttr> WeightAttr for Option<T> {
    fn as_weight(&self) -> Option<f64> {
        self.as_ref().and_then(WeightAttr::as_weight)
    }
}

// ---------------------------------------------------------------------------
// AccessGraph
// ---------------------------------------------------------------------------

/// Read-only view of a graph, as required by the metric engines.
///
/// Edge enumeration methods return owned `Vec`s; callers are free to
/// collect them into sets. On an undirected graph `out_edges` and
/// `in_edges` both describe the full neighbourhood, oriented away from and
/// towards `node` respectively.
pub trait AccessGraph {
    /// Node handle. Must be cheap to copy and totally ordered.
    type Node: Copy + Eq + Ord + Hash + fmt::Debug;

    fn is_directed(&self) -> bool;

    /// Number of nodes.
    fn order(&self) -> usize;

    /// Every node handle, in the graph's own iteration order.
    fn node_ids(&self) -> Vec<Self::Node>;

    /// Stable string identity of `node`, used to key metric results.
    fn label(&self, node: Self::Node) -> String;

    /// `(node, t)` for every successor `t`.
    fn out_edges(&self, node: Self::Node) -> Vec<Edge<Self::Node>>;

    /// `(s, node)` for every predecessor `s`.
    fn in_edges(&self, node: Self::Node) -> Vec<Edge<Self::Node>>;

    /// Every edge touching `node`, oriented `(node, other)`, deduplicated.
    ///
    /// Direction is ignored: on a directed graph this merges outgoing edges
    /// with reversed incoming edges.
    fn incident_edges(&self, node: Self::Node) -> Vec<Edge<Self::Node>> {
        let mut edges = self.out_edges(node);
        edges.extend(self.in_edges(node).into_iter().map(Edge::reversed));
        edges.sort_unstable();
        edges.dedup();
        edges
    }

    /// True iff a stored edge `from -> to` exists (either orientation on an
    /// undirected graph).
    fn has_edge(&self, from: Self::Node, to: Self::Node) -> bool;

    /// Numeric weight of edge `from -> to`, or `None` if the edge is absent
    /// or carries no weight.
    fn weight(&self, from: Self::Node, to: Self::Node) -> Option<f64>;
}

impl<G: AccessGraph + ?Sized> AccessGraph for &G {
    type Node = G::Node;

    fn is_directed(&self) -> bool {
        (**self).is_directed()
    }

    fn order(&self) -> usize {
        (**self).order()
    }

    fn node_ids(&self) -> Vec<Self::Node> {
        (**self).node_ids()
    }

    fn label(&self, node: Self::Node) -> String {
        (**self).label(node)
    }

    fn out_edges(&self, node: Self::Node) -> Vec<Edge<Self::Node>> {
        (**self).out_edges(node)
    }

    fn in_edges(&self, node: Self::Node) -> Vec<Edge<Self::Node>> {
        (**self).in_edges(node)
    }

    fn incident_edges(&self, node: Self::Node) -> Vec<Edge<Self::Node>> {
        (**self).incident_edges(node)
    }

    fn has_edge(&self, from: Self::Node, to: Self::Node) -> bool {
        (**self).has_edge(from, to)
    }

    fn weight(&self, from: Self::Node, to: Self::Node) -> Option<f64> {
        (**self).weight(from, to)
    }
}
