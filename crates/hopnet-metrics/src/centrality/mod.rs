//! Weighted degree-based centralities.
//!
//! - [`degree`]: Opsahl's generalized degree, `k * (s / k)^alpha`.
//! - [`h_degree`]: h-degree and the h-centrality derived from it.
//!
//! Every function returns a map keyed by node label. In and out variants
//! are only defined for directed graphs and fail with
//! [`MetricError::UnsupportedOperation`] otherwise.

pub mod degree;
pub mod h_degree;

use std::collections::BTreeMap;

use hopnet_core::error::{MetricError, Result};
use hopnet_core::graph::{AccessGraph, Edge};

pub use degree::{degree_centrality, in_degree_centrality, out_degree_centrality};
pub use h_degree::{
    h_centrality, h_degree, in_h_centrality, in_h_degree, out_h_centrality, out_h_degree,
};

/// Which edges of a node a centrality counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Incidence {
    /// Incoming and outgoing edges together.
    Total,
    In,
    Out,
}

impl Incidence {
    /// Edges of `node` counted by degree centrality.
    ///
    /// On a directed graph `Total` is in + out, so a reciprocated pair
    /// contributes two edges. On an undirected graph `out_edges` already
    /// covers the whole neighbourhood.
    pub(crate) fn degree_edges<G: AccessGraph + ?Sized>(
        self,
        graph: &G,
        node: G::Node,
    ) -> Vec<Edge<G::Node>> {
        match self {
            Self::Total if graph.is_directed() => {
                let mut edges = graph.out_edges(node);
                edges.extend(graph.in_edges(node));
                edges
            }
            Self::Total | Self::Out => graph.out_edges(node),
            Self::In => graph.in_edges(node),
        }
    }
}

/// Insert `value` under `label`, rejecting a label seen before.
pub(crate) fn insert_unique<V>(
    map: &mut BTreeMap<String, V>,
    label: String,
    value: V,
) -> Result<()> {
    if map.contains_key(&label) {
        return Err(MetricError::DuplicateNodeLabel(label));
    }
    map.insert(label, value);
    Ok(())
}
