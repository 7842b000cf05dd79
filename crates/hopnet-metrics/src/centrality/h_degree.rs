//! h-degree (Zhao, Rousseau & Ye, 2011) and h-centrality.
//!
//! The h-degree of a node is the largest `h` such that at least `h` of its
//! edges carry weight `>= h`. A node with edges weighted `1, 3, 3, 5` has
//! h-degree 3. Edges without a usable weight never qualify, and a node
//! with no qualifying edge has h-degree 0.
//!
//! h-centrality normalises h-degree by the `order - 1` possible neighbours.

use std::collections::BTreeMap;

use hopnet_core::error::{Result, require_directed};
use hopnet_core::graph::{AccessGraph, UndirectedView};
use tracing::{debug, instrument};

use super::{Incidence, insert_unique};

/// h-degree over the symmetric neighbourhood of each node.
///
/// # Errors
///
/// [`hopnet_core::MetricError::DuplicateNodeLabel`] if two nodes share a label.
#[instrument(skip(graph))]
pub fn h_degree<G: AccessGraph + ?Sized>(graph: &G) -> Result<BTreeMap<String, usize>> {
    h_degrees(graph, Incidence::Total)
}

/// h-degree over incoming edges.
///
/// # Errors
///
/// [`hopnet_core::MetricError::UnsupportedOperation`] on an undirected graph.
#[instrument(skip(graph))]
pub fn in_h_degree<G: AccessGraph + ?Sized>(graph: &G) -> Result<BTreeMap<String, usize>> {
    require_directed(graph.is_directed(), "in_h_degree")?;
    h_degrees(graph, Incidence::In)
}

/// h-degree over outgoing edges.
///
/// # Errors
///
/// [`hopnet_core::MetricError::UnsupportedOperation`] on an undirected graph.
#[instrument(skip(graph))]
pub fn out_h_degree<G: AccessGraph + ?Sized>(graph: &G) -> Result<BTreeMap<String, usize>> {
    require_directed(graph.is_directed(), "out_h_degree")?;
    h_degrees(graph, Incidence::Out)
}

/// [`h_degree`] divided by `order - 1`.
///
/// # Errors
///
/// As [`h_degree`].
#[instrument(skip(graph))]
pub fn h_centrality<G: AccessGraph + ?Sized>(graph: &G) -> Result<BTreeMap<String, f64>> {
    Ok(normalise(graph.order(), h_degrees(graph, Incidence::Total)?))
}

/// [`in_h_degree`] divided by `order - 1`.
///
/// # Errors
///
/// As [`in_h_degree`], naming `in_h_centrality`.
#[instrument(skip(graph))]
pub fn in_h_centrality<G: AccessGraph + ?Sized>(graph: &G) -> Result<BTreeMap<String, f64>> {
    require_directed(graph.is_directed(), "in_h_centrality")?;
    Ok(normalise(graph.order(), h_degrees(graph, Incidence::In)?))
}

/// [`out_h_degree`] divided by `order - 1`.
///
/// # Errors
///
/// As [`out_h_degree`], naming `out_h_centrality`.
#[instrument(skip(graph))]
pub fn out_h_centrality<G: AccessGraph + ?Sized>(graph: &G) -> Result<BTreeMap<String, f64>> {
    require_directed(graph.is_directed(), "out_h_centrality")?;
    Ok(normalise(graph.order(), h_degrees(graph, Incidence::Out)?))
}

/// Largest `h` with at least `h` weights `>= h`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn h_index(weights: &[f64]) -> usize {
    let mut sorted: Vec<f64> = weights.iter().copied().filter(|w| *w >= 1.0).collect();
    sorted.sort_by(|a, b| b.total_cmp(a));
    sorted
        .iter()
        .enumerate()
        .take_while(|(i, w)| **w >= (i + 1) as f64)
        .count()
}

fn h_degrees<G: AccessGraph + ?Sized>(
    graph: &G,
    incidence: Incidence,
) -> Result<BTreeMap<String, usize>> {
    let mut degrees = BTreeMap::new();
    for node in graph.node_ids() {
        let weights = edge_weights(graph, incidence, node);
        insert_unique(&mut degrees, graph.label(node), h_index(&weights))?;
    }
    debug!(nodes = degrees.len(), ?incidence, "h-degree computed");
    Ok(degrees)
}

fn edge_weights<G: AccessGraph + ?Sized>(
    graph: &G,
    incidence: Incidence,
    node: G::Node,
) -> Vec<f64> {
    match incidence {
        Incidence::Total => {
            let view = UndirectedView::new(graph);
            graph
                .incident_edges(node)
                .into_iter()
                .filter_map(|e| view.weight(e.source, e.target))
                .collect()
        }
        Incidence::In | Incidence::Out => incidence
            .degree_edges(graph, node)
            .into_iter()
            .filter_map(|e| graph.weight(e.source, e.target))
            .collect(),
    }
}

#[allow(clippy::cast_precision_loss)]
fn normalise(order: usize, degrees: BTreeMap<String, usize>) -> BTreeMap<String, f64> {
    degrees
        .into_iter()
        .map(|(label, h)| {
            let score = if order <= 1 {
                0.0
            } else {
                h as f64 / (order - 1) as f64
            };
            (label, score)
        })
        .collect()
}
