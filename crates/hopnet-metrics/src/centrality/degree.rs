//! Generalized degree centrality (Opsahl, Agneessens & Skvoretz, 2010).
//!
//! For a node with degree `k` and strength `s` (summed edge weight):
//!
//! ```text
//! C(alpha) = k * (s / k)^alpha
//! ```
//!
//! `alpha = 0` gives the plain degree, `alpha = 1` the strength. Values
//! between 0 and 1 favour nodes with many ties; values above 1 favour nodes
//! with few, heavy ties. A node with no edges scores 0.

use std::collections::BTreeMap;

use hopnet_core::error::{MetricError, Result, require_directed};
use hopnet_core::graph::AccessGraph;
use tracing::{debug, instrument};

use super::{Incidence, insert_unique};

/// Weight assumed for an edge with no weight attribute.
const DEFAULT_WEIGHT: f64 = 1.0;

/// Degree centrality over all edges of each node.
///
/// # Errors
///
/// [`MetricError::NegativeAlpha`] for `alpha < 0` or NaN;
/// [`MetricError::DuplicateNodeLabel`] if two nodes share a label.
#[instrument(skip(graph))]
pub fn degree_centrality<G: AccessGraph + ?Sized>(
    graph: &G,
    alpha: f64,
) -> Result<BTreeMap<String, f64>> {
    generalized_degree(graph, Incidence::Total, alpha)
}

/// Degree centrality over incoming edges.
///
/// # Errors
///
/// [`MetricError::UnsupportedOperation`] on an undirected graph; otherwise
/// as [`degree_centrality`].
#[instrument(skip(graph))]
pub fn in_degree_centrality<G: AccessGraph + ?Sized>(
    graph: &G,
    alpha: f64,
) -> Result<BTreeMap<String, f64>> {
    require_directed(graph.is_directed(), "in_degree_centrality")?;
    generalized_degree(graph, Incidence::In, alpha)
}

/// Degree centrality over outgoing edges.
///
/// # Errors
///
/// [`MetricError::UnsupportedOperation`] on an undirected graph; otherwise
/// as [`degree_centrality`].
#[instrument(skip(graph))]
pub fn out_degree_centrality<G: AccessGraph + ?Sized>(
    graph: &G,
    alpha: f64,
) -> Result<BTreeMap<String, f64>> {
    require_directed(graph.is_directed(), "out_degree_centrality")?;
    generalized_degree(graph, Incidence::Out, alpha)
}

#[allow(clippy::cast_precision_loss)]
fn generalized_degree<G: AccessGraph + ?Sized>(
    graph: &G,
    incidence: Incidence,
    alpha: f64,
) -> Result<BTreeMap<String, f64>> {
    if alpha.is_nan() || alpha < 0.0 {
        return Err(MetricError::NegativeAlpha(alpha));
    }

    let mut scores = BTreeMap::new();
    for node in graph.node_ids() {
        let edges = incidence.degree_edges(graph, node);
        let k = edges.len();
        let score = if k == 0 {
            0.0
        } else {
            let strength: f64 = edges
                .iter()
                .map(|e| graph.weight(e.source, e.target).unwrap_or(DEFAULT_WEIGHT))
                .sum();
            let k = k as f64;
            k * (strength / k).powf(alpha)
        };
        insert_unique(&mut scores, graph.label(node), score)?;
    }

    debug!(nodes = scores.len(), ?incidence, alpha, "degree centrality computed");
    Ok(scores)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hopnet_core::graph::{DiNetwork, UnNetwork};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    fn star() -> DiNetwork {
        // A has out-degree 2 with strength 6; B and C one incoming edge each.
        DiNetwork::from_weighted_edges(&[("A", "B", 2.0), ("A", "C", 4.0)])
    }

    #[test]
    fn alpha_zero_is_plain_degree() {
        let scores = out_degree_centrality(&star(), 0.0).expect("compute");
        assert!(close(scores["A"], 2.0));
        assert!(close(scores["B"], 0.0));
    }

    #[test]
    fn alpha_one_is_strength() {
        let scores = out_degree_centrality(&star(), 1.0).expect("compute");
        assert!(close(scores["A"], 6.0));

        let scores = in_degree_centrality(&star(), 1.0).expect("compute");
        assert!(close(scores["B"], 2.0));
        assert!(close(scores["C"], 4.0));
        assert!(close(scores["A"], 0.0));
    }

    #[test]
    fn fractional_alpha_blends_degree_and_strength() {
        let scores = out_degree_centrality(&star(), 0.5).expect("compute");
        // 2 * (6 / 2)^0.5
        assert!(close(scores["A"], 2.0 * 3.0_f64.sqrt()));
    }

    #[test]
    fn total_degree_counts_both_directions() {
        let net = DiNetwork::from_weighted_edges(&[("A", "B", 2.0), ("C", "A", 3.0)]);
        let scores = degree_centrality(&net, 1.0).expect("compute");
        assert!(close(scores["A"], 5.0));
        assert!(close(scores["B"], 2.0));
    }

    #[test]
    fn undirected_degree_uses_neighbourhood() {
        let net = UnNetwork::from_weighted_edges(&[("A", "B", 2.0), ("A", "C", 4.0)]);
        let scores = degree_centrality(&net, 1.0).expect("compute");
        assert!(close(scores["A"], 6.0));
        assert!(close(scores["C"], 4.0));
    }

    #[test]
    fn missing_weight_counts_as_one() {
        let net = DiNetwork::from_edges(&[("A", "B"), ("A", "C")]);
        let scores = out_degree_centrality(&net, 1.0).expect("compute");
        assert!(close(scores["A"], 2.0));
    }

    #[test]
    fn negative_alpha_is_rejected() {
        assert_eq!(
            degree_centrality(&star(), -0.5).unwrap_err(),
            MetricError::NegativeAlpha(-0.5)
        );
        assert!(matches!(
            degree_centrality(&star(), f64::NAN).unwrap_err(),
            MetricError::NegativeAlpha(_)
        ));
    }

    #[test]
    fn directed_variants_reject_undirected_graphs() {
        let net = UnNetwork::from_weighted_edges(&[("A", "B", 1.0)]);
        assert_eq!(
            in_degree_centrality(&net, 1.0).unwrap_err(),
            MetricError::UnsupportedOperation {
                operation: "in_degree_centrality"
            }
        );
        assert!(out_degree_centrality(&net, 1.0).is_err());
    }
}
