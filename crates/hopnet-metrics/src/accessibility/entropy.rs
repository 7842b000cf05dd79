//! Entropy scoring of a single frontier.
//!
//! # Algorithm
//!
//! For a frontier `F` with reached endpoints `R` and anchor endpoints `A`:
//!
//! 1. `total` is the summed weight of every edge in `F` (weighted mode) or
//!    `|F|` (unweighted mode).
//! 2. For each reached node `n ∈ R`, `mass(n)` sums the weight (or counts
//!    the existence) of every edge between an anchor `a ∈ A` and `n`.
//! 3. `p(n) = mass(n) / total`; terms with `p(n) == 0` are skipped, which
//!    is the `0 log 0 = 0` convention.
//! 4. The score is `exp(-Σ p(n) ln p(n))`.
//!
//! The score is the effective number of reached nodes: a uniform
//! distribution over `k` nodes scores exactly `k`. An empty frontier has
//! zero total mass, no terms, and therefore scores `exp(0) = 1`.

use std::collections::BTreeSet;

use hopnet_core::error::{MetricError, Result};
use hopnet_core::graph::{AccessGraph, Edge};

use super::direction::Direction;
use super::frontier::Frontier;

/// Score one frontier.
///
/// # Errors
///
/// In weighted mode, returns [`MetricError::MissingWeight`] if a consulted
/// edge has no numeric weight, or [`MetricError::InvalidWeight`] if its
/// weight is negative or not finite.
pub fn score_frontier<G: AccessGraph + ?Sized>(
    graph: &G,
    direction: Direction,
    frontier: &Frontier<G::Node>,
    weighted: bool,
) -> Result<f64> {
    let total = frontier_mass(graph, direction, frontier, weighted)?;

    let reached: BTreeSet<G::Node> = frontier
        .iter()
        .map(|&edge| direction.reached_endpoint(edge))
        .collect();
    let anchors: BTreeSet<G::Node> = frontier
        .iter()
        .map(|&edge| direction.anchor_endpoint(edge))
        .collect();

    let masses = reached
        .iter()
        .map(|&node| reached_mass(graph, direction, &anchors, node, weighted))
        .collect::<Result<Vec<f64>>>()?;

    Ok(shannon_entropy(&masses, total).exp())
}

/// Shannon entropy (natural log) of `masses` normalised by `total`.
///
/// Zero-probability terms, including every term when `total` is zero,
/// contribute nothing.
#[must_use]
pub fn shannon_entropy(masses: &[f64], total: f64) -> f64 {
    let mut entropy = 0.0;
    for &mass in masses {
        let p = if total > 0.0 { mass / total } else { 0.0 };
        if p > 0.0 {
            entropy -= p * p.ln();
        }
    }
    entropy
}

/// Normalising mass of a frontier.
#[allow(clippy::cast_precision_loss)]
fn frontier_mass<G: AccessGraph + ?Sized>(
    graph: &G,
    direction: Direction,
    frontier: &Frontier<G::Node>,
    weighted: bool,
) -> Result<f64> {
    if !weighted {
        return Ok(frontier.len() as f64);
    }
    frontier
        .iter()
        .try_fold(0.0, |acc, &edge| Ok(acc + checked_weight(graph, direction, edge)?))
}

/// Mass flowing into one reached node from every anchor.
fn reached_mass<G: AccessGraph + ?Sized>(
    graph: &G,
    direction: Direction,
    anchors: &BTreeSet<G::Node>,
    node: G::Node,
    weighted: bool,
) -> Result<f64> {
    let mut mass = 0.0;
    for &anchor in anchors {
        let edge = direction.orient(anchor, node);
        if !direction.link_exists(graph, edge) {
            continue;
        }
        mass += if weighted {
            checked_weight(graph, direction, edge)?
        } else {
            1.0
        };
    }
    Ok(mass)
}

fn checked_weight<G: AccessGraph + ?Sized>(
    graph: &G,
    direction: Direction,
    edge: Edge<G::Node>,
) -> Result<f64> {
    match direction.link_weight(graph, edge) {
        Some(weight) if weight.is_finite() && weight >= 0.0 => Ok(weight),
        Some(weight) => Err(MetricError::InvalidWeight {
            from: graph.label(edge.source),
            to: graph.label(edge.target),
            weight,
        }),
        None => Err(MetricError::MissingWeight {
            from: graph.label(edge.source),
            to: graph.label(edge.target),
        }),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accessibility::frontier::build_frontiers;
    use hopnet_core::graph::DiNetwork;

    fn score(net: &DiNetwork, direction: Direction, node: &str, hop: usize, weighted: bool) -> f64 {
        let idx = net.node_index(node).expect("node exists");
        let table = build_frontiers(net, direction, idx, hop);
        let frontier = table.get(hop).expect("hop in range");
        score_frontier(net, direction, frontier, weighted).expect("score")
    }

    #[test]
    fn entropy_of_uniform_distribution_is_ln_k() {
        for k in 1..=6_u32 {
            let masses = vec![1.0; k as usize];
            let h = shannon_entropy(&masses, f64::from(k));
            assert!((h - f64::from(k).ln()).abs() < 1e-12, "k={k}: {h}");
        }
    }

    #[test]
    fn zero_terms_are_skipped() {
        let h = shannon_entropy(&[0.0, 2.0, 2.0], 4.0);
        assert!((h - 2.0_f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn zero_total_yields_zero_entropy() {
        assert!(shannon_entropy(&[], 0.0).abs() < f64::EPSILON);
        assert!(shannon_entropy(&[1.0], 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn equal_weights_score_reached_count() {
        let net = DiNetwork::from_weighted_edges(&[("A", "B", 2.0), ("A", "C", 2.0)]);
        let s = score(&net, Direction::Out, "A", 1, true);
        assert!((s - 2.0).abs() < 1e-12, "got {s}");
    }

    #[test]
    fn skewed_weights_score_below_count() {
        // p = (0.75, 0.25): exp(H) ≈ 1.7548
        let net = DiNetwork::from_weighted_edges(&[("A", "B", 3.0), ("A", "C", 1.0)]);
        let s = score(&net, Direction::Out, "A", 1, true);
        let expected = (-(0.75_f64 * 0.75_f64.ln() + 0.25_f64 * 0.25_f64.ln())).exp();
        assert!((s - expected).abs() < 1e-12, "got {s}, expected {expected}");
        assert!(s < 2.0);

        let unweighted = score(&net, Direction::Out, "A", 1, false);
        assert!((unweighted - 2.0).abs() < 1e-12);
    }

    #[test]
    fn converging_edges_pool_into_one_reached_node() {
        // Hop 2 from A: B → D (w=1), C → D (w=1), C → E (w=2).
        // mass(D) = 2, mass(E) = 2, total = 4 → uniform over 2 nodes.
        let net = DiNetwork::from_weighted_edges(&[
            ("A", "B", 1.0),
            ("A", "C", 1.0),
            ("B", "D", 1.0),
            ("C", "D", 1.0),
            ("C", "E", 2.0),
        ]);
        let s = score(&net, Direction::Out, "A", 2, true);
        assert!((s - 2.0).abs() < 1e-12, "got {s}");
    }

    #[test]
    fn empty_frontier_scores_one() {
        let net = DiNetwork::with_nodes(&["Z"], &[("A", "B", 1.0)]);
        for direction in Direction::ALL {
            for weighted in [true, false] {
                let s = score(&net, direction, "Z", 1, weighted);
                assert!((s - 1.0).abs() < f64::EPSILON, "{direction:?}/{weighted}");
            }
        }
    }

    #[test]
    fn missing_weight_is_a_data_error() {
        let net = DiNetwork::from_edges(&[("A", "B")]);
        let a = net.node_index("A").expect("A node");
        let table = build_frontiers(&net, Direction::Out, a, 1);
        let frontier = table.get(1).expect("hop 1");

        let err = score_frontier(&net, Direction::Out, frontier, true).unwrap_err();
        assert_eq!(
            err,
            MetricError::MissingWeight {
                from: "A".into(),
                to: "B".into()
            }
        );
        assert!(score_frontier(&net, Direction::Out, frontier, false).is_ok());
    }

    #[test]
    fn negative_or_nan_weight_is_rejected() {
        for bad in [-1.0, f64::NAN, f64::INFINITY] {
            let net = DiNetwork::from_weighted_edges(&[("A", "B", bad)]);
            let a = net.node_index("A").expect("A node");
            let table = build_frontiers(&net, Direction::Out, a, 1);
            let frontier = table.get(1).expect("hop 1");
            let err = score_frontier(&net, Direction::Out, frontier, true).unwrap_err();
            assert!(matches!(err, MetricError::InvalidWeight { .. }), "{bad}");
        }
    }
}
