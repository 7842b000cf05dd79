//! Global and local efficiency (Latora & Marchiori, 2001).
//!
//! # Overview
//!
//! Global efficiency is the mean inverse shortest-path distance over all
//! ordered pairs of distinct nodes:
//!
//! ```text
//! E(G) = 1 / (n (n - 1)) * Σ_{u != v} 1 / d(u, v)
//! ```
//!
//! Unreachable pairs contribute 0, and so do pairs at distance 0 (joined
//! only by zero-weight edges). Local efficiency averages, over every node,
//! the global efficiency of the subgraph induced by that node's neighbours.
//!
//! # Distances
//!
//! Weighted mode runs Dijkstra on edge weights, counting an edge without a
//! weight attribute as 1. Unweighted mode runs BFS on hop counts. With
//! `to_undirected`, both run on an [`UndirectedView`] of the input.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, VecDeque};

use hopnet_core::config::EfficiencyConfig;
use hopnet_core::error::{MetricError, Result};
use hopnet_core::graph::{AccessGraph, InducedSubgraph, UndirectedView};
use tracing::{debug, instrument};

/// Weight assumed for an edge with no weight attribute.
const DEFAULT_WEIGHT: f64 = 1.0;

/// Global efficiency of `graph`. `0.0` for fewer than two nodes.
///
/// # Errors
///
/// In weighted mode, [`MetricError::InvalidWeight`] if an edge weight is
/// negative or not finite.
#[instrument(skip(graph))]
pub fn global_efficiency<G: AccessGraph + ?Sized>(
    graph: &G,
    config: &EfficiencyConfig,
) -> Result<f64> {
    let efficiency = if config.to_undirected {
        global(&UndirectedView::new(graph), config.weighted)?
    } else {
        global(graph, config.weighted)?
    };
    debug!(nodes = graph.order(), efficiency, "global efficiency computed");
    Ok(efficiency)
}

/// Local efficiency of `graph`. `0.0` for an empty graph.
///
/// On a directed graph (without `to_undirected`) a node's neighbourhood is
/// its successor set.
///
/// # Errors
///
/// As [`global_efficiency`].
#[instrument(skip(graph))]
pub fn local_efficiency<G: AccessGraph + ?Sized>(
    graph: &G,
    config: &EfficiencyConfig,
) -> Result<f64> {
    let efficiency = if config.to_undirected {
        local(&UndirectedView::new(graph), config.weighted)?
    } else {
        local(graph, config.weighted)?
    };
    debug!(nodes = graph.order(), efficiency, "local efficiency computed");
    Ok(efficiency)
}

#[allow(clippy::cast_precision_loss)]
fn global<G: AccessGraph + ?Sized>(graph: &G, weighted: bool) -> Result<f64> {
    let n = graph.order();
    if n < 2 {
        return Ok(0.0);
    }

    let mut inverse_sum = 0.0;
    for source in graph.node_ids() {
        let distances = if weighted {
            dijkstra(graph, source)?
        } else {
            bfs(graph, source)
        };
        // Sorted so the float sum does not depend on hash order.
        let mut row: Vec<f64> = distances
            .into_iter()
            .filter(|&(node, d)| node != source && d > 0.0)
            .map(|(_, d)| d.recip())
            .collect();
        row.sort_by(f64::total_cmp);
        inverse_sum += row.iter().sum::<f64>();
    }

    Ok(inverse_sum / (n * (n - 1)) as f64)
}

#[allow(clippy::cast_precision_loss)]
fn local<G: AccessGraph + ?Sized>(graph: &G, weighted: bool) -> Result<f64> {
    let n = graph.order();
    if n == 0 {
        return Ok(0.0);
    }

    let mut total = 0.0;
    for node in graph.node_ids() {
        let neighbours = graph.out_edges(node).into_iter().map(|e| e.target);
        let subgraph = InducedSubgraph::new(graph, neighbours);
        total += global(&subgraph, weighted)?;
    }

    Ok(total / n as f64)
}

// ---------------------------------------------------------------------------
// Shortest paths
// ---------------------------------------------------------------------------

/// Hop distances from `source` to every node it reaches.
#[allow(clippy::cast_precision_loss)]
fn bfs<G: AccessGraph + ?Sized>(graph: &G, source: G::Node) -> HashMap<G::Node, f64> {
    let mut hops: HashMap<G::Node, usize> = HashMap::from([(source, 0)]);
    let mut queue: VecDeque<(G::Node, usize)> = VecDeque::from([(source, 0)]);

    while let Some((v, depth)) = queue.pop_front() {
        for edge in graph.out_edges(v) {
            hops.entry(edge.target).or_insert_with(|| {
                queue.push_back((edge.target, depth + 1));
                depth + 1
            });
        }
    }

    hops.into_iter().map(|(node, h)| (node, h as f64)).collect()
}

/// Heap entry ordered so that `BinaryHeap` pops the smallest cost first.
#[derive(Debug, Clone, Copy)]
struct Visit<N> {
    cost: f64,
    node: N,
}

impl<N: Ord> PartialEq for Visit<N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N: Ord> Eq for Visit<N> {}

impl<N: Ord> PartialOrd for Visit<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N: Ord> Ord for Visit<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

/// Weighted distances from `source` to every node it reaches.
fn dijkstra<G: AccessGraph + ?Sized>(
    graph: &G,
    source: G::Node,
) -> Result<HashMap<G::Node, f64>> {
    let mut dist: HashMap<G::Node, f64> = HashMap::from([(source, 0.0)]);
    let mut heap = BinaryHeap::from([Visit {
        cost: 0.0,
        node: source,
    }]);

    while let Some(Visit { cost, node }) = heap.pop() {
        if dist.get(&node).is_some_and(|&best| cost > best) {
            continue;
        }
        for edge in graph.out_edges(node) {
            let w = edge_cost(graph, edge.source, edge.target)?;
            let candidate = cost + w;
            if dist.get(&edge.target).is_none_or(|&best| candidate < best) {
                dist.insert(edge.target, candidate);
                heap.push(Visit {
                    cost: candidate,
                    node: edge.target,
                });
            }
        }
    }

    Ok(dist)
}

fn edge_cost<G: AccessGraph + ?Sized>(graph: &G, from: G::Node, to: G::Node) -> Result<f64> {
    match graph.weight(from, to) {
        None => Ok(DEFAULT_WEIGHT),
        Some(w) if w.is_finite() && w >= 0.0 => Ok(w),
        Some(weight) => Err(MetricError::InvalidWeight {
            from: graph.label(from),
            to: graph.label(to),
            weight,
        }),
    }
}
