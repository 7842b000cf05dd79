//! Hop-frontier expansion.
//!
//! # Algorithm
//!
//! Starting from one node, the hop-1 frontier `F1` is the set of edges
//! incident to it under the chosen [`Direction`]. Every later frontier is
//! derived from the previous one:
//!
//! ```text
//! F(j+1) = ⋃ { step_edges(reached(e)) : e ∈ F(j) }
//! ```
//!
//! Frontiers are sets, so an edge reachable along several paths at the
//! same depth appears once. The expansion is an explicit loop over an
//! accumulator indexed by hop depth; once a frontier comes up empty, every
//! deeper frontier is empty as well.

use std::collections::BTreeSet;

use hopnet_core::graph::{AccessGraph, Edge};

use super::direction::Direction;

/// Edges active at one hop depth. Ordered, so scoring visits them in a
/// reproducible order.
pub type Frontier<N> = BTreeSet<Edge<N>>;

/// Frontiers `F1..=FH` for a single starting node.
///
/// Only levels up to the first empty one are stored; every deeper hop
/// reads as the shared empty frontier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontierTable<N> {
    levels: Vec<Frontier<N>>,
    max_hops: usize,
    empty: Frontier<N>,
}

impl<N: Ord> FrontierTable<N> {
    /// Number of hop depths held (`H`).
    #[must_use]
    pub const fn max_hops(&self) -> usize {
        self.max_hops
    }

    /// Frontier at `hop` (1-based).
    #[must_use]
    pub fn get(&self, hop: usize) -> Option<&Frontier<N>> {
        if hop == 0 || hop > self.max_hops {
            return None;
        }
        Some(self.levels.get(hop - 1).unwrap_or(&self.empty))
    }

    /// `(hop, frontier)` pairs in ascending hop order.
    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Frontier<N>)> + '_ {
        (1..=self.max_hops).map(move |hop| {
            (hop, self.levels.get(hop - 1).unwrap_or(&self.empty))
        })
    }
}

/// Build `F1..=F{max_hops}` for `node`.
///
/// `max_hops == 0` yields an empty table.
#[must_use]
pub fn build_frontiers<G: AccessGraph + ?Sized>(
    graph: &G,
    direction: Direction,
    node: G::Node,
    max_hops: usize,
) -> FrontierTable<G::Node> {
    let mut levels: Vec<Frontier<G::Node>> = Vec::new();
    if max_hops > 0 {
        levels.push(direction.seed_edges(graph, node).into_iter().collect());
    }

    while levels.len() < max_hops {
        let Some(previous) = levels.last() else {
            break;
        };
        if previous.is_empty() {
            break;
        }
        let next = expand(graph, direction, previous);
        levels.push(next);
    }

    FrontierTable {
        levels,
        max_hops,
        empty: BTreeSet::new(),
    }
}

/// One expansion step: union of the edges leaving every reached endpoint.
#[must_use]
pub fn expand<G: AccessGraph + ?Sized>(
    graph: &G,
    direction: Direction,
    frontier: &Frontier<G::Node>,
) -> Frontier<G::Node> {
    let origins: BTreeSet<G::Node> = frontier
        .iter()
        .map(|&edge| direction.reached_endpoint(edge))
        .collect();

    origins
        .into_iter()
        .flat_map(|origin| direction.step_edges(graph, origin))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
