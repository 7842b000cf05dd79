//! Multi-hop accessibility: exponentiated entropy of each hop frontier.
//!
//! # Overview
//!
//! For every node and every hop depth `j` in `1..=H`, accessibility
//! estimates how spread out the node's neighbourhood is at exactly `j`
//! hops. The pipeline per node is:
//!
//! ```text
//! node ──▶ frontier::build_frontiers ──▶ F1 … FH
//!                                         │
//!                     entropy::score_frontier (once per hop)
//!                                         ▼
//!                      AccessibilityResult[(node, j)] = exp(H_j)
//! ```
//!
//! Three variants differ only in their [`Direction`]:
//!
//! - [`accessibility`]: symmetric, any graph.
//! - [`in_accessibility`]: who can reach the node; directed graphs only.
//! - [`out_accessibility`]: what the node can reach; directed graphs only.
//!
//! Per-node computations are independent. With the `parallel` feature,
//! `par_accessibility_with` shards the node loop over the rayon pool.
//!
//! # Usage
//!
//! ```rust,ignore
//! use hopnet_core::graph::DiNetwork;
//! use hopnet_metrics::accessibility::out_accessibility;
//!
//! let net = DiNetwork::from_weighted_edges(&[("A", "B", 2.0), ("A", "C", 2.0)]);
//! let scores = out_accessibility(&net, true, 1)?;
//! assert_eq!(scores.get("A", 1), Some(2.0));
//! ```

pub mod direction;
pub mod entropy;
pub mod frontier;

use std::collections::BTreeMap;
use std::fmt;

use hopnet_core::config::{AccessibilityConfig, MAX_HOP_COUNT};
use hopnet_core::error::{MetricError, Result, require_directed};
use hopnet_core::graph::AccessGraph;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use tracing::{debug, instrument, trace};

pub use direction::Direction;
pub use entropy::{score_frontier, shannon_entropy};
pub use frontier::{Frontier, FrontierTable, build_frontiers};

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Composite `(node, hop)` result key. Renders as `"{node}_h_{hop}"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HopKey {
    pub node: String,
    /// 1-based hop depth.
    pub hop: usize,
}

impl HopKey {
    #[must_use]
    pub fn new(node: impl Into<String>, hop: usize) -> Self {
        Self {
            node: node.into(),
            hop,
        }
    }
}

impl fmt::Display for HopKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_h_{}", self.node, self.hop)
    }
}

/// Accessibility scores for every `(node, hop)` pair of one computation.
///
/// Serializes as `{ direction, weighted, max_hops, scores }` where `scores`
/// is a flat object keyed by `"{node}_h_{hop}"`.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessibilityResult {
    scores: BTreeMap<HopKey, f64>,
    direction: Direction,
    weighted: bool,
    max_hops: usize,
}

impl AccessibilityResult {
    fn empty(direction: Direction, config: &AccessibilityConfig) -> Self {
        Self {
            scores: BTreeMap::new(),
            direction,
            weighted: config.weighted,
            max_hops: config.max_hops,
        }
    }

    /// Record all hop scores of one node.
    fn absorb(&mut self, label: String, hop_scores: Vec<f64>) -> Result<()> {
        if self.scores.contains_key(&HopKey::new(label.as_str(), 1)) {
            return Err(MetricError::DuplicateNodeLabel(label));
        }
        for (i, score) in hop_scores.into_iter().enumerate() {
            self.scores.insert(HopKey::new(label.as_str(), i + 1), score);
        }
        Ok(())
    }

    /// Score of `node` at `hop` (1-based).
    #[must_use]
    pub fn get(&self, node: &str, hop: usize) -> Option<f64> {
        self.scores.get(&HopKey::new(node, hop)).copied()
    }

    /// Scores of `node` for hops `1..=max_hops`, or empty if unknown.
    #[must_use]
    pub fn node_scores(&self, node: &str) -> Vec<f64> {
        (1..=self.max_hops)
            .map_while(|hop| self.get(node, hop))
            .collect()
    }

    /// All `(key, score)` pairs, ordered by node label then hop.
    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = (&HopKey, f64)> + '_ {
        self.scores.iter().map(|(k, &v)| (k, v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub const fn weighted(&self) -> bool {
        self.weighted
    }

    #[must_use]
    pub const fn max_hops(&self) -> usize {
        self.max_hops
    }

    /// Scores keyed by the `"{node}_h_{hop}"` string form.
    #[must_use]
    pub fn to_flat_map(&self) -> BTreeMap<String, f64> {
        self.scores
            .iter()
            .map(|(k, &v)| (k.to_string(), v))
            .collect()
    }
}

impl Serialize for AccessibilityResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("AccessibilityResult", 4)?;
        state.serialize_field("direction", &self.direction)?;
        state.serialize_field("weighted", &self.weighted)?;
        state.serialize_field("max_hops", &self.max_hops)?;
        state.serialize_field("scores", &self.to_flat_map())?;
        state.end()
    }
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Symmetric accessibility: edge direction is ignored.
///
/// # Errors
///
/// [`MetricError::InvalidHopCount`] for `h` outside `1..=MAX_HOP_COUNT`;
/// weight errors as in [`score_frontier`]; [`MetricError::DuplicateNodeLabel`]
/// if two nodes share a label.
#[instrument(skip(graph))]
pub fn accessibility<G: AccessGraph + ?Sized>(
    graph: &G,
    weighted: bool,
    h: usize,
) -> Result<AccessibilityResult> {
    accessibility_with(
        graph,
        Direction::Symmetric,
        &AccessibilityConfig::new(weighted, h),
    )
}

/// In-accessibility: how spread out the set of nodes reaching each node is.
///
/// # Errors
///
/// [`MetricError::UnsupportedOperation`] on an undirected graph, before
/// any traversal; otherwise as [`accessibility`].
#[instrument(skip(graph))]
pub fn in_accessibility<G: AccessGraph + ?Sized>(
    graph: &G,
    weighted: bool,
    h: usize,
) -> Result<AccessibilityResult> {
    accessibility_with(graph, Direction::In, &AccessibilityConfig::new(weighted, h))
}

/// Out-accessibility: how spread out the set of nodes each node reaches is.
///
/// # Errors
///
/// [`MetricError::UnsupportedOperation`] on an undirected graph, before
/// any traversal; otherwise as [`accessibility`].
#[instrument(skip(graph))]
pub fn out_accessibility<G: AccessGraph + ?Sized>(
    graph: &G,
    weighted: bool,
    h: usize,
) -> Result<AccessibilityResult> {
    accessibility_with(graph, Direction::Out, &AccessibilityConfig::new(weighted, h))
}

/// Accessibility for an explicit direction and config.
///
/// # Errors
///
/// See [`accessibility`] and [`in_accessibility`].
#[instrument(skip(graph))]
pub fn accessibility_with<G: AccessGraph + ?Sized>(
    graph: &G,
    direction: Direction,
    config: &AccessibilityConfig,
) -> Result<AccessibilityResult> {
    check_preconditions(graph, direction, config)?;

    let mut result = AccessibilityResult::empty(direction, config);
    for node in graph.node_ids() {
        let (label, hop_scores) = node_scores(graph, direction, node, config)?;
        result.absorb(label, hop_scores)?;
    }

    debug!(
        operation = direction.operation(),
        nodes = graph.order(),
        max_hops = config.max_hops,
        weighted = config.weighted,
        "accessibility computed"
    );
    Ok(result)
}

/// [`accessibility_with`], with the node loop sharded over the rayon pool.
///
/// Produces the same result as the sequential call.
///
/// # Errors
///
/// See [`accessibility_with`]. When several nodes fail, which error is
/// reported is unspecified.
#[cfg(feature = "parallel")]
#[instrument(skip(graph))]
pub fn par_accessibility_with<G>(
    graph: &G,
    direction: Direction,
    config: &AccessibilityConfig,
) -> Result<AccessibilityResult>
where
    G: AccessGraph + Sync + ?Sized,
    G::Node: Send + Sync,
{
    use rayon::prelude::*;

    check_preconditions(graph, direction, config)?;

    let nodes = graph.node_ids();
    let slices = nodes
        .par_iter()
        .map(|&node| node_scores(graph, direction, node, config))
        .collect::<Result<Vec<_>>>()?;

    let mut result = AccessibilityResult::empty(direction, config);
    for (label, hop_scores) in slices {
        result.absorb(label, hop_scores)?;
    }

    debug!(
        operation = direction.operation(),
        nodes = graph.order(),
        max_hops = config.max_hops,
        weighted = config.weighted,
        "accessibility computed in parallel"
    );
    Ok(result)
}

fn check_preconditions<G: AccessGraph + ?Sized>(
    graph: &G,
    direction: Direction,
    config: &AccessibilityConfig,
) -> Result<()> {
    if direction.requires_directed() {
        require_directed(graph.is_directed(), direction.operation())?;
    }
    if config.max_hops == 0 || config.max_hops > MAX_HOP_COUNT {
        return Err(MetricError::InvalidHopCount(config.max_hops));
    }
    Ok(())
}

/// Build the frontier table for one node and score every hop.
fn node_scores<G: AccessGraph + ?Sized>(
    graph: &G,
    direction: Direction,
    node: G::Node,
    config: &AccessibilityConfig,
) -> Result<(String, Vec<f64>)> {
    let table = build_frontiers(graph, direction, node, config.max_hops);
    let hop_scores = table
        .iter()
        .map(|(_, frontier)| score_frontier(graph, direction, frontier, config.weighted))
        .collect::<Result<Vec<f64>>>()?;

    let label = graph.label(node);
    trace!(node = %label, scores = ?hop_scores, "node scored");
    Ok((label, hop_scores))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
