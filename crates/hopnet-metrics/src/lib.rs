#![forbid(unsafe_code)]
//! hopnet-metrics library.
//!
//! Node and graph metrics for weighted, optionally directed networks:
//!
//! - [`accessibility`]: multi-hop entropy accessibility (symmetric, in, out).
//! - [`centrality`]: generalized degree centrality, h-degree, h-centrality.
//! - [`efficiency`]: global and local efficiency.
//!
//! Every metric reads its input through [`hopnet_core::AccessGraph`], so it
//! runs on `petgraph` graphs and on [`hopnet_core::Network`] alike.
//!
//! # Conventions
//!
//! - **Errors**: Return [`hopnet_core::Result`]; any error aborts the call
//!   and no partial result is produced.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).

pub mod accessibility;
pub mod centrality;
pub mod efficiency;

pub use accessibility::{
    AccessibilityResult, Direction, HopKey, accessibility, accessibility_with, in_accessibility,
    out_accessibility,
};
#[cfg(feature = "parallel")]
pub use accessibility::par_accessibility_with;
pub use centrality::{
    degree_centrality, h_centrality, h_degree, in_degree_centrality, in_h_centrality,
    in_h_degree, out_degree_centrality, out_h_centrality, out_h_degree,
};
pub use efficiency::{global_efficiency, local_efficiency};

use tracing::{info, instrument};

#[instrument]
pub fn init() {
    info!("hopnet-metrics initialized");
}
