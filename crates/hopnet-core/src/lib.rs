#![forbid(unsafe_code)]
//! hopnet-core library.
//!
//! Shared pieces for the hopnet metric engines: the [`graph::AccessGraph`]
//! contract and its petgraph adapters, the [`error::MetricError`] taxonomy,
//! and TOML-backed [`config::MetricsConfig`].
//!
//! # Conventions
//!
//! - **Errors**: Metric operations return [`error::Result`]; I/O-bound
//!   helpers such as config loading use `anyhow::Result`.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).

pub mod config;
pub mod error;
pub mod graph;

pub use config::{AccessibilityConfig, DegreeConfig, EfficiencyConfig, MetricsConfig};
pub use error::{ErrorCode, MetricError, Result};
pub use graph::{AccessGraph, DiNetwork, Edge, Network, UnNetwork, WeightAttr};

pub fn init() {
    tracing::info!("hopnet-core initialized");
}
