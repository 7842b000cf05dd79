use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

use crate::error::MetricError;

/// Largest accepted `accessibility.max_hops`.
///
/// Every node gets one score per hop, so the result alone holds
/// `order * max_hops` entries.
pub const MAX_HOP_COUNT: usize = 1 << 16;

/// Environment variable overriding `accessibility.max_hops`.
pub const MAX_HOPS_ENV: &str = "HOPNET_MAX_HOPS";
/// Environment variable overriding `accessibility.weighted`.
pub const WEIGHTED_ENV: &str = "HOPNET_WEIGHTED";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MetricsConfig {
    #[serde(default)]
    pub accessibility: AccessibilityConfig,
    #[serde(default)]
    pub degree: DegreeConfig,
    #[serde(default)]
    pub efficiency: EfficiencyConfig,
}

/// Parameters shared by the three accessibility variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessibilityConfig {
    /// Use edge weights as probability mass instead of edge counts.
    #[serde(default = "default_true")]
    pub weighted: bool,
    /// Highest hop depth scored (inclusive, `1..=MAX_HOP_COUNT`).
    #[serde(default = "default_max_hops")]
    pub max_hops: usize,
}

impl AccessibilityConfig {
    #[must_use]
    pub const fn new(weighted: bool, max_hops: usize) -> Self {
        Self { weighted, max_hops }
    }
}

impl Default for AccessibilityConfig {
    fn default() -> Self {
        Self {
            weighted: default_true(),
            max_hops: default_max_hops(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DegreeConfig {
    /// Tuning parameter balancing degree against average edge weight.
    #[serde(default = "default_alpha")]
    pub alpha: f64,
}

impl Default for DegreeConfig {
    fn default() -> Self {
        Self {
            alpha: default_alpha(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EfficiencyConfig {
    /// Measure distances by edge weight instead of hop count.
    #[serde(default = "default_true")]
    pub weighted: bool,
    /// Ignore edge direction when measuring distances.
    #[serde(default)]
    pub to_undirected: bool,
}

impl Default for EfficiencyConfig {
    fn default() -> Self {
        Self {
            weighted: default_true(),
            to_undirected: false,
        }
    }
}

impl MetricsConfig {
    /// Reject values no metric can run with.
    ///
    /// # Errors
    ///
    /// [`MetricError::InvalidHopCount`] for `max_hops` outside
    /// `1..=MAX_HOP_COUNT`,
    /// [`MetricError::NegativeAlpha`] for a negative or NaN `alpha`.
    pub fn validate(&self) -> crate::error::Result<()> {
        let hops = self.accessibility.max_hops;
        if hops == 0 || hops > MAX_HOP_COUNT {
            return Err(MetricError::InvalidHopCount(hops));
        }
        if self.degree.alpha.is_nan() || self.degree.alpha < 0.0 {
            return Err(MetricError::NegativeAlpha(self.degree.alpha));
        }
        Ok(())
    }
}

/// Load a TOML config file. A missing file yields the defaults.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_config(path: &Path) -> Result<MetricsConfig> {
    if !path.exists() {
        return Ok(MetricsConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str::<MetricsConfig>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

/// Load `path`, then apply `HOPNET_MAX_HOPS` / `HOPNET_WEIGHTED`.
///
/// # Errors
///
/// Returns an error if the file is malformed or an override does not parse.
pub fn resolve_config(path: &Path) -> Result<MetricsConfig> {
    let config = load_config(path)?;
    let max_hops = env::var(MAX_HOPS_ENV).ok();
    let weighted = env::var(WEIGHTED_ENV).ok();
    apply_env_overrides(config, max_hops.as_deref(), weighted.as_deref())
}

/// Override the accessibility section from raw environment values.
///
/// # Errors
///
/// Returns an error if `max_hops` is not a positive integer or `weighted`
/// is not a recognised boolean spelling.
pub fn apply_env_overrides(
    mut config: MetricsConfig,
    max_hops: Option<&str>,
    weighted: Option<&str>,
) -> Result<MetricsConfig> {
    if let Some(raw) = max_hops {
        let hops: usize = raw
            .trim()
            .parse()
            .with_context(|| format!("{MAX_HOPS_ENV}={raw:?} is not an integer"))?;
        if hops == 0 || hops > MAX_HOP_COUNT {
            bail!("{MAX_HOPS_ENV} must be between 1 and {MAX_HOP_COUNT}");
        }
        config.accessibility.max_hops = hops;
    }

    if let Some(raw) = weighted {
        config.accessibility.weighted = match parse_flag(raw) {
            Some(flag) => flag,
            None => bail!("{WEIGHTED_ENV}={raw:?} is not a boolean"),
        };
    }

    Ok(config)
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

const fn default_true() -> bool {
    true
}

const fn default_max_hops() -> usize {
    3
}

const fn default_alpha() -> f64 {
    1.0
}
