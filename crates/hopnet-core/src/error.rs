use std::fmt;

/// Machine-readable error codes for callers that branch on failure kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    UnsupportedOperation,
    MissingWeight,
    InvalidWeight,
    InvalidHopCount,
    NegativeAlpha,
    DuplicateNodeLabel,
}

impl ErrorCode {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::UnsupportedOperation => "E1001",
            Self::InvalidHopCount => "E1002",
            Self::NegativeAlpha => "E1003",
            Self::MissingWeight => "E2001",
            Self::InvalidWeight => "E2002",
            Self::DuplicateNodeLabel => "E2003",
        }
    }

    /// Short human-facing summary for logs and terminal output.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::UnsupportedOperation => "Operation not defined for this graph",
            Self::InvalidHopCount => "Invalid hop count",
            Self::NegativeAlpha => "Negative tuning parameter",
            Self::MissingWeight => "Edge weight missing",
            Self::InvalidWeight => "Edge weight invalid",
            Self::DuplicateNodeLabel => "Duplicate node label",
        }
    }

    /// Optional remediation hint.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::UnsupportedOperation => {
                Some("Use a directed graph, or the symmetric variant of the metric.")
            }
            Self::InvalidHopCount => Some("Request between 1 and 65536 hops."),
            Self::NegativeAlpha => Some("Pass alpha >= 0 (1.0 reproduces plain strength)."),
            Self::MissingWeight => {
                Some("Attach a numeric weight to every edge, or run in unweighted mode.")
            }
            Self::InvalidWeight => Some("Edge weights must be finite and non-negative."),
            Self::DuplicateNodeLabel => Some("Give every node a unique label."),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Failures surfaced by metric computations.
///
/// Every variant is fatal to the enclosing call: no partial result is
/// returned once one of these is raised.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MetricError {
    /// A directed-only metric was asked to run on an undirected graph.
    #[error("{operation}() not defined for undirected graphs")]
    UnsupportedOperation { operation: &'static str },

    /// Weighted mode consulted an edge that carries no numeric weight.
    #[error("edge {from} -> {to} has no numeric weight")]
    MissingWeight { from: String, to: String },

    /// Weighted mode consulted an edge whose weight is NaN, infinite, or negative.
    #[error("edge {from} -> {to} has invalid weight {weight}")]
    InvalidWeight { from: String, to: String, weight: f64 },

    /// Hop count outside `1..=MAX_HOP_COUNT`.
    #[error("hop count must be between 1 and {max}, got {0}", max = crate::config::MAX_HOP_COUNT)]
    InvalidHopCount(usize),

    #[error("alpha cannot be negative, got {0}")]
    NegativeAlpha(f64),

    /// Two nodes render to the same label, so result keys would collide.
    #[error("duplicate node label {0:?}")]
    DuplicateNodeLabel(String),
}

impl MetricError {
    /// The stable [`ErrorCode`] for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::UnsupportedOperation { .. } => ErrorCode::UnsupportedOperation,
            Self::MissingWeight { .. } => ErrorCode::MissingWeight,
            Self::InvalidWeight { .. } => ErrorCode::InvalidWeight,
            Self::InvalidHopCount(_) => ErrorCode::InvalidHopCount,
            Self::NegativeAlpha(_) => ErrorCode::NegativeAlpha,
            Self::DuplicateNodeLabel(_) => ErrorCode::DuplicateNodeLabel,
        }
    }

    pub(crate) const fn unsupported(operation: &'static str) -> Self {
        Self::UnsupportedOperation { operation }
    }
}

/// Result alias for metric computations.
pub type Result<T> = std::result::Result<T, MetricError>;

/// Fail with [`MetricError::UnsupportedOperation`] unless `directed` holds.
///
/// # Errors
///
/// Returns [`MetricError::UnsupportedOperation`] naming `operation` when the
/// graph is undirected.
pub fn require_directed(directed: bool, operation: &'static str) -> Result<()> {
    if directed {
        Ok(())
    } else {
        Err(MetricError::unsupported(operation))
    }
}
