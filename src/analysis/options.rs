// src/analysis/options.rs
//! Policies that shape an analysis run.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, StoreError};
use crate::types::{OrderId, RefKind};

/// What to do when an order points at a client or product that is not in the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferencePolicy {
    /// Drop the unresolved id and keep going.
    #[default]
    Skip,
    /// Abort the computation with `StoreError::DanglingReference`.
    Fail,
}

impl ReferencePolicy {
    /// Applies the policy to one unresolved reference.
    ///
    /// # Errors
    /// Returns `DanglingReference` under `Fail`.
    pub fn on_dangling(self, kind: RefKind, id: i64, order_id: OrderId) -> Result<()> {
        match self {
            Self::Skip => {
                tracing::debug!(%kind, id, order_id, "skipping dangling reference");
                Ok(())
            }
            Self::Fail => Err(StoreError::DanglingReference { kind, id, order_id }),
        }
    }
}

impl fmt::Display for ReferencePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Skip => write!(f, "skip"),
            Self::Fail => write!(f, "fail"),
        }
    }
}

impl FromStr for ReferencePolicy {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "skip" => Ok(Self::Skip),
            "fail" => Ok(Self::Fail),
            other => Err(StoreError::InvalidInput(format!(
                "unknown dangling-reference policy '{other}' (expected 'skip' or 'fail')"
            ))),
        }
    }
}

/// Knobs for a single analysis call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisOptions {
    pub dangling: ReferencePolicy,
    /// Products shared by more clients than this log a warning during graph construction.
    pub fanout_warn: usize,
    /// Products shared by more clients than this abort graph construction.
    pub fanout_limit: Option<usize>,
}

pub const DEFAULT_FANOUT_WARN: usize = 1000;

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            dangling: ReferencePolicy::Skip,
            fanout_warn: DEFAULT_FANOUT_WARN,
            fanout_limit: None,
        }
    }
}

impl AnalysisOptions {
    #[must_use]
    pub fn strict() -> Self {
        Self {
            dangling: ReferencePolicy::Fail,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_policy(mut self, dangling: ReferencePolicy) -> Self {
        self.dangling = dangling;
        self
    }

    #[must_use]
    pub fn with_fanout_limit(mut self, limit: Option<usize>) -> Self {
        self.fanout_limit = limit;
        self
    }

    /// Rejects thresholds that cannot be satisfied.
    ///
    /// # Errors
    /// Returns `InvalidInput` when `fanout_limit` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.fanout_limit == Some(0) {
            return Err(StoreError::InvalidInput(
                "fanout_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
