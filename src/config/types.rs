use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::analysis::{AnalysisOptions, ReferencePolicy};
use crate::snapshot::SnapshotFormat;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    #[serde(default)]
    pub dangling: ReferencePolicy,
    #[serde(default = "default_fanout_warn")]
    pub fanout_warn: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fanout_limit: Option<usize>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            dangling: ReferencePolicy::default(),
            fanout_warn: default_fanout_warn(),
            fanout_limit: None,
        }
    }
}

impl AnalysisConfig {
    /// Converts to the engine's option set.
    #[must_use]
    pub fn to_options(&self) -> AnalysisOptions {
        AnalysisOptions {
            dangling: self.dangling,
            fanout_warn: self.fanout_warn,
            fanout_limit: self.fanout_limit,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotConfig {
    #[serde(default = "default_dir")]
    pub dir: PathBuf,
    #[serde(default)]
    pub format: SnapshotFormat,
    #[serde(default = "default_true")]
    pub validate: bool,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            format: SnapshotFormat::default(),
            validate: true,
        }
    }
}

const fn default_true() -> bool { true }
const fn default_top_n() -> usize { 5 }
const fn default_fanout_warn() -> usize { crate::analysis::options::DEFAULT_FANOUT_WARN }
fn default_dir() -> PathBuf { PathBuf::from(".") }

/// Contents of `storelens.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub snapshot: SnapshotConfig,
}
