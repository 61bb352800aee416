//! Configuration type definitions

use crate::format::OutputFormat;
use serde::{Deserialize, Serialize};

/// Current configuration format version
pub const CONFIG_FORMAT_VERSION: u32 = 1;

/// Default configuration file name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "graphlab.toml";

/// Top-level graphlab configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabConfig {
    /// Config format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Output format used when `--format` is not given
    #[serde(default)]
    pub default_format: OutputFormat,

    /// Graph input validation rules
    #[serde(default)]
    pub validation: ValidationConfig,

    /// Human output rendering
    #[serde(default)]
    pub output: OutputConfig,
}

/// Rules applied when normalizing a graph read from JSON or YAML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Trim surrounding whitespace from node ids and edge endpoints
    #[serde(default = "default_true")]
    pub trim_ids: bool,

    /// Collapse duplicate node ids instead of rejecting the graph
    #[serde(default = "default_true")]
    pub dedupe_nodes: bool,

    /// Alternative field names accepted for an edge weight, tried in order
    /// after `weight`
    #[serde(default = "default_weight_aliases")]
    pub weight_aliases: Vec<String>,

    /// Accept a graph with no nodes
    #[serde(default)]
    pub allow_empty: bool,
}

/// Human output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Decimal places for fractional costs
    #[serde(default = "default_precision")]
    pub precision: usize,
}

fn default_version() -> u32 {
    CONFIG_FORMAT_VERSION
}

fn default_true() -> bool {
    true
}

fn default_weight_aliases() -> Vec<String> {
    vec!["w".to_string(), "cost".to_string()]
}

fn default_precision() -> usize {
    2
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_FORMAT_VERSION,
            default_format: OutputFormat::default(),
            validation: ValidationConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            trim_ids: true,
            dedupe_nodes: true,
            weight_aliases: default_weight_aliases(),
            allow_empty: false,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
        }
    }
}
