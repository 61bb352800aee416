//! Output format handling for graphlab
//!
//! Supports three output formats:
//! - human: Readable, concise output for terminal use
//! - json: Stable, machine-readable JSON matching the HTTP wire shape
//! - records: Line-oriented format for scripting and diffing

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GraphLabError;
use crate::graph::types::Cost;

/// Output format for graphlab commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
    /// Line-oriented records output
    Records,
}

impl FromStr for OutputFormat {
    type Err = GraphLabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            "records" => Ok(OutputFormat::Records),
            other => Err(GraphLabError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Records => write!(f, "records"),
        }
    }
}

/// Render a cost for human output.
///
/// Sentinels are spelled out instead of printing `1.79e308`. Whole numbers
/// drop their fractional part so sample graphs read naturally.
pub fn format_cost(cost: Cost, precision: usize) -> String {
    if cost.is_unreachable() {
        return "unreachable".to_string();
    }
    if cost.is_unbounded() {
        return "-inf (negative cycle)".to_string();
    }
    let value = cost.value();
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.*}", precision, value)
    }
}
