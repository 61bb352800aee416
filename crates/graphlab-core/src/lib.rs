//! GraphLab Core Library
//!
//! Weighted graph model, classical graph algorithms, and the request
//! boundary that runs one algorithm per call.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod records;
pub mod request;
