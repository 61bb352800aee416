//! CLI commands for graphlab

pub mod algorithm;
pub mod dispatch;
pub mod render;
pub mod request;
pub mod sample;
pub mod validate;
