//! ottawa-cli library root.
//!
//! A terminal host for the assessment: it loads reference content, feeds
//! typed answers into the flow controller, and prints the result summary.
//! Exposed as a library so integration tests can drive it with scripted
//! input.

pub mod config;
pub mod prompt;
pub mod render;
