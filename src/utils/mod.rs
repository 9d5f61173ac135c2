//! Utility functions shared across layers.
//!
//! - [`code_generator`] - Short identifier generation and shape checks

pub mod code_generator;
