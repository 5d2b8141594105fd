//! Foundation utilities shared across the engine
//!
//! Math types, logging setup, and other concerns with no GPU dependency.

pub mod logging;
pub mod math;
