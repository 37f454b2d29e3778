//! Foundation module - Core utilities and types
//!
//! - Math types and transform composition
//! - Axis convention conversion
//! - Logging utilities

pub mod math;
pub mod coordinates;
pub mod logging;
