//! Collider descriptors
//!
//! - [`settings`] - per-object input from the host
//! - [`shape`] - the extension payload types
//! - [`builder`] - descriptor derivation from mesh bounds and hull checks
//! - [`patch`] - mesh reference fix-up on serialized node records

pub mod builder;
pub mod patch;
pub mod settings;
pub mod shape;

pub use builder::build_descriptor;
pub use patch::{patch_serialized_node, patch_serialized_nodes};
pub use settings::{ColliderKind, ColliderOffset, ColliderSettings};
pub use shape::{ColliderDescriptor, ColliderShape};

/// Extension name used in node `extensions` maps
pub const EXTENSION_NAME: &str = "OMI_collider";
