//! Host-facing export and import hooks

pub mod check;
pub mod export;
pub mod import;

pub use check::check_hull;
pub use export::{ColliderExporter, SceneObject};
pub use import::{ColliderImporter, ImportedCollider};
