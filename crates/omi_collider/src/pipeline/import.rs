//! Import hook
//!
//! Reads `OMI_collider` blocks back from glTF node records and turns them
//! into host settings.

use log::debug;
use serde_json::Value;

use crate::collider::{ColliderDescriptor, ColliderSettings, ColliderShape, EXTENSION_NAME};
use crate::config::ImportConfig;
use crate::error::Result;
use crate::foundation::coordinates::CoordinateConverter;
use crate::scene::NodeIndex;

/// Collider recovered from one node record
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedCollider {
    /// Settings to apply to the host object
    pub settings: ColliderSettings,
    /// Descriptor in host convention; mesh indices are kept as read
    pub descriptor: ColliderDescriptor,
}

/// Import-side driver for the collider extension
#[derive(Debug, Clone)]
pub struct ColliderImporter {
    config: ImportConfig,
    converter: CoordinateConverter,
}

impl ColliderImporter {
    /// Create an importer for one import invocation
    pub fn new(config: ImportConfig) -> Self {
        let converter = config.converter();
        Self { config, converter }
    }

    /// Active configuration
    pub fn config(&self) -> &ImportConfig {
        &self.config
    }

    /// Parse the extension block of one node record
    ///
    /// Records without the extension, or any record while the importer is
    /// disabled, yield `None`.
    pub fn read_node(&self, record: &Value) -> Result<Option<ImportedCollider>> {
        if !self.config.enabled {
            return Ok(None);
        }
        let Some(block) = record.get("extensions").and_then(|ext| ext.get(EXTENSION_NAME)) else {
            return Ok(None);
        };

        let descriptor = ColliderDescriptor::from_extension(block)?;
        let shape = match descriptor.shape {
            ColliderShape::Box { extents } => ColliderShape::Box {
                extents: self.converter.convert_scale(extents),
            },
            other => other,
        };

        let mut settings = ColliderSettings::collider(shape.kind());
        settings.is_trigger = descriptor.is_trigger;

        Ok(Some(ImportedCollider {
            settings,
            descriptor: ColliderDescriptor::new(shape, descriptor.is_trigger),
        }))
    }

    /// Parse every record, returning the colliders with their node indices
    pub fn read_nodes(&self, records: &[Value]) -> Result<Vec<(NodeIndex, ImportedCollider)>> {
        let mut colliders = Vec::new();
        for (index, record) in records.iter().enumerate() {
            if let Some(collider) = self.read_node(record)? {
                debug!("node record {index}: imported {} collider", collider.descriptor.kind());
                colliders.push((index, collider));
            }
        }
        Ok(colliders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collider::ColliderKind;
    use crate::error::ColliderError;
    use crate::foundation::math::Vec3;
    use approx::assert_relative_eq;
    use serde_json::json;

    #[test]
    fn test_box_extents_back_to_host() {
        let importer = ColliderImporter::new(ImportConfig::default());
        let record = json!({
            "name": "Crate",
            "extensions": {"OMI_collider": {"type": "box", "extents": [1.0, 2.0, 3.0], "isTrigger": true}}
        });

        let imported = importer.read_node(&record).unwrap().unwrap();
        assert_eq!(imported.settings.collider_type, ColliderKind::Box);
        assert!(imported.settings.is_trigger);
        let ColliderShape::Box { extents } = imported.descriptor.shape else {
            panic!("expected box");
        };
        assert_relative_eq!(extents, Vec3::new(1.0, 3.0, 2.0), epsilon = 1e-6);
    }

    #[test]
    fn test_mesh_index_kept() {
        let importer = ColliderImporter::new(ImportConfig::default());
        let record = json!({"extensions": {"OMI_collider": {"type": "hull", "mesh": 12}}});

        let imported = importer.read_node(&record).unwrap().unwrap();
        assert_eq!(imported.descriptor.shape.mesh(), Some(12));
        assert!(!imported.settings.is_trigger);
    }

    #[test]
    fn test_records_without_extension() {
        let importer = ColliderImporter::new(ImportConfig::default());
        assert!(importer.read_node(&json!({"name": "Plain", "mesh": 0})).unwrap().is_none());
        assert!(importer
            .read_node(&json!({"extensions": {"KHR_lights_punctual": {"light": 0}}}))
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_disabled_importer() {
        let importer = ColliderImporter::new(ImportConfig::default().with_enabled(false));
        let record = json!({"extensions": {"OMI_collider": {"type": "sphere", "radius": 1.0}}});
        assert!(importer.read_node(&record).unwrap().is_none());
    }

    #[test]
    fn test_malformed_block() {
        let importer = ColliderImporter::new(ImportConfig::default());
        let record = json!({"extensions": {"OMI_collider": {"type": "box"}}});
        assert!(matches!(
            importer.read_node(&record),
            Err(ColliderError::MalformedExtension(_))
        ));
    }

    #[test]
    fn test_read_nodes_indices() {
        let importer = ColliderImporter::new(ImportConfig::default());
        let records = vec![
            json!({"name": "A"}),
            json!({"extensions": {"OMI_collider": {"type": "compound"}}}),
            json!({"extensions": {"OMI_collider": {"type": "capsule", "radius": 0.5, "height": 2.0}}}),
        ];

        let colliders = importer.read_nodes(&records).unwrap();
        let indices: Vec<NodeIndex> = colliders.iter().map(|(index, _)| *index).collect();
        assert_eq!(indices, vec![1, 2]);
        assert_eq!(colliders[1].1.settings.collider_type, ColliderKind::Capsule);
    }
}
