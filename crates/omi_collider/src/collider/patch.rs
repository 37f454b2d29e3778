//! Mesh reference fix-up on serialized node records
//!
//! Hull and mesh colliders reference their geometry from inside the
//! extension block. The node itself must not also render that mesh, so
//! the top-level `mesh` field moves into the block once indices are known.

use log::debug;
use serde_json::{Map, Value};

use super::EXTENSION_NAME;

fn collider_block(record: &mut Value) -> Option<&mut Map<String, Value>> {
    record
        .get_mut("extensions")?
        .get_mut(EXTENSION_NAME)?
        .as_object_mut()
}

fn references_mesh(block: &Map<String, Value>) -> bool {
    matches!(block.get("type").and_then(Value::as_str), Some("hull" | "mesh"))
}

/// Move `mesh_index` into the extension block of a hull or mesh collider
///
/// Any other record is returned unchanged.
pub fn patch_serialized_node(mut record: Value, mesh_index: u64) -> Value {
    let patched = match collider_block(&mut record) {
        Some(block) if references_mesh(block) => {
            block.insert("mesh".to_string(), Value::from(mesh_index));
            true
        }
        _ => false,
    };

    if patched {
        if let Some(node) = record.as_object_mut() {
            node.remove("mesh");
        }
    }
    record
}

/// Patch every record of a serialized node list in place
///
/// Each record's own top-level `mesh` is the resolved index. Returns the
/// number of records changed.
pub fn patch_serialized_nodes(records: &mut [Value]) -> usize {
    let mut patched = 0;

    for (index, record) in records.iter_mut().enumerate() {
        let Some(mesh_index) = record.get("mesh").and_then(Value::as_u64) else {
            continue;
        };
        if !collider_block(record).is_some_and(|block| references_mesh(block)) {
            continue;
        }

        *record = patch_serialized_node(record.take(), mesh_index);
        debug!("node record {index}: mesh {mesh_index} moved into {EXTENSION_NAME}");
        patched += 1;
    }

    patched
}
