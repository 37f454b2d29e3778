//! End-to-end export and re-import of a small scene

use approx::assert_relative_eq;
use omi_collider::prelude::*;
use serde_json::json;

fn cube(half: f32) -> MeshData {
    let vertices = vec![
        Vec3::new(-half, -half, -half),
        Vec3::new(half, -half, -half),
        Vec3::new(half, half, -half),
        Vec3::new(-half, half, -half),
        Vec3::new(-half, -half, half),
        Vec3::new(half, -half, half),
        Vec3::new(half, half, half),
        Vec3::new(-half, half, half),
    ];
    let faces = vec![
        vec![0, 3, 2, 1],
        vec![4, 5, 6, 7],
        vec![0, 1, 5, 4],
        vec![1, 2, 6, 5],
        vec![2, 3, 7, 6],
        vec![3, 0, 4, 7],
    ];
    MeshData::new(vertices, faces)
}

/// Root "Level" (0) with children "Crate" (1, box + display mesh) and
/// "Rock" (2, hull), plus a root "Trigger" (3, sphere trigger)
fn build_scene() -> SceneGraph {
    let mut graph = SceneGraph::new();
    graph.add_node(SceneNode::new("Level").with_children(vec![1, 2]));
    graph.add_node(
        SceneNode::new("Crate")
            .with_mesh(0)
            .with_translation(Vec3::new(4.0, 0.0, 0.0)),
    );
    graph.add_node(SceneNode::new("Rock").with_mesh(1));
    graph.add_node(SceneNode::new("Trigger").with_mesh(2));
    graph.add_scene(Scene::new("Scene", vec![0, 3]));
    graph
}

#[test]
fn export_then_import() {
    let mut graph = build_scene();
    let mut exporter = ColliderExporter::new(ExportConfig::default());

    let objects = [
        (
            1,
            SceneObject::new(
                "Crate",
                ColliderSettings::collider(ColliderKind::Box).with_display_mesh(true),
            )
            .with_mesh(cube(0.5)),
        ),
        (
            2,
            SceneObject::new("Rock", ColliderSettings::collider(ColliderKind::Hull)).with_mesh(cube(1.0)),
        ),
        (
            3,
            SceneObject::new(
                "Trigger",
                ColliderSettings::collider(ColliderKind::Sphere).as_trigger(),
            )
            .with_mesh(cube(2.0)),
        ),
    ];
    for (index, object) in &objects {
        exporter.gather_node(&mut graph, *index, object).unwrap();
    }

    let summary = exporter.finish(&mut graph).unwrap();
    assert_eq!(summary.display_meshes, 1);

    // Crate was split; the display node took its place under Level
    assert_eq!(graph.len(), 5);
    assert_eq!(graph.nodes[0].children, vec![4, 2]);
    assert_eq!(graph.nodes[4].name, "Crate_DisplayMesh");
    assert_eq!(graph.nodes[4].children, vec![1]);
    assert_eq!(graph.scenes[0].nodes, vec![0, 3]);

    let mut records = graph.to_records();
    assert_eq!(exporter.patch_records(&mut records), 1);

    assert_eq!(
        records[1],
        json!({
            "name": "Crate",
            "extensions": {"OMI_collider": {"type": "box", "extents": [0.5, 0.5, 0.5], "isTrigger": false}}
        })
    );
    assert_eq!(
        records[2],
        json!({
            "name": "Rock",
            "extensions": {"OMI_collider": {"type": "hull", "mesh": 1, "isTrigger": false}}
        })
    );
    assert_eq!(records[4]["mesh"], json!(0));
    assert_eq!(records[4]["translation"], json!([4.0, 0.0, 0.0]));

    // A second post-processing pass has nothing left to do
    assert!(exporter.finish(&mut graph).unwrap().is_empty());

    let importer = ColliderImporter::new(ImportConfig::default());
    let imported = importer.read_nodes(&records).unwrap();
    let kinds: Vec<(NodeIndex, ColliderKind)> = imported
        .iter()
        .map(|(index, collider)| (*index, collider.settings.collider_type))
        .collect();
    assert_eq!(
        kinds,
        vec![(1, ColliderKind::Box), (2, ColliderKind::Hull), (3, ColliderKind::Sphere)]
    );

    let (_, trigger) = &imported[2];
    assert!(trigger.settings.is_trigger);
    match trigger.descriptor.shape {
        ColliderShape::Sphere { radius } => assert_relative_eq!(radius, 2.0, epsilon = 1e-6),
        ref other => panic!("expected sphere, got {other:?}"),
    }
}

#[test]
fn invalid_hull_aborts_export() {
    let mut graph = build_scene();
    let mut exporter = ColliderExporter::new(ExportConfig::default());

    let mut flipped = cube(1.0);
    flipped.faces[1].reverse();
    let object = SceneObject::new("Rock", ColliderSettings::collider(ColliderKind::Hull)).with_mesh(flipped.clone());

    match exporter.gather_node(&mut graph, 2, &object) {
        Err(ColliderError::InvalidHull { object, invalid_edges }) => {
            assert_eq!(object, "Rock");
            assert!(!invalid_edges.is_empty());
        }
        other => panic!("expected InvalidHull, got {other:?}"),
    }
    assert!(graph.nodes[2].extensions.is_empty());

    // The interactive check reports the same edges without failing
    let report = check_hull("Rock", &flipped);
    assert!(!report.is_valid());
    assert!(report.non_contiguous_edge_count > 0);
}

#[test]
fn config_file_drives_exporter() {
    let path = std::env::temp_dir().join(format!("omi_collider_{}.toml", std::process::id()));
    let config = ExtensionConfig {
        export: ExportConfig::default().with_y_up(false),
        ..Default::default()
    };
    config.save_to_file(&path).unwrap();
    let loaded = ExtensionConfig::load_from_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(loaded, config);

    let mut graph = build_scene();
    let mut exporter = ColliderExporter::new(loaded.export);
    let block = MeshData::new(vec![Vec3::zeros(), Vec3::new(2.0, 4.0, 6.0)], Vec::new());
    let object = SceneObject::new("Crate", ColliderSettings::collider(ColliderKind::Box)).with_mesh(block);
    exporter.gather_node(&mut graph, 1, &object).unwrap();

    // Without axis conversion the extents stay in host order
    assert_eq!(
        graph.nodes[1].extensions[EXTENSION_NAME]["extents"],
        json!([1.0, 2.0, 3.0])
    );
}
