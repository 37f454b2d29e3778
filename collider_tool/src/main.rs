//! Hull checker
//!
//! Loads an OBJ mesh, reports whether it is usable as a convex hull collider
//! and prints the `OMI_collider` payload the exporter would attach.
//!
//! Usage: hull_check mesh.obj [--kind box] [--trigger] [--z-up] [--config export.toml]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use omi_collider::collider::{build_descriptor, ColliderKind};
use omi_collider::config::{Config, ExtensionConfig};
use omi_collider::foundation::logging;
use omi_collider::mesh::ObjLoader;
use omi_collider::pipeline::check_hull;

#[derive(Debug, Parser)]
#[command(name = "hull_check", about = "Validate a mesh as an OMI_collider hull and print its descriptor")]
struct Args {
    /// OBJ file to check
    input: PathBuf,

    /// Collider kind to build the descriptor for
    #[arg(short, long, default_value = "hull")]
    kind: ColliderKind,

    /// Mark the collider as a trigger volume
    #[arg(long)]
    trigger: bool,

    /// Keep the host Z-up convention instead of converting to Y-up
    #[arg(long)]
    z_up: bool,

    /// Extension config file (TOML or RON)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    logging::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => ExtensionConfig::load_from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => ExtensionConfig::default(),
    };
    let export = if args.z_up {
        config.export.with_y_up(false)
    } else {
        config.export
    };

    let mesh = ObjLoader::load_obj(&args.input)
        .with_context(|| format!("failed to load {}", args.input.display()))?;
    let name = args
        .input
        .file_stem()
        .map_or_else(|| "mesh".to_string(), |stem| stem.to_string_lossy().into_owned());
    info!(
        "loaded '{name}': {} vertices, {} faces",
        mesh.vertices.len(),
        mesh.faces.len()
    );

    let report = check_hull(&name, &mesh);
    println!("{report}");
    if !report.invalid_edges.is_empty() {
        let edges: Vec<String> = report.invalid_edges.iter().map(ToString::to_string).collect();
        println!("Invalid edges: {}", edges.join(" "));
        println!();
    }

    let descriptor = build_descriptor(&name, args.kind, args.trigger, &mesh, &export.converter())?;
    println!("{}", serde_json::to_string_pretty(&descriptor.to_extension()?)?);

    Ok(())
}
