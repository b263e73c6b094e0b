//! Wireframe demo: builds the desktop PC scene and reports the line buffer
//! a renderer would upload.
//!
//! Usage:
//! ```text
//! cargo run --example wireframe
//! RUST_LOG=wirescene=debug cargo run --example wireframe
//! ```

use wirescene::operations::query::{BoundingBox, ObjectEdges};
use wirescene::{Scene, WiresceneError};

fn main() -> Result<(), WiresceneError> {
    // Default: WARN for everything, INFO for wirescene.
    // Override with RUST_LOG env var (e.g. RUST_LOG=wirescene=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("wireframe=info".parse().unwrap_or_default())
        .add_directive("wirescene=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let scene = Scene::desktop_pc()?;
    let store = scene.store();

    for &id in scene.objects() {
        let object = store.object(id)?;
        let raw = ObjectEdges::new(id).execute(store)?.len();
        println!("{} ({raw} segments before dedup)", object.name);
        for &part in &object.parts {
            let part = store.part(part)?;
            println!("  {:<10} {:>2} faces", part.name, part.faces.len());
        }
    }

    let buffer = scene.flatten()?;
    let gpu = buffer.to_f32();
    println!(
        "{} unique edges, {} vertices, {} floats",
        buffer.edge_count(),
        buffer.vertex_count(),
        gpu.len()
    );

    if let Some(aabb) = BoundingBox::new(&buffer).execute() {
        tracing::info!(
            min = ?aabb.min,
            max = ?aabb.max,
            center = ?aabb.center(),
            "scene bounds"
        );
    }
    Ok(())
}
