//! Example: author image shader edits and watch the sync protocol drain them.
//!
//! Run with: cargo run --example sync_loop
//! Set RUST_LOG=debug to see per-attribute miss/retry traces.

use anyhow::Result;
use ember_core::{PrimPath, Value, ValueDict};
use ember_sync::{tokens, DirtyBits, ImageShader, RenderIndex, Stage};

fn report(index: &RenderIndex<ImageShader>) {
    for path in index.paths() {
        let shader = index.get(path).expect("path came from the index");
        let pending = index
            .tracker()
            .dirty_bits(path)
            .unwrap_or(DirtyBits::CLEAN);
        println!(
            "  {} - enabled={} priority={} file='{}' constants={} pending={:?}",
            path.name(),
            shader.enabled(),
            shader.priority(),
            shader.file_path(),
            shader.constants().len(),
            pending,
        );
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let grade: PrimPath = "/World/Shaders/Grade".parse()?;
    let vignette: PrimPath = "/World/Shaders/Vignette".parse()?;

    // Author two shaders on the stage
    let mut stage = Stage::new();
    stage.set(&grade, tokens::ENABLED, true);
    stage.set(&grade, tokens::PRIORITY, 5);
    stage.set(&grade, tokens::FILE_PATH, "grade.exr");
    let mut constants = ValueDict::new();
    constants.insert("gain".to_string(), Value::from(1.0));
    stage.set(&grade, tokens::CONSTANTS, constants);

    stage.set(&vignette, tokens::ENABLED, false);
    stage.set(&vignette, tokens::PRIORITY, 10);
    stage.set(&vignette, tokens::FILE_PATH, "vignette.exr");
    stage.set(&vignette, tokens::CONSTANTS, ValueDict::new());

    // Populate the render index; insertion seeds the full initial masks
    let mut index = RenderIndex::new();
    index.insert(ImageShader::new(grade.clone()))?;
    index.insert(ImageShader::new(vignette.clone()))?;

    println!("=== Before first sync (defaults) ===");
    report(&index);

    let synced = index.sync_all(&stage);
    println!("\n=== After initial sync ({} prims) ===", synced);
    report(&index);

    // Targeted edit: only the priority bit goes dirty, only it re-syncs
    stage.set(&grade, tokens::PRIORITY, 2);
    index
        .tracker_mut()
        .mark_dirty(&grade, DirtyBits::PRIORITY)?;

    let synced = index.sync_all(&stage);
    println!("\n=== After priority edit ({} prim synced) ===", synced);
    report(&index);

    // Remove a prim from the stage: its next sync misses and the cache
    // keeps the last-known-good values
    stage.remove_prim(&vignette);
    index.tracker_mut().mark_dirty(&vignette, DirtyBits::all())?;

    index.sync_all(&stage);
    println!("\n=== After stage removal (cache retained, bits pending) ===");
    report(&index);

    // Re-author it: the pending bits drain on the next cycle
    stage.set(&vignette, tokens::ENABLED, true);
    stage.set(&vignette, tokens::PRIORITY, 1);
    stage.set(&vignette, tokens::FILE_PATH, "vignette_v2.exr");
    stage.set(&vignette, tokens::CONSTANTS, ValueDict::new());

    index.sync_all(&stage);
    println!("\n=== After re-authoring (retry drained) ===");
    report(&index);

    Ok(())
}
