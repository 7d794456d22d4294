//! Merging surface files.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use surface::io::{load_triangular, save_triangular};
use surface::prelude::Surface;

/// Load every input surface, merge them in order and write the union.
///
/// The first input provides the metadata of the united surface.
pub fn run(output_path: &Path, input_paths: &[PathBuf]) -> Result<()> {
    let mut surfaces = Vec::with_capacity(input_paths.len());
    for path in input_paths {
        let surface =
            load_triangular(path).with_context(|| format!("failed to read {}", path.display()))?;
        surfaces.push(surface);
    }

    let Some(union) = Surface::unite(surfaces) else {
        bail!("at least one input surface is required");
    };
    save_triangular(&union, output_path)
        .with_context(|| format!("failed to write {}", output_path.display()))?;

    println!(
        "Saved {} ({} vertices, {} triangles)",
        output_path.display(),
        union.vertex_count(),
        union.triangle_count()
    );
    Ok(())
}
