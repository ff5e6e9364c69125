use std::path::Path;

use assembly_engine::Reactor;
use tracing::info;

use crate::errors::ManifestError;
use crate::manifest::ReactorManifest;

/// Serialize a manifest to a pretty-printed JSON string.
pub fn render_manifest(manifest: &ReactorManifest) -> Result<String, ManifestError> {
    Ok(serde_json::to_string_pretty(manifest)?)
}

/// Snapshot the assembly and write its materials manifest to `path`.
///
/// The unbuilt-shape gate runs before any bytes are written, so a
/// failed call leaves no file behind; a successful one replaces the
/// previous run's manifest wholesale.
pub fn write_manifest(reactor: &Reactor, path: &Path) -> Result<ReactorManifest, ManifestError> {
    let manifest = ReactorManifest::from_reactor(reactor)?;
    let json = render_manifest(&manifest)?;
    std::fs::write(path, json)?;
    info!(
        path = %path.display(),
        entries = manifest.materials.len(),
        "wrote materials manifest"
    );
    Ok(manifest)
}
