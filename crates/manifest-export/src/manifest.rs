use assembly_engine::Reactor;
use fusor_types::Color;
use serde::{Deserialize, Serialize};

use crate::errors::ManifestError;
use crate::metadata::ReactorMetadata;

/// Current manifest format version.
pub const FORMAT_VERSION: u32 = 1;

/// One manifest line: the neutronics-relevant identity of a built shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub shape_name: String,
    pub material_tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// File the shape's solid is exported to, relative to the export
    /// directory.
    pub step_file: String,
}

/// The materials manifest consumed by downstream neutronics tooling.
///
/// Entries appear in assembly insertion order, exactly one per shape.
/// The graveyard boundary shell is export geometry only and never gets
/// an entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactorManifest {
    /// Format identifier.
    pub format: String,
    /// Format version number.
    pub version: u32,
    /// Run metadata.
    pub reactor: ReactorMetadata,
    /// Per-shape material entries.
    pub materials: Vec<ManifestEntry>,
}

impl ReactorManifest {
    /// Snapshot the assembly's material metadata.
    ///
    /// Fails if any shape is unbuilt: the manifest describes fully
    /// realized geometry, never partial state.
    pub fn from_reactor(reactor: &Reactor) -> Result<Self, ManifestError> {
        let mut materials = Vec::with_capacity(reactor.shapes().len());
        for shape in reactor.shapes() {
            if !shape.is_built() {
                return Err(ManifestError::NotBuilt {
                    shape: shape.name().to_string(),
                });
            }
            materials.push(ManifestEntry {
                shape_name: shape.name().to_string(),
                material_tag: shape.material_tag().to_string(),
                color: shape.color().copied(),
                step_file: step_file_name(shape.name()),
            });
        }
        Ok(Self {
            format: "fusor-manifest".to_string(),
            version: FORMAT_VERSION,
            reactor: ReactorMetadata::new(reactor.name()),
            materials,
        })
    }
}

/// STEP file name for a shape: the name with filesystem-hostile
/// characters replaced by underscores, plus the `.step` extension.
pub fn step_file_name(shape_name: &str) -> String {
    let sanitized: String = shape_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("{sanitized}.step")
}
