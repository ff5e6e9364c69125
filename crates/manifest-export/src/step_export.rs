use std::path::{Path, PathBuf};

use assembly_engine::Reactor;
use fusor_types::Profile;
use kernel_bridge::{BoundingBox, SolidHandle};
use shape_catalog::CadKernel;
use tracing::info;

use crate::errors::ExportError;
use crate::manifest::step_file_name;

/// Knobs for the STEP export pass.
#[derive(Debug, Clone, Copy)]
pub struct ExportOptions {
    /// Graveyard half-size as a multiple of the assembly's largest
    /// absolute coordinate.
    pub graveyard_scale: f64,
    /// Wall thickness of the graveyard shell.
    pub graveyard_thickness: f64,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            graveyard_scale: 2.0,
            graveyard_thickness: 50.0,
        }
    }
}

/// Export every built shape to `<dir>/<name>.step`, then wrap the
/// assembly in a hollow graveyard shell written as `graveyard.step`.
///
/// The graveyard is the simulation boundary downstream neutronics
/// tooling terminates particles on; it is sized from the merged
/// bounding box of all exported solids. Returns the written paths in
/// export order. Any unbuilt shape aborts the pass before any file I/O,
/// and an empty assembly exports nothing.
pub fn export_step(
    reactor: &Reactor,
    kernel: &mut dyn CadKernel,
    dir: &Path,
    options: &ExportOptions,
) -> Result<Vec<PathBuf>, ExportError> {
    let mut targets = Vec::with_capacity(reactor.shapes().len());
    for shape in reactor.shapes() {
        match shape.solid() {
            Some(solid) => targets.push((shape.name(), solid)),
            None => {
                return Err(ExportError::NotBuilt {
                    shape: shape.name().to_string(),
                })
            }
        }
    }
    if targets.is_empty() {
        return Ok(Vec::new());
    }
    std::fs::create_dir_all(dir)?;

    let mut written = Vec::with_capacity(targets.len() + 1);
    let mut envelope: Option<BoundingBox> = None;
    for (name, solid) in &targets {
        let bounds = kernel.as_inspect().bounding_box(solid)?;
        envelope = Some(match envelope {
            Some(e) => e.merge(&bounds),
            None => bounds,
        });
        let path = dir.join(step_file_name(name));
        kernel.export_step(solid, &path)?;
        written.push(path);
    }

    if let Some(envelope) = envelope {
        let shell = build_graveyard(kernel, &envelope, options)?;
        let path = dir.join("graveyard.step");
        kernel.export_step(&shell, &path)?;
        written.push(path);
    }

    info!(
        dir = %dir.display(),
        files = written.len(),
        "exported STEP geometry"
    );
    Ok(written)
}

/// Hollow drum enclosing the whole assembly: an outer revolved section
/// minus an inner one, leaving a shell of `graveyard_thickness`.
fn build_graveyard(
    kernel: &mut dyn CadKernel,
    envelope: &BoundingBox,
    options: &ExportOptions,
) -> Result<SolidHandle, ExportError> {
    let outer = envelope.max_abs_coordinate() * options.graveyard_scale;
    let inner = outer - options.graveyard_thickness;
    let outer_solid = kernel.revolve_profile(&shell_section(outer), 360.0)?;
    let inner_solid = kernel.revolve_profile(&shell_section(inner), 360.0)?;
    Ok(kernel.subtract(&outer_solid, &inner_solid)?)
}

/// Rectangular r-z section of a drum spanning `half_size` on each axis.
fn shell_section(half_size: f64) -> Profile {
    Profile::new(vec![
        [0.0, -half_size],
        [half_size, -half_size],
        [half_size, half_size],
        [0.0, half_size],
    ])
}
