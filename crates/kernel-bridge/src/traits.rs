use std::path::Path;

use fusor_types::{Profile, VertexQuery};

use crate::types::{BoundingBox, KernelError, SolidHandle};

/// Construction surface of the solid-modeling kernel.
///
/// The reactor core drives the kernel exclusively through this trait.
/// The real B-rep engine lives out of tree; the in-repo [`MockKernel`]
/// implements the same contract deterministically for tests.
///
/// [`MockKernel`]: crate::mock_kernel::MockKernel
pub trait SolidKernel {
    /// Revolve a closed poloidal (r, z) profile about the Z axis.
    /// `angle_degrees` must lie in (0, 360].
    fn revolve_profile(
        &mut self,
        profile: &Profile,
        angle_degrees: f64,
    ) -> Result<SolidHandle, KernelError>;

    /// Extrude a closed planform (x, y) profile from `z_min` up to `z_max`.
    fn extrude_profile(
        &mut self,
        profile: &Profile,
        z_min: f64,
        z_max: f64,
    ) -> Result<SolidHandle, KernelError>;

    /// Boolean union of two solids.
    fn union(&mut self, a: &SolidHandle, b: &SolidHandle) -> Result<SolidHandle, KernelError>;

    /// Boolean subtraction of `tool` from `base`.
    fn subtract(
        &mut self,
        base: &SolidHandle,
        tool: &SolidHandle,
    ) -> Result<SolidHandle, KernelError>;

    /// Serialize one solid to a STEP file at `path`.
    fn export_step(&mut self, solid: &SolidHandle, path: &Path) -> Result<(), KernelError>;

    /// Serialize one solid to an STL file at `path`.
    fn export_stl(&mut self, solid: &SolidHandle, path: &Path) -> Result<(), KernelError>;
}

/// Read-only measurement surface of the kernel. Dependent-parameter
/// resolution runs entirely through this trait.
pub trait SolidInspect {
    /// Extremal vertex coordinate of a built solid.
    fn query_vertex(&self, solid: &SolidHandle, query: VertexQuery) -> Result<f64, KernelError>;

    /// Axis-aligned bounds of a built solid.
    fn bounding_box(&self, solid: &SolidHandle) -> Result<BoundingBox, KernelError>;
}
