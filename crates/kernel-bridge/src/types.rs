use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Opaque handle to a solid body living inside the kernel.
///
/// Handles are session-scoped and never persisted. A shape that owns one
/// counts as built for the rest of the pipeline; nothing above the
/// kernel seam looks inside.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SolidHandle(pub(crate) u64);

impl SolidHandle {
    pub(crate) fn id(&self) -> u64 {
        self.0
    }
}

/// Axis-aligned bounds of a solid in model space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: [f64; 3],
    pub max: [f64; 3],
}

impl BoundingBox {
    /// Smallest box containing both operands.
    pub fn merge(&self, other: &BoundingBox) -> BoundingBox {
        let mut min = self.min;
        let mut max = self.max;
        for axis in 0..3 {
            min[axis] = min[axis].min(other.min[axis]);
            max[axis] = max[axis].max(other.max[axis]);
        }
        BoundingBox { min, max }
    }

    /// Largest absolute coordinate on any axis. Boundary shells are
    /// sized from this so they enclose the whole assembly.
    pub fn max_abs_coordinate(&self) -> f64 {
        let mut extent: f64 = 0.0;
        for axis in 0..3 {
            extent = extent.max(self.min[axis].abs()).max(self.max[axis].abs());
        }
        extent
    }
}

/// Errors raised by the solid kernel. Opaque to the layers above: they
/// attach context but never rewrite the kernel's account of the failure.
#[derive(Error, Debug, Clone)]
pub enum KernelError {
    #[error("degenerate profile: {reason}")]
    DegenerateProfile { reason: String },

    #[error("invalid revolve angle {angle} (expected 0 < angle <= 360)")]
    InvalidAngle { angle: f64 },

    #[error("invalid extrusion span [{z_min}, {z_max}]")]
    InvalidSpan { z_min: f64, z_max: f64 },

    #[error("unknown solid handle {id}")]
    UnknownHandle { id: u64 },

    #[error("boolean operation failed: {reason}")]
    BooleanFailed { reason: String },

    #[error("export failed: {reason}")]
    ExportFailed { reason: String },
}
