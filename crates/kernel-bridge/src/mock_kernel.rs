//! Deterministic in-memory kernel double.
//!
//! Every solid is modeled by its axis extents: a revolved profile keeps
//! its poloidal r/z extents, an extruded planform keeps its radial
//! extents plus the z span, and booleans combine extents. That is exactly
//! enough to answer extremal-vertex queries and bounding boxes with
//! exact arithmetic, so tests can assert derived dimensions without a
//! real B-rep engine. Handles are allocated sequentially, so a given
//! call sequence always produces the same ids.

use std::collections::HashMap;
use std::path::Path;

use fusor_types::{Profile, VertexQuery};

use crate::traits::{SolidInspect, SolidKernel};
use crate::types::{BoundingBox, KernelError, SolidHandle};

/// Extent model of one mock solid.
#[derive(Debug, Clone, Copy)]
struct MockSolid {
    r_min: f64,
    r_max: f64,
    z_min: f64,
    z_max: f64,
}

impl MockSolid {
    fn merged(&self, other: &MockSolid) -> MockSolid {
        MockSolid {
            r_min: self.r_min.min(other.r_min),
            r_max: self.r_max.max(other.r_max),
            z_min: self.z_min.min(other.z_min),
            z_max: self.z_max.max(other.z_max),
        }
    }

    // Rotationally symmetric envelope: x and y span the full radial
    // extent even for partial revolve angles.
    fn bounding_box(&self) -> BoundingBox {
        BoundingBox {
            min: [-self.r_max, -self.r_max, self.z_min],
            max: [self.r_max, self.r_max, self.z_max],
        }
    }
}

/// In-memory kernel double with call counters.
///
/// `op_count` counts construction ops (revolve, extrude, union,
/// subtract); `export_count` counts STEP/STL writes. Tests use the
/// counters to assert that validation failures never reach the kernel
/// and that rebuilding an already-built assembly does no new work.
pub struct MockKernel {
    next_handle: u64,
    solids: HashMap<u64, MockSolid>,
    op_count: usize,
    export_count: usize,
}

impl MockKernel {
    pub fn new() -> Self {
        Self {
            next_handle: 1,
            solids: HashMap::new(),
            op_count: 0,
            export_count: 0,
        }
    }

    /// Construction ops executed so far.
    pub fn op_count(&self) -> usize {
        self.op_count
    }

    /// Export calls executed so far.
    pub fn export_count(&self) -> usize {
        self.export_count
    }

    /// Number of live solids.
    pub fn solid_count(&self) -> usize {
        self.solids.len()
    }

    fn alloc(&mut self, solid: MockSolid) -> SolidHandle {
        let id = self.next_handle;
        self.next_handle += 1;
        self.solids.insert(id, solid);
        SolidHandle(id)
    }

    fn solid(&self, handle: &SolidHandle) -> Result<&MockSolid, KernelError> {
        self.solids
            .get(&handle.id())
            .ok_or(KernelError::UnknownHandle { id: handle.id() })
    }

    fn check_profile(profile: &Profile) -> Result<(), KernelError> {
        if profile.len() < 3 {
            return Err(KernelError::DegenerateProfile {
                reason: format!("{} points, need at least 3", profile.len()),
            });
        }
        if profile
            .points
            .iter()
            .any(|p| !p[0].is_finite() || !p[1].is_finite())
        {
            return Err(KernelError::DegenerateProfile {
                reason: "non-finite coordinate".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for MockKernel {
    fn default() -> Self {
        Self::new()
    }
}

impl SolidKernel for MockKernel {
    fn revolve_profile(
        &mut self,
        profile: &Profile,
        angle_degrees: f64,
    ) -> Result<SolidHandle, KernelError> {
        self.op_count += 1;
        Self::check_profile(profile)?;
        if !(angle_degrees > 0.0 && angle_degrees <= 360.0) {
            return Err(KernelError::InvalidAngle {
                angle: angle_degrees,
            });
        }
        let bounds = profile
            .bounds()
            .ok_or_else(|| KernelError::DegenerateProfile {
                reason: "empty profile".to_string(),
            })?;
        if bounds.u_min < 0.0 {
            return Err(KernelError::DegenerateProfile {
                reason: "poloidal profile crosses the rotation axis (r < 0)".to_string(),
            });
        }
        if bounds.u_max - bounds.u_min == 0.0 || bounds.v_max - bounds.v_min == 0.0 {
            return Err(KernelError::DegenerateProfile {
                reason: "profile has zero area".to_string(),
            });
        }
        Ok(self.alloc(MockSolid {
            r_min: bounds.u_min,
            r_max: bounds.u_max,
            z_min: bounds.v_min,
            z_max: bounds.v_max,
        }))
    }

    fn extrude_profile(
        &mut self,
        profile: &Profile,
        z_min: f64,
        z_max: f64,
    ) -> Result<SolidHandle, KernelError> {
        self.op_count += 1;
        Self::check_profile(profile)?;
        if !(z_min.is_finite() && z_max.is_finite()) || z_max <= z_min {
            return Err(KernelError::InvalidSpan { z_min, z_max });
        }
        let (r_min, r_max) =
            profile
                .radius_range()
                .ok_or_else(|| KernelError::DegenerateProfile {
                    reason: "empty profile".to_string(),
                })?;
        Ok(self.alloc(MockSolid {
            r_min,
            r_max,
            z_min,
            z_max,
        }))
    }

    fn union(&mut self, a: &SolidHandle, b: &SolidHandle) -> Result<SolidHandle, KernelError> {
        self.op_count += 1;
        let merged = self.solid(a)?.merged(self.solid(b)?);
        Ok(self.alloc(merged))
    }

    fn subtract(
        &mut self,
        base: &SolidHandle,
        tool: &SolidHandle,
    ) -> Result<SolidHandle, KernelError> {
        self.op_count += 1;
        // Subtraction never grows a solid; the mock keeps the base envelope.
        self.solid(tool)?;
        let kept = *self.solid(base)?;
        Ok(self.alloc(kept))
    }

    fn export_step(&mut self, solid: &SolidHandle, path: &Path) -> Result<(), KernelError> {
        self.export_count += 1;
        let body = {
            let s = self.solid(solid)?;
            format!(
                "ISO-10303-21;\nHEADER;\n/* mock kernel export, solid #{} */\nENDSEC;\nDATA;\n/* extents r [{}, {}] z [{}, {}] */\nENDSEC;\nEND-ISO-10303-21;\n",
                solid.id(),
                s.r_min,
                s.r_max,
                s.z_min,
                s.z_max
            )
        };
        std::fs::write(path, body).map_err(|e| KernelError::ExportFailed {
            reason: e.to_string(),
        })
    }

    fn export_stl(&mut self, solid: &SolidHandle, path: &Path) -> Result<(), KernelError> {
        self.export_count += 1;
        let body = {
            let s = self.solid(solid)?;
            format!(
                "solid mock_{}\n// extents r [{}, {}] z [{}, {}]\nendsolid mock_{}\n",
                solid.id(),
                s.r_min,
                s.r_max,
                s.z_min,
                s.z_max,
                solid.id()
            )
        };
        std::fs::write(path, body).map_err(|e| KernelError::ExportFailed {
            reason: e.to_string(),
        })
    }
}

impl SolidInspect for MockKernel {
    fn query_vertex(&self, solid: &SolidHandle, query: VertexQuery) -> Result<f64, KernelError> {
        let s = self.solid(solid)?;
        Ok(match query {
            VertexQuery::HighestZ => s.z_max,
            VertexQuery::LowestZ => s.z_min,
            VertexQuery::LargestR => s.r_max,
            VertexQuery::SmallestR => s.r_min,
        })
    }

    fn bounding_box(&self, solid: &SolidHandle) -> Result<BoundingBox, KernelError> {
        Ok(self.solid(solid)?.bounding_box())
    }
}
