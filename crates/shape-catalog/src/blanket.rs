use fusor_types::Profile;
use kernel_bridge::SolidHandle;
use serde::{Deserialize, Serialize};

use crate::kernel_ext::CadKernel;
use crate::plasma::{boundary_point, check_envelope};
use crate::types::{check_non_negative, check_rotation_angle, ShapeError};

/// Points sampled along each blanket boundary arc.
const ARC_POINTS: usize = 50;

/// Constant-thickness breeder blanket wrapped around the plasma.
///
/// The inner face follows the plasma boundary grown by
/// `offset_from_plasma`; the outer face follows the same boundary grown
/// by the thickness on top. The wrap covers the outboard side: it runs
/// from `start_angle` down through the outboard midplane (0°) and
/// around to `stop_angle`, leaving the inboard gap between the two
/// angles for the center column and the divertor blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlanketConfig {
    /// Envelope of the plasma this blanket wraps.
    pub major_radius: f64,
    pub minor_radius: f64,
    pub elongation: f64,
    pub triangularity: f64,
    /// Radial build of the blanket itself.
    pub thickness: f64,
    /// Clearance between plasma boundary and blanket inner face.
    pub offset_from_plasma: f64,
    /// Poloidal angle of the upper blanket end, degrees.
    pub start_angle: f64,
    /// Poloidal angle of the lower blanket end, degrees.
    pub stop_angle: f64,
    pub rotation_angle: f64,
}

impl BlanketConfig {
    pub(crate) fn validate(&self) -> Result<(), String> {
        check_envelope(
            self.major_radius,
            self.minor_radius,
            self.elongation,
            self.triangularity,
        )?;
        check_non_negative("thickness", self.thickness)?;
        check_non_negative("offset_from_plasma", self.offset_from_plasma)?;
        check_poloidal_angle("start_angle", self.start_angle)?;
        check_poloidal_angle("stop_angle", self.stop_angle)?;
        if self.stop_angle <= self.start_angle {
            return Err(format!(
                "stop_angle {} must be greater than start_angle {}",
                self.stop_angle, self.start_angle
            ));
        }
        check_rotation_angle(self.rotation_angle)
    }

    /// Closed ring-segment outline: inner arc from `start_angle` down
    /// through the outboard midplane to `stop_angle`, outer arc back.
    pub fn outline(&self) -> Profile {
        let inner = self.minor_radius + self.offset_from_plasma;
        let outer = inner + self.thickness;
        let start = self.start_angle.to_radians();
        // One full turn short of stop_angle, so the sweep decreases
        // through 0° instead of crossing the inboard side.
        let stop = (self.stop_angle - 360.0).to_radians();

        let mut points = Vec::with_capacity(2 * ARC_POINTS);
        for i in 0..ARC_POINTS {
            let theta = start + (stop - start) * i as f64 / (ARC_POINTS - 1) as f64;
            points.push(boundary_point(
                self.major_radius,
                inner,
                self.elongation,
                self.triangularity,
                theta,
            ));
        }
        for i in (0..ARC_POINTS).rev() {
            let theta = start + (stop - start) * i as f64 / (ARC_POINTS - 1) as f64;
            points.push(boundary_point(
                self.major_radius,
                outer,
                self.elongation,
                self.triangularity,
                theta,
            ));
        }
        Profile::new(points)
    }
}

pub(crate) fn check_poloidal_angle(field: &str, value: f64) -> Result<(), String> {
    if value.is_finite() && (0.0..=360.0).contains(&value) {
        Ok(())
    } else {
        Err(format!(
            "{field} must lie in [0, 360] degrees, got {value}"
        ))
    }
}

pub(crate) fn execute_blanket(
    cfg: &BlanketConfig,
    kernel: &mut dyn CadKernel,
) -> Result<SolidHandle, ShapeError> {
    Ok(kernel.revolve_profile(&cfg.outline(), cfg.rotation_angle)?)
}
