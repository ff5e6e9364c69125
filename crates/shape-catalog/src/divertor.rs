use fusor_types::Profile;
use kernel_bridge::SolidHandle;
use serde::{Deserialize, Serialize};

use crate::blanket::check_poloidal_angle;
use crate::kernel_ext::CadKernel;
use crate::plasma::{boundary_point, check_envelope};
use crate::types::{check_non_negative, check_positive, check_rotation_angle, ShapeError};

/// Divertor block closing off one end of the blanket.
///
/// A rectangular section seated on the offset plasma boundary at
/// `stop_angle`: it spans radially from the plane x = `start_x_value`
/// out to that boundary point and carries `thickness` of vertical build
/// away from the midplane. A stop angle below 180° puts the block above
/// the midplane, above 180° below it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DivertorConfig {
    /// Envelope of the plasma the block sits against.
    pub major_radius: f64,
    pub minor_radius: f64,
    pub elongation: f64,
    pub triangularity: f64,
    /// Vertical build of the block.
    pub thickness: f64,
    /// Poloidal angle where the block meets the blanket, degrees.
    pub stop_angle: f64,
    /// Inboard radial limit of the block.
    pub start_x_value: f64,
    /// Clearance between plasma boundary and the block's seat.
    pub offset_from_plasma: f64,
    pub rotation_angle: f64,
}

impl DivertorConfig {
    pub(crate) fn validate(&self) -> Result<(), String> {
        check_envelope(
            self.major_radius,
            self.minor_radius,
            self.elongation,
            self.triangularity,
        )?;
        check_non_negative("thickness", self.thickness)?;
        check_poloidal_angle("stop_angle", self.stop_angle)?;
        check_positive("start_x_value", self.start_x_value)?;
        check_non_negative("offset_from_plasma", self.offset_from_plasma)?;
        check_rotation_angle(self.rotation_angle)
    }

    /// Rectangular outline seated on the offset boundary point.
    pub fn outline(&self) -> Profile {
        let theta = self.stop_angle.to_radians();
        let seat = boundary_point(
            self.major_radius,
            self.minor_radius + self.offset_from_plasma,
            self.elongation,
            self.triangularity,
            theta,
        );
        // Build away from the midplane: upward for an upper block,
        // downward for a lower one.
        let z_far = if theta.sin() >= 0.0 {
            seat[1] + self.thickness
        } else {
            seat[1] - self.thickness
        };
        Profile::new(vec![
            [self.start_x_value, seat[1]],
            [seat[0], seat[1]],
            [seat[0], z_far],
            [self.start_x_value, z_far],
        ])
    }
}

pub(crate) fn execute_divertor(
    cfg: &DivertorConfig,
    kernel: &mut dyn CadKernel,
) -> Result<SolidHandle, ShapeError> {
    Ok(kernel.revolve_profile(&cfg.outline(), cfg.rotation_angle)?)
}
