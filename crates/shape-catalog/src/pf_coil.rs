use kernel_bridge::SolidHandle;
use serde::{Deserialize, Serialize};

use crate::kernel_ext::CadKernel;
use crate::types::{
    check_non_negative, check_positive, check_rotation_angle, rect_section, ShapeError,
};

/// Rectangular-section poloidal field coil centered at (r, z).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoloidalFieldCoilConfig {
    pub height: f64,
    pub width: f64,
    /// Section center in the poloidal plane, (r, z).
    pub center_point: [f64; 2],
    pub rotation_angle: f64,
}

impl PoloidalFieldCoilConfig {
    pub(crate) fn validate(&self) -> Result<(), String> {
        check_positive("height", self.height)?;
        check_positive("width", self.width)?;
        check_coil_clears_axis(self.center_point, self.width)?;
        check_rotation_angle(self.rotation_angle)
    }

    pub fn outline(&self) -> fusor_types::Profile {
        rect_section(self.center_point, self.width, self.height)
    }
}

/// Casing shell around a poloidal field coil: the coil envelope grown by
/// `casing_thickness` on every side, with the coil-sized cavity cut out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoloidalFieldCoilCaseConfig {
    pub casing_thickness: f64,
    pub coil_height: f64,
    pub coil_width: f64,
    /// Center of the coil being cased, (r, z).
    pub center_point: [f64; 2],
    pub rotation_angle: f64,
}

impl PoloidalFieldCoilCaseConfig {
    pub(crate) fn validate(&self) -> Result<(), String> {
        check_non_negative("casing_thickness", self.casing_thickness)?;
        check_positive("coil_height", self.coil_height)?;
        check_positive("coil_width", self.coil_width)?;
        let outer_width = self.coil_width + 2.0 * self.casing_thickness;
        check_coil_clears_axis(self.center_point, outer_width)?;
        check_rotation_angle(self.rotation_angle)
    }
}

fn check_coil_clears_axis(center: [f64; 2], width: f64) -> Result<(), String> {
    if !center.iter().all(|c| c.is_finite()) {
        return Err("center_point coordinates must be finite".to_string());
    }
    let inboard_edge = center[0] - width / 2.0;
    if inboard_edge < 0.0 {
        return Err(format!(
            "coil section crosses the machine axis (inboard edge at r = {inboard_edge})"
        ));
    }
    Ok(())
}

pub(crate) fn execute_pf_coil(
    cfg: &PoloidalFieldCoilConfig,
    kernel: &mut dyn CadKernel,
) -> Result<SolidHandle, ShapeError> {
    Ok(kernel.revolve_profile(&cfg.outline(), cfg.rotation_angle)?)
}

pub(crate) fn execute_pf_coil_case(
    cfg: &PoloidalFieldCoilCaseConfig,
    kernel: &mut dyn CadKernel,
) -> Result<SolidHandle, ShapeError> {
    let outer = rect_section(
        cfg.center_point,
        cfg.coil_width + 2.0 * cfg.casing_thickness,
        cfg.coil_height + 2.0 * cfg.casing_thickness,
    );
    let cavity = rect_section(cfg.center_point, cfg.coil_width, cfg.coil_height);
    let outer_solid = kernel.revolve_profile(&outer, cfg.rotation_angle)?;
    let cavity_solid = kernel.revolve_profile(&cavity, cfg.rotation_angle)?;
    Ok(kernel.subtract(&outer_solid, &cavity_solid)?)
}
