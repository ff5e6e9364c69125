use fusor_types::Dim;
use kernel_bridge::SolidHandle;
use serde::{Deserialize, Serialize};

use crate::kernel_ext::CadKernel;
use crate::types::{
    check_positive, check_rotation_angle, rect_section, ResolvedDims, ShapeError,
};

/// Hollow center-column shield cylinder, symmetric about the midplane.
///
/// The height is a [`Dim`]: the flagship reactor measures it as twice
/// the topmost vertex Z of the upper divertor so the column always
/// reaches the divertors exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CenterColumnShieldConfig {
    pub height: Dim,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub rotation_angle: f64,
}

impl CenterColumnShieldConfig {
    pub(crate) fn validate(&self) -> Result<(), String> {
        check_positive("inner_radius", self.inner_radius)?;
        check_positive("outer_radius", self.outer_radius)?;
        if self.inner_radius >= self.outer_radius {
            return Err(format!(
                "inner_radius {} must be smaller than outer_radius {}",
                self.inner_radius, self.outer_radius
            ));
        }
        if let Some(height) = self.height.literal_value() {
            check_positive("height", height)?;
        }
        check_rotation_angle(self.rotation_angle)
    }
}

pub(crate) fn execute_center_column_shield(
    cfg: &CenterColumnShieldConfig,
    shape: &str,
    kernel: &mut dyn CadKernel,
    dims: &ResolvedDims,
) -> Result<SolidHandle, ShapeError> {
    let height = dims.value_of(shape, "height", &cfg.height)?;
    if !(height.is_finite() && height > 0.0) {
        return Err(ShapeError::InvalidParameter {
            shape: shape.to_string(),
            reason: format!("resolved height must be positive, got {height}"),
        });
    }
    let center_r = (cfg.inner_radius + cfg.outer_radius) / 2.0;
    let width = cfg.outer_radius - cfg.inner_radius;
    let section = rect_section([center_r, 0.0], width, height);
    Ok(kernel.revolve_profile(&section, cfg.rotation_angle)?)
}
