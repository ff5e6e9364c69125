use fusor_types::{Dim, Profile};
use kernel_bridge::SolidHandle;
use serde::{Deserialize, Serialize};

use crate::kernel_ext::CadKernel;
use crate::types::{check_non_negative, check_positive, ResolvedDims, ShapeError};

/// Points sampled along each azimuthal arc of a coil segment.
const ARC_POINTS: usize = 16;

/// Inboard toroidal field coil set.
///
/// `number_of_coils` annular segments spaced evenly around the machine
/// axis, each extruded vertically and unioned into one solid. The gap
/// between neighboring segments is `gap_size` of arc length at the
/// inner radius. The height is a [`Dim`]: the flagship reactor measures
/// it from the center-column shield so the coils span the full column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InboardTfCoilsConfig {
    pub height: Dim,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub number_of_coils: usize,
    pub gap_size: f64,
}

impl InboardTfCoilsConfig {
    pub(crate) fn validate(&self) -> Result<(), String> {
        check_positive("inner_radius", self.inner_radius)?;
        check_positive("outer_radius", self.outer_radius)?;
        if self.inner_radius >= self.outer_radius {
            return Err(format!(
                "inner_radius {} must be smaller than outer_radius {}",
                self.inner_radius, self.outer_radius
            ));
        }
        if self.number_of_coils == 0 {
            return Err("number_of_coils must be at least 1".to_string());
        }
        check_non_negative("gap_size", self.gap_size)?;
        if self.gap_angle() >= self.pitch() {
            return Err(format!(
                "gap_size {} leaves no room for coil segments at inner_radius {}",
                self.gap_size, self.inner_radius
            ));
        }
        if let Some(height) = self.height.literal_value() {
            check_positive("height", height)?;
        }
        Ok(())
    }

    fn pitch(&self) -> f64 {
        std::f64::consts::TAU / self.number_of_coils as f64
    }

    fn gap_angle(&self) -> f64 {
        self.gap_size / self.inner_radius
    }

    /// Planform outline of segment `index`: outer arc counterclockwise,
    /// inner arc back.
    pub fn segment_outline(&self, index: usize) -> Profile {
        let start = index as f64 * self.pitch() + self.gap_angle() / 2.0;
        let end = (index as f64 + 1.0) * self.pitch() - self.gap_angle() / 2.0;

        let mut points = Vec::with_capacity(2 * ARC_POINTS);
        for i in 0..ARC_POINTS {
            let phi = start + (end - start) * i as f64 / (ARC_POINTS - 1) as f64;
            points.push([self.outer_radius * phi.cos(), self.outer_radius * phi.sin()]);
        }
        for i in (0..ARC_POINTS).rev() {
            let phi = start + (end - start) * i as f64 / (ARC_POINTS - 1) as f64;
            points.push([self.inner_radius * phi.cos(), self.inner_radius * phi.sin()]);
        }
        Profile::new(points)
    }
}

pub(crate) fn execute_inboard_tf_coils(
    cfg: &InboardTfCoilsConfig,
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
    let half = height / 2.0;
    let mut joined: Option<SolidHandle> = None;
    for index in 0..cfg.number_of_coils {
        let segment = kernel.extrude_profile(&cfg.segment_outline(index), -half, half)?;
        joined = Some(match joined {
            None => segment,
            Some(acc) => kernel.union(&acc, &segment)?,
        });
    }
    // number_of_coils >= 1 is validated at construction.
    joined.ok_or_else(|| ShapeError::InvalidParameter {
        shape: shape.to_string(),
        reason: "number_of_coils must be at least 1".to_string(),
    })
}
