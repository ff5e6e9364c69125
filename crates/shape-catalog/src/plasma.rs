use fusor_types::Profile;
use kernel_bridge::SolidHandle;
use serde::{Deserialize, Serialize};

use crate::kernel_ext::CadKernel;
use crate::types::{check_positive, check_rotation_angle, ShapeError};

/// Points sampled along one closed plasma-family boundary loop.
pub(crate) const BOUNDARY_POINTS: usize = 100;

/// D-shaped plasma described by the standard shaped-boundary
/// parameterization R(θ) = R₀ + a·cos(θ + asin(δ)·sin θ),
/// Z(θ) = κ·a·sin θ.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlasmaConfig {
    /// Distance R₀ from the machine axis to the plasma center.
    pub major_radius: f64,
    /// Plasma half-width a.
    pub minor_radius: f64,
    /// Vertical stretch κ.
    pub elongation: f64,
    /// D-ness δ, in [-1, 1].
    pub triangularity: f64,
    /// Revolution sweep in degrees, (0, 360].
    pub rotation_angle: f64,
}

impl PlasmaConfig {
    pub(crate) fn validate(&self) -> Result<(), String> {
        check_envelope(
            self.major_radius,
            self.minor_radius,
            self.elongation,
            self.triangularity,
        )?;
        check_rotation_angle(self.rotation_angle)
    }

    /// Upper X-point of the boundary: (R₀ − δ·a, κ·a).
    pub fn upper_x_point(&self) -> [f64; 2] {
        [
            self.major_radius - self.triangularity * self.minor_radius,
            self.elongation * self.minor_radius,
        ]
    }

    /// Closed boundary outline sampled at fixed resolution.
    pub fn outline(&self) -> Profile {
        let mut points = Vec::with_capacity(BOUNDARY_POINTS);
        for i in 0..BOUNDARY_POINTS {
            let theta = std::f64::consts::TAU * i as f64 / BOUNDARY_POINTS as f64;
            points.push(boundary_point(
                self.major_radius,
                self.minor_radius,
                self.elongation,
                self.triangularity,
                theta,
            ));
        }
        Profile::new(points)
    }
}

/// Shared range checks for the plasma envelope parameters that the
/// blanket and divertor configs carry as well.
pub(crate) fn check_envelope(
    major_radius: f64,
    minor_radius: f64,
    elongation: f64,
    triangularity: f64,
) -> Result<(), String> {
    check_positive("major_radius", major_radius)?;
    check_positive("minor_radius", minor_radius)?;
    if minor_radius >= major_radius {
        return Err(format!(
            "minor_radius {minor_radius} must be smaller than major_radius {major_radius}"
        ));
    }
    check_positive("elongation", elongation)?;
    if !triangularity.is_finite() || triangularity.abs() > 1.0 {
        return Err(format!(
            "triangularity must lie in [-1, 1], got {triangularity}"
        ));
    }
    Ok(())
}

/// One point of a shaped boundary with half-width `minor` around
/// (`major`, 0). Blankets and divertors reuse this with the half-width
/// grown by their offsets.
pub(crate) fn boundary_point(
    major: f64,
    minor: f64,
    elongation: f64,
    triangularity: f64,
    theta: f64,
) -> [f64; 2] {
    let shaped = theta + triangularity.asin() * theta.sin();
    [
        major + minor * shaped.cos(),
        elongation * minor * theta.sin(),
    ]
}

pub(crate) fn execute_plasma(
    cfg: &PlasmaConfig,
    kernel: &mut dyn CadKernel,
) -> Result<SolidHandle, ShapeError> {
    Ok(kernel.revolve_profile(&cfg.outline(), cfg.rotation_angle)?)
}
