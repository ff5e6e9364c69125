use serde::{Deserialize, Serialize};

/// Closed planar outline handed to the kernel.
///
/// Points are (u, v) pairs in the profile's plane: poloidal profiles are
/// (r, z) and are revolved about the Z axis, planform profiles are (x, y)
/// and are extruded along Z. The last point connects back to the first
/// implicitly; at least 3 points are needed for a non-degenerate face.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub points: Vec<[f64; 2]>,
}

/// Axis-aligned extents of a profile in its own plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileBounds {
    pub u_min: f64,
    pub u_max: f64,
    pub v_min: f64,
    pub v_max: f64,
}

impl Profile {
    pub fn new(points: Vec<[f64; 2]>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Extents in the profile plane; `None` for an empty profile.
    pub fn bounds(&self) -> Option<ProfileBounds> {
        let first = self.points.first()?;
        let mut b = ProfileBounds {
            u_min: first[0],
            u_max: first[0],
            v_min: first[1],
            v_max: first[1],
        };
        for p in &self.points[1..] {
            b.u_min = b.u_min.min(p[0]);
            b.u_max = b.u_max.max(p[0]);
            b.v_min = b.v_min.min(p[1]);
            b.v_max = b.v_max.max(p[1]);
        }
        Some(b)
    }

    /// Min/max point distance from the plane origin; `None` when empty.
    /// Planform profiles use this as their radial extent about Z.
    pub fn radius_range(&self) -> Option<(f64, f64)> {
        let mut range: Option<(f64, f64)> = None;
        for p in &self.points {
            let r = (p[0] * p[0] + p[1] * p[1]).sqrt();
            range = Some(match range {
                None => (r, r),
                Some((lo, hi)) => (lo.min(r), hi.max(r)),
            });
        }
        range
    }
}
