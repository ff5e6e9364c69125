use fusor_types::{Color, Dim, MeasureRule, Profile, VertexQuery};
use kernel_bridge::{KernelError, SolidHandle, SolidInspect};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::blanket::{self, BlanketConfig};
use crate::divertor::{self, DivertorConfig};
use crate::kernel_ext::CadKernel;
use crate::pf_coil::{self, PoloidalFieldCoilCaseConfig, PoloidalFieldCoilConfig};
use crate::plasma::{self, PlasmaConfig};
use crate::shield::{self, CenterColumnShieldConfig};
use crate::tf_coils::{self, InboardTfCoilsConfig};

/// Errors raised by shape construction, build, and measurement.
#[derive(Error, Debug)]
pub enum ShapeError {
    /// Parameter validation failed. Raised while constructing the shape,
    /// before any kernel work.
    #[error("invalid parameter for shape '{shape}': {reason}")]
    InvalidParameter { shape: String, reason: String },

    /// The shape has no solid yet; build it first.
    #[error("shape '{shape}' has not been built")]
    NotBuilt { shape: String },

    /// Build was invoked without a resolved value for a measured dimension.
    #[error("shape '{shape}' built without a value for measured dimension '{param}'")]
    UnresolvedDimension { shape: String, param: String },

    /// Kernel failure, passed through unchanged.
    #[error(transparent)]
    Kernel(#[from] KernelError),
}

/// Closed set of shape variants. Dispatch is by variant tag: adding a
/// kind of component means a new arm here plus a config module beside
/// the existing ones, and nothing else changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ShapeKind {
    Plasma(PlasmaConfig),
    Blanket(BlanketConfig),
    Divertor(DivertorConfig),
    CenterColumnShield(CenterColumnShieldConfig),
    PoloidalFieldCoil(PoloidalFieldCoilConfig),
    PoloidalFieldCoilCase(PoloidalFieldCoilCaseConfig),
    InboardTfCoils(InboardTfCoilsConfig),
}

impl ShapeKind {
    pub fn variant_name(&self) -> &'static str {
        match self {
            ShapeKind::Plasma(_) => "plasma",
            ShapeKind::Blanket(_) => "blanket",
            ShapeKind::Divertor(_) => "divertor",
            ShapeKind::CenterColumnShield(_) => "center_column_shield",
            ShapeKind::PoloidalFieldCoil(_) => "poloidal_field_coil",
            ShapeKind::PoloidalFieldCoilCase(_) => "poloidal_field_coil_case",
            ShapeKind::InboardTfCoils(_) => "inboard_tf_coils",
        }
    }

    /// Measured dimensions this variant declares, as (parameter, rule).
    pub fn measure_rules(&self) -> Vec<(&'static str, &MeasureRule)> {
        match self {
            ShapeKind::CenterColumnShield(cfg) => dim_rule("height", &cfg.height),
            ShapeKind::InboardTfCoils(cfg) => dim_rule("height", &cfg.height),
            _ => Vec::new(),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), String> {
        match self {
            ShapeKind::Plasma(cfg) => cfg.validate(),
            ShapeKind::Blanket(cfg) => cfg.validate(),
            ShapeKind::Divertor(cfg) => cfg.validate(),
            ShapeKind::CenterColumnShield(cfg) => cfg.validate(),
            ShapeKind::PoloidalFieldCoil(cfg) => cfg.validate(),
            ShapeKind::PoloidalFieldCoilCase(cfg) => cfg.validate(),
            ShapeKind::InboardTfCoils(cfg) => cfg.validate(),
        }
    }

    pub(crate) fn execute(
        &self,
        shape: &str,
        kernel: &mut dyn CadKernel,
        dims: &ResolvedDims,
    ) -> Result<SolidHandle, ShapeError> {
        match self {
            ShapeKind::Plasma(cfg) => plasma::execute_plasma(cfg, kernel),
            ShapeKind::Blanket(cfg) => blanket::execute_blanket(cfg, kernel),
            ShapeKind::Divertor(cfg) => divertor::execute_divertor(cfg, kernel),
            ShapeKind::CenterColumnShield(cfg) => {
                shield::execute_center_column_shield(cfg, shape, kernel, dims)
            }
            ShapeKind::PoloidalFieldCoil(cfg) => pf_coil::execute_pf_coil(cfg, kernel),
            ShapeKind::PoloidalFieldCoilCase(cfg) => pf_coil::execute_pf_coil_case(cfg, kernel),
            ShapeKind::InboardTfCoils(cfg) => {
                tf_coils::execute_inboard_tf_coils(cfg, shape, kernel, dims)
            }
        }
    }
}

fn dim_rule<'a>(param: &'static str, dim: &'a Dim) -> Vec<(&'static str, &'a MeasureRule)> {
    dim.rule().map(|rule| (param, rule)).into_iter().collect()
}

/// One measured dimension after resolution: which parameter, which
/// source shape it was measured from, and the value that was fixed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedDim {
    pub param: String,
    pub source: String,
    pub value: f64,
}

/// Resolved values for the measured dimensions of one shape, keyed by
/// parameter name. The assembly resolver fills this in just before the
/// shape is built; shapes without measured dimensions take it empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolvedDims {
    entries: Vec<ResolvedDim>,
}

impl ResolvedDims {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: ResolvedDim) {
        self.entries.push(entry);
    }

    pub fn get(&self, param: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.param == param)
            .map(|e| e.value)
    }

    pub fn entries(&self) -> &[ResolvedDim] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Numeric value of `dim`: the literal, or the resolved entry for
    /// `param` when the dimension is measured.
    pub(crate) fn value_of(&self, shape: &str, param: &'static str, dim: &Dim) -> Result<f64, ShapeError> {
        match dim {
            Dim::Literal { value } => Ok(*value),
            Dim::Measured { .. } => self.get(param).ok_or_else(|| ShapeError::UnresolvedDimension {
                shape: shape.to_string(),
                param: param.to_string(),
            }),
        }
    }
}

/// A named parametric reactor component.
///
/// Immutable once constructed: the name, config, material tag, and color
/// are fixed, and the solid handle, once present, never changes. All
/// parameter validation happens in [`Shape::new`], before any kernel work.
#[derive(Debug)]
pub struct Shape {
    name: String,
    kind: ShapeKind,
    material_tag: String,
    color: Option<Color>,
    solid: Option<SolidHandle>,
    resolved_dims: ResolvedDims,
}

impl Shape {
    pub fn new(
        name: impl Into<String>,
        kind: ShapeKind,
        material_tag: impl Into<String>,
        color: Option<Color>,
    ) -> Result<Self, ShapeError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ShapeError::InvalidParameter {
                shape: name,
                reason: "name must not be empty".to_string(),
            });
        }
        if let Err(reason) = kind.validate() {
            return Err(ShapeError::InvalidParameter { shape: name, reason });
        }
        if let Some(color) = &color {
            if !color.channels_in_range() {
                return Err(ShapeError::InvalidParameter {
                    shape: name,
                    reason: "color channels must lie in [0, 1]".to_string(),
                });
            }
        }
        Ok(Self {
            name,
            kind,
            material_tag: material_tag.into(),
            color,
            solid: None,
            resolved_dims: ResolvedDims::empty(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    pub fn material_tag(&self) -> &str {
        &self.material_tag
    }

    pub fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }

    pub fn is_built(&self) -> bool {
        self.solid.is_some()
    }

    pub fn solid(&self) -> Option<&SolidHandle> {
        self.solid.as_ref()
    }

    /// Names of the shapes this shape's measured dimensions reference.
    pub fn dependencies(&self) -> Vec<&str> {
        self.kind
            .measure_rules()
            .into_iter()
            .map(|(_, rule)| rule.source.as_str())
            .collect()
    }

    /// Values fixed for measured dimensions when the shape was built.
    pub fn resolved_dims(&self) -> &[ResolvedDim] {
        self.resolved_dims.entries()
    }

    /// Generate the profile(s) and run the kernel ops for this shape.
    ///
    /// `dims` must carry one value per measured dimension (the assembly
    /// resolver produces it). Building an already-built shape is a no-op:
    /// the handle is immutable once present and no kernel call is made.
    pub fn build(
        &mut self,
        kernel: &mut dyn CadKernel,
        dims: &ResolvedDims,
    ) -> Result<(), ShapeError> {
        if self.solid.is_some() {
            return Ok(());
        }
        let handle = self.kind.execute(&self.name, kernel, dims)?;
        self.solid = Some(handle);
        self.resolved_dims = dims.clone();
        Ok(())
    }

    /// Extremal-vertex query on the built solid.
    pub fn measure(
        &self,
        inspect: &dyn SolidInspect,
        query: VertexQuery,
    ) -> Result<f64, ShapeError> {
        let solid = self.solid.as_ref().ok_or_else(|| ShapeError::NotBuilt {
            shape: self.name.clone(),
        })?;
        Ok(inspect.query_vertex(solid, query)?)
    }
}

// ── Shared validation and profile helpers ────────────────────────────────

pub(crate) fn check_positive(field: &str, value: f64) -> Result<(), String> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(format!("{field} must be positive, got {value}"))
    }
}

pub(crate) fn check_non_negative(field: &str, value: f64) -> Result<(), String> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(format!("{field} must not be negative, got {value}"))
    }
}

/// Revolution sweeps must lie in (0, 360] degrees.
pub(crate) fn check_rotation_angle(value: f64) -> Result<(), String> {
    if value.is_finite() && value > 0.0 && value <= 360.0 {
        Ok(())
    } else {
        Err(format!(
            "rotation_angle must lie in (0, 360] degrees, got {value}"
        ))
    }
}

/// Axis-aligned rectangular section centered at `center`, as a closed
/// profile. Used for coil sections and the shield's r-z rectangle.
pub(crate) fn rect_section(center: [f64; 2], width: f64, height: f64) -> Profile {
    let half_w = width / 2.0;
    let half_h = height / 2.0;
    Profile::new(vec![
        [center[0] - half_w, center[1] - half_h],
        [center[0] + half_w, center[1] - half_h],
        [center[0] + half_w, center[1] + half_h],
        [center[0] - half_w, center[1] + half_h],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use fusor_types::MeasureRule;
    use kernel_bridge::MockKernel;

    fn shield_kind(height: Dim) -> ShapeKind {
        ShapeKind::CenterColumnShield(CenterColumnShieldConfig {
            height,
            inner_radius: 100.0,
            outer_radius: 150.0,
            rotation_angle: 360.0,
        })
    }

    #[test]
    fn construction_validates_before_any_kernel_work() {
        let bad = ShapeKind::CenterColumnShield(CenterColumnShieldConfig {
            height: Dim::literal(600.0),
            inner_radius: -100.0,
            outer_radius: 150.0,
            rotation_angle: 360.0,
        });
        let err = Shape::new("shield", bad, "shield_material", None).unwrap_err();
        assert!(matches!(err, ShapeError::InvalidParameter { .. }));
    }

    #[test]
    fn out_of_range_color_is_rejected() {
        let err = Shape::new(
            "shield",
            shield_kind(Dim::literal(600.0)),
            "shield_material",
            Some(Color::rgb(2.0, 0.0, 0.0)),
        )
        .unwrap_err();
        assert!(matches!(err, ShapeError::InvalidParameter { .. }));
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = Shape::new("  ", shield_kind(Dim::literal(1.0)), "m", None).unwrap_err();
        assert!(matches!(err, ShapeError::InvalidParameter { .. }));
    }

    #[test]
    fn build_is_idempotent() {
        let mut kernel = MockKernel::new();
        let mut shape =
            Shape::new("shield", shield_kind(Dim::literal(600.0)), "m", None).unwrap();
        shape.build(&mut kernel, &ResolvedDims::empty()).unwrap();
        let first = shape.solid().cloned();
        let ops_after_first = kernel.op_count();

        shape.build(&mut kernel, &ResolvedDims::empty()).unwrap();
        assert_eq!(shape.solid().cloned(), first);
        assert_eq!(kernel.op_count(), ops_after_first);
    }

    #[test]
    fn measure_requires_built_solid() {
        let kernel = MockKernel::new();
        let shape = Shape::new("shield", shield_kind(Dim::literal(600.0)), "m", None).unwrap();
        let err = shape
            .measure(&kernel, VertexQuery::HighestZ)
            .unwrap_err();
        assert!(matches!(err, ShapeError::NotBuilt { shape } if shape == "shield"));
    }

    #[test]
    fn measured_dimension_requires_resolved_value() {
        let mut kernel = MockKernel::new();
        let rule = MeasureRule::new("divertor_upper", VertexQuery::HighestZ).scaled(2.0);
        let mut shape =
            Shape::new("shield", shield_kind(Dim::measured(rule)), "m", None).unwrap();
        let err = shape
            .build(&mut kernel, &ResolvedDims::empty())
            .unwrap_err();
        assert!(matches!(err, ShapeError::UnresolvedDimension { .. }));
    }

    #[test]
    fn dependencies_come_from_measure_rules() {
        let rule = MeasureRule::new("divertor_upper", VertexQuery::HighestZ).scaled(2.0);
        let shape = Shape::new("shield", shield_kind(Dim::measured(rule)), "m", None).unwrap();
        assert_eq!(shape.dependencies(), vec!["divertor_upper"]);

        let literal = Shape::new("shield2", shield_kind(Dim::literal(5.0)), "m", None).unwrap();
        assert!(literal.dependencies().is_empty());
    }

    #[test]
    fn kind_serializes_with_variant_tag() {
        let kind = shield_kind(Dim::literal(600.0));
        let json = serde_json::to_string(&kind).unwrap();
        assert!(json.contains("\"type\":\"CenterColumnShield\""));
        let back: ShapeKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, kind);
    }
}
