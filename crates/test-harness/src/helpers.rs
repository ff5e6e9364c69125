//! Scenario configs and assembly builders shared by integration tests.

use assembly_engine::{AssemblyError, Reactor};
use fusor_types::{Color, Dim, MeasureRule, VertexQuery};
use shape_catalog::{
    BlanketConfig, CadKernel, CenterColumnShieldConfig, DivertorConfig, InboardTfCoilsConfig,
    PlasmaConfig, PoloidalFieldCoilCaseConfig, PoloidalFieldCoilConfig, Shape, ShapeError,
    ShapeKind,
};

// ── Error Type ───────────────────────────────────────────────────────────

/// Unified error type for the scenario builders.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("shape construction failed: {0}")]
    Shape(#[from] ShapeError),

    #[error("assembly rejected a shape: {0}")]
    Assembly(#[from] AssemblyError),

    #[error("assertion failed: {detail}")]
    AssertionFailed { detail: String },
}

// ── Scenario Config ──────────────────────────────────────────────────────

/// Section centers of the four PF coils, (r, z).
const PF_COIL_CENTERS: [[f64; 2]; 4] = [
    [600.0, 500.0],
    [600.0, -500.0],
    [800.0, -200.0],
    [800.0, 200.0],
];

/// Inputs of the canonical ball reactor scenario.
///
/// Defaults describe the flagship double-null machine: a 350 cm major
/// radius plasma wrapped in a 200 cm outboard blanket, divertor blocks
/// closing both blanket ends, a center column whose height is measured
/// off the upper divertor, four cased PF coils, and an inboard TF coil
/// set whose height is measured off the center column.
#[derive(Debug, Clone)]
pub struct BallReactorConfig {
    pub rotation_angle: f64,
    pub major_radius: f64,
    pub minor_radius: f64,
    pub elongation: f64,
    pub triangularity: f64,
    pub shield_inner_radius: f64,
    pub shield_outer_radius: f64,
    pub blanket_thickness: f64,
    pub blanket_offset_from_plasma: f64,
    pub blanket_start_angle: f64,
    pub blanket_stop_angle: f64,
    pub tf_inner_radius: f64,
    pub number_of_tf_coils: usize,
    pub tf_gap_size: f64,
}

impl Default for BallReactorConfig {
    fn default() -> Self {
        Self {
            rotation_angle: 180.0,
            major_radius: 350.0,
            minor_radius: 156.0,
            elongation: 2.0,
            triangularity: 0.55,
            shield_inner_radius: 100.0,
            shield_outer_radius: 150.0,
            blanket_thickness: 200.0,
            blanket_offset_from_plasma: 80.0,
            blanket_start_angle: 110.0,
            blanket_stop_angle: 250.0,
            tf_inner_radius: 30.0,
            number_of_tf_coils: 16,
            tf_gap_size: 10.0,
        }
    }
}

// ── Assembly Builders ────────────────────────────────────────────────────

/// Construct the fully populated, unbuilt ball reactor assembly.
///
/// The divertor blocks share the blanket's radial build and seat on the
/// angles where the blanket wrap ends; their inboard limit is the
/// center column's outer face. Construction is a pure function of the
/// config: every parameter is validated here and no kernel is involved.
pub fn ball_reactor(cfg: &BallReactorConfig) -> Result<Reactor, HarnessError> {
    let mut reactor = Reactor::new("ball_reactor");

    reactor.add_shape(Shape::new(
        "plasma",
        ShapeKind::Plasma(PlasmaConfig {
            major_radius: cfg.major_radius,
            minor_radius: cfg.minor_radius,
            elongation: cfg.elongation,
            triangularity: cfg.triangularity,
            rotation_angle: cfg.rotation_angle,
        }),
        "DT_plasma",
        Some(Color::rgba(0.95, 0.41, 0.7, 0.8)),
    )?)?;

    reactor.add_shape(Shape::new(
        "blanket",
        ShapeKind::Blanket(BlanketConfig {
            major_radius: cfg.major_radius,
            minor_radius: cfg.minor_radius,
            elongation: cfg.elongation,
            triangularity: cfg.triangularity,
            thickness: cfg.blanket_thickness,
            offset_from_plasma: cfg.blanket_offset_from_plasma,
            start_angle: cfg.blanket_start_angle,
            stop_angle: cfg.blanket_stop_angle,
            rotation_angle: cfg.rotation_angle,
        }),
        "blanket_material",
        Some(Color::rgb(0.4, 0.1, 0.4)),
    )?)?;

    for (name, stop_angle) in [
        ("divertor_upper", cfg.blanket_start_angle),
        ("divertor_lower", cfg.blanket_stop_angle),
    ] {
        reactor.add_shape(Shape::new(
            name,
            ShapeKind::Divertor(DivertorConfig {
                major_radius: cfg.major_radius,
                minor_radius: cfg.minor_radius,
                elongation: cfg.elongation,
                triangularity: cfg.triangularity,
                thickness: cfg.blanket_thickness,
                stop_angle,
                start_x_value: cfg.shield_outer_radius,
                offset_from_plasma: cfg.blanket_offset_from_plasma,
                rotation_angle: cfg.rotation_angle,
            }),
            "divertor_material",
            Some(Color::rgb(0.1, 0.35, 0.1)),
        )?)?;
    }

    let column_height =
        Dim::measured(MeasureRule::new("divertor_upper", VertexQuery::HighestZ).scaled(2.0));
    reactor.add_shape(Shape::new(
        "center_column_shield",
        ShapeKind::CenterColumnShield(CenterColumnShieldConfig {
            height: column_height,
            inner_radius: cfg.shield_inner_radius,
            outer_radius: cfg.shield_outer_radius,
            rotation_angle: cfg.rotation_angle,
        }),
        "center_column_material",
        Some(Color::rgb(0.15, 0.15, 0.45)),
    )?)?;

    for (i, center) in PF_COIL_CENTERS.iter().enumerate() {
        let n = i + 1;
        reactor.add_shape(Shape::new(
            format!("pf_coil_{n}"),
            ShapeKind::PoloidalFieldCoil(PoloidalFieldCoilConfig {
                height: 30.0,
                width: 30.0,
                center_point: *center,
                rotation_angle: cfg.rotation_angle,
            }),
            "pf_coil_material",
            None,
        )?)?;
        reactor.add_shape(Shape::new(
            format!("pf_coil_case_{n}"),
            ShapeKind::PoloidalFieldCoilCase(PoloidalFieldCoilCaseConfig {
                casing_thickness: 10.0,
                coil_height: 30.0,
                coil_width: 30.0,
                center_point: *center,
                rotation_angle: cfg.rotation_angle,
            }),
            "pf_coil_material",
            Some(Color::rgb(0.9, 0.31, 0.2)),
        )?)?;
    }

    let tf_height =
        Dim::measured(MeasureRule::new("center_column_shield", VertexQuery::HighestZ).scaled(2.0));
    reactor.add_shape(Shape::new(
        "inboard_tf_coils",
        ShapeKind::InboardTfCoils(InboardTfCoilsConfig {
            height: tf_height,
            inner_radius: cfg.tf_inner_radius,
            outer_radius: cfg.shield_inner_radius,
            number_of_coils: cfg.number_of_tf_coils,
            gap_size: cfg.tf_gap_size,
        }),
        "inboard_tf_coils_material",
        Some(Color::rgb(0.55, 0.3, 0.15)),
    )?)?;

    Ok(reactor)
}

/// Build the default scenario on the given kernel.
pub fn built_ball_reactor(kernel: &mut dyn CadKernel) -> Result<Reactor, HarnessError> {
    let mut reactor = ball_reactor(&BallReactorConfig::default())?;
    reactor.build_all(kernel)?;
    Ok(reactor)
}
