//! End-to-end scenarios over the canonical ball reactor: dependency
//! resolution through the assembly, manifest export, and STEP export,
//! all on the mock kernel.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use fusor_types::VertexQuery;
use kernel_bridge::MockKernel;
use manifest_export::{export_step, write_manifest, ExportOptions, ReactorManifest};
use shape_catalog::{ResolvedDim, ShapeError};
use test_harness::{
    assertions::{assert_fully_built, assert_vertex},
    ball_reactor, built_ball_reactor, BallReactorConfig, HarnessError,
};

// ── Helpers ──────────────────────────────────────────────────────────────

fn temp_dir(prefix: &str) -> PathBuf {
    let unique = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("duration")
        .as_nanos();
    std::env::temp_dir().join(format!("test-harness-scenarios-{prefix}-{unique}"))
}

const SHAPE_NAMES: [&str; 14] = [
    "plasma",
    "blanket",
    "divertor_upper",
    "divertor_lower",
    "center_column_shield",
    "pf_coil_1",
    "pf_coil_case_1",
    "pf_coil_2",
    "pf_coil_case_2",
    "pf_coil_3",
    "pf_coil_case_3",
    "pf_coil_4",
    "pf_coil_case_4",
    "inboard_tf_coils",
];

/// Analytic top of the upper divertor: the offset plasma boundary at the
/// blanket start angle, plus the block thickness.
fn expected_divertor_top(cfg: &BallReactorConfig) -> f64 {
    cfg.elongation
        * (cfg.minor_radius + cfg.blanket_offset_from_plasma)
        * cfg.blanket_start_angle.to_radians().sin()
        + cfg.blanket_thickness
}

// ── Full Build Scenarios ─────────────────────────────────────────────────

#[test]
fn canonical_reactor_builds_in_full() {
    let mut kernel = MockKernel::new();
    let reactor = built_ball_reactor(&mut kernel).unwrap();

    let names: Vec<&str> = reactor.shapes().iter().map(|s| s.name()).collect();
    assert_eq!(names, SHAPE_NAMES);
    assert_fully_built(&reactor).unwrap();

    // 5 revolved shells + 4 coils + 4 cases of 3 ops + 16 TF segments
    // with 15 unions.
    assert_eq!(kernel.op_count(), 52);
}

#[test]
fn column_height_is_twice_the_upper_divertor_top() {
    let cfg = BallReactorConfig::default();
    let mut kernel = MockKernel::new();
    let reactor = built_ball_reactor(&mut kernel).unwrap();

    let divertor_top = reactor
        .shape("divertor_upper")
        .unwrap()
        .measure(&kernel, VertexQuery::HighestZ)
        .unwrap();
    assert!((divertor_top - expected_divertor_top(&cfg)).abs() < 1e-9);

    let column = reactor.shape("center_column_shield").unwrap();
    assert_eq!(
        column.resolved_dims(),
        &[ResolvedDim {
            param: "height".to_string(),
            source: "divertor_upper".to_string(),
            value: 2.0 * divertor_top,
        }]
    );

    // Half the resolved height lands the column top exactly on the
    // divertor top.
    assert_vertex(&kernel, column, VertexQuery::HighestZ, divertor_top, 0.0).unwrap();
    assert_vertex(&kernel, column, VertexQuery::LowestZ, -divertor_top, 0.0).unwrap();
}

#[test]
fn tf_coil_height_tracks_the_center_column() {
    let mut kernel = MockKernel::new();
    let reactor = built_ball_reactor(&mut kernel).unwrap();

    let column_top = reactor
        .shape("center_column_shield")
        .unwrap()
        .measure(&kernel, VertexQuery::HighestZ)
        .unwrap();
    let tf = reactor.shape("inboard_tf_coils").unwrap();
    assert_eq!(tf.resolved_dims()[0].source, "center_column_shield");
    assert_eq!(tf.resolved_dims()[0].value, 2.0 * column_top);
    assert_vertex(&kernel, tf, VertexQuery::HighestZ, column_top, 0.0).unwrap();
}

#[test]
fn same_inputs_build_the_same_assembly() {
    let mut kernel_a = MockKernel::new();
    let mut kernel_b = MockKernel::new();
    let reactor_a = built_ball_reactor(&mut kernel_a).unwrap();
    let reactor_b = built_ball_reactor(&mut kernel_b).unwrap();

    assert_eq!(kernel_a.op_count(), kernel_b.op_count());
    for name in SHAPE_NAMES {
        let a = reactor_a.shape(name).unwrap();
        let b = reactor_b.shape(name).unwrap();
        assert_eq!(a.solid(), b.solid(), "handles diverged for '{name}'");
        assert_eq!(a.resolved_dims(), b.resolved_dims());
    }
}

#[test]
fn negative_minor_radius_fails_at_construction() {
    let cfg = BallReactorConfig {
        minor_radius: -156.0,
        ..BallReactorConfig::default()
    };
    // Construction is pure: the failure happens while the config is
    // validated, with no kernel anywhere in sight.
    let err = ball_reactor(&cfg).unwrap_err();
    match err {
        HarnessError::Shape(ShapeError::InvalidParameter { shape, reason }) => {
            assert_eq!(shape, "plasma");
            assert!(reason.contains("minor_radius"), "reason: {reason}");
        }
        other => panic!("expected InvalidParameter, got {other:?}"),
    }
}

// ── Export Scenarios ─────────────────────────────────────────────────────

#[test]
fn manifest_lists_every_shape_in_insertion_order() {
    let dir = temp_dir("manifest");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("manifest.json");

    let mut kernel = MockKernel::new();
    let reactor = built_ball_reactor(&mut kernel).unwrap();
    let manifest = write_manifest(&reactor, &path).unwrap();

    let entry_names: Vec<&str> = manifest
        .materials
        .iter()
        .map(|e| e.shape_name.as_str())
        .collect();
    assert_eq!(entry_names, SHAPE_NAMES);

    assert_eq!(manifest.materials[0].material_tag, "DT_plasma");
    assert_eq!(manifest.materials[5].material_tag, "pf_coil_material");
    assert_eq!(manifest.materials[6].material_tag, "pf_coil_material");
    assert!(manifest.materials[5].color.is_none());

    let parsed: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(
        parsed["materials"][0]["color"],
        serde_json::json!([0.95, 0.41, 0.7, 0.8])
    );
    assert_eq!(parsed["materials"][0]["step_file"], "plasma.step");

    let back: ReactorManifest = serde_json::from_str(&parsed.to_string()).unwrap();
    assert_eq!(back.materials, manifest.materials);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn step_export_writes_every_shape_plus_graveyard() {
    let dir = temp_dir("step");
    let mut kernel = MockKernel::new();
    let reactor = built_ball_reactor(&mut kernel).unwrap();
    let ops_before = kernel.op_count();

    let written = export_step(&reactor, &mut kernel, &dir, &ExportOptions::default()).unwrap();

    assert_eq!(written.len(), SHAPE_NAMES.len() + 1);
    let last = written.last().unwrap();
    assert_eq!(last.file_name().unwrap(), "graveyard.step");
    for path in &written {
        assert!(path.exists(), "missing {}", path.display());
    }
    assert_eq!(kernel.export_count(), written.len());
    // Two boundary revolves and one subtract build the graveyard shell.
    assert_eq!(kernel.op_count(), ops_before + 3);

    std::fs::remove_dir_all(&dir).ok();
}
