use fusor_types::MeasureRule;
use kernel_bridge::SolidInspect;
use shape_catalog::{ResolvedDim, ResolvedDims, Shape};
use tracing::debug;

use crate::types::AssemblyError;

/// Resolve one measurement rule against the current assembly state.
///
/// The source shape must exist and must already be built; the raw query
/// result is passed through the rule's affine map.
pub fn resolve_rule(
    rule: &MeasureRule,
    needed_by: &str,
    shapes: &[Shape],
    inspect: &dyn SolidInspect,
) -> Result<f64, AssemblyError> {
    let source = shapes
        .iter()
        .find(|s| s.name() == rule.source)
        .ok_or_else(|| AssemblyError::UnknownShape {
            source: rule.source.clone(),
            referenced_by: needed_by.to_string(),
        })?;
    if !source.is_built() {
        return Err(AssemblyError::DependencyNotReady {
            source: rule.source.clone(),
            needed_by: needed_by.to_string(),
        });
    }
    let raw = source
        .measure(inspect, rule.query)
        .map_err(|e| AssemblyError::BuildFailed {
            shape: needed_by.to_string(),
            source: e,
        })?;
    let value = rule.evaluate(raw);
    debug!(
        source = %rule.source,
        query = ?rule.query,
        raw,
        value,
        needed_by,
        "resolved measured dimension"
    );
    Ok(value)
}

/// Resolve every measured dimension of `shape`. Runs exactly once per
/// shape, immediately before it is built; the values are then fixed on
/// the shape for the rest of its life.
pub fn resolve_dims(
    shape: &Shape,
    shapes: &[Shape],
    inspect: &dyn SolidInspect,
) -> Result<ResolvedDims, AssemblyError> {
    let mut dims = ResolvedDims::empty();
    for (param, rule) in shape.kind().measure_rules() {
        let value = resolve_rule(rule, shape.name(), shapes, inspect)?;
        dims.push(ResolvedDim {
            param: param.to_string(),
            source: rule.source.clone(),
            value,
        });
    }
    Ok(dims)
}
