//! Assertion helpers with diagnostic detail.
//!
//! Every failure names the shape involved and reports expected vs
//! actual values, so scenario tests fail with a readable account.

use assembly_engine::Reactor;
use fusor_types::VertexQuery;
use kernel_bridge::SolidInspect;
use shape_catalog::Shape;

use crate::helpers::HarnessError;

/// Assert an extremal-vertex query on a built shape, within tolerance.
pub fn assert_vertex(
    inspect: &dyn SolidInspect,
    shape: &Shape,
    query: VertexQuery,
    expected: f64,
    tol: f64,
) -> Result<(), HarnessError> {
    let actual = shape.measure(inspect, query)?;
    if (actual - expected).abs() <= tol {
        Ok(())
    } else {
        Err(HarnessError::AssertionFailed {
            detail: format!(
                "[{}] {:?}: expected {}, got {} (tol={})",
                shape.name(),
                query,
                expected,
                actual,
                tol
            ),
        })
    }
}

/// Assert every shape in the assembly owns a solid.
pub fn assert_fully_built(reactor: &Reactor) -> Result<(), HarnessError> {
    match reactor.shapes().iter().find(|s| !s.is_built()) {
        None => Ok(()),
        Some(shape) => Err(HarnessError::AssertionFailed {
            detail: format!("shape '{}' has no solid", shape.name()),
        }),
    }
}
