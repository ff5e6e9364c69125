pub mod order;
pub mod resolve;
pub mod types;

use shape_catalog::{CadKernel, Shape};
use tracing::info;

pub use crate::types::AssemblyError;

/// An ordered assembly of named reactor components.
///
/// Shapes keep their insertion order for iteration and export. Only the
/// construction schedule is reordered, following each shape's declared
/// measurement dependencies, so a dependent shape always finds its
/// source already built. Constructing and populating a `Reactor` is a
/// pure function of its inputs; there is no global registry.
#[derive(Debug)]
pub struct Reactor {
    name: String,
    shapes: Vec<Shape>,
}

impl Reactor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shapes: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register a shape. Names are unique within an assembly.
    pub fn add_shape(&mut self, shape: Shape) -> Result<(), AssemblyError> {
        if self.shapes.iter().any(|s| s.name() == shape.name()) {
            return Err(AssemblyError::DuplicateName {
                name: shape.name().to_string(),
            });
        }
        self.shapes.push(shape);
        Ok(())
    }

    /// All shapes, in insertion order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn shape(&self, name: &str) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.name() == name)
    }

    pub fn is_fully_built(&self) -> bool {
        self.shapes.iter().all(|s| s.is_built())
    }

    /// The topological construction schedule, as indices into
    /// [`Reactor::shapes`]. Fails on unknown dependency names or cycles.
    pub fn build_order(&self) -> Result<Vec<usize>, AssemblyError> {
        order::build_order(&self.shapes)
    }

    /// Build every shape, dependencies first.
    ///
    /// The schedule is validated before any kernel call, so unknown
    /// sources and cycles never leave half-built assemblies behind.
    /// The pass is fail-fast: the first build error aborts it with the
    /// offending shape named, leaving earlier shapes built and later
    /// ones untouched. Already-built shapes are skipped, which makes
    /// re-running after adding shapes cheap.
    pub fn build_all(&mut self, kernel: &mut dyn CadKernel) -> Result<(), AssemblyError> {
        let schedule = order::build_order(&self.shapes)?;
        for idx in schedule {
            if self.shapes[idx].is_built() {
                continue;
            }
            let dims = resolve::resolve_dims(&self.shapes[idx], &self.shapes, kernel.as_inspect())?;
            let shape = &mut self.shapes[idx];
            shape
                .build(kernel, &dims)
                .map_err(|e| AssemblyError::BuildFailed {
                    shape: shape.name().to_string(),
                    source: e,
                })?;
            info!(
                shape = %shape.name(),
                kind = shape.kind().variant_name(),
                "built solid"
            );
        }
        Ok(())
    }

    /// Build a single shape by name, resolving its measured dimensions
    /// against the assembly as it stands. Building a dependent before
    /// its source yields [`AssemblyError::DependencyNotReady`].
    pub fn build_shape(
        &mut self,
        name: &str,
        kernel: &mut dyn CadKernel,
    ) -> Result<(), AssemblyError> {
        let idx = self
            .shapes
            .iter()
            .position(|s| s.name() == name)
            .ok_or_else(|| AssemblyError::ShapeNotFound {
                name: name.to_string(),
            })?;
        if self.shapes[idx].is_built() {
            return Ok(());
        }
        let dims = resolve::resolve_dims(&self.shapes[idx], &self.shapes, kernel.as_inspect())?;
        let shape = &mut self.shapes[idx];
        shape
            .build(kernel, &dims)
            .map_err(|e| AssemblyError::BuildFailed {
                shape: shape.name().to_string(),
                source: e,
            })?;
        info!(
            shape = %shape.name(),
            kind = shape.kind().variant_name(),
            "built solid"
        );
        Ok(())
    }
}
