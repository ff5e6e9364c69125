use std::collections::HashMap;

use shape_catalog::Shape;

use crate::types::AssemblyError;

/// Stable topological build order over the declared measurement
/// dependencies.
///
/// Kahn's algorithm with an insertion-order tie-break: among shapes
/// whose dependencies are all placed, the earliest-inserted goes first.
/// An assembly inserted in an already-buildable order is therefore
/// scheduled exactly in insertion order. Unknown dependency names and
/// cycles are rejected before any shape is built.
pub fn build_order(shapes: &[Shape]) -> Result<Vec<usize>, AssemblyError> {
    let index_by_name: HashMap<&str, usize> = shapes
        .iter()
        .enumerate()
        .map(|(i, s)| (s.name(), i))
        .collect();

    let mut indegree = vec![0usize; shapes.len()];
    let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); shapes.len()];
    for (i, shape) in shapes.iter().enumerate() {
        for dep in shape.dependencies() {
            let Some(&j) = index_by_name.get(dep) else {
                return Err(AssemblyError::UnknownShape {
                    source: dep.to_string(),
                    referenced_by: shape.name().to_string(),
                });
            };
            indegree[i] += 1;
            dependents[j].push(i);
        }
    }

    let mut placed = vec![false; shapes.len()];
    let mut order = Vec::with_capacity(shapes.len());
    while order.len() < shapes.len() {
        // Assemblies are small; a linear scan keeps the tie-break simple.
        match (0..shapes.len()).find(|&i| !placed[i] && indegree[i] == 0) {
            Some(i) => {
                placed[i] = true;
                order.push(i);
                for &dependent in &dependents[i] {
                    indegree[dependent] -= 1;
                }
            }
            None => {
                let cycle: Vec<String> = shapes
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| !placed[*i])
                    .map(|(_, s)| s.name().to_string())
                    .collect();
                return Err(AssemblyError::CyclicDependency { shapes: cycle });
            }
        }
    }
    Ok(order)
}
