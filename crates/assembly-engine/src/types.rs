use std::fmt;

use shape_catalog::ShapeError;

/// Errors raised by assembly operations. Every variant names the shape
/// (or shapes) involved so callers can report the offender directly.
///
/// `Display` and `Error` are implemented by hand: several variants carry
/// a `source` field that is a shape *name* (a `String`), which the
/// thiserror derive would otherwise insist on treating as an error
/// source.
#[derive(Debug)]
pub enum AssemblyError {
    DuplicateName { name: String },

    UnknownShape {
        source: String,
        referenced_by: String,
    },

    DependencyNotReady { source: String, needed_by: String },

    CyclicDependency { shapes: Vec<String> },

    ShapeNotFound { name: String },

    BuildFailed { shape: String, source: ShapeError },
}

impl fmt::Display for AssemblyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssemblyError::DuplicateName { name } => {
                write!(f, "a shape named '{name}' is already in the assembly")
            }
            AssemblyError::UnknownShape {
                source,
                referenced_by,
            } => {
                write!(
                    f,
                    "shape '{referenced_by}' measures unknown shape '{source}'"
                )
            }
            AssemblyError::DependencyNotReady { source, needed_by } => {
                write!(
                    f,
                    "shape '{needed_by}' measures '{source}', which has not been built yet"
                )
            }
            AssemblyError::CyclicDependency { shapes } => {
                write!(f, "dependency cycle between shapes {shapes:?}")
            }
            AssemblyError::ShapeNotFound { name } => {
                write!(f, "no shape named '{name}' in the assembly")
            }
            AssemblyError::BuildFailed { shape, source } => {
                write!(f, "building shape '{shape}' failed: {source}")
            }
        }
    }
}

impl std::error::Error for AssemblyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AssemblyError::BuildFailed { source, .. } => Some(source),
            _ => None,
        }
    }
}
