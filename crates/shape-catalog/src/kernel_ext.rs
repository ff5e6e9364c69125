use kernel_bridge::{SolidInspect, SolidKernel};

/// Combined trait for build paths that need mutable construction access
/// and read-only inspection on the same kernel object.
///
/// This avoids the borrow-checker issue of needing &mut and & on the same value.
pub trait CadKernel: SolidKernel + SolidInspect {
    fn as_inspect(&self) -> &dyn SolidInspect;
}

// Blanket implementation for any type that implements both traits
impl<T: SolidKernel + SolidInspect> CadKernel for T {
    fn as_inspect(&self) -> &dyn SolidInspect {
        self
    }
}
