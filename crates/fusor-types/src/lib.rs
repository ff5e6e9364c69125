pub mod color;
pub mod measure;
pub mod profile;

pub use color::*;
pub use measure::*;
pub use profile::*;
