pub mod blanket;
pub mod divertor;
pub mod kernel_ext;
pub mod pf_coil;
pub mod plasma;
pub mod shield;
pub mod tf_coils;
pub mod types;

pub use blanket::BlanketConfig;
pub use divertor::DivertorConfig;
pub use kernel_ext::CadKernel;
pub use pf_coil::{PoloidalFieldCoilCaseConfig, PoloidalFieldCoilConfig};
pub use plasma::PlasmaConfig;
pub use shield::CenterColumnShieldConfig;
pub use tf_coils::InboardTfCoilsConfig;
pub use types::*;
