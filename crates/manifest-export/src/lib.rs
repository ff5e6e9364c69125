pub mod errors;
pub mod manifest;
pub mod metadata;
pub mod save;
pub mod step_export;

pub use errors::{ExportError, ManifestError};
pub use manifest::{step_file_name, ManifestEntry, ReactorManifest, FORMAT_VERSION};
pub use metadata::ReactorMetadata;
pub use save::{render_manifest, write_manifest};
pub use step_export::{export_step, ExportOptions};
