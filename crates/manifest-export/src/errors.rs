use kernel_bridge::KernelError;

/// Errors while assembling or writing the materials manifest.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("shape '{shape}' has not been built; the manifest covers only realized geometry")]
    NotBuilt { shape: String },

    #[error("manifest serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("manifest write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors during STEP geometry export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("shape '{shape}' has not been built; export needs a fully built assembly")]
    NotBuilt { shape: String },

    #[error(transparent)]
    Kernel(#[from] KernelError),

    #[error("export I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
