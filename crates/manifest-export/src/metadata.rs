use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifying metadata stamped on every exported manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactorMetadata {
    /// Human-readable reactor name.
    pub name: String,
    /// When the manifest was produced.
    pub created: DateTime<Utc>,
    /// Unique id of this build-and-export run.
    pub run_id: Uuid,
}

impl ReactorMetadata {
    /// Create metadata with the given name, the current timestamp, and
    /// a fresh run id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            created: Utc::now(),
            run_id: Uuid::new_v4(),
        }
    }
}
