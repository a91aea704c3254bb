use serde::{Deserialize, Serialize};

/// Policy for one audit run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditOptions {
    /// Platform identifier copied onto every release and mixed into its id.
    pub platform: String,

    /// The catalog lists every release that exists for the platform, so
    /// unrecognized files are reported as `Extra` rather than `Unknown`.
    pub exhaustive_catalog: bool,

    /// Try checksum matching before name matching. When off, the checksum
    /// provider is never consulted.
    pub use_checksums: bool,
}

impl Default for AuditOptions {
    fn default() -> Self {
        Self {
            platform: String::new(),
            exhaustive_catalog: false,
            use_checksums: true,
        }
    }
}

impl AuditOptions {
    pub fn new(platform: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            ..Self::default()
        }
    }

    pub fn exhaustive_catalog(mut self, exhaustive: bool) -> Self {
        self.exhaustive_catalog = exhaustive;
        self
    }

    pub fn use_checksums(mut self, use_checksums: bool) -> Self {
        self.use_checksums = use_checksums;
        self
    }
}
