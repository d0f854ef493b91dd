//! Configuration types.

use std::time::Duration;

use crate::upload::MAX_UPLOAD_BYTES;

/// Session configuration.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Upload size limit for document files, in bytes (boundary inclusive).
    pub max_upload_bytes: u64,
    /// Simulated latency for document verification.
    pub document_latency: Duration,
    /// Simulated latency for social account verification.
    pub social_latency: Duration,
    /// Simulated latency for esports profile verification.
    pub esports_latency: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_upload_bytes: MAX_UPLOAD_BYTES, // 5 MiB
            document_latency: Duration::from_millis(3000),
            social_latency: Duration::from_millis(2000),
            esports_latency: Duration::from_millis(2500),
        }
    }
}
