//! Error types for the fan profile core.
//!
//! Field-level validation failures are not errors — they are returned as
//! [`FieldErrors`](crate::wizard::FieldErrors) data so the caller can render
//! the failing fields. The enums here cover the upload gate and the
//! verification boundary, both of which reject before touching the record.

use crate::upload::DocumentSlot;

/// Top-level error type for the onboarding core.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Upload error: {0}")]
    Upload(#[from] UploadError),

    #[error("Verification error: {0}")]
    Verify(#[from] VerifyError),
}

/// Upload gate rejections. The candidate file is never attached to the
/// record when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("{slot}: unsupported file type {mime_type}, expected a JPG or PNG image")]
    UnsupportedMime { slot: DocumentSlot, mime_type: String },

    #[error("{slot}: file is {size_bytes} bytes, the limit is {limit} bytes")]
    TooLarge {
        slot: DocumentSlot,
        size_bytes: u64,
        limit: u64,
    },
}

impl UploadError {
    /// The document slot the rejection applies to, for per-field rendering.
    pub fn slot(&self) -> DocumentSlot {
        match self {
            Self::UnsupportedMime { slot, .. } => *slot,
            Self::TooLarge { slot, .. } => *slot,
        }
    }
}

/// Verification boundary errors.
///
/// The first three are synchronous precondition failures: no call to the
/// verification service is issued when one of these is returned. A rejected
/// verification verdict is *not* an error — it lands on the record as a
/// `Rejected` status with an explanatory message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerifyError {
    #[error("Both the id document and the selfie are required for verification")]
    MissingDocuments,

    #[error("Username must not be empty")]
    EmptyUsername,

    #[error("Profile URL must start with http")]
    InvalidProfileUrl,

    #[error("Verification service failure: {0}")]
    ServiceFailure(String),
}

/// Result type alias for the onboarding core.
pub type Result<T> = std::result::Result<T, Error>;
