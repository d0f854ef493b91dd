//! Upload gate for identity documents.
//!
//! Candidate files are screened on declared MIME type and size before they
//! ever reach the record. The file content is opaque to the core; preview and
//! storage belong to the caller.

use serde::{Deserialize, Serialize};

use crate::error::UploadError;
use crate::profile::FileRef;

/// Default upload size limit: 5 MiB, boundary inclusive.
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

/// MIME types the document step accepts.
pub const ACCEPTED_MIME_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/jpg"];

/// The two document upload slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentSlot {
    IdDocument,
    Selfie,
}

impl DocumentSlot {
    /// Field name used to key upload errors, matching the form field.
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::IdDocument => "id_document",
            Self::Selfie => "selfie",
        }
    }
}

impl std::fmt::Display for DocumentSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.field_name())
    }
}

/// Screen a candidate upload against the MIME and size constraints.
///
/// On `Err` the caller must not attach the file; the record stays untouched.
pub fn check_upload(slot: DocumentSlot, file: &FileRef, limit: u64) -> Result<(), UploadError> {
    if !ACCEPTED_MIME_TYPES.contains(&file.mime_type.as_str()) {
        return Err(UploadError::UnsupportedMime {
            slot,
            mime_type: file.mime_type.clone(),
        });
    }
    if file.size_bytes > limit {
        return Err(UploadError::TooLarge {
            slot,
            size_bytes: file.size_bytes,
            limit,
        });
    }
    Ok(())
}
