//! Verification service boundary.
//!
//! The core consumes verification — it never implements the document or
//! profile analysis itself. [`Verifier`] is the async contract; the
//! [`SimulatedVerifier`] stands in for the real service with fixed latencies
//! and randomized relevance scores.
//!
//! Completions are last-write-wins: a call cannot be cancelled once issued,
//! and a later completion for the same target simply overwrites the earlier
//! one on the record.

mod simulated;

pub use simulated::SimulatedVerifier;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::VerifyError;
use crate::profile::{EsportsPlatform, FileRef, SocialPlatform};

/// Outcome of a document verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictStatus {
    Approved,
    Rejected,
}

/// Completed document verification: a verdict plus an explanatory message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentVerdict {
    pub status: VerdictStatus,
    pub message: String,
}

/// Completed account/profile verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelevanceReport {
    /// Esports relevance, 0–100.
    pub relevance_score: u8,
    /// Esports interaction count; only reported for social accounts.
    pub interaction_count: Option<u32>,
}

/// External verification service contract.
///
/// All methods may take arbitrary, unordered time; `ServiceFailure` covers
/// transport-level problems in a real implementation.
#[async_trait]
pub trait Verifier: Send + Sync {
    /// Verify an identity document against a selfie.
    async fn verify_documents(
        &self,
        id_document: &FileRef,
        selfie: &FileRef,
    ) -> Result<DocumentVerdict, VerifyError>;

    /// Score a social account's esports relevance.
    async fn verify_social(
        &self,
        platform: SocialPlatform,
        username: &str,
    ) -> Result<RelevanceReport, VerifyError>;

    /// Score an esports platform profile's relevance.
    async fn verify_esports(
        &self,
        platform: EsportsPlatform,
        profile_url: &str,
    ) -> Result<RelevanceReport, VerifyError>;
}
