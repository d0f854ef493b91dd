//! Simulated verification backend.
//!
//! Mimics the real service's timing and response shape: a fixed delay per
//! operation, an always-approving document check, and relevance scores drawn
//! uniformly from 60–99 (interaction counts from 50–549 for social accounts).

use async_trait::async_trait;
use rand::Rng;
use tracing::debug;

use crate::config::SessionConfig;
use crate::error::VerifyError;
use crate::profile::{EsportsPlatform, FileRef, SocialPlatform};

use super::{DocumentVerdict, RelevanceReport, VerdictStatus, Verifier};

/// Stand-in for the external verification service.
#[derive(Debug, Clone)]
pub struct SimulatedVerifier {
    config: SessionConfig,
}

impl SimulatedVerifier {
    pub fn new(config: SessionConfig) -> Self {
        Self { config }
    }

    fn relevance_score() -> u8 {
        rand::thread_rng().gen_range(60..=99)
    }

    fn interaction_count() -> u32 {
        rand::thread_rng().gen_range(50..=549)
    }
}

impl Default for SimulatedVerifier {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

#[async_trait]
impl Verifier for SimulatedVerifier {
    async fn verify_documents(
        &self,
        id_document: &FileRef,
        selfie: &FileRef,
    ) -> Result<DocumentVerdict, VerifyError> {
        debug!(
            id_document = %id_document.display_name,
            selfie = %selfie.display_name,
            "simulating document verification"
        );
        tokio::time::sleep(self.config.document_latency).await;
        Ok(DocumentVerdict {
            status: VerdictStatus::Approved,
            message: "Identity verified successfully. The documents match your profile information."
                .to_string(),
        })
    }

    async fn verify_social(
        &self,
        platform: SocialPlatform,
        username: &str,
    ) -> Result<RelevanceReport, VerifyError> {
        debug!(%platform, username, "simulating social account verification");
        tokio::time::sleep(self.config.social_latency).await;
        Ok(RelevanceReport {
            relevance_score: Self::relevance_score(),
            interaction_count: Some(Self::interaction_count()),
        })
    }

    async fn verify_esports(
        &self,
        platform: EsportsPlatform,
        profile_url: &str,
    ) -> Result<RelevanceReport, VerifyError> {
        debug!(%platform, profile_url, "simulating esports profile verification");
        tokio::time::sleep(self.config.esports_latency).await;
        Ok(RelevanceReport {
            relevance_score: Self::relevance_score(),
            interaction_count: None,
        })
    }
}
