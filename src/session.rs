//! OnboardingSession — coordinates the record, the wizard cursor, and the
//! verification service for one wizard pass.
//!
//! The session is the single owner of the mutable [`ProfileRecord`]; every
//! write goes through it. Verification calls are awaited here and their
//! completions applied to the keyed slot they target, so a later completion
//! overwrites an earlier one and rapid repeated connects cannot duplicate
//! entries.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::SessionConfig;
use crate::error::{UploadError, VerifyError};
use crate::profile::{
    BasicInfo, EsportsPlatform, EsportsProfile, FileRef, Interests, ProfileRecord, SocialAccount,
    SocialPlatform, ValidationStatus,
};
use crate::scoring::ProfileSummary;
use crate::upload::{DocumentSlot, check_upload};
use crate::verify::{DocumentVerdict, VerdictStatus, Verifier};
use crate::wizard::{FieldErrors, ResetConfirm, WizardController, WizardStep, validate_step};

/// One in-memory onboarding pass. Dropped state is gone; nothing persists.
pub struct OnboardingSession {
    id: Uuid,
    started_at: DateTime<Utc>,
    config: SessionConfig,
    verifier: Arc<dyn Verifier>,
    record: RwLock<ProfileRecord>,
    wizard: RwLock<WizardController>,
    completed_at: RwLock<Option<DateTime<Utc>>>,
}

impl OnboardingSession {
    pub fn new(verifier: Arc<dyn Verifier>, config: SessionConfig) -> Self {
        let id = Uuid::new_v4();
        info!(session = %id, "onboarding session started");
        Self {
            id,
            started_at: Utc::now(),
            config,
            verifier,
            record: RwLock::new(ProfileRecord::new()),
            wizard: RwLock::new(WizardController::new()),
            completed_at: RwLock::new(None),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// When the wizard first reached the summary step, if it has.
    pub async fn completed_at(&self) -> Option<DateTime<Utc>> {
        *self.completed_at.read().await
    }

    // ── Navigation ──────────────────────────────────────────────────

    pub async fn current_step(&self) -> WizardStep {
        self.wizard.read().await.current_step()
    }

    /// Progress as `(step, data-entry total)` for display.
    pub async fn progress(&self) -> (u8, u8) {
        self.wizard.read().await.current_step().progress()
    }

    /// Validate the current step and advance on success. On failure the
    /// cursor stays put and the field errors are returned for rendering.
    pub async fn try_advance(&self) -> Result<WizardStep, FieldErrors> {
        let current = self.wizard.read().await.current_step();
        let errors = {
            let record = self.record.read().await;
            validate_step(current, &record)
        };
        if !errors.is_empty() {
            return Err(errors);
        }

        let step = self.wizard.write().await.advance();
        if step.is_summary() {
            let mut completed = self.completed_at.write().await;
            if completed.is_none() {
                *completed = Some(Utc::now());
                info!(session = %self.id, "wizard reached summary");
            }
        }
        Ok(step)
    }

    /// Step back one step, clamped at the first. Never validates.
    pub async fn retreat(&self) -> WizardStep {
        self.wizard.write().await.retreat()
    }

    /// Destructive reset: with `Confirmed`, discards the record and returns
    /// the cursor to the first step. With `Cancelled`, does nothing.
    pub async fn reset(&self, confirm: ResetConfirm) -> bool {
        if !self.wizard.write().await.reset(confirm) {
            return false;
        }
        *self.record.write().await = ProfileRecord::new();
        *self.completed_at.write().await = None;
        info!(session = %self.id, "session reset");
        true
    }

    // ── Record edits ────────────────────────────────────────────────

    /// Edit the basic-info slice under the record lock.
    pub async fn edit_basic_info<F>(&self, edit: F)
    where
        F: FnOnce(&mut BasicInfo),
    {
        let mut record = self.record.write().await;
        edit(&mut record.basic_info);
    }

    /// Edit the interests slice under the record lock.
    pub async fn edit_interests<F>(&self, edit: F)
    where
        F: FnOnce(&mut Interests),
    {
        let mut record = self.record.write().await;
        edit(&mut record.interests);
    }

    /// A point-in-time clone of the whole record.
    pub async fn snapshot(&self) -> ProfileRecord {
        self.record.read().await.clone()
    }

    /// Completeness, fan score, and tier for the current record. Recomputed
    /// on every call; the record can change between reads.
    pub async fn summary(&self) -> ProfileSummary {
        let record = self.record.read().await;
        ProfileSummary::for_record(&record)
    }

    // ── Documents ───────────────────────────────────────────────────

    /// Gate and attach an upload. On rejection the record is untouched and
    /// the error names the offending slot.
    pub async fn attach_document(
        &self,
        slot: DocumentSlot,
        file: FileRef,
    ) -> Result<(), UploadError> {
        check_upload(slot, &file, self.config.max_upload_bytes)?;
        let mut record = self.record.write().await;
        record.documents.attach(slot, file);
        Ok(())
    }

    /// Clear an upload slot, dropping any verification verdict with it.
    pub async fn clear_document(&self, slot: DocumentSlot) -> Option<FileRef> {
        self.record.write().await.documents.clear(slot)
    }

    /// Run document verification.
    ///
    /// Both files must be present or no call is issued. An approved verdict
    /// is sticky — repeated requests return it without a new call; a rejected
    /// one can be retried. On a service failure the status falls back to
    /// Pending so the user can try again.
    pub async fn request_document_verification(&self) -> Result<DocumentVerdict, VerifyError> {
        let (id_document, selfie) = {
            let mut record = self.record.write().await;
            let documents = &mut record.documents;

            let (id_document, selfie) = match (&documents.id_document, &documents.selfie) {
                (Some(id_document), Some(selfie)) => (id_document.clone(), selfie.clone()),
                _ => return Err(VerifyError::MissingDocuments),
            };

            if documents.validation_status == ValidationStatus::Approved {
                return Ok(DocumentVerdict {
                    status: VerdictStatus::Approved,
                    message: documents.validation_message.clone().unwrap_or_default(),
                });
            }
            // Pending and Rejected move to Processing; a call issued while
            // one is already in flight stays Processing and its completion
            // will simply overwrite the earlier one.
            documents.begin_processing();

            (id_document, selfie)
        };

        match self.verifier.verify_documents(&id_document, &selfie).await {
            Ok(verdict) => {
                let status = match verdict.status {
                    VerdictStatus::Approved => ValidationStatus::Approved,
                    VerdictStatus::Rejected => ValidationStatus::Rejected,
                };
                let mut record = self.record.write().await;
                record
                    .documents
                    .settle(status, Some(verdict.message.clone()));
                info!(session = %self.id, %status, "document verification settled");
                Ok(verdict)
            }
            Err(e) => {
                let mut record = self.record.write().await;
                if record.documents.validation_status == ValidationStatus::Processing {
                    record.documents.settle(ValidationStatus::Pending, None);
                }
                warn!(session = %self.id, error = %e, "document verification failed");
                Err(e)
            }
        }
    }

    // ── Social accounts ─────────────────────────────────────────────

    /// Connect a social account: verify it, then upsert by platform.
    /// Reconnecting a platform replaces its entry with the new completion.
    pub async fn connect_social(
        &self,
        platform: SocialPlatform,
        username: &str,
    ) -> Result<SocialAccount, VerifyError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(VerifyError::EmptyUsername);
        }

        let report = self.verifier.verify_social(platform, username).await?;
        let account = SocialAccount {
            platform,
            username: username.to_string(),
            connected: true,
            relevance_score: Some(report.relevance_score.min(100)),
            interaction_count: report.interaction_count,
        };

        let mut record = self.record.write().await;
        record.upsert_social(account.clone());
        info!(
            session = %self.id,
            %platform,
            relevance = report.relevance_score,
            "social account connected"
        );
        Ok(account)
    }

    /// Drop a connected social account.
    pub async fn disconnect_social(&self, platform: SocialPlatform) -> Option<SocialAccount> {
        self.record.write().await.disconnect_social(platform)
    }

    // ── Esports profiles ────────────────────────────────────────────

    /// Validate an esports profile URL and upsert it by platform. The URL
    /// must be non-empty and start with `http` or no call is issued.
    pub async fn validate_esports(
        &self,
        platform: EsportsPlatform,
        profile_url: &str,
    ) -> Result<EsportsProfile, VerifyError> {
        let profile_url = profile_url.trim();
        if profile_url.is_empty() || !profile_url.starts_with("http") {
            return Err(VerifyError::InvalidProfileUrl);
        }

        let report = self.verifier.verify_esports(platform, profile_url).await?;
        let profile = EsportsProfile {
            platform,
            profile_url: profile_url.to_string(),
            validated: true,
            relevance_score: Some(report.relevance_score.min(100)),
        };

        let mut record = self.record.write().await;
        record.upsert_esports(profile.clone());
        info!(
            session = %self.id,
            %platform,
            relevance = report.relevance_score,
            "esports profile validated"
        );
        Ok(profile)
    }
}

// Session behavior is exercised end to end in tests/wizard_flow.rs with a
// scripted verifier; the pieces it coordinates are unit-tested in their own
// modules.
