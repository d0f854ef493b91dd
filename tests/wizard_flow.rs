//! End-to-end tests for the onboarding session.
//!
//! Each test drives a real `OnboardingSession` against a scripted verifier,
//! exercising the step gating, the verification contract, and the scores the
//! summary step reports.

use std::sync::Arc;

use async_trait::async_trait;

use fan_profile::config::SessionConfig;
use fan_profile::error::VerifyError;
use fan_profile::profile::{
    EsportsPlatform, FileRef, SocialPlatform, ValidationStatus,
};
use fan_profile::scoring::FanTier;
use fan_profile::session::OnboardingSession;
use fan_profile::upload::DocumentSlot;
use fan_profile::verify::{
    DocumentVerdict, RelevanceReport, VerdictStatus, Verifier,
};
use fan_profile::wizard::{ResetConfirm, WizardStep};

/// Scripted verifier: zero latency, fixed relevance scores, configurable
/// document verdict.
struct ScriptedVerifier {
    document_status: VerdictStatus,
    relevance_score: u8,
}

impl ScriptedVerifier {
    fn approving(relevance_score: u8) -> Self {
        Self {
            document_status: VerdictStatus::Approved,
            relevance_score,
        }
    }

    fn rejecting() -> Self {
        Self {
            document_status: VerdictStatus::Rejected,
            relevance_score: 0,
        }
    }
}

#[async_trait]
impl Verifier for ScriptedVerifier {
    async fn verify_documents(
        &self,
        _id_document: &FileRef,
        _selfie: &FileRef,
    ) -> Result<DocumentVerdict, VerifyError> {
        let message = match self.document_status {
            VerdictStatus::Approved => "Documents match the profile",
            VerdictStatus::Rejected => "Documents do not match the profile",
        };
        Ok(DocumentVerdict {
            status: self.document_status,
            message: message.to_string(),
        })
    }

    async fn verify_social(
        &self,
        _platform: SocialPlatform,
        _username: &str,
    ) -> Result<RelevanceReport, VerifyError> {
        Ok(RelevanceReport {
            relevance_score: self.relevance_score,
            interaction_count: Some(120),
        })
    }

    async fn verify_esports(
        &self,
        _platform: EsportsPlatform,
        _profile_url: &str,
    ) -> Result<RelevanceReport, VerifyError> {
        Ok(RelevanceReport {
            relevance_score: self.relevance_score,
            interaction_count: None,
        })
    }
}

/// Verifier whose transport always fails.
struct FailingVerifier;

#[async_trait]
impl Verifier for FailingVerifier {
    async fn verify_documents(
        &self,
        _id_document: &FileRef,
        _selfie: &FileRef,
    ) -> Result<DocumentVerdict, VerifyError> {
        Err(VerifyError::ServiceFailure("connection reset".to_string()))
    }

    async fn verify_social(
        &self,
        _platform: SocialPlatform,
        _username: &str,
    ) -> Result<RelevanceReport, VerifyError> {
        Err(VerifyError::ServiceFailure("connection reset".to_string()))
    }

    async fn verify_esports(
        &self,
        _platform: EsportsPlatform,
        _profile_url: &str,
    ) -> Result<RelevanceReport, VerifyError> {
        Err(VerifyError::ServiceFailure("connection reset".to_string()))
    }
}

fn session_with(verifier: impl Verifier + 'static) -> OnboardingSession {
    OnboardingSession::new(Arc::new(verifier), SessionConfig::default())
}

fn jpeg(name: &str, size_bytes: u64) -> FileRef {
    FileRef {
        display_name: name.to_string(),
        mime_type: "image/jpeg".to_string(),
        size_bytes,
    }
}

async fn fill_basic_info(session: &OnboardingSession) {
    session
        .edit_basic_info(|info| {
            info.name = "Ana".to_string();
            info.email = "ana@x.com".to_string();
            info.national_id = "123.456.789-00".to_string();
            info.address = "Rua 1".to_string();
        })
        .await;
}

async fn attach_both_documents(session: &OnboardingSession) {
    session
        .attach_document(DocumentSlot::IdDocument, jpeg("id.jpg", 1024))
        .await
        .unwrap();
    session
        .attach_document(DocumentSlot::Selfie, jpeg("selfie.jpg", 2048))
        .await
        .unwrap();
}

#[tokio::test]
async fn full_wizard_pass_produces_expected_scores() {
    let session = session_with(ScriptedVerifier::approving(80));

    // Step 1: blocked until the basic info is filled
    let errors = session.try_advance().await.unwrap_err();
    assert!(errors.contains_key("name"));
    assert_eq!(session.current_step().await, WizardStep::BasicInfo);

    fill_basic_info(&session).await;
    assert_eq!(session.try_advance().await.unwrap(), WizardStep::Interests);

    // Step 2: stage interests, never blocks
    session
        .edit_interests(|interests| {
            interests.add_favorite_game("CS2");
            interests.add_favorite_game("Valorant");
            interests.add_favorite_team("FURIA");
        })
        .await;
    assert_eq!(session.try_advance().await.unwrap(), WizardStep::Documents);

    // Step 3: cannot advance without an approved verification
    let errors = session.try_advance().await.unwrap_err();
    assert!(errors.contains_key("documents"));

    attach_both_documents(&session).await;
    let verdict = session.request_document_verification().await.unwrap();
    assert_eq!(verdict.status, VerdictStatus::Approved);
    assert_eq!(
        session.try_advance().await.unwrap(),
        WizardStep::SocialAccounts
    );

    // Step 4: connect one account
    let account = session
        .connect_social(SocialPlatform::Twitter, "ana_gg")
        .await
        .unwrap();
    assert!(account.connected);
    assert_eq!(account.relevance_score, Some(80));
    assert_eq!(
        session.try_advance().await.unwrap(),
        WizardStep::EsportsProfiles
    );

    // Step 5: skip esports profiles entirely
    assert_eq!(session.try_advance().await.unwrap(), WizardStep::Summary);
    assert!(session.completed_at().await.is_some());

    // Summary: 4 of 5 checks → 80; fan 10 + 5 + 0 + 0 + 4 + 0 = 19
    let summary = session.summary().await;
    assert_eq!(summary.completeness, 80);
    assert_eq!(summary.fan_score, 19);
    assert_eq!(summary.tier, FanTier::Newcomer);
}

#[tokio::test]
async fn advance_is_a_no_op_at_the_summary_step() {
    let session = session_with(ScriptedVerifier::approving(80));
    fill_basic_info(&session).await;
    attach_both_documents(&session).await;
    session.request_document_verification().await.unwrap();

    for _ in 0..10 {
        let _ = session.try_advance().await;
    }
    assert_eq!(session.current_step().await, WizardStep::Summary);

    // Still at summary after further attempts
    assert_eq!(session.try_advance().await.unwrap(), WizardStep::Summary);
}

#[tokio::test]
async fn retreat_is_a_no_op_at_the_first_step() {
    let session = session_with(ScriptedVerifier::approving(80));
    assert_eq!(session.retreat().await, WizardStep::BasicInfo);

    fill_basic_info(&session).await;
    session.try_advance().await.unwrap();
    assert_eq!(session.retreat().await, WizardStep::BasicInfo);
    assert_eq!(session.retreat().await, WizardStep::BasicInfo);
}

#[tokio::test]
async fn verification_requires_both_documents() {
    let session = session_with(ScriptedVerifier::approving(80));

    let err = session.request_document_verification().await.unwrap_err();
    assert_eq!(err, VerifyError::MissingDocuments);

    session
        .attach_document(DocumentSlot::IdDocument, jpeg("id.jpg", 1024))
        .await
        .unwrap();
    let err = session.request_document_verification().await.unwrap_err();
    assert_eq!(err, VerifyError::MissingDocuments);

    // No call was issued: the status never left Pending
    let record = session.snapshot().await;
    assert_eq!(record.documents.validation_status, ValidationStatus::Pending);
}

#[tokio::test]
async fn rejected_documents_block_the_step_and_can_be_retried() {
    let session = session_with(ScriptedVerifier::rejecting());
    fill_basic_info(&session).await;
    session.try_advance().await.unwrap();
    session.try_advance().await.unwrap();

    attach_both_documents(&session).await;
    let verdict = session.request_document_verification().await.unwrap();
    assert_eq!(verdict.status, VerdictStatus::Rejected);

    let record = session.snapshot().await;
    assert_eq!(record.documents.validation_status, ValidationStatus::Rejected);
    assert_eq!(
        record.documents.validation_message.as_deref(),
        Some("Documents do not match the profile")
    );

    let errors = session.try_advance().await.unwrap_err();
    assert!(errors.contains_key("documents"));
    assert_eq!(session.current_step().await, WizardStep::Documents);

    // A retry is allowed after rejection
    let verdict = session.request_document_verification().await.unwrap();
    assert_eq!(verdict.status, VerdictStatus::Rejected);
}

#[tokio::test]
async fn approved_verdict_is_sticky_across_repeat_requests() {
    let session = session_with(ScriptedVerifier::approving(80));
    attach_both_documents(&session).await;

    let first = session.request_document_verification().await.unwrap();
    let second = session.request_document_verification().await.unwrap();
    assert_eq!(first.status, VerdictStatus::Approved);
    assert_eq!(second.status, VerdictStatus::Approved);
    assert_eq!(second.message, first.message);
}

#[tokio::test]
async fn service_failure_returns_the_status_to_pending() {
    let session = session_with(FailingVerifier);
    attach_both_documents(&session).await;

    let err = session.request_document_verification().await.unwrap_err();
    assert!(matches!(err, VerifyError::ServiceFailure(_)));

    let record = session.snapshot().await;
    assert_eq!(record.documents.validation_status, ValidationStatus::Pending);
    assert!(record.documents.validation_message.is_none());
}

#[tokio::test]
async fn upload_rejection_leaves_the_slot_empty() {
    let session = session_with(ScriptedVerifier::approving(80));

    let pdf = FileRef {
        display_name: "id.pdf".to_string(),
        mime_type: "application/pdf".to_string(),
        size_bytes: 1024,
    };
    let err = session
        .attach_document(DocumentSlot::IdDocument, pdf)
        .await
        .unwrap_err();
    assert_eq!(err.slot(), DocumentSlot::IdDocument);

    let record = session.snapshot().await;
    assert!(record.documents.id_document.is_none());
    assert_eq!(record.documents.validation_status, ValidationStatus::Pending);
}

#[tokio::test]
async fn upload_size_boundary() {
    let session = session_with(ScriptedVerifier::approving(80));

    session
        .attach_document(DocumentSlot::Selfie, jpeg("exact.jpg", 5_242_880))
        .await
        .unwrap();

    let err = session
        .attach_document(DocumentSlot::Selfie, jpeg("over.jpg", 5_242_881))
        .await
        .unwrap_err();
    assert_eq!(err.slot(), DocumentSlot::Selfie);

    // The rejected upload did not displace the accepted one
    let record = session.snapshot().await;
    assert_eq!(
        record.documents.selfie.as_ref().unwrap().display_name,
        "exact.jpg"
    );
}

#[tokio::test]
async fn reconnecting_a_platform_replaces_its_entry() {
    let session = session_with(ScriptedVerifier::approving(72));

    session
        .connect_social(SocialPlatform::Instagram, "first")
        .await
        .unwrap();
    session
        .connect_social(SocialPlatform::Instagram, "second")
        .await
        .unwrap();

    let record = session.snapshot().await;
    assert_eq!(record.social_account_count(), 1);
    let account = record.social_account(SocialPlatform::Instagram).unwrap();
    assert_eq!(account.username, "second");
}

#[tokio::test]
async fn social_preconditions_issue_no_call() {
    let session = session_with(FailingVerifier);

    // With a failing verifier, a precondition error proves no call was made
    let err = session
        .connect_social(SocialPlatform::Twitter, "   ")
        .await
        .unwrap_err();
    assert_eq!(err, VerifyError::EmptyUsername);

    let err = session
        .validate_esports(EsportsPlatform::Steam, "steamcommunity.com/id/ana")
        .await
        .unwrap_err();
    assert_eq!(err, VerifyError::InvalidProfileUrl);

    let err = session
        .validate_esports(EsportsPlatform::Steam, "")
        .await
        .unwrap_err();
    assert_eq!(err, VerifyError::InvalidProfileUrl);

    let record = session.snapshot().await;
    assert_eq!(record.social_account_count(), 0);
    assert_eq!(record.esports_profile_count(), 0);
}

#[tokio::test]
async fn disconnecting_an_account_updates_the_scores() {
    let session = session_with(ScriptedVerifier::approving(100));

    session
        .connect_social(SocialPlatform::Twitter, "ana_gg")
        .await
        .unwrap();
    assert_eq!(session.summary().await.fan_score, 5);
    assert_eq!(session.summary().await.completeness, 20);

    let removed = session.disconnect_social(SocialPlatform::Twitter).await;
    assert_eq!(removed.unwrap().username, "ana_gg");
    assert_eq!(session.summary().await.fan_score, 0);
    assert_eq!(session.summary().await.completeness, 0);
}

#[tokio::test]
async fn confirmed_reset_discards_everything() {
    let session = session_with(ScriptedVerifier::approving(80));
    fill_basic_info(&session).await;
    session.try_advance().await.unwrap();
    session
        .edit_interests(|interests| {
            interests.add_favorite_game("CS2");
        })
        .await;

    // A cancelled reset changes nothing
    assert!(!session.reset(ResetConfirm::Cancelled).await);
    assert_eq!(session.current_step().await, WizardStep::Interests);
    assert_eq!(session.snapshot().await.basic_info.name, "Ana");

    assert!(session.reset(ResetConfirm::Confirmed).await);
    assert_eq!(session.current_step().await, WizardStep::BasicInfo);
    let record = session.snapshot().await;
    assert!(record.basic_info.name.is_empty());
    assert!(record.interests.favorite_games().is_empty());
    assert_eq!(session.summary().await.completeness, 0);
    assert!(session.completed_at().await.is_none());
}

#[tokio::test(start_paused = true)]
async fn simulated_verifier_end_to_end_with_paused_clock() {
    use fan_profile::verify::SimulatedVerifier;

    let config = SessionConfig::default();
    let session =
        OnboardingSession::new(Arc::new(SimulatedVerifier::new(config.clone())), config);
    attach_both_documents(&session).await;

    let start = tokio::time::Instant::now();
    let verdict = session.request_document_verification().await.unwrap();
    assert_eq!(verdict.status, VerdictStatus::Approved);
    assert_eq!(start.elapsed(), std::time::Duration::from_millis(3000));

    let account = session
        .connect_social(SocialPlatform::Twitter, "ana_gg")
        .await
        .unwrap();
    let score = account.relevance_score.unwrap();
    assert!((60..=99).contains(&score));
}
