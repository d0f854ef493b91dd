//! Per-step validation — pure functions from record slices to field errors.
//!
//! An empty [`FieldErrors`] map means the step may advance. The validators
//! never mutate state and are idempotent, so the caller can re-run them on
//! every submit.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::profile::{BasicInfo, Documents, ProfileRecord, ValidationStatus};

use super::step::WizardStep;

/// Field name → human-readable message, ordered by field for stable display.
pub type FieldErrors = BTreeMap<&'static str, String>;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").unwrap());

static NATIONAL_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{3}\.\d{3}\.\d{3}-\d{2}$").unwrap());

/// Validate the basic-info step. Name, email, national id, and address are
/// required; city, state, and postal code are free-form.
pub fn validate_basic_info(info: &BasicInfo) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if info.name.trim().is_empty() {
        errors.insert("name", "Name is required".to_string());
    }

    if info.email.trim().is_empty() {
        errors.insert("email", "Email is required".to_string());
    } else if !EMAIL_RE.is_match(info.email.trim()) {
        errors.insert("email", "Email is invalid".to_string());
    }

    if info.national_id.trim().is_empty() {
        errors.insert("national_id", "National id is required".to_string());
    } else if !NATIONAL_ID_RE.is_match(info.national_id.trim()) {
        errors.insert(
            "national_id",
            "National id must use the format 123.456.789-00".to_string(),
        );
    }

    if info.address.trim().is_empty() {
        errors.insert("address", "Address is required".to_string());
    }

    errors
}

/// Validate the documents step: advancing requires an approved verification.
pub fn validate_documents(documents: &Documents) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if documents.validation_status != ValidationStatus::Approved {
        errors.insert(
            "documents",
            "Validate your documents before continuing".to_string(),
        );
    }
    errors
}

/// Validate the given step against the record. Interests, social, and
/// esports steps only stage data and never block.
pub fn validate_step(step: WizardStep, record: &ProfileRecord) -> FieldErrors {
    match step {
        WizardStep::BasicInfo => validate_basic_info(&record.basic_info),
        WizardStep::Documents => validate_documents(&record.documents),
        WizardStep::Interests
        | WizardStep::SocialAccounts
        | WizardStep::EsportsProfiles
        | WizardStep::Summary => FieldErrors::new(),
    }
}
