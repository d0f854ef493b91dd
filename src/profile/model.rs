//! The mutable profile aggregate built up over one wizard pass.
//!
//! The record is created with all-empty defaults at session start, mutated by
//! the step that owns each sub-object, and discarded on a confirmed reset. It
//! is never persisted.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::upload::DocumentSlot;

use super::platform::{EsportsPlatform, EsportsProfile, SocialAccount, SocialPlatform};

/// Personal details collected on the first step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicInfo {
    pub name: String,
    pub email: String,
    /// National id in the `123.456.789-00` format.
    pub national_id: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
}

/// Esports interests staged on the second step.
///
/// The three lists are insertion-ordered and duplicate-free; mutate them via
/// the `add_*`/`remove_*` methods.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interests {
    favorite_games: Vec<String>,
    favorite_teams: Vec<String>,
    attended_events: Vec<String>,
    pub purchased_merchandise: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_details: Option<String>,
}

impl Interests {
    pub fn favorite_games(&self) -> &[String] {
        &self.favorite_games
    }

    pub fn favorite_teams(&self) -> &[String] {
        &self.favorite_teams
    }

    pub fn attended_events(&self) -> &[String] {
        &self.attended_events
    }

    /// Add a favorite game. Returns false if the trimmed name is empty or
    /// already present.
    pub fn add_favorite_game(&mut self, name: &str) -> bool {
        Self::add_unique(&mut self.favorite_games, name)
    }

    pub fn remove_favorite_game(&mut self, name: &str) -> bool {
        Self::remove(&mut self.favorite_games, name)
    }

    pub fn add_favorite_team(&mut self, name: &str) -> bool {
        Self::add_unique(&mut self.favorite_teams, name)
    }

    pub fn remove_favorite_team(&mut self, name: &str) -> bool {
        Self::remove(&mut self.favorite_teams, name)
    }

    pub fn add_attended_event(&mut self, name: &str) -> bool {
        Self::add_unique(&mut self.attended_events, name)
    }

    pub fn remove_attended_event(&mut self, name: &str) -> bool {
        Self::remove(&mut self.attended_events, name)
    }

    fn add_unique(list: &mut Vec<String>, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || list.iter().any(|existing| existing == name) {
            return false;
        }
        list.push(name.to_string());
        true
    }

    fn remove(list: &mut Vec<String>, name: &str) -> bool {
        let before = list.len();
        list.retain(|existing| existing != name);
        list.len() != before
    }
}

/// Opaque reference to an uploaded binary blob. The bytes themselves never
/// enter the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRef {
    pub display_name: String,
    pub mime_type: String,
    pub size_bytes: u64,
}

/// Document verification lifecycle.
///
/// Progresses Pending → Processing → Approved/Rejected. A rejected verdict
/// can be retried (back to Processing); an approved one only resets to
/// Pending when the underlying file is replaced or cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationStatus {
    Pending,
    Processing,
    Approved,
    Rejected,
}

impl ValidationStatus {
    /// Check if a transition from `self` to `target` is valid.
    pub fn can_transition_to(&self, target: ValidationStatus) -> bool {
        use ValidationStatus::*;
        matches!(
            (self, target),
            (Pending, Processing)
                | (Processing, Approved)
                | (Processing, Rejected)
                | (Rejected, Processing)
        )
    }

    /// Whether the status is a final verdict.
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }
}

impl Default for ValidationStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl std::fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        };
        write!(f, "{s}")
    }
}

/// Identity documents and their verification state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Documents {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_document: Option<FileRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selfie: Option<FileRef>,
    #[serde(default)]
    pub validation_status: ValidationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_message: Option<String>,
}

impl Documents {
    pub fn slot(&self, slot: DocumentSlot) -> Option<&FileRef> {
        match slot {
            DocumentSlot::IdDocument => self.id_document.as_ref(),
            DocumentSlot::Selfie => self.selfie.as_ref(),
        }
    }

    /// Store an already-gated upload in its slot. Any earlier verdict is
    /// invalidated: the status drops back to Pending.
    pub fn attach(&mut self, slot: DocumentSlot, file: FileRef) {
        match slot {
            DocumentSlot::IdDocument => self.id_document = Some(file),
            DocumentSlot::Selfie => self.selfie = Some(file),
        }
        self.validation_status = ValidationStatus::Pending;
        self.validation_message = None;
    }

    /// Remove the file in `slot`, resetting the status to Pending. Returns
    /// the removed file, if any.
    pub fn clear(&mut self, slot: DocumentSlot) -> Option<FileRef> {
        let removed = match slot {
            DocumentSlot::IdDocument => self.id_document.take(),
            DocumentSlot::Selfie => self.selfie.take(),
        };
        if removed.is_some() {
            self.validation_status = ValidationStatus::Pending;
            self.validation_message = None;
        }
        removed
    }

    pub fn has_both_files(&self) -> bool {
        self.id_document.is_some() && self.selfie.is_some()
    }

    /// Move to Processing ahead of a verification call. Allowed from Pending
    /// and from a rejected verdict (a retry); returns false otherwise.
    pub fn begin_processing(&mut self) -> bool {
        if !self.validation_status.can_transition_to(ValidationStatus::Processing) {
            return false;
        }
        self.validation_status = ValidationStatus::Processing;
        true
    }

    /// Apply a verification completion. Completions always overwrite: when
    /// two verifications race, the last one to complete wins.
    pub fn settle(&mut self, status: ValidationStatus, message: Option<String>) {
        self.validation_status = status;
        self.validation_message = message;
    }
}

/// The aggregate holding everything collected during one wizard pass.
///
/// Social accounts and esports profiles are ordered maps keyed by platform:
/// the insert-or-replace rule is an invariant of the container, not a scan
/// convention.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub basic_info: BasicInfo,
    pub interests: Interests,
    pub documents: Documents,
    #[serde(default)]
    social_accounts: BTreeMap<SocialPlatform, SocialAccount>,
    #[serde(default)]
    esports_profiles: BTreeMap<EsportsPlatform, EsportsProfile>,
}

impl ProfileRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accounts in platform order.
    pub fn social_accounts(&self) -> impl Iterator<Item = &SocialAccount> {
        self.social_accounts.values()
    }

    pub fn social_account(&self, platform: SocialPlatform) -> Option<&SocialAccount> {
        self.social_accounts.get(&platform)
    }

    pub fn social_account_count(&self) -> usize {
        self.social_accounts.len()
    }

    /// Insert or replace the account for its platform. Relevance scores are
    /// clamped to 100 on the way in.
    pub fn upsert_social(&mut self, mut account: SocialAccount) {
        account.relevance_score = account.relevance_score.map(|s| s.min(100));
        self.social_accounts.insert(account.platform, account);
    }

    /// Drop the account for `platform`, if connected.
    pub fn disconnect_social(&mut self, platform: SocialPlatform) -> Option<SocialAccount> {
        self.social_accounts.remove(&platform)
    }

    /// Profiles in platform order.
    pub fn esports_profiles(&self) -> impl Iterator<Item = &EsportsProfile> {
        self.esports_profiles.values()
    }

    pub fn esports_profile(&self, platform: EsportsPlatform) -> Option<&EsportsProfile> {
        self.esports_profiles.get(&platform)
    }

    pub fn esports_profile_count(&self) -> usize {
        self.esports_profiles.len()
    }

    /// Insert or replace the profile for its platform. Relevance scores are
    /// clamped to 100 on the way in.
    pub fn upsert_esports(&mut self, mut profile: EsportsProfile) {
        profile.relevance_score = profile.relevance_score.map(|s| s.min(100));
        self.esports_profiles.insert(profile.platform, profile);
    }
}
