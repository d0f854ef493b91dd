//! Scoring engine — completeness and fan score.
//!
//! Both metrics are pure reads of a record snapshot and are recomputed on
//! every call; the record can change between reads within a session, so
//! nothing here is cached.

use serde::{Deserialize, Serialize};

use crate::profile::{ProfileRecord, ValidationStatus};

/// Profile completeness, 0–100 in steps of 20.
///
/// Five equally weighted checks: the required basic-info fields, at least one
/// favorite game or team, approved documents, a connected social account, and
/// an esports profile.
pub fn completeness(record: &ProfileRecord) -> u8 {
    let info = &record.basic_info;
    let checks = [
        !info.name.is_empty()
            && !info.email.is_empty()
            && !info.national_id.is_empty()
            && !info.address.is_empty(),
        !record.interests.favorite_games().is_empty()
            || !record.interests.favorite_teams().is_empty(),
        record.documents.validation_status == ValidationStatus::Approved,
        record.social_account_count() > 0,
        record.esports_profile_count() > 0,
    ];

    let satisfied = checks.iter().filter(|check| **check).count();
    ((satisfied as f64 / checks.len() as f64) * 100.0).round() as u8
}

/// Fan engagement score, 0–100.
///
/// Sum of independently capped contributions: games (5 pts each, cap 25),
/// teams (5 pts each, cap 20), events (10 pts each, cap 20), merchandise
/// (flat 15), and the two relevance pools (score/20 per entry, cap 10 each).
/// Caps apply per contribution before summation; the final sum is rounded
/// half-up and clamped to 100.
pub fn fan_score(record: &ProfileRecord) -> u8 {
    let interests = &record.interests;
    let mut score = 0.0_f64;

    score += (interests.favorite_games().len() * 5).min(25) as f64;
    score += (interests.favorite_teams().len() * 5).min(20) as f64;
    score += (interests.attended_events().len() * 10).min(20) as f64;

    if interests.purchased_merchandise {
        score += 15.0;
    }

    let social: f64 = record
        .social_accounts()
        .map(|account| f64::from(account.relevance_score.unwrap_or(0)) / 20.0)
        .sum();
    score += social.min(10.0);

    let esports: f64 = record
        .esports_profiles()
        .map(|profile| f64::from(profile.relevance_score.unwrap_or(0)) / 20.0)
        .sum();
    score += esports.min(10.0);

    (score.round() as u64).min(100) as u8
}

/// Fan score bands used for display copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FanTier {
    Newcomer,
    Enthusiast,
    Dedicated,
    Hardcore,
}

impl FanTier {
    /// Classify a fan score into its band.
    pub fn for_score(score: u8) -> Self {
        match score {
            0..=39 => Self::Newcomer,
            40..=69 => Self::Enthusiast,
            70..=89 => Self::Dedicated,
            _ => Self::Hardcore,
        }
    }
}

impl std::fmt::Display for FanTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Newcomer => "newcomer",
            Self::Enthusiast => "enthusiast",
            Self::Dedicated => "dedicated",
            Self::Hardcore => "hardcore",
        };
        write!(f, "{s}")
    }
}

/// Point-in-time metrics for a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProfileSummary {
    pub completeness: u8,
    pub fan_score: u8,
    pub tier: FanTier,
}

impl ProfileSummary {
    pub fn for_record(record: &ProfileRecord) -> Self {
        let fan_score = fan_score(record);
        Self {
            completeness: completeness(record),
            fan_score,
            tier: FanTier::for_score(fan_score),
        }
    }
}
