//! Platform identifiers and the per-platform account entries.
//!
//! Both collections on the record are keyed by these enums, so "at most one
//! entry per platform" is enforced by the type of the map rather than by a
//! linear scan.

use serde::{Deserialize, Serialize};

/// Social networks a fan can connect.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SocialPlatform {
    Twitter,
    Instagram,
    Facebook,
}

impl std::fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Twitter => "twitter",
            Self::Instagram => "instagram",
            Self::Facebook => "facebook",
        };
        write!(f, "{s}")
    }
}

/// Gaming platforms an esports profile can live on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum EsportsPlatform {
    Steam,
    Battlenet,
    LeagueOfLegends,
    Valorant,
    Faceit,
}

impl std::fmt::Display for EsportsPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Steam => "steam",
            Self::Battlenet => "battlenet",
            Self::LeagueOfLegends => "leagueoflegends",
            Self::Valorant => "valorant",
            Self::Faceit => "faceit",
        };
        write!(f, "{s}")
    }
}

/// A connected social media account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialAccount {
    pub platform: SocialPlatform,
    pub username: String,
    pub connected: bool,
    /// Externally supplied 0–100 esports-relevance score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relevance_score: Option<u8>,
    /// Number of esports interactions seen on the account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interaction_count: Option<u32>,
}

/// A validated esports platform profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EsportsProfile {
    pub platform: EsportsPlatform,
    pub profile_url: String,
    pub validated: bool,
    /// Externally supplied 0–100 esports-relevance score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relevance_score: Option<u8>,
}
