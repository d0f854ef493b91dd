//! Wizard steps — five data-entry steps followed by the summary.

use serde::{Deserialize, Serialize};

/// Total number of steps, summary included.
pub const TOTAL_STEPS: u8 = 6;

/// The steps of the onboarding wizard, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    BasicInfo,
    Interests,
    Documents,
    SocialAccounts,
    EsportsProfiles,
    Summary,
}

impl WizardStep {
    /// 1-based step number, `1..=TOTAL_STEPS`.
    pub fn number(&self) -> u8 {
        match self {
            Self::BasicInfo => 1,
            Self::Interests => 2,
            Self::Documents => 3,
            Self::SocialAccounts => 4,
            Self::EsportsProfiles => 5,
            Self::Summary => 6,
        }
    }

    /// The next step in the linear progression, if any.
    pub fn next(&self) -> Option<WizardStep> {
        use WizardStep::*;
        match self {
            BasicInfo => Some(Interests),
            Interests => Some(Documents),
            Documents => Some(SocialAccounts),
            SocialAccounts => Some(EsportsProfiles),
            EsportsProfiles => Some(Summary),
            Summary => None,
        }
    }

    /// The previous step, if any.
    pub fn previous(&self) -> Option<WizardStep> {
        use WizardStep::*;
        match self {
            BasicInfo => None,
            Interests => Some(BasicInfo),
            Documents => Some(Interests),
            SocialAccounts => Some(Documents),
            EsportsProfiles => Some(SocialAccounts),
            Summary => Some(EsportsProfiles),
        }
    }

    /// Whether this is the terminal summary step.
    pub fn is_summary(&self) -> bool {
        matches!(self, Self::Summary)
    }

    /// Progress label shown while in data-entry steps: `step of 5`.
    pub fn progress(&self) -> (u8, u8) {
        (self.number(), TOTAL_STEPS - 1)
    }
}

impl Default for WizardStep {
    fn default() -> Self {
        Self::BasicInfo
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::BasicInfo => "basic_info",
            Self::Interests => "interests",
            Self::Documents => "documents",
            Self::SocialAccounts => "social_accounts",
            Self::EsportsProfiles => "esports_profiles",
            Self::Summary => "summary",
        };
        write!(f, "{s}")
    }
}
