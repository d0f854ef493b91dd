//! Profile data model — the record built up over one wizard pass.

mod model;
mod platform;

pub use model::{BasicInfo, Documents, FileRef, Interests, ProfileRecord, ValidationStatus};
pub use platform::{EsportsPlatform, EsportsProfile, SocialAccount, SocialPlatform};
