//! Fan Profile — esports fan onboarding core.
//!
//! A sequential wizard collects personal details, interests, identity
//! documents, and social/esports accounts into a single in-memory
//! [`profile::ProfileRecord`], then the scoring engine derives two metrics:
//! profile completeness and a 0–100 fan score.

pub mod config;
pub mod error;
pub mod profile;
pub mod scoring;
pub mod session;
pub mod upload;
pub mod verify;
pub mod wizard;
