//! Wizard state machine — step cursor, navigation, and per-step validation.

mod controller;
mod step;
mod validate;

pub use controller::{ResetConfirm, WizardController};
pub use step::{TOTAL_STEPS, WizardStep};
pub use validate::{FieldErrors, validate_basic_info, validate_documents, validate_step};
