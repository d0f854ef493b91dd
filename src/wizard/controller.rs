//! Wizard navigation — a clamped cursor over the step sequence.
//!
//! The controller deliberately does not validate: gating advances on the
//! current step's validator is the session's job. Transitions here are total
//! and synchronous; they clamp at the ends instead of failing.

use tracing::debug;

use super::step::{TOTAL_STEPS, WizardStep};

/// Explicit confirmation for the destructive reset. Reset has no undo, so
/// the caller must pass `Confirmed` deliberately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetConfirm {
    Confirmed,
    Cancelled,
}

/// Holds the current-step cursor for one wizard pass.
#[derive(Debug, Clone, Default)]
pub struct WizardController {
    current: WizardStep,
}

impl WizardController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_step(&self) -> WizardStep {
        self.current
    }

    /// 1-based position of the cursor.
    pub fn step_number(&self) -> u8 {
        self.current.number()
    }

    pub const fn total_steps(&self) -> u8 {
        TOTAL_STEPS
    }

    /// Move forward one step, clamped at the summary. A no-op at the end.
    pub fn advance(&mut self) -> WizardStep {
        if let Some(next) = self.current.next() {
            debug!(from = %self.current, to = %next, "wizard advance");
            self.current = next;
        }
        self.current
    }

    /// Move back one step, clamped at the first step. A no-op at the start.
    pub fn retreat(&mut self) -> WizardStep {
        if let Some(previous) = self.current.previous() {
            debug!(from = %self.current, to = %previous, "wizard retreat");
            self.current = previous;
        }
        self.current
    }

    /// Return the cursor to the first step if the caller confirmed. The owner
    /// of the record is responsible for clearing it alongside.
    pub fn reset(&mut self, confirm: ResetConfirm) -> bool {
        match confirm {
            ResetConfirm::Confirmed => {
                debug!(from = %self.current, "wizard reset");
                self.current = WizardStep::default();
                true
            }
            ResetConfirm::Cancelled => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_clamps_at_summary() {
        let mut wizard = WizardController::new();
        for _ in 0..TOTAL_STEPS + 3 {
            wizard.advance();
        }
        assert_eq!(wizard.current_step(), WizardStep::Summary);
        assert_eq!(wizard.advance(), WizardStep::Summary);
        assert_eq!(wizard.step_number(), TOTAL_STEPS);
    }

    #[test]
    fn retreat_clamps_at_first_step() {
        let mut wizard = WizardController::new();
        assert_eq!(wizard.retreat(), WizardStep::BasicInfo);
        wizard.advance();
        wizard.advance();
        wizard.retreat();
        assert_eq!(wizard.current_step(), WizardStep::Interests);
    }

    #[test]
    fn reset_requires_confirmation() {
        let mut wizard = WizardController::new();
        wizard.advance();
        wizard.advance();

        assert!(!wizard.reset(ResetConfirm::Cancelled));
        assert_eq!(wizard.current_step(), WizardStep::Documents);

        assert!(wizard.reset(ResetConfirm::Confirmed));
        assert_eq!(wizard.current_step(), WizardStep::BasicInfo);
    }
}
