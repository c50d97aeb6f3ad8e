//! Four-step onboarding wizard.
//!
//! Steps:
//! 1. Display name (required) and bio
//! 2. Location (required)
//! 3. Interests (at least one)
//! 4. Profile photo (optional)
//!
//! The wizard is a step counter with bounds checks plus the form data
//! collected so far. Nothing is persisted until `complete` hands back a
//! `ProfileUpdate`.

use crate::error::{Result, SessionError};
use serde::Serialize;

pub const TOTAL_STEPS: usize = 4;
pub const MAX_DISPLAY_NAME_CHARS: usize = 50;
pub const MAX_BIO_CHARS: usize = 200;

/// Profile fields produced by a completed onboarding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    pub display_name: String,
    pub bio: String,
    pub location: String,
    pub interests: Vec<String>,
    pub onboarding_completed: bool,
}

#[derive(Debug, Clone)]
pub struct OnboardingWizard {
    step: usize,
    display_name: String,
    bio: String,
    location: String,
    interests: Vec<String>,
}

impl Default for OnboardingWizard {
    fn default() -> Self {
        Self::new()
    }
}

fn truncate_chars(value: &str, max: usize) -> String {
    value.chars().take(max).collect()
}

impl OnboardingWizard {
    pub fn new() -> Self {
        Self {
            step: 1,
            display_name: String::new(),
            bio: String::new(),
            location: String::new(),
            interests: Vec::new(),
        }
    }

    /// Current step, 1-based
    pub fn step(&self) -> usize {
        self.step
    }

    pub fn is_last_step(&self) -> bool {
        self.step == TOTAL_STEPS
    }

    /// Completion percentage shown in the progress bar
    pub fn progress(&self) -> f32 {
        self.step as f32 / TOTAL_STEPS as f32 * 100.0
    }

    /// Set the display name, truncated to its character limit
    pub fn set_display_name(&mut self, name: &str) {
        self.display_name = truncate_chars(name, MAX_DISPLAY_NAME_CHARS);
    }

    /// Set the bio, truncated to its character limit
    pub fn set_bio(&mut self, bio: &str) {
        self.bio = truncate_chars(bio, MAX_BIO_CHARS);
    }

    pub fn set_location(&mut self, location: &str) {
        self.location = location.to_string();
    }

    /// Add the interest if absent, remove it if present
    pub fn toggle_interest(&mut self, interest: &str) {
        if let Some(position) = self.interests.iter().position(|i| i == interest) {
            self.interests.remove(position);
        } else {
            self.interests.push(interest.to_string());
        }
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn interests(&self) -> &[String] {
        &self.interests
    }

    fn step_complete(&self, step: usize) -> bool {
        match step {
            1 => !self.display_name.trim().is_empty(),
            2 => !self.location.trim().is_empty(),
            3 => !self.interests.is_empty(),
            4 => true,
            _ => false,
        }
    }

    /// Whether the current step has everything it needs
    pub fn can_proceed(&self) -> bool {
        self.step_complete(self.step)
    }

    /// Advance one step.
    ///
    /// Fails if the current step is incomplete; stays put on the last step.
    pub fn next(&mut self) -> Result<usize> {
        if !self.can_proceed() {
            return Err(SessionError::StepIncomplete { step: self.step });
        }
        if self.step < TOTAL_STEPS {
            self.step += 1;
        }
        Ok(self.step)
    }

    /// Go back one step; stays put on the first step
    pub fn back(&mut self) -> usize {
        if self.step > 1 {
            self.step -= 1;
        }
        self.step
    }

    /// Finish onboarding from the last step.
    ///
    /// Every required step is re-checked, not just the current one.
    pub fn complete(&self) -> Result<ProfileUpdate> {
        if !self.is_last_step() {
            return Err(SessionError::NotOnLastStep);
        }
        if let Some(step) = (1..=TOTAL_STEPS).find(|&step| !self.step_complete(step)) {
            return Err(SessionError::StepIncomplete { step });
        }

        tracing::info!("Onboarding completed for {}", self.display_name.trim());
        Ok(ProfileUpdate {
            display_name: self.display_name.trim().to_string(),
            bio: self.bio.trim().to_string(),
            location: self.location.trim().to_string(),
            interests: self.interests.clone(),
            onboarding_completed: true,
        })
    }
}
