use async_trait::async_trait;
use chrono::{Datelike, Utc};

use crate::candidate::domain::{CandidateProfile, CandidateRecord};

//
// ──────────────────────────────────────────────────────────
// Submit Candidate Command
// ──────────────────────────────────────────────────────────
//

pub const EARLIEST_GRADUATION_YEAR: i32 = 1900;
/// How far past the current year an expected graduation may lie.
pub const GRADUATION_YEAR_LOOKAHEAD: i32 = 10;

#[derive(Debug, Clone)]
pub struct SubmitCandidateCommand {
    profile: CandidateProfile,
    original_filename: String,
    resume_bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitCandidateCommandError {
    #[error("Full name cannot be empty")]
    EmptyFullName,

    #[error("Years of experience must be a non-negative number")]
    InvalidExperience,

    #[error("Graduation year {0} is not plausible")]
    ImplausibleGraduationYear(i32),
}

impl SubmitCandidateCommand {
    pub fn new(
        mut profile: CandidateProfile,
        original_filename: String,
        resume_bytes: Vec<u8>,
    ) -> Result<Self, SubmitCandidateCommandError> {
        let full_name = profile.full_name.trim();
        if full_name.is_empty() {
            return Err(SubmitCandidateCommandError::EmptyFullName);
        }
        profile.full_name = full_name.to_string();

        let experience = profile.years_of_experience;
        if !experience.is_finite() || experience < 0.0 {
            return Err(SubmitCandidateCommandError::InvalidExperience);
        }

        let latest_year = Utc::now().year() + GRADUATION_YEAR_LOOKAHEAD;
        if !(EARLIEST_GRADUATION_YEAR..=latest_year).contains(&profile.graduation_year) {
            return Err(SubmitCandidateCommandError::ImplausibleGraduationYear(
                profile.graduation_year,
            ));
        }

        profile.skill_set = profile
            .skill_set
            .into_iter()
            .map(|skill| skill.trim().to_string())
            .filter(|skill| !skill.is_empty())
            .collect();

        Ok(Self {
            profile,
            original_filename,
            resume_bytes,
        })
    }

    pub fn profile(&self) -> &CandidateProfile {
        &self.profile
    }

    pub fn original_filename(&self) -> &str {
        &self.original_filename
    }

    pub fn resume_bytes(&self) -> &[u8] {
        &self.resume_bytes
    }

    pub fn into_profile(self) -> CandidateProfile {
        self.profile
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitCandidateError {
    #[error("Invalid candidate: {0}")]
    InvalidCandidate(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait SubmitCandidateUseCase: Send + Sync {
    async fn execute(
        &self,
        command: SubmitCandidateCommand,
    ) -> Result<CandidateRecord, SubmitCandidateError>;
}
