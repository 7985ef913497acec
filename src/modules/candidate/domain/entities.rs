use std::fmt;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CandidateId(Uuid);

impl CandidateId {
    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for CandidateId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<CandidateId> for Uuid {
    fn from(id: CandidateId) -> Self {
        id.0
    }
}

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Where the bytes of an uploaded resume live.
///
/// Handed out by the resume storage and only referenced by a record; the
/// storage is the only component that writes or deletes the file behind it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ResumeLocation(PathBuf);

impl ResumeLocation {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for ResumeLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Everything a candidate submits, minus the file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateProfile {
    pub full_name: String,
    pub dob: NaiveDate,
    pub contact_number: String,
    pub contact_address: String,
    pub education_qualification: String,
    pub graduation_year: i32,
    pub years_of_experience: f64,
    pub skill_set: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateRecord {
    pub id: CandidateId,
    pub full_name: String,
    pub dob: NaiveDate,
    pub contact_number: String,
    pub contact_address: String,
    pub education_qualification: String,
    pub graduation_year: i32,
    pub years_of_experience: f64,
    pub skill_set: Vec<String>,
    #[serde(rename = "resume_file_path")]
    pub resume_location: ResumeLocation,
}

impl CandidateRecord {
    pub fn new(id: CandidateId, profile: CandidateProfile, resume_location: ResumeLocation) -> Self {
        Self {
            id,
            full_name: profile.full_name,
            dob: profile.dob,
            contact_number: profile.contact_number,
            contact_address: profile.contact_address,
            education_qualification: profile.education_qualification,
            graduation_year: profile.graduation_year,
            years_of_experience: profile.years_of_experience,
            skill_set: profile.skill_set,
            resume_location,
        }
    }
}
