use std::collections::HashMap;

use actix_multipart::{Field, Multipart};
use chrono::NaiveDate;
use futures::TryStreamExt;

use crate::candidate::application::ports::incoming::use_cases::{
    SubmitCandidateCommand, SubmitCandidateCommandError,
};
use crate::candidate::domain::policies::{ResumeUploadPolicy, UploadPolicyError};
use crate::candidate::domain::skills::parse_skill_set;
use crate::candidate::domain::CandidateProfile;

pub const RESUME_FIELD: &str = "resume_file";

const TEXT_FIELDS: [&str; 8] = [
    "full_name",
    "dob",
    "contact_number",
    "contact_address",
    "education_qualification",
    "graduation_year",
    "years_of_experience",
    "skill_set",
];

const MAX_TEXT_FIELD_BYTES: usize = 16 * 1024;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum CandidateFormError {
    #[error("Malformed multipart body: {0}")]
    Malformed(String),

    #[error("Missing required field '{0}'")]
    MissingField(&'static str),

    #[error("Invalid value for '{field}': {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("Field '{0}' is too long")]
    FieldTooLong(String),

    #[error("Resume file is required")]
    MissingResume,

    #[error(transparent)]
    Upload(#[from] UploadPolicyError),

    #[error(transparent)]
    Command(#[from] SubmitCandidateCommandError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct UploadedResume {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Raw submission as read off the wire. Text fields are still strings.
#[derive(Debug, Default)]
pub struct CandidateForm {
    fields: HashMap<&'static str, String>,
    resume: Option<UploadedResume>,
}

impl CandidateForm {
    /// Drains the multipart stream. The resume part is checked against the
    /// policy as it arrives, so an oversized upload is cut off at the limit.
    pub async fn read(
        mut payload: Multipart,
        policy: &ResumeUploadPolicy,
    ) -> Result<Self, CandidateFormError> {
        let mut form = Self::default();

        while let Some(field) = payload.try_next().await.map_err(malformed)? {
            let name = field.name().unwrap_or_default().to_string();

            if name == RESUME_FIELD {
                form.resume = Some(read_resume(field, policy).await?);
            } else if let Some(known) = TEXT_FIELDS.iter().copied().find(|f| *f == name) {
                let value = read_text(field, known).await?;
                form.fields.insert(known, value);
            } else {
                drain(field).await?;
            }
        }

        Ok(form)
    }

    fn required(&self, field: &'static str) -> Result<&str, CandidateFormError> {
        self.fields
            .get(field)
            .map(|value| value.trim())
            .ok_or(CandidateFormError::MissingField(field))
    }

    fn parsed<T>(&self, field: &'static str) -> Result<T, CandidateFormError>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        self.required(field)?
            .parse::<T>()
            .map_err(|e| CandidateFormError::InvalidField {
                field,
                reason: e.to_string(),
            })
    }

    pub fn into_command(self) -> Result<SubmitCandidateCommand, CandidateFormError> {
        let dob = NaiveDate::parse_from_str(self.required("dob")?, "%Y-%m-%d").map_err(|e| {
            CandidateFormError::InvalidField {
                field: "dob",
                reason: format!("{e}, expected YYYY-MM-DD"),
            }
        })?;

        let profile = CandidateProfile {
            full_name: self.required("full_name")?.to_string(),
            dob,
            contact_number: self.required("contact_number")?.to_string(),
            contact_address: self.required("contact_address")?.to_string(),
            education_qualification: self.required("education_qualification")?.to_string(),
            graduation_year: self.parsed("graduation_year")?,
            years_of_experience: self.parsed("years_of_experience")?,
            skill_set: parse_skill_set(self.required("skill_set")?),
        };

        let resume = self.resume.ok_or(CandidateFormError::MissingResume)?;

        Ok(SubmitCandidateCommand::new(
            profile,
            resume.file_name,
            resume.bytes,
        )?)
    }
}

fn malformed(err: actix_multipart::MultipartError) -> CandidateFormError {
    CandidateFormError::Malformed(err.to_string())
}

async fn read_text(mut field: Field, name: &str) -> Result<String, CandidateFormError> {
    let mut buf = Vec::new();
    while let Some(chunk) = field.try_next().await.map_err(malformed)? {
        if buf.len() + chunk.len() > MAX_TEXT_FIELD_BYTES {
            return Err(CandidateFormError::FieldTooLong(name.to_string()));
        }
        buf.extend_from_slice(&chunk);
    }

    String::from_utf8(buf)
        .map_err(|_| CandidateFormError::Malformed(format!("field '{name}' is not valid UTF-8")))
}

async fn read_resume(
    mut field: Field,
    policy: &ResumeUploadPolicy,
) -> Result<UploadedResume, CandidateFormError> {
    let file_name = field
        .content_disposition()
        .and_then(|cd| cd.get_filename())
        .map(str::to_string)
        .ok_or(UploadPolicyError::MissingFileName)?;

    policy.check_file_name(&file_name)?;
    policy.check_content_type(field.content_type().map(|mime| mime.essence_str()))?;

    let mut bytes = Vec::new();
    while let Some(chunk) = field.try_next().await.map_err(malformed)? {
        if (bytes.len() + chunk.len()) as u64 > policy.max_file_size_bytes {
            return Err(UploadPolicyError::FileTooLarge {
                max_bytes: policy.max_file_size_bytes,
            }
            .into());
        }
        bytes.extend_from_slice(&chunk);
    }

    policy.check_size(bytes.len() as u64)?;

    Ok(UploadedResume { file_name, bytes })
}

async fn drain(mut field: Field) -> Result<(), CandidateFormError> {
    while field.try_next().await.map_err(malformed)?.is_some() {}
    Ok(())
}
