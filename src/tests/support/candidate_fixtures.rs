use chrono::NaiveDate;

use crate::candidate::domain::{CandidateId, CandidateProfile, CandidateRecord, ResumeLocation};

pub fn sample_profile(full_name: &str) -> CandidateProfile {
    CandidateProfile {
        full_name: full_name.to_string(),
        dob: NaiveDate::from_ymd_opt(1991, 6, 23).unwrap(),
        contact_number: "555-0199".to_string(),
        contact_address: "1 Infinite Loop".to_string(),
        education_qualification: "BSc Computer Science".to_string(),
        graduation_year: 2013,
        years_of_experience: 4.0,
        skill_set: vec!["Rust".to_string(), "SQL".to_string()],
    }
}

pub fn sample_record(full_name: &str) -> CandidateRecord {
    let id = CandidateId::new_random();
    CandidateRecord::new(
        id,
        sample_profile(full_name),
        ResumeLocation::new(format!("uploads/{id}/cv.pdf")),
    )
}
