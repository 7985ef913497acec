pub mod resume_upload_policy;

pub use resume_upload_policy::{ResumeUploadPolicy, UploadPolicyError};
