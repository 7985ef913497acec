use std::env;
use std::path::PathBuf;

use crate::candidate::domain::policies::ResumeUploadPolicy;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub upload_dir: PathBuf,
    pub resume_max_file_size_bytes: u64,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. Unset keys fall back to defaults;
    /// values that are set but do not parse abort startup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());

        let port = lookup("PORT")
            .map(|raw| {
                raw.parse::<u16>()
                    .unwrap_or_else(|_| panic!("Invalid PORT value: {raw}"))
            })
            .unwrap_or(8000);

        let upload_dir = lookup("UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("uploads"));

        let resume_max_file_size_bytes = lookup("RESUME_MAX_FILE_SIZE_BYTES")
            .map(|raw| {
                raw.parse::<u64>()
                    .unwrap_or_else(|_| panic!("Invalid RESUME_MAX_FILE_SIZE_BYTES value: {raw}"))
            })
            .unwrap_or(ResumeUploadPolicy::DEFAULT_MAX_FILE_SIZE_BYTES);

        if resume_max_file_size_bytes == 0 {
            panic!("RESUME_MAX_FILE_SIZE_BYTES must be greater than zero");
        }

        Self {
            host,
            port,
            upload_dir,
            resume_max_file_size_bytes,
        }
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn upload_policy(&self) -> ResumeUploadPolicy {
        ResumeUploadPolicy::new(self.resume_max_file_size_bytes)
    }
}
