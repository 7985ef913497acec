use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadPolicyError {
    #[error("Resume file name is missing")]
    MissingFileName,

    #[error("Resume file name must not exceed {max} bytes")]
    FileNameTooLong { max: usize },

    #[error("Invalid file type '{0}'. Only PDF, DOC, and DOCX are allowed")]
    DisallowedExtension(String),

    #[error("Invalid content type '{0}'. Only PDF, DOC, and DOCX are allowed")]
    DisallowedContentType(String),

    #[error("Resume file is empty")]
    EmptyFile,

    #[error("Resume file must not exceed {max_bytes} bytes")]
    FileTooLarge { max_bytes: u64 },
}

#[derive(Debug, Clone)]
pub struct ResumeUploadPolicy {
    pub max_file_size_bytes: u64,
    pub max_file_name_len: usize,
    pub allowed_extensions: &'static [&'static str],
    pub allowed_mime_types: &'static [&'static str],
}

impl ResumeUploadPolicy {
    pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024; // 5MB
    pub const DEFAULT_MAX_FILE_NAME_LEN: usize = 255;
    pub const DEFAULT_ALLOWED_EXTENSIONS: &'static [&'static str] = &["pdf", "doc", "docx"];
    pub const DEFAULT_ALLOWED_MIME_TYPES: &'static [&'static str] = &[
        "application/pdf",
        "application/msword",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        // Sent by many clients for .doc/.docx; the extension check still applies.
        "application/octet-stream",
    ];

    pub fn new(max_file_size_bytes: u64) -> Self {
        Self {
            max_file_size_bytes,
            ..Self::default()
        }
    }

    /// Checks the client-supplied file name: present, short enough, allowed extension.
    pub fn check_file_name(&self, file_name: &str) -> Result<(), UploadPolicyError> {
        let file_name = file_name.trim();
        if file_name.is_empty() {
            return Err(UploadPolicyError::MissingFileName);
        }

        if file_name.len() > self.max_file_name_len {
            return Err(UploadPolicyError::FileNameTooLong {
                max: self.max_file_name_len,
            });
        }

        let ext = Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        if !self.allowed_extensions.contains(&ext.as_str()) {
            return Err(UploadPolicyError::DisallowedExtension(ext));
        }

        Ok(())
    }

    /// A missing content type is accepted; the extension decides.
    pub fn check_content_type(&self, content_type: Option<&str>) -> Result<(), UploadPolicyError> {
        let Some(content_type) = content_type else {
            return Ok(());
        };

        let essence = content_type
            .split(';')
            .next()
            .unwrap_or("")
            .trim()
            .to_ascii_lowercase();

        if self.allowed_mime_types.contains(&essence.as_str()) {
            Ok(())
        } else {
            Err(UploadPolicyError::DisallowedContentType(essence))
        }
    }

    pub fn check_size(&self, size_bytes: u64) -> Result<(), UploadPolicyError> {
        if size_bytes == 0 {
            return Err(UploadPolicyError::EmptyFile);
        }

        if size_bytes > self.max_file_size_bytes {
            return Err(UploadPolicyError::FileTooLarge {
                max_bytes: self.max_file_size_bytes,
            });
        }

        Ok(())
    }
}

impl Default for ResumeUploadPolicy {
    fn default() -> Self {
        Self {
            max_file_size_bytes: Self::DEFAULT_MAX_FILE_SIZE_BYTES,
            max_file_name_len: Self::DEFAULT_MAX_FILE_NAME_LEN,
            allowed_extensions: Self::DEFAULT_ALLOWED_EXTENSIONS,
            allowed_mime_types: Self::DEFAULT_ALLOWED_MIME_TYPES,
        }
    }
}
