/// Builds `multipart/form-data` request bodies for route tests.
pub struct MultipartBody {
    boundary: String,
    body: Vec<u8>,
}

impl Default for MultipartBody {
    fn default() -> Self {
        Self {
            boundary: "----resume-collector-test-boundary".to_string(),
            body: Vec::new(),
        }
    }
}

impl MultipartBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                self.boundary, name, value
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(
        mut self,
        name: &str,
        file_name: &str,
        content_type: Option<&str>,
        bytes: &[u8],
    ) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                self.boundary, name, file_name
            )
            .as_bytes(),
        );
        if let Some(content_type) = content_type {
            self.body
                .extend_from_slice(format!("Content-Type: {content_type}\r\n").as_bytes());
        }
        self.body.extend_from_slice(b"\r\n");
        self.body.extend_from_slice(bytes);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    /// Returns the `Content-Type` header value and the encoded body.
    pub fn finish(mut self) -> (String, Vec<u8>) {
        self.body
            .extend_from_slice(format!("--{}--\r\n", self.boundary).as_bytes());
        (
            format!("multipart/form-data; boundary={}", self.boundary),
            self.body,
        )
    }
}

/// A complete submission with the given resume part.
pub fn candidate_form_body(
    file_name: &str,
    content_type: Option<&str>,
    bytes: &[u8],
) -> MultipartBody {
    MultipartBody::new()
        .text("full_name", "Ada Lovelace")
        .text("dob", "1990-12-10")
        .text("contact_number", "555-0100")
        .text("contact_address", "12 St James's Square, London")
        .text("education_qualification", "BSc Mathematics")
        .text("graduation_year", "2012")
        .text("years_of_experience", "7.5")
        .text("skill_set", "Python, SQL")
        .file("resume_file", file_name, content_type, bytes)
}
