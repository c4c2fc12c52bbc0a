//! Uploaded file metadata

use serde::{Deserialize, Serialize};

/// What the validators need to know about a selected file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub file_name: String,
    /// MIME type reported by the client, e.g. `image/png`
    pub mime_type: String,
    /// Size in bytes
    pub size: u64,
}

impl UploadedFile {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, size: u64) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            size,
        }
    }
}
