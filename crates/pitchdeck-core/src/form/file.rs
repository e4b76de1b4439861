//! The deck picked by the user, read into memory.

use std::fs;
use std::path::Path;

use super::ValidationError;

/// Extension accepted by the picker (compared case-insensitively).
pub const ACCEPTED_EXTENSION: &str = "pdf";

/// File name plus contents, held between selection and submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    name: String,
    bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// Pick a file from disk. Only the extension is checked, like a browser
    /// file input with `accept=".pdf"`; contents are not inspected.
    pub fn from_path(path: &Path) -> Result<Self, ValidationError> {
        let has_pdf_ext = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(ACCEPTED_EXTENSION));
        if !has_pdf_ext {
            return Err(ValidationError::NotPdf(path.to_path_buf()));
        }
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| ValidationError::NotPdf(path.to_path_buf()))?;
        let bytes = fs::read(path).map_err(|source| ValidationError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("selected {} ({} bytes)", path.display(), bytes.len());
        Ok(Self { name, bytes })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
