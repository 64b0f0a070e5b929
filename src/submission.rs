use anyhow::{anyhow, Result};
use serde::Serialize;
use std::path::Path;

/// Form body of a submission: `language=<tag>&code=<source>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionRequest {
    language: String,
    code: String,
}

impl SubmissionRequest {
    pub fn new(language: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            code: code.into(),
        }
    }

    /// Reads the whole source file as text.
    pub fn from_file(language: impl Into<String>, path: &Path) -> Result<Self> {
        let code = std::fs::read_to_string(path)
            .map_err(|e| anyhow!("Couldn't read source file {:?}: {}", path, e))?;
        tracing::debug!(path = %path.display(), bytes = code.len(), "loaded source file");
        Ok(Self::new(language, code))
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}
