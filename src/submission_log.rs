use anyhow::{anyhow, Result};
use std::{fs::OpenOptions, io::Write, path::Path};

use crate::SubmissionId;

/// Appends `<id>\n` to the shared submission log.
///
/// The file is opened in append mode and the whole line goes out in a single
/// write, so lines from concurrent runs never interleave.
pub fn append_submission_id(path: &Path, id: &SubmissionId) -> Result<()> {
    let line = format!("{id}\n");
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| anyhow!("Couldn't open submission log {:?}: {}", path, e))?;
    file.write_all(line.as_bytes())
        .map_err(|e| anyhow!("Couldn't write submission log {:?}: {}", path, e))?;
    tracing::info!(path = %path.display(), %id, "recorded submission id");
    Ok(())
}
