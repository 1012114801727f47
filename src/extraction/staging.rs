use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use super::ExtractionError;

/// An uploaded file written to the upload directory for the duration of one
/// request. The file is removed when this value is dropped.
#[derive(Debug)]
pub struct StagedUpload {
    file: NamedTempFile,
}

impl StagedUpload {
    /// Write `bytes` to a uniquely named file under `dir`, creating `dir`
    /// if needed. `filename` should already be sanitised.
    pub fn write(dir: &Path, filename: &str, bytes: &[u8]) -> Result<Self, ExtractionError> {
        std::fs::create_dir_all(dir)?;

        let mut file = tempfile::Builder::new()
            .prefix("upload-")
            .suffix(&format!("-{filename}"))
            .tempfile_in(dir)?;
        file.write_all(bytes)?;
        file.flush()?;

        tracing::debug!(path = %file.path().display(), size = bytes.len(), "Upload staged");
        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}
