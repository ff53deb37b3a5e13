use std::fs;
use std::path::{Path, PathBuf};

use image::ImageFormat;
use thiserror::Error;

const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

#[derive(Error, Debug)]
pub enum SelectedFileError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A file picked by the user, captured in full at selection time.
///
/// The contents are opaque: no type or size validation happens here, the
/// service decides what it accepts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    name: String,
    bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// Reads the whole file into memory, keeping only its file name.
    pub fn read(path: &Path) -> Result<Self, SelectedFileError> {
        let bytes = fs::read(path).map_err(|e| SelectedFileError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
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

    /// Content type guessed from the file extension, the way a browser
    /// labels a file input part.
    pub fn mime_type(&self) -> &'static str {
        ImageFormat::from_extension(Path::new(&self.name).extension().unwrap_or_default())
            .map(|format| format.to_mime_type())
            .unwrap_or(FALLBACK_MIME_TYPE)
    }
}
