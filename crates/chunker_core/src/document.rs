use std::path::{Path, PathBuf};

/// Opaque reference to a file picked by the user.
///
/// The core never opens it; the engine reads the bytes when the upload effect runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentHandle(PathBuf);

impl DocumentHandle {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedDocument {
    pub handle: DocumentHandle,
    pub display_name: String,
}

impl SelectedDocument {
    pub fn new(handle: DocumentHandle, display_name: impl Into<String>) -> Self {
        Self {
            handle,
            display_name: display_name.into(),
        }
    }

    /// Uses the final path component as the display name, falling back to the whole path.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let display_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self::new(DocumentHandle::new(path), display_name)
    }
}

/// What the indexing backend reported for a successful upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexingOutcome {
    pub chunk_count: u64,
    pub filename: String,
}

impl IndexingOutcome {
    pub fn message(&self) -> String {
        format!(
            "Successfully indexed {} chunks from {}.",
            self.chunk_count, self.filename
        )
    }
}
