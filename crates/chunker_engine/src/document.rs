use std::path::Path;

use crate::BackendError;

/// Raw document content ready to be sent to the indexing endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentUpload {
    pub filename: String,
    pub bytes: Vec<u8>,
    pub mime: &'static str,
}

impl DocumentUpload {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        let filename = filename.into();
        let mime = mime_for(&filename);
        Self {
            filename,
            bytes,
            mime,
        }
    }

    pub async fn read(path: &Path, filename: impl Into<String>) -> Result<Self, BackendError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|err| BackendError::ReadDocument(format!("{}: {err}", path.display())))?;
        Ok(Self::new(filename, bytes))
    }
}

/// MIME type for the multipart part. Unknown types are left for the backend to reject.
pub fn mime_for(filename: &str) -> &'static str {
    let extension = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase());
    match extension.as_deref() {
        Some("pdf") => "application/pdf",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}
