use thiserror::Error;

pub type JobId = u64;

/// What the indexing endpoint reports after a successful upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexingReceipt {
    pub chunk_count: u64,
    pub filename: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    UploadCompleted {
        job_id: JobId,
        result: Result<IndexingReceipt, BackendError>,
    },
    SearchCompleted {
        job_id: JobId,
        result: Result<Vec<String>, BackendError>,
    },
    GenerationCompleted {
        job_id: JobId,
        result: Result<String, BackendError>,
    },
}

impl EngineEvent {
    pub fn job_id(&self) -> JobId {
        match self {
            Self::UploadCompleted { job_id, .. }
            | Self::SearchCompleted { job_id, .. }
            | Self::GenerationCompleted { job_id, .. } => *job_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    /// Non-success status; `detail` comes from the service's error payload when present.
    #[error("http status {status}")]
    HttpStatus { status: u16, detail: Option<String> },
    #[error("timeout: {0}")]
    Timeout(String),
    #[error("network error: {0}")]
    Network(String),
    /// The response body did not have the expected shape.
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("could not read document: {0}")]
    ReadDocument(String),
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),
}
