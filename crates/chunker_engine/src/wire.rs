//! JSON shapes exchanged with the backend endpoints.

use serde::{Deserialize, Serialize};

use crate::{BackendError, IndexingReceipt};

#[derive(Debug, Deserialize)]
pub(crate) struct UploadResponse {
    pub filename: String,
    pub indexed_chunks: u64,
}

impl From<UploadResponse> for IndexingReceipt {
    fn from(response: UploadResponse) -> Self {
        Self {
            chunk_count: response.indexed_chunks,
            filename: response.filename,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub results: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct GenerateRequest<'a> {
    pub prompt: &'a str,
}

/// Envelope returned by the generation proxy:
/// `{ "candidates": [ { "content": { "parts": [ { "text": "..." } ] } } ] }`.
#[derive(Debug, Deserialize)]
pub(crate) struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ContentPart>,
}

#[derive(Debug, Deserialize)]
struct ContentPart {
    text: Option<String>,
}

impl GenerateResponse {
    /// Text of the first part of the first candidate.
    pub(crate) fn into_text(self) -> Result<String, BackendError> {
        let candidate = self
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| BackendError::Decode("response has no candidates".into()))?;
        let content = candidate
            .content
            .ok_or_else(|| BackendError::Decode("candidate has no content".into()))?;
        let part = content
            .parts
            .into_iter()
            .next()
            .ok_or_else(|| BackendError::Decode("content has no parts".into()))?;
        part.text
            .ok_or_else(|| BackendError::Decode("first part has no text".into()))
    }
}

#[derive(Debug, Deserialize)]
struct ErrorPayload {
    detail: Option<serde_json::Value>,
}

/// Extracts the `detail` field from an error body, if the body is JSON and has one.
pub(crate) fn error_detail(body: &[u8]) -> Option<String> {
    let payload: ErrorPayload = serde_json::from_slice(body).ok()?;
    match payload.detail? {
        serde_json::Value::Null => None,
        serde_json::Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}
