//! Chunker engine: backend client and effect execution.
mod backend;
mod document;
mod engine;
mod types;
mod wire;

pub use backend::{Backend, ClientSettings, ReqwestBackend};
pub use document::{mime_for, DocumentUpload};
pub use engine::{ChannelEventSink, EngineCommand, EngineHandle, EventSink};
pub use types::{BackendError, EngineEvent, IndexingReceipt, JobId};
