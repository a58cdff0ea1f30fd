use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use std::thread;

use chunker_logging::{chunker_info, chunker_warn};

use crate::{Backend, DocumentUpload, EngineEvent, JobId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCommand {
    Upload {
        job_id: JobId,
        path: PathBuf,
        filename: String,
    },
    Search {
        job_id: JobId,
        query: String,
    },
    Generate {
        job_id: JobId,
        prompt: String,
    },
}

/// Receives exactly one completion event per submitted command.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

/// Runs backend calls on a background tokio runtime; each command is its own task.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(backend: Arc<dyn Backend>, sink: Arc<dyn EventSink>) -> std::io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let backend = backend.clone();
                let sink = sink.clone();
                runtime.spawn(async move {
                    handle_command(backend.as_ref(), command, sink.as_ref()).await;
                });
            }
        });

        Ok(Self { cmd_tx })
    }

    pub fn submit(&self, command: EngineCommand) {
        if let Err(err) = self.cmd_tx.send(command) {
            chunker_warn!("engine stopped, dropping command {:?}", err.0);
        }
    }
}

async fn handle_command(backend: &dyn Backend, command: EngineCommand, sink: &dyn EventSink) {
    let event = match command {
        EngineCommand::Upload {
            job_id,
            path,
            filename,
        } => {
            chunker_info!("Upload job_id={} file={}", job_id, filename);
            let result = match DocumentUpload::read(&path, filename).await {
                Ok(document) => backend.upload(document).await,
                Err(err) => Err(err),
            };
            EngineEvent::UploadCompleted { job_id, result }
        }
        EngineCommand::Search { job_id, query } => {
            chunker_info!("Search job_id={} query_len={}", job_id, query.len());
            let result = backend.search(&query).await;
            EngineEvent::SearchCompleted { job_id, result }
        }
        EngineCommand::Generate { job_id, prompt } => {
            chunker_info!("Generate job_id={} prompt_len={}", job_id, prompt.len());
            let result = backend.generate(&prompt).await;
            EngineEvent::GenerationCompleted { job_id, result }
        }
    };

    if let Some(err) = event_error(&event) {
        chunker_warn!("Job {} failed: {}", event.job_id(), err);
    }
    sink.emit(event);
}

fn event_error(event: &EngineEvent) -> Option<&crate::BackendError> {
    match event {
        EngineEvent::UploadCompleted { result, .. } => result.as_ref().err(),
        EngineEvent::SearchCompleted { result, .. } => result.as_ref().err(),
        EngineEvent::GenerationCompleted { result, .. } => result.as_ref().err(),
    }
}
