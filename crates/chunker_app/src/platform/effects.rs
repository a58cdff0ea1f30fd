use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{mpsc, Arc, Mutex, MutexGuard, PoisonError};

use chunker_core::{Effect, GenerationKind, IndexingOutcome, Msg, WorkflowError};
use chunker_engine::{
    BackendError, ClientSettings, EngineCommand, EngineEvent, EngineHandle, EventSink, JobId,
    ReqwestBackend,
};
use chunker_logging::{chunker_info, chunker_warn};

use super::app::AppInput;

/// Core context a generation completion needs that the engine does not carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct GenerationTicket {
    kind: GenerationKind,
    epoch: u64,
}

#[derive(Debug, Default, Clone)]
struct PendingGenerations(Arc<Mutex<HashMap<JobId, GenerationTicket>>>);

impl PendingGenerations {
    // A panic elsewhere while holding the lock must not cost us a completion.
    fn lock(&self) -> MutexGuard<'_, HashMap<JobId, GenerationTicket>> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn insert(&self, job_id: JobId, ticket: GenerationTicket) {
        self.lock().insert(job_id, ticket);
    }

    fn take(&self, job_id: JobId) -> Option<GenerationTicket> {
        self.lock().remove(&job_id)
    }
}

pub struct EffectRunner {
    engine: EngineHandle,
    next_job_id: AtomicU64,
    pending: PendingGenerations,
}

impl EffectRunner {
    pub fn new(settings: ClientSettings, input_tx: mpsc::Sender<AppInput>) -> anyhow::Result<Self> {
        chunker_info!("Backend base URL {}", settings.base_url);
        let backend = Arc::new(ReqwestBackend::new(settings)?);
        let pending = PendingGenerations::default();
        let sink = Arc::new(MsgSink {
            input_tx,
            pending: pending.clone(),
        });
        let engine = EngineHandle::new(backend, sink)?;

        Ok(Self {
            engine,
            next_job_id: AtomicU64::new(1),
            pending,
        })
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            let job_id = self.next_job_id.fetch_add(1, Ordering::Relaxed);
            self.engine.submit(to_command(job_id, effect, &self.pending));
        }
    }
}

/// Generation tickets are registered before the command exists, so the
/// completion always finds its ticket.
fn to_command(job_id: JobId, effect: Effect, pending: &PendingGenerations) -> EngineCommand {
    match effect {
        Effect::UploadDocument { document } => EngineCommand::Upload {
            job_id,
            path: document.handle.path().to_path_buf(),
            filename: document.display_name,
        },
        Effect::Search { query } => EngineCommand::Search { job_id, query },
        Effect::Generate {
            kind,
            prompt,
            epoch,
        } => {
            pending.insert(job_id, GenerationTicket { kind, epoch });
            EngineCommand::Generate { job_id, prompt }
        }
    }
}

/// Turns engine completions into core messages on the app's input queue.
struct MsgSink {
    input_tx: mpsc::Sender<AppInput>,
    pending: PendingGenerations,
}

impl MsgSink {
    fn to_msg(&self, event: EngineEvent) -> Option<Msg> {
        let msg = match event {
            EngineEvent::UploadCompleted { result, .. } => Msg::UploadFinished(
                result
                    .map(|receipt| IndexingOutcome {
                        chunk_count: receipt.chunk_count,
                        filename: receipt.filename,
                    })
                    .map_err(map_error),
            ),
            EngineEvent::SearchCompleted { result, .. } => {
                Msg::SearchFinished(result.map_err(map_error))
            }
            EngineEvent::GenerationCompleted { job_id, result } => {
                let Some(ticket) = self.pending.take(job_id) else {
                    chunker_warn!("Generation job {} was never submitted by this app", job_id);
                    return None;
                };
                Msg::GenerationFinished {
                    kind: ticket.kind,
                    epoch: ticket.epoch,
                    result: result.map_err(map_error),
                }
            }
        };
        Some(msg)
    }
}

impl EventSink for MsgSink {
    fn emit(&self, event: EngineEvent) {
        if let Some(msg) = self.to_msg(event) {
            let _ = self.input_tx.send(AppInput::Msg(msg));
        }
    }
}

fn map_error(err: BackendError) -> WorkflowError {
    match err {
        BackendError::HttpStatus { status, detail } => WorkflowError::backend(status, detail),
        other => WorkflowError::transport(other.to_string()),
    }
}
