//! Chunker core: pure workflow state machine and view-model helpers.
mod document;
mod effect;
mod error;
mod msg;
mod prompt;
mod state;
mod update;
mod view_model;

pub use document::{DocumentHandle, IndexingOutcome, SelectedDocument};
pub use effect::{Effect, GenerationKind};
pub use error::{ValidationError, WorkflowError};
pub use msg::Msg;
pub use prompt::{build_context, build_prompt, parse_questions, strip_enumeration};
pub use state::{Activity, AppState, BusyFlags, StatusChannel};
pub use update::update;
pub use view_model::{AppViewModel, ResultCardView, StatusView, DOCUMENT_PLACEHOLDER};
