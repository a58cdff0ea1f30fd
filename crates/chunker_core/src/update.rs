use chunker_logging::chunker_debug;

use crate::state::ResetScope;
use crate::{
    build_context, build_prompt, parse_questions, Activity, AppState, Effect, GenerationKind, Msg,
    ValidationError, WorkflowError,
};

const UPLOAD_FAILED: &str = "File upload failed";
const SEARCH_FAILED: &str = "Search failed";
const NO_RESULTS: &str = "No relevant results found.";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::DocumentSelected(document) => {
            // A new document invalidates everything derived from the previous one.
            state.select_document(document);
            state.reset(ResetScope::Outputs);
            Vec::new()
        }
        Msg::UploadClicked => start_upload(&mut state),
        Msg::UploadFinished(result) => {
            match result {
                Ok(outcome) => {
                    state.set_info(outcome.message());
                    state.set_indexing(Some(outcome));
                }
                Err(err) => {
                    chunker_debug!("upload failed: {err}");
                    state.set_error(err.status_message(UPLOAD_FAILED));
                }
            }
            state.set_busy(Activity::Upload, false);
            Vec::new()
        }
        Msg::QueryChanged(text) => {
            state.set_query(text);
            Vec::new()
        }
        Msg::SearchSubmitted => start_search(&mut state),
        Msg::SearchFinished(result) => {
            match result {
                Ok(results) if results.is_empty() => state.set_info(NO_RESULTS),
                Ok(results) => state.replace_results(results),
                Err(err) => {
                    chunker_debug!("search failed: {err}");
                    state.set_error(err.status_message(SEARCH_FAILED));
                }
            }
            state.set_busy(Activity::Search, false);
            Vec::new()
        }
        Msg::SummarizeClicked => start_generation(&mut state, GenerationKind::Summary),
        Msg::SuggestQuestionsClicked => {
            start_generation(&mut state, GenerationKind::FollowUpQuestions)
        }
        Msg::GenerationFinished {
            kind,
            epoch,
            result,
        } => {
            finish_generation(&mut state, kind, epoch, result);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn start_upload(state: &mut AppState) -> Vec<Effect> {
    if state.busy().uploading {
        chunker_debug!("upload ignored: an upload is already in flight");
        return Vec::new();
    }
    let Some(document) = state.document().cloned() else {
        reject(state, ValidationError::NoFileSelected);
        return Vec::new();
    };

    state.set_busy(Activity::Upload, true);
    state.reset(ResetScope::Outputs);
    state.set_indexing(None);
    vec![Effect::UploadDocument { document }]
}

fn start_search(state: &mut AppState) -> Vec<Effect> {
    if state.busy().searching {
        chunker_debug!("search ignored: a search is already in flight");
        return Vec::new();
    }
    let query = state.query().trim().to_string();
    if query.is_empty() {
        reject(state, ValidationError::EmptyQuery);
        return Vec::new();
    }

    state.set_busy(Activity::Search, true);
    state.reset(ResetScope::Outputs);
    vec![Effect::Search { query }]
}

/// Input checks fail before any busy flag is raised or any effect is emitted.
fn reject(state: &mut AppState, err: impl Into<WorkflowError>) {
    let err = err.into();
    chunker_debug!("rejected: {err:?}");
    state.set_error(err.to_string());
}

fn start_generation(state: &mut AppState, kind: GenerationKind) -> Vec<Effect> {
    // Without results the prompt would carry no context; nothing to do.
    if state.results().is_empty() {
        chunker_debug!("{kind:?} ignored: no results");
        return Vec::new();
    }
    if state.busy().generating {
        chunker_debug!("{kind:?} ignored: a generation is already in flight");
        return Vec::new();
    }

    state.set_busy(Activity::Generation, true);
    state.reset(ResetScope::ErrorOnly);
    let context = build_context(state.results());
    vec![Effect::Generate {
        kind,
        prompt: build_prompt(kind, &context),
        epoch: state.results_epoch(),
    }]
}

fn finish_generation(
    state: &mut AppState,
    kind: GenerationKind,
    epoch: u64,
    result: Result<String, WorkflowError>,
) {
    match result {
        Ok(_) if epoch != state.results_epoch() => {
            chunker_debug!(
                "{kind:?} discarded: built from epoch {epoch}, results now at {}",
                state.results_epoch()
            );
        }
        Ok(text) if text.is_empty() => {}
        Ok(text) => match kind {
            GenerationKind::Summary => state.set_summary(text),
            GenerationKind::FollowUpQuestions => {
                state.set_suggested_questions(parse_questions(&text))
            }
        },
        Err(err) => state.set_error(format!("Failed to generate content: {}", err.reason())),
    }
    state.set_busy(Activity::Generation, false);
}
