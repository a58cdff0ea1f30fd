use crate::{GenerationKind, IndexingOutcome, SelectedDocument, WorkflowError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User picked a file.
    DocumentSelected(SelectedDocument),
    /// User clicked Upload & Index.
    UploadClicked,
    /// Engine completion for an upload.
    UploadFinished(Result<IndexingOutcome, WorkflowError>),
    /// User edited the query input.
    QueryChanged(String),
    /// User submitted the current query.
    SearchSubmitted,
    /// Engine completion for a search; results are in relevance order.
    SearchFinished(Result<Vec<String>, WorkflowError>),
    /// User clicked Summarize Results.
    SummarizeClicked,
    /// User clicked Suggest Questions.
    SuggestQuestionsClicked,
    /// Engine completion for a generation request.
    GenerationFinished {
        kind: GenerationKind,
        epoch: u64,
        result: Result<String, WorkflowError>,
    },
    /// Fallback for placeholder wiring.
    NoOp,
}
