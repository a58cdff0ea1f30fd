use crate::view_model::{
    AppViewModel, ResultCardView, StatusView, DOCUMENT_PLACEHOLDER,
};
use crate::{IndexingOutcome, SelectedDocument};

/// Single-slot status line. Holding one enum keeps info and error mutually exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusChannel {
    #[default]
    Empty,
    Info(String),
    Error(String),
}

impl StatusChannel {
    pub fn info(&self) -> Option<&str> {
        match self {
            Self::Info(text) => Some(text),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(text) => Some(text),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// The three classes of asynchronous work, each guarded by its own busy flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    Upload,
    Search,
    Generation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BusyFlags {
    pub uploading: bool,
    pub searching: bool,
    pub generating: bool,
}

impl BusyFlags {
    pub fn is_busy(&self, activity: Activity) -> bool {
        match activity {
            Activity::Upload => self.uploading,
            Activity::Search => self.searching,
            Activity::Generation => self.generating,
        }
    }

    fn set(&mut self, activity: Activity, busy: bool) {
        match activity {
            Activity::Upload => self.uploading = busy,
            Activity::Search => self.searching = busy,
            Activity::Generation => self.generating = busy,
        }
    }
}

/// How much shared display state an action clears before it runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ResetScope {
    /// Status, results and everything derived from them.
    Outputs,
    /// Only an error status; an info notice survives.
    ErrorOnly,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    document: Option<SelectedDocument>,
    indexing: Option<IndexingOutcome>,
    query: String,
    results: Vec<String>,
    // Bumped on every change to `results`; generation completions from an older
    // epoch are stale.
    results_epoch: u64,
    summary: Option<String>,
    suggested_questions: Vec<String>,
    status: StatusChannel,
    busy: BusyFlags,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn document(&self) -> Option<&SelectedDocument> {
        self.document.as_ref()
    }

    pub fn indexing(&self) -> Option<&IndexingOutcome> {
        self.indexing.as_ref()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[String] {
        &self.results
    }

    pub fn results_epoch(&self) -> u64 {
        self.results_epoch
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn suggested_questions(&self) -> &[String] {
        &self.suggested_questions
    }

    pub fn status(&self) -> &StatusChannel {
        &self.status
    }

    pub fn busy(&self) -> BusyFlags {
        self.busy
    }

    /// Returns whether anything changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn view(&self) -> AppViewModel {
        let busy = self.busy;
        let results = self
            .results
            .iter()
            .enumerate()
            .map(|(index, text)| ResultCardView {
                rank: index + 1,
                title: format!("Result {}", index + 1),
                text: text.clone(),
            })
            .collect::<Vec<_>>();
        let status = match &self.status {
            StatusChannel::Empty => StatusView::None,
            StatusChannel::Info(text) => StatusView::Info(text.clone()),
            StatusChannel::Error(text) => StatusView::Error(text.clone()),
        };

        AppViewModel {
            uploading: busy.uploading,
            searching: busy.searching,
            generating: busy.generating,
            status,
            document_label: self
                .document
                .as_ref()
                .map(|doc| doc.display_name.clone())
                .unwrap_or_else(|| DOCUMENT_PLACEHOLDER.to_string()),
            has_document: self.document.is_some(),
            query: self.query.clone(),
            can_upload: self.document.is_some() && !busy.uploading,
            can_search: !busy.searching,
            can_generate: !self.results.is_empty() && !busy.generating,
            upload_label: if busy.uploading { "Uploading..." } else { "Upload & Index" },
            search_label: if busy.searching { "Searching..." } else { "Search" },
            summarize_label: if busy.generating {
                "Summarizing..."
            } else {
                "Summarize Results"
            },
            suggest_label: if busy.generating {
                "Generating..."
            } else {
                "Suggest Questions"
            },
            results,
            summary: self.summary.clone(),
            suggested_questions: self.suggested_questions.clone(),
            indexing_message: self.indexing.as_ref().map(IndexingOutcome::message),
            dirty: self.dirty,
        }
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Shared clearing routine every operation runs before doing its own work.
    pub(crate) fn reset(&mut self, scope: ResetScope) {
        match scope {
            ResetScope::Outputs => {
                self.status = StatusChannel::Empty;
                self.replace_results(Vec::new());
            }
            ResetScope::ErrorOnly => {
                if matches!(self.status, StatusChannel::Error(_)) {
                    self.status = StatusChannel::Empty;
                }
            }
        }
        self.mark_dirty();
    }

    pub(crate) fn set_busy(&mut self, activity: Activity, busy: bool) {
        self.busy.set(activity, busy);
        self.mark_dirty();
    }

    pub(crate) fn set_info(&mut self, text: impl Into<String>) {
        self.status = StatusChannel::Info(text.into());
        self.mark_dirty();
    }

    pub(crate) fn set_error(&mut self, text: impl Into<String>) {
        self.status = StatusChannel::Error(text.into());
        self.mark_dirty();
    }

    pub(crate) fn select_document(&mut self, document: SelectedDocument) {
        self.document = Some(document);
        self.mark_dirty();
    }

    pub(crate) fn set_query(&mut self, query: String) {
        if self.query != query {
            self.query = query;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_indexing(&mut self, outcome: Option<IndexingOutcome>) {
        self.indexing = outcome;
        self.mark_dirty();
    }

    /// Any change to the result set invalidates summary and questions.
    pub(crate) fn replace_results(&mut self, results: Vec<String>) {
        self.results = results;
        self.results_epoch += 1;
        self.summary = None;
        self.suggested_questions.clear();
        self.mark_dirty();
    }

    pub(crate) fn set_summary(&mut self, summary: String) {
        self.summary = Some(summary);
        self.mark_dirty();
    }

    pub(crate) fn set_suggested_questions(&mut self, questions: Vec<String>) {
        self.suggested_questions = questions;
        self.mark_dirty();
    }
}
