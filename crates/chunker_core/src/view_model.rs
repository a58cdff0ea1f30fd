/// Label shown for the file picker before anything is selected.
pub const DOCUMENT_PLACEHOLDER: &str = "Select .pdf or .txt";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusView {
    #[default]
    None,
    Info(String),
    Error(String),
}

/// Everything the rendering layer needs after a transition.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub uploading: bool,
    pub searching: bool,
    pub generating: bool,
    pub status: StatusView,
    pub document_label: String,
    pub has_document: bool,
    pub query: String,
    pub can_upload: bool,
    pub can_search: bool,
    pub can_generate: bool,
    pub upload_label: &'static str,
    pub search_label: &'static str,
    pub summarize_label: &'static str,
    pub suggest_label: &'static str,
    pub results: Vec<ResultCardView>,
    pub summary: Option<String>,
    pub suggested_questions: Vec<String>,
    pub indexing_message: Option<String>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultCardView {
    /// 1-based position in relevance order.
    pub rank: usize,
    pub title: String,
    pub text: String,
}
