use crate::SelectedDocument;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    UploadDocument { document: SelectedDocument },
    Search { query: String },
    /// `epoch` identifies the result set the prompt was built from.
    Generate {
        kind: GenerationKind,
        prompt: String,
        epoch: u64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationKind {
    Summary,
    FollowUpQuestions,
}
