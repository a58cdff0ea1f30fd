use chunker_core::{
    update, AppState, Effect, GenerationKind, IndexingOutcome, Msg, SelectedDocument,
    StatusChannel, WorkflowError,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    chunker_logging::initialize_for_tests();
}

fn with_results(results: &[&str]) -> AppState {
    let (state, _) = update(AppState::new(), Msg::QueryChanged("findings".to_string()));
    let (state, _) = update(state, Msg::SearchSubmitted);
    let (state, _) = update(
        state,
        Msg::SearchFinished(Ok(results.iter().map(|r| r.to_string()).collect())),
    );
    state
}

fn generate(state: AppState, msg: Msg) -> (AppState, GenerationKind, String, u64) {
    let (state, effects) = update(state, msg);
    match effects.as_slice() {
        [Effect::Generate {
            kind,
            prompt,
            epoch,
        }] => (state, *kind, prompt.clone(), *epoch),
        other => panic!("expected one generate effect, got {other:?}"),
    }
}

fn finish(state: AppState, kind: GenerationKind, epoch: u64, text: &str) -> AppState {
    let (state, effects) = update(
        state,
        Msg::GenerationFinished {
            kind,
            epoch,
            result: Ok(text.to_string()),
        },
    );
    assert!(effects.is_empty());
    state
}

#[test]
fn summarize_prompt_carries_results_joined_by_blank_line() {
    init_logging();
    let state = with_results(&["A", "B"]);
    let (state, kind, prompt, _) = generate(state, Msg::SummarizeClicked);

    assert_eq!(kind, GenerationKind::Summary);
    assert!(prompt.contains("concise summary"));
    assert!(prompt.ends_with("A\n\nB"));
    assert!(state.busy().generating);
    assert!(!state.view().can_generate);
    assert_eq!(state.view().summarize_label, "Summarizing...");
}

#[test]
fn summary_is_stored_verbatim_and_flag_resets() {
    init_logging();
    let state = with_results(&["A", "B"]);
    let (state, kind, _, epoch) = generate(state, Msg::SummarizeClicked);
    let state = finish(state, kind, epoch, "  A then B.\n");

    assert_eq!(state.summary(), Some("  A then B.\n"));
    assert!(!state.busy().generating);
}

#[test]
fn summarize_twice_with_same_results_is_idempotent() {
    init_logging();
    let state = with_results(&["A", "B"]);
    let (state, kind, first_prompt, epoch) = generate(state, Msg::SummarizeClicked);
    let state = finish(state, kind, epoch, "Same summary.");
    let first = state.summary().map(ToOwned::to_owned);

    let (state, kind, second_prompt, epoch) = generate(state, Msg::SummarizeClicked);
    let state = finish(state, kind, epoch, "Same summary.");

    assert_eq!(first_prompt, second_prompt);
    assert_eq!(state.summary().map(ToOwned::to_owned), first);
}

#[test]
fn suggested_questions_strip_numbering_and_blank_lines() {
    init_logging();
    let state = with_results(&["A"]);
    let (state, kind, prompt, epoch) = generate(state, Msg::SuggestQuestionsClicked);
    assert_eq!(kind, GenerationKind::FollowUpQuestions);
    assert!(prompt.contains("three follow-up questions"));

    let state = finish(
        state,
        kind,
        epoch,
        "1. What is X?\n2. What is Y?\n\n3. What is Z?",
    );
    assert_eq!(
        state.suggested_questions(),
        ["What is X?", "What is Y?", "What is Z?"]
    );
}

#[test]
fn summary_and_questions_are_independent() {
    init_logging();
    let state = with_results(&["A"]);
    let (state, kind, _, epoch) = generate(state, Msg::SummarizeClicked);
    let state = finish(state, kind, epoch, "Summary.");

    let (state, kind, _, epoch) = generate(state, Msg::SuggestQuestionsClicked);
    let (state, _) = update(
        state,
        Msg::GenerationFinished {
            kind,
            epoch,
            result: Err(WorkflowError::backend(500, None)),
        },
    );

    assert_eq!(state.summary(), Some("Summary."));
    assert!(state.suggested_questions().is_empty());
    assert_eq!(
        state.status().error(),
        Some("Failed to generate content: API call failed with status: 500")
    );
}

#[test]
fn generation_failure_embeds_backend_detail() {
    init_logging();
    let state = with_results(&["A"]);
    let (state, kind, _, epoch) = generate(state, Msg::SummarizeClicked);
    let (state, _) = update(
        state,
        Msg::GenerationFinished {
            kind,
            epoch,
            result: Err(WorkflowError::backend(429, Some("rate limited".to_string()))),
        },
    );

    let error = state.status().error().expect("error status");
    assert!(error.contains("rate limited"));
    assert!(!state.busy().generating);
    assert!(state.summary().is_none());
}

#[test]
fn generation_without_results_is_silent() {
    init_logging();
    let mut state = AppState::new();
    let _ = state.consume_dirty();

    let (mut state, effects) = update(state, Msg::SummarizeClicked);
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());

    let (state, effects) = update(state, Msg::SuggestQuestionsClicked);
    assert!(effects.is_empty());
    assert!(!state.busy().generating);
    assert!(state.status().is_empty());
}

#[test]
fn generation_keeps_info_but_clears_error() {
    init_logging();
    let state = with_results(&["A"]);
    let (state, _) = update(state, Msg::QueryChanged("  ".to_string()));
    let (state, _) = update(state, Msg::SearchSubmitted);
    assert!(state.status().error().is_some());

    let (state, _, _, _) = generate(state, Msg::SummarizeClicked);
    assert!(state.status().is_empty());

    let (state, _) = update(
        AppState::new(),
        Msg::DocumentSelected(SelectedDocument::from_path("d.txt")),
    );
    let (state, _) = update(state, Msg::UploadClicked);
    let (state, _) = update(state, Msg::QueryChanged("topic".to_string()));
    let (state, _) = update(state, Msg::SearchSubmitted);
    let (state, _) = update(
        state,
        Msg::UploadFinished(Ok(IndexingOutcome {
            chunk_count: 1,
            filename: "d.txt".to_string(),
        })),
    );
    let (state, _) = update(state, Msg::SearchFinished(Ok(vec!["A".to_string()])));
    assert!(matches!(state.status(), StatusChannel::Info(_)));

    let (state, _, _, _) = generate(state, Msg::SuggestQuestionsClicked);
    assert_eq!(
        state.status().info(),
        Some("Successfully indexed 1 chunks from d.txt.")
    );
}

#[test]
fn only_one_generation_in_flight() {
    init_logging();
    let state = with_results(&["A"]);
    let (state, _, _, _) = generate(state, Msg::SummarizeClicked);

    let (state, effects) = update(state, Msg::SuggestQuestionsClicked);
    assert!(effects.is_empty());
    assert!(state.busy().generating);
}

#[test]
fn new_search_clears_derived_content() {
    init_logging();
    let state = with_results(&["A"]);
    let (state, kind, _, epoch) = generate(state, Msg::SummarizeClicked);
    let state = finish(state, kind, epoch, "Summary.");
    let (state, kind, _, epoch) = generate(state, Msg::SuggestQuestionsClicked);
    let state = finish(state, kind, epoch, "Q1?\nQ2?");
    assert!(state.summary().is_some());
    assert_eq!(state.suggested_questions().len(), 2);

    let (state, effects) = update(state, Msg::SearchSubmitted);
    assert_eq!(effects.len(), 1);
    assert!(state.summary().is_none());
    assert!(state.suggested_questions().is_empty());
    assert!(state.results().is_empty());
}

#[test]
fn stale_generation_result_is_discarded() {
    init_logging();
    let state = with_results(&["A"]);
    let (state, kind, _, epoch) = generate(state, Msg::SummarizeClicked);

    // A new search replaces the results while the summary is still in flight.
    let (state, _) = update(state, Msg::SearchSubmitted);
    let (state, _) = update(state, Msg::SearchFinished(Ok(vec!["B".to_string()])));
    let state = finish(state, kind, epoch, "Summary of A.");

    assert!(state.summary().is_none());
    assert!(!state.busy().generating);
    assert_eq!(state.results(), ["B"]);
}
