use std::fmt::Write;

use chunker_core::{AppViewModel, StatusView};

/// Renders the view model as plain text for the terminal.
pub fn render(view: &AppViewModel) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "== Knowledge Chunker ==");
    let _ = writeln!(
        out,
        "[1] Document: {} | {}",
        view.document_label,
        button(view.upload_label, view.can_upload)
    );
    if let Some(message) = &view.indexing_message {
        let _ = writeln!(out, "    Indexed: {message}");
    }
    let query = if view.query.is_empty() {
        "(none)"
    } else {
        view.query.as_str()
    };
    let _ = writeln!(
        out,
        "[2] Query: {} | {}",
        query,
        button(view.search_label, view.can_search)
    );

    match &view.status {
        StatusView::None => {}
        StatusView::Info(text) => {
            let _ = writeln!(out, "INFO: {text}");
        }
        StatusView::Error(text) => {
            let _ = writeln!(out, "ERROR: {text}");
        }
    }

    if !view.results.is_empty() {
        let _ = writeln!(
            out,
            "{} {}",
            button(view.summarize_label, view.can_generate),
            button(view.suggest_label, view.can_generate)
        );
        if let Some(summary) = &view.summary {
            let _ = writeln!(out, "-- AI Summary --\n{summary}");
        }
        if !view.suggested_questions.is_empty() {
            let _ = writeln!(out, "-- Suggested Questions --");
            for question in &view.suggested_questions {
                let _ = writeln!(out, "  * {question}");
            }
        }
        for card in &view.results {
            let _ = writeln!(out, "-- {} --\n{}", card.title, card.text);
        }
    }

    out
}

fn button(label: &str, enabled: bool) -> String {
    if enabled {
        format!("<{label}>")
    } else {
        format!("<{label} (disabled)>")
    }
}
