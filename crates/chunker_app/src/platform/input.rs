use std::path::PathBuf;

use chunker_core::{Msg, SelectedDocument};

/// One line typed at the prompt, decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Vec<Msg>),
    Show,
    Help,
    Quit,
    Invalid(String),
}

pub const HELP: &str = "\
Commands:
  select <path>     pick a .pdf or .txt document
  upload            upload and index the selected document
  query <text>      set the query text
  search [text]     search with the given (or current) query
  summarize         summarize the current results
  suggest           suggest follow-up questions for the current results
  show              print the current state
  help              print this help
  quit              exit";

pub fn parse_line(line: &str) -> Command {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    match verb.to_ascii_lowercase().as_str() {
        "" => Command::Dispatch(Vec::new()),
        "select" => select(rest),
        "upload" => Command::Dispatch(vec![Msg::UploadClicked]),
        "query" => Command::Dispatch(vec![Msg::QueryChanged(rest.to_string())]),
        "search" if rest.is_empty() => Command::Dispatch(vec![Msg::SearchSubmitted]),
        "search" => Command::Dispatch(vec![
            Msg::QueryChanged(rest.to_string()),
            Msg::SearchSubmitted,
        ]),
        "summarize" => Command::Dispatch(vec![Msg::SummarizeClicked]),
        "suggest" => Command::Dispatch(vec![Msg::SuggestQuestionsClicked]),
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => Command::Invalid(format!("Unknown command `{other}`. Type `help`.")),
    }
}

// Stands in for the file picker: it only ever hands over files that exist.
fn select(rest: &str) -> Command {
    if rest.is_empty() {
        return Command::Invalid("Usage: select <path>".to_string());
    }
    let path = PathBuf::from(rest);
    if !path.is_file() {
        return Command::Invalid(format!("No such file: {}", path.display()));
    }
    Command::Dispatch(vec![Msg::DocumentSelected(SelectedDocument::from_path(
        path,
    ))])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_with_text_sets_query_first() {
        assert_eq!(
            parse_line("  search   key findings "),
            Command::Dispatch(vec![
                Msg::QueryChanged("key findings".to_string()),
                Msg::SearchSubmitted,
            ])
        );
        assert_eq!(
            parse_line("SEARCH"),
            Command::Dispatch(vec![Msg::SearchSubmitted])
        );
    }

    #[test]
    fn select_requires_existing_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let line = format!("select {}", file.path().display());
        assert_eq!(
            parse_line(&line),
            Command::Dispatch(vec![Msg::DocumentSelected(SelectedDocument::from_path(
                file.path()
            ))])
        );

        assert!(matches!(parse_line("select"), Command::Invalid(_)));
        assert!(matches!(
            parse_line("select /definitely/not/here.pdf"),
            Command::Invalid(_)
        ));
    }

    #[test]
    fn unknown_and_blank_lines() {
        assert!(matches!(parse_line("frobnicate"), Command::Invalid(_)));
        assert_eq!(parse_line("   "), Command::Dispatch(Vec::new()));
        assert_eq!(parse_line("exit"), Command::Quit);
    }
}
