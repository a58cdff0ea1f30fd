use crate::GenerationKind;

const RESULT_SEPARATOR: &str = "\n\n";

/// Joins results in order, one blank line between entries.
pub fn build_context(results: &[String]) -> String {
    results.join(RESULT_SEPARATOR)
}

pub fn build_prompt(kind: GenerationKind, context: &str) -> String {
    match kind {
        GenerationKind::Summary => format!(
            "Based on the following text excerpts, provide a concise summary:\n\n{context}"
        ),
        GenerationKind::FollowUpQuestions => format!(
            "Based on the following text, suggest exactly three follow-up questions. \
             Return them as a plain list, one question per line:\n\n{context}"
        ),
    }
}

/// Splits generated text into questions: blank lines dropped, numbering stripped, order kept.
pub fn parse_questions(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(strip_enumeration)
        .filter(|line| !line.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Removes a leading `<digits>.<whitespace>` marker, e.g. `"2. Why?"` -> `"Why?"`.
///
/// Lines like `"1.5 million"` are left alone since the period is not followed by whitespace.
pub fn strip_enumeration(line: &str) -> &str {
    let digits = line.len() - line.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return line;
    }
    let Some(after_dot) = line[digits..].strip_prefix('.') else {
        return line;
    };
    let rest = after_dot.trim_start();
    if rest.len() == after_dot.len() {
        return line;
    }
    rest
}
