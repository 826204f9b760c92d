//! Error helpers for informative compile-time errors.
//!
//! Attribute mistakes get a message with examples, and unknown options get a
//! "did you mean?" suggestion when a valid option is close enough.

use proc_macro2::Span;
use syn::Error;

// =============================================================================
// FUZZY MATCHING ("DID YOU MEAN?")
// =============================================================================

/// Levenshtein edit distance, case-insensitive.
fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();

    // Single rolling row: row[j] holds the distance between a[..i] and b[..j]
    let mut row: Vec<usize> = (0..=b.len()).collect();
    for (i, a_char) in a.iter().enumerate() {
        let mut diagonal = i;
        let mut left = i + 1;
        for (cell, b_char) in row.iter_mut().skip(1).zip(&b) {
            let above = *cell;
            let substitute = diagonal + usize::from(a_char != b_char);
            let next = substitute.min(above + 1).min(left + 1);
            diagonal = above;
            *cell = next;
            left = next;
        }
        if let Some(first) = row.first_mut() {
            *first = i + 1;
        }
    }
    row.last().copied().unwrap_or(0)
}

/// Find the most similar option to the given input.
/// Returns `Some(suggestion)` if a close match is found (within threshold).
pub fn find_similar<'a>(input: &str, options: &[&'a str]) -> Option<&'a str> {
    // Threshold: allow ~40% of chars to be wrong, minimum 2, maximum 4
    let threshold = (input.len() / 2).clamp(2, 4);

    options
        .iter()
        .map(|opt| (*opt, levenshtein_distance(input, opt)))
        .filter(|(_, dist)| *dist <= threshold && *dist > 0)
        .min_by_key(|(_, dist)| *dist)
        .map(|(opt, _)| opt)
}

/// Format a "did you mean?" suggestion if a similar option exists.
pub fn did_you_mean(input: &str, options: &[&str]) -> String {
    find_similar(input, options)
        .map(|suggestion| format!("\n\nDid you mean '{suggestion}'?"))
        .unwrap_or_default()
}

// =============================================================================
// ERROR BUILDERS
// =============================================================================

/// Build a formatted error with examples.
pub fn parse_error(span: Span, message: &str, examples: &[&str]) -> Error {
    let examples_str = examples
        .iter()
        .map(|e| format!("  {e}"))
        .collect::<Vec<_>>()
        .join("\n");

    Error::new(span, format!("{message}\n\nExamples:\n{examples_str}"))
}

/// Build an error for an unknown identifier with valid options.
/// Includes "did you mean?" suggestion if a similar option exists.
///
/// ```ignore
/// // User typed `readonyl` instead of `readonly`
/// return Err(unknown_error(span, "reflect option", "readonyl", &["rename", "readonly", "skip"]));
/// // Error: Unknown reflect option 'readonyl'.
/// //
/// // Did you mean 'readonly'?
/// //
/// // Valid options: rename, readonly, skip
/// ```
pub fn unknown_error(span: Span, kind: &str, got: &str, valid: &[&str]) -> Error {
    let suggestion = did_you_mean(got, valid);
    let valid_str = valid.join(", ");
    Error::new(
        span,
        format!("Unknown {kind} '{got}'.{suggestion}\n\nValid options: {valid_str}"),
    )
}
