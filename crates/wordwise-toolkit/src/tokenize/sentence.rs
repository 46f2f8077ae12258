//! Abbreviation-aware sentence splitting.

use rustc_hash::FxHashSet;

/// Characters that may close a sentence after its terminator.
const CLOSERS: &[char] = &['"', '\'', ')', ']', '}', '\u{201d}', '\u{2019}', '\u{bb}'];

/// Split `text` into sentence slices.
///
/// A sentence ends after a word ending in `!` or `?`, or in `.` when the next
/// word starts a new sentence and the period does not close an abbreviation
/// or a single-letter initial.
pub fn split_sentences<'t>(text: &'t str, abbreviations: &FxHashSet<String>) -> Vec<&'t str> {
    let words = word_spans(text);
    let mut sentences = Vec::new();
    let mut start: Option<usize> = None;

    for (i, &(ws, we)) in words.iter().enumerate() {
        let sent_start = *start.get_or_insert(ws);
        let word = &text[ws..we];
        let next = words.get(i + 1).map(|&(ns, ne)| &text[ns..ne]);

        if is_boundary(word, next, abbreviations) {
            sentences.push(&text[sent_start..we]);
            start = None;
        }
    }

    if let (Some(sent_start), Some(&(_, last_end))) = (start, words.last()) {
        sentences.push(&text[sent_start..last_end]);
    }

    sentences
}

/// Byte spans of whitespace-separated words.
fn word_spans(text: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start = None;
    for (i, c) in text.char_indices() {
        if c.is_whitespace() {
            if let Some(s) = start.take() {
                spans.push((s, i));
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        spans.push((s, text.len()));
    }
    spans
}

fn is_boundary(word: &str, next: Option<&str>, abbreviations: &FxHashSet<String>) -> bool {
    let Some(next) = next else {
        return false;
    };

    let core = word.trim_end_matches(CLOSERS);
    if core.ends_with('!') || core.ends_with('?') {
        return true;
    }
    if !core.ends_with('.') {
        return false;
    }

    let stem = core.trim_end_matches('.');
    let lower = stem
        .trim_start_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase();

    // "...": only a boundary before a capitalised word
    let ellipsis = core.ends_with("..");
    if !ellipsis {
        if abbreviations.contains(&lower) {
            return false;
        }
        let mut chars = lower.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if c.is_alphabetic() {
                return false;
            }
        }
    }

    starts_sentence(next)
}

fn starts_sentence(word: &str) -> bool {
    word.chars()
        .find(|c| c.is_alphanumeric())
        .map(|c| c.is_uppercase() || c.is_numeric())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abbrevs() -> FxHashSet<String> {
        ["mr", "dr", "etc"].iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_basic_split() {
        let text = "Muad'Dib learned rapidly. And the first lesson was trust! Really? Yes.";
        let sentences = split_sentences(text, &abbrevs());
        assert_eq!(
            sentences,
            vec![
                "Muad'Dib learned rapidly.",
                "And the first lesson was trust!",
                "Really?",
                "Yes."
            ]
        );
    }

    #[test]
    fn test_abbreviation_and_initial() {
        let text = "Mr. Smith met J. R. Tolkien. He smiled.";
        let sentences = split_sentences(text, &abbrevs());
        assert_eq!(sentences, vec!["Mr. Smith met J. R. Tolkien.", "He smiled."]);
    }

    #[test]
    fn test_lowercase_after_period_continues() {
        let text = "it was 3 p.m. and late. then more";
        let sentences = split_sentences(text, &abbrevs());
        assert_eq!(sentences, vec![text]);
    }

    #[test]
    fn test_quote_after_terminator() {
        let text = "He said \"stop.\" Then left.";
        let sentences = split_sentences(text, &abbrevs());
        assert_eq!(sentences, vec!["He said \"stop.\"", "Then left."]);
    }

    #[test]
    fn test_whitespace_only() {
        assert!(split_sentences("   \n\t", &abbrevs()).is_empty());
        assert!(split_sentences("", &abbrevs()).is_empty());
    }
}
