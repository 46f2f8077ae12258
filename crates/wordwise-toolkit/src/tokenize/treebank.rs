//! Treebank-style word splitting within one sentence.
//!
//! Conventions:
//! - opening double quotes become ``` `` ```, closing ones `''`
//! - leading and trailing punctuation is split off
//! - only the sentence-final period is split from its word
//! - clitics are split: `It's` → `It` `'s`, `don't` → `do` `n't`
//! - hyphens and inner apostrophes stay (`by-the-bye`, `Muad'Dib`)
//! - em-dashes and `--` are separate tokens

const LEADING: &[char] = &['(', '[', '{', '<', '\u{bf}', '\u{a1}', '\u{ab}'];
const TRAILING: &[char] = &[',', ';', ':', '!', '?', ')', ']', '}', '>', '\u{bb}'];
const DOUBLE_QUOTES_OPEN: &[char] = &['"', '\u{201c}', '`'];
const DOUBLE_QUOTES_CLOSE: &[char] = &['"', '\u{201d}'];
const CLITICS: &[&str] = &["s", "re", "ve", "ll", "d", "m"];
const APOSTROPHES: &[char] = &['\'', '\u{2019}'];

/// Split a sentence into word and punctuation tokens.
pub fn split_words(sentence: &str) -> Vec<String> {
    let words: Vec<&str> = sentence.split_whitespace().collect();
    let mut out = Vec::new();
    for (i, word) in words.iter().enumerate() {
        split_dashes(word, i + 1 == words.len(), &mut out);
    }
    out
}

fn split_dashes(word: &str, sentence_final: bool, out: &mut Vec<String>) {
    let normalized = word.replace("--", "\u{2014}");
    let parts: Vec<&str> = normalized.split('\u{2014}').collect();
    let last = parts.len() - 1;
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            out.push(if word.contains("--") { "--" } else { "\u{2014}" }.to_string());
        }
        if !part.is_empty() {
            split_word(part, sentence_final && i == last, out);
        }
    }
}

fn split_word(word: &str, sentence_final: bool, out: &mut Vec<String>) {
    let mut rest = word;

    // Leading punctuation
    loop {
        let Some(c) = rest.chars().next() else { break };
        if rest.starts_with("``") {
            out.push("``".into());
            rest = &rest[2..];
        } else if DOUBLE_QUOTES_OPEN.contains(&c) {
            out.push("``".into());
            rest = &rest[c.len_utf8()..];
        } else if LEADING.contains(&c) {
            out.push(c.to_string());
            rest = &rest[c.len_utf8()..];
        } else {
            break;
        }
    }

    if !rest.is_empty() && rest.chars().all(|c| c == '.') {
        out.push(rest.to_string());
        return;
    }

    // Trailing punctuation, collected right to left
    let mut trailing = Vec::new();
    loop {
        let Some(c) = rest.chars().next_back() else { break };
        if rest.ends_with("...") && rest.len() > 3 {
            trailing.push("...".to_string());
            rest = &rest[..rest.len() - 3];
        } else if DOUBLE_QUOTES_CLOSE.contains(&c) {
            trailing.push("''".into());
            rest = &rest[..rest.len() - c.len_utf8()];
        } else if TRAILING.contains(&c) {
            trailing.push(c.to_string());
            rest = &rest[..rest.len() - c.len_utf8()];
        } else if c == '.' && sentence_final && trailing.iter().all(|t| t != ".") && rest.len() > 1 {
            trailing.push(".".into());
            rest = &rest[..rest.len() - 1];
        } else if APOSTROPHES.contains(&c)
            && rest.len() > c.len_utf8()
            && rest[..rest.len() - c.len_utf8()].ends_with(['s', 'S'])
        {
            // plural possessive: dogs'
            trailing.push("'".into());
            rest = &rest[..rest.len() - c.len_utf8()];
        } else {
            break;
        }
    }

    if !rest.is_empty() {
        split_clitics(rest, out);
    }

    out.extend(trailing.into_iter().rev());
}

fn split_clitics(word: &str, out: &mut Vec<String>) {
    let lower = word.to_lowercase();

    if lower.len() > 3 && (lower.ends_with("n't") || lower.ends_with("n\u{2019}t")) {
        let cut = word.char_indices().rev().nth(2).map(|(i, _)| i).unwrap_or(0);
        out.push(word[..cut].to_string());
        out.push(word[cut..].replace('\u{2019}', "'"));
        return;
    }

    if let Some(pos) = word.rfind(APOSTROPHES) {
        let apostrophe_len = word[pos..].chars().next().map(char::len_utf8).unwrap_or(1);
        let suffix = &word[pos + apostrophe_len..];
        if pos > 0 && CLITICS.contains(&suffix.to_lowercase().as_str()) {
            out.push(word[..pos].to_string());
            out.push(format!("'{}", suffix));
            return;
        }
    }

    out.push(word.to_string());
}
