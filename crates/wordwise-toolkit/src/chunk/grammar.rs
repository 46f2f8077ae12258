//! Regular-expression chunk grammars.
//!
//! A grammar is a list of stages, each a label followed by rules:
//!
//! ```text
//! NP: {<DT>?<JJ>*<NN>}     # chunk: determiner, adjectives, noun
//! Chunk: {<.*>+}
//!        }<JJ>{            # chink: drop adjectives from chunks
//! ```
//!
//! Tag patterns are written in `<TAG>` units combined with regex operators.
//! Inside angle brackets `.` matches any tag character. Every stage wraps its
//! chunks in a subtree carrying the stage label; later stages see those
//! subtrees as single items tagged with the label.

use std::collections::HashMap;

use regex::Regex;
use wordwise_core::{NlpError, NlpResult, TaggedToken, Tree, ROOT_LABEL};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// `{pattern}`: group matching unchunked items
    Chunk,
    /// `}pattern{`: remove matching items from chunks
    Chink,
}

#[derive(Debug, Clone)]
pub struct ChunkRule {
    pub kind: RuleKind,
    /// Tag pattern as written in the grammar
    pub pattern: String,
    regex: Regex,
}

impl ChunkRule {
    pub fn new(kind: RuleKind, pattern: &str) -> NlpResult<Self> {
        let regex = Regex::new(&tag_pattern_to_regex(pattern)?)
            .map_err(|e| NlpError::InvalidGrammar(format!("{}: {}", pattern, e)))?;
        Ok(Self {
            kind,
            pattern: pattern.to_string(),
            regex,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ChunkStage {
    pub label: String,
    pub rules: Vec<ChunkRule>,
}

/// Chunk parser driven by a tag-pattern grammar.
#[derive(Debug, Clone)]
pub struct RegexpParser {
    stages: Vec<ChunkStage>,
}

impl RegexpParser {
    /// Parse a grammar.
    pub fn new(grammar: &str) -> NlpResult<Self> {
        let mut stages: Vec<ChunkStage> = Vec::new();

        for raw_line in grammar.lines() {
            let line = strip_comment(raw_line).trim();
            if line.is_empty() {
                continue;
            }

            let rules_part = match split_label(line) {
                Some((label, rest)) => {
                    stages.push(ChunkStage {
                        label: label.to_string(),
                        rules: Vec::new(),
                    });
                    rest
                }
                None => line,
            };

            let stage = stages.last_mut().ok_or_else(|| {
                NlpError::InvalidGrammar(format!("rule before any label: {}", line))
            })?;
            stage.rules.extend(parse_rules(rules_part)?);
        }

        if stages.is_empty() {
            return Err(NlpError::InvalidGrammar("grammar has no stages".into()));
        }
        if let Some(empty) = stages.iter().find(|s| s.rules.is_empty()) {
            return Err(NlpError::InvalidGrammar(format!(
                "stage '{}' has no rules",
                empty.label
            )));
        }

        Ok(Self { stages })
    }

    pub fn stages(&self) -> &[ChunkStage] {
        &self.stages
    }

    /// Chunk `tagged` into a tree rooted at `S`.
    pub fn parse(&self, tagged: &[TaggedToken]) -> Tree {
        let mut items: Vec<Tree> = tagged.iter().cloned().map(Tree::Leaf).collect();
        for stage in &self.stages {
            items = stage.apply(items);
        }
        Tree::subtree(ROOT_LABEL, items)
    }
}

impl ChunkStage {
    fn apply(&self, items: Vec<Tree>) -> Vec<Tree> {
        let tags: Vec<&str> = items.iter().map(item_tag).collect();
        let mut groups: Vec<Option<usize>> = vec![None; items.len()];
        let mut next_group = 0;

        for rule in &self.rules {
            match rule.kind {
                RuleKind::Chunk => {
                    for (start, end) in runs(&groups, |g| g.is_none()) {
                        for (s, e) in match_items(&rule.regex, &tags[start..end]) {
                            for group in &mut groups[start + s..start + e] {
                                *group = Some(next_group);
                            }
                            next_group += 1;
                        }
                    }
                }
                RuleKind::Chink => {
                    for (start, end) in runs(&groups, |g| g.is_some()) {
                        for (s, e) in match_items(&rule.regex, &tags[start..end]) {
                            for group in &mut groups[start + s..start + e] {
                                *group = None;
                            }
                        }
                    }
                }
            }
        }

        let mut out = Vec::new();
        let mut current: Option<(usize, Vec<Tree>)> = None;
        for (item, group) in items.into_iter().zip(groups) {
            match (group, current.as_mut()) {
                (Some(g), Some((cg, children))) if *cg == g => children.push(item),
                (Some(g), _) => {
                    if let Some((_, children)) = current.take() {
                        out.push(Tree::subtree(self.label.clone(), children));
                    }
                    current = Some((g, vec![item]));
                }
                (None, _) => {
                    if let Some((_, children)) = current.take() {
                        out.push(Tree::subtree(self.label.clone(), children));
                    }
                    out.push(item);
                }
            }
        }
        if let Some((_, children)) = current {
            out.push(Tree::subtree(self.label.clone(), children));
        }
        out
    }
}

fn item_tag(item: &Tree) -> &str {
    match item {
        Tree::Leaf(tagged) => tagged.tag.as_str(),
        Tree::Subtree { label, .. } => label,
    }
}

/// Maximal runs of chunk membership satisfying `pred`, with chink rules
/// treating each distinct group as its own run.
fn runs(groups: &[Option<usize>], pred: impl Fn(&Option<usize>) -> bool) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    let mut i = 0;
    while i < groups.len() {
        if !pred(&groups[i]) {
            i += 1;
            continue;
        }
        let start = i;
        while i < groups.len() && pred(&groups[i]) && groups[i] == groups[start] {
            i += 1;
        }
        out.push((start, i));
    }
    out
}

/// Item ranges matched by `regex` over `<TAG>` strings, non-overlapping,
/// leftmost first. Matches not aligned to item boundaries are dropped.
fn match_items(regex: &Regex, tags: &[&str]) -> Vec<(usize, usize)> {
    let mut text = String::new();
    let mut starts = HashMap::new();
    let mut ends = HashMap::new();
    for (i, tag) in tags.iter().enumerate() {
        starts.insert(text.len(), i);
        text.push('<');
        text.push_str(tag);
        text.push('>');
        ends.insert(text.len(), i + 1);
    }

    regex
        .find_iter(&text)
        .filter(|m| !m.as_str().is_empty())
        .filter_map(|m| Some((*starts.get(&m.start())?, *ends.get(&m.end())?)))
        .collect()
}

/// Text before the first `#` outside angle brackets; `<#>` is a tag.
fn strip_comment(line: &str) -> &str {
    let mut inside = false;
    for (i, c) in line.char_indices() {
        match c {
            '<' => inside = true,
            '>' => inside = false,
            '#' if !inside => return &line[..i],
            _ => {}
        }
    }
    line
}

/// `NP: {...}` → `Some(("NP", "{...}"))`.
fn split_label(line: &str) -> Option<(&str, &str)> {
    let colon = line.find(':')?;
    let first_rule_char = line.find(['{', '}', '<']).unwrap_or(line.len());
    if colon > first_rule_char {
        return None;
    }
    let label = line[..colon].trim();
    let valid = !label.is_empty()
        && label
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '-');
    valid.then(|| (label, line[colon + 1..].trim()))
}

fn parse_rules(mut rest: &str) -> NlpResult<Vec<ChunkRule>> {
    let mut rules = Vec::new();
    loop {
        rest = rest.trim_start();
        if rest.is_empty() {
            return Ok(rules);
        }
        let (kind, close) = if rest.starts_with('{') {
            (RuleKind::Chunk, '}')
        } else if rest.starts_with('}') {
            (RuleKind::Chink, '{')
        } else {
            return Err(NlpError::InvalidGrammar(format!("expected rule at: {}", rest)));
        };
        let body_end = rest[1..]
            .find(close)
            .ok_or_else(|| NlpError::InvalidGrammar(format!("unterminated rule: {}", rest)))?;
        rules.push(ChunkRule::new(kind, &rest[1..1 + body_end])?);
        rest = &rest[body_end + 2..];
    }
}

/// Translate a tag pattern into a regex over `<TAG>` strings.
pub fn tag_pattern_to_regex(pattern: &str) -> NlpResult<String> {
    let compact: String = pattern.chars().filter(|c| !c.is_whitespace()).collect();
    if !compact.contains('<') {
        return Err(NlpError::InvalidGrammar(format!(
            "tag pattern needs <TAG> units: {}",
            pattern
        )));
    }

    let mut out = String::with_capacity(compact.len() * 2);
    let mut inside = false;
    for c in compact.chars() {
        match (c, inside) {
            ('<', false) => {
                inside = true;
                out.push_str("(?:<(?:");
            }
            ('>', true) => {
                inside = false;
                out.push_str(")>)");
            }
            ('<', true) | ('>', false) | ('{', _) | ('}', _) => {
                return Err(NlpError::InvalidGrammar(format!(
                    "unbalanced tag pattern: {}",
                    pattern
                )));
            }
            ('.', true) => out.push_str(r"[^{}<>]"),
            (c, _) => out.push(c),
        }
    }
    if inside {
        return Err(NlpError::InvalidGrammar(format!(
            "unbalanced tag pattern: {}",
            pattern
        )));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordwise_core::{PosTag, Token};

    fn tagged(pairs: &[(&str, PosTag)]) -> Vec<TaggedToken> {
        pairs
            .iter()
            .enumerate()
            .map(|(i, (w, t))| TaggedToken::new(Token::new(*w, i, 0), *t))
            .collect()
    }

    fn frodo() -> Vec<TaggedToken> {
        use PosTag::*;
        tagged(&[
            ("It", Pronoun),
            ("'s", VerbThirdPerson),
            ("a", Determiner),
            ("dangerous", Adjective),
            ("business", Noun),
            (",", Comma),
            ("Frodo", ProperNoun),
            (",", Comma),
            ("going", VerbGerund),
            ("out", Particle),
            ("your", PossessivePronoun),
            ("door", Noun),
            (".", SentenceFinal),
        ])
    }

    #[test]
    fn test_pattern_translation() {
        assert_eq!(
            tag_pattern_to_regex("<DT>?<JJ>*<NN>").unwrap(),
            "(?:<(?:DT)>)?(?:<(?:JJ)>)*(?:<(?:NN)>)"
        );
        assert_eq!(
            tag_pattern_to_regex("<.*>+").unwrap(),
            "(?:<(?:[^{}<>]*)>)+"
        );
        assert!(tag_pattern_to_regex("DT").is_err());
        assert!(tag_pattern_to_regex("<DT").is_err());
        assert!(tag_pattern_to_regex("<D<T>>").is_err());
    }

    #[test]
    fn test_noun_phrase_chunking() {
        let parser = RegexpParser::new("NP: {<DT>?<JJ>*<NN>}").unwrap();
        let tree = parser.parse(&frodo());

        let phrases: Vec<String> = tree.subtrees_labelled("NP").map(Tree::surface).collect();
        assert_eq!(phrases, vec!["a dangerous business", "door"]);
        assert_eq!(
            tree.to_string(),
            "(S It/PRP 's/VBZ (NP a/DT dangerous/JJ business/NN) ,/, Frodo/NNP ,/, \
             going/VBG out/RP your/PRP$ (NP door/NN) ./.)"
        );
    }

    #[test]
    fn test_chinking_splits_chunk() {
        let grammar = "
            Chunk: {<.*>+}
                   }<JJ>{";
        let parser = RegexpParser::new(grammar).unwrap();
        let tree = parser.parse(&frodo());

        let chunks: Vec<String> = tree.subtrees_labelled("Chunk").map(Tree::surface).collect();
        assert_eq!(
            chunks,
            vec!["It 's a", "business , Frodo , going out your door ."]
        );
        // the adjective is left outside every chunk
        assert_eq!(tree.children()[1], Tree::Leaf(frodo()[3].clone()));
    }

    #[test]
    fn test_multi_stage_sees_previous_labels() {
        let grammar = "
            NP: {<DT>?<JJ>*<NN>}   # noun phrases
            VP: {<VBG><RP><PRP\\$><NP>}";
        let parser = RegexpParser::new(grammar).unwrap();
        let tree = parser.parse(&frodo());

        let vp: Vec<&Tree> = tree.subtrees_labelled("VP").collect();
        assert_eq!(vp.len(), 1);
        assert_eq!(vp[0].surface(), "going out your door");
        assert_eq!(vp[0].subtrees_labelled("NP").count(), 1);
    }

    #[test]
    fn test_adjacent_chunks_stay_separate() {
        use PosTag::*;
        let parser = RegexpParser::new("NP: {<NN>}").unwrap();
        let tree = parser.parse(&tagged(&[("war", Noun), ("star", Noun)]));
        assert_eq!(tree.subtrees_labelled("NP").count(), 2);
    }

    #[test]
    fn test_invalid_grammars() {
        assert!(matches!(RegexpParser::new(""), Err(NlpError::InvalidGrammar(_))));
        assert!(matches!(RegexpParser::new("{<NN>}"), Err(NlpError::InvalidGrammar(_))));
        assert!(matches!(RegexpParser::new("NP:"), Err(NlpError::InvalidGrammar(_))));
        assert!(matches!(RegexpParser::new("NP: {<NN>"), Err(NlpError::InvalidGrammar(_))));
        assert!(matches!(RegexpParser::new("NP: <NN>"), Err(NlpError::InvalidGrammar(_))));
        assert!(matches!(RegexpParser::new("NP: {<NN>(}"), Err(NlpError::InvalidGrammar(_))));
    }

    #[test]
    fn test_pound_tag_in_pattern() {
        use PosTag::*;
        let parser = RegexpParser::new("POUND: {<#><CD>}   # amounts in pounds").unwrap();
        let tree = parser.parse(&tagged(&[("cost", Noun), ("#", Pound), ("50", Cardinal)]));

        let chunks: Vec<String> = tree.subtrees_labelled("POUND").map(Tree::surface).collect();
        assert_eq!(chunks, vec!["# 50"]);
        assert_eq!(strip_comment("NP: {<NN>} # note"), "NP: {<NN>} ");
        assert_eq!(strip_comment("X: {<#>}"), "X: {<#>}");
    }

    #[test]
    fn test_stage_labels() {
        let parser = RegexpParser::new("NP: {<NN>}\nPP: {<IN><NP>}").unwrap();
        let labels: Vec<&str> = parser.stages().iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["NP", "PP"]);
        assert_eq!(parser.stages()[0].rules[0].kind, RuleKind::Chunk);
    }
}
