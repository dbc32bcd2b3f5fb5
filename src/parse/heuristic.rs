//! A deterministic lexicon-driven parser.
//!
//! Tags come from closed-class word tables, the adjective/adverb lexicons and
//! suffix heuristics; heads are attached with a handful of positional rules
//! (subjects before the main verb, objects after it, adverbs to the nearest
//! verb). This is not a general English parser, but it is deterministic and
//! covers the sentence shapes the classifier is trained on.

use super::Parser;
use crate::lexicon::Lexicon;
use crate::types::{ParsedToken, Sentence};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

lazy_static! {
    static ref DETERMINERS: HashSet<&'static str> =
        ["the", "a", "an", "this", "that", "these", "those"]
            .iter()
            .copied()
            .collect();
    static ref PRONOUNS: HashSet<&'static str> =
        ["i", "you", "he", "she", "it", "we", "they"]
            .iter()
            .copied()
            .collect();
    static ref AUXILIARIES: HashMap<&'static str, &'static str> = [
        ("am", "VBP"),
        ("is", "VBZ"),
        ("are", "VBP"),
        ("was", "VBD"),
        ("were", "VBD"),
        ("be", "VB"),
        ("been", "VBN"),
        ("being", "VBG"),
        ("have", "VBP"),
        ("has", "VBZ"),
        ("had", "VBD"),
        ("do", "VBP"),
        ("does", "VBZ"),
        ("did", "VBD"),
    ]
    .iter()
    .copied()
    .collect();
    static ref MODALS: HashSet<&'static str> = [
        "can", "could", "will", "would", "shall", "should", "may", "might", "must"
    ]
    .iter()
    .copied()
    .collect();
    static ref PREPOSITIONS: HashSet<&'static str> = [
        "in", "on", "at", "of", "to", "for", "with", "from", "by", "about", "into", "over",
        "after", "before", "under"
    ]
    .iter()
    .copied()
    .collect();
    static ref CONJUNCTIONS: HashSet<&'static str> =
        ["and", "or", "but"].iter().copied().collect();
    // auxiliaries that signal a following participle
    static ref PERFECT_AUXILIARIES: HashSet<&'static str> = [
        "have", "has", "had", "been", "be", "being", "am", "is", "are", "was", "were"
    ]
    .iter()
    .copied()
    .collect();
}

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// Parser over closed-class tables, the two lexicons and suffix heuristics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeuristicParser {
    adjectives: Lexicon,
    adverbs: Lexicon,
}

impl HeuristicParser {
    pub fn new(adjectives: Lexicon, adverbs: Lexicon) -> Self {
        HeuristicParser {
            adjectives,
            adverbs,
        }
    }

    fn tag(&self, words: &[String]) -> Vec<String> {
        let mut tags: Vec<String> = Vec::with_capacity(words.len());
        let mut seen_verb = false;
        let mut seen_subject = false;
        let mut seen_perfect_aux = false;

        for word in words {
            let lower = word.to_lowercase();

            let tag = if lower.is_empty() {
                "UNKNOWN".to_string()
            } else if lower.chars().all(|c| !c.is_alphanumeric()) {
                ".".to_string()
            } else if DETERMINERS.contains(lower.as_str()) {
                "DT".to_string()
            } else if PRONOUNS.contains(lower.as_str()) {
                "PRP".to_string()
            } else if let Some(tag) = AUXILIARIES.get(lower.as_str()) {
                (*tag).to_string()
            } else if MODALS.contains(lower.as_str()) {
                "MD".to_string()
            } else if PREPOSITIONS.contains(lower.as_str()) {
                "IN".to_string()
            } else if CONJUNCTIONS.contains(lower.as_str()) {
                "CC".to_string()
            } else if self.adverbs.contains(&lower) || lower.ends_with("ly") {
                "RB".to_string()
            } else if self.adjectives.contains(&lower) {
                "JJ".to_string()
            } else if lower.len() > 4 && lower.ends_with("ing") {
                "VBG".to_string()
            } else if lower.len() > 3 && lower.ends_with("ed") {
                if seen_perfect_aux {
                    "VBN".to_string()
                } else {
                    "VBD".to_string()
                }
            } else if lower.len() > 2
                && lower.ends_with('s')
                && !lower.ends_with("ss")
                && seen_subject
                && !seen_verb
            {
                "VBZ".to_string()
            } else if lower.len() > 2 && lower.ends_with('s') && !lower.ends_with("ss") {
                "NNS".to_string()
            } else {
                "NN".to_string()
            };

            seen_verb |= tag.starts_with("VB") || tag == "MD";
            seen_subject |= matches!(tag.as_str(), "DT" | "PRP" | "NN" | "NNS");
            seen_perfect_aux |= PERFECT_AUXILIARIES.contains(lower.as_str());

            tags.push(tag);
        }

        tags
    }

    /// The nearest verb to position `i`, preferring the right side on ties.
    fn nearest_verb(tags: &[String], i: usize) -> Option<usize> {
        for distance in 1..tags.len() {
            let right = i + distance;
            if right < tags.len() && (tags[right].starts_with("VB") || tags[right] == "MD") {
                return Some(right);
            }
            if let Some(left) = i.checked_sub(distance) {
                if tags[left].starts_with("VB") || tags[left] == "MD" {
                    return Some(left);
                }
            }
        }

        None
    }

    fn attach(tags: &[String]) -> Vec<(String, usize)> {
        // the last verb of the sentence governs; auxiliaries lean on it
        let root = tags
            .iter()
            .rposition(|tag| tag.starts_with("VB"))
            .or_else(|| tags.iter().rposition(|tag| tag != "."))
            .unwrap_or(0);

        tags.iter()
            .enumerate()
            .map(|(i, tag)| {
                if i == root {
                    return ("ROOT".to_string(), i);
                }

                match tag.as_str() {
                    t if t.starts_with("VB") || t == "MD" => ("aux".to_string(), root),
                    "DT" => {
                        let noun = tags[i + 1..]
                            .iter()
                            .position(|t| t.starts_with("NN"))
                            .map(|offset| i + 1 + offset);
                        ("det".to_string(), noun.unwrap_or(root))
                    }
                    "JJ" => {
                        if tags.get(i + 1).map_or(false, |t| t.starts_with("NN")) {
                            ("amod".to_string(), i + 1)
                        } else {
                            ("acomp".to_string(), root)
                        }
                    }
                    "RB" => (
                        "advmod".to_string(),
                        Self::nearest_verb(tags, i).unwrap_or(root),
                    ),
                    "PRP" => {
                        if i < root {
                            ("nsubj".to_string(), root)
                        } else {
                            ("dobj".to_string(), root)
                        }
                    }
                    t if t.starts_with("NN") => {
                        if i < root {
                            ("nsubj".to_string(), root)
                        } else if let Some(prep) = Self::governing_preposition(tags, i) {
                            ("pobj".to_string(), prep)
                        } else {
                            ("dobj".to_string(), root)
                        }
                    }
                    "IN" => ("prep".to_string(), root),
                    "CC" => ("cc".to_string(), root),
                    "." => ("punct".to_string(), root),
                    _ => ("dep".to_string(), root),
                }
            })
            .collect()
    }

    /// Walks left over the noun phrase; a preposition directly in front of it
    /// governs the noun.
    fn governing_preposition(tags: &[String], i: usize) -> Option<usize> {
        let mut j = i;
        while j > 0 {
            j -= 1;
            match tags[j].as_str() {
                "DT" | "JJ" => continue,
                t if t.starts_with("NN") => continue,
                "IN" => return Some(j),
                _ => return None,
            }
        }

        None
    }

    fn lemma(lower: &str, tag: &str) -> String {
        if tag.starts_with("VB") {
            if let Some(stem) = lower.strip_suffix("ies") {
                return format!("{}y", stem);
            }
            if let Some(stem) = lower.strip_suffix("ied") {
                return format!("{}y", stem);
            }
            if lower.ends_with('s') && !lower.ends_with("ss") && lower.len() > 2 {
                return lower[..lower.len() - 1].to_string();
            }
            if let Some(stem) = lower.strip_suffix("ing") {
                if stem.len() > 1 {
                    return Self::restore_stem(stem);
                }
            }
            if let Some(stem) = lower.strip_suffix("ed") {
                if stem.len() > 1 {
                    return Self::restore_stem(stem);
                }
            }
        } else if tag == "NNS" {
            if let Some(stem) = lower.strip_suffix("ies") {
                return format!("{}y", stem);
            }
            if lower.ends_with('s') && !lower.ends_with("ss") && lower.len() > 2 {
                return lower[..lower.len() - 1].to_string();
            }
        }

        lower.to_string()
    }

    /// Approximate stem repair after stripping "ed"/"ing": undo consonant
    /// doubling ("stopped" => "stop") and restore a dropped final "e"
    /// ("completed" => "complete").
    fn restore_stem(stem: &str) -> String {
        let chars: Vec<char> = stem.chars().collect();
        let n = chars.len();

        if n >= 2 && chars[n - 1] == chars[n - 2] && "bdgmnprt".contains(chars[n - 1]) {
            return chars[..n - 1].iter().collect();
        }
        if n >= 2 && "tsvzcg".contains(chars[n - 1]) && VOWELS.contains(&chars[n - 2]) {
            return format!("{}e", stem);
        }

        stem.to_string()
    }
}

impl Parser for HeuristicParser {
    fn parse(&self, words: &[String]) -> Sentence {
        if words.is_empty() {
            return Sentence::default();
        }

        let tags = self.tag(words);
        let attachments = Self::attach(&tags);

        let tokens = words
            .iter()
            .zip(tags.iter())
            .zip(attachments)
            .map(|((word, tag), (dep, head))| ParsedToken {
                text: word.clone(),
                lemma: Self::lemma(&word.to_lowercase(), tag),
                tag: tag.clone(),
                dep,
                head,
            })
            .collect();

        Sentence::new(tokens)
    }
}
