//! Fundamental types used by this crate.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Sentinel value for the left neighbor of the first token.
pub const SENT_START: &str = "SENT_START";
/// Sentinel value for the right neighbor of the last token.
pub const SENT_END: &str = "SENT_END";

/// A flat mapping from feature name to feature value, built per token of interest.
pub type FeatureMap = BTreeMap<String, String>;

/// Usage label of a token: should the word surface as an adjective or an adverb?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    #[serde(rename = "ADJ")]
    Adj,
    #[serde(rename = "ADV")]
    Adv,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Adj => "ADJ",
            Label::Adv => "ADV",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A labeled training sample: a tokenized sentence and the index of the
/// adjective or adverb it was extracted for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sample {
    pub sentence: Vec<String>,
    #[serde(rename = "ind")]
    pub index: usize,
    pub label: Label,
}

/// One token of a dependency parse.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedToken {
    /// Surface text.
    pub text: String,
    /// Part-of-speech tag in Penn Treebank style, e. g. "JJ", "RB", "VBD".
    pub tag: String,
    /// Relation label to the syntactic head.
    pub dep: String,
    /// Index of the head token. The root points to itself.
    pub head: usize,
    /// Base form of the word.
    pub lemma: String,
}

impl ParsedToken {
    pub fn is_adjective(&self) -> bool {
        self.tag == "JJ"
    }

    pub fn is_adverb(&self) -> bool {
        self.tag == "RB"
    }

    pub fn is_verb(&self) -> bool {
        self.tag.starts_with("VB")
    }
}

/// A dependency-parsed sentence.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sentence {
    tokens: Vec<ParsedToken>,
}

impl Sentence {
    pub fn new(tokens: Vec<ParsedToken>) -> Self {
        Sentence { tokens }
    }

    pub fn tokens(&self) -> &[ParsedToken] {
        &self.tokens
    }

    pub fn get(&self, index: usize) -> Option<&ParsedToken> {
        self.tokens.get(index)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The head token of the token at `index`.
    pub fn head_of(&self, index: usize) -> Option<&ParsedToken> {
        self.tokens.get(index).and_then(|x| self.tokens.get(x.head))
    }

    /// The syntactic dependents of the token at `index`, in sentence order.
    pub fn children(&self, index: usize) -> impl Iterator<Item = &ParsedToken> {
        self.tokens
            .iter()
            .enumerate()
            .filter(move |(i, token)| token.head == index && *i != index)
            .map(|(_, token)| token)
    }

    pub fn words(&self) -> Vec<String> {
        self.tokens.iter().map(|x| x.text.clone()).collect()
    }
}

/// A single-word correction in a tokenized sentence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Correction {
    /// Index of the corrected token.
    pub index: usize,
    /// The token as it occured in the input.
    pub original: String,
    /// The suggested replacement.
    pub replacement: String,
}

impl Correction {
    /// Renders the sentence with the substitution marked, e. g.
    /// `You have {successful=>successfully} completed the project .`
    pub fn render(&self, words: &[String]) -> String {
        use itertools::Itertools;

        words
            .iter()
            .enumerate()
            .map(|(i, word)| {
                if i == self.index {
                    format!("{{{}=>{}}}", self.original, self.replacement)
                } else {
                    word.clone()
                }
            })
            .join(" ")
    }
}
