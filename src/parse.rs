//! The dependency parser contract and helpers built on top of it.
//!
//! The pipeline only requires the [Parser] trait: given a pre-tokenized
//! sentence, produce a [Sentence] where every token has a tag, a dependency
//! relation and a head. [heuristic::HeuristicParser] is a small deterministic
//! implementation; any other parser can be plugged in.

use crate::types::Sentence;
use unicode_segmentation::UnicodeSegmentation;

pub mod heuristic;

/// A dependency parser over pre-tokenized sentences.
pub trait Parser {
    fn parse(&self, words: &[String]) -> Sentence;
}

/// Splits raw text into word tokens, keeping punctuation as separate tokens.
pub fn segment(text: &str) -> Vec<String> {
    text.split_word_bounds()
        .map(|x| x.trim())
        .filter(|x| !x.is_empty())
        .map(|x| x.to_string())
        .collect()
}

/// Re-parses the sentence with `substitute` in place of the word at `index`
/// and returns the relation label and head lemma the substituted token gets.
///
/// This is the counterfactual probe: it observes how the syntactic attachment
/// of a position changes when the word surfaces as the other part of speech.
pub fn probe<P: Parser + ?Sized>(
    parser: &P,
    words: &[String],
    index: usize,
    substitute: &str,
) -> Option<(String, String)> {
    let mut probe_words = words.to_vec();
    *probe_words.get_mut(index)? = substitute.to_string();

    let sentence = parser.parse(&probe_words);
    let token = sentence.get(index)?;
    let head = sentence.head_of(index)?;

    Some((token.dep.clone(), head.lemma.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_keeps_punctuation() {
        assert_eq!(
            segment("The soup smells good."),
            vec!["The", "soup", "smells", "good", "."]
        );
    }

    #[test]
    fn segment_of_empty_text_is_empty() {
        assert!(segment("").is_empty());
        assert!(segment("   ").is_empty());
    }
}
