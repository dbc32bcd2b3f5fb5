//! Per-token feature extraction for the adjective/adverb classifier.

use crate::morph::MorphMap;
use crate::parse::{probe, Parser};
use crate::types::{FeatureMap, Sentence, SENT_END, SENT_START};

/// Builds the feature mapping for the token at `index`, or `None` if the token
/// is neither an adjective with a known adverb form nor an adverb with a known
/// adjective form.
///
/// Always-present features: the left and right neighbor (`prev` / `next`,
/// with sentence-boundary sentinels) and one entry per syntactic dependent,
/// keyed by its relation label. Dependents sharing a relation label overwrite
/// each other, the last one wins.
///
/// For qualifying tokens, both surface forms are recorded together with the
/// relation + head lemma of the token as parsed, and of the token as it would
/// be parsed with the other form substituted in its place. The counterfactual
/// costs one extra parse per call and is the most informative signal for
/// disambiguation.
pub fn extract<P: Parser + ?Sized>(
    sentence: &Sentence,
    index: usize,
    morph: &MorphMap,
    parser: &P,
) -> Option<FeatureMap> {
    let token = sentence.get(index)?;

    let mut features = FeatureMap::new();

    let prev = if index == 0 {
        SENT_START.to_string()
    } else {
        sentence.get(index - 1)?.text.clone()
    };
    let next = match sentence.get(index + 1) {
        Some(token) => token.text.clone(),
        None => SENT_END.to_string(),
    };
    features.insert("prev".to_string(), prev);
    features.insert("next".to_string(), next);

    for child in sentence.children(index) {
        features.insert(child.dep.clone(), child.text.clone());
    }

    let head_lemma = sentence.head_of(index)?.lemma.clone();
    let dep = format!("{}+{}", token.dep, head_lemma);
    let words = sentence.words();

    if token.is_adjective() {
        let adverb = morph.adj_to_adv(&token.text)?;
        let (probe_dep, probe_lemma) = probe(parser, &words, index, adverb)?;

        features.insert("adjective".to_string(), token.text.clone());
        features.insert("adverb".to_string(), adverb.to_string());
        features.insert("dep".to_string(), dep);
        features.insert(
            "dep_if_adv".to_string(),
            format!("{}+{}", probe_dep, probe_lemma),
        );
    } else if token.is_adverb() {
        let adjective = morph.adv_to_adj(&token.text)?;
        let (probe_dep, probe_lemma) = probe(parser, &words, index, adjective)?;

        features.insert("adverb".to_string(), token.text.clone());
        features.insert("adjective".to_string(), adjective.to_string());
        features.insert("dep".to_string(), dep);
        features.insert(
            "dep_if_adj".to_string(),
            format!("{}+{}", probe_dep, probe_lemma),
        );
    } else {
        return None;
    }

    Some(features)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Lexicon;
    use crate::morph::MorphMap;
    use crate::parse::heuristic::HeuristicParser;
    use crate::parse::segment;

    fn fixtures() -> (HeuristicParser, MorphMap) {
        let adjectives =
            Lexicon::from_words(vec!["successful", "good", "careful", "hot", "happy"]);
        let adverbs =
            Lexicon::from_words(vec!["successfully", "well", "carefully", "happily"]);
        let morph = MorphMap::build(&adjectives, &adverbs);

        (HeuristicParser::new(adjectives, adverbs), morph)
    }

    #[test]
    fn adjective_features_include_the_counterfactual_attachment() {
        let (parser, morph) = fixtures();
        let words = segment("You have successful completed the project .");
        let sentence = parser.parse(&words);

        let features = extract(&sentence, 2, &morph, &parser).unwrap();

        assert_eq!(features["prev"], "have");
        assert_eq!(features["next"], "completed");
        assert_eq!(features["adjective"], "successful");
        assert_eq!(features["adverb"], "successfully");
        assert_eq!(features["dep"], "acomp+complete");
        assert_eq!(features["dep_if_adv"], "advmod+complete");
    }

    #[test]
    fn adverb_features_are_symmetric() {
        let (parser, morph) = fixtures();
        let words = segment("He smells the hot soup carefully .");
        let sentence = parser.parse(&words);

        let features = extract(&sentence, 5, &morph, &parser).unwrap();

        assert_eq!(features["prev"], "soup");
        assert_eq!(features["adverb"], "carefully");
        assert_eq!(features["adjective"], "careful");
        assert_eq!(features["dep"], "advmod+smell");
        assert_eq!(features["dep_if_adj"], "acomp+smell");
    }

    #[test]
    fn boundary_tokens_use_sentinels() {
        let (parser, morph) = fixtures();
        let words = segment("good work");
        let sentence = parser.parse(&words);

        let features = extract(&sentence, 0, &morph, &parser).unwrap();
        assert_eq!(features["prev"], SENT_START);
        assert_eq!(features["next"], "work");
    }

    #[test]
    fn unqualified_tokens_yield_no_features() {
        let (parser, morph) = fixtures();
        let words = segment("The soup smells good .");
        let sentence = parser.parse(&words);

        // "soup" is a noun, "smells" a verb: neither qualifies
        assert!(extract(&sentence, 1, &morph, &parser).is_none());
        assert!(extract(&sentence, 2, &morph, &parser).is_none());
        // "hot" has no adverb form in the lexicon
        let words = segment("The hot soup smells good .");
        let sentence = parser.parse(&words);
        assert!(extract(&sentence, 1, &morph, &parser).is_none());
    }
}
