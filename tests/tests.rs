use lazy_static::lazy_static;
use morphrule::classifier::{Classifier, TrainOptions};
use morphrule::corrector::{Corrector, NO_ERRORS};
use morphrule::features;
use morphrule::lexicon::Lexicon;
use morphrule::morph::MorphMap;
use morphrule::parse::{heuristic::HeuristicParser, segment, Parser};
use morphrule::types::{FeatureMap, Label, Sample};
use quickcheck_macros::quickcheck;
use std::fs::File;
use std::io::BufReader;

const ADJECTIVES_PATH: &str = "data/adjectives.txt";
const ADVERBS_PATH: &str = "data/adverbs.txt";
const SAMPLES_PATH: &str = "data/samples.json";

lazy_static! {
    static ref PARSER: HeuristicParser = HeuristicParser::new(
        Lexicon::from_dump(ADJECTIVES_PATH).unwrap(),
        Lexicon::from_dump(ADVERBS_PATH).unwrap(),
    );
    static ref SAMPLES: Vec<Sample> =
        serde_json::from_reader(BufReader::new(File::open(SAMPLES_PATH).unwrap())).unwrap();
}

fn morph() -> MorphMap {
    MorphMap::build(
        &Lexicon::from_dump(ADJECTIVES_PATH).unwrap(),
        &Lexicon::from_dump(ADVERBS_PATH).unwrap(),
    )
}

fn sample_features(morph: &MorphMap) -> (Vec<FeatureMap>, Vec<Label>) {
    let mut features = Vec::new();
    let mut labels = Vec::new();

    for sample in SAMPLES.iter() {
        let sentence = PARSER.parse(&sample.sentence);
        let map = features::extract(&sentence, sample.index, morph, &*PARSER)
            .expect("every bundled sample has features");
        features.push(map);
        labels.push(sample.label);
    }

    (features, labels)
}

fn corrector() -> Corrector {
    let morph = morph();
    let (features, labels) = sample_features(&morph);
    let classifier = Classifier::fit(&features, &labels, &TrainOptions::default()).unwrap();

    Corrector::from_parts(morph, classifier)
}

#[test]
fn every_bundled_sample_qualifies() {
    let morph = morph();
    let (features, labels) = sample_features(&morph);

    assert_eq!(features.len(), SAMPLES.len());
    assert_eq!(
        labels.iter().filter(|x| **x == Label::Adj).count(),
        labels.iter().filter(|x| **x == Label::Adv).count()
    );
}

#[test]
fn misused_adjective_is_corrected() {
    let words = segment("You have successful completed the project .");

    assert_eq!(
        corrector().report(&words, &*PARSER),
        "You have {successful=>successfully} completed the project ."
    );
}

#[test]
fn misused_adjective_after_an_object_is_corrected() {
    let words = segment("He smells the hot soup careful .");

    assert_eq!(
        corrector().report(&words, &*PARSER),
        "He smells the hot soup {careful=>carefully} ."
    );
}

#[test]
fn well_formed_predicative_adjective_passes() {
    let words = segment("The soup smells good .");

    assert_eq!(corrector().report(&words, &*PARSER), NO_ERRORS);
}

#[test]
fn sentence_without_a_qualifying_token_passes() {
    let corrector = corrector();
    let words = segment("The soup is on the table .");

    assert_eq!(corrector.report(&words, &*PARSER), NO_ERRORS);
    assert!(corrector.check(&words, &*PARSER).is_none());
}

#[test]
fn only_the_first_qualifying_token_is_checked() {
    // both "successful" and "careful" are misused; only the first is flagged
    let words = segment("You have successful completed the project careful .");

    let correction = corrector().check(&words, &*PARSER).unwrap();
    assert_eq!(correction.index, 2);
    assert_eq!(correction.original, "successful");
}

#[test]
fn evaluation_reports_per_label_metrics() {
    let morph = morph();
    let (features, labels) = sample_features(&morph);
    let evaluation = Classifier::evaluate(&features, &labels, &TrainOptions::default()).unwrap();

    let n_test = (features.len() as f64 * 0.2).round() as usize;
    assert_eq!(evaluation.adj.support + evaluation.adv.support, n_test);
    assert!(evaluation.accuracy > 0.0);
    assert!(!format!("{}", evaluation).is_empty());
}

#[test]
fn corrector_roundtrips_through_serialization() {
    let corrector = corrector();
    let mut buffer = Vec::new();
    corrector.to_writer(&mut buffer).unwrap();
    let reloaded = Corrector::from_reader(buffer.as_slice()).unwrap();

    let words = segment("You have successful completed the project .");
    assert_eq!(
        reloaded.report(&words, &*PARSER),
        corrector.report(&words, &*PARSER)
    );
}

#[test]
fn can_check_empty_input() {
    assert_eq!(corrector().report(&[], &*PARSER), NO_ERRORS);
}

#[quickcheck]
fn can_parse_anything(words: Vec<String>) -> bool {
    let sentence = PARSER.parse(&words);
    sentence.len() == words.len()
}

#[quickcheck]
fn adverb_derivation_never_panics(word: String) -> bool {
    let adverbs = Lexicon::from_dump(ADVERBS_PATH).unwrap();
    morphrule::morph::adverb_form(&word, &adverbs);
    true
}
