use clap::Clap;
use morphrule::classifier::{Classifier, TrainOptions};
use morphrule::corrector::Corrector;
use morphrule::features;
use morphrule::lexicon::Lexicon;
use morphrule::morph::MorphMap;
use morphrule::parse::{heuristic::HeuristicParser, Parser};
use morphrule::types::{FeatureMap, Label, Sample};
use std::{
    fs::File,
    io::{BufReader, BufWriter},
};

#[derive(Clap)]
#[clap(version = "1.0")]
struct Opts {
    /// Path to the adjective word list.
    adjectives: String,
    /// Path to the adverb word list.
    adverbs: String,
    /// Path to the labeled samples JSON.
    samples: String,
    /// Where to write the trained corrector binary.
    out: String,
    #[clap(long, default_value = "200")]
    epochs: usize,
    #[clap(long, default_value = "0.2")]
    test_fraction: f64,
    #[clap(long, default_value = "42")]
    seed: u64,
}

fn main() {
    env_logger::init();
    let opts = Opts::parse();

    let adjectives = Lexicon::from_dump(&opts.adjectives).unwrap();
    let adverbs = Lexicon::from_dump(&opts.adverbs).unwrap();

    let morph = MorphMap::build(&adjectives, &adverbs);
    let parser = HeuristicParser::new(adjectives, adverbs);

    let samples: Vec<Sample> =
        serde_json::from_reader(BufReader::new(File::open(&opts.samples).unwrap())).unwrap();

    let mut features: Vec<FeatureMap> = Vec::new();
    let mut labels: Vec<Label> = Vec::new();
    let mut skipped = 0usize;

    for sample in &samples {
        let sentence = parser.parse(&sample.sentence);
        match features::extract(&sentence, sample.index, &morph, &parser) {
            Some(map) => {
                features.push(map);
                labels.push(sample.label);
            }
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        log::warn!("skipped {} samples without features", skipped);
    }

    let options = TrainOptions {
        epochs: opts.epochs,
        test_fraction: opts.test_fraction,
        seed: opts.seed,
        ..TrainOptions::default()
    };

    let evaluation = Classifier::evaluate(&features, &labels, &options).unwrap();
    println!("{}", evaluation);

    let classifier = Classifier::fit(&features, &labels, &options).unwrap();
    let corrector = Corrector::from_parts(morph, classifier);

    let writer = BufWriter::new(File::create(&opts.out).unwrap());
    corrector.to_writer(writer).unwrap();
}
