use clap::Clap;
use morphrule::corpus::{extract_samples, ExtractOptions};
use morphrule::lexicon::Lexicon;
use morphrule::morph::MorphMap;
use morphrule::parse::heuristic::HeuristicParser;
use std::{fs::File, io::BufWriter};

#[derive(Clap)]
#[clap(version = "1.0")]
struct Opts {
    /// Path to a directory of plain-text corpus files.
    input_dir: String,
    /// Path to the adjective word list.
    adjectives: String,
    /// Path to the adverb word list.
    adverbs: String,
    /// Where to write the labeled samples JSON.
    out: String,
    #[clap(long, default_value = "10000")]
    max_per_label: usize,
}

fn main() {
    env_logger::init();
    let opts = Opts::parse();

    let adjectives = Lexicon::from_dump(&opts.adjectives).unwrap();
    let adverbs = Lexicon::from_dump(&opts.adverbs).unwrap();

    let morph = MorphMap::build(&adjectives, &adverbs);
    let parser = HeuristicParser::new(adjectives, adverbs);

    let samples = extract_samples(
        &parser,
        &morph,
        &opts.input_dir,
        &ExtractOptions {
            max_per_label: opts.max_per_label,
        },
    )
    .unwrap();

    let writer = BufWriter::new(File::create(&opts.out).unwrap());
    serde_json::to_writer_pretty(writer, &samples).unwrap();

    println!("wrote {} samples to {}", samples.len(), opts.out);
}
