use clap::Clap;
use morphrule::corrector::Corrector;
use morphrule::lexicon::Lexicon;
use morphrule::parse::{heuristic::HeuristicParser, segment};

#[derive(Clap)]
#[clap(version = "1.0")]
struct Opts {
    text: String,
    #[clap(long, short)]
    corrector: String,
    #[clap(long)]
    adjectives: String,
    #[clap(long)]
    adverbs: String,
}

fn main() {
    env_logger::init();
    let opts = Opts::parse();

    let corrector = Corrector::new(&opts.corrector).unwrap();
    let parser = HeuristicParser::new(
        Lexicon::from_dump(&opts.adjectives).unwrap(),
        Lexicon::from_dump(&opts.adverbs).unwrap(),
    );

    println!("{}", corrector.report(&segment(&opts.text), &parser));
}
