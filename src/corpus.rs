//! Extraction of labeled training samples from a plain-text corpus.

use crate::morph::MorphMap;
use crate::parse::{segment, Parser};
use crate::types::{Label, Sample};
use log::info;
use std::fs::{read_dir, File};
use std::io::BufRead;
use std::path::Path;

/// Options for sample extraction.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Cap on the number of samples collected per label.
    pub max_per_label: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        ExtractOptions {
            max_per_label: 10_000,
        }
    }
}

/// Scans a directory of plain-text files for sentences in which an adjective
/// or adverb with a known counterpart modifies a verb, one sentence per line.
///
/// Empty lines and markup lines starting with `<` are skipped. Returns the
/// adjective samples followed by the adverb samples, each capped at
/// [ExtractOptions::max_per_label].
pub fn extract_samples<P: Parser + ?Sized, Q: AsRef<Path>>(
    parser: &P,
    morph: &MorphMap,
    dir: Q,
    options: &ExtractOptions,
) -> Result<Vec<Sample>, std::io::Error> {
    let mut adj: Vec<Sample> = Vec::new();
    let mut adv: Vec<Sample> = Vec::new();

    let mut paths: Vec<_> = read_dir(dir)?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .map(|entry| entry.path())
        .collect();
    paths.sort();

    for path in paths {
        if adj.len() >= options.max_per_label && adv.len() >= options.max_per_label {
            break;
        }

        info!("scanning {}", path.display());
        let reader = std::io::BufReader::new(File::open(&path)?);

        for line in reader.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('<') {
                continue;
            }

            let words = segment(line);
            let sentence = parser.parse(&words);

            for (i, token) in sentence.tokens().iter().enumerate() {
                let head_is_verb = sentence.head_of(i).map_or(false, |head| head.is_verb());
                if !head_is_verb {
                    continue;
                }

                if token.is_adjective()
                    && morph.adj_to_adv(&token.text).is_some()
                    && adj.len() < options.max_per_label
                {
                    adj.push(Sample {
                        sentence: words.clone(),
                        index: i,
                        label: Label::Adj,
                    });
                } else if token.is_adverb()
                    && morph.adv_to_adj(&token.text).is_some()
                    && adv.len() < options.max_per_label
                {
                    adv.push(Sample {
                        sentence: words.clone(),
                        index: i,
                        label: Label::Adv,
                    });
                }
            }
        }
    }

    info!(
        "extracted {} adjective and {} adverb samples",
        adj.len(),
        adv.len()
    );

    adj.extend(adv);
    Ok(adj)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Lexicon;
    use crate::parse::heuristic::HeuristicParser;
    use std::io::Write;

    fn fixtures() -> (HeuristicParser, MorphMap) {
        let adjectives = Lexicon::from_words(vec!["good", "careful", "quick"]);
        let adverbs = Lexicon::from_words(vec!["well", "carefully", "quickly"]);
        let morph = MorphMap::build(&adjectives, &adverbs);

        (HeuristicParser::new(adjectives, adverbs), morph)
    }

    #[test]
    fn extracts_and_caps_samples() {
        let dir = std::env::temp_dir().join(format!("morphrule_corpus_test_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let mut file = File::create(dir.join("blog.txt")).unwrap();
        writeln!(file, "<post date=\"2004\">").unwrap();
        writeln!(file, "the soup smells good .").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "he works quickly .").unwrap();
        writeln!(file, "she works carefully .").unwrap();
        writeln!(file, "</post>").unwrap();
        drop(file);

        let (parser, morph) = fixtures();
        let samples = extract_samples(
            &parser,
            &morph,
            &dir,
            &ExtractOptions { max_per_label: 1 },
        )
        .unwrap();
        std::fs::remove_dir_all(&dir).ok();

        // one adjective sample, one adverb sample despite two adverb sentences
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].label, Label::Adj);
        assert_eq!(samples[0].sentence[samples[0].index], "good");
        assert_eq!(samples[1].label, Label::Adv);
    }
}
