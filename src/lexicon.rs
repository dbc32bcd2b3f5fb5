//! Loading of word lists into lexicons.

use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::io::BufRead;
use std::path::Path;

/// A set of known words of one part of speech, immutable after load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Lexicon {
    words: HashSet<String>,
}

impl Lexicon {
    /// Reads a newline-delimited word list. Lines starting with `#` are skipped,
    /// all words are lowercased.
    pub fn from_dump<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let file = File::open(path.as_ref())?;
        let reader = std::io::BufReader::new(file);

        let mut words = HashSet::new();

        for line in reader.lines() {
            let line = line?;
            if line.starts_with('#') {
                continue;
            }

            let word = line.trim();
            if !word.is_empty() {
                words.insert(word.to_lowercase());
            }
        }

        info!(
            "loaded {} words from {}",
            words.len(),
            path.as_ref().display()
        );

        Ok(Lexicon { words })
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Lexicon {
            words: words
                .into_iter()
                .map(|x| x.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(|x| x.as_str())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_words_and_skips_comments() {
        let path = std::env::temp_dir().join(format!(
            "morphrule_lexicon_test_{}.txt",
            std::process::id()
        ));
        let mut file = File::create(&path).unwrap();
        writeln!(file, "# a comment").unwrap();
        writeln!(file, "Good").unwrap();
        writeln!(file, "bad").unwrap();
        writeln!(file).unwrap();

        let lexicon = Lexicon::from_dump(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(lexicon.len(), 2);
        assert!(lexicon.contains("good"));
        assert!(lexicon.contains("bad"));
        assert!(!lexicon.contains("# a comment"));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(Lexicon::from_dump("does/not/exist.txt").is_err());
    }
}
