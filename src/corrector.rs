//! Scanning sentences for adjective/adverb usage errors.

use crate::classifier::Classifier;
use crate::features;
use crate::morph::MorphMap;
use crate::parse::Parser;
use crate::types::{Correction, Label};
use crate::Error;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

/// Message emitted when a sentence passes the check.
pub const NO_ERRORS: &str = "No errors found.";

/// The trained checker: the adjective<->adverb map plus the fitted classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Corrector {
    morph: MorphMap,
    classifier: Classifier,
}

impl Corrector {
    pub fn from_parts(morph: MorphMap, classifier: Classifier) -> Self {
        Corrector { morph, classifier }
    }

    /// Loads a corrector from a path to a binary.
    ///
    /// # Errors
    /// - If the file can not be opened.
    /// - If the file content can not be deserialized to a corrector.
    pub fn new<P: AsRef<Path>>(p: P) -> Result<Self, Error> {
        let reader = BufReader::new(File::open(p.as_ref())?);
        Ok(bincode::deserialize_from(reader)?)
    }

    /// Loads a corrector from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        Ok(bincode::deserialize_from(reader)?)
    }

    /// Serializes the corrector to a writer.
    pub fn to_writer<W: Write>(&self, writer: W) -> Result<(), Error> {
        Ok(bincode::serialize_into(writer, self)?)
    }

    pub fn morph(&self) -> &MorphMap {
        &self.morph
    }

    /// Scans left to right for the first adjective governed by a verb and with
    /// a known adverb form, classifies it, and returns a [Correction] if the
    /// classifier decides the word should surface as an adverb.
    ///
    /// Only the first qualifying token is ever checked; later tokens are not
    /// reached even if they are also malformed.
    pub fn check<P: Parser + ?Sized>(&self, words: &[String], parser: &P) -> Option<Correction> {
        let sentence = parser.parse(words);

        let index = sentence.tokens().iter().enumerate().position(|(i, token)| {
            token.is_adjective()
                && sentence.head_of(i).map_or(false, |head| head.is_verb())
                && self.morph.adj_to_adv(&token.text).is_some()
        })?;

        let features = features::extract(&sentence, index, &self.morph, parser)?;
        let label = self.classifier.predict(&features);

        debug!(
            "flagged \"{}\" at {}: predicted {}",
            words[index], index, label
        );

        match label {
            Label::Adv => {
                let replacement = self.morph.adj_to_adv(&words[index])?.to_string();
                Some(Correction {
                    index,
                    original: words[index].clone(),
                    replacement,
                })
            }
            Label::Adj => None,
        }
    }

    /// Renders the correction for a sentence, or [NO_ERRORS] if the sentence
    /// passes the check.
    pub fn report<P: Parser + ?Sized>(&self, words: &[String], parser: &P) -> String {
        match self.check(words, parser) {
            Some(correction) => correction.render(words),
            None => NO_ERRORS.to_string(),
        }
    }
}
