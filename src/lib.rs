//! Rule-based adjective/adverb morphology combined with a feature-based
//! classifier for adjective vs. adverb usage errors.
//! # Overview
//!
//! morphrule has the following core abstractions:
//! - A [MorphMap][morph::MorphMap] derived from two word lists by a deterministic
//!   suffix-rule engine, mapping adjectives to their adverb forms and back.
//! - A [Parser][parse::Parser] producing dependency parses; the crate ships a
//!   deterministic [HeuristicParser][parse::heuristic::HeuristicParser].
//! - A [Classifier][classifier::Classifier] deciding from contextual features
//!   whether a flagged word should surface as an adjective or an adverb.
//! - A [Corrector][corrector::Corrector] scanning sentences and emitting
//!   single-word corrections.
//!
//! # Examples
//!
//! Check a sentence:
//!
//! ```no_run
//! use morphrule::corrector::Corrector;
//! use morphrule::lexicon::Lexicon;
//! use morphrule::parse::{heuristic::HeuristicParser, segment};
//!
//! let corrector = Corrector::new("corrector.bin")?;
//! let parser = HeuristicParser::new(
//!     Lexicon::from_dump("data/adjectives.txt")?,
//!     Lexicon::from_dump("data/adverbs.txt")?,
//! );
//!
//! let words = segment("You have successful completed the project .");
//! assert_eq!(
//!     corrector.report(&words, &parser),
//!     "You have {successful=>successfully} completed the project ."
//! );
//! # Ok::<(), morphrule::Error>(())
//! ```

use std::io;

use thiserror::Error;

pub mod classifier;
pub mod corpus;
pub mod corrector;
pub mod features;
pub mod lexicon;
pub mod morph;
pub mod parse;
pub mod types;

#[derive(Error, Debug)]
#[allow(missing_docs)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    /// (De)serialization error. Can have occured during deserialization or during serialization.
    #[error(transparent)]
    Serialization(#[from] bincode::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("cannot train on an empty sample set")]
    EmptyTrainingSet,
}
