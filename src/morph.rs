//! Suffix-rule conversion between adjectives and adverbs.

use crate::lexicon::Lexicon;
use bimap::BiMap;
use log::info;
use serde::{Deserialize, Serialize};

/// Converts an adjective to the corresponding adverb, or `None` if no
/// derivation exists.
///
/// The rules are ordered, first match wins:
/// 1. already ends in "ly" ("friendly"): no derivation
/// 2. the word is itself a listed adverb ("hard", "fast"): unchanged
/// 3. irregulars: "good" => "well", "whole" => "wholly", "true" => "truly"
/// 4. ends in "le" except "sole": "responsible" => "responsibly"
/// 5. ends in "y" except "shy": "angry" => "angrily"
/// 6. ends in "ic": "idiotic" => "idiotically"
/// 7. ends in "ll": "full" => "fully"
/// 8. default: append "ly" ("free" => "freely")
///
/// Candidates from rules 4-8 are only accepted if they are present in the
/// adverb lexicon. This guards against over-generation from the heuristics.
pub fn adverb_form(adjective: &str, adverbs: &Lexicon) -> Option<String> {
    if adjective.ends_with("ly") {
        return None;
    }
    if adverbs.contains(adjective) {
        return Some(adjective.to_string());
    }
    if adjective == "good" {
        return Some("well".to_string());
    }
    if adjective == "whole" || adjective == "true" {
        return Some(format!("{}ly", &adjective[..adjective.len() - 1]));
    }

    let candidate = if adjective.ends_with("le") && adjective != "sole" {
        format!("{}y", &adjective[..adjective.len() - 1])
    } else if adjective.ends_with('y') && adjective != "shy" {
        format!("{}ily", &adjective[..adjective.len() - 1])
    } else if adjective.ends_with("ic") {
        format!("{}ally", adjective)
    } else if adjective.ends_with("ll") {
        format!("{}y", adjective)
    } else {
        format!("{}ly", adjective)
    };

    if adverbs.contains(&candidate) {
        Some(candidate)
    } else {
        None
    }
}

/// The adjective<->adverb lookup table derived from the lexicons.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MorphMap {
    map: BiMap<String, String>,
}

impl MorphMap {
    /// Applies [adverb_form] to every word in the adjective lexicon and records
    /// valid, distinct pairs in both directions.
    ///
    /// Multiple adjectives can derive the same adverb (e. g. "idiotic" and
    /// "idiotical" both derive "idiotically"). The first pair wins; adjectives
    /// are iterated in sorted order so the outcome is deterministic.
    pub fn build(adjectives: &Lexicon, adverbs: &Lexicon) -> Self {
        let mut map = BiMap::new();

        let mut sorted: Vec<&str> = adjectives.iter().collect();
        sorted.sort_unstable();

        for adjective in sorted {
            if let Some(adverb) = adverb_form(adjective, adverbs) {
                if adverb != adjective && !map.contains_right(&adverb) {
                    map.insert(adjective.to_string(), adverb);
                }
            }
        }

        info!("derived {} adjective/adverb pairs", map.len());

        MorphMap { map }
    }

    pub fn adj_to_adv(&self, adjective: &str) -> Option<&str> {
        self.map
            .get_by_left(&adjective.to_string())
            .map(|x| x.as_str())
    }

    pub fn adv_to_adj(&self, adverb: &str) -> Option<&str> {
        self.map
            .get_by_right(&adverb.to_string())
            .map(|x| x.as_str())
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
