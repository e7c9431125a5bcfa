pub mod affixes;
pub mod scoring;
pub mod simple;

use crate::config::Config;
use crate::model::lexicon::{FstLexicon, Lexicon};
use crate::model::{FrequencyModel, FrequencyTable};
use crate::SplitError;
use anyhow::Result;
use lazy_static::lazy_static;
use regex::Regex;
use scoring::ScoringModel;

/// Floor for the recursive core's threshold so comparisons stay
/// well-defined when a token has no corpus evidence at all.
pub const DEFAULT_LOW_SCORE: f64 = 5e-7;

lazy_static! {
    static ref CASE_TRANSITION: Regex = Regex::new(r"[A-Z][a-z]").unwrap();
}

/// Frequency-driven identifier splitter.
///
/// Resolves the boundaries the delimiter-based pre-splitters cannot:
/// camel-case transitions (`GPSmodule`) and fused case-uniform runs
/// (`httpexceptions`), using corpus frequency evidence, a dictionary, and
/// the affix tables. The algorithm is Samurai (Enslen et al., MSR'09) with
/// the dictionary-word and prefix/suffix refinements.
pub struct Splitter {
    scoring: ScoringModel,
    max_identifier_length: usize,
}

impl Splitter {
    pub fn new(config: &Config) -> Result<Self> {
        let frequencies: Box<dyn FrequencyModel> = match &config.frequency_file {
            Some(path) => Box::new(FrequencyTable::load(path)?),
            None => Box::new(FrequencyTable::builtin()),
        };

        let lexicon: Box<dyn Lexicon> = match &config.dictionary_file {
            Some(path) => Box::new(FstLexicon::load(path)?),
            None => Box::new(FstLexicon::builtin()?),
        };

        Ok(Self::with_model(
            frequencies,
            lexicon,
            config.min_frequency,
            config.max_identifier_length,
        ))
    }

    /// Assemble a splitter from explicit oracle implementations (useful
    /// for testing with deterministic fake models).
    pub fn with_model(
        frequencies: Box<dyn FrequencyModel>,
        lexicon: Box<dyn Lexicon>,
        min_frequency: f64,
        max_identifier_length: usize,
    ) -> Self {
        Self {
            scoring: ScoringModel::new(frequencies, lexicon, min_frequency),
            max_identifier_length,
        }
    }

    /// Split an identifier into word tokens.
    ///
    /// Empty input yields an empty list. Inputs longer than the configured
    /// maximum are rejected up front rather than risking deep recursion.
    pub fn split(&self, identifier: &str) -> std::result::Result<Vec<String>, SplitError> {
        if identifier.len() > self.max_identifier_length {
            return Err(SplitError::InputTooLarge {
                len: identifier.len(),
                max: self.max_identifier_length,
            });
        }

        log::debug!("splitting {:?}", identifier);

        let mut pieces = Vec::new();
        for segment in simple::simple_split(identifier) {
            pieces.extend(self.split_case_transition(&segment));
        }

        let mut results = Vec::new();
        for piece in &pieces {
            results.extend(self.same_case_split(piece, self.scoring.score(piece)));
        }

        log::debug!("{:?} -> {:?}", identifier, results);
        Ok(results)
    }

    /// Decide whether the capital at the first upper-to-lower transition
    /// belongs with the run that follows it (`GPS|module`) or with what
    /// precedes it (`fooB|ar` when "ar" carries the evidence). At most one
    /// split is produced; downstream passes handle the pieces.
    pub fn split_case_transition(&self, segment: &str) -> Vec<String> {
        let m = match CASE_TRANSITION.find(segment) {
            Some(m) => m,
            None => return vec![segment.to_string()],
        };
        let i = m.start();

        let camel_score = if i > 0 {
            self.scoring.score(&segment[i..])
        } else {
            self.scoring.score(segment)
        };
        let alt = &segment[i + 1..];
        let alt_score = self.scoring.score(alt);
        log::debug!(
            "case transition in {:?} at {}: camel {} vs alt {}",
            segment,
            i,
            camel_score,
            self.scoring.rescale(alt, alt_score)
        );

        if camel_score > self.scoring.rescale(alt, alt_score) {
            if i > 0 {
                vec![segment[..i].to_string(), segment[i..].to_string()]
            } else {
                vec![segment.to_string()]
            }
        } else {
            vec![segment[..i + 1].to_string(), segment[i + 1..].to_string()]
        }
    }

    /// Recursively split a case-uniform token at the cut with the best
    /// frequency evidence.
    ///
    /// Two kinds of candidate compete over the scan: cuts where both
    /// halves clear the threshold are tracked by maximum combined score,
    /// while cuts where only the left half clears it trigger a recursive
    /// split of the right half and, when that recursion makes progress,
    /// overwrite whatever was recorded before. The last-write-wins rule
    /// for recursive candidates is deliberate: a deeper decomposition
    /// found late in the scan beats a flat two-way split found early.
    pub fn same_case_split(&self, token: &str, score_ns: f64) -> Vec<String> {
        let boundaries: Vec<usize> = token.char_indices().map(|(i, _)| i).collect();
        if boundaries.len() < 2 {
            return vec![token.to_string()];
        }
        if self.scoring.is_word(token) {
            log::debug!("{:?} is a dictionary word; not splitting", token);
            return vec![token.to_string()];
        }

        let threshold = self.scoring.score(token).max(score_ns);
        let mut split: Option<Vec<String>> = None;
        let mut max_score = -1.0f64;

        for &cut in &boundaries {
            let (left, right) = token.split_at(cut);
            let score_l = self.scoring.score(left);
            let score_r = self.scoring.score(right);
            let affix = affixes::is_prefix(left) || affixes::is_suffix(right);
            let to_split_l = self.scoring.rescale(left, score_l) > threshold;
            let to_split_r = self.scoring.rescale(right, score_r) > threshold;

            if !affix && to_split_l && to_split_r {
                if score_l + score_r > max_score {
                    max_score = score_l + score_r;
                    log::debug!("cut {:?}|{:?} (combined {})", left, right, max_score);
                    split = Some(vec![left.to_string(), right.to_string()]);
                }
            } else if !affix && to_split_l {
                let rest = self.same_case_split(right, score_ns);
                if rest[0] != right {
                    log::debug!("recursive cut {:?}|{:?}", left, rest);
                    let mut parts = Vec::with_capacity(rest.len() + 1);
                    parts.push(left.to_string());
                    parts.extend(rest);
                    split = Some(parts);
                }
            }
        }

        split.unwrap_or_else(|| vec![token.to_string()])
    }
}
