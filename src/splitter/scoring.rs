use crate::model::lexicon::Lexicon;
use crate::model::FrequencyModel;

/// Frequency evidence for split decisions: a raw `score` with a noise
/// floor, and a length/dictionary-sensitive `rescale` used to compare
/// candidate cuts against a threshold.
pub struct ScoringModel {
    frequencies: Box<dyn FrequencyModel>,
    lexicon: Box<dyn Lexicon>,
    min_frequency: f64,
}

impl ScoringModel {
    pub fn new(
        frequencies: Box<dyn FrequencyModel>,
        lexicon: Box<dyn Lexicon>,
        min_frequency: f64,
    ) -> Self {
        Self {
            frequencies,
            lexicon,
            min_frequency,
        }
    }

    /// Corpus frequency of `token`, floored to 0 below `min_frequency` so
    /// noisy low-count entries cannot masquerade as real words.
    pub fn score(&self, token: &str) -> f64 {
        let f = self.frequencies.frequency(token);
        if f < self.min_frequency {
            0.0
        } else {
            f
        }
    }

    /// Normalize a raw score for threshold comparison. Short tokens that
    /// the dictionary confirms get the gentler square root; everything
    /// else gets the 2.5th root, since short strings accumulate raw
    /// frequency by chance.
    pub fn rescale(&self, token: &str, value: f64) -> f64 {
        let chars = token.chars().count();
        if chars <= 1 {
            0.0
        } else if chars <= 4 && self.is_word(token) {
            value.powf(1.0 / 2.0)
        } else {
            value.powf(1.0 / 2.5)
        }
    }

    pub fn is_word(&self, token: &str) -> bool {
        self.lexicon.is_word(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::lexicon::FstLexicon;
    use crate::model::FrequencyTable;

    fn model(pairs: &[(&str, f64)], words: &[&str]) -> ScoringModel {
        ScoringModel::new(
            Box::new(FrequencyTable::from_pairs(pairs.iter().map(|&(w, c)| (w, c)))),
            Box::new(FstLexicon::from_words(words.iter().copied()).unwrap()),
            30.0,
        )
    }

    #[test]
    fn test_score_noise_floor() {
        let m = model(&[("rare", 29.0), ("common", 1000.0)], &[]);
        assert_eq!(m.score("rare"), 0.0);
        assert_eq!(m.score("common"), 1000.0);
        assert_eq!(m.score("absent"), 0.0);
    }

    #[test]
    fn test_rescale_single_char_is_zero() {
        let m = model(&[("a", 1_000_000.0)], &["a"]);
        assert_eq!(m.rescale("a", 1_000_000.0), 0.0);
        assert_eq!(m.rescale("", 1_000_000.0), 0.0);
    }

    #[test]
    fn test_rescale_short_dictionary_word_gets_square_root() {
        let m = model(&[], &["data"]);
        assert!((m.rescale("data", 10_000.0) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_rescale_other_tokens_get_weaker_root() {
        let m = model(&[], &["data"]);
        // Not a dictionary word: 2.5th root even at length 4
        let v = m.rescale("zxqw", 10_000.0);
        assert!((v - 10_000f64.powf(0.4)).abs() < 1e-9);
        // Longer than 4: 2.5th root even for dictionary words
        let v = m.rescale("buffer", 10_000.0);
        assert!((v - 10_000f64.powf(0.4)).abs() < 1e-9);
    }

    #[test]
    fn test_rescale_zero_score_stays_zero() {
        let m = model(&[], &["data"]);
        assert_eq!(m.rescale("data", 0.0), 0.0);
        assert_eq!(m.rescale("buffer", 0.0), 0.0);
    }
}
