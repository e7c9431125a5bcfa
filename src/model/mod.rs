pub mod lexicon;

use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Corpus word-frequency lookup. Implementations are case-insensitive and
/// total: unknown tokens yield 0.0, never an error.
pub trait FrequencyModel: Send + Sync {
    fn frequency(&self, token: &str) -> f64;
}

/// In-memory frequency table loaded from a `word,count` CSV file.
pub struct FrequencyTable {
    counts: HashMap<String, f64>,
}

impl FrequencyTable {
    /// Build a table from in-memory pairs (useful for testing)
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let counts = pairs
            .into_iter()
            .map(|(word, count)| (word.as_ref().to_lowercase(), count))
            .collect();
        Self { counts }
    }

    /// Load a frequency table from a CSV file. Files ending in `.gz` are
    /// assumed to be gzip'ed; anything else is read as plain text.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open frequency table: {}", path.display()))?;

        let reader: Box<dyn BufRead> = if path.extension().and_then(|e| e.to_str()) == Some("gz") {
            Box::new(BufReader::new(GzDecoder::new(file)))
        } else {
            Box::new(BufReader::new(file))
        };

        let mut counts = HashMap::new();
        for (line_num, line) in reader.lines().enumerate() {
            let line = line
                .with_context(|| format!("Failed to read frequency table: {}", path.display()))?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            match line.rsplit_once(',') {
                Some((word, count)) => match count.trim().parse::<f64>() {
                    Ok(count) if count >= 0.0 => {
                        counts.insert(word.trim().to_lowercase(), count);
                    }
                    _ => log::warn!(
                        "{}:{}: ignoring unparsable count {:?}",
                        path.display(),
                        line_num + 1,
                        count
                    ),
                },
                None => log::warn!(
                    "{}:{}: ignoring malformed line {:?}",
                    path.display(),
                    line_num + 1,
                    line
                ),
            }
        }

        Ok(Self { counts })
    }

    /// Embedded bootstrap table of common English and programming terms.
    ///
    /// This is a minimal model for out-of-the-box use; point
    /// `Config::frequency_file` at a real corpus table for serious mining.
    pub fn builtin() -> Self {
        Self::from_pairs(BUILTIN_FREQUENCIES.iter().map(|&(w, c)| (w, c)))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl FrequencyModel for FrequencyTable {
    fn frequency(&self, token: &str) -> f64 {
        self.counts
            .get(&token.to_lowercase())
            .copied()
            .unwrap_or(0.0)
    }
}

/// Bootstrap counts, loosely Zipfian, drawn from common English plus the
/// vocabulary that dominates identifier corpora.
const BUILTIN_FREQUENCIES: &[(&str, f64)] = &[
    ("the", 1_061_000.0),
    ("of", 593_000.0),
    ("and", 416_000.0),
    ("to", 411_000.0),
    ("a", 324_000.0),
    ("in", 289_000.0),
    ("get", 210_000.0),
    ("set", 185_000.0),
    ("is", 156_000.0),
    ("data", 160_000.0),
    ("file", 140_000.0),
    ("it", 136_000.0),
    ("list", 130_000.0),
    ("name", 125_000.0),
    ("value", 120_000.0),
    ("for", 100_000.0),
    ("count", 95_000.0),
    ("index", 90_000.0),
    ("node", 88_000.0),
    ("string", 86_000.0),
    ("http", 83_000.0),
    ("type", 80_000.0),
    ("as", 77_000.0),
    ("module", 72_000.0),
    ("read", 70_000.0),
    ("write", 68_000.0),
    ("user", 66_000.0),
    ("time", 64_000.0),
    ("max", 61_000.0),
    ("min", 60_000.0),
    ("test", 58_000.0),
    ("text", 57_000.0),
    ("size", 56_000.0),
    ("line", 54_000.0),
    ("path", 52_500.0),
    ("auto", 52_000.0),
    ("code", 50_000.0),
    ("item", 48_000.0),
    ("key", 46_000.0),
    ("error", 45_000.0),
    ("update", 44_000.0),
    ("number", 43_000.0),
    ("point", 42_000.0),
    ("start", 41_000.0),
    ("end", 40_000.0),
    ("commit", 38_000.0),
    ("buffer", 36_000.0),
    ("map", 35_000.0),
    ("load", 34_000.0),
    ("save", 33_000.0),
    ("config", 32_000.0),
    ("usage", 31_000.0),
    ("table", 30_000.0),
    ("word", 29_000.0),
    ("exceptions", 26_000.0),
    ("object", 25_000.0),
    ("exception", 21_000.0),
    ("version", 20_000.0),
    ("find", 19_000.0),
    ("iter", 18_000.0),
    ("gps", 15_000.0),
    ("token", 14_000.0),
    ("parse", 13_000.0),
    ("split", 12_000.0),
    ("hash", 11_000.0),
    ("byte", 10_000.0),
    ("queue", 9_000.0),
    ("stack", 8_500.0),
    ("url", 8_000.0),
    ("json", 7_500.0),
    ("arg", 7_000.0),
    ("meter", 6_500.0),
    ("util", 6_000.0),
    ("init", 5_500.0),
    ("tmp", 5_000.0),
];

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_from_pairs_case_insensitive() {
        let table = FrequencyTable::from_pairs([("Foo", 100.0), ("bar", 50.0)]);
        assert_eq!(table.frequency("foo"), 100.0);
        assert_eq!(table.frequency("FOO"), 100.0);
        assert_eq!(table.frequency("Bar"), 50.0);
        assert_eq!(table.frequency("baz"), 0.0);
    }

    #[test]
    fn test_load_plain_csv() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("freq.csv");
        std::fs::write(&path, "# comment\nget,210000\ndata,160000\nbroken\n").unwrap();

        let table = FrequencyTable::load(&path).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.frequency("get"), 210_000.0);
        assert_eq!(table.frequency("DATA"), 160_000.0);
    }

    #[test]
    fn test_load_gzip_csv() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("freq.csv.gz");

        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"commit,38000\nauto,52000\n").unwrap();
        std::fs::write(&path, encoder.finish().unwrap()).unwrap();

        let table = FrequencyTable::load(&path).unwrap();
        assert_eq!(table.frequency("commit"), 38_000.0);
        assert_eq!(table.frequency("auto"), 52_000.0);
    }

    #[test]
    fn test_builtin_table() {
        let table = FrequencyTable::builtin();
        assert!(!table.is_empty());
        assert!(table.frequency("get") > 0.0);
        assert_eq!(table.frequency("qzxv"), 0.0);
    }
}
