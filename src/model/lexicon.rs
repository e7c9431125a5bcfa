use anyhow::{Context, Result};
use fst::Set;
use std::fs::File;
use std::io::{BufWriter, Read};
use std::path::Path;

/// Natural-language dictionary membership test. Implementations are
/// case-insensitive and total: unknown tokens yield false, never an error.
pub trait Lexicon: Send + Sync {
    fn is_word(&self, token: &str) -> bool;
}

/// Dictionary backed by an fst set of lower-cased words.
pub struct FstLexicon {
    set: Set<Vec<u8>>,
}

impl FstLexicon {
    /// Load a compiled dictionary from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let mut file = File::open(path)
            .with_context(|| format!("Failed to open dictionary: {}", path.display()))?;

        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)
            .with_context(|| format!("Failed to read dictionary: {}", path.display()))?;

        let set = Set::new(bytes).context("Failed to parse dictionary")?;
        Ok(Self { set })
    }

    /// Build a dictionary in memory from a word list.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut sorted: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .collect();
        sorted.sort();
        sorted.dedup();

        let set = Set::from_iter(sorted).context("Failed to build dictionary set")?;
        Ok(Self { set })
    }

    /// Embedded bootstrap wordlist for out-of-the-box use.
    pub fn builtin() -> Result<Self> {
        Self::from_words(BUILTIN_WORDS.iter().copied())
    }

    /// Compile a word list to an fst dictionary file.
    pub fn build_to_path<I, S>(words: I, output_path: &Path) -> Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut sorted: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .collect();
        sorted.sort();
        sorted.dedup();

        let file = File::create(output_path)
            .with_context(|| format!("Failed to create dictionary: {}", output_path.display()))?;

        let writer = BufWriter::new(file);
        let mut builder = fst::SetBuilder::new(writer).context("Failed to create FST builder")?;

        let count = sorted.len();
        for word in sorted {
            builder
                .insert(word.as_bytes())
                .context("Failed to insert word into dictionary")?;
        }

        builder.finish().context("Failed to finalize dictionary")?;
        Ok(count)
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
}

impl Lexicon for FstLexicon {
    fn is_word(&self, token: &str) -> bool {
        self.set.contains(token.to_lowercase().as_bytes())
    }
}

/// Minimal wordlist for bootstrapping: common English plus the terms that
/// dominate identifier corpora. Production use should compile a full
/// dictionary with `idsplit dict build`.
const BUILTIN_WORDS: &[&str] = &[
    "a",
    "all",
    "an",
    "and",
    "array",
    "auto",
    "back",
    "better",
    "boolean",
    "buffer",
    "class",
    "code",
    "commit",
    "count",
    "data",
    "day",
    "end",
    "error",
    "exception",
    "exceptions",
    "file",
    "find",
    "first",
    "function",
    "get",
    "good",
    "hash",
    "index",
    "item",
    "key",
    "line",
    "list",
    "load",
    "look",
    "make",
    "map",
    "max",
    "meter",
    "method",
    "min",
    "module",
    "name",
    "new",
    "node",
    "number",
    "object",
    "of",
    "only",
    "over",
    "parse",
    "path",
    "point",
    "queue",
    "read",
    "return",
    "save",
    "set",
    "size",
    "split",
    "stack",
    "start",
    "string",
    "table",
    "test",
    "text",
    "the",
    "threshold",
    "time",
    "to",
    "token",
    "type",
    "undirected",
    "update",
    "usage",
    "use",
    "user",
    "value",
    "version",
    "way",
    "well",
    "word",
    "work",
    "write",
    "year",
];

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_from_words_case_insensitive() {
        let lexicon = FstLexicon::from_words(["Hello", "world"]).unwrap();
        assert!(lexicon.is_word("hello"));
        assert!(lexicon.is_word("HELLO"));
        assert!(lexicon.is_word("World"));
        assert!(!lexicon.is_word("notfound"));
    }

    #[test]
    fn test_build_and_load_dictionary() {
        let dir = tempdir().unwrap();
        let dict_path = dir.path().join("test.dict");

        let words = vec!["hello".to_string(), "world".to_string(), "test".to_string()];
        let count = FstLexicon::build_to_path(&words, &dict_path).unwrap();
        assert_eq!(count, 3);

        let lexicon = FstLexicon::load(&dict_path).unwrap();
        assert!(lexicon.is_word("hello"));
        assert!(lexicon.is_word("world"));
        assert!(!lexicon.is_word("notfound"));
    }

    #[test]
    fn test_builtin_wordlist() {
        let lexicon = FstLexicon::builtin().unwrap();
        assert!(lexicon.is_word("module"));
        assert!(lexicon.is_word("Usage"));
        assert!(!lexicon.is_word("autocommit"));
    }
}
