//! Delimiter- and case-based pre-splitters.
//!
//! These handle the unambiguous boundaries (underscores, explicit
//! delimiters, digit runs, lower-to-upper camel transitions) and make no
//! inferences. `simple_split` is the upstream segmenter for the
//! frequency-driven [`Splitter`](crate::Splitter); the rest are exposed for
//! callers that want cheaper, more conservative splitting.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref HARD_DELIMITERS: Regex = Regex::new(r"[$~_.:/]").unwrap();
    static ref DIGIT_RUN: Regex = Regex::new(r"\d+").unwrap();
    static ref CAMEL_BOUNDARY: Regex = Regex::new(r"([a-z0-9])([A-Z])").unwrap();
    static ref TWO_CAPITALS: Regex = Regex::new(r"[A-Z][A-Z]").unwrap();
}

/// Split on explicit delimiters (`_`, `.`, `:`) only.
pub fn delimiter_split(identifier: &str) -> Vec<String> {
    identifier
        .split(['_', '.', ':'])
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split on forward camel case (lower-to-upper transitions) only, leaving
/// identifiers with adjacent capitals untouched: `fooBarBaz` becomes
/// `foo Bar Baz`, but `SQLlite` and `getMAX` come back whole.
pub fn safe_camelcase_split(identifier: &str) -> Vec<String> {
    if TWO_CAPITALS.is_match(identifier) {
        return vec![identifier.to_string()];
    }
    let spaced = CAMEL_BOUNDARY.replace_all(identifier, "${1} ${2}");
    spaced.split_whitespace().map(str::to_string).collect()
}

/// Split on hard delimiters (`$ ~ _ . : /`) and digit runs, then forward
/// camel case per part via [`safe_camelcase_split`]. Digit runs act as
/// separators and are dropped from the output.
pub fn safe_simple_split(identifier: &str) -> Vec<String> {
    let spaced = HARD_DELIMITERS.replace_all(identifier, " ");
    let spaced = DIGIT_RUN.replace_all(&spaced, " ");
    spaced
        .split_whitespace()
        .flat_map(safe_camelcase_split)
        .collect()
}

/// Split on hard delimiters, digit runs, and every lower-to-upper camel
/// transition, including inside runs of capitals: `aFastNDecoder` becomes
/// `a Fast NDecoder` even though `N Decoder` may be the better reading.
pub fn simple_split(identifier: &str) -> Vec<String> {
    let spaced = HARD_DELIMITERS.replace_all(identifier, " ");
    let spaced = DIGIT_RUN.replace_all(&spaced, " ");
    let spaced = CAMEL_BOUNDARY.replace_all(&spaced, "${1} ${2}");
    spaced.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delimiter_split() {
        assert_eq!(delimiter_split("foo_bar"), vec!["foo", "bar"]);
        assert_eq!(delimiter_split("a.b:c"), vec!["a", "b", "c"]);
        assert_eq!(delimiter_split("__init__"), vec!["init"]);
        assert!(delimiter_split("").is_empty());
    }

    #[test]
    fn test_safe_camelcase_split() {
        assert_eq!(safe_camelcase_split("lower"), vec!["lower"]);
        assert_eq!(safe_camelcase_split("fooBar"), vec!["foo", "Bar"]);
        assert_eq!(safe_camelcase_split("FooBar"), vec!["Foo", "Bar"]);
        assert_eq!(safe_camelcase_split("Foobar"), vec!["Foobar"]);
        assert_eq!(safe_camelcase_split("ABCFooBar"), vec!["ABCFooBar"]);
        assert_eq!(safe_camelcase_split("FOOOBAR"), vec!["FOOOBAR"]);
        assert_eq!(safe_camelcase_split("getMAX"), vec!["getMAX"]);
        assert_eq!(safe_camelcase_split("ASTVisitor"), vec!["ASTVisitor"]);
        assert_eq!(safe_camelcase_split("SqlList"), vec!["Sql", "List"]);
        assert_eq!(safe_camelcase_split("jLabel"), vec!["j", "Label"]);
    }

    #[test]
    fn test_safe_simple_split() {
        assert_eq!(safe_simple_split("fooBar2day"), vec!["foo", "Bar", "day"]);
        assert_eq!(safe_simple_split("foo_bar"), vec!["foo", "bar"]);
        assert_eq!(safe_simple_split("foo_bar2day"), vec!["foo", "bar", "day"]);
        assert_eq!(safe_simple_split("foo_2day"), vec!["foo", "day"]);
        assert_eq!(safe_simple_split("foo_bar2"), vec!["foo", "bar"]);
        assert_eq!(
            safe_simple_split("foo.bar2FooBar"),
            vec!["foo", "bar", "Foo", "Bar"]
        );
        assert_eq!(safe_simple_split("getMAX"), vec!["getMAX"]);
        assert_eq!(safe_simple_split("aFastNDecoder"), vec!["aFastNDecoder"]);
    }

    #[test]
    fn test_simple_split() {
        assert_eq!(simple_split("fooBar2day"), vec!["foo", "Bar", "day"]);
        assert_eq!(simple_split("SQLlite"), vec!["SQLlite"]);
        assert_eq!(simple_split("aFastNDecoder"), vec!["a", "Fast", "NDecoder"]);
        assert_eq!(simple_split("getMAX"), vec!["get", "MAX"]);
        assert_eq!(
            simple_split("usage_getdata"),
            vec!["usage", "getdata"]
        );
        assert!(simple_split("").is_empty());
        assert!(simple_split("42").is_empty());
    }
}
