use crate::SplitResult;
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonResult {
    identifier: String,
    tokens: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonOutput {
    identifiers: usize,
    results: Vec<JsonResult>,
}

pub fn print_results(results: &[SplitResult], colored_output: bool, format: &OutputFormat) {
    match format {
        OutputFormat::Text => print_text_results(results, colored_output),
        OutputFormat::Json => print_json_results(results),
    }
}

fn print_text_results(results: &[SplitResult], colored_output: bool) {
    for result in results {
        let tokens = result.tokens.join(" ");
        if colored_output {
            println!("{}: {}", result.identifier.cyan().bold(), tokens.green());
        } else {
            println!("{}: {}", result.identifier, tokens);
        }
    }
}

fn print_json_results(results: &[SplitResult]) {
    let json_results: Vec<JsonResult> = results
        .iter()
        .map(|r| JsonResult {
            identifier: r.identifier.clone(),
            tokens: r.tokens.clone(),
        })
        .collect();

    let output = JsonOutput {
        identifiers: json_results.len(),
        results: json_results,
    };

    match serde_json::to_string_pretty(&output) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error: failed to serialize results: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parsing() {
        assert!(matches!("text".parse(), Ok(OutputFormat::Text)));
        assert!(matches!("JSON".parse(), Ok(OutputFormat::Json)));
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Text.to_string(), "text");
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }
}
