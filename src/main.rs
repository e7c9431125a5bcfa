use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use idsplit::cli::output::{self, OutputFormat};
use idsplit::{Config, FstLexicon, SplitResult, Splitter};
use rayon::prelude::*;
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "idsplit")]
#[command(version, about = "A fast, frequency-driven identifier splitter", long_about = None)]
struct Cli {
    /// Identifiers to split
    #[arg(value_name = "IDENTIFIERS")]
    identifiers: Vec<String>,

    /// Read identifiers from a file, one per line
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Word-frequency table (CSV "word,count", optionally gzip'ed)
    #[arg(long)]
    frequencies: Option<PathBuf>,

    /// Compiled fst dictionary file
    #[arg(long)]
    dictionary: Option<PathBuf>,

    /// Minimum corpus count for a token to score at all
    #[arg(long)]
    min_frequency: Option<f64>,

    /// Increase log verbosity (-v: debug, -vv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Dictionary management
    Dict {
        #[command(subcommand)]
        action: DictCommands,
    },
}

#[derive(Parser, Debug)]
enum DictCommands {
    /// Compile a text word list (one word per line) into an fst dictionary
    Build {
        wordlist: PathBuf,
        output: PathBuf,
    },
    /// Show dictionary info
    Info {
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "idsplit", &mut io::stdout());
        return Ok(());
    }

    // Handle subcommands
    if let Some(command) = cli.command {
        return handle_command(command);
    }

    // Load configuration
    let config = Config::load(
        cli.frequencies.clone(),
        cli.dictionary.clone(),
        cli.min_frequency,
    )?;

    // Gather identifiers from arguments and, in batch mode, from a file
    let mut identifiers = cli.identifiers.clone();
    if let Some(path) = &cli.file {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read identifier file: {}", path.display()))?;
        identifiers.extend(
            content
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty() && !l.starts_with('#'))
                .map(str::to_string),
        );
    }

    if identifiers.is_empty() {
        anyhow::bail!("No identifiers specified. Use --help for usage information.");
    }

    // Initialize splitter
    let splitter = Splitter::new(&config)?;

    // Splitting is read-only over the model, so batches parallelize freely;
    // par_iter keeps input order in the collected output.
    let results: Vec<SplitResult> = identifiers
        .par_iter()
        .map(|identifier| {
            let tokens = splitter.split(identifier)?;
            Ok(SplitResult {
                identifier: identifier.clone(),
                tokens,
            })
        })
        .collect::<Result<_>>()?;

    output::print_results(&results, !cli.no_color, &cli.format);

    Ok(())
}

fn handle_command(command: Commands) -> Result<()> {
    match command {
        Commands::Dict { action } => match action {
            DictCommands::Build { wordlist, output } => {
                let content = std::fs::read_to_string(&wordlist)
                    .with_context(|| format!("Failed to read word list: {}", wordlist.display()))?;
                let words: Vec<&str> = content
                    .lines()
                    .map(str::trim)
                    .filter(|l| !l.is_empty() && !l.starts_with('#'))
                    .collect();

                let count = FstLexicon::build_to_path(words, &output)?;
                println!("Compiled {} words into {}", count, output.display());
            }
            DictCommands::Info { path } => {
                let lexicon = FstLexicon::load(&path)?;
                let size = std::fs::metadata(&path)
                    .with_context(|| format!("Failed to stat dictionary: {}", path.display()))?
                    .len();
                println!("{}", path.display());
                println!("  words: {}", lexicon.len());
                println!("  size:  {}KB", size / 1024);
            }
        },
    }
    Ok(())
}
