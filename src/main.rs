use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use colored::Colorize;
use serde::Serialize;
use std::io::{self, BufRead};

use argsplit::{ParseError, Tokenizer};

#[derive(Parser)]
#[command(name = "argsplit")]
#[command(author, version, about = "Shell-style argument tokenizer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Split a line into argument tokens
    Split {
        /// The line to split (lines are read from stdin when omitted)
        line: Option<String>,

        /// Characters that open and close quoted spans
        #[arg(long, default_value = "\"'")]
        quotes: String,

        /// Characters that separate tokens
        #[arg(long, default_value = " \t")]
        delimiters: String,

        /// Character that makes the following character literal
        #[arg(long, default_value_t = '\\')]
        escape: char,

        /// Fail on unterminated quotes and escapes instead of flushing
        #[arg(long)]
        strict: bool,

        /// Print tokens as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Check that input tokenizes cleanly under strict rules
    Check {
        /// The line to check (lines are read from stdin when omitted)
        line: Option<String>,

        /// Characters that open and close quoted spans
        #[arg(long, default_value = "\"'")]
        quotes: String,

        /// Characters that separate tokens
        #[arg(long, default_value = " \t")]
        delimiters: String,

        /// Character that makes the following character literal
        #[arg(long, default_value_t = '\\')]
        escape: char,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logger; RUST_LOG overrides the verbose flag
    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let result = match cli.command {
        Commands::Split {
            line,
            quotes,
            delimiters,
            escape,
            strict,
            json,
        } => {
            let tokenizer = Tokenizer::new(&quotes, &delimiters, escape, !strict);
            split(line, &tokenizer, json)
        }
        Commands::Check {
            line,
            quotes,
            delimiters,
            escape,
        } => {
            let tokenizer = Tokenizer::new(&quotes, &delimiters, escape, false);
            check(line, &tokenizer)
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}

/// One line of JSON output when splitting a stream of lines.
#[derive(Serialize)]
struct SplitRecord {
    line: usize,
    tokens: Vec<String>,
}

fn split(line: Option<String>, tokenizer: &Tokenizer, json: bool) -> Result<()> {
    log::debug!("Splitting with {:?}", tokenizer);

    match line {
        Some(line) => {
            let tokens = tokenize(&line, "<input>", tokenizer)?;
            if json {
                println!("{}", serde_json::to_string(&tokens)?);
            } else {
                print_tokens(&tokens);
            }
        }
        None => {
            for (index, line) in io::stdin().lock().lines().enumerate() {
                let line = line.context("Failed to read from stdin")?;
                let name = format!("<stdin>:{}", index + 1);
                let tokens = tokenize(&line, &name, tokenizer)?;
                if json {
                    let record = SplitRecord {
                        line: index + 1,
                        tokens,
                    };
                    println!("{}", serde_json::to_string(&record)?);
                } else {
                    print_tokens(&tokens);
                }
            }
        }
    }

    Ok(())
}

fn check(line: Option<String>, tokenizer: &Tokenizer) -> Result<()> {
    log::debug!("Checking with {:?}", tokenizer);

    let mut failures = 0usize;

    match line {
        Some(line) => {
            if let Err(e) = tokenizer.parse(&line) {
                failures += 1;
                report_error("<input>", &line, &e)?;
            }
        }
        None => {
            for (index, line) in io::stdin().lock().lines().enumerate() {
                let line = line.context("Failed to read from stdin")?;
                if let Err(e) = tokenizer.parse(&line) {
                    failures += 1;
                    report_error(&format!("<stdin>:{}", index + 1), &line, &e)?;
                }
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("Found {} line(s) that do not tokenize", failures);
    }

    println!("{}: No errors found", "success".green().bold());
    Ok(())
}

fn print_tokens(tokens: &[String]) {
    for token in tokens {
        println!("{}", token);
    }
}

/// Runs the tokenizer on one line, rendering a diagnostic on failure.
fn tokenize(source: &str, name: &str, tokenizer: &Tokenizer) -> Result<Vec<String>> {
    match tokenizer.parse(source) {
        Ok(tokens) => Ok(tokens),
        Err(e) => {
            report_error(name, source, &e)?;
            anyhow::bail!("Tokenization failed");
        }
    }
}

fn report_error(name: &str, source: &str, error: &ParseError) -> Result<()> {
    let mut files = SimpleFiles::new();
    let file_id = files.add(name.to_string(), source.to_string());

    let writer = StandardStream::stderr(ColorChoice::Always);
    let config = codespan_reporting::term::Config::default();
    codespan_reporting::term::emit(
        &mut writer.lock(),
        &config,
        &files,
        &error.to_diagnostic(file_id),
    )?;
    Ok(())
}
