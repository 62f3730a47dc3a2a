//! CLI tool for normalizing extracted lecture text.

use anyhow::{Context, Result};
use clap::Parser;
use lectext_core::{Document, TextNormalizer};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

/// Normalize extracted lecture text into clean LLM-ready input.
#[derive(Parser, Debug)]
#[command(name = "lectext")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input text dump(s) (.txt/.md) or extractor JSON dump(s) (.json)
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Output directory (default: same as input file)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print output to stdout instead of writing to file
    #[arg(short, long)]
    print: bool,

    /// Repetitions at which a short line is treated as boilerplate
    #[arg(long, default_value = "3")]
    repeat_threshold: usize,

    /// Shortest line length considered for boilerplate detection
    #[arg(long, default_value = "3")]
    min_line_len: usize,

    /// Longest line length considered for boilerplate detection
    #[arg(long, default_value = "80")]
    max_line_len: usize,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let normalizer = TextNormalizer::new()
        .with_repeat_threshold(args.repeat_threshold)
        .with_length_window(args.min_line_len, args.max_line_len);

    for input_path in &args.input {
        if args.verbose {
            eprintln!("Processing: {}", input_path.display());
        }

        match process_file(input_path, &args, &normalizer) {
            Ok(output) => {
                if args.print {
                    print!("{}", output);
                } else {
                    let output_path = get_output_path(input_path, args.output.as_ref())?;
                    write_output(&output_path, &output)?;
                    if args.verbose {
                        eprintln!("Written to: {}", output_path.display());
                    }
                }
            }
            Err(e) => {
                eprintln!("Error processing {}: {}", input_path.display(), e);
            }
        }
    }

    Ok(())
}

/// Normalize a single input file.
fn process_file(input_path: &Path, args: &Args, normalizer: &TextNormalizer) -> Result<String> {
    let extension = input_path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);

    let raw = if extension.as_deref() == Some("json") {
        log::debug!("Loading extractor JSON dump");
        let file = File::open(input_path)
            .with_context(|| format!("Failed to open {}", input_path.display()))?;
        let document = Document::from_json_reader(BufReader::new(file))
            .with_context(|| format!("Failed to load {}", input_path.display()))?;

        if args.verbose {
            eprintln!("  Found {} units", document.units.len());
        }

        document.assemble()
    } else {
        std::fs::read_to_string(input_path)
            .with_context(|| format!("Failed to read {}", input_path.display()))?
    };

    let mut normalized = normalizer.normalize(&raw);

    if args.verbose {
        eprintln!("  Normalized to {} lines", normalized.lines().count());
    }

    if !normalized.is_empty() {
        normalized.push('\n');
    }

    Ok(normalized)
}

/// Determine the output path for a processed file.
fn get_output_path(input_path: &Path, output_dir: Option<&PathBuf>) -> Result<PathBuf> {
    let stem = input_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");

    let output_filename = format!("{}.txt", stem);

    let output_path = match output_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
            dir.join(output_filename)
        }
        None => {
            if let Some(parent) = input_path.parent() {
                parent.join(output_filename)
            } else {
                PathBuf::from(output_filename)
            }
        }
    };

    // A .txt input written beside itself would be clobbered
    if output_path.as_path() == input_path {
        return Ok(output_path.with_extension("norm.txt"));
    }

    Ok(output_path)
}

/// Write output to a file.
fn write_output(path: &Path, content: &str) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;

    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write to {}", path.display()))?;

    Ok(())
}
