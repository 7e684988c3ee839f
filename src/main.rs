use anyhow::Context;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use regex_extractor::classify;
use regex_extractor::pattern::MatchResult;
use regex_extractor::patterns::{bracket, email, phonenumber};
use serde_json::json;
use std::collections::HashMap;
use std::fs;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

/// Regex extractor for pulling structured tokens out of text files
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to text file to scan
    #[arg(index = 1)]
    file_path: PathBuf,

    /// Process only first N lines (optional)
    #[arg(short, long)]
    limit: Option<usize>,

    /// Show only specific categories (comma-separated)
    #[arg(short, long)]
    categories: Option<String>,

    /// Exclude specific categories (comma-separated)
    #[arg(short, long)]
    exclude: Option<String>,

    /// Verbose output with extraction details
    #[arg(short, long)]
    verbose: bool,

    /// Show statistics for extracted tokens
    #[arg(short, long)]
    stats: bool,

    /// Sample 1 in N lines (for faster processing of huge files)
    #[arg(short = 'S', long)]
    sample: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let excluded_categories: Vec<String> = match &args.exclude {
        Some(excl) => excl.split(',').map(|s| s.trim().to_string()).collect(),
        None => Vec::new(),
    };

    let filter_categories: Vec<String> = match &args.categories {
        Some(cats) => cats.split(',').map(|s| s.trim().to_string()).collect(),
        None => Vec::new(),
    };

    // Stats mode drives a progress bar, so it needs the line count up front
    let total_lines = if args.stats {
        let file = File::open(&args.file_path)
            .with_context(|| format!("cannot open {}", args.file_path.display()))?;
        BufReader::with_capacity(1_000_000, file).lines().count()
    } else {
        0
    };

    let limit = args.limit.unwrap_or(usize::MAX);
    let process_total = match args.limit {
        Some(limit) if limit < total_lines => limit,
        _ => total_lines,
    };

    let progress_bar = if args.stats {
        let pb = ProgressBar::new(process_total as u64);
        pb.set_style(ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} lines ({eta})")
            .unwrap()
            .progress_chars("#>-"));
        Some(pb)
    } else {
        None
    };

    let mut category_counts: HashMap<String, usize> = HashMap::new();
    let mut total_extractions = 0usize;

    if !args.stats {
        println!("Processing file: {}", args.file_path.display());
    }

    let file = File::open(&args.file_path)
        .with_context(|| format!("cannot open {}", args.file_path.display()))?;
    let reader = BufReader::with_capacity(1_000_000, file);

    let mut line_count = 0;
    let sampling_rate = args.sample.unwrap_or(1);

    for line_result in reader.lines() {
        line_count += 1;

        if line_count > limit {
            break;
        }

        if sampling_rate > 1 && line_count % sampling_rate != 0 {
            continue;
        }

        if let Some(pb) = &progress_bar {
            if line_count % 1000 == 0 || line_count == 1 {
                pb.set_position(line_count as u64);
            }
        }

        let line = line_result?;

        if !args.stats {
            println!("\nLine {}:", line_count);
        }

        // First match per grammar per line
        let mut tokens = Vec::new();
        let mut debug_extractions = Vec::new();

        if !excluded_categories.contains(&"email".to_string()) {
            if let MatchResult::Found { text, start, end } = email::extract_email(&line) {
                debug_extractions.push(format!("Email: {} [{}..{}]", text, start, end));
                tokens.push(text);
            }
        }

        if !excluded_categories.contains(&"phonenumber".to_string()) {
            if let MatchResult::Found { text, start, end } = phonenumber::extract_phonenumber(&line) {
                debug_extractions.push(format!("Phone: {} [{}..{}]", text, start, end));
                tokens.push(text);
            }
        }

        if !excluded_categories.contains(&"bracket".to_string()) {
            if let MatchResult::Found { text, start, end } = bracket::extract_span(&line) {
                debug_extractions.push(format!("Span: {} [{}..{}]", text, start, end));
                tokens.push(text);
            }
        }

        if args.verbose && !args.stats {
            println!("Extracted {} tokens:", debug_extractions.len());
            for extraction in debug_extractions {
                println!("  {}", extraction);
            }
        }

        // Classify each extracted token
        let mut found_categories = false;
        for token in tokens {
            let mut categories = classify(&token);

            if !excluded_categories.is_empty() {
                categories.retain(|c| !excluded_categories.contains(c));
            }

            if categories.is_empty()
                || (!filter_categories.is_empty()
                    && !categories.iter().any(|c| filter_categories.contains(c)))
            {
                continue;
            }

            if args.stats {
                for category in &categories {
                    *category_counts.entry(category.clone()).or_insert(0) += 1;
                    total_extractions += 1;
                }
            } else {
                println!("  \"{}\" => {}", token, categories.join(", "));
                found_categories = true;
            }
        }

        if !found_categories && !args.stats {
            println!("  No pattern matches found");
        }
    }

    if let Some(pb) = &progress_bar {
        pb.finish_and_clear();
    }

    // Display statistics if enabled
    if args.stats {
        let mut category_stats: Vec<serde_json::Value> = Vec::new();

        // Sort categories by count (highest first)
        let mut categories: Vec<_> = category_counts.iter().collect();
        categories.sort_by(|a, b| b.1.cmp(a.1));

        for (category, count) in categories {
            let percentage = if total_extractions > 0 {
                ((*count as f64) / (total_extractions as f64) * 100.0).round()
            } else {
                0.0
            };

            category_stats.push(json!({
                "category": category,
                "count": count,
                "percentage": percentage
            }));
        }

        let stats_json = json!({
            "summary": {
                "total_lines_processed": line_count,
                "total_extractions": total_extractions,
                "file_path": args.file_path.to_string_lossy()
            },
            "categories": category_stats
        });

        match fs::write("outputstats.json", serde_json::to_string_pretty(&stats_json)?) {
            Ok(_) => println!("Statistics written to outputstats.json"),
            Err(e) => eprintln!("Error writing statistics file: {}", e),
        }
    }
    Ok(())
}
