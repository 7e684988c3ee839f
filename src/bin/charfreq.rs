use anyhow::Context;
use clap::Parser;
use regex_extractor::freq::{count_chars, sorted_counts};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

/// Character frequency counter for files or literal text
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to text file (reads stdin when omitted)
    #[arg(index = 1)]
    file_path: Option<PathBuf>,

    /// Count characters of this literal text instead of a file
    #[arg(short, long)]
    text: Option<String>,

    /// Emit counts as JSON
    #[arg(short, long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let message = match (&args.text, &args.file_path) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display()))?,
        (None, None) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let counts = count_chars(&message);
    let entries = sorted_counts(&counts);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for entry in &entries {
            println!("{:?}: {}", entry.character, entry.count);
        }
        println!("{} distinct characters, {} total", entries.len(), message.chars().count());
    }

    Ok(())
}
