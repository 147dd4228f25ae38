//! HuffArc CLI - per-file Huffman archiving.
//!
//! A Pure Rust archiver storing each file with its own static Huffman
//! tree in the self-describing `.hfa` container.

mod utils;

use clap::{Parser, Subcommand};
use huffarc_archive::{ArchiveFile, decode_archive, scan_entries};
use huffarc_huffman::{FrequencyTable, build_tree};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use utils::{create_progress_bar, format_size, sanitize_entry_path};

#[derive(Parser)]
#[command(name = "hfa")]
#[command(author, version, about = "HuffArc - per-file Huffman archiver")]
#[command(long_about = "
HuffArc compresses each file with its own static Huffman tree and
stores the results in a self-describing .hfa container.

Examples:
  hfa create archive.hfa file1.txt file2.txt
  hfa extract archive.hfa -o restored/
  hfa list archive.hfa --json
  hfa info archive.hfa
  hfa tree --pairs a=8 --pairs b=1 --pairs c=1
  hfa tree notes.txt
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new archive
    #[command(alias = "c")]
    Create {
        /// Output archive file
        archive: PathBuf,

        /// Files to add to the archive
        files: Vec<PathBuf>,

        /// Show verbose output
        #[arg(short, long)]
        verbose: bool,

        /// Show progress bar
        #[arg(short = 'P', long, default_value = "true")]
        progress: bool,
    },

    /// Extract files from an archive
    #[command(alias = "x")]
    Extract {
        /// Archive file to extract
        archive: PathBuf,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// Show verbose output
        #[arg(short, long)]
        verbose: bool,

        /// Show progress bar
        #[arg(short = 'P', long, default_value = "true")]
        progress: bool,
    },

    /// List contents of an archive
    #[command(alias = "l")]
    List {
        /// Archive file to list
        archive: PathBuf,

        /// Show verbose output
        #[arg(short, long)]
        verbose: bool,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Show information about an archive
    #[command(alias = "i")]
    Info {
        /// Archive file to inspect
        archive: PathBuf,
    },

    /// Print a Huffman tree and code table as JSON
    Tree {
        /// Derive frequencies from this file's contents
        file: Option<PathBuf>,

        /// Explicit symbol=count pair (repeatable), e.g. a=8 or 0x0A=3
        #[arg(short, long)]
        pairs: Vec<String>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Create {
            archive,
            files,
            verbose,
            progress,
        } => cmd_create(&archive, &files, verbose, progress),
        Commands::Extract {
            archive,
            output,
            verbose,
            progress,
        } => cmd_extract(&archive, &output, verbose, progress),
        Commands::List {
            archive,
            verbose,
            json,
        } => cmd_list(&archive, verbose, json),
        Commands::Info { archive } => cmd_info(&archive),
        Commands::Tree {
            file,
            pairs,
            pretty,
        } => cmd_tree(file.as_deref(), &pairs, pretty),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_create(
    archive: &PathBuf,
    files: &[PathBuf],
    verbose: bool,
    progress: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let pb = create_progress_bar(files.len() as u64, progress && !verbose);

    let mut inputs = Vec::with_capacity(files.len());
    for path in files {
        pb.set_message(path.display().to_string());
        let data = fs::read(path)?;
        if verbose {
            println!("  adding {} ({})", path.display(), format_size(data.len() as u64));
        }
        inputs.push(ArchiveFile::new(path.to_string_lossy(), data));
        pb.inc(1);
    }
    pb.finish_and_clear();

    #[cfg(feature = "parallel")]
    let encoded = huffarc_archive::encode_archive_parallel(&inputs)?;
    #[cfg(not(feature = "parallel"))]
    let encoded = huffarc_archive::encode_archive(&inputs)?;

    fs::write(archive, &encoded)?;

    let original: u64 = inputs.iter().map(|f| f.data.len() as u64).sum();
    println!(
        "Created {}: {} files, {} -> {}",
        archive.display(),
        inputs.len(),
        format_size(original),
        format_size(encoded.len() as u64)
    );
    Ok(())
}

fn cmd_extract(
    archive: &PathBuf,
    output: &PathBuf,
    verbose: bool,
    progress: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(archive)?;
    let files = decode_archive(&data)?;

    let pb = create_progress_bar(files.len() as u64, progress && !verbose);
    for file in &files {
        pb.set_message(file.name.clone());
        let path = sanitize_entry_path(output, &file.name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, &file.data)?;
        if verbose {
            println!("  {} ({})", path.display(), format_size(file.data.len() as u64));
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    println!("Extracted {} files to {}", files.len(), output.display());
    Ok(())
}

/// JSON row for `list --json`.
#[derive(Serialize)]
struct ListEntry {
    name: String,
    original_size: u64,
    stored_size: u64,
    tree_bits: u64,
    payload_bits: u64,
    compression_ratio: f64,
}

fn cmd_list(
    archive: &PathBuf,
    verbose: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(archive)?;
    let entries = scan_entries(&data)?;

    if json {
        let rows: Vec<ListEntry> = entries
            .iter()
            .map(|e| ListEntry {
                name: e.name.clone(),
                original_size: e.original_size,
                stored_size: e.stored_size,
                tree_bits: e.tree_bits,
                payload_bits: e.payload_bits,
                compression_ratio: e.compression_ratio(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("Archive: {}", archive.display());
    println!();
    println!("{:>10}  {:>10}  {:>6}  Name", "Size", "Stored", "Ratio");
    for entry in &entries {
        println!(
            "{:>10}  {:>10}  {:>5.1}%  {}",
            format_size(entry.original_size),
            format_size(entry.stored_size),
            entry.compression_ratio(),
            entry.name
        );
        if verbose {
            println!(
                "{:>30}  tree {} bits, payload {} bits",
                "", entry.tree_bits, entry.payload_bits
            );
        }
    }
    println!();
    println!("{} entries", entries.len());
    Ok(())
}

fn cmd_info(archive: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(archive)?;
    let entries = scan_entries(&data)?;

    let original: u64 = entries.iter().map(|e| e.original_size).sum();
    let stored: u64 = entries.iter().map(|e| e.stored_size).sum();
    let savings = if original > 0 {
        100.0 - (stored as f64 / original as f64) * 100.0
    } else {
        0.0
    };

    println!("Archive: {}", archive.display());
    println!("  Format: HuffArc v{}", huffarc_archive::VERSION);
    println!("  Entries: {}", entries.len());
    println!("  Original size: {}", format_size(original));
    println!("  Archive size: {}", format_size(data.len() as u64));
    println!("  Space savings: {:.1}%", savings);
    Ok(())
}

/// JSON document for the `tree` subcommand.
#[derive(Serialize)]
struct TreeOutput {
    tree: huffarc_huffman::TreeDescription,
    codes: Vec<huffarc_huffman::SymbolCode>,
}

/// Parse a `symbol=count` argument. The symbol is a single ASCII
/// character, a `0x`-prefixed byte, or a decimal byte value.
fn parse_pair(arg: &str) -> Result<(u8, u64), Box<dyn std::error::Error>> {
    let (symbol, count) = arg
        .split_once('=')
        .ok_or_else(|| format!("invalid pair '{}': expected symbol=count", arg))?;

    let symbol = if let Some(hex) = symbol.strip_prefix("0x") {
        u8::from_str_radix(hex, 16)?
    } else if symbol.len() == 1 && symbol.is_ascii() {
        symbol.as_bytes()[0]
    } else {
        symbol
            .parse::<u8>()
            .map_err(|_| format!("invalid symbol '{}'", symbol))?
    };
    let count: u64 = count
        .parse()
        .map_err(|_| format!("invalid count '{}'", count))?;
    Ok((symbol, count))
}

fn cmd_tree(
    file: Option<&std::path::Path>,
    pairs: &[String],
    pretty: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let pairs: Vec<(u8, u64)> = match (file, pairs.is_empty()) {
        (Some(path), true) => {
            let data = fs::read(path)?;
            FrequencyTable::from_bytes(&data).iter().collect()
        }
        (None, false) => pairs
            .iter()
            .map(|arg| parse_pair(arg))
            .collect::<Result<_, _>>()?,
        (Some(_), false) => return Err("pass either a file or --pairs, not both".into()),
        (None, true) => return Err("pass a file or at least one --pairs symbol=count".into()),
    };

    let (tree, codes) = build_tree(&pairs)?;
    let output = TreeOutput { tree, codes };
    let rendered = if pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{}", rendered);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pair_forms() {
        assert_eq!(parse_pair("a=8").unwrap(), (b'a', 8));
        assert_eq!(parse_pair("0x0A=3").unwrap(), (0x0A, 3));
        assert_eq!(parse_pair("65=2").unwrap(), (65, 2));
        assert!(parse_pair("ab=1").is_err());
        assert!(parse_pair("a").is_err());
        assert!(parse_pair("a=x").is_err());
    }
}
