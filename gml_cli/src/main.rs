//! # GML Tokenizer CLI
//!
//! Scans a GML source file into its complete token sequence and reports the
//! result. Layout and comment tokens are produced like everything else, so a
//! successful scan always covers the whole file.

use clap::Parser;
use gml_tokenizer::utils::SourceMap;
use gml_tokenizer::{file_processor, logging, TokenStream, Tokenizer};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gml-tokenize", version, about = "Tokenizer for GML source files")]
struct Cli {
    /// Path to the GML file to tokenize
    file: PathBuf,

    /// Print every token, one per line
    #[arg(long)]
    tokens: bool,

    /// Emit the token sequence as JSON on stdout
    #[arg(long)]
    json: bool,

    /// Suppress the scan summary
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_global_logging()?;

    let cli = Cli::parse();
    let file_path = cli.file.display().to_string();

    let processed = match file_processor::process_file(&file_path) {
        Ok(processed) => processed,
        Err(error) => {
            eprintln!("Error: {}", error);
            std::process::exit(1);
        }
    };

    let mut tokenizer = Tokenizer::new();
    let tokens = match tokenizer.tokenize(&processed.source) {
        Ok(tokens) => tokens,
        Err(error) => {
            let map = SourceMap::new(processed.source.clone());
            let position = map.position_at(error.offset());
            eprint!("{}", map.format_error(position, &error.to_string()));
            std::process::exit(1);
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&tokens)?);
    } else if cli.tokens {
        for token in &tokens {
            println!("{}", token);
        }
    }

    if !cli.quiet {
        let stream = TokenStream::new(tokens);
        let metrics = tokenizer.metrics();
        println!("Scanned: {}", file_path);
        println!("  Tokens: {}", stream.total_len());
        println!("  Significant: {}", stream.len());
        println!("  Layout: {}", metrics.layout_tokens);
        println!("  Comments: {}", metrics.comment_tokens);
        println!("  Bytes: {}", metrics.bytes_consumed);
    }

    Ok(())
}
