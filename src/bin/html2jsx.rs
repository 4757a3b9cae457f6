//! Thin host: read an HTML fragment from a file (or stdin) and print the
//! equivalent JSX source.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use html2jsx::{ConvertOptions, HtmlToJsx};

#[derive(Parser)]
#[command(name = "html2jsx")]
#[command(about = "Convert an HTML fragment to JSX source")]
#[command(version)]
struct Cli {
    /// HTML file to convert; reads stdin when omitted
    input: Option<PathBuf>,

    /// Per-level indentation unit
    #[arg(long, default_value = "  ")]
    indent: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    fmt().with_env_filter(filter).with_target(false).init();

    let html = match &cli.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let converter = HtmlToJsx::with_options(ConvertOptions { indent: cli.indent });
    println!("{}", converter.convert(&html)?);
    Ok(())
}
