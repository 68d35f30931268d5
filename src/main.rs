//! CLI for md2docx - Markdown to document renderer

use clap::{Parser, ValueEnum};
use md2docx::config::Loader;
use md2docx::render::{JsonRenderer, OutlineRenderer, Renderer};
use md2docx::{MarkdownToDocx, RenderOptions, UnsupportedNodePolicy};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input Markdown file path
    input: PathBuf,

    /// Output file path (optional, prints to stdout if not specified)
    output: Option<PathBuf>,

    /// TOML configuration layered over the built-in defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Start from an empty configuration instead of the built-in defaults
    #[arg(long)]
    no_defaults: bool,

    /// Fail on Markdown constructs that have no rendering rule
    #[arg(long)]
    strict: bool,

    /// Dump format of the rendered document
    #[arg(long, value_enum, default_value_t = Format::Outline)]
    format: Format,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Outline,
    Json,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_options(args: &Args) -> md2docx::Result<RenderOptions> {
    let mut loader = if args.no_defaults {
        Loader::empty()
    } else {
        Loader::new()?
    };
    if let Some(path) = &args.config {
        loader = loader.with_file(path)?;
    }

    let mut options: RenderOptions = loader.build()?.into();
    if args.strict {
        options.unsupported_nodes = UnsupportedNodePolicy::Fail;
    }
    Ok(options)
}

fn run(args: &Args) -> md2docx::Result<String> {
    let converter = MarkdownToDocx::new(load_options(args)?);
    let document = converter.convert(&args.input)?;
    match args.format {
        Format::Outline => OutlineRenderer.render(&document),
        Format::Json => JsonRenderer::pretty().render(&document),
    }
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(dump) => {
            if let Some(output) = &args.output {
                if let Err(e) = std::fs::write(output, &dump) {
                    eprintln!("Error writing output: {}", e);
                    std::process::exit(1);
                }
                println!("Successfully rendered to {:?}", output);
            } else {
                print!("{}", dump);
            }
        }
        Err(e) => {
            eprintln!("Error rendering Markdown: {}", e);
            std::process::exit(1);
        }
    }
}
