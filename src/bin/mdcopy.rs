//! Command-line front end: read HTML from a file or stdin, print Markdown.
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`.

use clap::Parser;
use rs_mdcopy::{extract_bytes_with_options, Options};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mdcopy")]
#[command(about = "Extract clipboard-ready Markdown from rendered chat markup")]
#[command(version)]
struct Args {
    /// HTML file to read (stdin when omitted)
    input: Option<PathBuf>,

    /// CSS selector of the extraction root (defaults to <body>)
    #[arg(short, long)]
    selector: Option<String>,

    /// Attribute holding the pre-render source of diagram containers
    #[arg(long, value_name = "NAME")]
    diagram_attr: Option<String>,

    /// Maximum element depth walked below the root
    #[arg(long, value_name = "N")]
    max_depth: Option<usize>,

    /// JSON file with extraction options
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the full result (markdown, raw text, warnings) as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> rs_mdcopy::Result<()> {
    let options = build_options(args)?;

    let html = match &args.input {
        Some(path) => fs::read(path)?,
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            buf
        }
    };

    let result = extract_bytes_with_options(&html, &options)?;
    for warning in &result.warnings {
        log::warn!("{warning}");
    }

    if args.json {
        println!("{}", result.to_json()?);
    } else {
        println!("{}", result.markdown);
    }
    Ok(())
}

/// Options from the config file (or defaults), overridden by flags.
fn build_options(args: &Args) -> rs_mdcopy::Result<Options> {
    let mut options = match &args.config {
        Some(path) => Options::from_json_str(&fs::read_to_string(path)?)?,
        None => Options::default(),
    };

    if let Some(selector) = &args.selector {
        options.root_selector = Some(selector.clone());
    }
    if let Some(attr) = &args.diagram_attr {
        options.diagram_source_attribute = Some(attr.clone());
    }
    if let Some(depth) = args.max_depth {
        options.max_depth = depth;
    }
    Ok(options)
}
