//! Dump every knowledgebase row, unfiltered, as one JSON array.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use kb_schema::{KbConfig, Knowledgebase};
use kb_tools::{logging, JsonDumpExporter};

#[derive(Parser)]
#[command(name = "convert_to_json")]
#[command(about = "Convert the knowledgebase CSV into knowledgebase.json")]
#[command(version)]
struct Cli {
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Knowledgebase CSV (defaults to knowledgebase.csv)
    #[arg(long)]
    input: Option<PathBuf>,

    /// Output file (defaults to knowledgebase.json)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = KbConfig::load_or_default(cli.config.as_deref())?;
    let input = cli.input.unwrap_or(config.input);
    let output = cli.output.unwrap_or(config.json_output);

    let kb = Knowledgebase::load(&input)
        .with_context(|| format!("reading knowledgebase {}", input.display()))?;

    JsonDumpExporter::new()
        .write_to_path(&kb, &output)
        .with_context(|| format!("writing {}", output.display()))?;

    Ok(())
}
