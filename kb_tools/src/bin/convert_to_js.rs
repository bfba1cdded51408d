//! Write the knowledgebase, minus rows with positive valence, as a JS array
//! assigned to a global variable.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use kb_schema::{KbConfig, Knowledgebase};
use kb_tools::{logging, JsArrayExporter};

#[derive(Parser)]
#[command(name = "convert_to_js")]
#[command(about = "Convert the knowledgebase CSV into knowledgebase.js, skipping positive rows")]
#[command(version)]
struct Cli {
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Knowledgebase CSV (defaults to knowledgebase.csv)
    #[arg(long)]
    input: Option<PathBuf>,

    /// Output file (defaults to knowledgebase.js)
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
    let input = cli.input.clone().unwrap_or_else(|| config.input.clone());
    let output = cli.output.clone().unwrap_or_else(|| config.js_output.clone());

    let kb = Knowledgebase::load(&input)
        .with_context(|| format!("reading knowledgebase {}", input.display()))?;

    let summary = JsArrayExporter::from_config(&config)
        .write_to_path(&kb, &output)
        .with_context(|| format!("writing {}", output.display()))?;
    debug!(?summary, "conversion finished");

    Ok(())
}
