//! Report statements that appear under more than one emotion, and flag
//! duplicates whose categories disagree.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, warn};

use kb_schema::{KbConfig, Knowledgebase};
use kb_tools::{logging, to_spaced_json, DuplicateIndex};

#[derive(Parser)]
#[command(name = "check_for_duplicates")]
#[command(about = "Find duplicate statements in the knowledgebase and flag category mismatches")]
#[command(version)]
struct Cli {
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Knowledgebase CSV (defaults to knowledgebase.csv)
    #[arg(long)]
    input: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = KbConfig::load_or_default(cli.config.as_deref())?;
    let input = cli.input.unwrap_or(config.input);

    let kb = Knowledgebase::load(&input)
        .with_context(|| format!("reading knowledgebase {}", input.display()))?;
    if let Some(first) = kb.rows().first() {
        debug!(?first, "first row");
    }

    let report = DuplicateIndex::build(kb.rows()).report();
    for entry in report.mismatches() {
        warn!(statement = %entry.statement, "duplicate statement with mismatched categories");
    }

    if cli.json {
        println!("{}", to_spaced_json(&report)?);
    } else {
        print!("{}", report);
    }

    Ok(())
}
