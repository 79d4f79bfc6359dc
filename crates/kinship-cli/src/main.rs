//! `kinship` — build a family tree from a person table.
//!
//! # Usage
//!
//! ```
//! kinship persons.txt
//! kinship persons.txt --output tree.json --format json
//! kinship persons.txt --config ~/.config/kinship.toml
//! ```
//!
//! The input is a `|`-delimited table with the columns `Person_Id`,
//! `Person_Name`, `Family_Name`, `Gender`, `Father_Id`, `Mother_Id` and
//! `Spouse_Id`. The output lists one inferred relationship per line.

mod settings;

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use kinship_core::{FamilyTree, build_family_tree, reconcile::ReconcileReport};
use kinship_table::OutputFormat;
use settings::{Overrides, Settings};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Infer family relationships from a person table")]
struct Cli {
  /// Path to the `|`-delimited person table.
  input: PathBuf,

  /// Where to write the relationship table (default: family_tree.txt).
  #[arg(short, long, value_name = "FILE")]
  output: Option<PathBuf>,

  /// Output format: `text` or `json`.
  #[arg(short, long)]
  format: Option<OutputFormat>,

  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "kinship.toml")]
  config: PathBuf,
}

fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();
  run(cli).map(|_| ())
}

fn run(cli: Cli) -> anyhow::Result<FamilyTree> {
  let settings = Settings::load(&cli.config, Overrides {
    output: cli.output,
    format: cli.format,
  })?;

  let persons = kinship_table::read_table(&cli.input).with_context(|| {
    format!("failed to read person table {}", cli.input.display())
  })?;
  tracing::info!(rows = persons.len(), "read person table");

  let tree = build_family_tree(persons).context("failed to build family tree")?;
  log_reconciliation(&tree.report);
  tracing::info!(edges = tree.relationships.len(), "inferred relationships");

  kinship_table::write_table(
    &settings.output,
    &tree.relationships,
    settings.format,
  )
  .with_context(|| {
    format!("failed to write {}", settings.output.display())
  })?;
  tracing::info!(
    "finished creating family tree at {}",
    settings.output.display()
  );

  Ok(tree)
}

fn log_reconciliation(report: &ReconcileReport) {
  for fill in &report.backfilled {
    tracing::debug!(
      person = %fill.person,
      spouse = %fill.spouse,
      "filled in missing spouse"
    );
  }
  for conflict in &report.conflicts {
    tracing::warn!(
      person = %conflict.person,
      spouse = %conflict.spouse,
      replaced = %conflict.replaced,
      "overwrote conflicting spouse id"
    );
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn cli_parses_flags() {
    let cli = Cli::try_parse_from([
      "kinship", "persons.txt", "-o", "tree.json", "--format", "json",
    ])
    .unwrap();
    assert_eq!(cli.input, PathBuf::from("persons.txt"));
    assert_eq!(cli.output, Some(PathBuf::from("tree.json")));
    assert_eq!(cli.format, Some(OutputFormat::Json));
    assert_eq!(cli.config, PathBuf::from("kinship.toml"));
  }

  #[test]
  fn run_writes_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("persons.txt");
    let output = dir.path().join("tree.json");
    std::fs::write(
      &input,
      "Person_Id|Gender|Father_Id|Mother_Id|Spouse_Id\n1|M|||2\n2|F|||\n",
    )
    .unwrap();

    let tree = run(Cli {
      input,
      output: Some(output.clone()),
      format: Some(OutputFormat::Json),
      config: dir.path().join("absent.toml"),
    })
    .unwrap();

    assert_eq!(tree.report.backfilled.len(), 1);
    let written: serde_json::Value =
      serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(written.as_array().map(Vec::len), Some(2));
    assert_eq!(written[0]["connection_type"], "Female partner");
  }

  #[test]
  fn run_fails_on_non_numeric_ids() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("persons.txt");
    std::fs::write(
      &input,
      "Person_Id|Gender|Father_Id|Mother_Id|Spouse_Id\na|M|b||\n",
    )
    .unwrap();

    let err = run(Cli {
      input,
      output: Some(dir.path().join("out.txt")),
      format: None,
      config: dir.path().join("absent.toml"),
    })
    .unwrap_err();
    assert!(format!("{err:#}").contains("not an integer"));
    assert!(!dir.path().join("out.txt").exists());
  }
}
