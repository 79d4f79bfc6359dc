//! Layered run settings: defaults, then the TOML file, then `KINSHIP_*`
//! environment variables, then command-line flags.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use kinship_table::OutputFormat;
use serde::Deserialize;

const DEFAULT_OUTPUT: &str = "family_tree.txt";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
  /// Where the relationship table is written.
  pub output: PathBuf,
  pub format: OutputFormat,
}

/// Command-line values that take precedence over every other layer.
#[derive(Debug, Default)]
pub struct Overrides {
  pub output: Option<PathBuf>,
  pub format: Option<OutputFormat>,
}

impl Settings {
  /// Build settings from an optional config file plus `overrides`. A missing
  /// file is not an error.
  pub fn load(config_file: &Path, overrides: Overrides) -> anyhow::Result<Self> {
    let mut builder = config::Config::builder()
      .set_default("output", DEFAULT_OUTPUT)?
      .set_default("format", OutputFormat::default().to_string())?
      .add_source(config::File::from(config_file).required(false))
      .add_source(config::Environment::with_prefix("KINSHIP"));

    if let Some(output) = overrides.output {
      builder =
        builder.set_override("output", output.to_string_lossy().into_owned())?;
    }
    if let Some(format) = overrides.format {
      builder = builder.set_override("format", format.to_string())?;
    }

    builder
      .build()
      .context("failed to read config file")?
      .try_deserialize()
      .context("failed to deserialise Settings")
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_apply_without_a_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let settings =
      Settings::load(&dir.path().join("absent.toml"), Overrides::default())
        .unwrap();

    assert_eq!(settings.output, PathBuf::from(DEFAULT_OUTPUT));
    assert_eq!(settings.format, OutputFormat::Text);
  }

  #[test]
  fn config_file_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kinship.toml");
    std::fs::write(&path, "output = \"tree.json\"\nformat = \"json\"\n")
      .unwrap();

    let settings = Settings::load(&path, Overrides::default()).unwrap();
    assert_eq!(settings.output, PathBuf::from("tree.json"));
    assert_eq!(settings.format, OutputFormat::Json);
  }

  #[test]
  fn flags_override_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kinship.toml");
    std::fs::write(&path, "output = \"tree.json\"\nformat = \"json\"\n")
      .unwrap();

    let settings = Settings::load(&path, Overrides {
      output: Some(PathBuf::from("out.txt")),
      format: Some(OutputFormat::Text),
    })
    .unwrap();
    assert_eq!(settings.output, PathBuf::from("out.txt"));
    assert_eq!(settings.format, OutputFormat::Text);
  }

  #[test]
  fn unknown_format_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kinship.toml");
    std::fs::write(&path, "format = \"xml\"\n").unwrap();

    assert!(Settings::load(&path, Overrides::default()).is_err());
  }
}
