//! Config command handler
//!
//! Reads and edits the TOML config file by dotted key.

use crate::config::Config;
use crate::error::{Error, Result};
use clap::Args;
use std::path::Path;

/// Config command arguments
#[derive(Args, Default)]
pub struct ConfigArgs {
    /// Dotted key such as "sources.offline"
    pub key: Option<String>,

    /// New value; omit to print the current one
    pub value: Option<String>,

    /// Print where the config file lives
    #[arg(long)]
    pub path: bool,

    /// Overwrite the file with defaults
    #[arg(long)]
    pub reset: bool,
}

/// Run the config command
pub fn run(args: ConfigArgs) -> Result<()> {
    let output = execute(&args, &Config::config_path()?)?;
    println!("{}", output);
    Ok(())
}

/// Carry out `args` against the config file at `path` and return what to print
fn execute(args: &ConfigArgs, path: &Path) -> Result<String> {
    if args.path {
        return Ok(path.display().to_string());
    }

    if args.reset {
        Config::default().save_to(path)?;
        return Ok(format!("Reset {} to defaults", path.display()));
    }

    let mut config = Config::load_from(path)?;

    match (args.key.as_deref(), args.value.as_deref()) {
        (None, None) => toml::to_string_pretty(&config)
            .map(|rendered| rendered.trim_end().to_string())
            .map_err(|e| Error::Config(format!("Failed to render config: {}", e))),
        (Some(key), None) => config.get(key).ok_or_else(|| {
            Error::Config(format!(
                "Unknown config key: {} (available: {})",
                key,
                Config::available_keys().join(", ")
            ))
        }),
        (Some(key), Some(value)) => {
            config.set(key, value)?;
            config.save_to(path)?;
            Ok(format!("{} = {}", key, value))
        }
        (None, Some(_)) => Err(Error::Config(
            "A value needs a key to go with it".to_string(),
        )),
    }
}
