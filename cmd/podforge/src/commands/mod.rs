//! CLI subcommands.

mod cover;
mod list;
mod script;
mod serve;
mod synth;

pub use cover::CoverCommand;
pub use list::ListCommand;
pub use script::ScriptCommand;
pub use serve::ServeCommand;
pub use synth::SynthCommand;

use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

/// Loads a YAML or JSON request file, keyed off the extension.
pub(crate) fn load_request<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let value = if path.extension().is_some_and(|e| e == "json") {
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?
    } else {
        serde_yaml::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?
    };
    Ok(value)
}
