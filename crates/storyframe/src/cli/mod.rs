//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the storyframe binary.

mod commands;
mod extract;
mod local;
mod output;

pub use commands::{Cli, Commands, OutputFormat};
pub use extract::{extract, revise};
pub use local::{parse_file, plan_file};

use std::path::Path;
use storyframe::{ScriptError, ScriptErrorKind, StoryframeConfig, StoryframeResult};

/// Loads `path` over the bundled defaults, or searches the usual places.
pub fn load_config(path: Option<&Path>) -> StoryframeResult<StoryframeConfig> {
    match path {
        Some(path) => StoryframeConfig::from_file(path),
        None => StoryframeConfig::load(),
    }
}

/// Reads a script file, rejecting whitespace-only content.
pub fn read_script(path: &Path) -> StoryframeResult<String> {
    let script = std::fs::read_to_string(path).map_err(|e| {
        ScriptError::new(ScriptErrorKind::Read(format!("{}: {}", path.display(), e)))
    })?;
    if script.trim().is_empty() {
        return Err(ScriptError::new(ScriptErrorKind::EmptyScript).into());
    }
    Ok(script)
}
