pub mod advance;
pub mod catalog;
pub mod check;
pub mod costs;
pub mod export;
pub mod forge;
pub mod prompt;

use std::path::Path;

use mage_core::Character;
use mage_mechanics::{AdvantageSelection, NarrativeSelections, RANDOM};

/// Read and parse a character JSON file.
fn load_character(path: &Path) -> Result<Character, String> {
    let text = read_file(path)?;
    serde_json::from_str(&text).map_err(|e| format!("{} is not a character: {e}", path.display()))
}

fn read_file(path: &Path) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| format!("cannot read {}: {e}", path.display()))
}

fn write_file(path: &Path, content: &str) -> Result<(), String> {
    std::fs::write(path, content).map_err(|e| format!("cannot write to {}: {e}", path.display()))
}

/// Build raw narrative selections from optional command-line values.
pub fn selections(
    tarot: Option<&str>,
    archetype: Option<&str>,
    advantages: &[String],
    disadvantage: Option<&str>,
    dark_secret: Option<&str>,
) -> NarrativeSelections {
    let raw = |value: Option<&str>| value.unwrap_or(RANDOM).to_string();
    NarrativeSelections {
        tarot_card: raw(tarot),
        archetype: raw(archetype),
        advantages: AdvantageSelection::from_picks(advantages),
        disadvantage: raw(disadvantage),
        dark_secret: raw(dark_secret),
    }
}

/// Render a forge error for the terminal: the user-facing message plus
/// the diagnostic help line, if any.
fn describe_forge_error(error: &mage_forge::ForgeError) -> String {
    use miette::Diagnostic;

    tracing::debug!(%error, "forge failed");
    let mut message = error.user_message();
    if let Some(code) = error.code() {
        message = format!("[{code}] {message}");
    }
    if let Some(help) = error.help() {
        message.push_str(&format!("\n  help: {help}"));
    }
    message
}
