//! Type-checking collaborator replies into characters.

use mage_core::{Character, Rated, Ratings};
use serde_json::Value;

use crate::error::{ForgeError, ForgeResult};

/// Parse a raw reply into a [`Character`].
///
/// The reply must be one JSON object with every character field. Replies
/// wrapped in a Markdown code fence are accepted. The concept is taken
/// from the request rather than the reply, and the portrait is left empty
/// for the portrait call to fill.
pub fn parse_character(raw: &str, concept: &str) -> ForgeResult<Character> {
    let mut value: Value = serde_json::from_str(strip_fence(raw))
        .map_err(|e| malformed(format!("not valid JSON: {e}")))?;
    let object = value
        .as_object_mut()
        .ok_or_else(|| malformed("reply is not a JSON object".to_string()))?;
    object.insert("concept".to_string(), Value::String(concept.to_string()));
    object.remove("portraitUrl");

    let character: Character =
        serde_json::from_value(value).map_err(|e| malformed(e.to_string()))?;

    require_complete("attributes", &character.attributes)?;
    require_complete("skills", &character.skills)?;
    require_complete("arcana", &character.arcana)?;
    if character.gnosis == 0 {
        return Err(malformed("gnosis must be at least 1".to_string()));
    }
    if character.name.trim().is_empty() {
        return Err(malformed("name is empty".to_string()));
    }

    Ok(character)
}

fn strip_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(body) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = body.strip_prefix("json").unwrap_or(body);
    body.strip_suffix("```").unwrap_or(body).trim()
}

fn require_complete<K: Rated>(field: &str, ratings: &Ratings<K>) -> ForgeResult<()> {
    let missing = ratings.missing();
    if missing.is_empty() {
        return Ok(());
    }
    let names: Vec<&str> = missing.iter().map(|k| k.label()).collect();
    Err(malformed(format!("{field} is missing {}", names.join(", "))))
}

fn malformed(message: String) -> ForgeError {
    ForgeError::MalformedGenerationResponse(message)
}
