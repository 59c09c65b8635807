//! Whole-sheet validation.
//!
//! Collects every problem with a character instead of stopping at the
//! first. Rule breaches are errors. Sheet content outside the built-in
//! catalogs, unreadable specialties, and surplus advantages are warnings.

use mage_core::character::{STARTING_GNOSIS, STARTING_WISDOM, split_specialty};
use mage_core::{Catalog, Catalogs, Character, Rated, Ratings, Skill};
use serde::Serialize;

use crate::allocation::{
    Completeness, validate_arcana_allocation, validate_attribute_allocation,
    validate_skill_allocation,
};
use crate::advancement::audit_xp_log;
use crate::narrative::MAX_ADVANTAGES;
use crate::priority::{ATTRIBUTE_PRIORITIES, SKILL_PRIORITIES, infer_priorities};
use crate::step::{
    ARCANUM_BOUNDS, ATTRIBUTE_BOUNDS, Bounds, GNOSIS_BOUNDS, SKILL_BOUNDS, WISDOM_BOUNDS,
};

/// A warning or error found on a character sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationIssue {
    /// The sheet field the issue concerns.
    pub field: String,
    /// A human-readable description of the issue.
    pub message: String,
    /// Whether this is an error (true) or a warning (false).
    pub is_error: bool,
}

impl ValidationIssue {
    fn error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            is_error: true,
        }
    }

    fn warning(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            is_error: false,
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = if self.is_error { "error" } else { "warning" };
        write!(f, "{level}: {}: {}", self.field, self.message)
    }
}

/// True if any issue is an error.
pub fn has_errors(issues: &[ValidationIssue]) -> bool {
    issues.iter().any(|i| i.is_error)
}

/// Validate a character sheet.
///
/// A character with no experience spent is held to the creation rules
/// (priority allocations, the 4-dot Arcana split, starting Gnosis and
/// Wisdom). An advanced character is held to rating ranges and a log that
/// accounts for every experience point.
pub fn validate_character(character: &Character, catalogs: &Catalogs) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if character.name.trim().is_empty() {
        issues.push(ValidationIssue::error("name", "character has no name"));
    }

    check_ranges("attributes", &character.attributes, ATTRIBUTE_BOUNDS, &mut issues);
    check_ranges("skills", &character.skills, SKILL_BOUNDS, &mut issues);
    check_ranges("arcana", &character.arcana, ARCANUM_BOUNDS, &mut issues);
    check_scalar("gnosis", character.gnosis, GNOSIS_BOUNDS, &mut issues);
    check_scalar("wisdom", character.wisdom, WISDOM_BOUNDS, &mut issues);

    if character.xp == 0 {
        validate_creation(character, &mut issues);
    } else if let Err(e) = audit_xp_log(&character.xp_log, character.xp) {
        issues.push(ValidationIssue::error("xpLog", e.to_string()));
    }

    validate_specialties(character, &mut issues);
    validate_narrative(character, catalogs, &mut issues);

    issues
}

fn check_ranges<K: Rated>(
    field: &str,
    ratings: &Ratings<K>,
    bounds: Bounds,
    issues: &mut Vec<ValidationIssue>,
) {
    for key in K::ALL {
        if let Err(e) = bounds.check(key.label(), ratings.get(*key)) {
            issues.push(ValidationIssue::error(field, e.to_string()));
        }
    }
}

fn check_scalar(field: &str, value: u8, bounds: Bounds, issues: &mut Vec<ValidationIssue>) {
    if let Err(e) = bounds.check(field, value) {
        issues.push(ValidationIssue::error(field, e.to_string()));
    }
}

fn validate_creation(character: &Character, issues: &mut Vec<ValidationIssue>) {
    match infer_priorities(&character.attributes, &ATTRIBUTE_PRIORITIES) {
        Ok(priorities) => {
            if let Err(e) = validate_attribute_allocation(
                &character.attributes,
                &priorities,
                Completeness::Complete,
            ) {
                issues.push(ValidationIssue::error("attributes", e.to_string()));
            }
        }
        Err(e) => issues.push(ValidationIssue::error("attributes", e.to_string())),
    }

    match infer_priorities(&character.skills, &SKILL_PRIORITIES) {
        Ok(priorities) => {
            if let Err(e) =
                validate_skill_allocation(&character.skills, &priorities, Completeness::Complete)
            {
                issues.push(ValidationIssue::error("skills", e.to_string()));
            }
        }
        Err(e) => issues.push(ValidationIssue::error("skills", e.to_string())),
    }

    if let Err(e) =
        validate_arcana_allocation(&character.arcana, character.path, Completeness::Complete)
    {
        issues.push(ValidationIssue::error("arcana", e.to_string()));
    }

    if character.gnosis != STARTING_GNOSIS {
        issues.push(ValidationIssue::error(
            "gnosis",
            format!(
                "Gnosis {} without experience spent, expected {STARTING_GNOSIS}",
                character.gnosis
            ),
        ));
    }
    if character.wisdom != STARTING_WISDOM {
        issues.push(ValidationIssue::error(
            "wisdom",
            format!(
                "Wisdom {} without experience spent, expected {STARTING_WISDOM}",
                character.wisdom
            ),
        ));
    }
    if !character.xp_log.is_empty() {
        issues.push(ValidationIssue::error(
            "xpLog",
            "experience log is not empty but no experience was spent",
        ));
    }
}

fn validate_specialties(character: &Character, issues: &mut Vec<ValidationIssue>) {
    for entry in &character.specialties {
        match split_specialty(entry) {
            Some((skill, _)) if skill.parse::<Skill>().is_err() => issues.push(
                ValidationIssue::warning("specialties", format!("'{entry}' names no known skill")),
            ),
            Some(_) => {}
            None => issues.push(ValidationIssue::warning(
                "specialties",
                format!("'{entry}' is not of the form 'Skill (specialty)'"),
            )),
        }
    }
}

fn validate_narrative(character: &Character, catalogs: &Catalogs, issues: &mut Vec<ValidationIssue>) {
    // Tarot cards may carry an orientation, e.g. "The Moon (Reversed)".
    if let Some(card) = &character.tarot_card {
        let bare = card.split_once('(').map_or(card.as_str(), |(name, _)| name).trim();
        warn_unlisted("tarotCard", bare, catalogs.tarot_cards, issues);
    }
    if let Some(archetype) = &character.archetype {
        warn_unlisted("archetype", archetype, catalogs.archetypes, issues);
    }
    if let Some(disadvantage) = &character.disadvantage {
        warn_unlisted("disadvantage", disadvantage, catalogs.disadvantages, issues);
    }
    if let Some(secret) = &character.dark_secret {
        warn_unlisted("darkSecret", secret, catalogs.dark_secrets, issues);
    }

    let advantages = character.advantage_list();
    if advantages.len() > MAX_ADVANTAGES {
        issues.push(ValidationIssue::warning(
            "advantages",
            format!("{} advantages, at most {MAX_ADVANTAGES}", advantages.len()),
        ));
    }
    for advantage in advantages {
        warn_unlisted("advantages", advantage, catalogs.advantages, issues);
    }
}

fn warn_unlisted(field: &str, value: &str, catalog: &Catalog, issues: &mut Vec<ValidationIssue>) {
    if !catalog.contains(value) {
        issues.push(ValidationIssue::warning(
            field,
            format!("'{value}' is not in the {} catalog", catalog.axis),
        ));
    }
}
