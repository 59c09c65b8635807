//! The character aggregate.

use serde::{Deserialize, Serialize};

use crate::path::{Order, Path};
use crate::ratings::Ratings;
use crate::traits::{Arcanum, Attribute, Rated, Skill};

/// Starting Wisdom for a newly Awakened mage.
pub const STARTING_WISDOM: u8 = 7;

/// Starting Gnosis for a newly Awakened mage.
pub const STARTING_GNOSIS: u8 = 1;

/// A complete Mage: The Awakening 2E character record.
///
/// Field names on the wire follow the generation response schema
/// (`meritKeywords`, `portraitUrl`, `xpLog`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    /// Character name.
    pub name: String,
    /// The user's free-text concept.
    pub concept: String,
    /// Path of Awakening.
    pub path: Path,
    /// Order allegiance.
    pub order: Order,
    /// Attribute ratings (1-5 at creation).
    pub attributes: Ratings<Attribute>,
    /// Skill ratings (0-5).
    pub skills: Ratings<Skill>,
    /// Arcanum ratings.
    pub arcana: Ratings<Arcanum>,
    /// Gnosis (1-10).
    pub gnosis: u8,
    /// Wisdom (0-10).
    pub wisdom: u8,
    /// Free-text merit keywords.
    #[serde(default)]
    pub merit_keywords: String,
    /// Skill specialties, formatted `"<Skill> (<specialty>)"`.
    #[serde(default)]
    pub specialties: Vec<String>,
    /// Short and long-term goals.
    #[serde(default)]
    pub aspirations: Vec<String>,
    /// Physical description used for the portrait.
    #[serde(default)]
    pub description: String,
    /// Portrait reference (URL or handle); empty until a portrait resolves.
    #[serde(default)]
    pub portrait_url: String,
    /// The mage's Nimbus.
    #[serde(default)]
    pub nimbus: String,
    /// Known rote names.
    #[serde(default)]
    pub rotes: Vec<String>,
    /// Total experience spent on advancement.
    #[serde(default)]
    pub xp: u32,
    /// Human-readable log of every experience purchase, in order.
    #[serde(default)]
    pub xp_log: Vec<String>,
    /// Tarot card theme, with orientation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tarot_card: Option<String>,
    /// Archetype.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archetype: Option<String>,
    /// Mundane occupation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    /// Dark secret.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark_secret: Option<String>,
    /// Disadvantage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disadvantage: Option<String>,
    /// Advantages (at most three).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advantages: Option<Vec<String>>,
}

impl Character {
    /// A fresh character with base ratings: attributes at 1, skills and
    /// arcana at 0, Gnosis 1, Wisdom 7.
    pub fn starting(
        name: impl Into<String>,
        concept: impl Into<String>,
        path: Path,
        order: Order,
    ) -> Self {
        Self {
            name: name.into(),
            concept: concept.into(),
            path,
            order,
            attributes: Ratings::baseline(1),
            skills: Ratings::baseline(0),
            arcana: Ratings::baseline(0),
            gnosis: STARTING_GNOSIS,
            wisdom: STARTING_WISDOM,
            merit_keywords: String::new(),
            specialties: Vec::new(),
            aspirations: Vec::new(),
            description: String::new(),
            portrait_url: String::new(),
            nimbus: String::new(),
            rotes: Vec::new(),
            xp: 0,
            xp_log: Vec::new(),
            tarot_card: None,
            archetype: None,
            occupation: None,
            dark_secret: None,
            disadvantage: None,
            advantages: None,
        }
    }

    /// Specialty names attached to a skill, in sheet order.
    ///
    /// Specialties that don't follow the `"<Skill> (<name>)"` form are skipped.
    pub fn specialties_for(&self, skill: Skill) -> Vec<&str> {
        self.specialties
            .iter()
            .filter_map(|s| split_specialty(s))
            .filter(|(name, _)| name.parse::<Skill>().ok() == Some(skill))
            .map(|(_, specialty)| specialty)
            .collect()
    }

    /// The advantages list, empty if none were recorded.
    pub fn advantage_list(&self) -> &[String] {
        self.advantages.as_deref().unwrap_or(&[])
    }
}

/// Split `"Occult (Ghosts)"` into `("Occult", "Ghosts")`.
pub fn split_specialty(entry: &str) -> Option<(&str, &str)> {
    let (skill, rest) = entry.trim().split_once('(')?;
    let specialty = rest.strip_suffix(')')?.trim();
    let skill = skill.trim();
    if skill.is_empty() || specialty.is_empty() {
        return None;
    }
    Some((skill, specialty))
}

/// Format a specialty entry the way [`split_specialty`] reads it.
pub fn format_specialty(skill: Skill, specialty: &str) -> String {
    format!("{} ({})", skill.label(), specialty.trim())
}
