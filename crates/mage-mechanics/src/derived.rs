//! Traits computed from the sheet rather than allocated.

use mage_core::{Attribute, Character, Skill};
use serde::Serialize;

/// Size of an adult human.
pub const HUMAN_SIZE: u8 = 5;

/// Derived traits shown on the exported sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedTraits {
    /// Stamina + Size.
    pub health: u8,
    /// Resolve + Composure.
    pub willpower: u8,
    /// Mana pool: 10 at Gnosis 1, five more per Gnosis dot above it.
    pub mana: u8,
    /// Strength + Dexterity + 5.
    pub speed: u8,
    /// Lower of Wits and Dexterity, plus Athletics.
    pub defense: u8,
    /// Dexterity + Composure.
    pub initiative: u8,
    /// Always human-sized.
    pub size: u8,
}

impl DerivedTraits {
    /// Compute every derived trait for a character.
    pub fn of(character: &Character) -> Self {
        let attr = |a: Attribute| character.attributes.get(a);
        let gnosis = character.gnosis.max(1);
        Self {
            health: attr(Attribute::Stamina).saturating_add(HUMAN_SIZE),
            willpower: attr(Attribute::Resolve).saturating_add(attr(Attribute::Composure)),
            mana: 10u8.saturating_add((gnosis - 1).saturating_mul(5)),
            speed: attr(Attribute::Strength)
                .saturating_add(attr(Attribute::Dexterity))
                .saturating_add(5),
            defense: attr(Attribute::Wits)
                .min(attr(Attribute::Dexterity))
                .saturating_add(character.skills.get(Skill::Athletics)),
            initiative: attr(Attribute::Dexterity).saturating_add(attr(Attribute::Composure)),
            size: HUMAN_SIZE,
        }
    }
}
