//! Narrative option catalogs: tarot deck, archetypes, advantages,
//! disadvantages, and dark secrets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The five narrative axes a user can seed or leave to the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Axis {
    /// Thematic tarot card.
    TarotCard,
    /// Character archetype.
    Archetype,
    /// Up to three advantages.
    Advantages,
    /// A single disadvantage.
    Disadvantage,
    /// A single dark secret.
    DarkSecret,
}

impl Axis {
    /// All axes in form order.
    pub const ALL: [Axis; 5] = [
        Axis::TarotCard,
        Axis::Archetype,
        Axis::Advantages,
        Axis::Disadvantage,
        Axis::DarkSecret,
    ];

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::TarotCard => "Tarot Card",
            Self::Archetype => "Archetype",
            Self::Advantages => "Advantages",
            Self::Disadvantage => "Disadvantage",
            Self::DarkSecret => "Dark Secret",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Axis {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "tarot" | "tarotcard" => Ok(Self::TarotCard),
            "archetype" | "archetypes" => Ok(Self::Archetype),
            "advantage" | "advantages" => Ok(Self::Advantages),
            "disadvantage" | "disadvantages" => Ok(Self::Disadvantage),
            "darksecret" | "darksecrets" => Ok(Self::DarkSecret),
            _ => Err(CoreError::UnknownAxis(s.to_string())),
        }
    }
}

/// A fixed, named list of options for one narrative axis.
#[derive(Debug, PartialEq, Eq)]
pub struct Catalog {
    /// The axis these options belong to.
    pub axis: Axis,
    /// Option names in display order.
    pub options: &'static [&'static str],
}

impl Catalog {
    /// True if `value` is exactly one of the catalog's options.
    pub fn contains(&self, value: &str) -> bool {
        self.options.contains(&value)
    }

    /// Number of options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// True if the catalog has no options.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

/// One catalog per narrative axis.
#[derive(Debug, Clone, Copy)]
pub struct Catalogs {
    /// Tarot deck.
    pub tarot_cards: &'static Catalog,
    /// Archetypes.
    pub archetypes: &'static Catalog,
    /// Advantages.
    pub advantages: &'static Catalog,
    /// Disadvantages.
    pub disadvantages: &'static Catalog,
    /// Dark secrets.
    pub dark_secrets: &'static Catalog,
}

impl Catalogs {
    /// The built-in catalogs.
    pub fn standard() -> Self {
        Self {
            tarot_cards: &TAROT_CARDS,
            archetypes: &ARCHETYPES,
            advantages: &ADVANTAGES,
            disadvantages: &DISADVANTAGES,
            dark_secrets: &DARK_SECRETS,
        }
    }

    /// The catalog for an axis.
    pub fn for_axis(&self, axis: Axis) -> &'static Catalog {
        match axis {
            Axis::TarotCard => self.tarot_cards,
            Axis::Archetype => self.archetypes,
            Axis::Advantages => self.advantages,
            Axis::Disadvantage => self.disadvantages,
            Axis::DarkSecret => self.dark_secrets,
        }
    }
}

impl Default for Catalogs {
    fn default() -> Self {
        Self::standard()
    }
}

/// The 78-card tarot deck: 22 Major Arcana then the four suits.
pub static TAROT_CARDS: Catalog = Catalog {
    axis: Axis::TarotCard,
    options: &[
        "The Fool",
        "The Magician",
        "The High Priestess",
        "The Empress",
        "The Emperor",
        "The Hierophant",
        "The Lovers",
        "The Chariot",
        "Strength",
        "The Hermit",
        "Wheel of Fortune",
        "Justice",
        "The Hanged Man",
        "Death",
        "Temperance",
        "The Devil",
        "The Tower",
        "The Star",
        "The Moon",
        "The Sun",
        "Judgement",
        "The World",
        "Ace of Wands",
        "Two of Wands",
        "Three of Wands",
        "Four of Wands",
        "Five of Wands",
        "Six of Wands",
        "Seven of Wands",
        "Eight of Wands",
        "Nine of Wands",
        "Ten of Wands",
        "Page of Wands",
        "Knight of Wands",
        "Queen of Wands",
        "King of Wands",
        "Ace of Cups",
        "Two of Cups",
        "Three of Cups",
        "Four of Cups",
        "Five of Cups",
        "Six of Cups",
        "Seven of Cups",
        "Eight of Cups",
        "Nine of Cups",
        "Ten of Cups",
        "Page of Cups",
        "Knight of Cups",
        "Queen of Cups",
        "King of Cups",
        "Ace of Swords",
        "Two of Swords",
        "Three of Swords",
        "Four of Swords",
        "Five of Swords",
        "Six of Swords",
        "Seven of Swords",
        "Eight of Swords",
        "Nine of Swords",
        "Ten of Swords",
        "Page of Swords",
        "Knight of Swords",
        "Queen of Swords",
        "King of Swords",
        "Ace of Pentacles",
        "Two of Pentacles",
        "Three of Pentacles",
        "Four of Pentacles",
        "Five of Pentacles",
        "Six of Pentacles",
        "Seven of Pentacles",
        "Eight of Pentacles",
        "Nine of Pentacles",
        "Ten of Pentacles",
        "Page of Pentacles",
        "Knight of Pentacles",
        "Queen of Pentacles",
        "King of Pentacles",
    ],
};

/// Character archetypes.
pub static ARCHETYPES: Catalog = Catalog {
    axis: Axis::Archetype,
    options: &[
        "The Innocent",
        "The Orphan",
        "The Hero",
        "The Caregiver",
        "The Explorer",
        "The Rebel",
        "The Lover",
        "The Creator",
        "The Jester",
        "The Sage",
        "The Magician",
        "The Ruler",
        "The Trickster",
        "The Martyr",
        "The Survivor",
        "The Zealot",
    ],
};

/// Advantages a character may be granted (pick up to three).
pub static ADVANTAGES: Catalog = Catalog {
    axis: Axis::Advantages,
    options: &[
        "Wealthy Patron",
        "Eidetic Memory",
        "Loyal Retainer",
        "Hidden Sanctum",
        "Street Network",
        "Academic Tenure",
        "Old Money",
        "Police Contact",
        "Fast Reflexes",
        "Iron Stomach",
        "Striking Looks",
        "Occult Library",
        "Trusted Mentor",
        "Safehouse",
        "Danger Sense",
        "Multilingual",
        "Fame",
        "Indomitable",
    ],
};

/// Disadvantages.
pub static DISADVANTAGES: Catalog = Catalog {
    axis: Axis::Disadvantage,
    options: &[
        "Addiction",
        "Amnesia",
        "Chronic Pain",
        "Crippling Debt",
        "Hunted",
        "Insomnia",
        "Phobia",
        "Poor Eyesight",
        "Notoriety",
        "Obsession",
        "Overconfidence",
        "Paranoia",
        "Soft-Hearted",
        "Vengeful Rival",
        "Wanted by the Law",
    ],
};

/// Dark secrets.
pub static DARK_SECRETS: Catalog = Catalog {
    axis: Axis::DarkSecret,
    options: &[
        "Betrayed a Friend",
        "Caused a Death",
        "Sold Their Soul",
        "Secret Family",
        "Stolen Identity",
        "Pact with a Spirit",
        "Former Cultist",
        "Witnessed a Murder",
        "Abandoned a Child",
        "Fled a Crime",
        "Informant",
        "Forbidden Love",
        "Sealed Away a Power",
        "Exarch's Mark",
        "Lost Their Twin",
    ],
};
