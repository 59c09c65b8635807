//! Paths, Orders, and Arcanum affinity.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::traits::{Arcanum, Rated};

/// How an Arcanum relates to a character's Path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Affinity {
    /// One of the Path's two Ruling Arcana.
    Ruling,
    /// Neither Ruling nor Inferior.
    Common,
    /// The Path's single Inferior Arcanum.
    Inferior,
}

impl fmt::Display for Affinity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ruling => "Ruling",
            Self::Common => "Common",
            Self::Inferior => "Inferior",
        })
    }
}

/// The five Paths of Awakening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Path {
    /// The Path of Enchantment.
    Acanthus,
    /// The Path of Scourging.
    Mastigos,
    /// The Path of Doom.
    Moros,
    /// The Path of the Mighty.
    Obrimos,
    /// The Path of Ecstasy.
    Thyrsus,
}

impl Path {
    /// All Paths in table order.
    pub const ALL: [Path; 5] = [
        Path::Acanthus,
        Path::Mastigos,
        Path::Moros,
        Path::Obrimos,
        Path::Thyrsus,
    ];

    /// Display name of the Path.
    pub fn name(self) -> &'static str {
        match self {
            Self::Acanthus => "Acanthus",
            Self::Mastigos => "Mastigos",
            Self::Moros => "Moros",
            Self::Obrimos => "Obrimos",
            Self::Thyrsus => "Thyrsus",
        }
    }

    /// The two Ruling Arcana of this Path.
    pub fn ruling_arcana(self) -> [Arcanum; 2] {
        match self {
            Self::Acanthus => [Arcanum::Fate, Arcanum::Time],
            Self::Mastigos => [Arcanum::Mind, Arcanum::Space],
            Self::Moros => [Arcanum::Death, Arcanum::Matter],
            Self::Obrimos => [Arcanum::Forces, Arcanum::Prime],
            Self::Thyrsus => [Arcanum::Life, Arcanum::Spirit],
        }
    }

    /// The Inferior Arcanum of this Path.
    pub fn inferior_arcanum(self) -> Arcanum {
        match self {
            Self::Acanthus => Arcanum::Forces,
            Self::Mastigos => Arcanum::Matter,
            Self::Moros => Arcanum::Spirit,
            Self::Obrimos => Arcanum::Death,
            Self::Thyrsus => Arcanum::Mind,
        }
    }

    /// Classify an Arcanum relative to this Path.
    pub fn affinity(self, arcanum: Arcanum) -> Affinity {
        if self.ruling_arcana().contains(&arcanum) {
            Affinity::Ruling
        } else if self.inferior_arcanum() == arcanum {
            Affinity::Inferior
        } else {
            Affinity::Common
        }
    }

    /// Arcana that are neither Ruling nor Inferior for this Path.
    pub fn common_arcana(self) -> Vec<Arcanum> {
        Arcanum::ALL
            .iter()
            .copied()
            .filter(|a| self.affinity(*a) == Affinity::Common)
            .collect()
    }

    /// One-line flavor description.
    pub fn description(self) -> &'static str {
        match self {
            Self::Acanthus => {
                "Witches and Enchanters who see the Supernal through the Lunargent Thorn."
            }
            Self::Mastigos => {
                "Warlocks and Psychonauts who see the Supernal through the Iron Gauntlet."
            }
            Self::Moros => {
                "Necromancers and Alchemists who see the Supernal through the Leaden Coin."
            }
            Self::Obrimos => "Theurges and Diviners who see the Supernal through the Golden Key.",
            Self::Thyrsus => "Shamans and Ecstatics who see the Supernal through the Singing Stone.",
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Path {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CoreError::UnknownPath(s.to_string()))
    }
}

/// The eight mage Orders. Purely descriptive; no effect on allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Order {
    /// The Adamantine Arrow.
    #[serde(rename = "Adamantine Arrow")]
    AdamantineArrow,
    /// The Free Council.
    #[serde(rename = "Free Council")]
    FreeCouncil,
    /// The Guardians of the Veil.
    #[serde(rename = "Guardians of the Veil")]
    GuardiansOfTheVeil,
    /// The Mysterium.
    Mysterium,
    /// The Silver Ladder.
    #[serde(rename = "Silver Ladder")]
    SilverLadder,
    /// Mages outside the Pentacle.
    Unaligned,
    /// The Seers of the Throne.
    #[serde(rename = "Seers of the Throne")]
    SeersOfTheThrone,
    /// The Banishers.
    Banishers,
}

impl Order {
    /// All Orders in table order.
    pub const ALL: [Order; 8] = [
        Order::AdamantineArrow,
        Order::FreeCouncil,
        Order::GuardiansOfTheVeil,
        Order::Mysterium,
        Order::SilverLadder,
        Order::Unaligned,
        Order::SeersOfTheThrone,
        Order::Banishers,
    ];

    /// Display name of the Order.
    pub fn name(self) -> &'static str {
        match self {
            Self::AdamantineArrow => "Adamantine Arrow",
            Self::FreeCouncil => "Free Council",
            Self::GuardiansOfTheVeil => "Guardians of the Veil",
            Self::Mysterium => "Mysterium",
            Self::SilverLadder => "Silver Ladder",
            Self::Unaligned => "Unaligned",
            Self::SeersOfTheThrone => "Seers of the Throne",
            Self::Banishers => "Banishers",
        }
    }

    /// One-line flavor description.
    pub fn description(self) -> &'static str {
        match self {
            Self::AdamantineArrow => "Masters of conflict, sworn to protect the Mysteries.",
            Self::FreeCouncil => "Modernists and democrats seeking to bring magic to the masses.",
            Self::GuardiansOfTheVeil => "Spies and secret police who guard the Veil between worlds.",
            Self::Mysterium => "Scholars and explorers of occult lore and forgotten places.",
            Self::SilverLadder => "Leaders and visionaries who seek to build a new Atlantis.",
            Self::Unaligned => "Mages who operate outside the structure of the Pentacle Orders.",
            Self::SeersOfTheThrone => {
                "Servants of the Exarchs who enforce the Lie and hunt other mages."
            }
            Self::Banishers => {
                "Mages who have come to hate their own power and seek to destroy all magic."
            }
        }
    }

    /// Seers and Banishers oppose the Pentacle; generation should only pick
    /// them when a concept calls for an antagonist.
    pub fn is_antagonistic(self) -> bool {
        matches!(self, Self::SeersOfTheThrone | Self::Banishers)
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Order {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|o| o.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CoreError::UnknownOrder(s.to_string()))
    }
}
