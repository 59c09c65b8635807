//! The fixed trait enumerants: Attributes, Skills, and Arcana.
//!
//! Category membership lives in one lookup per enum ([`Categorized::category`])
//! so call sites never duplicate the Mental/Physical/Social grouping.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// The three trait categories shared by Attributes and Skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    /// Intellect, perception, and willpower.
    Mental,
    /// Body, coordination, and endurance.
    Physical,
    /// Charisma, guile, and poise.
    Social,
}

impl Category {
    /// All categories in sheet order.
    pub const ALL: [Category; 3] = [Category::Mental, Category::Physical, Category::Social];

    /// Display name of the category.
    pub fn label(self) -> &'static str {
        match self {
            Self::Mental => "Mental",
            Self::Physical => "Physical",
            Self::Social => "Social",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A closed enumerant that carries a dot rating on the character sheet.
pub trait Rated: Copy + Ord + fmt::Debug + fmt::Display + 'static {
    /// Every enumerant, in sheet order.
    const ALL: &'static [Self];
    /// Lowercase kind name used in messages ("attribute", "skill", "arcanum").
    const KIND: &'static str;

    /// Title-case display label (e.g. "Animal Ken").
    fn label(self) -> &'static str;
}

/// A rated enumerant that belongs to one of the three [`Category`] groups.
pub trait Categorized: Rated {
    /// The category this trait belongs to.
    fn category(self) -> Category;

    /// All enumerants of this kind in the given category, in sheet order.
    fn in_category(category: Category) -> Vec<Self> {
        Self::ALL
            .iter()
            .copied()
            .filter(|t| t.category() == category)
            .collect()
    }
}

/// Lowercase a name and drop separators so "Animal Ken", "animalKen"
/// and "animal_ken" compare equal.
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Parse any [`Rated`] enumerant from its label or wire name.
pub fn parse_rated<T: Rated>(name: &str) -> CoreResult<T> {
    let wanted = normalize(name.trim());
    T::ALL
        .iter()
        .copied()
        .find(|t| normalize(t.label()) == wanted)
        .ok_or_else(|| CoreError::UnknownTrait {
            kind: T::KIND,
            name: name.to_string(),
        })
}

/// The nine Attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Attribute {
    /// Mental power.
    Intelligence,
    /// Mental finesse.
    Wits,
    /// Mental resistance.
    Resolve,
    /// Physical power.
    Strength,
    /// Physical finesse.
    Dexterity,
    /// Physical resistance.
    Stamina,
    /// Social power.
    Presence,
    /// Social finesse.
    Manipulation,
    /// Social resistance.
    Composure,
}

impl Rated for Attribute {
    const ALL: &'static [Self] = &[
        Self::Intelligence,
        Self::Wits,
        Self::Resolve,
        Self::Strength,
        Self::Dexterity,
        Self::Stamina,
        Self::Presence,
        Self::Manipulation,
        Self::Composure,
    ];
    const KIND: &'static str = "attribute";

    fn label(self) -> &'static str {
        match self {
            Self::Intelligence => "Intelligence",
            Self::Wits => "Wits",
            Self::Resolve => "Resolve",
            Self::Strength => "Strength",
            Self::Dexterity => "Dexterity",
            Self::Stamina => "Stamina",
            Self::Presence => "Presence",
            Self::Manipulation => "Manipulation",
            Self::Composure => "Composure",
        }
    }
}

impl Categorized for Attribute {
    fn category(self) -> Category {
        match self {
            Self::Intelligence | Self::Wits | Self::Resolve => Category::Mental,
            Self::Strength | Self::Dexterity | Self::Stamina => Category::Physical,
            Self::Presence | Self::Manipulation | Self::Composure => Category::Social,
        }
    }
}

/// The twenty-four Skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Skill {
    /// Mental: scholarship and the humanities.
    Academics,
    /// Mental: programming and systems.
    Computer,
    /// Mental: building and repairing things.
    Crafts,
    /// Mental: solving mysteries.
    Investigation,
    /// Mental: treating injury and illness.
    Medicine,
    /// Mental: lore of the supernatural.
    Occult,
    /// Mental: bureaucracy and power structures.
    Politics,
    /// Mental: the natural sciences.
    Science,
    /// Physical: running, climbing, jumping.
    Athletics,
    /// Physical: unarmed combat.
    Brawl,
    /// Physical: operating vehicles.
    Drive,
    /// Physical: guns.
    Firearms,
    /// Physical: lockpicking and theft.
    Larceny,
    /// Physical: moving unseen.
    Stealth,
    /// Physical: living off the land.
    Survival,
    /// Physical: melee weapons.
    Weaponry,
    /// Social: handling animals.
    AnimalKen,
    /// Social: reading and sharing emotions.
    Empathy,
    /// Social: art and performance.
    Expression,
    /// Social: coercion and threats.
    Intimidation,
    /// Social: convincing others.
    Persuasion,
    /// Social: mingling and carousing.
    #[serde(alias = "socialize")]
    Socialise,
    /// Social: the street and its economy.
    Streetwise,
    /// Social: deception.
    Subterfuge,
}

impl Rated for Skill {
    const ALL: &'static [Self] = &[
        Self::Academics,
        Self::Computer,
        Self::Crafts,
        Self::Investigation,
        Self::Medicine,
        Self::Occult,
        Self::Politics,
        Self::Science,
        Self::Athletics,
        Self::Brawl,
        Self::Drive,
        Self::Firearms,
        Self::Larceny,
        Self::Stealth,
        Self::Survival,
        Self::Weaponry,
        Self::AnimalKen,
        Self::Empathy,
        Self::Expression,
        Self::Intimidation,
        Self::Persuasion,
        Self::Socialise,
        Self::Streetwise,
        Self::Subterfuge,
    ];
    const KIND: &'static str = "skill";

    fn label(self) -> &'static str {
        match self {
            Self::Academics => "Academics",
            Self::Computer => "Computer",
            Self::Crafts => "Crafts",
            Self::Investigation => "Investigation",
            Self::Medicine => "Medicine",
            Self::Occult => "Occult",
            Self::Politics => "Politics",
            Self::Science => "Science",
            Self::Athletics => "Athletics",
            Self::Brawl => "Brawl",
            Self::Drive => "Drive",
            Self::Firearms => "Firearms",
            Self::Larceny => "Larceny",
            Self::Stealth => "Stealth",
            Self::Survival => "Survival",
            Self::Weaponry => "Weaponry",
            Self::AnimalKen => "Animal Ken",
            Self::Empathy => "Empathy",
            Self::Expression => "Expression",
            Self::Intimidation => "Intimidation",
            Self::Persuasion => "Persuasion",
            Self::Socialise => "Socialise",
            Self::Streetwise => "Streetwise",
            Self::Subterfuge => "Subterfuge",
        }
    }
}

impl Categorized for Skill {
    fn category(self) -> Category {
        match self {
            Self::Academics
            | Self::Computer
            | Self::Crafts
            | Self::Investigation
            | Self::Medicine
            | Self::Occult
            | Self::Politics
            | Self::Science => Category::Mental,
            Self::Athletics
            | Self::Brawl
            | Self::Drive
            | Self::Firearms
            | Self::Larceny
            | Self::Stealth
            | Self::Survival
            | Self::Weaponry => Category::Physical,
            Self::AnimalKen
            | Self::Empathy
            | Self::Expression
            | Self::Intimidation
            | Self::Persuasion
            | Self::Socialise
            | Self::Streetwise
            | Self::Subterfuge => Category::Social,
        }
    }
}

/// The ten Arcana.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Arcanum {
    /// Darkness, decay, ghosts, and the soul.
    Death,
    /// Luck, probability, and oaths.
    Fate,
    /// Energy: light, heat, motion.
    Forces,
    /// Living bodies and the natural world.
    Life,
    /// The inanimate physical world.
    Matter,
    /// Thought and the psyche.
    Mind,
    /// Magic itself and the Supernal.
    Prime,
    /// Distance, location, and sympathy.
    Space,
    /// Spirits and the Shadow realm.
    Spirit,
    /// Past, future, and duration.
    Time,
}

impl Rated for Arcanum {
    const ALL: &'static [Self] = &[
        Self::Death,
        Self::Fate,
        Self::Forces,
        Self::Life,
        Self::Matter,
        Self::Mind,
        Self::Prime,
        Self::Space,
        Self::Spirit,
        Self::Time,
    ];
    const KIND: &'static str = "arcanum";

    fn label(self) -> &'static str {
        match self {
            Self::Death => "Death",
            Self::Fate => "Fate",
            Self::Forces => "Forces",
            Self::Life => "Life",
            Self::Matter => "Matter",
            Self::Mind => "Mind",
            Self::Prime => "Prime",
            Self::Space => "Space",
            Self::Spirit => "Spirit",
            Self::Time => "Time",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Arcanum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Attribute {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_rated(s)
    }
}

impl FromStr for Skill {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // American spelling shows up in generated output often enough.
        if normalize(s.trim()) == "socialize" {
            return Ok(Self::Socialise);
        }
        parse_rated(s)
    }
}

impl FromStr for Arcanum {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_rated(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_match_the_sheet() {
        assert_eq!(Attribute::ALL.len(), 9);
        assert_eq!(Skill::ALL.len(), 24);
        assert_eq!(Arcanum::ALL.len(), 10);
    }

    #[test]
    fn each_category_has_three_attributes_and_eight_skills() {
        for category in Category::ALL {
            assert_eq!(Attribute::in_category(category).len(), 3);
            assert_eq!(Skill::in_category(category).len(), 8);
        }
    }

    #[test]
    fn parse_accepts_label_and_wire_name() {
        assert_eq!("Animal Ken".parse::<Skill>().unwrap(), Skill::AnimalKen);
        assert_eq!("animalKen".parse::<Skill>().unwrap(), Skill::AnimalKen);
        assert_eq!("WITS".parse::<Attribute>().unwrap(), Attribute::Wits);
        assert_eq!(" prime ".parse::<Arcanum>().unwrap(), Arcanum::Prime);
    }

    #[test]
    fn parse_accepts_american_socialize() {
        assert_eq!("Socialize".parse::<Skill>().unwrap(), Skill::Socialise);
    }

    #[test]
    fn parse_unknown_is_structural_error() {
        let err = "Telekinesis".parse::<Arcanum>().unwrap_err();
        assert_eq!(
            err,
            CoreError::UnknownTrait {
                kind: "arcanum",
                name: "Telekinesis".to_string()
            }
        );
        assert!(err.to_string().contains("unknown arcanum"));
    }

    #[test]
    fn serde_uses_camel_case_wire_names() {
        let json = serde_json::to_string(&Skill::AnimalKen).unwrap();
        assert_eq!(json, "\"animalKen\"");
        let back: Attribute = serde_json::from_str("\"intelligence\"").unwrap();
        assert_eq!(back, Attribute::Intelligence);
    }
}
