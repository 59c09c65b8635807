//! The experience-point cost table.

use mage_core::Affinity;

/// Per-dot (or per-purchase) XP costs by trait kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XpCostTable {
    /// Cost per Attribute dot.
    pub attribute: u32,
    /// Cost per Skill dot.
    pub skill: u32,
    /// Cost per new Skill Specialty.
    pub specialty: u32,
    /// Cost per Ruling Arcanum dot.
    pub ruling_arcanum: u32,
    /// Cost per Common Arcanum dot.
    pub common_arcanum: u32,
    /// Cost per Inferior Arcanum dot.
    pub inferior_arcanum: u32,
    /// Gnosis needed before any Inferior Arcanum dot can be bought.
    pub inferior_min_gnosis: u8,
    /// Cost per Wisdom dot.
    pub wisdom: u32,
    /// Cost per Gnosis dot.
    pub gnosis: u32,
    /// Cost per new Rote.
    pub rote: u32,
}

/// The standard Mage: The Awakening 2E costs.
pub const XP_COSTS: XpCostTable = XpCostTable {
    attribute: 4,
    skill: 2,
    specialty: 1,
    ruling_arcanum: 3,
    common_arcanum: 4,
    inferior_arcanum: 5,
    inferior_min_gnosis: 3,
    wisdom: 2,
    gnosis: 5,
    rote: 1,
};

impl XpCostTable {
    /// Cost of one Arcanum dot for the given affinity.
    pub fn arcanum(&self, affinity: Affinity) -> u32 {
        match affinity {
            Affinity::Ruling => self.ruling_arcanum,
            Affinity::Common => self.common_arcanum,
            Affinity::Inferior => self.inferior_arcanum,
        }
    }

    /// The cost list as bullet lines, for instructions and help text.
    pub fn rules_summary(&self) -> String {
        [
            format!("- Attributes: {} XP per new dot.", self.attribute),
            format!("- Skills: {} XP per new dot.", self.skill),
            format!("- Skill Specialties: {} XP per new specialty.", self.specialty),
            format!("- Ruling Arcanum: {} XP per new dot.", self.ruling_arcanum),
            format!("- Common Arcanum: {} XP per new dot.", self.common_arcanum),
            format!(
                "- Inferior Arcanum: {} XP per new dot (must have Gnosis {}+).",
                self.inferior_arcanum, self.inferior_min_gnosis
            ),
            format!("- Wisdom: {} XP per new dot.", self.wisdom),
            format!("- Gnosis: {} XP per new dot.", self.gnosis),
            format!("- Rotes: {} XP per new rote.", self.rote),
        ]
        .join("\n")
    }
}
