//! Error types for the mechanics engine.
//!
//! Every variant except [`MechError::Core`] is a rule violation: an
//! expected, recoverable rejection that callers render as field-level
//! feedback.

use std::fmt;

use mage_core::{Arcanum, Axis, Category, CoreError};

/// Which priority-allocated pool a violation concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pool {
    /// Attribute dots (5/4/3).
    Attribute,
    /// Skill dots (11/7/4).
    Skill,
}

impl fmt::Display for Pool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Attribute => "attribute",
            Self::Skill => "skill",
        })
    }
}

/// A broken allocation, ledger, or resolver rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MechError {
    /// More dots were spent in a category than its priority allows.
    #[error("{category} {pool} dots over budget: {spent} spent, priority allows {priority}")]
    CategoryOverBudget {
        /// Attribute or skill pool.
        pool: Pool,
        /// The offending category.
        category: Category,
        /// Dots spent above baseline.
        spent: u32,
        /// The category's assigned priority.
        priority: u8,
    },

    /// Final validation found a category with unspent dots.
    #[error("{category} {pool} dots incomplete: {spent} of {priority} spent")]
    CategoryUnderBudget {
        /// Attribute or skill pool.
        pool: Pool,
        /// The offending category.
        category: Category,
        /// Dots spent above baseline.
        spent: u32,
        /// The category's assigned priority.
        priority: u8,
    },

    /// A single rating falls outside its allowed range.
    #[error("{name} rating {rating} is outside [{min}, {max}]")]
    RatingOutOfRange {
        /// Trait label.
        name: String,
        /// The offending rating.
        rating: u8,
        /// Lowest allowed rating.
        min: u8,
        /// Highest allowed rating.
        max: u8,
    },

    /// A priority value was assigned to more than one category.
    #[error("{pool} priority {value} is assigned to more than one category")]
    DuplicatePriority {
        /// Attribute or skill pool.
        pool: Pool,
        /// The repeated priority value.
        value: u8,
    },

    /// A priority value is not part of the pool's scheme.
    #[error("{pool} priority {value} is not one of {allowed:?}")]
    InvalidPriority {
        /// Attribute or skill pool.
        pool: Pool,
        /// The unexpected value.
        value: u8,
        /// The scheme's priority values.
        allowed: [u8; 3],
    },

    /// Category sums of a complete allocation match no priority permutation.
    #[error("{pool} category sums {sums:?} do not match any arrangement of {allowed:?}")]
    UnassignablePriorities {
        /// Attribute or skill pool.
        pool: Pool,
        /// Mental, Physical, Social sums.
        sums: [u32; 3],
        /// The scheme's priority values.
        allowed: [u8; 3],
    },

    /// Arcana dots do not follow the 3 Ruling (2/1) + 1 Common split.
    #[error("invalid arcana split: {0}")]
    ArcanaSplitInvalid(String),

    /// A step would raise a rating past its cap.
    #[error("{name} at {current} would exceed cap {cap}")]
    WouldExceedCap {
        /// Trait label.
        name: String,
        /// Rating before the step.
        current: u8,
        /// Maximum rating.
        cap: u8,
    },

    /// A step would lower a rating past its floor.
    #[error("{name} at {current} would go below floor {floor}")]
    WouldGoBelowFloor {
        /// Trait label.
        name: String,
        /// Rating before the step.
        current: u8,
        /// Minimum rating.
        floor: u8,
    },

    /// An Inferior Arcanum was purchased without enough Gnosis.
    #[error("{arcanum} is an Inferior Arcanum and needs Gnosis {required}, have {gnosis}")]
    GnosisTooLowForInferiorArcanum {
        /// The Inferior Arcanum.
        arcanum: Arcanum,
        /// Gnosis at the time of purchase.
        gnosis: u8,
        /// Minimum Gnosis.
        required: u8,
    },

    /// Purchases did not add up to the declared budget.
    #[error("purchases cost {spent} XP but the budget is {budget} XP")]
    BudgetMismatch {
        /// Declared XP budget.
        budget: u32,
        /// Total cost of the purchases.
        spent: u32,
    },

    /// Spending would push the character's total XP past `u32::MAX`.
    #[error("character already has {xp} XP; spending {spent} more overflows the total")]
    XpOverflow {
        /// XP already spent by the character.
        xp: u32,
        /// XP the purchases would add.
        spent: u32,
    },

    /// A specialty or rote the character already has was bought again.
    #[error("already has {0}")]
    DuplicatePurchase(String),

    /// A purchase is missing the name it needs.
    #[error("invalid purchase: {0}")]
    InvalidPurchase(String),

    /// An XP log entry has no readable `(<n> XP)` cost.
    #[error("unreadable XP log entry: \"{0}\"")]
    UnreadableLogEntry(String),

    /// An explicit narrative value is not in its catalog.
    #[error("\"{value}\" is not a known {axis} option")]
    NotInCatalog {
        /// The narrative axis.
        axis: Axis,
        /// The rejected value.
        value: String,
    },

    /// Structurally invalid input (unknown enumerant).
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
