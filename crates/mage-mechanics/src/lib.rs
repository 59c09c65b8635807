//! Rules engine for Mage: The Awakening 2E characters.
//!
//! Validates creation-time allocations (priority-based Attributes and
//! Skills, the 4-dot Arcana split), spends experience budgets through an
//! all-or-nothing ledger, resolves narrative option selections, and
//! computes derived traits.

pub mod advancement;
pub mod allocation;
pub mod cost;
pub mod derived;
pub mod error;
pub mod narrative;
pub mod priority;
pub mod step;
pub mod validate;

pub use advancement::{
    AdvancementPlan, PlannedStep, PurchaseIntent, apply_advancement, audit_xp_log,
    plan_advancement,
};
pub use allocation::{
    Completeness, validate_arcana_allocation, validate_attribute_allocation,
    validate_skill_allocation,
};
pub use cost::{XP_COSTS, XpCostTable};
pub use derived::DerivedTraits;
pub use error::{MechError, MechResult, Pool};
pub use narrative::{
    AdvantageSelection, Choice, NarrativeSelections, RANDOM, ResolvedNarrative,
    resolve_narrative_options,
};
pub use priority::{ATTRIBUTE_PRIORITIES, PriorityAssignment, PriorityScheme, SKILL_PRIORITIES};
pub use step::{Bounds, step};
pub use validate::{ValidationIssue, has_errors, validate_character};
