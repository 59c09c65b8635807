//! Priority schemes and per-character priority assignments.

use mage_core::{Categorized, Category, Ratings};
use serde::{Deserialize, Serialize};

use crate::error::{MechError, MechResult, Pool};
use crate::step::{ATTRIBUTE_BOUNDS, Bounds, SKILL_BOUNDS};

/// The fixed priority values of a pool and the baseline every trait starts at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityScheme {
    /// Which pool this scheme allocates.
    pub pool: Pool,
    /// Primary, secondary, and tertiary dot budgets.
    pub points: [u8; 3],
    /// Free dots every trait starts with.
    pub baseline: u8,
    /// Per-trait range at creation.
    pub bounds: Bounds,
}

/// Attributes: 5/4/3 above a free first dot.
pub const ATTRIBUTE_PRIORITIES: PriorityScheme = PriorityScheme {
    pool: Pool::Attribute,
    points: [5, 4, 3],
    baseline: 1,
    bounds: ATTRIBUTE_BOUNDS,
};

/// Skills: 11/7/4 from zero.
pub const SKILL_PRIORITIES: PriorityScheme = PriorityScheme {
    pool: Pool::Skill,
    points: [11, 7, 4],
    baseline: 0,
    bounds: SKILL_BOUNDS,
};

impl PriorityScheme {
    /// Assign primary/secondary/tertiary budgets to categories in the given order.
    pub fn ranked(&self, order: [Category; 3]) -> PriorityAssignment {
        let mut assignment = PriorityAssignment::new(0, 0, 0);
        for (category, points) in order.into_iter().zip(self.points) {
            assignment.set(category, points);
        }
        assignment
    }

    /// All six ways of distributing the scheme's budgets.
    pub fn assignments(&self) -> Vec<PriorityAssignment> {
        use Category::{Mental, Physical, Social};
        [
            [Mental, Physical, Social],
            [Mental, Social, Physical],
            [Physical, Mental, Social],
            [Physical, Social, Mental],
            [Social, Mental, Physical],
            [Social, Physical, Mental],
        ]
        .into_iter()
        .map(|order| self.ranked(order))
        .collect()
    }
}

/// Priority budget assigned to each category for one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityAssignment {
    /// Mental budget.
    pub mental: u8,
    /// Physical budget.
    pub physical: u8,
    /// Social budget.
    pub social: u8,
}

impl PriorityAssignment {
    /// Build an assignment from explicit per-category budgets.
    pub fn new(mental: u8, physical: u8, social: u8) -> Self {
        Self {
            mental,
            physical,
            social,
        }
    }

    /// Budget for a category.
    pub fn get(&self, category: Category) -> u8 {
        match category {
            Category::Mental => self.mental,
            Category::Physical => self.physical,
            Category::Social => self.social,
        }
    }

    fn set(&mut self, category: Category, points: u8) {
        match category {
            Category::Mental => self.mental = points,
            Category::Physical => self.physical = points,
            Category::Social => self.social = points,
        }
    }

    /// Budgets in Mental, Physical, Social order.
    pub fn values(&self) -> [u8; 3] {
        [self.mental, self.physical, self.social]
    }

    /// Every value must come from the scheme and be used exactly once.
    pub fn check(&self, scheme: &PriorityScheme) -> MechResult<()> {
        let values = self.values();
        for value in values {
            if !scheme.points.contains(&value) {
                return Err(MechError::InvalidPriority {
                    pool: scheme.pool,
                    value,
                    allowed: scheme.points,
                });
            }
        }
        for (i, value) in values.iter().enumerate() {
            if values[i + 1..].contains(value) {
                return Err(MechError::DuplicatePriority {
                    pool: scheme.pool,
                    value: *value,
                });
            }
        }
        Ok(())
    }
}

/// Recover the priority assignment from a complete allocation.
///
/// Succeeds only when the three category sums are exactly a permutation
/// of the scheme's budgets. The budgets in both schemes are distinct, so
/// a match is unique.
pub fn infer_priorities<K: Categorized>(
    ratings: &Ratings<K>,
    scheme: &PriorityScheme,
) -> MechResult<PriorityAssignment> {
    let sums = Category::ALL.map(|c| ratings.category_sum(c, scheme.baseline));

    let mut sorted_sums = sums;
    sorted_sums.sort_unstable();
    let mut sorted_points = scheme.points.map(u32::from);
    sorted_points.sort_unstable();

    if sorted_sums != sorted_points {
        return Err(MechError::UnassignablePriorities {
            pool: scheme.pool,
            sums,
            allowed: scheme.points,
        });
    }

    // Each sum equals one of the u8 budgets, so it fits.
    let [mental, physical, social] = sums.map(|s| s as u8);
    Ok(PriorityAssignment::new(mental, physical, social))
}
