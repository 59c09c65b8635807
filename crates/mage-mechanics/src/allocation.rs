//! Creation-time allocation of Attribute, Skill, and Arcana dots.
//!
//! Attributes and Skills are distributed by priority (5/4/3 and 11/7/4).
//! Arcana take four dots: three into the Path's Ruling Arcana, split
//! 2/1, and one into any other Arcanum.
//!
//! Validation is pure. [`Completeness::Partial`] accepts allocations that
//! are still being edited; [`Completeness::Complete`] demands every budget
//! be spent exactly.

use mage_core::{Affinity, Arcanum, Attribute, Categorized, Category, Path, Rated, Ratings, Skill};
use tracing::debug;

use crate::error::{MechError, MechResult};
use crate::priority::{ATTRIBUTE_PRIORITIES, PriorityAssignment, PriorityScheme, SKILL_PRIORITIES};
use crate::step::{self, ARCANUM_BOUNDS};

/// Total Arcana dots at creation.
pub const ARCANA_CREATION_DOTS: u32 = 4;
/// Dots that must go into the Ruling Arcana.
pub const RULING_CREATION_DOTS: u32 = 3;
/// Dots that must go outside the Ruling Arcana.
pub const COMMON_CREATION_DOTS: u32 = 1;
/// Highest single Ruling Arcanum at creation; the split is always 2/1.
const RULING_CREATION_MAX: u8 = 2;

/// Whether unspent dots are acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Completeness {
    /// Interactive editing: budgets may be under-spent but never exceeded.
    Partial,
    /// Final validation: every budget spent exactly.
    #[default]
    Complete,
}

/// Validate Attribute dots against a 5/4/3 priority assignment.
pub fn validate_attribute_allocation(
    attributes: &Ratings<Attribute>,
    priorities: &PriorityAssignment,
    completeness: Completeness,
) -> MechResult<()> {
    validate_priority_allocation(attributes, priorities, &ATTRIBUTE_PRIORITIES, completeness)
}

/// Validate Skill dots against an 11/7/4 priority assignment.
pub fn validate_skill_allocation(
    skills: &Ratings<Skill>,
    priorities: &PriorityAssignment,
    completeness: Completeness,
) -> MechResult<()> {
    validate_priority_allocation(skills, priorities, &SKILL_PRIORITIES, completeness)
}

fn validate_priority_allocation<K: Categorized>(
    ratings: &Ratings<K>,
    priorities: &PriorityAssignment,
    scheme: &PriorityScheme,
    completeness: Completeness,
) -> MechResult<()> {
    priorities.check(scheme)?;

    for key in K::ALL {
        scheme.bounds.check(key.label(), ratings.get(*key))?;
    }

    for category in Category::ALL {
        let spent = ratings.category_sum(category, scheme.baseline);
        let priority = priorities.get(category);
        if spent > u32::from(priority) {
            debug!(pool = %scheme.pool, %category, spent, priority, "category over budget");
            return Err(MechError::CategoryOverBudget {
                pool: scheme.pool,
                category,
                spent,
                priority,
            });
        }
        if completeness == Completeness::Complete && spent < u32::from(priority) {
            return Err(MechError::CategoryUnderBudget {
                pool: scheme.pool,
                category,
                spent,
                priority,
            });
        }
    }

    Ok(())
}

/// Validate Arcana dots against the Path's Ruling Arcana.
///
/// Any `{2, 1}` arrangement across the two Ruling Arcana is accepted. The
/// single remaining dot may go into any non-Ruling Arcanum, the Inferior
/// one included.
pub fn validate_arcana_allocation(
    arcana: &Ratings<Arcanum>,
    path: Path,
    completeness: Completeness,
) -> MechResult<()> {
    for arcanum in Arcanum::ALL {
        ARCANUM_BOUNDS.check(arcanum.label(), arcana.get(*arcanum))?;
    }

    let [first, second] = path.ruling_arcana();
    let ruling = [arcana.get(first), arcana.get(second)];
    let ruling_total: u32 = ruling.iter().map(|v| u32::from(*v)).sum();
    let total = arcana.total();
    let common_total = total - ruling_total;

    if total > ARCANA_CREATION_DOTS {
        return Err(split_error(format!(
            "{total} dots spent, only {ARCANA_CREATION_DOTS} available"
        )));
    }
    if ruling_total > RULING_CREATION_DOTS {
        return Err(split_error(format!(
            "Ruling Arcana {first} and {second} hold {ruling_total} dots, at most {RULING_CREATION_DOTS}"
        )));
    }
    if common_total > COMMON_CREATION_DOTS {
        return Err(split_error(format!(
            "non-Ruling Arcana hold {common_total} dots, at most {COMMON_CREATION_DOTS}"
        )));
    }
    if let Some(over) = [first, second]
        .into_iter()
        .find(|a| arcana.get(*a) > RULING_CREATION_MAX)
    {
        return Err(split_error(format!(
            "{over} has {} dots; Ruling Arcana split 2/1 at creation",
            arcana.get(over)
        )));
    }

    if completeness == Completeness::Partial {
        return Ok(());
    }

    if ruling_total != RULING_CREATION_DOTS {
        return Err(split_error(format!(
            "Ruling Arcana {first} and {second} hold {ruling_total} dots, need {RULING_CREATION_DOTS}"
        )));
    }
    if common_total != COMMON_CREATION_DOTS {
        return Err(split_error(format!(
            "non-Ruling Arcana hold {common_total} dots, need {COMMON_CREATION_DOTS}"
        )));
    }
    // With three Ruling dots and neither above 2, the split is {2, 1}.
    Ok(())
}

fn split_error(message: String) -> MechError {
    debug!(%message, "arcana split rejected");
    MechError::ArcanaSplitInvalid(message)
}

/// Raise an Attribute by one dot, refusing to overspend its category.
pub fn raise_attribute(
    attributes: &Ratings<Attribute>,
    attribute: Attribute,
    priorities: &PriorityAssignment,
) -> MechResult<Ratings<Attribute>> {
    adjust_priority_allocation(attributes, attribute, 1, priorities, &ATTRIBUTE_PRIORITIES)
}

/// Lower an Attribute by one dot, refusing to drop below 1.
pub fn lower_attribute(
    attributes: &Ratings<Attribute>,
    attribute: Attribute,
    priorities: &PriorityAssignment,
) -> MechResult<Ratings<Attribute>> {
    adjust_priority_allocation(attributes, attribute, -1, priorities, &ATTRIBUTE_PRIORITIES)
}

/// Raise a Skill by one dot, refusing to overspend its category.
pub fn raise_skill(
    skills: &Ratings<Skill>,
    skill: Skill,
    priorities: &PriorityAssignment,
) -> MechResult<Ratings<Skill>> {
    adjust_priority_allocation(skills, skill, 1, priorities, &SKILL_PRIORITIES)
}

/// Lower a Skill by one dot, refusing to drop below 0.
pub fn lower_skill(
    skills: &Ratings<Skill>,
    skill: Skill,
    priorities: &PriorityAssignment,
) -> MechResult<Ratings<Skill>> {
    adjust_priority_allocation(skills, skill, -1, priorities, &SKILL_PRIORITIES)
}

fn adjust_priority_allocation<K: Categorized>(
    ratings: &Ratings<K>,
    key: K,
    delta: i8,
    priorities: &PriorityAssignment,
    scheme: &PriorityScheme,
) -> MechResult<Ratings<K>> {
    priorities.check(scheme)?;
    let next = step::step(key.label(), ratings.get(key), delta, scheme.bounds)?;
    let updated = ratings.clone().with(key, next);

    let category = key.category();
    let spent = updated.category_sum(category, scheme.baseline);
    let priority = priorities.get(category);
    if spent > u32::from(priority) {
        return Err(MechError::CategoryOverBudget {
            pool: scheme.pool,
            category,
            spent,
            priority,
        });
    }
    Ok(updated)
}

/// Raise an Arcanum by one dot, refusing any step that breaks the
/// creation split.
pub fn raise_arcanum(
    arcana: &Ratings<Arcanum>,
    arcanum: Arcanum,
    path: Path,
) -> MechResult<Ratings<Arcanum>> {
    adjust_arcanum(arcana, arcanum, 1, path)
}

/// Lower an Arcanum by one dot, refusing to drop below 0.
pub fn lower_arcanum(
    arcana: &Ratings<Arcanum>,
    arcanum: Arcanum,
    path: Path,
) -> MechResult<Ratings<Arcanum>> {
    adjust_arcanum(arcana, arcanum, -1, path)
}

fn adjust_arcanum(
    arcana: &Ratings<Arcanum>,
    arcanum: Arcanum,
    delta: i8,
    path: Path,
) -> MechResult<Ratings<Arcanum>> {
    let next = step::step(arcanum.label(), arcana.get(arcanum), delta, ARCANUM_BOUNDS)?;
    let updated = arcana.clone().with(arcanum, next);
    validate_arcana_allocation(&updated, path, Completeness::Partial)?;
    Ok(updated)
}

/// Ruling/Common/Inferior classification for every Arcanum of a Path.
pub fn arcana_by_affinity(path: Path) -> Vec<(Arcanum, Affinity)> {
    Arcanum::ALL
        .iter()
        .map(|a| (*a, path.affinity(*a)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Pool;
    use proptest::prelude::*;

    /// Spend exactly `points` dots across `attrs` above baseline 1.
    fn spend(ratings: &mut Ratings<Attribute>, attrs: &[Attribute], points: u8) {
        let mut left = points;
        for attr in attrs {
            let add = left.min(4);
            ratings.set(*attr, 1 + add);
            left -= add;
        }
    }

    fn complete_attributes(priorities: &PriorityAssignment) -> Ratings<Attribute> {
        let mut ratings = Ratings::baseline(1);
        for category in Category::ALL {
            spend(
                &mut ratings,
                &Attribute::in_category(category),
                priorities.get(category),
            );
        }
        ratings
    }

    fn thyrsus_arcana(life: u8, spirit: u8, mind: u8) -> Ratings<Arcanum> {
        Ratings::baseline(0)
            .with(Arcanum::Life, life)
            .with(Arcanum::Spirit, spirit)
            .with(Arcanum::Mind, mind)
    }

    #[test]
    fn complete_attribute_allocation_is_ok() {
        let priorities = PriorityAssignment::new(5, 4, 3);
        let attrs = complete_attributes(&priorities);
        assert!(validate_attribute_allocation(&attrs, &priorities, Completeness::Complete).is_ok());
        // Re-validating without mutation gives the same answer.
        assert!(validate_attribute_allocation(&attrs, &priorities, Completeness::Complete).is_ok());
    }

    #[test]
    fn partial_allows_unspent_but_complete_does_not() {
        let priorities = PriorityAssignment::new(3, 5, 4);
        let attrs = Ratings::baseline(1).with(Attribute::Strength, 3);
        assert!(validate_attribute_allocation(&attrs, &priorities, Completeness::Partial).is_ok());
        let err =
            validate_attribute_allocation(&attrs, &priorities, Completeness::Complete).unwrap_err();
        assert!(matches!(err, MechError::CategoryUnderBudget { .. }));
    }

    #[test]
    fn over_budget_names_the_category() {
        let priorities = PriorityAssignment::new(3, 4, 5);
        let attrs = Ratings::baseline(1)
            .with(Attribute::Intelligence, 3)
            .with(Attribute::Wits, 3);
        let err =
            validate_attribute_allocation(&attrs, &priorities, Completeness::Partial).unwrap_err();
        assert_eq!(
            err,
            MechError::CategoryOverBudget {
                pool: Pool::Attribute,
                category: Category::Mental,
                spent: 4,
                priority: 3
            }
        );
        assert_eq!(
            err.to_string(),
            "Mental attribute dots over budget: 4 spent, priority allows 3"
        );
    }

    #[test]
    fn attribute_of_zero_is_out_of_range() {
        let priorities = PriorityAssignment::new(5, 4, 3);
        let attrs = Ratings::baseline(1).with(Attribute::Wits, 0);
        let err =
            validate_attribute_allocation(&attrs, &priorities, Completeness::Partial).unwrap_err();
        assert!(matches!(err, MechError::RatingOutOfRange { rating: 0, .. }));
    }

    #[test]
    fn duplicate_priority_checked_before_sums() {
        let priorities = PriorityAssignment::new(5, 4, 4);
        let attrs = Ratings::baseline(1);
        let err =
            validate_attribute_allocation(&attrs, &priorities, Completeness::Partial).unwrap_err();
        assert!(matches!(err, MechError::DuplicatePriority { value: 4, .. }));
    }

    #[test]
    fn skills_use_eleven_seven_four() {
        let priorities = SKILL_PRIORITIES.ranked([Category::Mental, Category::Social, Category::Physical]);
        let skills = Ratings::<Skill>::baseline(0)
            .with(Skill::Occult, 4)
            .with(Skill::Academics, 3)
            .with(Skill::Investigation, 3)
            .with(Skill::Science, 1)
            .with(Skill::Empathy, 3)
            .with(Skill::Persuasion, 2)
            .with(Skill::Subterfuge, 2)
            .with(Skill::Athletics, 2)
            .with(Skill::Stealth, 2);
        assert!(validate_skill_allocation(&skills, &priorities, Completeness::Complete).is_ok());

        let overspent = skills.with(Skill::Brawl, 1);
        let err = validate_skill_allocation(&overspent, &priorities, Completeness::Complete)
            .unwrap_err();
        assert!(matches!(
            err,
            MechError::CategoryOverBudget {
                category: Category::Physical,
                spent: 5,
                priority: 4,
                ..
            }
        ));
    }

    #[test]
    fn skill_above_five_is_out_of_range() {
        let priorities = PriorityAssignment::new(11, 7, 4);
        let skills = Ratings::<Skill>::baseline(0).with(Skill::Occult, 6);
        assert!(matches!(
            validate_skill_allocation(&skills, &priorities, Completeness::Partial),
            Err(MechError::RatingOutOfRange { rating: 6, .. })
        ));
    }

    #[test]
    fn arcana_two_one_plus_common_is_ok() {
        let arcana = thyrsus_arcana(2, 1, 1);
        assert!(validate_arcana_allocation(&arcana, Path::Thyrsus, Completeness::Complete).is_ok());
        // Either Ruling Arcanum may take the second dot.
        let swapped = thyrsus_arcana(1, 2, 0).with(Arcanum::Time, 1);
        assert!(validate_arcana_allocation(&swapped, Path::Thyrsus, Completeness::Complete).is_ok());
    }

    #[test]
    fn arcana_without_a_two_dot_ruling_is_rejected() {
        let arcana = thyrsus_arcana(1, 1, 2);
        let err = validate_arcana_allocation(&arcana, Path::Thyrsus, Completeness::Complete)
            .unwrap_err();
        assert!(matches!(err, MechError::ArcanaSplitInvalid(_)));
    }

    #[test]
    fn arcana_three_in_one_ruling_is_rejected() {
        let arcana = thyrsus_arcana(3, 0, 1);
        let err = validate_arcana_allocation(&arcana, Path::Thyrsus, Completeness::Complete)
            .unwrap_err();
        assert!(err.to_string().contains("Life has 3 dots"));
    }

    #[test]
    fn arcana_partial_accepts_work_in_progress() {
        let arcana = thyrsus_arcana(2, 0, 0);
        assert!(validate_arcana_allocation(&arcana, Path::Thyrsus, Completeness::Partial).is_ok());
        assert!(validate_arcana_allocation(&arcana, Path::Thyrsus, Completeness::Complete).is_err());
    }

    #[test]
    fn arcana_two_common_dots_rejected_even_when_partial() {
        let arcana = Ratings::baseline(0)
            .with(Arcanum::Time, 1)
            .with(Arcanum::Fate, 1);
        assert!(validate_arcana_allocation(&arcana, Path::Thyrsus, Completeness::Partial).is_err());
    }

    #[test]
    fn raise_attribute_refuses_overspend() {
        let priorities = PriorityAssignment::new(3, 4, 5);
        let attrs = Ratings::baseline(1).with(Attribute::Intelligence, 4);
        let err = raise_attribute(&attrs, Attribute::Wits, &priorities).unwrap_err();
        assert!(matches!(err, MechError::CategoryOverBudget { spent: 4, .. }));

        let raised = raise_attribute(&attrs, Attribute::Strength, &priorities).unwrap();
        assert_eq!(raised.get(Attribute::Strength), 2);
        // The input map is untouched.
        assert_eq!(attrs.get(Attribute::Strength), 1);
    }

    #[test]
    fn lower_attribute_refuses_below_one() {
        let priorities = PriorityAssignment::new(5, 4, 3);
        let attrs = Ratings::baseline(1);
        assert!(matches!(
            lower_attribute(&attrs, Attribute::Wits, &priorities),
            Err(MechError::WouldGoBelowFloor { .. })
        ));
    }

    #[test]
    fn raise_attribute_refuses_past_five() {
        let priorities = PriorityAssignment::new(5, 4, 3);
        let attrs = Ratings::baseline(1).with(Attribute::Intelligence, 5);
        assert!(matches!(
            raise_attribute(&attrs, Attribute::Intelligence, &priorities),
            Err(MechError::WouldExceedCap { cap: 5, .. })
        ));
    }

    #[test]
    fn skill_raise_and_lower() {
        let priorities = PriorityAssignment::new(4, 7, 11);
        let skills = Ratings::<Skill>::baseline(0);
        let raised = raise_skill(&skills, Skill::Occult, &priorities).unwrap();
        assert_eq!(raised.get(Skill::Occult), 1);
        let lowered = lower_skill(&raised, Skill::Occult, &priorities).unwrap();
        assert_eq!(lowered, skills);
        assert!(lower_skill(&skills, Skill::Occult, &priorities).is_err());
    }

    #[test]
    fn raise_arcanum_stops_at_four_dots() {
        let full = thyrsus_arcana(2, 1, 1);
        assert!(raise_arcanum(&full, Arcanum::Spirit, Path::Thyrsus).is_err());
        assert!(raise_arcanum(&full, Arcanum::Prime, Path::Thyrsus).is_err());

        let partial = thyrsus_arcana(2, 0, 1);
        let raised = raise_arcanum(&partial, Arcanum::Spirit, Path::Thyrsus).unwrap();
        assert_eq!(raised.get(Arcanum::Spirit), 1);
        assert!(lower_arcanum(&raised, Arcanum::Death, Path::Thyrsus).is_err());
    }

    #[test]
    fn affinity_table_for_path() {
        let table = arcana_by_affinity(Path::Obrimos);
        assert_eq!(table.len(), 10);
        assert!(table.contains(&(Arcanum::Prime, Affinity::Ruling)));
        assert!(table.contains(&(Arcanum::Death, Affinity::Inferior)));
    }

    proptest! {
        #[test]
        fn complete_allocation_ok_iff_sums_match(
            assignment_index in 0usize..6,
            ratings in proptest::collection::vec(1u8..=5, 9),
        ) {
            let priorities = ATTRIBUTE_PRIORITIES.assignments()[assignment_index];
            let attrs: Ratings<Attribute> = Attribute::ALL
                .iter()
                .copied()
                .zip(ratings.iter().copied())
                .collect();

            let sums_match = Category::ALL
                .iter()
                .all(|c| attrs.category_sum(*c, 1) == u32::from(priorities.get(*c)));
            let result = validate_attribute_allocation(&attrs, &priorities, Completeness::Complete);
            prop_assert_eq!(result.is_ok(), sums_match);
        }

        #[test]
        fn every_permutation_accepts_its_exact_allocation(assignment_index in 0usize..6) {
            let priorities = ATTRIBUTE_PRIORITIES.assignments()[assignment_index];
            let attrs = complete_attributes(&priorities);
            prop_assert!(
                validate_attribute_allocation(&attrs, &priorities, Completeness::Complete).is_ok()
            );
        }
    }
}
