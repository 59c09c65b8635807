//! Narrative option resolution.
//!
//! Each narrative axis is either fixed by the user or deferred to the
//! generator, which must choose from the axis catalog. The resolver never
//! randomizes on its own. The "Random" sentinel exists only in raw
//! selections; resolved options are a [`Choice`].

use mage_core::{Catalog, Catalogs};
use serde::{Deserialize, Serialize};

use crate::error::{MechError, MechResult};

/// The raw selection value meaning "let the generator choose".
pub const RANDOM: &str = "Random";

/// Most advantages a character may be seeded with.
pub const MAX_ADVANTAGES: usize = 3;

/// A resolved narrative axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice<T> {
    /// The user picked this value; pass it through unchanged.
    Fixed(T),
    /// The generator picks, and must pick from this catalog.
    Deferred(&'static Catalog),
}

impl<T> Choice<T> {
    /// The fixed value, if any.
    pub fn fixed(&self) -> Option<&T> {
        match self {
            Self::Fixed(value) => Some(value),
            Self::Deferred(_) => None,
        }
    }

    /// True when the choice is left to the generator.
    pub fn is_deferred(&self) -> bool {
        matches!(self, Self::Deferred(_))
    }
}

/// Multi-select state for the advantages axis.
///
/// Always holds either the Random sentinel alone or between one and
/// [`MAX_ADVANTAGES`] explicit picks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct AdvantageSelection(Vec<String>);

impl Default for AdvantageSelection {
    fn default() -> Self {
        Self::random()
    }
}

impl AdvantageSelection {
    /// The Random state.
    pub fn random() -> Self {
        Self(vec![RANDOM.to_string()])
    }

    /// A selection built from a full list, starting from the Random state.
    pub fn from_picks<S: AsRef<str>>(picks: &[S]) -> Self {
        let mut selection = Self::random();
        selection.replace(picks);
        selection
    }

    /// True when advantages are left to the generator.
    pub fn is_random(&self) -> bool {
        self.0.len() == 1 && self.0[0] == RANDOM
    }

    /// Explicit picks; empty in the Random state.
    pub fn picks(&self) -> &[String] {
        if self.is_random() { &[] } else { &self.0 }
    }

    /// The raw selection, `["Random"]` or the explicit picks.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Reconcile a full multi-select list with the current state.
    ///
    /// Newly choosing Random discards explicit picks; explicit picks made
    /// while Random is current discard Random. Picks past the third are
    /// dropped, and an empty list falls back to Random.
    pub fn replace<S: AsRef<str>>(&mut self, picks: &[S]) {
        let has_random = picks.iter().any(|p| p.as_ref().trim() == RANDOM);
        let mut explicit: Vec<String> = Vec::new();
        for pick in picks {
            let pick = pick.as_ref().trim();
            if pick.is_empty() || pick == RANDOM || explicit.iter().any(|e| e == pick) {
                continue;
            }
            explicit.push(pick.to_string());
        }

        if has_random && (!self.is_random() || explicit.is_empty()) {
            *self = Self::random();
            return;
        }

        explicit.truncate(MAX_ADVANTAGES);
        *self = if explicit.is_empty() {
            Self::random()
        } else {
            Self(explicit)
        };
    }

    /// Single-click semantics: Random resets, a new pick is added while
    /// room remains, an existing pick is removed.
    pub fn toggle(&mut self, pick: &str) {
        let pick = pick.trim();
        if pick == RANDOM {
            *self = Self::random();
            return;
        }
        if self.is_random() {
            self.0 = vec![pick.to_string()];
            return;
        }
        if let Some(index) = self.0.iter().position(|p| p == pick) {
            self.0.remove(index);
            if self.0.is_empty() {
                *self = Self::random();
            }
        } else if self.0.len() < MAX_ADVANTAGES {
            self.0.push(pick.to_string());
        }
    }
}

impl From<Vec<String>> for AdvantageSelection {
    fn from(picks: Vec<String>) -> Self {
        Self::from_picks(&picks)
    }
}

impl From<AdvantageSelection> for Vec<String> {
    fn from(selection: AdvantageSelection) -> Self {
        selection.0
    }
}

/// Raw narrative selections as entered by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NarrativeSelections {
    /// Tarot card name or "Random".
    pub tarot_card: String,
    /// Archetype name or "Random".
    pub archetype: String,
    /// Advantage multi-select.
    pub advantages: AdvantageSelection,
    /// Disadvantage name or "Random".
    pub disadvantage: String,
    /// Dark secret name or "Random".
    pub dark_secret: String,
}

impl Default for NarrativeSelections {
    fn default() -> Self {
        Self {
            tarot_card: RANDOM.to_string(),
            archetype: RANDOM.to_string(),
            advantages: AdvantageSelection::random(),
            disadvantage: RANDOM.to_string(),
            dark_secret: RANDOM.to_string(),
        }
    }
}

/// Narrative options ready for the generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedNarrative {
    /// Tarot card theme.
    pub tarot_card: Choice<String>,
    /// Archetype.
    pub archetype: Choice<String>,
    /// One to three advantages.
    pub advantages: Choice<Vec<String>>,
    /// Disadvantage.
    pub disadvantage: Choice<String>,
    /// Dark secret.
    pub dark_secret: Choice<String>,
}

impl ResolvedNarrative {
    /// Every axis deferred to the generator.
    pub fn all_deferred(catalogs: &Catalogs) -> Self {
        Self {
            tarot_card: Choice::Deferred(catalogs.tarot_cards),
            archetype: Choice::Deferred(catalogs.archetypes),
            advantages: Choice::Deferred(catalogs.advantages),
            disadvantage: Choice::Deferred(catalogs.disadvantages),
            dark_secret: Choice::Deferred(catalogs.dark_secrets),
        }
    }
}

/// Resolve raw selections against the catalogs.
///
/// "Random" (or a blank field) defers an axis with its full catalog. An
/// explicit single value is trimmed, then must be a catalog member.
pub fn resolve_narrative_options(
    selections: &NarrativeSelections,
    catalogs: &Catalogs,
) -> MechResult<ResolvedNarrative> {
    let advantages = if selections.advantages.is_random() {
        Choice::Deferred(catalogs.advantages)
    } else {
        for pick in selections.advantages.picks() {
            check_member(catalogs.advantages, pick)?;
        }
        Choice::Fixed(selections.advantages.picks().to_vec())
    };

    Ok(ResolvedNarrative {
        tarot_card: resolve_single(&selections.tarot_card, catalogs.tarot_cards)?,
        archetype: resolve_single(&selections.archetype, catalogs.archetypes)?,
        advantages,
        disadvantage: resolve_single(&selections.disadvantage, catalogs.disadvantages)?,
        dark_secret: resolve_single(&selections.dark_secret, catalogs.dark_secrets)?,
    })
}

fn resolve_single(raw: &str, catalog: &'static Catalog) -> MechResult<Choice<String>> {
    let value = raw.trim();
    if value.is_empty() || value == RANDOM {
        return Ok(Choice::Deferred(catalog));
    }
    check_member(catalog, value)?;
    Ok(Choice::Fixed(value.to_string()))
}

fn check_member(catalog: &Catalog, value: &str) -> MechResult<()> {
    if catalog.contains(value) {
        Ok(())
    } else {
        Err(MechError::NotInCatalog {
            axis: catalog.axis,
            value: value.to_string(),
        })
    }
}
