//! Generation requests.

use mage_core::Catalogs;
use mage_mechanics::{NarrativeSelections, ResolvedNarrative, resolve_narrative_options};

use crate::error::{ForgeError, ForgeResult};

/// A checked request to generate one character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    concept: String,
    xp: u32,
    narrative: ResolvedNarrative,
}

impl GenerationRequest {
    /// Build a request against the built-in catalogs.
    ///
    /// Input is checked first: an empty concept or negative XP is an
    /// `InputValidation` error. Narrative selections are resolved after.
    pub fn new(
        concept: &str,
        xp: i64,
        selections: &NarrativeSelections,
    ) -> ForgeResult<Self> {
        Self::with_catalogs(concept, xp, selections, &Catalogs::standard())
    }

    /// Build a request against the given catalogs.
    pub fn with_catalogs(
        concept: &str,
        xp: i64,
        selections: &NarrativeSelections,
        catalogs: &Catalogs,
    ) -> ForgeResult<Self> {
        let concept = concept.trim();
        if concept.is_empty() {
            return Err(ForgeError::InputValidation("concept is empty".to_string()));
        }
        if xp < 0 {
            return Err(ForgeError::InputValidation(format!(
                "XP must not be negative, got {xp}"
            )));
        }
        let xp = u32::try_from(xp)
            .map_err(|_| ForgeError::InputValidation(format!("XP {xp} is too large")))?;

        let narrative = resolve_narrative_options(selections, catalogs)?;
        Ok(Self {
            concept: concept.to_string(),
            xp,
            narrative,
        })
    }

    /// The trimmed concept.
    pub fn concept(&self) -> &str {
        &self.concept
    }

    /// Experience to spend after creation.
    pub fn xp(&self) -> u32 {
        self.xp
    }

    /// Resolved narrative options.
    pub fn narrative(&self) -> &ResolvedNarrative {
        &self.narrative
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mage_mechanics::MechError;

    #[test]
    fn trims_concept() {
        let req =
            GenerationRequest::new("  exiled alchemist ", 10, &NarrativeSelections::default())
                .unwrap();
        assert_eq!(req.concept(), "exiled alchemist");
        assert_eq!(req.xp(), 10);
        assert!(req.narrative().archetype.is_deferred());
    }

    #[test]
    fn empty_concept_rejected() {
        let err = GenerationRequest::new("   ", 0, &NarrativeSelections::default()).unwrap_err();
        assert!(matches!(err, ForgeError::InputValidation(_)));
    }

    #[test]
    fn negative_xp_rejected_before_narrative() {
        let selections = NarrativeSelections {
            archetype: "Nonsense".to_string(),
            ..NarrativeSelections::default()
        };
        let err = GenerationRequest::new("a thief", -1, &selections).unwrap_err();
        assert!(matches!(err, ForgeError::InputValidation(_)));
    }

    #[test]
    fn unknown_selection_is_rule_error() {
        let selections = NarrativeSelections {
            archetype: "Nonsense".to_string(),
            ..NarrativeSelections::default()
        };
        let err = GenerationRequest::new("a thief", 0, &selections).unwrap_err();
        assert!(matches!(
            err,
            ForgeError::Rule(MechError::NotInCatalog { .. })
        ));
    }
}
