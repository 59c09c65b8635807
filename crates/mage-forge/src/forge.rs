//! The generation pipeline.
//!
//! One generation is two sequential collaborator calls. A failed
//! character call aborts with no character. A failed portrait call only
//! degrades the portrait to a placeholder.

use chrono::{DateTime, Utc};
use mage_core::{Catalogs, Character};
use mage_mechanics::{Choice, ValidationIssue, has_errors, validate_character};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::collaborator::Collaborator;
use crate::config::ForgeConfig;
use crate::error::{ForgeError, ForgeResult};
use crate::prompt;
use crate::request::GenerationRequest;
use crate::response::parse_character;

/// Outcome of the portrait call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reference", rename_all = "snake_case")]
pub enum Portrait {
    /// The collaborator produced an image reference.
    Ready(String),
    /// No portrait; show a placeholder.
    Placeholder,
}

/// A generated character with its provenance.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForgedCharacter {
    /// Unique id of this generation.
    pub id: Uuid,
    /// When the generation finished.
    pub generated_at: DateTime<Utc>,
    /// The character sheet.
    pub character: Character,
    /// Portrait outcome.
    pub portrait: Portrait,
    /// Problems found on the sheet; only warnings survive strict mode.
    pub issues: Vec<ValidationIssue>,
}

/// Runs generation requests against a collaborator.
pub struct Forge<C> {
    collaborator: C,
    config: ForgeConfig,
    catalogs: Catalogs,
}

impl<C: Collaborator> Forge<C> {
    /// Create a pipeline with the built-in catalogs.
    pub fn new(collaborator: C, config: ForgeConfig) -> Self {
        Self {
            collaborator,
            config,
            catalogs: Catalogs::standard(),
        }
    }

    /// The collaborator.
    pub fn collaborator(&self) -> &C {
        &self.collaborator
    }

    /// The configuration.
    pub fn config(&self) -> &ForgeConfig {
        &self.config
    }

    /// Generate one character.
    pub fn generate(&self, request: &GenerationRequest) -> ForgeResult<ForgedCharacter> {
        info!(concept = request.concept(), xp = request.xp(), "generating character");

        let prompt = prompt::render(request);
        let raw = self.collaborator.generate_character(&prompt)?;
        let mut character = parse_character(&raw, request.concept())?;

        let mut issues = validate_character(&character, &self.catalogs);
        issues.extend(request_mismatches(request, &character));

        if has_errors(&issues) && self.config.strict {
            let messages: Vec<String> = issues
                .iter()
                .filter(|i| i.is_error)
                .map(ToString::to_string)
                .collect();
            warn!(count = messages.len(), "strict mode rejected generated character");
            return Err(ForgeError::RuleRejected(messages));
        }
        for issue in &issues {
            warn!(%issue, "generated character issue");
        }

        let portrait = self.portrait_for(&character);
        character.portrait_url = match &portrait {
            Portrait::Ready(reference) => reference.clone(),
            Portrait::Placeholder => self.config.placeholder_portrait.clone(),
        };

        info!(name = %character.name, issues = issues.len(), "character generated");
        Ok(ForgedCharacter {
            id: Uuid::new_v4(),
            generated_at: Utc::now(),
            character,
            portrait,
            issues,
        })
    }

    fn portrait_for(&self, character: &Character) -> Portrait {
        if !self.config.portraits || character.description.trim().is_empty() {
            return Portrait::Placeholder;
        }
        match self.collaborator.generate_portrait(&character.description) {
            Ok(reference) => Portrait::Ready(reference),
            Err(e) => {
                warn!(error = %e, "portrait generation failed, using placeholder");
                Portrait::Placeholder
            }
        }
    }
}

/// Differences between what was asked for and what came back.
fn request_mismatches(request: &GenerationRequest, character: &Character) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    if character.xp != request.xp() {
        issues.push(ValidationIssue {
            field: "xp".to_string(),
            message: format!("requested {} XP, reply spent {}", request.xp(), character.xp),
            is_error: true,
        });
    }

    let narrative = request.narrative();
    let fixed = [
        ("tarotCard", &narrative.tarot_card, &character.tarot_card),
        ("archetype", &narrative.archetype, &character.archetype),
        ("disadvantage", &narrative.disadvantage, &character.disadvantage),
        ("darkSecret", &narrative.dark_secret, &character.dark_secret),
    ];
    for (field, wanted, got) in fixed {
        let Choice::Fixed(wanted) = wanted else {
            continue;
        };
        if !honors(field, wanted, got.as_deref()) {
            issues.push(ValidationIssue {
                field: field.to_string(),
                message: format!("requested '{wanted}', reply has {got:?}"),
                is_error: false,
            });
        }
    }
    if let Choice::Fixed(wanted) = &narrative.advantages {
        let got = character.advantage_list();
        if got != wanted.as_slice() {
            issues.push(ValidationIssue {
                field: "advantages".to_string(),
                message: format!("requested {wanted:?}, reply has {got:?}"),
                is_error: false,
            });
        }
    }
    issues
}

/// Whether a reply value matches an explicit pick. Only the tarot card
/// may come back with an orientation such as " (Reversed)" appended.
fn honors(field: &str, wanted: &str, got: Option<&str>) -> bool {
    let Some(got) = got else {
        return false;
    };
    if got == wanted {
        return true;
    }
    field == "tarotCard"
        && got
            .strip_prefix(wanted)
            .is_some_and(|rest| rest.starts_with(" (") && rest.ends_with(')'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collaborator::ReplayCollaborator;
    use crate::error::CollaboratorError;
    use crate::fixtures::VESPER;
    use mage_mechanics::NarrativeSelections;

    fn request(xp: i64) -> GenerationRequest {
        GenerationRequest::new("storm priest", xp, &NarrativeSelections::default()).unwrap()
    }

    #[test]
    fn happy_path() {
        let replay = ReplayCollaborator::new()
            .with_character(VESPER)
            .with_portrait("https://img/vesper.png");
        let forge = Forge::new(replay, ForgeConfig::default());
        let forged = forge.generate(&request(0)).unwrap();

        assert_eq!(forged.character.name, "Vesper Hale");
        assert_eq!(forged.portrait, Portrait::Ready("https://img/vesper.png".to_string()));
        assert_eq!(forged.character.portrait_url, "https://img/vesper.png");
        assert!(forged.issues.is_empty(), "{:?}", forged.issues);

        let prompts = forge.collaborator().prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("\"storm priest\""));
        assert_eq!(
            forge.collaborator().descriptions(),
            [forged.character.description.clone()]
        );
    }

    #[test]
    fn failed_character_call_aborts() {
        let replay = ReplayCollaborator::new()
            .with_character_failure(CollaboratorError::Timeout)
            .with_portrait("https://img/never.png");
        let forge = Forge::new(replay, ForgeConfig::default());
        let err = forge.generate(&request(0)).unwrap_err();
        assert!(err.is_collaborator_failure());
        assert!(forge.collaborator().descriptions().is_empty());
    }

    #[test]
    fn failed_portrait_keeps_character() {
        let replay = ReplayCollaborator::new()
            .with_character(VESPER)
            .with_portrait_failure(CollaboratorError::Transport("reset".to_string()));
        let config = ForgeConfig::default().with_placeholder_portrait("placeholder.png");
        let forged = Forge::new(replay, config).generate(&request(0)).unwrap();
        assert_eq!(forged.portrait, Portrait::Placeholder);
        assert_eq!(forged.character.portrait_url, "placeholder.png");
        assert_eq!(forged.character.name, "Vesper Hale");
    }

    #[test]
    fn portraits_can_be_disabled() {
        let replay = ReplayCollaborator::new()
            .with_character(VESPER)
            .with_portrait("https://img/vesper.png");
        let forge = Forge::new(replay, ForgeConfig::default().with_portraits(false));
        let forged = forge.generate(&request(0)).unwrap();
        assert_eq!(forged.portrait, Portrait::Placeholder);
        assert!(forge.collaborator().descriptions().is_empty());
    }

    #[test]
    fn lenient_mode_attaches_issues() {
        let replay = ReplayCollaborator::new().with_character(VESPER);
        let forged = Forge::new(replay, ForgeConfig::default())
            .generate(&request(10))
            .unwrap();
        assert!(has_errors(&forged.issues));
        assert!(forged.issues.iter().any(|i| i.field == "xp"));
    }

    #[test]
    fn strict_mode_rejects() {
        let overspent = VESPER.replacen("\"wits\": 3", "\"wits\": 4", 1);
        let replay = ReplayCollaborator::new().with_character(overspent);
        let err = Forge::new(replay, ForgeConfig::default().with_strict(true))
            .generate(&request(0))
            .unwrap_err();
        match err {
            ForgeError::RuleRejected(messages) => {
                assert!(messages.iter().any(|m| m.starts_with("error: attributes:")));
            }
            other => panic!("expected RuleRejected, got {other:?}"),
        }
    }

    #[test]
    fn unhonored_selection_is_warning() {
        let selections = NarrativeSelections {
            archetype: "The Hero".to_string(),
            ..NarrativeSelections::default()
        };
        let req = GenerationRequest::new("storm priest", 0, &selections).unwrap();
        let replay = ReplayCollaborator::new().with_character(VESPER);
        let forged = Forge::new(replay, ForgeConfig::default().with_strict(true))
            .generate(&req)
            .unwrap();
        let issue = forged.issues.iter().find(|i| i.field == "archetype").unwrap();
        assert!(!issue.is_error);
    }

    #[test]
    fn only_the_tarot_card_may_carry_a_suffix() {
        assert!(honors("tarotCard", "The Tower", Some("The Tower (Reversed)")));
        assert!(honors("tarotCard", "The Tower", Some("The Tower")));
        assert!(!honors("tarotCard", "The Tower", Some("The Towering Inferno")));
        assert!(honors("archetype", "The Sage", Some("The Sage")));
        assert!(!honors("archetype", "The Sage", Some("The Sage Reborn")));
        assert!(!honors("archetype", "The Sage", Some("The Sage (Elder)")));
        assert!(!honors("darkSecret", "Pact with a Spirit", None));
    }

    #[test]
    fn extended_archetype_is_not_honored() {
        let selections = NarrativeSelections {
            tarot_card: "The Tower".to_string(),
            archetype: "The Sage".to_string(),
            ..NarrativeSelections::default()
        };
        let req = GenerationRequest::new("storm priest", 0, &selections).unwrap();

        let replay = ReplayCollaborator::new().with_character(VESPER);
        let forged = Forge::new(replay, ForgeConfig::default()).generate(&req).unwrap();
        assert!(forged.issues.is_empty(), "{:?}", forged.issues);

        let extended = VESPER.replacen("\"The Sage\"", "\"The Sage Reborn\"", 1);
        let replay = ReplayCollaborator::new().with_character(extended);
        let forged = Forge::new(replay, ForgeConfig::default()).generate(&req).unwrap();
        assert!(
            forged
                .issues
                .iter()
                .any(|i| i.field == "archetype" && i.message.starts_with("requested 'The Sage'"))
        );
        assert!(!forged.issues.iter().any(|i| i.field == "tarotCard"));
    }

    #[test]
    fn malformed_reply_is_collaborator_failure() {
        let replay = ReplayCollaborator::new().with_character("Sorry, I cannot help.");
        let err = Forge::new(replay, ForgeConfig::default())
            .generate(&request(0))
            .unwrap_err();
        assert!(matches!(err, ForgeError::MalformedGenerationResponse(_)));
        assert!(err.is_collaborator_failure());
    }
}
