//! Error types for the generation pipeline.

use miette::Diagnostic;
use thiserror::Error;

use mage_mechanics::MechError;

/// The one message users see when a collaborator call fails.
pub const GENERIC_FAILURE: &str =
    "Failed to generate character. The arcane energies are unstable. Please try again.";

/// Result type for forge operations.
pub type ForgeResult<T> = Result<T, ForgeError>;

/// Failures reported by a generative collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollaboratorError {
    /// The request never reached the collaborator, or the reply was lost.
    #[error("transport failure: {0}")]
    Transport(String),

    /// No reply arrived in time.
    #[error("collaborator timed out")]
    Timeout,

    /// The collaborator refused the request.
    #[error("collaborator rejected the request: {0}")]
    Rejected(String),
}

/// Errors that can occur while generating or checking a character.
#[derive(Debug, Error, Diagnostic)]
pub enum ForgeError {
    /// Bad request input, caught before any collaborator call.
    #[error("invalid input: {0}")]
    #[diagnostic(code(mage::input), help("give a non-empty concept and a non-negative XP total"))]
    InputValidation(String),

    /// A rule of the allocation, ledger, or resolver was broken.
    #[error("{0}")]
    #[diagnostic(code(mage::rule))]
    Rule(#[from] MechError),

    /// The collaborator call failed.
    #[error("{0}")]
    #[diagnostic(code(mage::collaborator), help("the call can be retried as-is"))]
    Collaborator(#[from] CollaboratorError),

    /// The collaborator replied with something that is not a character.
    #[error("malformed generation response: {0}")]
    #[diagnostic(
        code(mage::malformed_response),
        help("the reply must be a JSON object with every character field")
    )]
    MalformedGenerationResponse(String),

    /// Strict mode refused a generated character that breaks the rules.
    #[error("generated character breaks {} rule(s): {}", .0.len(), .0.join("; "))]
    #[diagnostic(code(mage::rule_rejected), help("retry, or run without --strict to keep it"))]
    RuleRejected(Vec<String>),
}

impl ForgeError {
    /// The message to show an end user.
    ///
    /// Collaborator trouble (including an unusable reply) collapses to one
    /// generic message; everything else is specific.
    pub fn user_message(&self) -> String {
        match self {
            Self::Collaborator(_) | Self::MalformedGenerationResponse(_) => {
                GENERIC_FAILURE.to_string()
            }
            other => other.to_string(),
        }
    }

    /// True for failures of the external collaborator.
    pub fn is_collaborator_failure(&self) -> bool {
        matches!(
            self,
            Self::Collaborator(_) | Self::MalformedGenerationResponse(_)
        )
    }
}
