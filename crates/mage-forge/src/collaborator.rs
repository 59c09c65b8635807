//! The generative collaborator seam.
//!
//! The pipeline makes two one-shot calls: the character body, then a
//! portrait keyed off the description. Anything that can answer both
//! implements [`Collaborator`].

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::error::CollaboratorError;

/// An external generator of character bodies and portraits.
pub trait Collaborator {
    /// Generate a character from a prompt, returning the raw JSON reply.
    fn generate_character(&self, prompt: &str) -> Result<String, CollaboratorError>;

    /// Generate a portrait from a physical description, returning an
    /// image reference.
    fn generate_portrait(&self, description: &str) -> Result<String, CollaboratorError>;
}

/// Answers from canned replies and records what it was asked.
///
/// Character replies are consumed in order; the portrait reply is reused
/// for every call.
#[derive(Debug)]
pub struct ReplayCollaborator {
    characters: RefCell<VecDeque<Result<String, CollaboratorError>>>,
    portrait: Result<String, CollaboratorError>,
    prompts: RefCell<Vec<String>>,
    descriptions: RefCell<Vec<String>>,
}

impl Default for ReplayCollaborator {
    fn default() -> Self {
        Self::new()
    }
}

impl ReplayCollaborator {
    /// A collaborator with no character replies and no portrait.
    pub fn new() -> Self {
        Self {
            characters: RefCell::new(VecDeque::new()),
            portrait: Err(CollaboratorError::Rejected("no portrait recorded".to_string())),
            prompts: RefCell::new(Vec::new()),
            descriptions: RefCell::new(Vec::new()),
        }
    }

    /// Queue a raw character reply.
    pub fn with_character(mut self, json: impl Into<String>) -> Self {
        self.characters.get_mut().push_back(Ok(json.into()));
        self
    }

    /// Queue a failed character call.
    pub fn with_character_failure(mut self, error: CollaboratorError) -> Self {
        self.characters.get_mut().push_back(Err(error));
        self
    }

    /// Answer portrait calls with this reference.
    pub fn with_portrait(mut self, reference: impl Into<String>) -> Self {
        self.portrait = Ok(reference.into());
        self
    }

    /// Fail portrait calls with this error.
    pub fn with_portrait_failure(mut self, error: CollaboratorError) -> Self {
        self.portrait = Err(error);
        self
    }

    /// Prompts received so far.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }

    /// Portrait descriptions received so far.
    pub fn descriptions(&self) -> Vec<String> {
        self.descriptions.borrow().clone()
    }
}

impl Collaborator for ReplayCollaborator {
    fn generate_character(&self, prompt: &str) -> Result<String, CollaboratorError> {
        self.prompts.borrow_mut().push(prompt.to_string());
        self.characters
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| {
                Err(CollaboratorError::Transport(
                    "no recorded character reply left".to_string(),
                ))
            })
    }

    fn generate_portrait(&self, description: &str) -> Result<String, CollaboratorError> {
        self.descriptions.borrow_mut().push(description.to_string());
        self.portrait.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replies_in_order_then_runs_dry() {
        let replay = ReplayCollaborator::new()
            .with_character("{\"a\":1}")
            .with_character_failure(CollaboratorError::Timeout);
        assert_eq!(replay.generate_character("p1").unwrap(), "{\"a\":1}");
        assert_eq!(
            replay.generate_character("p2"),
            Err(CollaboratorError::Timeout)
        );
        assert!(matches!(
            replay.generate_character("p3"),
            Err(CollaboratorError::Transport(_))
        ));
        assert_eq!(replay.prompts(), ["p1", "p2", "p3"]);
    }

    #[test]
    fn portrait_is_reused() {
        let replay = ReplayCollaborator::new().with_portrait("https://img/1.png");
        assert_eq!(replay.generate_portrait("tall").unwrap(), "https://img/1.png");
        assert_eq!(replay.generate_portrait("short").unwrap(), "https://img/1.png");
        assert_eq!(replay.descriptions(), ["tall", "short"]);
    }

    #[test]
    fn no_portrait_by_default() {
        assert!(ReplayCollaborator::new().generate_portrait("x").is_err());
    }
}
