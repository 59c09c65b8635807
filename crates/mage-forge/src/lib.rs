//! Character generation pipeline for Mage: The Awakening 2E.
//!
//! Turns a concept and narrative selections into a checked
//! [`GenerationRequest`], renders the collaborator prompt, type-checks
//! the reply into a character, holds it to the rules engine, fetches a
//! portrait, and exports the finished sheet as plain text.

pub mod collaborator;
pub mod config;
pub mod error;
pub mod export;
pub mod forge;
pub mod prompt;
pub mod request;
pub mod response;

#[cfg(test)]
mod fixtures;

pub use collaborator::{Collaborator, ReplayCollaborator};
pub use config::ForgeConfig;
pub use error::{CollaboratorError, ForgeError, ForgeResult, GENERIC_FAILURE};
pub use forge::{Forge, ForgedCharacter, Portrait};
pub use request::GenerationRequest;
pub use response::parse_character;
