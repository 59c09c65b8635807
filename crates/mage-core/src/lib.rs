//! Core types for the Mage: The Awakening 2E character forge.
//!
//! This crate defines the closed trait enumerants, the Path and Order
//! tables, rating maps, narrative catalogs, and the [`Character`]
//! aggregate. It holds no rules; allocation and advancement live in
//! `mage-mechanics`.

/// Narrative option catalogs (tarot, archetypes, advantages, ...).
pub mod catalog;
/// The character aggregate.
pub mod character;
/// Error types used throughout the crate.
pub mod error;
/// Paths, Orders, and Arcanum affinity.
pub mod path;
/// Dot-rating maps.
pub mod ratings;
/// Attribute, Skill, and Arcanum enumerants.
pub mod traits;

/// Re-export catalog types.
pub use catalog::{Axis, Catalog, Catalogs};
/// Re-export the character aggregate.
pub use character::Character;
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export Path and Order types.
pub use path::{Affinity, Order, Path};
/// Re-export rating maps.
pub use ratings::Ratings;
/// Re-export trait enumerants.
pub use traits::{Arcanum, Attribute, Categorized, Category, Rated, Skill};
