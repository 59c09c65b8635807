//! Single-dot rating steps.
//!
//! A step either lands inside its [`Bounds`] or is refused; ratings are
//! never clamped, so callers must reject a refused mutation.

use crate::error::{MechError, MechResult};

/// Inclusive floor and cap for a trait family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    /// Lowest allowed rating.
    pub floor: u8,
    /// Highest allowed rating.
    pub cap: u8,
}

impl Bounds {
    /// Create bounds; `floor` must not exceed `cap`.
    pub const fn new(floor: u8, cap: u8) -> Self {
        Self { floor, cap }
    }

    /// True if `rating` lies within the bounds.
    pub fn contains(self, rating: u8) -> bool {
        (self.floor..=self.cap).contains(&rating)
    }

    /// Reject a rating outside the bounds.
    pub fn check(self, name: &str, rating: u8) -> MechResult<()> {
        if self.contains(rating) {
            Ok(())
        } else {
            Err(MechError::RatingOutOfRange {
                name: name.to_string(),
                rating,
                min: self.floor,
                max: self.cap,
            })
        }
    }
}

/// Attributes: 1-5.
pub const ATTRIBUTE_BOUNDS: Bounds = Bounds::new(1, 5);
/// Skills: 0-5.
pub const SKILL_BOUNDS: Bounds = Bounds::new(0, 5);
/// Arcana: 0-5.
pub const ARCANUM_BOUNDS: Bounds = Bounds::new(0, 5);
/// Gnosis: 1-10.
pub const GNOSIS_BOUNDS: Bounds = Bounds::new(1, 10);
/// Wisdom: 0-10.
pub const WISDOM_BOUNDS: Bounds = Bounds::new(0, 10);

/// Apply `delta` to `current`, refusing to leave `bounds`.
pub fn step(name: &str, current: u8, delta: i8, bounds: Bounds) -> MechResult<u8> {
    let next = i16::from(current) + i16::from(delta);
    if next > i16::from(bounds.cap) {
        return Err(MechError::WouldExceedCap {
            name: name.to_string(),
            current,
            cap: bounds.cap,
        });
    }
    if next < i16::from(bounds.floor) {
        return Err(MechError::WouldGoBelowFloor {
            name: name.to_string(),
            current,
            floor: bounds.floor,
        });
    }
    // In range of a u8 bound, so the narrowing cannot truncate.
    Ok(next as u8)
}
