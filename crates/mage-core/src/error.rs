//! Error types for structurally invalid core input.

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised when input does not name a known enumerant.
///
/// These are structural failures, not rule violations: a caller that
/// hands over an unknown trait name has a bug or a malformed document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// A trait name did not match any enumerant of the expected kind.
    #[error("unknown {kind}: \"{name}\"")]
    UnknownTrait {
        /// Which kind of trait was expected (attribute, skill, arcanum).
        kind: &'static str,
        /// The name that failed to parse.
        name: String,
    },

    /// A Path name did not match any of the five Paths.
    #[error("unknown path: \"{0}\"")]
    UnknownPath(String),

    /// An Order name did not match any of the eight Orders.
    #[error("unknown order: \"{0}\"")]
    UnknownOrder(String),

    /// A narrative axis name was not recognized.
    #[error("unknown narrative axis: \"{0}\"")]
    UnknownAxis(String),
}
