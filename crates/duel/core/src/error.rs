//! Common error infrastructure for duel-core.
//!
//! Domain errors (`ExecuteError`, `SeatError`, `UnknownElement`, ...) live next
//! to the operations that produce them. This module holds the shared
//! classification so callers can decide whether to abort a battle or log the
//! problem and keep going.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the battle can continue (e.g. a collaborator returned garbage)
/// - **Validation**: the caller broke an operation contract and must not retry unchanged
/// - **Internal**: state inconsistency that indicates a bug
/// - **Fatal**: the battle cannot continue
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - the battle continues unchanged.
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: insufficient mana, seat out of turn
    Validation,

    /// Internal error - unexpected state inconsistency.
    Internal,

    /// Fatal error - the current battle must be aborted.
    ///
    /// Examples: malformed wizard definition, unknown element name
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if the current battle should be aborted.
    pub const fn aborts_battle(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all duel-core errors.
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
