//! Error types for the simulation engine.

use thiserror::Error;

/// Result type alias for engine operations.
pub type LifeResult<T> = Result<T, LifeError>;

/// Errors that can occur while configuring or driving a simulation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifeError {
    /// The rule string could not be parsed into a birth/survival rule.
    #[error("invalid rule {rule:?}: {reason}")]
    InvalidRule { rule: String, reason: RuleSyntax },

    /// A pattern was placed after the simulation started ticking.
    #[error("setup is closed: simulation already advanced to generation {generation}")]
    SetupClosed { generation: u64 },
}

/// The specific way a rule string is malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleSyntax {
    #[error("missing '.' between alive and dead components")]
    MissingSeparator,

    #[error("more than one '.' separator")]
    ExtraSeparator,

    #[error("'{0}' is not a neighbor count digit (0-8)")]
    InvalidDigit(char),
}
