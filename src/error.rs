/// Error types for the census crate
///
/// Every failure funnels into one crate-level enum so the binary can report
/// any of them uniformly and exit non-zero. There is no recovery path: a
/// census run either completes or aborts.

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, CensusError>;

/// Errors raised while scanning and aggregating a source tree
#[derive(Debug, Error)]
pub enum CensusError {
    /// A precondition on a path or argument was violated: wrong file
    /// extension, a non-directory scan root, or an empty root argument.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A keyword count was requested that was never computed. Lookups of
    /// untracked keywords fail instead of returning zero.
    #[error("no count recorded for keyword '{0}'")]
    UnknownKeyword(String),

    /// An on-demand keyword did not compile as a search pattern.
    #[error("invalid keyword pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// An underlying filesystem read or listing failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
