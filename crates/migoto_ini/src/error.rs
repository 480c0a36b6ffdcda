//! Error types for ini assembly.
//!
//! Every error here is a caller programming error and is reported at the point of
//! misuse: when a section is constructed, when a clause is attached, or when a
//! section is handed to the [`IniBuilder`](crate::IniBuilder). Rendering itself never fails.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while assembling an ini document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A `TextureOverride` section was constructed without a hash.
    #[error("TextureOverride section '{name}' requires a hash")]
    MissingHash { name: String },

    /// The hash given to a section is empty or not hexadecimal.
    #[error("Invalid hash '{hash}' for section '{name}': expected hex digits")]
    InvalidHash { name: String, hash: String },

    /// A section with the same title was already added to the builder.
    #[error("Duplicate section title: [{title}]")]
    DuplicateSection { title: String },

    /// A conditional block inside the section has no clauses.
    #[error("Section [{title}] contains a conditional block without clauses")]
    EmptyConditional { title: String },

    /// A clause was attached after the unconditional `else` clause.
    #[error("Cannot add a clause after the else clause of a conditional block")]
    ClauseAfterElse,

    /// An `else` clause was requested before any `if` clause.
    #[error("Conditional block must start with an if clause")]
    ElseWithoutIf,
}
