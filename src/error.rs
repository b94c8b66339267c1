//! Error type shared by the partitioner and the sampler.

/// Errors returned by `junban` operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required argument was absent (`None`).
    InvalidArgument {
        /// Name of the missing argument.
        name: &'static str,
    },
    /// Asked to choose an element from a sequence that produced none.
    EmptySequence,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument { name } => write!(f, "argument `{name}` must be present"),
            Self::EmptySequence => write!(f, "sequence contains no elements"),
        }
    }
}

impl std::error::Error for Error {}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
