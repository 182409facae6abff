//! Error types for the resolve crate.

/// Errors that can occur while reconciling leads against a resolution.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ResolveError {
    /// The lead was not part of the input the resolution was built from.
    #[error("no canonical record for lead _id={id} email={email}")]
    Unresolved { id: String, email: String },
}

/// Convenience alias for resolve results.
pub type ResolveResult<T> = Result<T, ResolveError>;
