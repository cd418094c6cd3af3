use thiserror::Error;

#[derive(Debug, Error)]
pub enum Argon2KitError {
    /// The string does not follow the `$argon2...$` encoded-hash structure.
    /// Raised as soon as parsing fails, before any computation runs.
    #[error("invalid hash format: {0}")]
    InvalidHashFormat(String),

    /// The primitive rejected the cost/salt/length combination. Carries the
    /// primitive's own message; the facade does not pre-validate parameters.
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// Unknown algorithm tag at construction time, or an entry point the
    /// bound variant does not provide.
    #[error("unsupported variant: {0}")]
    UnsupportedVariant(String),

    /// A primitive failure that is not a parameter rejection. The computation
    /// is deterministic, so these are never retried.
    #[error("argon2 computation failed: {0}")]
    Primitive(String),
}
