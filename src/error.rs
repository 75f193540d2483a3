use thiserror::Error;

/// Failure taxonomy for an audit run. Both variants are terminal: the caller
/// reports the diagnostic and stops, there is no partial output.
#[derive(Debug, Error)]
pub enum AuditError {
    /// Provider credentials or region could not be resolved into a usable
    /// session.
    #[error("failed to establish AWS session: {0}")]
    Session(String),

    /// An inventory query against the provider failed.
    #[error("{query} failed: {message}")]
    Source {
        query: &'static str,
        message: String,
    },
}
