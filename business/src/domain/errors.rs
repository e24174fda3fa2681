/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    /// Backing store failed. The in-memory stores never raise it; it is kept
    /// for store implementations that talk to something external.
    #[error("repository.persistence")]
    Persistence,
}
