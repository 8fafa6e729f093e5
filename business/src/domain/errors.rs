/// Failures reported by repository adapters.
///
/// Messages are code-style identifiers; callers translate them.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    /// The store could not be reached (no connection, pool exhausted).
    #[error("repository.unavailable")]
    Unavailable,
    /// The store was reached but rejected or failed the statement.
    #[error("repository.database_error")]
    DatabaseError,
}

impl RepositoryError {
    /// `true` for failures that say nothing about whether the row exists.
    pub fn is_storage_failure(&self) -> bool {
        !matches!(self, RepositoryError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_only_treat_missing_rows_as_lookup_results() {
        assert!(!RepositoryError::NotFound.is_storage_failure());
        assert!(RepositoryError::Unavailable.is_storage_failure());
        assert!(RepositoryError::DatabaseError.is_storage_failure());
    }
}
