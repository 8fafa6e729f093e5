use crate::domain::errors::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.invalid_price")]
    InvalidPrice,
    #[error("product.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}

impl ProductError {
    /// Maps a repository lookup failure, turning a missing row into `NotFound`.
    pub fn from_lookup(err: RepositoryError) -> Self {
        if err.is_storage_failure() {
            ProductError::Repository(err)
        } else {
            ProductError::NotFound
        }
    }
}
