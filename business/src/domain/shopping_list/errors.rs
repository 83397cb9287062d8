#[derive(Debug, thiserror::Error)]
pub enum ShoppingListError {
    #[error("shopping_list.invalid_input")]
    InvalidInput,
    #[error("shopping_list.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
