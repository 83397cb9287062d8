#[derive(Debug, thiserror::Error)]
pub enum ItemError {
    #[error("item.invalid_input")]
    InvalidInput,
    #[error("item.not_found")]
    NotFound,
    #[error("shopping_list.not_found")]
    ShoppingListNotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
