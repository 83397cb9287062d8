use business::domain::errors::RepositoryError;

/// Logs the driver error and hides it behind the opaque repository error.
pub(crate) fn database_error(err: sqlx::Error) -> RepositoryError {
    tracing::error!(error = %err, "database query failed");
    RepositoryError::database_error()
}

/// Like [`database_error`], but a foreign key violation means the parent row
/// is gone.
pub(crate) fn insert_error(err: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(db_err) = &err
        && db_err.is_foreign_key_violation()
    {
        tracing::warn!(error = %err, "insert references a missing parent row");
        return RepositoryError::reference_not_found();
    }
    database_error(err)
}

/// Zero affected rows on an update or delete means the row did not exist.
pub(crate) fn require_affected(rows_affected: u64) -> Result<(), RepositoryError> {
    if rows_affected == 0 {
        return Err(RepositoryError::not_found());
    }
    Ok(())
}
