use business::domain::errors::RepositoryError;

/// Maps a failed write, keeping unique-constraint violations apart from other failures.
pub(crate) fn map_write_error(error: sqlx::Error) -> RepositoryError {
    match &error {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            tracing::debug!("Unique constraint rejected write: {}", db.message());
            RepositoryError::Duplicated
        }
        _ => map_read_error(error),
    }
}

pub(crate) fn map_read_error(error: sqlx::Error) -> RepositoryError {
    tracing::error!("Database error: {}", error);
    RepositoryError::DatabaseError
}
