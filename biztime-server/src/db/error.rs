//! Database error type shared by every store implementation

use sqlx::error::DatabaseError;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    /// Unique or foreign-key constraint rejected the write
    #[error("conflict: {0}")]
    Conflict(String),

    /// Check constraint rejected the write
    #[error("invalid value: {0}")]
    Invalid(String),
}

impl DbError {
    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }
}

impl From<sqlx::Error> for DbError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &e {
            if let Some(translated) = translate_constraint(&**db) {
                return translated;
            }
        }
        Self::Sqlx(e)
    }
}

fn translate_constraint(db: &dyn DatabaseError) -> Option<DbError> {
    let constraint = db.constraint().unwrap_or("unnamed constraint");
    if db.is_unique_violation() {
        Some(DbError::Conflict(format!(
            "duplicate value violates {constraint}"
        )))
    } else if db.is_foreign_key_violation() {
        Some(DbError::Conflict(format!(
            "referenced row missing for {constraint}"
        )))
    } else if db.is_check_violation() {
        Some(DbError::Invalid(format!("value violates {constraint}")))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_database_errors_pass_through() {
        let err = DbError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, DbError::Sqlx(sqlx::Error::RowNotFound)));
    }

    #[test]
    fn not_found_display() {
        let err = DbError::not_found("invoice", 42);
        assert_eq!(err.to_string(), "not found: invoice '42'");
    }
}
