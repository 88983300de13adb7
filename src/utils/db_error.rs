//! Classification helpers for PostgreSQL errors.

/// Name of the unique constraint guarding `links.short_code`.
pub const SHORT_CODE_CONSTRAINT: &str = "links_short_code_key";

/// SQLSTATE raised when `statement_timeout` cancels a query.
const QUERY_CANCELED: &str = "57014";

pub fn is_unique_violation_on_code(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(SHORT_CODE_CONSTRAINT))
}

pub fn is_foreign_key_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .is_some_and(|db_err| db_err.is_foreign_key_violation())
}

pub fn is_query_canceled(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .and_then(|db_err| db_err.code())
        .is_some_and(|code| code == QUERY_CANCELED)
}
