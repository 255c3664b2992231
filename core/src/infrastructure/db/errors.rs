use sea_orm::{DbErr, RuntimeErr};
use tracing::error;

use crate::domain::common::entities::app_errors::CoreError;

/// Postgres `undefined_table`.
const UNDEFINED_TABLE: &str = "42P01";

/// SQLSTATE of a failure reported by the database server itself.
fn sqlstate(e: &DbErr) -> Option<String> {
    let (DbErr::Conn(RuntimeErr::SqlxError(err))
    | DbErr::Exec(RuntimeErr::SqlxError(err))
    | DbErr::Query(RuntimeErr::SqlxError(err))) = e
    else {
        return None;
    };

    err.as_database_error()
        .and_then(|db| db.code())
        .map(|code| code.into_owned())
}

pub fn is_missing_relation(code: Option<&str>) -> bool {
    code == Some(UNDEFINED_TABLE)
}

/// Maps a database failure on `table`. A missing table is reported as such
/// so services can switch to their fallback path.
pub fn map_db_err(table: &str, action: &str, e: DbErr) -> CoreError {
    if is_missing_relation(sqlstate(&e).as_deref()) {
        error!("Table {} is missing while trying to {}", table, action);
        return CoreError::TableMissing(table.to_string());
    }

    error!("Failed to {}: {}", action, e);
    CoreError::InternalServerError
}

/// Json columns that no longer decode into the domain type.
pub fn decode_err(table: &str, e: serde_json::Error) -> CoreError {
    error!("Undecodable row in {}: {}", table, e);
    CoreError::InternalServerError
}
