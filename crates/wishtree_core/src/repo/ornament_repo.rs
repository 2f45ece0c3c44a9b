//! Ornament repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the persistence operations of the store contract: list,
//!   write-once initialize (with payload coercion), per-ornament text
//!   update.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Initialization inserts the whole collection in one transaction; the
//!   store is never left partially populated.
//! - A second initialize call against a populated store is a no-op that
//!   reports the existing count.

use crate::db::DbError;
use crate::model::ornament::{
    Ornament, OrnamentId, OrnamentValidationError, DEFAULT_COLOR, MAX_TEXT_CHARS,
};
use log::info;
use rusqlite::{params, Connection, Row};
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

const ORNAMENT_SELECT_SQL: &str = "SELECT id, text, x, y, color FROM ornaments";
const REQUIRED_COLUMNS: &[&str] = &["id", "text", "x", "y", "color", "updated_at"];

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for ornament persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    /// A record failed domain validation (over-long text).
    Validation(OrnamentValidationError),
    /// The initialize payload is structurally malformed (not an array).
    MalformedPayload(String),
    /// Underlying storage failure.
    Db(DbError),
    /// Update referenced an id the store does not hold.
    NotFound(OrnamentId),
    /// Persisted state violates the schema contract.
    InvalidData(String),
    /// Connection has not run migrations to the expected version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Connection is missing a table this repository requires.
    MissingRequiredTable(&'static str),
    /// Connection is missing a column this repository requires.
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::MalformedPayload(message) => {
                write!(f, "malformed initialize payload: {message}")
            }
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "ornament not found: {id}"),
            Self::InvalidData(message) => {
                write!(f, "invalid persisted ornament data: {message}")
            }
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<OrnamentValidationError> for RepoError {
    fn from(value: OrnamentValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Result of an initialize call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitializeOutcome {
    /// Number of ornaments the store holds after the call.
    pub count: u32,
    /// True when the store was already populated and the call was a no-op.
    pub already_initialized: bool,
}

/// Store contract for the ornament collection.
pub trait OrnamentRepository {
    /// Full collection ordered by id; empty when uninitialized.
    fn list_ornaments(&self) -> RepoResult<Vec<Ornament>>;
    /// Number of stored ornaments.
    fn count_ornaments(&self) -> RepoResult<u32>;
    /// One ornament by id, if present.
    fn get_ornament(&self, id: OrnamentId) -> RepoResult<Option<Ornament>>;
    /// Write-once initialization from a loosely-typed JSON payload.
    ///
    /// Malformed fields are coerced per the store contract; a non-array
    /// payload is rejected. A populated store ignores the payload and
    /// reports its existing count.
    fn initialize_ornaments(&self, payload: &Value) -> RepoResult<InitializeOutcome>;
    /// Write-once initialization from already-typed records (bootstrap path).
    fn initialize_from_layout(&self, ornaments: &[Ornament]) -> RepoResult<InitializeOutcome>;
    /// Overwrites one ornament's compliment and returns the updated record.
    fn update_text(&self, id: OrnamentId, text: &str) -> RepoResult<Ornament>;
}

/// Coerces one loosely-typed payload entry into a well-formed record.
///
/// Field defaults: absent/non-integer `id` becomes the array index,
/// non-string `text` becomes empty, non-numeric `x`/`y` become 0, and a
/// non-string `color` becomes the default red.
pub fn coerce_ornament(entry: &Value, index: usize) -> Ornament {
    Ornament {
        id: entry
            .get("id")
            .and_then(Value::as_i64)
            .unwrap_or(index as i64),
        text: entry
            .get("text")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        x: entry.get("x").and_then(Value::as_f64).unwrap_or(0.0),
        y: entry.get("y").and_then(Value::as_f64).unwrap_or(0.0),
        color: entry
            .get("color")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_COLOR)
            .to_string(),
    }
}

/// SQLite-backed ornament repository.
pub struct SqliteOrnamentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteOrnamentRepository<'conn> {
    /// Binds a repository to a migrated connection.
    ///
    /// Rejects connections that have not been opened through `db::open_db`
    /// (wrong schema version, missing table or columns) instead of failing
    /// later on the first query.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let expected_version = crate::db::migrations::latest_version();
        let actual_version: u32 =
            conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
        if actual_version != expected_version {
            return Err(RepoError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }

        let table_exists: i64 = conn.query_row(
            "SELECT EXISTS(
                SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'ornaments'
            );",
            [],
            |row| row.get(0),
        )?;
        if table_exists == 0 {
            return Err(RepoError::MissingRequiredTable("ornaments"));
        }

        let mut stmt = conn.prepare("PRAGMA table_info(ornaments);")?;
        let mut present = Vec::new();
        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
            present.push(row.get::<_, String>("name")?);
        }
        for column in REQUIRED_COLUMNS.iter().copied() {
            if !present.iter().any(|name| name == column) {
                return Err(RepoError::MissingRequiredColumn {
                    table: "ornaments",
                    column,
                });
            }
        }

        Ok(Self { conn })
    }

    fn insert_all(&self, ornaments: &[Ornament]) -> RepoResult<()> {
        for ornament in ornaments {
            ornament.validate()?;
        }

        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO ornaments (id, text, x, y, color)
                 VALUES (?1, ?2, ?3, ?4, ?5);",
            )?;
            for ornament in ornaments {
                stmt.execute(params![
                    ornament.id,
                    ornament.text.as_str(),
                    ornament.x,
                    ornament.y,
                    ornament.color.as_str(),
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn initialize_records(&self, ornaments: &[Ornament]) -> RepoResult<InitializeOutcome> {
        let existing = self.count_ornaments()?;
        if existing > 0 {
            info!(
                "event=initialize module=repo status=skipped existing_count={existing}"
            );
            return Ok(InitializeOutcome {
                count: existing,
                already_initialized: true,
            });
        }

        self.insert_all(ornaments)?;
        info!(
            "event=initialize module=repo status=ok count={}",
            ornaments.len()
        );
        Ok(InitializeOutcome {
            count: ornaments.len() as u32,
            already_initialized: false,
        })
    }
}

impl OrnamentRepository for SqliteOrnamentRepository<'_> {
    fn list_ornaments(&self) -> RepoResult<Vec<Ornament>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ORNAMENT_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut ornaments = Vec::new();
        while let Some(row) = rows.next()? {
            ornaments.push(parse_ornament_row(row)?);
        }
        Ok(ornaments)
    }

    fn count_ornaments(&self) -> RepoResult<u32> {
        let count: u32 = self
            .conn
            .query_row("SELECT COUNT(*) FROM ornaments;", [], |row| row.get(0))?;
        Ok(count)
    }

    fn get_ornament(&self, id: OrnamentId) -> RepoResult<Option<Ornament>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ORNAMENT_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_ornament_row(row)?));
        }
        Ok(None)
    }

    fn initialize_ornaments(&self, payload: &Value) -> RepoResult<InitializeOutcome> {
        let entries = payload.as_array().ok_or_else(|| {
            RepoError::MalformedPayload(format!(
                "expected an array of ornaments, got {}",
                json_type_name(payload)
            ))
        })?;

        let ornaments: Vec<Ornament> = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| coerce_ornament(entry, index))
            .collect();

        self.initialize_records(&ornaments)
    }

    fn initialize_from_layout(&self, ornaments: &[Ornament]) -> RepoResult<InitializeOutcome> {
        self.initialize_records(ornaments)
    }

    fn update_text(&self, id: OrnamentId, text: &str) -> RepoResult<Ornament> {
        let chars = text.chars().count();
        if chars > MAX_TEXT_CHARS {
            return Err(OrnamentValidationError::TextTooLong { chars }.into());
        }

        let changed = self.conn.execute(
            "UPDATE ornaments
             SET text = ?1, updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?2;",
            params![text, id],
        )?;
        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        self.get_ornament(id)?.ok_or(RepoError::NotFound(id))
    }
}

fn parse_ornament_row(row: &Row<'_>) -> RepoResult<Ornament> {
    let ornament = Ornament {
        id: row.get("id")?,
        text: row.get("text")?,
        x: row.get("x")?,
        y: row.get("y")?,
        color: row.get("color")?,
    };
    ornament.validate()?;
    Ok(ornament)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
