use rusqlite::Connection;
use serde_json::json;
use wishtree_core::db::migrations::latest_version;
use wishtree_core::db::open_db_in_memory;
use wishtree_core::{
    generate, LayoutParams, OrnamentRepository, RepoError, SqliteOrnamentRepository,
    DEFAULT_COLOR, MAX_TEXT_CHARS,
};

#[test]
fn initialize_then_list_roundtrip_preserves_order_and_fields() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteOrnamentRepository::try_new(&conn).unwrap();

    let layout = generate(&LayoutParams::default());
    let outcome = repo.initialize_from_layout(&layout).unwrap();
    assert_eq!(outcome.count, 181);
    assert!(!outcome.already_initialized);

    let stored = repo.list_ornaments().unwrap();
    assert_eq!(stored, layout);
}

#[test]
fn second_initialize_is_a_no_op_reporting_the_first_count() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteOrnamentRepository::try_new(&conn).unwrap();

    let first = json!([
        {"id": 0, "text": "", "x": 40.0, "y": 30.0, "color": "#ef4444"},
        {"id": 1, "text": "", "x": 55.0, "y": 45.0, "color": "#f59e0b"}
    ]);
    let second = json!([
        {"id": 0, "text": "overwrite attempt", "x": 1.0, "y": 1.0, "color": "#000000"}
    ]);

    let outcome = repo.initialize_ornaments(&first).unwrap();
    assert_eq!(outcome.count, 2);
    assert!(!outcome.already_initialized);

    let outcome = repo.initialize_ornaments(&second).unwrap();
    assert_eq!(outcome.count, 2);
    assert!(outcome.already_initialized);

    let stored = repo.list_ornaments().unwrap();
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0].text, "");
    assert_eq!(stored[0].x, 40.0);
}

#[test]
fn initialize_coerces_malformed_fields() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteOrnamentRepository::try_new(&conn).unwrap();

    let payload = json!([{"id": 5, "x": "bad", "color": 42}]);
    let outcome = repo.initialize_ornaments(&payload).unwrap();
    assert_eq!(outcome.count, 1);

    let stored = repo.get_ornament(5).unwrap().unwrap();
    assert_eq!(stored.id, 5);
    assert_eq!(stored.text, "");
    assert_eq!(stored.x, 0.0);
    assert_eq!(stored.y, 0.0);
    assert_eq!(stored.color, DEFAULT_COLOR);
}

#[test]
fn initialize_defaults_missing_id_to_array_index() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteOrnamentRepository::try_new(&conn).unwrap();

    let payload = json!([
        {"x": 40.0, "y": 30.0, "color": "#3b82f6"},
        {"x": 55.0, "y": 45.0, "color": "#8b5cf6"}
    ]);
    repo.initialize_ornaments(&payload).unwrap();

    let stored = repo.list_ornaments().unwrap();
    assert_eq!(stored[0].id, 0);
    assert_eq!(stored[1].id, 1);
}

#[test]
fn initialize_rejects_non_array_payload() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteOrnamentRepository::try_new(&conn).unwrap();

    let err = repo
        .initialize_ornaments(&json!({"ornaments": []}))
        .unwrap_err();
    assert!(matches!(err, RepoError::MalformedPayload(_)));
    assert_eq!(repo.count_ornaments().unwrap(), 0);
}

#[test]
fn update_text_overwrites_and_returns_the_record() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteOrnamentRepository::try_new(&conn).unwrap();

    let payload = json!([{"id": 0, "x": 50.0, "y": 30.0, "color": "#ef4444"}]);
    repo.initialize_ornaments(&payload).unwrap();

    let updated = repo.update_text(0, "you brighten every meeting").unwrap();
    assert_eq!(updated.id, 0);
    assert_eq!(updated.text, "you brighten every meeting");

    let reread = repo.get_ornament(0).unwrap().unwrap();
    assert_eq!(reread.text, "you brighten every meeting");

    // Last write wins.
    let updated = repo.update_text(0, "second thoughts").unwrap();
    assert_eq!(updated.text, "second thoughts");
}

#[test]
fn update_text_unknown_id_is_not_found_and_creates_nothing() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteOrnamentRepository::try_new(&conn).unwrap();

    let payload = json!([{"id": 0, "x": 50.0, "y": 30.0, "color": "#ef4444"}]);
    repo.initialize_ornaments(&payload).unwrap();

    let err = repo.update_text(99999, "hi").unwrap_err();
    assert!(matches!(err, RepoError::NotFound(99999)));
    assert_eq!(repo.count_ornaments().unwrap(), 1);
    assert!(repo.get_ornament(99999).unwrap().is_none());
}

#[test]
fn update_text_rejects_over_long_compliments() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteOrnamentRepository::try_new(&conn).unwrap();

    let payload = json!([{"id": 0, "x": 50.0, "y": 30.0, "color": "#ef4444"}]);
    repo.initialize_ornaments(&payload).unwrap();

    let too_long = "x".repeat(MAX_TEXT_CHARS + 1);
    let err = repo.update_text(0, &too_long).unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));

    let stored = repo.get_ornament(0).unwrap().unwrap();
    assert_eq!(stored.text, "");
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let result = SqliteOrnamentRepository::try_new(&conn);
    match result {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn repository_rejects_connection_without_ornaments_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteOrnamentRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredTable("ornaments"))
    ));
}

#[test]
fn repository_rejects_connection_missing_required_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE ornaments (
            id INTEGER PRIMARY KEY NOT NULL,
            text TEXT NOT NULL DEFAULT '',
            x REAL NOT NULL,
            y REAL NOT NULL,
            color TEXT NOT NULL
        );",
    )
    .unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteOrnamentRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredColumn {
            table: "ornaments",
            column: "updated_at"
        })
    ));
}
