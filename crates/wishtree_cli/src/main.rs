//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `wishtree_core` linkage.
//! - Bootstrap an in-memory store and report the resulting layout size.

use wishtree_core::db::open_db_in_memory;
use wishtree_core::{OrnamentService, SqliteOrnamentRepository};

fn main() {
    println!("wishtree_core ping={}", wishtree_core::ping());
    println!("wishtree_core version={}", wishtree_core::core_version());

    let conn = match open_db_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("failed to open in-memory store: {err}");
            std::process::exit(1);
        }
    };

    let repo = match SqliteOrnamentRepository::try_new(&conn) {
        Ok(repo) => repo,
        Err(err) => {
            eprintln!("failed to bind repository: {err}");
            std::process::exit(1);
        }
    };

    let service = OrnamentService::new(repo);
    match service.load_or_bootstrap() {
        Ok(ornaments) => println!("ornaments={}", ornaments.len()),
        Err(err) => {
            eprintln!("bootstrap failed: {err}");
            std::process::exit(1);
        }
    }
}
