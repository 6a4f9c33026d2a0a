//! Shared fixtures for repository tests.

use std::sync::Arc;

use diesel::RunQueryDsl;
use tempfile::{tempdir, TempDir};

use crate::db::{create_pool, get_connection, init, run_migrations, spawn_writer, DbPool, WriteHandle};

/// A migrated database in a temp dir. Keep the `TempDir` alive for the test.
pub struct TestDb {
    pub pool: Arc<DbPool>,
    pub writer: WriteHandle,
    _dir: TempDir,
}

pub fn setup_db() -> TestDb {
    let dir = tempdir().expect("Failed to create temp directory");
    let db_path = dir.path().join("test.db").to_string_lossy().to_string();

    init(&db_path).expect("Failed to init database");
    let pool = create_pool(&db_path).expect("Failed to create pool");
    run_migrations(&pool).expect("Failed to run migrations");
    let writer = spawn_writer(Arc::clone(&pool));

    TestDb {
        pool,
        writer,
        _dir: dir,
    }
}

pub fn execute_sql(pool: &DbPool, sql: &str) {
    let mut conn = get_connection(pool).expect("Failed to get connection");
    diesel::sql_query(sql)
        .execute(&mut conn)
        .expect("Failed to execute test SQL");
}
