use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension};

use crate::infra::sqlite::schema::{init_db, open_connection};

pub fn read_slot(db_path: &Path, key: &str) -> Result<Option<String>> {
    init_db(db_path)?;
    let conn = open_connection(db_path)?;
    conn.query_row(
        "SELECT value FROM storage_slot WHERE key = ?1",
        [key],
        |row| row.get::<_, String>(0),
    )
    .optional()
    .with_context(|| format!("failed to read slot: {key}"))
}

pub fn write_slot(db_path: &Path, key: &str, value: &str) -> Result<()> {
    init_db(db_path)?;
    let mut conn = open_connection(db_path)?;
    let tx = conn.transaction().context("failed to start slot transaction")?;

    tx.execute(
        "INSERT INTO storage_slot(key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE
         SET value = excluded.value, updated_at = CURRENT_TIMESTAMP",
        params![key, value],
    )
    .with_context(|| format!("failed to write slot: {key}"))?;

    tx.commit().context("failed to commit slot write")?;
    Ok(())
}
