use rusqlite::{params, Connection, OptionalExtension};

// ── Key/value entries ──

pub fn get_value(conn: &Connection, key: &str) -> anyhow::Result<Option<String>> {
    let value = conn
        .query_row(
            "SELECT value FROM kv_store WHERE key = ?1",
            params![key],
            |row| row.get(0),
        )
        .optional()?;
    Ok(value)
}

/// Upserts every entry in a single transaction.
pub fn put_values(conn: &Connection, entries: &[(String, String)]) -> anyhow::Result<()> {
    let tx = conn.unchecked_transaction()?;
    {
        let mut stmt = tx.prepare(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, datetime('now'))
             ON CONFLICT(key) DO UPDATE SET
               value = excluded.value,
               updated_at = excluded.updated_at",
        )?;
        for (key, value) in entries {
            stmt.execute(params![key, value])?;
        }
    }
    tx.commit()?;
    Ok(())
}
