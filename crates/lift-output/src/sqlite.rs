//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! two tables: `events` and `passenger_data`.

use std::path::Path;

use rusqlite::Connection;

use crate::{EventRow, OutputResult, PassengerDataRow};
use crate::writer::OutputWriter;

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS events (
                 tick      INTEGER NOT NULL,
                 kind      TEXT    NOT NULL,
                 elevator  INTEGER,
                 group_id  INTEGER,
                 size      INTEGER,
                 floor     INTEGER,
                 direction TEXT,
                 detail    TEXT    NOT NULL
             );
             CREATE TABLE IF NOT EXISTS passenger_data (
                 id            INTEGER PRIMARY KEY,
                 number        INTEGER NOT NULL,
                 from_floor    INTEGER NOT NULL,
                 to_floor      INTEGER NOT NULL,
                 wait_to_board INTEGER NOT NULL,
                 total_time    INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO events \
                 (tick, kind, elevator, group_id, size, floor, direction, detail) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.tick as i64,
                    row.kind,
                    row.elevator,
                    row.group,
                    row.size,
                    row.floor,
                    row.direction,
                    row.detail,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_passenger_data(&mut self, rows: &[PassengerDataRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO passenger_data \
                 (id, number, from_floor, to_floor, wait_to_board, total_time) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.id,
                    row.size,
                    row.from,
                    row.to,
                    row.wait_to_board,
                    row.total_time,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
