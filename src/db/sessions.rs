use crate::db::db::Db;
use crate::libs::error::Result;
use crate::libs::session::{normalize_tag, Session, SessionQuery};
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, OptionalExtension, Row, ToSql};

const SCHEMA_SESSIONS: &str = "CREATE TABLE IF NOT EXISTS sessions (
    id INTEGER PRIMARY KEY,
    description TEXT NOT NULL,
    start_time TIMESTAMP NOT NULL,
    end_time TIMESTAMP,
    notes TEXT,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);";
const SCHEMA_SESSION_TAGS: &str = "CREATE TABLE IF NOT EXISTS session_tags (
    id INTEGER PRIMARY KEY,
    session_id INTEGER NOT NULL,
    tag TEXT NOT NULL,
    FOREIGN KEY (session_id) REFERENCES sessions(id) ON DELETE CASCADE
);";
const INDEX_SESSIONS_START: &str = "CREATE INDEX IF NOT EXISTS idx_sessions_start_time ON sessions(start_time);";
const INDEX_TAGS_SESSION: &str = "CREATE INDEX IF NOT EXISTS idx_session_tags_session_id ON session_tags(session_id);";

const INSERT_SESSION: &str = "INSERT INTO sessions (description, start_time) VALUES (?1, ?2)";
const INSERT_SESSION_TAG: &str = "INSERT INTO session_tags (session_id, tag) VALUES (?1, ?2)";
const UPDATE_END: &str = "UPDATE sessions SET end_time = ?2, notes = ?3 WHERE id = ?1";
const DELETE_SESSION: &str = "DELETE FROM sessions WHERE id = ?1";

// Tags are folded into one column per session; the tag filter goes through
// a subquery so it restricts sessions without truncating their tag sets.
const SELECT_SESSIONS: &str = "SELECT s.id, s.description, s.start_time, s.end_time, s.notes, GROUP_CONCAT(t.tag)
    FROM sessions s
    LEFT JOIN session_tags t ON t.session_id = s.id";
const WHERE_RUNNING: &str = "s.end_time IS NULL";
const WHERE_FROM: &str = "s.start_time >= ?";
const WHERE_TO: &str = "s.start_time <= ?";
const WHERE_TAG: &str = "s.id IN (SELECT session_id FROM session_tags WHERE tag = ?)";
const WHERE_SEARCH: &str = "(s.description LIKE ? OR s.notes LIKE ?)";

/// The session store: every persisted fact about work sessions lives here.
///
/// Each instance owns its own SQLite connection; schema setup is idempotent
/// and runs on construction.
pub struct Sessions {
    pub conn: Connection,
}

impl Sessions {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        db.conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        db.conn.execute(SCHEMA_SESSIONS, [])?;
        db.conn.execute(SCHEMA_SESSION_TAGS, [])?;
        db.conn.execute(INDEX_SESSIONS_START, [])?;
        db.conn.execute(INDEX_TAGS_SESSION, [])?;

        Ok(Sessions { conn: db.conn })
    }

    /// Persists a new session and its tag set, returning the assigned id.
    pub fn insert(&mut self, session: &Session) -> Result<i64> {
        let tx = self.conn.transaction()?;
        tx.execute(INSERT_SESSION, params![session.description, session.started_at])?;
        let id = tx.last_insert_rowid();
        for tag in &session.tags {
            tx.execute(INSERT_SESSION_TAG, params![id, tag])?;
        }
        tx.commit()?;

        Ok(id)
    }

    /// Marks a session as completed. The only mutation path after insert.
    pub fn finish(&mut self, id: i64, ended_at: NaiveDateTime, notes: Option<&str>) -> Result<()> {
        self.conn.execute(UPDATE_END, params![id, ended_at, notes])?;
        Ok(())
    }

    /// Returns the running session, if any.
    pub fn get_running(&mut self) -> Result<Option<Session>> {
        let sql = format!("{} WHERE {} GROUP BY s.id ORDER BY s.start_time DESC LIMIT 1", SELECT_SESSIONS, WHERE_RUNNING);
        let session = self.conn.query_row(&sql, [], Self::map_row).optional()?;
        Ok(session)
    }

    /// Queries sessions matching the filter, ordered by `start_time`
    /// ascending. When a limit is set, the most recent rows win.
    pub fn query(&mut self, filter: &SessionQuery) -> Result<Vec<Session>> {
        let mut clauses: Vec<&str> = Vec::new();
        let mut params: Vec<Box<dyn ToSql>> = Vec::new();

        if let Some(from) = filter.from {
            clauses.push(WHERE_FROM);
            params.push(Box::new(from));
        }
        if let Some(to) = filter.to {
            clauses.push(WHERE_TO);
            params.push(Box::new(to));
        }
        if let Some(tag) = &filter.tag {
            clauses.push(WHERE_TAG);
            params.push(Box::new(normalize_tag(tag)));
        }
        if let Some(term) = &filter.search {
            clauses.push(WHERE_SEARCH);
            let pattern = format!("%{}%", term);
            params.push(Box::new(pattern.clone()));
            params.push(Box::new(pattern));
        }

        let mut sql = SELECT_SESSIONS.to_string();
        if !clauses.is_empty() {
            sql.push_str(&format!(" WHERE {}", clauses.join(" AND ")));
        }
        // Newest-first with the limit applied, then reversed below so the
        // caller always sees ascending start times.
        sql.push_str(" GROUP BY s.id ORDER BY s.start_time DESC");
        if let Some(limit) = filter.limit {
            sql.push_str(&format!(" LIMIT {}", limit));
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let param_refs: Vec<&dyn ToSql> = params.iter().map(|p| p.as_ref()).collect();
        let session_iter = stmt.query_map(&param_refs[..], Self::map_row)?;

        let mut sessions = Vec::new();
        for session in session_iter {
            sessions.push(session?);
        }
        sessions.reverse();
        Ok(sessions)
    }

    /// Administrative removal of a session and its tags. Returns whether a
    /// row was actually deleted.
    pub fn delete(&mut self, id: i64) -> Result<bool> {
        let affected = self.conn.execute(DELETE_SESSION, params![id])?;
        Ok(affected > 0)
    }

    fn map_row(row: &Row) -> rusqlite::Result<Session> {
        let tags: Option<String> = row.get(5)?;
        let mut tags: Vec<String> = tags
            .map(|joined| joined.split(',').map(str::to_string).collect())
            .unwrap_or_default();
        tags.sort();

        Ok(Session {
            id: row.get(0)?,
            description: row.get(1)?,
            started_at: row.get(2)?,
            ended_at: row.get(3)?,
            notes: row.get(4)?,
            tags,
        })
    }
}
