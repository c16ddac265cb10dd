use chrono::{Duration, NaiveDateTime};

/// A single tracked work period.
///
/// A session with no `ended_at` is the running session; the store
/// guarantees at most one of those exists at any time.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Option<i64>,
    pub description: String,
    pub tags: Vec<String>,
    pub started_at: NaiveDateTime,
    pub ended_at: Option<NaiveDateTime>,
    pub notes: Option<String>,
}

impl Session {
    pub fn new(description: &str, tags: Vec<String>, started_at: NaiveDateTime) -> Self {
        Session {
            id: None,
            description: description.to_string(),
            tags,
            started_at,
            ended_at: None,
            notes: None,
        }
    }

    /// Elapsed time between start and stop. Undefined while running.
    pub fn duration(&self) -> Option<Duration> {
        self.ended_at.map(|end| end - self.started_at)
    }

    pub fn is_running(&self) -> bool {
        self.ended_at.is_none()
    }
}

/// Canonicalizes a set of raw tag arguments: trim, lowercase, drop
/// empties, de-duplicate. Applied at write time and to tag query
/// arguments so lookups always match the stored form.
pub fn normalize_tags(raw: &[String]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in raw {
        let tag = tag.trim().to_lowercase();
        if !tag.is_empty() && !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

/// Canonical form of a single tag argument.
pub fn normalize_tag(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Row-level filter understood by the session store.
///
/// All fields compose; `from`/`to` bound `started_at`, `tag` matches the
/// canonical tag set, `search` is a case-insensitive substring match on
/// description and notes.
#[derive(Debug, Clone, Default)]
pub struct SessionQuery {
    pub from: Option<NaiveDateTime>,
    pub to: Option<NaiveDateTime>,
    pub tag: Option<String>,
    pub search: Option<String>,
    pub limit: Option<usize>,
}
