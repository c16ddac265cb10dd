//! Report aggregation over persisted sessions.
//!
//! Everything here recomputes from the store on every call; there is no
//! caching. Totals and breakdowns are folded in Rust over the queried
//! rows, which is plenty for a single local database file.

use crate::db::sessions::Sessions;
use crate::libs::error::{DevlogError, Result};
use crate::libs::messages::Message;
use crate::libs::session::{normalize_tag, Session, SessionQuery};
use chrono::{Duration, Local, NaiveDate, NaiveDateTime};
use std::collections::HashMap;

/// Options accepted by `list`. Date options compose: `today`/`days` derive
/// a window, explicit `from`/`to` intersect with it. `today` and `days`
/// together are rejected.
#[derive(Debug, Clone, Default)]
pub struct ListFilter {
    pub today: bool,
    pub days: Option<u32>,
    pub tag: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub limit: Option<usize>,
}

/// A report's date interval. Exactly one form may be supplied on the
/// command line; [`ReportRange::from_flags`] enforces that.
#[derive(Debug, Clone)]
pub enum ReportRange {
    /// The last 7 days, ending now.
    Week,
    /// The last 30 days, ending now.
    Month,
    /// An explicit date interval; either bound may be open.
    Between { from: Option<NaiveDate>, to: Option<NaiveDate> },
}

impl ReportRange {
    /// Builds a range from the CLI flags, rejecting zero or multiple forms.
    pub fn from_flags(week: bool, month: bool, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Result<Self> {
        let explicit = from.is_some() || to.is_some();
        let forms = week as u8 + month as u8 + explicit as u8;
        match forms {
            0 => Err(DevlogError::Validation(Message::ReportRangeMissing.to_string())),
            1 if week => Ok(ReportRange::Week),
            1 if month => Ok(ReportRange::Month),
            1 => Ok(ReportRange::Between { from, to }),
            _ => Err(DevlogError::Validation(Message::ReportRangeConflict.to_string())),
        }
    }

    /// Resolves the range to concrete query bounds plus a human-readable
    /// period description for the report header.
    fn resolve(&self) -> (Option<NaiveDateTime>, Option<NaiveDateTime>, String) {
        let now = Local::now().naive_local();
        match self {
            ReportRange::Week => (Some(now - Duration::days(7)), Some(now), "Last 7 days".to_string()),
            ReportRange::Month => (Some(now - Duration::days(30)), Some(now), "Last 30 days".to_string()),
            ReportRange::Between { from, to } => {
                let lower = (*from).map(day_start);
                let upper = (*to).map(day_end);
                let period = match (from, to) {
                    (Some(f), Some(t)) => format!("{} to {}", f.format("%b %d, %Y"), t.format("%b %d, %Y")),
                    (Some(f), None) => format!("Since {}", f.format("%b %d, %Y")),
                    (None, Some(t)) => format!("Until {}", t.format("%b %d, %Y")),
                    (None, None) => "All time".to_string(),
                };
                (lower, upper, period)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupBy {
    None,
    Tag,
}

/// Per-tag slice of a report. A session tagged with several tags counts
/// its full duration toward each of them.
#[derive(Debug, Clone, PartialEq)]
pub struct TagBreakdown {
    pub tag: String,
    pub count: usize,
    pub total: Duration,
}

/// Aggregate outcome of a report run. Running sessions are excluded from
/// both the count and the totals; `devlog status` is the view onto those.
#[derive(Debug, Clone)]
pub struct ReportSummary {
    pub period: String,
    pub total_sessions: usize,
    pub total_duration: Duration,
    pub by_tag: Option<Vec<TagBreakdown>>,
}

pub struct ReportAggregator {
    store: Sessions,
}

impl ReportAggregator {
    pub fn new() -> Result<Self> {
        Ok(ReportAggregator { store: Sessions::new()? })
    }

    pub fn with_store(store: Sessions) -> Self {
        ReportAggregator { store }
    }

    /// Sessions matching the filter, ordered by start time ascending.
    /// An empty result is valid.
    pub fn list(&mut self, filter: &ListFilter) -> Result<Vec<Session>> {
        if filter.today && filter.days.is_some() {
            return Err(DevlogError::Validation(Message::TodayAndDaysConflict.to_string()));
        }

        let now = Local::now().naive_local();
        let (mut from, mut to) = (None, None);
        if filter.today {
            from = Some(day_start(now.date()));
            to = Some(now);
        } else if let Some(days) = filter.days {
            from = Some(now - Duration::days(days as i64));
            to = Some(now);
        }
        // Explicit bounds tighten any derived window.
        if let Some(explicit) = filter.from.map(day_start) {
            from = Some(from.map_or(explicit, |f| f.max(explicit)));
        }
        if let Some(explicit) = filter.to.map(day_end) {
            to = Some(to.map_or(explicit, |t| t.min(explicit)));
        }

        self.store.query(&SessionQuery {
            from,
            to,
            tag: filter.tag.as_deref().map(normalize_tag),
            search: None,
            limit: filter.limit,
        })
    }

    /// Case-insensitive substring search over descriptions and notes.
    pub fn search(&mut self, query: &str, limit: Option<usize>) -> Result<Vec<Session>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(DevlogError::Validation(Message::EmptySearchQuery.to_string()));
        }

        self.store.query(&SessionQuery {
            search: Some(query.to_string()),
            limit,
            ..SessionQuery::default()
        })
    }

    /// Summarizes completed sessions whose start falls inside the range.
    pub fn report(&mut self, range: &ReportRange, group_by: GroupBy) -> Result<ReportSummary> {
        let (from, to, period) = range.resolve();
        let sessions = self.store.query(&SessionQuery { from, to, ..SessionQuery::default() })?;

        Ok(summarize(&sessions, group_by, period))
    }
}

/// Folds a set of sessions into a summary. Split out from the store-backed
/// aggregator so the arithmetic is testable on plain data.
pub fn summarize(sessions: &[Session], group_by: GroupBy, period: String) -> ReportSummary {
    let completed: Vec<&Session> = sessions.iter().filter(|s| !s.is_running()).collect();

    let mut total_duration = Duration::zero();
    let mut per_tag: HashMap<String, (usize, Duration)> = HashMap::new();
    for session in &completed {
        let duration = session.duration().unwrap_or_else(Duration::zero);
        total_duration = total_duration + duration;
        if group_by == GroupBy::Tag {
            for tag in &session.tags {
                let entry = per_tag.entry(tag.clone()).or_insert((0, Duration::zero()));
                entry.0 += 1;
                entry.1 = entry.1 + duration;
            }
        }
    }

    let by_tag = match group_by {
        GroupBy::None => None,
        GroupBy::Tag => {
            let mut breakdown: Vec<TagBreakdown> = per_tag
                .into_iter()
                .map(|(tag, (count, total))| TagBreakdown { tag, count, total })
                .collect();
            // Longest total first, name as tie-breaker for stable output.
            breakdown.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.tag.cmp(&b.tag)));
            Some(breakdown)
        }
    };

    ReportSummary {
        period,
        total_sessions: completed.len(),
        total_duration,
        by_tag,
    }
}

fn day_start(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_opt(0, 0, 0).unwrap()
}

fn day_end(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_opt(23, 59, 59).unwrap()
}
