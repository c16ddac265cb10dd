use crate::libs::formatter::format_duration;
use crate::libs::report::{ReportSummary, TagBreakdown};
use crate::libs::session::Session;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Renders sessions as a listing table, one row per session.
    pub fn sessions(sessions: &[Session]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "DATE", "TIME", "DURATION", "DESCRIPTION", "TAGS"]);
        for session in sessions {
            table.add_row(row![
                session.id.unwrap_or(0),
                session.started_at.format("%b %d"),
                session.started_at.format("%H:%M"),
                duration_cell(session),
                session.description,
                session.tags.join(", ")
            ]);
        }
        table.printstd();
    }

    /// Renders search results, including the notes column.
    pub fn search_results(sessions: &[Session]) {
        let mut table = Table::new();

        table.add_row(row!["DATE", "TIME", "DURATION", "DESCRIPTION", "TAGS", "NOTES"]);
        for session in sessions {
            table.add_row(row![
                session.started_at.format("%b %d"),
                session.started_at.format("%H:%M"),
                duration_cell(session),
                session.description,
                session.tags.join(", "),
                session.notes.as_deref().unwrap_or("")
            ]);
        }
        table.printstd();
    }

    /// Renders the report totals row.
    pub fn report_totals(summary: &ReportSummary) {
        let mut table = Table::new();
        table.add_row(row!["SESSIONS", "TOTAL TIME", "AVG SESSION"]);
        table.add_row(row![
            summary.total_sessions,
            format_duration(&summary.total_duration),
            format_duration(&average(summary))
        ]);
        table.printstd();
    }

    /// Renders the per-tag breakdown with each tag's share of the total.
    pub fn tag_breakdown(breakdown: &[TagBreakdown], total: &chrono::Duration) {
        let mut table = Table::new();
        let total_minutes = total.num_minutes();

        table.add_row(row!["TAG", "SESSIONS", "TIME", "SHARE"]);
        for entry in breakdown {
            let share = if total_minutes > 0 {
                format!("{:.1}%", entry.total.num_minutes() as f64 / total_minutes as f64 * 100.0)
            } else {
                "-".to_string()
            };
            table.add_row(row![entry.tag, entry.count, format_duration(&entry.total), share]);
        }
        table.printstd();
    }
}

fn duration_cell(session: &Session) -> String {
    match session.duration() {
        Some(duration) => format_duration(&duration),
        None => "in progress".to_string(),
    }
}

fn average(summary: &ReportSummary) -> chrono::Duration {
    if summary.total_sessions == 0 {
        return chrono::Duration::zero();
    }
    summary.total_duration / summary.total_sessions as i32
}
