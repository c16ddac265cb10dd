//! Display implementation for devlog application messages.
//!
//! All user-facing text is defined here, in one place, so commands and
//! core components never embed literal strings. Messages with dynamic
//! content carry their parameters as enum payloads.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === SESSION LIFECYCLE MESSAGES ===
            Message::SessionStarted(time) => format!("Session started at {}", time),
            Message::SessionStopped => "Session stopped".to_string(),
            Message::SessionTask(description) => format!("Task: {}", description),
            Message::SessionTags(tags) => format!("Tags: {}", tags),
            Message::SessionNotes(notes) => format!("Notes: {}", notes),
            Message::SessionDuration(duration) => format!("Duration: {}", duration),
            Message::SessionStartedAgo(ago) => format!("Started: {}", ago),
            Message::StopHint => "Stop this session with: devlog stop".to_string(),
            Message::StartHint => "Start a session with: devlog start \"Your task description\"".to_string(),
            Message::ActiveSessionHeader => "Active session".to_string(),
            Message::NoActiveSession => "No active session".to_string(),

            // === VALIDATION MESSAGES ===
            Message::EmptyDescription => "Description cannot be empty".to_string(),
            Message::EmptySearchQuery => "Search query cannot be empty".to_string(),
            Message::SessionAlreadyActive(description) => {
                format!("A session is already active: {}. Stop it first with 'devlog stop'", description)
            }
            Message::TodayAndDaysConflict => "--today and --days cannot be combined".to_string(),
            Message::ReportRangeMissing => "Specify a report range: --week, --month, or --from/--to".to_string(),
            Message::ReportRangeConflict => "Only one report range may be given".to_string(),
            Message::InvalidDate(input) => {
                format!("Invalid date '{}'. Use YYYY-MM-DD, 'today', or 'yesterday'", input)
            }

            // === LISTING MESSAGES ===
            Message::NoSessionsFound => "No sessions found".to_string(),
            Message::NoSessionsMatching(query) => format!("No sessions found matching '{}'", query),
            Message::SearchResultsHeader(count, query) => {
                format!("Found {} session(s) matching '{}':", count, query)
            }
            Message::ShowingLimited(limit) => {
                format!("Showing {} most recent sessions. Use --limit to see more.", limit)
            }

            // === REPORT MESSAGES ===
            Message::ReportHeader(period) => format!("DevLog report — {}", period),
            Message::ReportByTagHeader => "Time by tag".to_string(),

            // === DELETE MESSAGES ===
            Message::ConfirmDeleteSession(id) => {
                format!("Are you sure you want to delete session {}?", id)
            }
            Message::SessionDeleted(id) => format!("Session {} deleted", id),
            Message::SessionNotFoundWithId(id) => format!("Session {} not found", id),
            Message::OperationCancelled => "Operation cancelled".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::PromptListLimit => "Default number of sessions shown by 'list'".to_string(),
        };
        write!(f, "{}", text)
    }
}
