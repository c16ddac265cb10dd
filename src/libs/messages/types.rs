#[derive(Debug, Clone)]
pub enum Message {
    // === SESSION LIFECYCLE MESSAGES ===
    SessionStarted(String), // start time
    SessionStopped,
    SessionTask(String),
    SessionTags(String),
    SessionNotes(String),
    SessionDuration(String),
    SessionStartedAgo(String),
    StopHint,
    StartHint,
    ActiveSessionHeader,
    NoActiveSession,

    // === VALIDATION MESSAGES ===
    EmptyDescription,
    EmptySearchQuery,
    SessionAlreadyActive(String), // description of the running session
    TodayAndDaysConflict,
    ReportRangeMissing,
    ReportRangeConflict,
    InvalidDate(String),

    // === LISTING MESSAGES ===
    NoSessionsFound,
    NoSessionsMatching(String),
    SearchResultsHeader(usize, String), // count, query
    ShowingLimited(usize),              // limit

    // === REPORT MESSAGES ===
    ReportHeader(String), // period description
    ReportByTagHeader,

    // === DELETE MESSAGES ===
    ConfirmDeleteSession(i64),
    SessionDeleted(i64),
    SessionNotFoundWithId(i64),
    OperationCancelled,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    PromptListLimit,
}
