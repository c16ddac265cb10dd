//! # DevLog - Developer work session tracker
//!
//! A command-line utility for recording timed work sessions,
//! searching past work, and generating productivity reports.
//!
//! ## Features
//!
//! - **Session Tracking**: Start and stop timed work sessions with tags and notes
//! - **Single Active Session**: The database is the source of truth for the running session
//! - **Listings & Search**: Filter sessions by date window or tag, search by text
//! - **Report Generation**: Aggregate totals and per-tag breakdowns over a date range
//! - **Local Storage**: A single SQLite file in the platform data directory
//!
//! ## Usage
//!
//! ```rust,no_run
//! use devlog::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
