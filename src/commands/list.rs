use crate::libs::{
    config::Config,
    formatter::parse_date,
    messages::Message,
    report::{ListFilter, ReportAggregator},
    view::View,
};
use crate::{msg_info, msg_print};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Show only today's sessions
    #[arg(long, conflicts_with = "days")]
    today: bool,
    /// Show sessions from the last N days
    #[arg(short, long)]
    days: Option<u32>,
    /// Filter by tag
    #[arg(short, long)]
    tag: Option<String>,
    /// Start date (YYYY-MM-DD, 'today', or 'yesterday')
    #[arg(long, value_parser = parse_date)]
    from: Option<NaiveDate>,
    /// End date (YYYY-MM-DD, 'today', or 'yesterday')
    #[arg(long, value_parser = parse_date)]
    to: Option<NaiveDate>,
    /// Maximum number of sessions to show
    #[arg(short, long)]
    limit: Option<usize>,
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let limit = args.limit.unwrap_or(Config::read()?.list_limit());
    let filter = ListFilter {
        today: args.today,
        days: args.days,
        tag: args.tag,
        from: args.from,
        to: args.to,
        limit: Some(limit),
    };

    let mut aggregator = ReportAggregator::new()?;
    let sessions = aggregator.list(&filter)?;

    if sessions.is_empty() {
        msg_info!(Message::NoSessionsFound);
        return Ok(());
    }

    View::sessions(&sessions);
    if sessions.len() >= limit {
        msg_print!(Message::ShowingLimited(limit), true);
    }

    Ok(())
}
