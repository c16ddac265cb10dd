use crate::libs::{config::Config, messages::Message, report::ReportAggregator, view::View};
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Text to look for in descriptions and notes
    #[arg(required = true)]
    query: String,
    /// Maximum number of results
    #[arg(short, long)]
    limit: Option<usize>,
}

pub fn cmd(args: SearchArgs) -> Result<()> {
    let limit = args.limit.unwrap_or(Config::read()?.list_limit());

    let mut aggregator = ReportAggregator::new()?;
    let sessions = aggregator.search(&args.query, Some(limit))?;

    if sessions.is_empty() {
        msg_info!(Message::NoSessionsMatching(args.query));
        return Ok(());
    }

    msg_print!(Message::SearchResultsHeader(sessions.len(), args.query), true);
    View::search_results(&sessions);

    Ok(())
}
