use crate::libs::{
    formatter::parse_date,
    messages::Message,
    report::{GroupBy, ReportAggregator, ReportRange},
    view::View,
};
use crate::msg_print;
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Report for the last 7 days
    #[arg(long)]
    week: bool,
    /// Report for the last 30 days
    #[arg(long)]
    month: bool,
    /// Start date (YYYY-MM-DD, 'today', or 'yesterday')
    #[arg(long, value_parser = parse_date)]
    from: Option<NaiveDate>,
    /// End date (YYYY-MM-DD, 'today', or 'yesterday')
    #[arg(long, value_parser = parse_date)]
    to: Option<NaiveDate>,
    /// Group totals by tag
    #[arg(long)]
    by_tag: bool,
}

pub fn cmd(args: ReportArgs) -> Result<()> {
    let range = ReportRange::from_flags(args.week, args.month, args.from, args.to)?;
    let group_by = if args.by_tag { GroupBy::Tag } else { GroupBy::None };

    let mut aggregator = ReportAggregator::new()?;
    let summary = aggregator.report(&range, group_by)?;

    msg_print!(Message::ReportHeader(summary.period.clone()), true);
    View::report_totals(&summary);
    if let Some(breakdown) = &summary.by_tag {
        msg_print!(Message::ReportByTagHeader, true);
        View::tag_breakdown(breakdown, &summary.total_duration);
    }

    Ok(())
}
