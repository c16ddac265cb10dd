use crate::libs::{formatter::format_duration, manager::SessionManager, messages::Message};
use crate::{msg_print, msg_success};
use anyhow::Result;
use chrono::Duration;
use clap::Args;

#[derive(Debug, Args)]
pub struct StopArgs {
    /// Notes about what you accomplished
    #[arg(short, long)]
    notes: Option<String>,
}

pub fn cmd(args: StopArgs) -> Result<()> {
    let mut manager = SessionManager::new()?;
    let session = manager.stop(args.notes.as_deref())?;

    let duration = session.duration().unwrap_or_else(Duration::zero);
    msg_success!(Message::SessionStopped);
    msg_print!(Message::SessionTask(session.description.clone()));
    msg_print!(Message::SessionDuration(format_duration(&duration)));
    if let Some(notes) = &session.notes {
        msg_print!(Message::SessionNotes(notes.clone()));
    }

    Ok(())
}
