use crate::libs::{manager::SessionManager, messages::Message};
use crate::{msg_info, msg_print, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct StartArgs {
    /// What you are working on
    #[arg(required = true)]
    description: String,
    /// Comma-separated tags for this session
    #[arg(short, long, value_delimiter = ',')]
    tags: Vec<String>,
}

pub fn cmd(args: StartArgs) -> Result<()> {
    let mut manager = SessionManager::new()?;
    let session = manager.start(&args.description, &args.tags)?;

    msg_success!(Message::SessionStarted(session.started_at.format("%H:%M").to_string()));
    msg_print!(Message::SessionTask(session.description.clone()));
    if !session.tags.is_empty() {
        msg_print!(Message::SessionTags(session.tags.join(", ")));
    }
    msg_info!(Message::StopHint, true);

    Ok(())
}
