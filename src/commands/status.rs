use crate::libs::{
    formatter::{format_duration, time_ago},
    manager::SessionManager,
    messages::Message,
};
use crate::{msg_info, msg_print};
use anyhow::Result;
use chrono::Local;

pub fn cmd() -> Result<()> {
    let mut manager = SessionManager::new()?;

    match manager.current()? {
        Some(session) => {
            let elapsed = Local::now().naive_local() - session.started_at;
            msg_print!(Message::ActiveSessionHeader, true);
            msg_print!(Message::SessionTask(session.description.clone()));
            msg_print!(Message::SessionStartedAgo(time_ago(session.started_at)));
            msg_print!(Message::SessionDuration(format_duration(&elapsed)));
            if !session.tags.is_empty() {
                msg_print!(Message::SessionTags(session.tags.join(", ")));
            }
        }
        None => {
            msg_info!(Message::NoActiveSession);
            msg_print!(Message::StartHint, true);
        }
    }

    Ok(())
}
