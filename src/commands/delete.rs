use crate::db::sessions::Sessions;
use crate::libs::messages::Message;
use crate::{msg_error, msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// ID of the session to delete (shown in the list output)
    #[arg(required = true)]
    id: i64,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

/// Store-level administrative removal. Sessions are otherwise immutable
/// after stop, so this is deliberately kept out of the session manager.
pub fn cmd(args: DeleteArgs) -> Result<()> {
    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteSession(args.id).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    let mut store = Sessions::new()?;
    if store.delete(args.id)? {
        msg_success!(Message::SessionDeleted(args.id));
    } else {
        msg_error!(Message::SessionNotFoundWithId(args.id));
    }

    Ok(())
}
