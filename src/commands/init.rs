//! Application configuration initialization command.
//!
//! Runs a short interactive wizard and writes `config.json` to the
//! platform data directory.

use crate::libs::{config::Config, messages::Message};
use crate::msg_success;
use anyhow::Result;

pub fn cmd() -> Result<()> {
    Config::init()?.save()?;
    msg_success!(Message::ConfigSaved);
    Ok(())
}
