//! Application configuration.
//!
//! DevLog keeps a small JSON config file next to its database in the
//! platform data directory. A missing file is not an error: every field
//! has a default, and `devlog init` writes the file interactively.

use crate::libs::data_storage::DataStorage;
use crate::libs::error::Result;
use crate::libs::messages::Message;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default row cap for `list` and `search` when the config does not set one.
pub const DEFAULT_LIST_LIMIT: usize = 20;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// Default number of sessions shown by `list` and `search`; the
    /// `--limit` flag overrides this per invocation.
    pub list_limit: Option<usize>,
}

impl Config {
    /// Reads the config file, falling back to defaults if it is absent.
    pub fn read() -> Result<Self> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !path.exists() {
            return Ok(Config::default());
        }
        let raw = fs::read_to_string(path)?;
        let config = serde_json::from_str(&raw)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Interactive setup wizard used by `devlog init`.
    pub fn init() -> Result<Self> {
        let current = Config::read()?;
        let limit: usize = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptListLimit.to_string())
            .default(current.list_limit.unwrap_or(DEFAULT_LIST_LIMIT))
            .interact_text()
            .map_err(std::io::Error::other)?;

        Ok(Config { list_limit: Some(limit) })
    }

    pub fn list_limit(&self) -> usize {
        self.list_limit.unwrap_or(DEFAULT_LIST_LIMIT)
    }
}
