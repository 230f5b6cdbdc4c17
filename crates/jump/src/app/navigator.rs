//! Command dispatch: every invocation funnels through the navigator.

use std::env;

use anyhow::{Context, Result};
use tracing::debug;

use crate::app::command::Command;
use crate::app::handoff::Handoff;
use crate::app::store::PathStore;
use crate::domain::errors::JumpError;
use crate::domain::model::PathList;
use crate::infra::config::Config;
use crate::infra::editor;
use crate::ui::app::UiApp;
use crate::ui::theme::Theme;

pub const USAGE: &str = "\
jump makes your `cd`-ing fast and fun.

Usage:
  j [option]

Options:
  <none>         show the bookmarked paths as a numbered, selectable list
  <N>            jump to the path at index N
  -a, -add [P]   bookmark path P, or the working directory if P is omitted
  -e, -edit      open the bookmark file in your editor
  -h, -help, ?   show this message";

/// Executes parsed commands against the store, the hand-off file and the UI.
pub struct Navigator {
    store: PathStore,
    handoff: Handoff,
    cwd: String,
    config: Config,
}

impl Navigator {
    pub fn new(store: PathStore, handoff: Handoff, cwd: String, config: Config) -> Self {
        Self {
            store,
            handoff,
            cwd,
            config,
        }
    }

    /// Wire up a navigator from the user's environment: layered config, home
    /// directory for the default file locations, working directory for `-add`.
    pub fn bootstrap() -> Result<Self> {
        let config = Config::load()?;
        let home = dirs_next::home_dir().ok_or(JumpError::HomeDirUnavailable)?;
        let store = PathStore::new(config.files.list_path(&home), home.display().to_string());
        let handoff = Handoff::new(config.files.handoff_path(&home));
        let cwd = env::current_dir()
            .context("unable to determine the working directory")?
            .display()
            .to_string();
        Ok(Self::new(store, handoff, cwd, config))
    }

    pub fn run(&self, command: Command) -> Result<()> {
        match command {
            Command::Interactive => self.interactive(),
            Command::Jump(index) => {
                let list = self.store.load()?;
                self.hand_off(&list, index)
            }
            Command::Add(path) => {
                let path = path.unwrap_or_else(|| self.cwd.clone());
                let list = self.store.append(&path)?;
                debug!(total = list.len(), %path, "bookmarked");
                Ok(())
            }
            Command::Edit => editor::open(self.store.path(), &self.config.editor.fallback()),
            Command::Help => {
                println!("{USAGE}");
                Ok(())
            }
            Command::Unrecognized(selector) => {
                println!("Unrecognized option `{selector}`");
                println!();
                println!("{USAGE}");
                Ok(())
            }
        }
    }

    fn interactive(&self) -> Result<()> {
        let list = self.store.load()?;
        let theme = Theme::from_config(&self.config)?;
        let chosen = UiApp::new(list.clone(), theme, self.cwd.clone()).run()?;
        match chosen {
            Some(index) => self.hand_off(&list, index),
            None => Ok(()),
        }
    }

    /// Write the hand-off for `index`, or do nothing when it is out of range.
    fn hand_off(&self, list: &PathList, index: usize) -> Result<()> {
        match list.get(index) {
            Some(path) => self.handoff.write(path),
            None => {
                debug!(index, total = list.len(), "ignoring out-of-range jump");
                Ok(())
            }
        }
    }
}
