//! Configuration management utilities.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dirs_next::config_dir;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

static DEFAULT_CONFIG: Lazy<&'static str> =
    Lazy::new(|| include_str!("../../assets/default-config.toml"));

const LIST_FILE_NAME: &str = ".jumplist";
const HANDOFF_FILE_NAME: &str = ".jumpfile";

/// Layered configuration loaded from embedded defaults, the user config
/// file, and the environment. Every knob is optional in each layer; later
/// layers win field by field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub files: Files,
    #[serde(default)]
    pub editor: Editor,
    #[serde(default)]
    pub ui: Ui,
}

/// Locations of the two per-user files. Unset fields resolve against the
/// home directory with the historical dotfile names, which are part of the
/// contract with the shell wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Files {
    #[serde(default)]
    list_file: Option<String>,
    #[serde(default)]
    handoff_file: Option<String>,
}

impl Files {
    /// Resolved location of the bookmark list file.
    pub fn list_path(&self, home: &Path) -> PathBuf {
        self.list_file
            .as_deref()
            .map(PathBuf::from)
            .unwrap_or_else(|| home.join(LIST_FILE_NAME))
    }

    /// Resolved location of the hand-off file.
    pub fn handoff_path(&self, home: &Path) -> PathBuf {
        self.handoff_file
            .as_deref()
            .map(PathBuf::from)
            .unwrap_or_else(|| home.join(HANDOFF_FILE_NAME))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Editor {
    #[serde(default)]
    fallback: Option<String>,
}

impl Editor {
    fn default_fallback() -> &'static str {
        "vi"
    }

    /// Editor program used when `$EDITOR` is unset.
    pub fn fallback(&self) -> String {
        self.fallback
            .clone()
            .unwrap_or_else(|| Self::default_fallback().to_owned())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Ui {
    #[serde(default)]
    theme: Option<String>,
    #[serde(default)]
    backdrop: Option<bool>,
}

impl Ui {
    fn default_theme() -> &'static str {
        "charcoal"
    }

    /// Named palette for the interactive session.
    pub fn theme(&self) -> String {
        self.theme
            .clone()
            .unwrap_or_else(|| Self::default_theme().to_owned())
    }

    /// Whether to hatch the screen behind the list panel.
    pub fn backdrop(&self) -> bool {
        self.backdrop.unwrap_or(true)
    }
}

/// Environment overrides for the file locations; these beat every file layer
/// and keep integration tests away from the real dotfiles.
#[derive(Debug, Default, Clone)]
pub struct EnvOverrides {
    list_file: Option<String>,
    handoff_file: Option<String>,
}

impl EnvOverrides {
    fn from_env() -> Self {
        Self {
            list_file: env::var("JUMP_LIST_FILE").ok(),
            handoff_file: env::var("JUMP_HANDOFF_FILE").ok(),
        }
    }

    #[cfg(test)]
    fn for_tests(list_file: &str, handoff_file: &str) -> Self {
        Self {
            list_file: Some(list_file.to_owned()),
            handoff_file: Some(handoff_file.to_owned()),
        }
    }
}

impl Config {
    /// Load configuration from embedded defaults, the user config file, and
    /// env overrides.
    pub fn load() -> Result<Self> {
        let env = EnvOverrides::from_env();
        Self::load_with_layers(user_config_path(), env)
    }

    fn load_with_layers(user: Option<PathBuf>, env_overrides: EnvOverrides) -> Result<Self> {
        let mut config = Self::from_str(&DEFAULT_CONFIG)?;
        if let Some(user_path) = user.filter(|path| path.exists()) {
            config = config.merge(Self::from_file(&user_path)?);
        }
        Ok(apply_env_overrides(config, env_overrides))
    }

    fn from_file(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::from_str(&data)
            .with_context(|| format!("invalid config file: {}", path.display()))
    }

    fn from_str(contents: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(contents).with_context(|| "failed to parse TOML config".to_string())?;
        Ok(config)
    }

    fn merge(self, overlay: Self) -> Self {
        Self {
            files: Files {
                list_file: overlay.files.list_file.or(self.files.list_file),
                handoff_file: overlay.files.handoff_file.or(self.files.handoff_file),
            },
            editor: Editor {
                fallback: overlay.editor.fallback.or(self.editor.fallback),
            },
            ui: Ui {
                theme: overlay.ui.theme.or(self.ui.theme),
                backdrop: overlay.ui.backdrop.or(self.ui.backdrop),
            },
        }
    }
}

fn user_config_path() -> Option<PathBuf> {
    config_dir().map(|base| base.join("jump/config.toml"))
}

fn apply_env_overrides(mut config: Config, env: EnvOverrides) -> Config {
    if let Some(list_file) = env.list_file {
        config.files.list_file = Some(list_file);
    }
    if let Some(handoff_file) = env.handoff_file {
        config.files.handoff_file = Some(handoff_file);
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_uses_defaults_when_no_files() {
        let config =
            Config::load_with_layers(None, EnvOverrides::default()).expect("load default config");
        assert_eq!(config.ui.theme(), "charcoal");
        assert!(config.ui.backdrop());
        assert_eq!(config.editor.fallback(), "vi");

        let home = Path::new("/home/someone");
        assert_eq!(
            config.files.list_path(home),
            PathBuf::from("/home/someone/.jumplist")
        );
        assert_eq!(
            config.files.handoff_path(home),
            PathBuf::from("/home/someone/.jumpfile")
        );
    }

    #[test]
    fn user_file_overlays_defaults_field_by_field() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let user = temp.path().join("config.toml");
        fs::write(
            &user,
            r#"
[files]
list_file = "/data/jump/list"

[ui]
theme = "plain"
"#,
        )?;

        let config = Config::load_with_layers(Some(user), EnvOverrides::default())?;
        assert_eq!(config.ui.theme(), "plain");
        // Untouched fields keep their defaults.
        assert!(config.ui.backdrop());
        assert_eq!(config.editor.fallback(), "vi");

        let home = Path::new("/home/someone");
        assert_eq!(config.files.list_path(home), PathBuf::from("/data/jump/list"));
        assert_eq!(
            config.files.handoff_path(home),
            PathBuf::from("/home/someone/.jumpfile")
        );
        Ok(())
    }

    #[test]
    fn env_overrides_take_precedence() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let user = temp.path().join("config.toml");
        fs::write(&user, "[files]\nlist_file = \"/from/file\"\n")?;

        let overrides = EnvOverrides::for_tests("/from/env/list", "/from/env/handoff");
        let config = Config::load_with_layers(Some(user), overrides)?;

        let home = Path::new("/home/someone");
        assert_eq!(config.files.list_path(home), PathBuf::from("/from/env/list"));
        assert_eq!(
            config.files.handoff_path(home),
            PathBuf::from("/from/env/handoff")
        );
        Ok(())
    }

    #[test]
    fn invalid_config_returns_error() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let file = temp.path().join("broken.toml");
        fs::write(&file, "this is not toml")?;
        let result = Config::from_file(&file);
        assert!(result.is_err());
        Ok(())
    }
}
