//! Color themes for the interactive session.

use ratatui::style::{Color, Modifier, Style};

use crate::domain::errors::JumpError;
use crate::infra::config::Config;

/// All styles used by one interactive session, resolved once at startup and
/// passed into the renderer. Nothing is process-global.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Fill behind the list panel; `None` leaves the terminal background.
    pub backdrop: Option<Style>,
    /// Base style of the list panel.
    pub panel: Style,
    /// Header band with the title and search status.
    pub header: Style,
    /// Two-line footer with the working directory and key hints.
    pub footer: Style,
    /// The ` <index>  ` cell at the start of each row.
    pub index: Style,
    /// The padded basename column.
    pub name: Style,
    /// The focused row; replaces the row styles outright.
    pub focus: Style,
    /// Placeholder text for an empty list.
    pub placeholder: Style,
}

impl Theme {
    /// Resolve the theme named in `config`, honoring its backdrop toggle.
    pub fn from_config(config: &Config) -> Result<Self, JumpError> {
        let mut theme = Self::named(&config.ui.theme())?;
        if !config.ui.backdrop() {
            theme.backdrop = None;
        }
        Ok(theme)
    }

    /// Look up a palette by name.
    pub fn named(name: &str) -> Result<Self, JumpError> {
        match name {
            "charcoal" => Ok(Self::charcoal()),
            "plain" => Ok(Self::plain()),
            other => Err(JumpError::UnknownTheme(other.to_owned())),
        }
    }

    /// Dark grey panel over a hatched background, amber focus row. Assumes a
    /// truecolor-capable terminal.
    fn charcoal() -> Self {
        let panel_bg = Color::Rgb(23, 23, 23);
        Self {
            backdrop: Some(Style::default().fg(Color::Rgb(36, 36, 36)).bg(Color::Black)),
            panel: Style::default().fg(Color::Rgb(204, 204, 204)).bg(panel_bg),
            header: Style::default()
                .fg(Color::Rgb(102, 0, 0))
                .bg(Color::Rgb(255, 136, 0)),
            footer: Style::default()
                .fg(Color::Rgb(153, 153, 153))
                .bg(Color::Rgb(38, 38, 38)),
            index: Style::default().fg(Color::Rgb(89, 89, 89)),
            name: Style::default().fg(Color::White),
            focus: Style::default().fg(Color::Rgb(255, 204, 0)).bg(Color::Black),
            placeholder: Style::default()
                .fg(Color::Rgb(89, 89, 89))
                .add_modifier(Modifier::ITALIC),
        }
    }

    /// Terminal default colors for low-color or themed terminals.
    fn plain() -> Self {
        Self {
            backdrop: None,
            panel: Style::default(),
            header: Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED),
            footer: Style::default().add_modifier(Modifier::DIM),
            index: Style::default().fg(Color::DarkGray),
            name: Style::default().add_modifier(Modifier::BOLD),
            focus: Style::default().add_modifier(Modifier::REVERSED),
            placeholder: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_palettes_resolve() {
        assert!(Theme::named("charcoal").is_ok());
        assert!(Theme::named("plain").is_ok());
    }

    #[test]
    fn unknown_palette_is_rejected_by_name() {
        let err = Theme::named("solarized").unwrap_err();
        assert!(err.to_string().contains("solarized"));
    }

    #[test]
    fn default_config_yields_a_backdrop() {
        let theme = Theme::from_config(&Config::default()).unwrap();
        assert!(theme.backdrop.is_some());
    }
}
