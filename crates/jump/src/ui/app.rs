//! Application loop for the interactive session.

use std::io;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEvent};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::{Frame, Terminal};

use crate::domain::model::PathList;
use crate::ui::components::picker::{Picker, PickerAction, PickerState};
use crate::ui::theme::Theme;

const MIN_PANEL_WIDTH: u16 = 20;
const MIN_PANEL_HEIGHT: u16 = 9;

/// One full-screen interactive session over a loaded bookmark list.
///
/// The list panel floats over a hatched backdrop; the session ends on quit or
/// on the first committed row. Writing the hand-off is the caller's job, after
/// the terminal is back to normal.
pub struct UiApp {
    state: PickerState,
    picker: Picker,
    theme: Theme,
    cwd: String,
    chosen: Option<usize>,
    should_quit: bool,
}

impl UiApp {
    /// Prepare a session over `list`. `cwd` only feeds the footer line.
    pub fn new(list: PathList, theme: Theme, cwd: String) -> Self {
        Self {
            state: PickerState::new(list),
            picker: Picker,
            theme,
            cwd,
            chosen: None,
            should_quit: false,
        }
    }

    /// Run the session to completion. Returns the committed row index, or
    /// `None` when the user quit without jumping.
    pub fn run(&mut self) -> Result<Option<usize>> {
        enable_raw_mode().context("failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("failed to initialize terminal")?;
        terminal.hide_cursor().ok();

        let event_loop_result = self.event_loop(&mut terminal);

        disable_raw_mode().ok();
        let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        event_loop_result.map(|_| self.chosen)
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|frame| self.render(frame))?;

            if self.should_quit {
                break;
            }

            // Nothing in the UI is time-based, so block until the next event.
            match event::read()? {
                Event::Key(key) => self.handle_key(key),
                Event::Resize(..) => {}
                _ => {}
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match self.state.handle_key(key) {
            Some(PickerAction::Commit(index)) => {
                self.chosen = Some(index);
                self.should_quit = true;
            }
            Some(PickerAction::Quit) => {
                self.should_quit = true;
            }
            None => {}
        }
    }

    fn render(&mut self, frame: &mut Frame<'_>) {
        let size = frame.size();

        if let Some(style) = self.theme.backdrop {
            let fill = "/".repeat(size.width as usize);
            let rows: Vec<Line> = (0..size.height).map(|_| Line::from(fill.clone())).collect();
            frame.render_widget(Paragraph::new(rows).style(style), size);
        }

        let panel = overlay_area(size);
        frame.render_widget(Clear, panel);
        frame.render_widget(Block::default().style(self.theme.panel), panel);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(2),
            ])
            .split(panel);

        let title = format!(" jump {}", self.state.status_text().unwrap_or_default());
        let header = Paragraph::new(title)
            .alignment(Alignment::Center)
            .style(self.theme.header);
        frame.render_widget(header, chunks[0]);

        self.picker
            .render(frame, chunks[1], &self.state, &self.theme);

        let footer = Paragraph::new(vec![
            Line::from(format!(" pwd: {}", self.cwd)),
            Line::from(format!(
                " v{} | 'q' to quit | type digits for quick select",
                env!("CARGO_PKG_VERSION")
            )),
        ])
        .style(self.theme.footer);
        frame.render_widget(footer, chunks[2]);
    }
}

/// Centered panel covering 90% of the width and 80% of the height, never
/// smaller than the minimum usable size and never larger than the screen.
fn overlay_area(area: Rect) -> Rect {
    let width = ((u32::from(area.width) * 9 / 10) as u16)
        .max(MIN_PANEL_WIDTH)
        .min(area.width);
    let height = ((u32::from(area.height) * 4 / 5) as u16)
        .max(MIN_PANEL_HEIGHT)
        .min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn overlay_covers_most_of_a_normal_screen() {
        let panel = overlay_area(Rect::new(0, 0, 100, 40));
        assert_eq!(panel.width, 90);
        assert_eq!(panel.height, 32);
        assert_eq!(panel.x, 5);
        assert_eq!(panel.y, 4);
    }

    #[test]
    fn overlay_never_drops_below_the_minimum_panel() {
        let panel = overlay_area(Rect::new(0, 0, 21, 10));
        assert_eq!(panel.width, MIN_PANEL_WIDTH);
        assert_eq!(panel.height, MIN_PANEL_HEIGHT);
    }

    #[test]
    fn overlay_is_clamped_to_tiny_screens() {
        let panel = overlay_area(Rect::new(0, 0, 10, 4));
        assert_eq!(panel.width, 10);
        assert_eq!(panel.height, 4);
        assert_eq!(panel.x, 0);
        assert_eq!(panel.y, 0);
    }

    #[test]
    fn renders_full_chrome_without_a_real_terminal() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();

        let list = PathList::new(vec!["/home/a".into(), "/srv/b".into()]);
        let theme = Theme::named("charcoal").unwrap();
        let mut app = UiApp::new(list, theme, "/home/a".to_string());

        terminal.draw(|frame| app.render(frame)).unwrap();
    }
}
