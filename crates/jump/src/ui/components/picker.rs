//! List picker component and session state management.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};

use crate::app::search::{QuickSelect, SearchOutcome};
use crate::domain::model::{PathEntry, PathList};
use crate::ui::theme::Theme;

/// What a keystroke asks the session loop to do, beyond updating state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerAction {
    /// Jump to the given row index and end the session.
    Commit(usize),
    /// End the session without jumping.
    Quit,
}

/// Session state for the interactive list: the loaded paths, the focused row,
/// and the live quick-select buffer.
///
/// All key handling happens in [`PickerState::handle_key`], a pure reducer
/// over this state; the terminal loop only dispatches events into it and acts
/// on the returned [`PickerAction`]. That keeps every transition testable
/// without a terminal.
#[derive(Debug, Clone)]
pub struct PickerState {
    list: PathList,
    column_width: usize,
    focused: usize,
    search: QuickSelect,
    status: Option<SearchOutcome>,
}

impl PickerState {
    /// Build session state over a loaded list. Row metrics are fixed here;
    /// the list cannot change for the lifetime of the session.
    pub fn new(list: PathList) -> Self {
        let column_width = list.basename_column_width();
        let search = QuickSelect::for_list(&list);
        Self {
            list,
            column_width,
            focused: 0,
            search,
            status: None,
        }
    }

    /// Apply one keystroke. Returns the action the session loop must take,
    /// if any.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<PickerAction> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            // Raw mode swallows the usual SIGINT; treat ctrl-c as quit.
            return match key.code {
                KeyCode::Char('c') => Some(PickerAction::Quit),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => Some(PickerAction::Quit),
            KeyCode::Enter => self.commit(),
            KeyCode::Up => {
                self.clear_search();
                self.focused = self.focused.saturating_sub(1);
                None
            }
            KeyCode::Down => {
                self.clear_search();
                if let Some(last) = self.list.last_index() {
                    self.focused = (self.focused + 1).min(last);
                }
                None
            }
            KeyCode::Backspace => {
                self.clear_search();
                None
            }
            KeyCode::Char(ch) if ch.is_ascii_digit() => {
                self.on_digit(ch);
                None
            }
            _ => None,
        }
    }

    fn commit(&mut self) -> Option<PickerAction> {
        if self.list.is_empty() {
            return None;
        }
        Some(PickerAction::Commit(self.focused))
    }

    fn on_digit(&mut self, digit: char) {
        let outcome = self.search.on_digit(digit);
        self.focused = match outcome {
            SearchOutcome::Selected(index) => index,
            // Clamp to the last row so the miss is visible next to the status.
            SearchOutcome::NotFound(_) => self.list.last_index().unwrap_or(0),
        };
        self.status = Some(outcome);
    }

    fn clear_search(&mut self) {
        self.search.clear();
        self.status = None;
    }

    /// Index of the focused row.
    pub fn focused(&self) -> usize {
        self.focused
    }

    /// The loaded list, in row order.
    pub fn list(&self) -> &PathList {
        &self.list
    }

    /// Header status for the current search buffer, empty when idle.
    pub fn status_text(&self) -> Option<String> {
        self.status.map(|outcome| match outcome {
            SearchOutcome::Selected(index) => {
                format!("{index} selected (backspace to clear)")
            }
            SearchOutcome::NotFound(index) => {
                format!("{index} not found (backspace to clear)")
            }
        })
    }
}

/// Ratatui component rendering the picker rows.
#[derive(Debug, Default)]
pub struct Picker;

impl Picker {
    /// Render the list into `area` with focus highlighting.
    pub fn render(&self, frame: &mut Frame<'_>, area: Rect, state: &PickerState, theme: &Theme) {
        if state.list().is_empty() {
            let placeholder =
                Paragraph::new("no bookmarks yet - add one with -a").style(theme.placeholder);
            frame.render_widget(placeholder, area);
            return;
        }

        let items: Vec<ListItem> = state
            .list()
            .entries()
            .map(|entry| ListItem::new(row_line(entry, state.column_width, theme)))
            .collect();

        let mut list_state = ListState::default();
        list_state.select(Some(state.focused()));

        let list = List::new(items).highlight_style(theme.focus);
        frame.render_stateful_widget(list, area, &mut list_state);
    }
}

/// One display row: dim index cell, basename padded to the shared column
/// width, then the full path.
fn row_line<'a>(entry: PathEntry<'a>, column_width: usize, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!(" {}  ", entry.index), theme.index),
        Span::styled(
            format!("{:<width$}", entry.basename(), width = column_width),
            theme.name,
        ),
        Span::raw(entry.path),
    ])
}
