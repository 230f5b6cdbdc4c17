//! Numeric quick-select state for the interactive list.

use crate::domain::model::PathList;

/// Result of feeding one digit into the buffer.
///
/// `Selected` means the typed number names an existing row and focus should
/// move there. `NotFound` still carries the typed number so the status line
/// can echo it; focus clamps to the last row in that case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    Selected(usize),
    NotFound(usize),
}

/// Tracks a partially typed index during an interactive session.
///
/// The buffer is capped at the number of digits in the highest valid index;
/// typing past the cap restarts the buffer with the newest digit instead of
/// growing it. Pure state machine, no I/O.
#[derive(Debug, Clone)]
pub struct QuickSelect {
    digits: String,
    max_digits: usize,
    len: usize,
}

impl QuickSelect {
    /// Size the buffer for a list. The list is fixed for the whole session.
    pub fn for_list(list: &PathList) -> Self {
        Self {
            digits: String::new(),
            max_digits: list.max_index_digits(),
            len: list.len(),
        }
    }

    /// Append a digit and report where focus should land.
    pub fn on_digit(&mut self, digit: char) -> SearchOutcome {
        self.digits.push(digit);
        if self.digits.len() > self.max_digits {
            // Keep the most recent keystroke rather than overflowing.
            self.digits.clear();
            self.digits.push(digit);
        }

        // The cap keeps the buffer well inside usize range; the fallback only
        // matters for a buffer that could never name a real row anyway.
        let index = self.digits.parse::<usize>().unwrap_or(usize::MAX);
        if index < self.len {
            SearchOutcome::Selected(index)
        } else {
            SearchOutcome::NotFound(index)
        }
    }

    /// Drop the buffer; navigation keys and backspace land here.
    pub fn clear(&mut self) {
        self.digits.clear();
    }

    /// The digits typed so far.
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// Whether nothing has been typed since the last clear.
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }
}
