use std::fs;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tempfile::tempdir;

use jump::app::handoff::Handoff;
use jump::app::store::PathStore;
use jump::ui::components::picker::{PickerAction, PickerState};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn digits_then_enter_commit_a_jump_end_to_end() {
    let dir = tempdir().unwrap();
    let store = PathStore::new(dir.path().join("list"), "/home/me");
    fs::write(store.path(), "/home/a\n/home/b\n/home/c\n").unwrap();

    let list = store.load().unwrap();
    let mut picker = PickerState::new(list.clone());

    assert_eq!(picker.handle_key(key(KeyCode::Char('2'))), None);
    let action = picker.handle_key(key(KeyCode::Enter));
    let Some(PickerAction::Commit(index)) = action else {
        panic!("expected a commit, got {action:?}");
    };
    assert_eq!(index, 2);

    let handoff = Handoff::new(dir.path().join("handoff"));
    handoff.write(list.get(index).unwrap()).unwrap();

    let written = fs::read_to_string(dir.path().join("handoff")).unwrap();
    assert_eq!(written, "/home/c");
}

#[test]
fn missed_digit_then_enter_commits_the_clamped_focus() {
    let dir = tempdir().unwrap();
    let store = PathStore::new(dir.path().join("list"), "/home/me");
    fs::write(store.path(), "/home/a\n/home/b\n").unwrap();

    let mut picker = PickerState::new(store.load().unwrap());

    // '7' misses a two-entry list; focus clamps to the last row.
    picker.handle_key(key(KeyCode::Char('7')));
    let action = picker.handle_key(key(KeyCode::Enter));
    assert_eq!(action, Some(PickerAction::Commit(1)));
}

#[test]
fn quitting_commits_nothing() {
    let dir = tempdir().unwrap();
    let store = PathStore::new(dir.path().join("list"), "/home/me");
    fs::write(store.path(), "/home/a\n").unwrap();

    let mut picker = PickerState::new(store.load().unwrap());
    picker.handle_key(key(KeyCode::Char('1')));
    let action = picker.handle_key(key(KeyCode::Char('q')));
    assert_eq!(action, Some(PickerAction::Quit));

    assert!(!dir.path().join("handoff").exists());
}
