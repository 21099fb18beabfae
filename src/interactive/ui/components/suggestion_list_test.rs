use crate::interactive::ui::components::Component;
use crate::interactive::ui::components::suggestion_list::SuggestionList;
use crate::interactive::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn list_with(items: &[&str], active: Option<usize>) -> SuggestionList {
    let mut list = SuggestionList::new();
    list.set_items(items.iter().map(|s| s.to_string()).collect());
    list.set_active(active);
    list
}

#[test]
fn arrow_keys_translate_to_move_messages() {
    let mut list = list_with(&["york", "yonder"], None);
    assert_eq!(
        list.handle_key(key(KeyCode::Down)),
        Some(Message::SuggestionMoveDown)
    );
    assert_eq!(
        list.handle_key(key(KeyCode::Up)),
        Some(Message::SuggestionMoveUp)
    );
}

#[test]
fn enter_accepts_only_with_an_active_row() {
    let mut list = list_with(&["york", "yonder"], None);
    // No row highlighted: Enter falls through to the search bar submit.
    assert_eq!(list.handle_key(key(KeyCode::Enter)), None);

    list.set_active(Some(1));
    assert_eq!(
        list.handle_key(key(KeyCode::Enter)),
        Some(Message::SuggestionAccepted)
    );
}

#[test]
fn escape_dismisses() {
    let mut list = list_with(&["york", "yonder"], Some(0));
    assert_eq!(
        list.handle_key(key(KeyCode::Esc)),
        Some(Message::SuggestionDismissed)
    );
}

#[test]
fn unrelated_keys_pass_through() {
    let mut list = list_with(&["york", "yonder"], Some(0));
    assert_eq!(list.handle_key(key(KeyCode::Char('x'))), None);
    assert_eq!(list.handle_key(key(KeyCode::Tab)), None);
}

#[test]
fn desired_height_is_capped() {
    let items: Vec<&str> = vec!["a"; 20];
    let list = list_with(&items, None);
    assert_eq!(list.desired_height(8), 10);

    let list = list_with(&["a", "b", "c"], None);
    assert_eq!(list.desired_height(8), 5);
}
