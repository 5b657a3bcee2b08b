//! Keyboard and mouse mapping
//!
//! Translates crossterm events into [`Msg`] at the edge of the app. The
//! mapping depends on the active screen: text-entry screens get printable
//! characters, browse screens treat most letters as commands and the rest
//! as search input.

use std::time::Instant;

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::messages::{
    AppMsg, CreateMsg, DetailMsg, Direction, FilterMsg, Msg, NavMsg, PointerEvent, PointerKind,
    SearchMsg, TableMsg, UiMsg,
};
use crate::model::{AppModel, CreateField, ViewMode};
use crate::query::SortKey;

/// Map a key press to a message for the current state
pub fn key_to_msg(model: &AppModel, key: KeyEvent) -> Option<Msg> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        return Some(Msg::App(AppMsg::Quit));
    }

    if model.is_blocked() {
        return matches!(key.code, KeyCode::Char('q')).then_some(Msg::App(AppMsg::Quit));
    }

    if key.code == KeyCode::Esc {
        return Some(Msg::Ui(UiMsg::Escape));
    }

    if model.ui.show_help {
        return match key.code {
            KeyCode::Char('?') => Some(Msg::Ui(UiMsg::ToggleHelp)),
            KeyCode::Char('q') => Some(Msg::App(AppMsg::Quit)),
            _ => None,
        };
    }

    match model.nav.mode {
        ViewMode::List | ViewMode::Grid | ViewMode::Table => browse_key(model, key, ctrl),
        ViewMode::CategoryFilter => filter_key(key),
        ViewMode::CardCreate => create_key(model, key, ctrl),
        ViewMode::Detail => detail_key(model, key, ctrl),
    }
}

fn browse_key(model: &AppModel, key: KeyEvent, ctrl: bool) -> Option<Msg> {
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);
    let msg = match key.code {
        KeyCode::Up if shift => Msg::Nav(NavMsg::ScrollPreview(-1)),
        KeyCode::Down if shift => Msg::Nav(NavMsg::ScrollPreview(1)),
        KeyCode::Up | KeyCode::Char('k') => Msg::move_selection(Direction::Up),
        KeyCode::Down | KeyCode::Char('j') => Msg::move_selection(Direction::Down),
        KeyCode::Left | KeyCode::Char('h') => Msg::move_selection(Direction::Left),
        KeyCode::Right | KeyCode::Char('l') => Msg::move_selection(Direction::Right),
        KeyCode::PageUp => Msg::Nav(NavMsg::PageUp),
        KeyCode::PageDown => Msg::Nav(NavMsg::PageDown),
        KeyCode::Home => Msg::Nav(NavMsg::Home),
        KeyCode::End => Msg::Nav(NavMsg::End),
        KeyCode::Enter | KeyCode::Char('d') => Msg::Nav(NavMsg::OpenDetail),
        KeyCode::Backspace => Msg::Search(SearchMsg::DeleteBackward),
        KeyCode::Char(_) if ctrl => return None,
        KeyCode::Char('q') => Msg::App(AppMsg::Quit),
        KeyCode::Char('?') => Msg::Ui(UiMsg::ToggleHelp),
        KeyCode::Char('p') => Msg::Ui(UiMsg::TogglePreview),
        KeyCode::Char('g') => Msg::Nav(NavMsg::CycleView),
        KeyCode::Char('f') => Msg::Filter(FilterMsg::Open),
        KeyCode::Char('n') => Msg::Create(CreateMsg::Open),
        KeyCode::Char('c') => Msg::Nav(NavMsg::CopySelected),
        KeyCode::Char(' ') => Msg::Nav(NavMsg::PinPreview),
        KeyCode::Char('/') => Msg::Search(SearchMsg::ClearFilters),
        KeyCode::Char(ch @ '1'..='4') => {
            if model.nav.mode != ViewMode::Table {
                return None;
            }
            Msg::Table(TableMsg::SortBy(SortKey::from_digit(ch)?))
        }
        KeyCode::Char(ch) => Msg::search_char(ch),
        _ => return None,
    };
    Some(msg)
}

fn filter_key(key: KeyEvent) -> Option<Msg> {
    let msg = match key.code {
        KeyCode::Up | KeyCode::Char('k') => FilterMsg::CursorUp,
        KeyCode::Down | KeyCode::Char('j') => FilterMsg::CursorDown,
        KeyCode::Enter | KeyCode::Char(' ') => FilterMsg::Toggle,
        KeyCode::Char('a') => FilterMsg::SelectAll,
        KeyCode::Char('c') => FilterMsg::ClearAll,
        KeyCode::Char('q') => return Some(Msg::App(AppMsg::Quit)),
        KeyCode::Char('?') => return Some(Msg::Ui(UiMsg::ToggleHelp)),
        _ => return None,
    };
    Some(Msg::Filter(msg))
}

fn create_key(model: &AppModel, key: KeyEvent, ctrl: bool) -> Option<Msg> {
    let on_category = model.ui.create.field == CreateField::Category;
    let msg = match key.code {
        KeyCode::Char('s') if ctrl => CreateMsg::Submit,
        KeyCode::Enter if ctrl => CreateMsg::Submit,
        KeyCode::Tab => CreateMsg::NextField,
        KeyCode::BackTab => CreateMsg::PrevField,
        KeyCode::Enter => CreateMsg::InsertNewline,
        KeyCode::Backspace => CreateMsg::DeleteBackward,
        KeyCode::Up => CreateMsg::CategoryPrev,
        KeyCode::Down => CreateMsg::CategoryNext,
        KeyCode::Char('k') if on_category => CreateMsg::CategoryPrev,
        KeyCode::Char('j') if on_category => CreateMsg::CategoryNext,
        KeyCode::Char(_) if ctrl => return None,
        KeyCode::Char(ch) => CreateMsg::InsertChar(ch),
        _ => return None,
    };
    Some(Msg::Create(msg))
}

/// With the template form open, letters fill the form; Ctrl-T still toggles it
fn detail_key(model: &AppModel, key: KeyEvent, ctrl: bool) -> Option<Msg> {
    let detail = &model.ui.detail;
    let typing = detail.show_form && !detail.variables.is_empty();
    let msg = match key.code {
        KeyCode::Up => DetailMsg::Scroll(-1),
        KeyCode::Down => DetailMsg::Scroll(1),
        KeyCode::PageUp => DetailMsg::PageUp,
        KeyCode::PageDown => DetailMsg::PageDown,
        KeyCode::Tab => DetailMsg::NextField,
        KeyCode::BackTab => DetailMsg::PrevField,
        KeyCode::Enter => DetailMsg::Copy,
        KeyCode::Backspace => DetailMsg::DeleteBackward,
        KeyCode::Char('t') if ctrl => DetailMsg::ToggleTemplateForm,
        KeyCode::Char(_) if ctrl => return None,
        KeyCode::Char(ch) if typing => DetailMsg::InsertChar(ch),
        KeyCode::Char('k') => DetailMsg::Scroll(-1),
        KeyCode::Char('j') => DetailMsg::Scroll(1),
        KeyCode::Char('t') => DetailMsg::ToggleTemplateForm,
        KeyCode::Char('c') => DetailMsg::Copy,
        KeyCode::Char('q') => return Some(Msg::App(AppMsg::Quit)),
        KeyCode::Char('?') => return Some(Msg::Ui(UiMsg::ToggleHelp)),
        _ => return None,
    };
    Some(Msg::Detail(msg))
}

/// Map a mouse event; only left release and the wheel matter
pub fn mouse_to_msg(event: MouseEvent, at: Instant) -> Option<Msg> {
    let kind = match event.kind {
        MouseEventKind::Up(MouseButton::Left) => PointerKind::LeftRelease,
        MouseEventKind::ScrollUp => PointerKind::WheelUp,
        MouseEventKind::ScrollDown => PointerKind::WheelDown,
        _ => return None,
    };
    Some(Msg::Pointer(PointerEvent {
        kind,
        column: event.column as usize,
        row: event.row as usize,
        at,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn model() -> AppModel {
        let mut m = AppModel::new(AppConfig::default(), 80, 24);
        m.ui.is_loading = false;
        m
    }

    #[test]
    fn test_q_quits_in_browse_but_types_in_create() {
        let mut m = model();
        assert!(matches!(
            key_to_msg(&m, key(KeyCode::Char('q'))),
            Some(Msg::App(AppMsg::Quit))
        ));
        m.nav.set_mode(ViewMode::CardCreate);
        assert!(matches!(
            key_to_msg(&m, key(KeyCode::Char('q'))),
            Some(Msg::Create(CreateMsg::InsertChar('q')))
        ));
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let mut m = model();
        m.ui.error = Some("boom".into());
        let ev = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(matches!(key_to_msg(&m, ev), Some(Msg::App(AppMsg::Quit))));
        assert!(key_to_msg(&m, key(KeyCode::Down)).is_none());
    }

    #[test]
    fn test_unbound_letters_go_to_search() {
        let m = model();
        assert!(matches!(
            key_to_msg(&m, key(KeyCode::Char('x'))),
            Some(Msg::Search(SearchMsg::InsertChar('x')))
        ));
    }

    #[test]
    fn test_sort_digits_only_in_table() {
        let mut m = model();
        assert!(key_to_msg(&m, key(KeyCode::Char('2'))).is_none());
        m.nav.set_mode(ViewMode::Table);
        assert!(matches!(
            key_to_msg(&m, key(KeyCode::Char('2'))),
            Some(Msg::Table(TableMsg::SortBy(SortKey::Category)))
        ));
    }

    #[test]
    fn test_detail_form_captures_letters() {
        let mut m = model();
        m.nav.set_mode(ViewMode::Detail);
        assert!(matches!(
            key_to_msg(&m, key(KeyCode::Char('t'))),
            Some(Msg::Detail(DetailMsg::ToggleTemplateForm))
        ));
        m.ui.detail.open("c1", vec!["port".into()]);
        assert!(matches!(
            key_to_msg(&m, key(KeyCode::Char('t'))),
            Some(Msg::Detail(DetailMsg::InsertChar('t')))
        ));
    }

    #[test]
    fn test_mouse_release_maps_to_pointer() {
        let at = Instant::now();
        let ev = MouseEvent {
            kind: MouseEventKind::Up(MouseButton::Left),
            column: 4,
            row: 7,
            modifiers: KeyModifiers::NONE,
        };
        match mouse_to_msg(ev, at) {
            Some(Msg::Pointer(p)) => {
                assert_eq!(p.kind, PointerKind::LeftRelease);
                assert_eq!((p.column, p.row), (4, 7));
            }
            other => panic!("unexpected {:?}", other),
        }
        let down = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            ..ev
        };
        assert!(mouse_to_msg(down, at).is_none());
    }
}
