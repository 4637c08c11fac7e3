use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::store::{AnimalType, StoreAction};
use crate::ui::layout;
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Position;
use std::time::Instant;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::Tick => {
            state.expire_status(Instant::now());
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind == KeyEventKind::Press => handle_key(state, key),
        CEvent::Mouse(mouse) => handle_mouse(state, mouse),
        CEvent::Resize(width, height) => {
            state.resize(width, height);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    match key.code {
        KeyCode::Tab => {
            state.cycle_focus();
            return vec![];
        }
        KeyCode::BackTab => {
            state.cycle_focus_back();
            return vec![];
        }
        KeyCode::Esc => {
            // Leaving the name field is the first step out
            if state.focus == FocusPanel::Name {
                state.set_focus(FocusPanel::List);
                return vec![];
            }
            return vec![Action::Quit];
        }
        _ => {}
    }

    match state.focus {
        FocusPanel::Name => handle_name_key(state, key),
        FocusPanel::Type => handle_type_key(state, key),
        FocusPanel::Submit => handle_submit_key(state, key),
        FocusPanel::List => handle_list_key(state, key),
    }
}

fn handle_name_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Enter => submit(state),
        KeyCode::Backspace => {
            if key.modifiers.contains(KeyModifiers::ALT) {
                edit_name(state, TextEdit::delete_word_back)
            } else {
                edit_name(state, TextEdit::delete_back)
            }
        }
        KeyCode::Delete => edit_name(state, TextEdit::delete_forward),
        KeyCode::Left => edit_name(state, TextEdit::move_left),
        KeyCode::Right => edit_name(state, TextEdit::move_right),
        KeyCode::Home => edit_name(state, TextEdit::move_home),
        KeyCode::End => edit_name(state, TextEdit::move_end),
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match c {
                    'a' => edit_name(state, TextEdit::move_home),
                    'e' => edit_name(state, TextEdit::move_end),
                    'w' => edit_name(state, TextEdit::delete_word_back),
                    'u' => edit_name(state, TextEdit::clear),
                    _ => vec![],
                }
            } else if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() {
                edit_name(state, |edit| edit.insert_char(c))
            } else {
                vec![]
            }
        }
        _ => vec![],
    }
}

/// Apply one edit to the form name; dispatch only if the text changed.
fn edit_name(state: &mut AppState, edit_fn: impl FnOnce(&mut TextEdit)) -> Vec<Action> {
    let mut edit = state.name_edit();
    edit_fn(&mut edit);
    state.name_cursor = edit.cursor;
    state.dirty = true;
    if edit.text == state.store.form().name {
        return vec![];
    }
    vec![Action::Store(StoreAction::SetName(edit.text))]
}

fn handle_type_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let current = state.store.form().kind;
    match key.code {
        KeyCode::Enter => submit(state),
        KeyCode::Left | KeyCode::Up => set_type(state, current.prev()),
        KeyCode::Right | KeyCode::Down | KeyCode::Char(' ') => set_type(state, current.next()),
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'b' => set_type(state, AnimalType::Bear),
            't' => set_type(state, AnimalType::Tiger),
            'c' => set_type(state, AnimalType::Camel),
            _ => vec![],
        },
        _ => vec![],
    }
}

fn set_type(state: &AppState, kind: AnimalType) -> Vec<Action> {
    if state.store.form().kind == kind {
        return vec![];
    }
    vec![Action::Store(StoreAction::SetType(kind))]
}

fn handle_submit_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => submit(state),
        _ => vec![],
    }
}

fn handle_list_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.select_prev();
            vec![]
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.select_next();
            vec![]
        }
        KeyCode::Home => {
            state.select_first();
            vec![]
        }
        KeyCode::End => {
            state.select_last();
            vec![]
        }
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('+') => vote_selected(state),
        KeyCode::Char('q') => vec![Action::Quit],
        _ => vec![],
    }
}

/// Add the animal currently in the form. The form resets in the store.
fn submit(state: &mut AppState) -> Vec<Action> {
    state.name_cursor = 0;
    let unsaved = state.store.form().to_unsaved();
    vec![Action::Store(StoreAction::AddAnimal(unsaved))]
}

fn vote_selected(state: &AppState) -> Vec<Action> {
    match state.selected.clone() {
        Some(id) => vec![Action::Store(StoreAction::IncreaseVotes(id))],
        None => vec![],
    }
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> Vec<Action> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return vec![];
    }
    let pos = Position::new(mouse.column, mouse.row);
    let app_layout = layout::compute_layout(state.viewport, state.config.ui.show_checker);
    let form = layout::compute_form_layout(app_layout.form);

    if form.name_label.contains(pos) || form.name_input.contains(pos) {
        state.set_focus(FocusPanel::Name);
        state.name_cursor = state.store.form().name.len();
        return vec![];
    }
    for (rect, kind) in form.type_options.iter().zip(AnimalType::ALL) {
        if rect.contains(pos) {
            state.set_focus(FocusPanel::Type);
            return set_type(state, kind);
        }
    }
    if form.submit.contains(pos) {
        state.set_focus(FocusPanel::Submit);
        return submit(state);
    }

    let list = layout::panel_inner(app_layout.animal_list);
    if list.contains(pos) {
        let row = state.list_offset + (pos.y - list.y) as usize;
        let clicked = state.store.ranked().get(row).map(|a| a.id.clone());
        if let Some(id) = clicked {
            state.selected = Some(id.clone());
            state.set_focus(FocusPanel::List);
            return vec![Action::Store(StoreAction::IncreaseVotes(id))];
        }
    }
    vec![]
}
