use crate::app::action::Action;
use crate::config::AppConfig;
use crate::store::{AnimalId, Store, StoreAction};
use crate::ui::layout;
use chrono::Local;
use std::fmt::Write;
use ratatui::layout::Rect;
use std::time::{Duration, Instant};

/// Cursor-aware editing over a single line of text.
///
/// The text itself lives in the store's form; the handler builds a
/// `TextEdit` from it, applies one edit and dispatches the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub text: String,
    pub cursor: usize,
}

impl TextEdit {
    /// `cursor` is clamped to the text and snapped back to a char boundary.
    pub fn new(text: String, cursor: usize) -> Self {
        let mut cursor = cursor.min(text.len());
        while !text.is_char_boundary(cursor) {
            cursor -= 1;
        }
        Self { text, cursor }
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut pos = self.cursor;
        // Skip trailing whitespace
        while pos > 0 && self.text.as_bytes().get(pos - 1) == Some(&b' ') {
            pos -= 1;
        }
        // Skip word characters
        while pos > 0 && self.text.as_bytes().get(pos - 1) != Some(&b' ') {
            pos -= 1;
        }
        self.text.drain(pos..self.cursor);
        self.cursor = pos;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPanel {
    Name,
    Type,
    Submit,
    List,
}

impl FocusPanel {
    pub fn next(self) -> Self {
        match self {
            FocusPanel::Name => FocusPanel::Type,
            FocusPanel::Type => FocusPanel::Submit,
            FocusPanel::Submit => FocusPanel::List,
            FocusPanel::List => FocusPanel::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FocusPanel::Name => FocusPanel::List,
            FocusPanel::Type => FocusPanel::Name,
            FocusPanel::Submit => FocusPanel::Type,
            FocusPanel::List => FocusPanel::Submit,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FocusPanel::Name => "NAME",
            FocusPanel::Type => "TYPE",
            FocusPanel::Submit => "SUBMIT",
            FocusPanel::List => "LIST",
        }
    }
}

/// Upper bound on `status_timeout_secs`, one year.
const MAX_STATUS_TIMEOUT_SECS: u64 = 365 * 24 * 60 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub timestamp: String,
    pub text: String,
    pub kind: StatusKind,
    pub expires_at: Instant,
}

pub struct AppState {
    pub config: AppConfig,
    pub store: Store,
    pub focus: FocusPanel,
    /// Byte offset of the cursor in the form's name field.
    pub name_cursor: usize,
    /// Selected list row, tracked by id so it survives re-sorting.
    pub selected: Option<AnimalId>,
    /// First ranked row shown in the list panel.
    pub list_offset: usize,
    /// Last known terminal size, used for mouse hit testing.
    pub viewport: Rect,
    pub status_message: Option<StatusMessage>,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            store: Store::new(),
            focus: FocusPanel::Name,
            name_cursor: 0,
            selected: None,
            list_offset: 0,
            viewport: Rect::default(),
            status_message: None,
            should_quit: false,
            dirty: true,
        }
    }

    /// Editor over the current form name at the current cursor.
    pub fn name_edit(&self) -> TextEdit {
        TextEdit::new(self.store.form().name.clone(), self.name_cursor)
    }

    pub fn set_focus(&mut self, focus: FocusPanel) {
        self.focus = focus;
        if focus == FocusPanel::List && self.selected_index().is_none() {
            self.select_first();
        }
        self.dirty = true;
    }

    pub fn cycle_focus(&mut self) {
        self.set_focus(self.focus.next());
    }

    pub fn cycle_focus_back(&mut self) {
        self.set_focus(self.focus.prev());
    }

    /// Position of the selected animal in the ranked view.
    pub fn selected_index(&self) -> Option<usize> {
        let id = self.selected.as_ref()?;
        self.store.ranked().iter().position(|a| &a.id == id)
    }

    fn select_at(&mut self, index: usize) {
        self.selected = self.store.ranked().get(index).map(|a| a.id.clone());
        self.ensure_selected_visible();
        self.dirty = true;
    }

    /// Rows available to the list panel at the current viewport size.
    pub fn list_height(&self) -> usize {
        let app_layout = layout::compute_layout(self.viewport, self.config.ui.show_checker);
        layout::panel_inner(app_layout.animal_list).height as usize
    }

    /// Scroll the list so the selected row is on screen.
    pub fn ensure_selected_visible(&mut self) {
        let height = self.list_height().max(1);
        if let Some(i) = self.selected_index() {
            if i < self.list_offset {
                self.list_offset = i;
            } else if i >= self.list_offset + height {
                self.list_offset = i + 1 - height;
            }
        }
        let max_offset = self.store.animals().len().saturating_sub(height);
        self.list_offset = self.list_offset.min(max_offset);
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport = Rect::new(0, 0, width, height);
        self.ensure_selected_visible();
        self.dirty = true;
    }

    pub fn select_first(&mut self) {
        self.select_at(0);
    }

    pub fn select_last(&mut self) {
        let len = self.store.animals().len();
        if len > 0 {
            self.select_at(len - 1);
        }
    }

    pub fn select_next(&mut self) {
        let len = self.store.animals().len();
        match self.selected_index() {
            Some(i) if i + 1 < len => self.select_at(i + 1),
            Some(_) => {}
            None => self.select_first(),
        }
    }

    pub fn select_prev(&mut self) {
        match self.selected_index() {
            Some(i) if i > 0 => self.select_at(i - 1),
            Some(_) => {}
            None => self.select_first(),
        }
    }

    fn set_status(&mut self, kind: StatusKind, text: String) {
        let timeout = Duration::from_secs(
            self.config
                .ui
                .status_timeout_secs
                .min(MAX_STATUS_TIMEOUT_SECS),
        );
        let now = Local::now();
        // A bad format string in the config must not take the UI down.
        let mut timestamp = String::new();
        if write!(timestamp, "{}", now.format(&self.config.ui.timestamp_format)).is_err() {
            timestamp = now.format("%H:%M:%S").to_string();
        }
        self.status_message = Some(StatusMessage {
            timestamp,
            text,
            kind,
            expires_at: Instant::now()
                .checked_add(timeout)
                .unwrap_or_else(Instant::now),
        });
        self.dirty = true;
    }

    pub fn info_status(&mut self, text: String) {
        self.set_status(StatusKind::Info, text);
    }

    pub fn error_status(&mut self, text: String) {
        self.set_status(StatusKind::Error, text);
    }

    /// Drop the status message once it has expired.
    pub fn expire_status(&mut self, now: Instant) {
        if self
            .status_message
            .as_ref()
            .is_some_and(|m| now >= m.expires_at)
        {
            self.status_message = None;
            self.dirty = true;
        }
    }

    pub fn status_line(&self) -> String {
        if let Some(ref msg) = self.status_message {
            return format!("[{}] {}", msg.timestamp, msg.text);
        }
        format!(
            "Animals: {} | Votes: {}",
            self.store.animals().len(),
            self.store.state().total_votes()
        )
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Store(store_action) => self.apply_store(store_action),
            Action::Quit => {
                tracing::info!("quit requested");
                self.should_quit = true;
            }
        }
    }

    fn apply_store(&mut self, action: StoreAction) {
        let voted = match &action {
            StoreAction::IncreaseVotes(id) => Some(id.clone()),
            _ => None,
        };
        let adding = matches!(action, StoreAction::AddAnimal(_));
        let version = self.store.version();

        match self.store.dispatch(action) {
            Ok(()) => {
                if adding {
                    if let Some(animal) = self.store.animals().last() {
                        tracing::info!(id = %animal.id, name = %animal.name, kind = %animal.kind, "animal added");
                        let text = format!("Added {} the {}", display_name(&animal.name), animal.kind);
                        self.info_status(text);
                    }
                }
                if let Some(animal) = voted.as_ref().and_then(|id| self.store.animal(id)) {
                    let text = format!("+1 for {} ({} votes)", display_name(&animal.name), animal.votes);
                    self.info_status(text);
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "store action rejected");
                self.error_status(format!("Rejected: {}", e));
            }
        }
        if self.store.version() != version {
            self.name_cursor = self.name_cursor.min(self.store.form().name.len());
            self.ensure_selected_visible();
            self.dirty = true;
        }
    }
}

/// Name for status messages; empty names are legal.
fn display_name(name: &str) -> &str {
    if name.is_empty() {
        "(unnamed)"
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{AnimalType, UnsavedAnimal};

    fn add(state: &mut AppState, name: &str, kind: AnimalType) {
        state.apply(Action::Store(StoreAction::AddAnimal(UnsavedAnimal::new(name, kind))));
    }

    fn vote(state: &mut AppState, id: &str) {
        state.apply(Action::Store(StoreAction::IncreaseVotes(AnimalId::new(id))));
    }

    #[test]
    fn test_text_edit_basic() {
        let mut edit = TextEdit::new(String::new(), 0);
        for c in "Bruno".chars() {
            edit.insert_char(c);
        }
        assert_eq!(edit.text, "Bruno");
        edit.move_left();
        edit.delete_back();
        assert_eq!(edit.text, "Bruo");
        assert_eq!(edit.cursor, 3);
        edit.move_home();
        edit.delete_forward();
        assert_eq!(edit.text, "ruo");
        edit.move_end();
        assert_eq!(edit.cursor, 3);
    }

    #[test]
    fn test_text_edit_multibyte() {
        let mut edit = TextEdit::new("Zoë".to_string(), 99);
        assert_eq!(edit.cursor, "Zoë".len());
        edit.delete_back();
        assert_eq!(edit.text, "Zo");
        // A cursor inside a multibyte char snaps back to its start.
        let edit = TextEdit::new("ë".to_string(), 1);
        assert_eq!(edit.cursor, 0);
    }

    #[test]
    fn test_text_edit_delete_word_back() {
        let mut edit = TextEdit::new("Grizzly bear  ".to_string(), 14);
        edit.delete_word_back();
        assert_eq!(edit.text, "Grizzly ");
        edit.delete_word_back();
        assert_eq!(edit.text, "");
    }

    #[test]
    fn test_focus_cycle() {
        let mut state = AppState::new(AppConfig::default());
        assert_eq!(state.focus, FocusPanel::Name);
        state.cycle_focus();
        state.cycle_focus();
        state.cycle_focus();
        assert_eq!(state.focus, FocusPanel::List);
        state.cycle_focus();
        assert_eq!(state.focus, FocusPanel::Name);
        state.cycle_focus_back();
        assert_eq!(state.focus, FocusPanel::List);
    }

    #[test]
    fn test_selection_follows_animal_across_resort() {
        let mut state = AppState::new(AppConfig::default());
        add(&mut state, "a", AnimalType::Bear);
        add(&mut state, "b", AnimalType::Tiger);
        state.set_focus(FocusPanel::List);
        state.select_next();
        assert_eq!(state.selected, Some(AnimalId::new("2")));
        assert_eq!(state.selected_index(), Some(1));

        vote(&mut state, "2");
        assert_eq!(state.selected, Some(AnimalId::new("2")));
        assert_eq!(state.selected_index(), Some(0));
    }

    #[test]
    fn test_select_bounds() {
        let mut state = AppState::new(AppConfig::default());
        state.select_next();
        assert_eq!(state.selected, None);

        add(&mut state, "a", AnimalType::Bear);
        add(&mut state, "b", AnimalType::Bear);
        state.select_prev();
        assert_eq!(state.selected_index(), Some(0));
        state.select_prev();
        assert_eq!(state.selected_index(), Some(0));
        state.select_last();
        assert_eq!(state.selected_index(), Some(1));
        state.select_next();
        assert_eq!(state.selected_index(), Some(1));
    }

    #[test]
    fn test_unknown_vote_sets_error_status() {
        let mut state = AppState::new(AppConfig::default());
        add(&mut state, "a", AnimalType::Bear);
        vote(&mut state, "9");
        let msg = state.status_message.as_ref().unwrap();
        assert_eq!(msg.kind, StatusKind::Error);
        assert!(msg.text.contains("no animal with id 9"));
        assert_eq!(state.store.animals()[0].votes, 0);
    }

    #[test]
    fn test_status_line_totals_and_expiry() {
        let mut state = AppState::new(AppConfig::default());
        add(&mut state, "a", AnimalType::Bear);
        vote(&mut state, "1");
        vote(&mut state, "1");
        assert!(state.status_line().contains("+1 for a (2 votes)"));

        state.expire_status(Instant::now() + Duration::from_secs(60));
        assert!(state.status_message.is_none());
        assert_eq!(state.status_line(), "Animals: 1 | Votes: 2");
    }

    #[test]
    fn test_huge_status_timeout_is_clamped() {
        let mut config = AppConfig::default();
        config.ui.status_timeout_secs = u64::MAX;
        let mut state = AppState::new(config);
        add(&mut state, "a", AnimalType::Bear);

        let msg = state.status_message.as_ref().unwrap();
        assert!(msg.text.contains("Added a the bear"));
        state.expire_status(Instant::now() + Duration::from_secs(3600));
        assert!(state.status_message.is_some());
    }

    #[test]
    fn test_bad_timestamp_format_falls_back() {
        let mut config = AppConfig::default();
        config.ui.timestamp_format = "%Q %".to_string();
        let mut state = AppState::new(config);
        add(&mut state, "a", AnimalType::Bear);

        let msg = state.status_message.as_ref().unwrap();
        assert_eq!(msg.timestamp.len(), 8);
        assert_eq!(msg.timestamp.matches(':').count(), 2);
        assert!(state.status_line().starts_with(&format!("[{}] Added a", msg.timestamp)));
    }

    #[test]
    fn test_add_resets_name_cursor() {
        let mut state = AppState::new(AppConfig::default());
        state.apply(Action::Store(StoreAction::SetName("Bruno".into())));
        state.name_cursor = 5;
        let unsaved = state.store.form().to_unsaved();
        state.apply(Action::Store(StoreAction::AddAnimal(unsaved)));
        assert_eq!(state.name_cursor, 0);
        assert!(state.status_line().contains("Added Bruno the bear"));
    }

    #[test]
    fn test_list_scrolls_to_selection() {
        let mut state = AppState::new(AppConfig::default());
        // 24 rows leave 12 list rows with the checker shown.
        state.resize(80, 24);
        assert_eq!(state.list_height(), 12);
        for i in 0..20 {
            add(&mut state, &format!("animal{}", i), AnimalType::Bear);
        }
        state.set_focus(FocusPanel::List);
        state.select_last();
        assert_eq!(state.list_offset, 8);
        state.select_first();
        assert_eq!(state.list_offset, 0);

        state.resize(80, 40);
        state.select_last();
        assert_eq!(state.list_offset, 0);
    }

    #[test]
    fn test_quit() {
        let mut state = AppState::new(AppConfig::default());
        state.apply(Action::Quit);
        assert!(state.should_quit);
    }
}
