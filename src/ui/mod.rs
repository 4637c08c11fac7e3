mod animal_list;
mod checker;
mod form;
pub mod layout;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use theme::Theme;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area, state.config.ui.show_checker);

    render_title_bar(frame, app_layout.title_bar, state);
    form::render(frame, app_layout.form, state);
    if let Some(checker_area) = app_layout.checker {
        checker::render(frame, checker_area, state);
    }
    animal_list::render(frame, app_layout.animal_list, state);
    status_bar::render(frame, app_layout.status_bar, state);
}

fn render_title_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let line = Line::from(vec![
        Span::styled(format!(" {} ", state.config.ui.title), Theme::title_bar()),
        Span::styled(
            " Tab: next field  Enter: submit/vote  Esc: quit",
            Theme::hint(),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::action::Action;
    use crate::app::state::FocusPanel;
    use crate::config::AppConfig;
    use crate::store::{AnimalId, AnimalType, StoreAction, UnsavedAnimal};
    use ratatui::backend::TestBackend;

    fn screen(state: &AppState) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    fn line_of(lines: &[String], needle: &str) -> usize {
        lines
            .iter()
            .position(|l| l.contains(needle))
            .unwrap_or_else(|| panic!("{:?} not on screen:\n{}", needle, lines.join("\n")))
    }

    fn add(state: &mut AppState, name: &str, kind: AnimalType) {
        state.apply(Action::Store(StoreAction::AddAnimal(UnsavedAnimal::new(name, kind))));
    }

    #[test]
    fn test_renders_list_in_vote_order() {
        let mut state = AppState::new(AppConfig::default());
        add(&mut state, "Three", AnimalType::Bear);
        add(&mut state, "Five", AnimalType::Tiger);
        for _ in 0..3 {
            state.apply(Action::Store(StoreAction::IncreaseVotes(AnimalId::new("1"))));
        }
        for _ in 0..5 {
            state.apply(Action::Store(StoreAction::IncreaseVotes(AnimalId::new("2"))));
        }

        let lines = screen(&state);
        let five = line_of(&lines, "Five (tiger) (5++)");
        let three = line_of(&lines, "Three (bear) (3++)");
        assert!(five < three);
        line_of(&lines, "Animals (2)");
    }

    #[test]
    fn test_renders_form_and_checker() {
        let mut state = AppState::new(AppConfig::default());
        state.apply(Action::Store(StoreAction::SetName("Bruno".into())));
        state.apply(Action::Store(StoreAction::SetType(AnimalType::Camel)));

        let lines = screen(&state);
        line_of(&lines, "Animal Tracker");
        let name_row = line_of(&lines, "Name:");
        assert!(lines[name_row].contains("Bruno"));
        line_of(&lines, "[ Bear ] [ Tiger ] [ Camel ]");
        line_of(&lines, "[ Submit ]");
        line_of(&lines, "Adding animal: [Bruno] [camel]");
        line_of(&lines, "No animals yet.");
        line_of(&lines, "[NAME]");
    }

    #[test]
    fn test_long_name_shows_its_tail() {
        let mut state = AppState::new(AppConfig::default());
        let name = format!("{}TAIL", "a".repeat(120));
        state.apply(Action::Store(StoreAction::SetName(name.clone())));
        state.name_cursor = name.len();

        let lines = screen(&state);
        let name_row = line_of(&lines, "Name:");
        assert!(lines[name_row].contains("aaaaTAIL"));
    }

    #[test]
    fn test_checker_can_be_hidden() {
        let mut config = AppConfig::default();
        config.ui.show_checker = false;
        let state = AppState::new(config);
        let lines = screen(&state);
        assert!(!lines.iter().any(|l| l.contains("Adding animal:")));
    }

    #[test]
    fn test_status_bar_shows_focus_and_totals() {
        let mut state = AppState::new(AppConfig::default());
        add(&mut state, "a", AnimalType::Bear);
        state.status_message = None;
        state.set_focus(FocusPanel::List);
        let lines = screen(&state);
        let last = lines.last().unwrap();
        assert!(last.contains("Animals: 1 | Votes: 0"));
        assert!(last.contains("[LIST]"));
    }
}
