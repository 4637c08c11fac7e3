//! Read-only echo of the form, updated on every keystroke.

use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .padding(Padding::horizontal(1));

    let form = state.store.form();
    let line = Line::from(vec![
        Span::styled("Adding animal: ", Theme::title()),
        Span::styled("[", Theme::hint()),
        Span::styled(form.name.as_str(), Theme::checker_value()),
        Span::styled("] [", Theme::hint()),
        Span::styled(form.kind.as_str(), Theme::checker_value()),
        Span::styled("]", Theme::hint()),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}
