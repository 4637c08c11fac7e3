use crate::app::state::*;
use crate::store::Animal;
use crate::ui::layout;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// One list row: `Bruno (bear) (3++)`.
pub fn row_spans(animal: &Animal) -> Vec<Span<'_>> {
    vec![
        Span::styled(" ", Style::default()),
        Span::styled(animal.name.as_str(), Theme::animal_name()),
        Span::styled(format!(" ({})", animal.kind), Theme::animal_kind()),
        Span::styled(format!(" ({}++)", animal.votes), Theme::votes()),
    ]
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::List;
    let (border_style, border_type) = if focused {
        (Theme::border_focused(), Theme::border_type_focused())
    } else {
        (Theme::border(), Theme::border_type())
    };

    let ranked = state.store.ranked();
    let title = if ranked.is_empty() {
        " Animals ".to_string()
    } else {
        format!(" Animals ({}) ", ranked.len())
    };

    let block = Block::default()
        .title(title)
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style);
    frame.render_widget(block, area);

    let inner = layout::panel_inner(area);
    if inner.height == 0 || inner.width == 0 {
        return;
    }

    if ranked.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                " No animals yet. Add one above.",
                Style::default().fg(Theme::TEXT_MUTED),
            )),
            inner,
        );
        return;
    }

    let start = state.list_offset.min(ranked.len().saturating_sub(1));
    for (row, animal) in ranked
        .iter()
        .skip(start)
        .take(inner.height as usize)
        .enumerate()
    {
        let row_area = Rect::new(inner.x, inner.y + row as u16, inner.width, 1);
        let is_selected = state.selected.as_ref() == Some(&animal.id);
        let style = match (is_selected, focused) {
            (true, true) => Theme::row_selected_focused(),
            (true, false) => Theme::row_selected(),
            _ => Style::default(),
        };
        let paragraph = Paragraph::new(Line::from(row_spans(animal))).style(style);
        frame.render_widget(paragraph, row_area);
    }
}
