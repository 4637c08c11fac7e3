use crate::app::state::*;
use crate::store::AnimalType;
use crate::ui::layout::{self, SUBMIT_LABEL};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = matches!(
        state.focus,
        FocusPanel::Name | FocusPanel::Type | FocusPanel::Submit
    );
    let (border_style, border_type) = if focused {
        (Theme::border_focused(), Theme::border_type_focused())
    } else {
        (Theme::border(), Theme::border_type())
    };

    let block = Block::default()
        .title(" Add animal ")
        .title_style(if focused { Theme::title() } else { Theme::border() })
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .padding(Padding::horizontal(1));
    frame.render_widget(block, area);

    let form = state.store.form();
    let regions = layout::compute_form_layout(area);

    // Name
    frame.render_widget(
        Paragraph::new(Span::styled("Name:", Theme::label())),
        regions.name_label,
    );
    let name_focused = state.focus == FocusPanel::Name;
    let name_style = if name_focused {
        Theme::input_focused()
    } else {
        Theme::input_text()
    };
    let edit = state.name_edit();
    let field_width = regions.name_input.width as usize;
    let (visible, offset) = name_window(&edit.text, edit.cursor, field_width);
    frame.render_widget(
        Paragraph::new(Span::styled(visible, name_style)),
        regions.name_input,
    );
    if name_focused && field_width > 0 {
        let cursor_x = regions
            .name_input
            .x
            .saturating_add(offset as u16)
            .min(regions.name_input.right() - 1);
        frame.set_cursor_position((cursor_x, regions.name_input.y));
    }

    // Type
    frame.render_widget(
        Paragraph::new(Span::styled("Type:", Theme::label())),
        regions.type_label,
    );
    let type_focused = state.focus == FocusPanel::Type;
    for (rect, kind) in regions.type_options.iter().zip(AnimalType::ALL) {
        let style = match (kind == form.kind, type_focused) {
            (true, true) => Theme::option_chosen_focused(),
            (true, false) => Theme::option_chosen(),
            _ => Theme::option(),
        };
        frame.render_widget(
            Paragraph::new(Span::styled(layout::option_label(kind), style)),
            *rect,
        );
    }

    // Submit
    let button_style = if state.focus == FocusPanel::Submit {
        Theme::button_focused()
    } else {
        Theme::button()
    };
    frame.render_widget(
        Paragraph::new(Span::styled(SUBMIT_LABEL, button_style)),
        regions.submit,
    );
}

/// Slice of `text` to draw in a field `width` columns wide, scrolled so
/// the cursor stays inside it, and the cursor column within that slice.
pub fn name_window(text: &str, cursor: usize, width: usize) -> (&str, usize) {
    let start = text[..cursor]
        .char_indices()
        .map(|(i, _)| i)
        .find(|&i| text[i..cursor].width() < width)
        .unwrap_or(cursor);
    (&text[start..], text[start..cursor].width())
}
