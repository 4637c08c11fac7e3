use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const ACCENT: Color = Color::Cyan;
    pub const TEXT_MUTED: Color = Color::DarkGray;

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT)
    }

    pub fn border_type() -> BorderType {
        BorderType::Plain
    }

    pub fn border_type_focused() -> BorderType {
        BorderType::Rounded
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn title_bar() -> Style {
        Style::default().fg(Self::ACCENT).add_modifier(Modifier::BOLD)
    }

    pub fn hint() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn label() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn input_focused() -> Style {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::UNDERLINED)
    }

    pub fn option() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn option_chosen() -> Style {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    }

    pub fn option_chosen_focused() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    pub fn button() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn button_focused() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn checker_value() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn animal_name() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn animal_kind() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn votes() -> Style {
        Style::default().fg(Color::Green)
    }

    pub fn row_selected() -> Style {
        Style::default().bg(Color::DarkGray)
    }

    pub fn row_selected_focused() -> Style {
        Style::default().bg(Color::Blue)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn status_error() -> Style {
        Style::default().fg(Color::Red).bg(Color::DarkGray)
    }
}
