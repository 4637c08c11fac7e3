use crate::store::AnimalType;
use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};

/// Width of the `Name: ` / `Type: ` labels in the form.
pub const LABEL_WIDTH: u16 = 7;
pub const SUBMIT_LABEL: &str = "[ Submit ]";

pub struct AppLayout {
    pub title_bar: Rect,
    pub form: Rect,
    pub checker: Option<Rect>,
    pub animal_list: Rect,
    pub status_bar: Rect,
}

/// Clickable regions inside the form panel.
pub struct FormLayout {
    pub name_label: Rect,
    pub name_input: Rect,
    pub type_label: Rect,
    pub type_options: [Rect; 3],
    pub submit: Rect,
}

pub fn compute_layout(area: Rect, show_checker: bool) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                                  // Title bar
            Constraint::Length(5),                                  // Form
            Constraint::Length(if show_checker { 3 } else { 0 }),   // Checker
            Constraint::Min(3),                                     // Animal list
            Constraint::Length(1),                                  // Status bar
        ])
        .split(area);

    AppLayout {
        title_bar: chunks[0],
        form: chunks[1],
        checker: show_checker.then_some(chunks[2]),
        animal_list: chunks[3],
        status_bar: chunks[4],
    }
}

/// Content area of the form: inside the border plus one column of padding.
pub fn form_inner(form: Rect) -> Rect {
    form.inner(Margin::new(2, 1))
}

/// Content area of a bordered panel.
pub fn panel_inner(panel: Rect) -> Rect {
    panel.inner(Margin::new(1, 1))
}

pub fn option_label(kind: AnimalType) -> String {
    format!("[ {} ]", kind.label())
}

pub fn compute_form_layout(form: Rect) -> FormLayout {
    let inner = form_inner(form);
    let row = |offset: u16, x: u16, width: u16| {
        Rect::new(x, inner.y.saturating_add(offset), width, 1).intersection(inner)
    };
    let field_x = inner.x.saturating_add(LABEL_WIDTH);
    let field_width = inner.width.saturating_sub(LABEL_WIDTH);

    let mut type_options = [Rect::default(); 3];
    let mut x = field_x;
    for (slot, kind) in type_options.iter_mut().zip(AnimalType::ALL) {
        let width = option_label(kind).len() as u16;
        *slot = row(1, x, width);
        x = x.saturating_add(width + 1);
    }

    FormLayout {
        name_label: row(0, inner.x, LABEL_WIDTH),
        name_input: row(0, field_x, field_width),
        type_label: row(1, inner.x, LABEL_WIDTH),
        type_options,
        submit: row(2, field_x, SUBMIT_LABEL.len() as u16),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Position;

    #[test]
    fn test_layout_stacks_panels() {
        let l = compute_layout(Rect::new(0, 0, 80, 24), true);
        assert_eq!(l.title_bar, Rect::new(0, 0, 80, 1));
        assert_eq!(l.form, Rect::new(0, 1, 80, 5));
        assert_eq!(l.checker, Some(Rect::new(0, 6, 80, 3)));
        assert_eq!(l.animal_list, Rect::new(0, 9, 80, 14));
        assert_eq!(l.status_bar, Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn test_layout_without_checker() {
        let l = compute_layout(Rect::new(0, 0, 80, 24), false);
        assert_eq!(l.checker, None);
        assert_eq!(l.animal_list, Rect::new(0, 6, 80, 17));
    }

    #[test]
    fn test_form_regions_do_not_overlap() {
        let f = compute_form_layout(Rect::new(0, 1, 80, 5));
        assert_eq!(f.name_input.y, 2);
        assert_eq!(f.type_options[0].y, 3);
        assert_eq!(f.submit.y, 4);
        assert_eq!(f.type_options[0].x, 2 + LABEL_WIDTH);
        assert!(f.type_options[0].right() < f.type_options[1].x);
        assert!(f.type_options[1].right() < f.type_options[2].x);
        assert!(f.type_options[2].contains(Position::new(f.type_options[2].x, 3)));
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let l = compute_layout(Rect::new(0, 0, 5, 3), true);
        let f = compute_form_layout(l.form);
        assert!(f.submit.width <= l.form.width);
    }
}
