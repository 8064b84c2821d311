use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::db::store::{ColumnSpec, FieldKind};

/// One generic input form driven by the same column specs the record store
/// validates with. Every panel builds its forms from this type instead of
/// carrying a bespoke struct per feature.
pub(crate) struct Form {
    columns: &'static [ColumnSpec],
    values: Vec<String>,
    seeds: Vec<String>,
    active: usize,
    pub(crate) error: Option<String>,
}

impl Form {
    pub(crate) fn new(columns: &'static [ColumnSpec]) -> Self {
        Self {
            columns,
            values: vec![String::new(); columns.len()],
            seeds: vec![String::new(); columns.len()],
            active: 0,
            error: None,
        }
    }

    /// Pre-fill one field and remember the value so [`Form::clear`] restores
    /// it after a successful submit.
    pub(crate) fn seed(&mut self, index: usize, value: String) {
        self.values[index] = value.clone();
        self.seeds[index] = value;
    }

    pub(crate) fn len(&self) -> usize {
        self.columns.len()
    }

    pub(crate) fn active(&self) -> usize {
        self.active
    }

    pub(crate) fn focus_first(&mut self) {
        self.active = 0;
    }

    pub(crate) fn focus_last(&mut self) {
        self.active = self.columns.len().saturating_sub(1);
    }

    /// Advance focus to the next field; returns false when focus would fall
    /// off the end, letting the panel move on to its next section.
    pub(crate) fn next_field(&mut self) -> bool {
        if self.active + 1 < self.columns.len() {
            self.active += 1;
            true
        } else {
            false
        }
    }

    /// Mirror of [`Form::next_field`] for backwards traversal.
    pub(crate) fn prev_field(&mut self) -> bool {
        if self.active > 0 {
            self.active -= 1;
            true
        } else {
            false
        }
    }

    /// Append a character to the active field. Numeric fields admit digits
    /// plus `-` and `.` so signed and fractional input reaches the parser;
    /// parse-ability at submit time remains the only real check.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        let accepted = match self.columns[self.active].kind {
            FieldKind::Text => !ch.is_control(),
            FieldKind::Integer => ch.is_ascii_digit() || ch == '-',
            FieldKind::Real => ch.is_ascii_digit() || ch == '-' || ch == '.',
        };
        if accepted {
            self.values[self.active].push(ch);
            self.error = None;
        }
        accepted
    }

    pub(crate) fn backspace(&mut self) {
        self.values[self.active].pop();
        self.error = None;
    }

    pub(crate) fn values(&self) -> Vec<&str> {
        self.values.iter().map(String::as_str).collect()
    }

    /// Reset to the seeded state after a successful submit.
    pub(crate) fn clear(&mut self) {
        self.values = self.seeds.clone();
        self.active = 0;
        self.error = None;
    }

    /// Render a single labelled field line. `focused` tells the form whether
    /// the panel currently owns the keyboard, so the active highlight does not
    /// linger while the user is back in the sidebar.
    pub(crate) fn build_line(&self, index: usize, focused: bool) -> Line<'static> {
        let column = &self.columns[index];
        let value = &self.values[index];
        let is_active = focused && index == self.active;

        let placeholder = if column.required {
            "<required>"
        } else {
            "<optional>"
        };
        let display = if value.is_empty() {
            placeholder.to_string()
        } else {
            value.clone()
        };

        let style = if is_active {
            Style::default().fg(Color::Yellow)
        } else if value.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        Line::from(vec![
            Span::raw(format!("{}: ", column.label)),
            Span::styled(display, style),
        ])
    }

    /// Character count of the active field, used for cursor placement.
    pub(crate) fn active_value_len(&self) -> usize {
        self.values[self.active].chars().count()
    }

    /// Label prefix width of the active field, used for cursor placement.
    pub(crate) fn active_label_len(&self) -> usize {
        self.columns[self.active].label.chars().count() + 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELDS: &[ColumnSpec] = &[
        ColumnSpec {
            column: "name",
            label: "Name",
            kind: FieldKind::Text,
            required: true,
        },
        ColumnSpec {
            column: "quantity",
            label: "Quantity",
            kind: FieldKind::Integer,
            required: true,
        },
    ];

    #[test]
    fn integer_field_rejects_letters_but_admits_minus() {
        let mut form = Form::new(FIELDS);
        assert!(form.next_field());
        assert!(!form.push_char('x'));
        assert!(form.push_char('-'));
        assert!(form.push_char('5'));
        assert_eq!(form.values()[1], "-5");
    }

    #[test]
    fn text_field_rejects_control_characters() {
        let mut form = Form::new(FIELDS);
        assert!(!form.push_char('\t'));
        assert!(form.push_char('A'));
        assert_eq!(form.values()[0], "A");
    }

    #[test]
    fn clear_restores_seeded_values() {
        let mut form = Form::new(FIELDS);
        form.seed(1, "30".to_string());
        form.push_char('B');
        assert!(form.next_field());
        form.backspace();
        form.clear();
        assert_eq!(form.values(), vec!["", "30"]);
        assert_eq!(form.active(), 0);
    }

    #[test]
    fn focus_stops_at_both_ends() {
        let mut form = Form::new(FIELDS);
        assert!(!form.prev_field());
        assert!(form.next_field());
        assert!(!form.next_field());
        assert_eq!(form.active(), 1);
    }

    #[test]
    fn editing_clears_a_stale_error() {
        let mut form = Form::new(FIELDS);
        form.error = Some("Name is required.".to_string());
        form.push_char('A');
        assert!(form.error.is_none());
    }
}
