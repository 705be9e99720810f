//! # EmptyState Component
//!
//! Shown in place of the list when the search matches nothing. Offers a
//! row of suggestion chips; Tab/Shift+Tab moves the highlight and Enter
//! replaces the query with the highlighted name.

use std::time::Duration;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::state::SUGGESTIONS;
use crate::tui::animation::float_bob;
use crate::tui::component::Component;
use crate::tui::theme::Theme;

pub struct EmptyState {
    /// Index into `SUGGESTIONS` of the highlighted chip.
    pub highlighted: usize,
    pub elapsed: Duration,
    pub theme: Theme,
}

impl EmptyState {
    pub fn new(highlighted: usize, elapsed: Duration, theme: Theme) -> Self {
        Self {
            highlighted,
            elapsed,
            theme,
        }
    }

    /// Rows above (negative) or below the resting line for each floating icon.
    fn float_offsets(&self) -> (i16, i16) {
        let first = float_bob(-10.0, 3000, 0).value_at(self.elapsed);
        let second = float_bob(10.0, 2500, 500).value_at(self.elapsed);
        ((first / 10.0).round() as i16, (second / 10.0).round() as i16)
    }

    fn icon_lines(&self) -> Vec<Line<'static>> {
        let theme = self.theme;
        let (first, second) = self.float_offsets();
        let left = Span::styled("◆", Style::default().fg(theme.blue));
        let right = Span::styled("●", Style::default().fg(theme.violet));
        let blank = || Span::raw(" ");

        // Three rows; the main icon sits on the middle one.
        (-1i16..=1)
            .map(|row| {
                let main = if row == 0 {
                    Span::styled("   ⌕   ", theme.dim().add_modifier(Modifier::BOLD))
                } else {
                    Span::styled("       ", theme.dim())
                };
                let l = if row == first { left.clone() } else { blank() };
                let r = if row == second { right.clone() } else { blank() };
                Line::from(vec![l, main, r]).centered()
            })
            .collect()
    }

    fn chips_line(&self) -> Line<'static> {
        let theme = self.theme;
        let highlighted = self.highlighted % SUGGESTIONS.len();
        let mut spans = Vec::with_capacity(SUGGESTIONS.len() * 2);
        for (i, name) in SUGGESTIONS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            let style = if i == highlighted {
                Style::default()
                    .fg(theme.accent_primary)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(theme.accent_primary)
            };
            spans.push(Span::styled(format!(" {name} "), style));
        }
        Line::from(spans).centered()
    }
}

impl Component for EmptyState {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let theme = self.theme;
        let [_, icons, _, text, _, suggestions] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(4),
        ])
        .areas(area);

        frame.render_widget(Paragraph::new(self.icon_lines()), icons);
        frame.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled("No countries found", theme.title())).centered(),
                Line::from(Span::styled(
                    "Try searching with a different term",
                    theme.muted(),
                ))
                .centered(),
            ]),
            text,
        );
        frame.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled("Suggestions:", theme.dim())).centered(),
                Line::default(),
                self.chips_line(),
                Line::from(Span::styled("Tab next · Enter search", theme.dim())).centered(),
            ]),
            suggestions,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::components::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_renders_message_and_suggestions() {
        let backend = TestBackend::new(60, 14);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| EmptyState::new(1, Duration::ZERO, Theme::dark()).render(f, f.area()))
            .unwrap();
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("No countries found"));
        assert!(text.contains("Try searching with a different term"));
        for name in SUGGESTIONS {
            assert!(text.contains(name), "missing suggestion {name}");
        }
    }

    #[test]
    fn test_float_offsets_move_and_return() {
        let theme = Theme::dark();
        assert_eq!(EmptyState::new(0, Duration::ZERO, theme).float_offsets(), (0, 0));
        let (first, _) = EmptyState::new(0, Duration::from_millis(3000), theme).float_offsets();
        assert_eq!(first, -1);
        let (_, second) = EmptyState::new(0, Duration::from_millis(3000), theme).float_offsets();
        assert_eq!(second, 1);
        let (first, _) = EmptyState::new(0, Duration::from_millis(6000), theme).float_offsets();
        assert_eq!(first, 0);
    }
}
