//! # ErrorState Component
//!
//! Full-screen panel for a failed fetch: pulsing rings around an icon,
//! the message pair, the underlying error, and a retry button.
//!
//! The rings are drawn on a braille canvas. Each ring runs the same
//! scale/opacity timelines with a staggered delay (0, 400, 800 ms), so
//! they ripple outward one after another.

use std::time::Duration;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Circle};
use ratatui::widgets::{Paragraph, Wrap};

use crate::tui::animation::{error_ring_opacity, error_ring_scale};
use crate::tui::component::Component;
use crate::tui::theme::{Theme, rgb_of};

pub const DEFAULT_MESSAGE: &str = "Oops! Something went wrong";
pub const DEFAULT_SUBMESSAGE: &str = "Failed to load countries";
pub const DESCRIPTION: &str = "Please check your connection and try again";

const RING_DELAYS_MS: [u64; 3] = [0, 400, 800];
const RING_HEIGHT: u16 = 9;

pub struct ErrorState<'a> {
    pub message: &'a str,
    pub submessage: &'a str,
    /// The error text from the failed request, shown dimmed.
    pub detail: Option<&'a str>,
    pub elapsed: Duration,
    pub theme: Theme,
}

impl<'a> ErrorState<'a> {
    pub fn new(elapsed: Duration, theme: Theme) -> Self {
        Self {
            message: DEFAULT_MESSAGE,
            submessage: DEFAULT_SUBMESSAGE,
            detail: None,
            elapsed,
            theme,
        }
    }

    pub fn with_message(mut self, message: &'a str, submessage: &'a str) -> Self {
        self.message = message;
        self.submessage = submessage;
        self
    }

    pub fn with_detail(mut self, detail: Option<&'a str>) -> Self {
        self.detail = detail;
        self
    }

    fn render_rings(&self, frame: &mut Frame, area: Rect) {
        let theme = self.theme;
        let half_width = f64::from(area.width) / 2.0;
        let half_height = f64::from(area.height);
        let base_radius = half_height / 2.0;

        let rings: Vec<(f64, f32)> = RING_DELAYS_MS
            .iter()
            .map(|&delay| {
                (
                    f64::from(error_ring_scale(delay).value_at(self.elapsed)),
                    error_ring_opacity(delay).value_at(self.elapsed),
                )
            })
            .collect();

        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([-half_width, half_width])
            .y_bounds([-half_height, half_height])
            .paint(move |ctx| {
                for &(scale, opacity) in &rings {
                    if opacity <= 0.01 {
                        continue;
                    }
                    ctx.draw(&Circle {
                        x: 0.0,
                        y: 0.0,
                        radius: base_radius * scale,
                        color: theme.fade(rgb_of(theme.red), opacity),
                    });
                }
                ctx.layer();
                ctx.print(
                    0.0,
                    0.0,
                    Span::styled(
                        "✕",
                        Style::default().fg(theme.red).add_modifier(Modifier::BOLD),
                    ),
                );
            });
        frame.render_widget(canvas, area);
    }
}

impl Component for ErrorState<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let theme = self.theme;
        let [_, rings, _, text, button] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(RING_HEIGHT),
            Constraint::Length(1),
            Constraint::Min(4),
            Constraint::Length(3),
        ])
        .areas(area);

        let [_, rings, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(RING_HEIGHT * 4),
            Constraint::Fill(1),
        ])
        .areas(rings);
        self.render_rings(frame, rings);

        let mut lines = vec![
            Line::from(Span::styled(self.message.to_string(), theme.title())).centered(),
            Line::from(Span::styled(self.submessage.to_string(), theme.muted())).centered(),
            Line::default(),
            Line::from(Span::styled(DESCRIPTION, theme.dim())).centered(),
        ];
        if let Some(detail) = self.detail {
            lines.push(Line::default());
            lines.push(
                Line::from(Span::styled(
                    detail.to_string(),
                    Style::default().fg(theme.fade(rgb_of(theme.red), 0.7)),
                ))
                .centered(),
            );
        }
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), text);

        let button_line = Line::from(vec![
            Span::styled(
                " ⟳ Try Again ",
                Style::default()
                    .fg(theme.text_primary)
                    .bg(theme.accent_primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Enter", theme.dim()),
        ])
        .centered();
        frame.render_widget(
            Paragraph::new(vec![Line::default(), button_line]),
            button,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::components::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(state: &mut ErrorState) -> String {
        let backend = TestBackend::new(70, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| state.render(f, f.area())).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_renders_messages_and_retry() {
        let mut state = ErrorState::new(Duration::from_millis(600), Theme::dark()).with_message(
            "Failed to load countries",
            "Unable to fetch the list of countries",
        );
        let text = render(&mut state);
        assert!(text.contains("Failed to load countries"));
        assert!(text.contains("Unable to fetch the list of countries"));
        assert!(text.contains("Try Again"));
        assert!(text.contains("✕"));
    }

    #[test]
    fn test_renders_detail_when_present() {
        let mut state = ErrorState::new(Duration::ZERO, Theme::light())
            .with_detail(Some("Network error: connection refused"));
        let text = render(&mut state);
        assert!(text.contains(DEFAULT_MESSAGE));
        assert!(text.contains("connection refused"));
    }
}
