//! # LoadingState Component
//!
//! Full-screen placeholder shown while the first fetch is in flight.
//!
//! ```text
//!              ·  ∘  ·
//!              ∘  ◐  ∘        globe glyph turns with `globe_spin`,
//!              ·  ∘  ·        the brightest orbit dot follows `ring_spin`
//!
//!        Loading Countries...
//!   Fetching data from around the world
//!
//!   ▆▆▆▆  ▆▆▆▆▆▆▆▆▆▆▆▆▆▆▆              skeleton rows pulse with
//!         ▆▆▆▆▆▆▆▆                    `skeleton_pulse`
//! ```
//!
//! Stateless apart from `elapsed`, the time since the screen appeared.

use std::time::Duration;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::animation::{globe_spin, loading_dots, ring_spin, skeleton_pulse};
use crate::tui::component::Component;
use crate::tui::theme::{Theme, rgb_of};

pub const DEFAULT_MESSAGE: &str = "Loading Countries";
pub const DEFAULT_SUBMESSAGE: &str = "Fetching data from around the world";

const GLOBE_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];
const SKELETON_ROWS: usize = 4;

/// Orbit positions around the globe, clockwise from the top, as (row, col).
const ORBIT: [(usize, usize); 8] = [
    (0, 1),
    (0, 2),
    (1, 2),
    (2, 2),
    (2, 1),
    (2, 0),
    (1, 0),
    (0, 0),
];

pub struct LoadingState<'a> {
    pub message: &'a str,
    pub submessage: &'a str,
    pub elapsed: Duration,
    pub theme: Theme,
}

impl<'a> LoadingState<'a> {
    pub fn new(elapsed: Duration, theme: Theme) -> Self {
        Self {
            message: DEFAULT_MESSAGE,
            submessage: DEFAULT_SUBMESSAGE,
            elapsed,
            theme,
        }
    }

    pub fn with_message(mut self, message: &'a str, submessage: &'a str) -> Self {
        self.message = message;
        self.submessage = submessage;
        self
    }

    fn globe_lines(&self) -> Vec<Line<'static>> {
        let theme = self.theme;
        let lit = orbit_position(ring_spin().value_at(self.elapsed));
        let mut grid = [["·"; 3]; 3];
        grid[1][1] = "";

        let mut lines = Vec::with_capacity(3);
        for (row, cells) in grid.iter().enumerate() {
            let mut spans = Vec::with_capacity(3);
            for (col, cell) in cells.iter().enumerate() {
                let span = if (row, col) == (1, 1) {
                    Span::styled(
                        globe_frame(self.elapsed).to_string(),
                        Style::default()
                            .fg(theme.accent_primary)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if ORBIT[lit] == (row, col) {
                    Span::styled("∘", Style::default().fg(theme.accent_secondary))
                } else {
                    Span::styled(*cell, theme.dim())
                };
                spans.push(span);
                if col < 2 {
                    spans.push(Span::raw("  "));
                }
            }
            lines.push(Line::from(spans).centered());
        }
        lines
    }

    fn skeleton_lines(&self, width: u16) -> Vec<Line<'static>> {
        let opacity = skeleton_pulse().value_at(self.elapsed);
        let style = Style::default().fg(self.theme.fade(self.theme.skeleton, opacity));
        let width = width as usize;
        let name_width = (width * 3 / 5).max(4);
        let detail_width = (width * 2 / 5).max(2);

        let mut lines = Vec::with_capacity(SKELETON_ROWS * 3);
        for row in 0..SKELETON_ROWS {
            // Vary each row a little so the block does not look like a grid.
            let shrink = row * 3;
            lines.push(Line::from(vec![
                Span::styled("▆▆▆▆  ", style),
                Span::styled("▆".repeat(name_width.saturating_sub(shrink)), style),
            ]));
            lines.push(Line::from(vec![
                Span::raw("      "),
                Span::styled("▆".repeat(detail_width.saturating_sub(shrink / 2)), style),
            ]));
            lines.push(Line::default());
        }
        lines
    }
}

/// Globe glyph for the current rotation angle.
pub fn globe_frame(elapsed: Duration) -> char {
    let angle = globe_spin().value_at(elapsed).rem_euclid(360.0);
    let index = (angle / 90.0) as usize % GLOBE_FRAMES.len();
    GLOBE_FRAMES[index]
}

/// Orbit slot for a rotation angle in degrees (negative turns counter-clockwise).
fn orbit_position(angle: f32) -> usize {
    let slot = (angle.rem_euclid(360.0) / 45.0) as usize;
    slot % ORBIT.len()
}

impl Component for LoadingState<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let theme = self.theme;
        let [_, globe, _, title, subtitle, _, skeleton] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .areas(area);

        frame.render_widget(Paragraph::new(self.globe_lines()), globe);

        let dots_opacity = loading_dots().value_at(self.elapsed);
        let dots_color = theme.fade(rgb_of(theme.accent_primary), dots_opacity);
        let title_line = Line::from(vec![
            Span::styled(self.message.to_string(), theme.title()),
            Span::styled("...", Style::default().fg(dots_color)),
        ])
        .centered();
        frame.render_widget(Paragraph::new(title_line), title);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(self.submessage.to_string(), theme.muted())).centered()),
            subtitle,
        );

        let [_, skeleton, _] = Layout::horizontal([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .areas(skeleton);
        frame.render_widget(Paragraph::new(self.skeleton_lines(skeleton.width)), skeleton);
    }
}
