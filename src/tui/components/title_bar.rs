//! # TitleBar Component
//!
//! Two-line header above the country list.
//!
//! ```text
//! ◍ Countries                                  Updated 14:03  [ 44 ]
//!   Explore the world
//! ```
//!
//! Stateless: everything it shows is passed in as props. The badge shows
//! how many countries match the current search, not the total.

use chrono::{DateTime, Local};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;
use crate::tui::theme::Theme;

pub struct TitleBar {
    /// Countries matching the search.
    pub count: usize,
    /// A background refetch is running.
    pub is_fetching: bool,
    /// When the list was last fetched successfully.
    pub updated_at: Option<DateTime<Local>>,
    pub theme: Theme,
}

impl TitleBar {
    pub fn new(
        count: usize,
        is_fetching: bool,
        updated_at: Option<DateTime<Local>>,
        theme: Theme,
    ) -> Self {
        Self {
            count,
            is_fetching,
            updated_at,
            theme,
        }
    }

    fn status_text(&self) -> String {
        if self.is_fetching {
            "Refreshing…".to_string()
        } else {
            self.updated_at
                .map(|at| format!("Updated {}", at.format("%H:%M")))
                .unwrap_or_default()
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let theme = self.theme;
        let badge = format!("[ {} ]", self.count);
        let status = self.status_text();
        let right_width = (badge.len() + status.chars().count() + 2) as u16;

        let [left, right] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(right_width)]).areas(area);

        let title = vec![
            Line::from(vec![
                Span::styled("◍ ", Style::default().fg(theme.accent_primary)),
                Span::styled("Countries", theme.title()),
            ]),
            Line::from(Span::styled("  Explore the world", theme.muted())),
        ];
        frame.render_widget(Paragraph::new(title), left);

        let badge_line = Line::from(vec![
            Span::styled(status, theme.dim()),
            Span::raw("  "),
            Span::styled(
                badge,
                Style::default()
                    .fg(theme.badge)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
        .right_aligned();
        frame.render_widget(Paragraph::new(badge_line), right);
    }
}
