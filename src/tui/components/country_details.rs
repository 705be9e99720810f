//! # CountryDetails Component
//!
//! Detail screen for one country: a header with the name, capital and
//! flag description, followed by one card per fact.
//!
//! ```text
//!  ← Back
//!
//!  Germany
//!  Federal Republic of Germany
//!  ⌖ Berlin
//!  The flag of Germany is composed of three equal horizontal bands ...
//!
//!  ╭ Population ──────────────────╮
//!  │ 83,783,942                   │
//!  ╰──────────────────────────────╯
//!  ╭ Area ────────────────────────╮
//!  ...
//! ```
//!
//! Content is laid out on a `tui_scrollview` canvas sized to fit every
//! card, so long language or currency lists scroll instead of clipping.
//! Cards fade in one after another (400 ms to 800 ms after the screen
//! opens).
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `CountryDetailsState` lives in `TuiState`
//! - `CountryDetails` is created each frame with the lookup result

use std::time::Duration;

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::api::Country;
use crate::core::format::{
    format_area, format_capital, format_currencies, format_languages, format_population,
    format_subregion,
};
use crate::core::state::DetailLookup;
use crate::tui::animation::fade_in;
use crate::tui::component::Component;
use crate::tui::theme::{Theme, rgb_of};

/// Delay before the header fades in.
const HEADER_DELAY_MS: u64 = 200;
/// Delay before the first card; each following card waits 100 ms more.
const FIRST_CARD_DELAY_MS: u64 = 400;
const CARD_STEP_MS: u64 = 100;
const CARD_COUNT: u64 = 5;
/// Border (2) + padding (2) inside a card.
const CARD_HORIZONTAL_OVERHEAD: u16 = 4;

/// True while any part of the screen is still fading in.
pub fn is_animating(elapsed: Duration) -> bool {
    let last_card = FIRST_CARD_DELAY_MS + CARD_STEP_MS * (CARD_COUNT - 1);
    !fade_in(last_card).is_settled(elapsed)
}

#[derive(Default)]
pub struct CountryDetailsState {
    pub scroll_state: ScrollViewState,
    /// Content and viewport heights from the last render, for clamping.
    pub content_height: u16,
    pub viewport_height: u16,
}

impl CountryDetailsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll_up(&mut self) {
        self.scroll_state.scroll_up();
    }

    pub fn scroll_down(&mut self) {
        self.scroll_state.scroll_down();
        self.clamp_scroll();
    }

    pub fn reset(&mut self) {
        self.scroll_state.scroll_to_top();
    }

    /// Never scroll past the last card.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.content_height.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }
}

/// One fact card: label, value, accent color.
struct Card {
    label: &'static str,
    value: String,
    accent: (u8, u8, u8),
}

pub struct CountryDetails<'a> {
    /// Name carried by navigation; shown when the lookup misses.
    pub name: &'a str,
    pub lookup: &'a DetailLookup<'a>,
    pub elapsed: Duration,
    pub theme: Theme,
    state: &'a mut CountryDetailsState,
}

impl<'a> CountryDetails<'a> {
    pub fn new(
        name: &'a str,
        lookup: &'a DetailLookup<'a>,
        elapsed: Duration,
        theme: Theme,
        state: &'a mut CountryDetailsState,
    ) -> Self {
        Self {
            name,
            lookup,
            elapsed,
            theme,
            state,
        }
    }

    fn cards(&self, country: &Country) -> Vec<Card> {
        let theme = self.theme;
        vec![
            Card {
                label: "Population",
                value: format_population(country),
                accent: rgb_of(theme.accent_primary),
            },
            Card {
                label: "Area",
                value: format_area(country),
                accent: rgb_of(theme.blue),
            },
            Card {
                label: "Currency",
                value: format_currencies(country),
                accent: rgb_of(theme.green),
            },
            Card {
                label: "Languages",
                value: format_languages(country),
                accent: rgb_of(theme.amber),
            },
            Card {
                label: "Region",
                value: format_subregion(country),
                accent: rgb_of(theme.violet),
            },
        ]
    }

    fn header_lines(&self, country: &Country, width: u16) -> Vec<Line<'static>> {
        let theme = self.theme;
        let opacity = fade_in(HEADER_DELAY_MS).value_at(self.elapsed);
        let text = |color| Style::default().fg(theme.fade(rgb_of(color), opacity));

        let mut lines = vec![
            Line::from(Span::styled("← Back", theme.dim())),
            Line::default(),
            Line::from(Span::styled(
                country.common_name().to_string(),
                text(theme.text_primary).add_modifier(Modifier::BOLD),
            )),
        ];
        if !country.name.official.is_empty() && country.name.official != country.name.common {
            lines.push(Line::from(Span::styled(
                country.name.official.clone(),
                text(theme.text_secondary),
            )));
        }
        lines.push(Line::from(vec![
            Span::styled("⌖ ", text(theme.accent_primary)),
            Span::styled(format_capital(country), text(theme.text_secondary)),
        ]));
        if !country.flags.alt.is_empty() {
            lines.push(Line::default());
            for line in textwrap::wrap(&country.flags.alt, wrap_options(width)) {
                lines.push(Line::from(Span::styled(
                    line.into_owned(),
                    text(theme.text_tertiary).add_modifier(Modifier::ITALIC),
                )));
            }
        }
        lines.push(Line::default());
        lines
    }

    fn render_found(&mut self, frame: &mut Frame, area: Rect, country: &Country) {
        let theme = self.theme;
        // Leave a column for the scrollbar.
        let content_width = area.width.saturating_sub(1);
        let card_inner = content_width.saturating_sub(CARD_HORIZONTAL_OVERHEAD);

        let header = self.header_lines(country, content_width);
        let cards: Vec<(Card, Vec<String>)> = self
            .cards(country)
            .into_iter()
            .map(|card| {
                let lines: Vec<String> = textwrap::wrap(&card.value, wrap_options(card_inner))
                    .into_iter()
                    .map(|line| line.into_owned())
                    .collect();
                (card, lines)
            })
            .collect();

        let header_height = header.len() as u16;
        let cards_height: u16 = cards
            .iter()
            .map(|(_, lines)| (lines.len() as u16).max(1) + 2)
            .sum();
        let content_height = header_height + cards_height;

        let mut scroll_view = ScrollView::new(Size::new(content_width, content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        scroll_view.render_widget(
            Paragraph::new(header),
            Rect::new(0, 0, content_width, header_height),
        );

        let mut y = header_height;
        for (i, (card, lines)) in cards.into_iter().enumerate() {
            let delay = FIRST_CARD_DELAY_MS + CARD_STEP_MS * i as u64;
            let opacity = fade_in(delay).value_at(self.elapsed);
            let height = (lines.len() as u16).max(1) + 2;

            let block = Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme.fade(rgb_of(theme.border), opacity)))
                .title(Span::styled(
                    format!(" {} ", card.label),
                    Style::default()
                        .fg(theme.fade(card.accent, opacity))
                        .add_modifier(Modifier::BOLD),
                ))
                .padding(Padding::horizontal(1));
            let value_style = Style::default().fg(theme.fade(rgb_of(theme.text_primary), opacity));
            let body: Vec<Line> = lines
                .into_iter()
                .map(|line| Line::from(Span::styled(line, value_style)))
                .collect();

            scroll_view.render_widget(
                Paragraph::new(body).block(block),
                Rect::new(0, y, content_width, height),
            );
            y += height;
        }

        self.state.content_height = content_height;
        self.state.viewport_height = area.height;
        self.state.clamp_scroll();
        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }

    fn render_missing(&self, frame: &mut Frame, area: Rect) {
        let theme = self.theme;
        let lines = vec![
            Line::default(),
            Line::from(Span::styled("Country not found", theme.title())).centered(),
            Line::from(Span::styled(
                format!("Nothing named \"{}\" in the list", self.name),
                theme.muted(),
            ))
            .centered(),
            Line::default(),
            Line::from(Span::styled("Esc Back", theme.dim())).centered(),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }
}

fn wrap_options(width: u16) -> textwrap::Options<'static> {
    textwrap::Options::new((width as usize).max(1))
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

impl Component for CountryDetails<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lookup = self.lookup;
        match lookup {
            // Nothing to show until the list is in the cache.
            DetailLookup::NotLoaded => {}
            DetailLookup::Missing => self.render_missing(frame, area),
            DetailLookup::Found(country) => self.render_found(frame, area, *country),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{germany, switzerland};
    use crate::tui::components::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(name: &str, lookup: &DetailLookup, state: &mut CountryDetailsState) -> String {
        let backend = TestBackend::new(60, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                CountryDetails::new(name, lookup, Duration::from_secs(2), Theme::dark(), state)
                    .render(f, f.area())
            })
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_renders_all_cards() {
        let country = germany();
        let lookup = DetailLookup::Found(&country);
        let mut state = CountryDetailsState::new();
        let text = render("Germany", &lookup, &mut state);

        assert!(text.contains("Germany"));
        assert!(text.contains("Berlin"));
        assert!(text.contains("Population"));
        assert!(text.contains("83,783,942"));
        assert!(text.contains("357,114 km²"));
        assert!(text.contains("Euro (€)"));
        assert!(text.contains("German"));
        assert!(text.contains("Western Europe"));
        assert!(state.content_height > 0);
    }

    #[test]
    fn test_multiple_currencies_keep_order() {
        let country = switzerland();
        let lookup = DetailLookup::Found(&country);
        let mut state = CountryDetailsState::new();
        let text = render("Switzerland", &lookup, &mut state);
        let euro = text.find("Euro (€)").unwrap();
        let franc = text.find("Swiss franc (Fr)").unwrap();
        assert!(euro < franc);
    }

    #[test]
    fn test_missing_country() {
        let mut state = CountryDetailsState::new();
        let text = render("Atlantis", &DetailLookup::Missing, &mut state);
        assert!(text.contains("Country not found"));
        assert!(text.contains("Atlantis"));
    }

    #[test]
    fn test_not_loaded_renders_nothing() {
        let mut state = CountryDetailsState::new();
        let text = render("Germany", &DetailLookup::NotLoaded, &mut state);
        assert!(text.trim().is_empty());
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut state = CountryDetailsState::new();
        state.content_height = 12;
        state.viewport_height = 10;
        for _ in 0..5 {
            state.scroll_down();
        }
        assert_eq!(state.scroll_state.offset().y, 2);
        state.reset();
        assert_eq!(state.scroll_state.offset().y, 0);
    }

    #[test]
    fn test_animation_window() {
        assert!(is_animating(Duration::from_millis(500)));
        assert!(is_animating(Duration::from_millis(1100)));
        assert!(!is_animating(Duration::from_millis(1200)));
    }
}
