//! # CountryList Component
//!
//! Scrollable list of country rows, two lines each:
//!
//! ```text
//! ▌ Germany                                   ›
//! ▌   ⌖ Berlin · Western Europe
//! ```
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `CountryListState` lives in `TuiState` and keeps the scroll offset
//! - `CountryList` is created each frame with the filtered rows
//!
//! The selected index itself belongs to `App`, since the reducer needs it
//! to open the details screen.

use ratatui::Frame;
use ratatui::layout::{Margin, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, List, ListItem, ListState, Scrollbar, ScrollbarOrientation, ScrollbarState,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::api::Country;
use crate::core::format::format_capital;
use crate::tui::component::Component;
use crate::tui::theme::Theme;

/// Rows per country entry.
pub const ROW_HEIGHT: u16 = 2;

#[derive(Default)]
pub struct CountryListState {
    pub list_state: ListState,
    /// Entries that fit in the last rendered area, used for PageUp/PageDown.
    pub page_size: usize,
}

impl CountryListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the scroll position, e.g. after the filter changes.
    pub fn reset(&mut self) {
        self.list_state = ListState::default();
    }

    /// Page step for PageUp/PageDown, never less than one row.
    pub fn page(&self) -> usize {
        self.page_size.max(1)
    }
}

pub struct CountryList<'a> {
    pub countries: &'a [&'a Country],
    pub selected: usize,
    pub theme: Theme,
    state: &'a mut CountryListState,
}

impl<'a> CountryList<'a> {
    pub fn new(
        countries: &'a [&'a Country],
        selected: usize,
        theme: Theme,
        state: &'a mut CountryListState,
    ) -> Self {
        Self {
            countries,
            selected,
            theme,
            state,
        }
    }

    fn row(&self, country: &Country, selected: bool, width: usize) -> ListItem<'static> {
        let theme = self.theme;
        let marker = if selected { "▌ " } else { "  " };
        let marker_style = Style::default().fg(theme.accent_primary);

        let name_style = if selected {
            theme.title().fg(theme.accent_primary)
        } else {
            theme.title()
        };
        let chevron = Span::styled(" ›", theme.dim());
        let name_width = width.saturating_sub(marker.width() + 2);
        let name = truncate(country.common_name(), name_width);
        let padding = " ".repeat(name_width.saturating_sub(name.width()));

        let mut detail = format!("⌖ {}", format_capital(country));
        if !country.subregion.is_empty() {
            detail.push_str(" · ");
            detail.push_str(&country.subregion);
        }
        let detail = truncate(&detail, width.saturating_sub(marker.width() + 2));

        let mut item = ListItem::new(vec![
            Line::from(vec![
                Span::styled(marker, marker_style),
                Span::styled(name, name_style),
                Span::raw(padding),
                chevron,
            ]),
            Line::from(vec![
                Span::styled(marker, marker_style),
                Span::raw("  "),
                Span::styled(detail, theme.muted()),
            ]),
        ]);
        if selected {
            item = item.style(Style::default().add_modifier(Modifier::BOLD));
        }
        item
    }
}

impl Component for CountryList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(self.theme.border_style());
        let inner = block.inner(area);
        let width = inner.width.saturating_sub(1) as usize;

        self.state.page_size = (inner.height / ROW_HEIGHT) as usize;

        let items: Vec<ListItem> = self
            .countries
            .iter()
            .enumerate()
            .map(|(i, country)| self.row(country, i == self.selected, width))
            .collect();

        let selected = (!self.countries.is_empty()).then_some(self.selected);
        self.state.list_state.select(selected);

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, area, &mut self.state.list_state);

        if self.countries.len() > self.state.page_size {
            let mut scrollbar_state =
                ScrollbarState::new(self.countries.len()).position(self.selected);
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None)
                .thumb_style(Style::default().fg(self.theme.text_tertiary))
                .track_style(self.theme.border_style());
            frame.render_stateful_widget(
                scrollbar,
                area.inner(Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }
    }
}

/// Cut `text` to `max_width` columns, ending in "…" when shortened.
fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{france, germany, switzerland};
    use crate::tui::components::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Germany", 10), "Germany");
        assert_eq!(truncate("Germany", 5), "Germ…");
        assert_eq!(truncate("Germany", 0), "");
    }

    #[test]
    fn test_renders_name_and_capital() {
        let (a, b) = (france(), germany());
        let rows = vec![&a, &b];
        let mut state = CountryListState::new();
        let backend = TestBackend::new(50, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| CountryList::new(&rows, 1, Theme::dark(), &mut state).render(f, f.area()))
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("France"));
        assert!(text.contains("Paris"));
        assert!(text.contains("Germany"));
        assert!(text.contains("Berlin"));
        assert_eq!(state.list_state.selected(), Some(1));
        assert_eq!(state.page_size, 3);
    }

    #[test]
    fn test_selection_scrolls_into_view() {
        let countries = [france(), germany(), switzerland(), france(), germany()];
        let rows: Vec<&Country> = countries.iter().collect();
        let mut state = CountryListState::new();
        let backend = TestBackend::new(40, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| CountryList::new(&rows, 4, Theme::dark(), &mut state).render(f, f.area()))
            .unwrap();

        assert!(state.list_state.offset() > 0);
    }

    #[test]
    fn test_empty_list_clears_selection() {
        let rows: Vec<&Country> = Vec::new();
        let mut state = CountryListState::new();
        let backend = TestBackend::new(40, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| CountryList::new(&rows, 0, Theme::dark(), &mut state).render(f, f.area()))
            .unwrap();
        assert_eq!(state.list_state.selected(), None);
    }
}
