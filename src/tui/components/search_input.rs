//! # SearchInput Component
//!
//! Single-line search box above the country list.
//!
//! The buffer is internal state, but `App::search_query` is the source of
//! truth: the event loop calls [`SearchInput::sync`] before each frame so
//! changes made elsewhere (applying a suggestion) show up here. Every edit
//! emits the full new text; filtering runs synchronously on each one.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::theme::Theme;

pub const PLACEHOLDER: &str = "Search countries or capitals...";
const CLEAR_HINT: &str = " ✕ ^U ";
const PREFIX: &str = "⌕ ";

#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    Changed(String),
}

pub struct SearchInput {
    buffer: String,
    pub theme: Theme,
}

impl SearchInput {
    pub fn new(theme: Theme) -> Self {
        Self {
            buffer: String::new(),
            theme,
        }
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Replace the buffer with the app's current query.
    pub fn sync(&mut self, query: &str) {
        if self.buffer != query {
            self.buffer = query.to_string();
        }
    }

    fn changed(&self) -> Option<SearchEvent> {
        Some(SearchEvent::Changed(self.buffer.clone()))
    }

    /// The tail of the buffer that fits in `width` columns.
    fn visible_tail(&self, width: usize) -> &str {
        if self.buffer.width() <= width {
            return &self.buffer;
        }
        let mut start = self.buffer.len();
        let mut used = 0;
        for (idx, c) in self.buffer.char_indices().rev() {
            let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
            if used + w > width {
                break;
            }
            used += w;
            start = idx;
        }
        &self.buffer[start..]
    }
}

impl EventHandler for SearchInput {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<SearchEvent> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.push(*c);
                self.changed()
            }
            TuiEvent::Paste(text) => {
                let single_line: String = text.chars().filter(|c| !c.is_control()).collect();
                if single_line.is_empty() {
                    return None;
                }
                self.buffer.push_str(&single_line);
                self.changed()
            }
            TuiEvent::Backspace => {
                self.buffer.pop()?;
                self.changed()
            }
            TuiEvent::ClearLine => {
                if self.buffer.is_empty() {
                    return None;
                }
                self.buffer.clear();
                self.changed()
            }
            _ => None,
        }
    }
}

impl Component for SearchInput {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let theme = self.theme;
        let mut block = Block::bordered().border_style(if self.buffer.is_empty() {
            theme.border_style()
        } else {
            Style::default().fg(theme.accent_primary)
        });
        if !self.buffer.is_empty() {
            block = block.title_bottom(Line::from(Span::styled(CLEAR_HINT, theme.dim())).right_aligned());
        }

        let inner = block.inner(area);
        let text_width = (inner.width as usize).saturating_sub(PREFIX.width());

        let line = if self.buffer.is_empty() {
            Line::from(vec![
                Span::styled(PREFIX, theme.dim()),
                Span::styled(PLACEHOLDER, theme.dim()),
            ])
        } else {
            Line::from(vec![
                Span::styled(PREFIX, Style::default().fg(theme.accent_primary)),
                Span::styled(self.visible_tail(text_width).to_string(), Style::default().fg(theme.text_primary)),
            ])
        };
        frame.render_widget(Paragraph::new(line).block(block), area);

        if inner.width > 0 && inner.height > 0 {
            let typed = self.visible_tail(text_width).width() as u16;
            let x = (inner.x + PREFIX.width() as u16 + typed).min(inner.right().saturating_sub(1));
            frame.set_cursor_position(Position::new(x, inner.y));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::components::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_typing_emits_full_text() {
        let mut input = SearchInput::new(Theme::dark());
        input.handle_event(&TuiEvent::InputChar('R'));
        let event = input.handle_event(&TuiEvent::InputChar('o'));
        assert_eq!(event, Some(SearchEvent::Changed("Ro".to_string())));
    }

    #[test]
    fn test_backspace_on_empty_is_silent() {
        let mut input = SearchInput::new(Theme::dark());
        assert_eq!(input.handle_event(&TuiEvent::Backspace), None);
        input.handle_event(&TuiEvent::InputChar('x'));
        assert_eq!(
            input.handle_event(&TuiEvent::Backspace),
            Some(SearchEvent::Changed(String::new()))
        );
    }

    #[test]
    fn test_paste_drops_newlines() {
        let mut input = SearchInput::new(Theme::dark());
        let event = input.handle_event(&TuiEvent::Paste("Par\nis\r".to_string()));
        assert_eq!(event, Some(SearchEvent::Changed("Paris".to_string())));
    }

    #[test]
    fn test_clear_line() {
        let mut input = SearchInput::new(Theme::dark());
        assert_eq!(input.handle_event(&TuiEvent::ClearLine), None);
        input.sync("rome");
        assert_eq!(
            input.handle_event(&TuiEvent::ClearLine),
            Some(SearchEvent::Changed(String::new()))
        );
        assert_eq!(input.text(), "");
    }

    #[test]
    fn test_visible_tail_keeps_end_of_long_query() {
        let mut input = SearchInput::new(Theme::dark());
        input.sync("abcdefghij");
        assert_eq!(input.visible_tail(4), "ghij");
        assert_eq!(input.visible_tail(20), "abcdefghij");
    }

    #[test]
    fn test_placeholder_when_empty() {
        let backend = TestBackend::new(50, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut input = SearchInput::new(Theme::dark());
        terminal.draw(|f| input.render(f, f.area())).unwrap();
        assert!(buffer_text(terminal.backend().buffer()).contains(PLACEHOLDER));
    }
}
