//! Top-level frame layout: decides which screen the app is on and hands
//! each region of the terminal to a component.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │ TitleBar                          [ 44 ] │  list screens only
//! │ SearchInput                              │
//! ├──────────────────────────────────────────┤
//! │ CountryList | EmptyState                 │
//! │ (or LoadingState / ErrorState / details, │
//! │  full height)                            │
//! ├──────────────────────────────────────────┤
//! │ status                        key hints  │
//! └──────────────────────────────────────────┘
//! ```

use std::time::Duration;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::query::QueryStatus;
use crate::core::state::{App, Screen};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::country_details;
use crate::tui::components::{
    CountryDetails, CountryList, EmptyState, ErrorState, LoadingState, TitleBar,
};

/// Which screen is on display. Derived from `App` every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Loading,
    Error,
    List,
    /// List screen with a search that matches nothing.
    Empty,
    Details,
}

impl View {
    /// Whether this screen has motion at `elapsed` since it appeared.
    pub fn is_animating(self, elapsed: Duration) -> bool {
        match self {
            View::Loading | View::Error | View::Empty => true,
            View::Details => country_details::is_animating(elapsed),
            View::List => false,
        }
    }

    fn key_hints(self) -> &'static str {
        match self {
            View::Loading => "^C Quit",
            View::Error => "Enter/r Retry  Esc/q Quit",
            View::List => "↑↓ Move  Enter Open  ^R Refresh  Esc Quit",
            View::Empty => "Tab Suggestion  Enter Search  ^U Clear  Esc Clear",
            View::Details => "↑↓ Scroll  Esc Back",
        }
    }
}

pub const LIST_ERROR_MESSAGE: &str = "Failed to load countries";
pub const LIST_ERROR_SUBMESSAGE: &str = "Unable to fetch the list of countries";

pub fn current_view(app: &App) -> View {
    if matches!(app.screen, Screen::Details { .. }) {
        return View::Details;
    }
    match app.countries_status() {
        QueryStatus::Loading => View::Loading,
        // Idle means the fetch finished without data; show it as a failure.
        QueryStatus::Idle | QueryStatus::Error(_) => View::Error,
        QueryStatus::Success(_) => {
            if app.visible_countries().is_empty() {
                View::Empty
            } else {
                View::List
            }
        }
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, elapsed: Duration) {
    use Constraint::{Length, Min};
    let view = current_view(app);
    let [main_area, footer_area] = Layout::vertical([Min(0), Length(1)]).areas(frame.area());

    match view {
        View::Loading => {
            LoadingState::new(elapsed, tui.theme).render(frame, main_area);
        }
        View::Error => {
            let detail = match app.countries_status() {
                QueryStatus::Error(message) => Some(message),
                _ => None,
            };
            ErrorState::new(elapsed, tui.theme)
                .with_message(LIST_ERROR_MESSAGE, LIST_ERROR_SUBMESSAGE)
                .with_detail(detail)
                .render(frame, main_area);
        }
        View::List | View::Empty => draw_list_screen(frame, main_area, app, tui, view, elapsed),
        View::Details => {
            let name = match &app.screen {
                Screen::Details { name } => name.as_str(),
                Screen::List => "",
            };
            let lookup = app.detail_lookup();
            CountryDetails::new(name, &lookup, elapsed, tui.theme, &mut tui.details)
                .render(frame, main_area);
        }
    }

    draw_footer(frame, footer_area, app, tui, view);
}

fn draw_list_screen(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    tui: &mut TuiState,
    view: View,
    elapsed: Duration,
) {
    use Constraint::{Length, Min};
    let [title_area, search_area, body_area] =
        Layout::vertical([Length(2), Length(3), Min(0)]).areas(area);

    let visible = app.visible_countries();
    TitleBar::new(
        visible.len(),
        app.queries.is_fetching(&app.countries_key),
        app.queries.updated_at(&app.countries_key),
        tui.theme,
    )
    .render(frame, title_area);

    tui.search.render(frame, search_area);

    if view == View::Empty {
        EmptyState::new(app.suggestion, elapsed, tui.theme).render(frame, body_area);
    } else {
        CountryList::new(&visible, app.selected, tui.theme, &mut tui.country_list)
            .render(frame, body_area);
    }
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App, tui: &TuiState, view: View) {
    use Constraint::{Length, Min};
    let hints = view.key_hints();
    let [status_area, hints_area] =
        Layout::horizontal([Min(0), Length(hints.chars().count() as u16 + 1)]).areas(area);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(" {}", app.status_message),
            tui.theme.dim(),
        ))),
        status_area,
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(hints, tui.theme.dim())).right_aligned()),
        hints_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::core::config::ThemeName;
    use crate::test_support::{finish_fetch, france, germany, loaded_app, test_app};
    use crate::tui::components::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::time::Instant;

    fn draw(app: &App) -> String {
        let mut tui = TuiState::new(ThemeName::Dark);
        tui.search.sync(&app.search_query);
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| draw_ui(f, app, &mut tui, Duration::from_secs(2)))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_view_follows_query_status() {
        let mut app = test_app();
        assert_eq!(current_view(&app), View::Error);

        update(&mut app, Action::EnsureFresh(Instant::now()));
        assert_eq!(current_view(&app), View::Loading);

        finish_fetch(&mut app, Ok(vec![france()]));
        assert_eq!(current_view(&app), View::List);

        update(&mut app, Action::SetQuery("zzz".to_string()));
        assert_eq!(current_view(&app), View::Empty);

        update(&mut app, Action::OpenCountry("France".to_string()));
        assert_eq!(current_view(&app), View::Details);
    }

    #[test]
    fn test_loading_screen() {
        let mut app = test_app();
        update(&mut app, Action::EnsureFresh(Instant::now()));
        assert!(draw(&app).contains("Loading Countries"));
    }

    #[test]
    fn test_error_screen() {
        let mut app = test_app();
        update(&mut app, Action::EnsureFresh(Instant::now()));
        finish_fetch(&mut app, Err("API error (500): boom".to_string()));
        let text = draw(&app);
        assert!(text.contains(LIST_ERROR_MESSAGE));
        assert!(text.contains(LIST_ERROR_SUBMESSAGE));
        assert!(text.contains("Try Again"));
    }

    #[test]
    fn test_list_screen() {
        let app = loaded_app(vec![france(), germany()]);
        let text = draw(&app);
        assert!(text.contains("Countries"));
        assert!(text.contains("[ 2 ]"));
        assert!(text.contains("Search countries or capitals..."));
        assert!(text.contains("Paris"));
        assert!(text.contains("Berlin"));
    }

    #[test]
    fn test_empty_screen() {
        let mut app = loaded_app(vec![france(), germany()]);
        update(&mut app, Action::SetQuery("Atlantis".to_string()));
        let text = draw(&app);
        assert!(text.contains("No countries found"));
        assert!(text.contains("[ 0 ]"));
    }

    #[test]
    fn test_details_screen() {
        let mut app = loaded_app(vec![france(), germany()]);
        update(&mut app, Action::OpenCountry("Germany".to_string()));
        let text = draw(&app);
        assert!(text.contains("Federal Republic of Germany"));
        assert!(text.contains("83,783,942"));
        assert!(text.contains("Esc Back"));
    }

    #[test]
    fn test_only_details_fade_settles() {
        let late = Duration::from_secs(5);
        assert!(!View::Details.is_animating(late));
        assert!(View::Loading.is_animating(late));
        assert!(!View::List.is_animating(late));
    }
}
