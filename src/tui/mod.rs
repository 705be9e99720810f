//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (loading, error rings, empty-state icons, details
//!   fade-in): draws every ~80ms for smooth animation.
//! - **Idle** (plain list, settled details): sleeps up to 500ms, only
//!   redraws on events, resize, or a finished fetch.
//!
//! Animation time is measured from the moment the current `View` first
//! appeared, so every screen plays its entrance from the start.

pub mod animation;
mod component;
mod components;
mod event;
pub mod theme;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture};
use crossterm::execute;

use crate::api::{CountrySource, RestCountriesClient, fetch_and_sort};
use crate::core::action::{Action, Effect, update};
use crate::core::config::{ResolvedConfig, ThemeName};
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{CountryDetailsState, CountryListState, SearchEvent, SearchInput};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::theme::Theme;
use crate::tui::ui::View;

const ANIMATION_FRAME: Duration = Duration::from_millis(80);
const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states
    pub search: SearchInput,
    pub country_list: CountryListState,
    pub details: CountryDetailsState,
    pub theme: Theme,
    // Animation clock: which view is showing and since when
    pub view: Option<View>,
    pub view_since: Instant,
}

impl TuiState {
    pub fn new(theme: ThemeName) -> Self {
        let theme = Theme::from_name(theme);
        Self {
            search: SearchInput::new(theme),
            country_list: CountryListState::new(),
            details: CountryDetailsState::new(),
            theme,
            view: None,
            view_since: Instant::now(),
        }
    }

    /// Restart the animation clock when the view changes.
    fn enter_view(&mut self, view: View, now: Instant) {
        if self.view != Some(view) {
            debug!("View changed: {:?} -> {:?}", self.view, view);
            self.view = Some(view);
            self.view_since = now;
            if view == View::Details {
                self.details.reset();
            }
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,                        // Show cursor for the search box
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from continuous redraws
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
    }
}

/// Build the country source for a resolved config.
pub fn build_source(config: &ResolvedConfig) -> Arc<dyn CountrySource> {
    Arc::new(RestCountriesClient::new(
        config.base_url.clone(),
        config.region.clone(),
        config.timeout,
    ))
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let source = build_source(&config);
    info!("Country source: {}", source.endpoint());
    let mut app = App::new(source, &config);
    let mut tui = TuiState::new(config.theme);

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    if update(&mut app, Action::EnsureFresh(Instant::now())) == Effect::Fetch {
        spawn_fetch(&app, tx.clone());
    }

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let mut needs_redraw = true; // Force first frame

    loop {
        let now = Instant::now();
        let view = ui::current_view(&app);
        tui.enter_view(view, now);
        let elapsed = now.saturating_duration_since(tui.view_since);
        let animating = view.is_animating(elapsed);

        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            tui.search.sync(&app.search_query);
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, elapsed))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating { ANIMATION_FRAME } else { IDLE_POLL };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match apply_event(&event, &mut app, &mut tui) {
                Effect::Quit => should_quit = true,
                Effect::Fetch => spawn_fetch(&app, tx.clone()),
                Effect::None => {}
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (fetch results)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", summarize(&action));
            if update(&mut app, action) == Effect::Fetch {
                spawn_fetch(&app, tx.clone());
            }
        }
    }

    info!("Quitting");
    ratatui::restore();
    Ok(())
}

/// Runs one terminal event through the reducer.
///
/// The search box is re-synced after every update, since several events can
/// be drained before the next draw and the reducer may have rewritten the
/// query (clear, suggestion).
fn apply_event(event: &TuiEvent, app: &mut App, tui: &mut TuiState) -> Effect {
    let Some(action) = handle_event(event, app, tui) else {
        return Effect::None;
    };
    let effect = update(app, action);
    tui.search.sync(&app.search_query);
    effect
}

/// Translate one terminal event into an action for the current view.
///
/// Presentation-only changes (search buffer, scroll offsets) are applied to
/// `tui` directly; anything that touches business state comes back as an
/// `Action` for the reducer.
fn handle_event(event: &TuiEvent, app: &App, tui: &mut TuiState) -> Option<Action> {
    // Ctrl+C always quits regardless of screen
    if matches!(event, TuiEvent::ForceQuit) {
        return Some(Action::Quit);
    }
    // Resize just needs a redraw (already flagged by the caller)
    if matches!(event, TuiEvent::Resize) {
        return None;
    }

    match ui::current_view(app) {
        View::Loading => None,
        View::Error => match event {
            TuiEvent::Submit | TuiEvent::InputChar('r') => Some(Action::Retry),
            TuiEvent::Escape | TuiEvent::InputChar('q') => Some(Action::Quit),
            _ => None,
        },
        View::Details => {
            match event {
                TuiEvent::Escape | TuiEvent::Backspace | TuiEvent::CursorLeft => {
                    return Some(Action::Back);
                }
                TuiEvent::CursorUp => tui.details.scroll_up(),
                TuiEvent::CursorDown => tui.details.scroll_down(),
                TuiEvent::PageUp => {
                    for _ in 0..tui.details.viewport_height.max(1) {
                        tui.details.scroll_up();
                    }
                }
                TuiEvent::PageDown => {
                    for _ in 0..tui.details.viewport_height.max(1) {
                        tui.details.scroll_down();
                    }
                }
                TuiEvent::Home => tui.details.reset(),
                _ => {}
            }
            None
        }
        view @ (View::List | View::Empty) => {
            let empty = view == View::Empty;
            let page = tui.country_list.page() as isize;
            match event {
                TuiEvent::Escape if !app.search_query.is_empty() => {
                    tui.country_list.reset();
                    Some(Action::ClearQuery)
                }
                TuiEvent::Escape => Some(Action::Quit),
                TuiEvent::Refresh => Some(Action::Refresh),
                TuiEvent::Submit if empty => {
                    tui.country_list.reset();
                    Some(Action::ApplySuggestion)
                }
                TuiEvent::Submit => Some(Action::OpenSelected),
                TuiEvent::Tab if empty => Some(Action::CycleSuggestion(true)),
                TuiEvent::BackTab if empty => Some(Action::CycleSuggestion(false)),
                TuiEvent::CursorUp => Some(Action::MoveSelection(-1)),
                TuiEvent::CursorDown => Some(Action::MoveSelection(1)),
                TuiEvent::PageUp => Some(Action::MoveSelection(-page)),
                TuiEvent::PageDown => Some(Action::MoveSelection(page)),
                TuiEvent::Home => Some(Action::SelectFirst),
                TuiEvent::End => Some(Action::SelectLast),
                _ => {
                    let SearchEvent::Changed(text) = tui.search.handle_event(event)?;
                    tui.country_list.reset();
                    Some(Action::SetQuery(text))
                }
            }
        }
    }
}

/// Short form of an action for the log; fetched lists are not dumped.
fn summarize(action: &Action) -> String {
    match action {
        Action::CountriesLoaded(generation, Ok(countries)) => {
            format!(
                "CountriesLoaded(#{generation}, Ok({} countries))",
                countries.len()
            )
        }
        other => format!("{other:?}"),
    }
}

fn spawn_fetch(app: &App, tx: mpsc::Sender<Action>) {
    let Some(generation) = app.queries.in_flight(&app.countries_key) else {
        warn!("Fetch requested but no query is in flight");
        return;
    };
    let source = app.source.clone();
    info!("Spawning fetch #{}: {}", generation, source.endpoint());
    tokio::spawn(async move {
        let started = Instant::now();
        let result = fetch_and_sort(source.as_ref())
            .await
            .map_err(|e| e.to_string());
        match &result {
            Ok(countries) => info!(
                "Fetched {} countries in {}ms",
                countries.len(),
                started.elapsed().as_millis()
            ),
            Err(e) => warn!("Fetch failed after {}ms: {}", started.elapsed().as_millis(), e),
        }
        if tx.send(Action::CountriesLoaded(generation, result)).is_err() {
            warn!("Failed to send fetch result: receiver dropped");
        }
    });
}
