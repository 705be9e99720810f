//! # Actions
//!
//! Everything that can happen in Globe becomes an `Action`.
//! User types in the search box? That's `Action::SetQuery(text)`.
//! API responds? That's `Action::CountriesLoaded(generation, result)`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state, and returns an `Effect` telling the adapter what I/O
//! to perform next. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: `assert_eq!(update(&mut app, action), Effect::Fetch)`.

use log::{debug, info};
use std::time::Instant;

use crate::api::Country;
use crate::core::state::{App, SUGGESTIONS, Screen};

#[derive(Debug)]
pub enum Action {
    /// Fetch the country list if it is missing or stale.
    EnsureFresh(Instant),
    /// Result of a fetch started by `Effect::Fetch`, tagged with the cache
    /// generation that was in flight when it was spawned.
    CountriesLoaded(u64, Result<Vec<Country>, String>),
    /// User asked to try again after a failure.
    Retry,
    /// User asked for fresh data while the list is showing.
    Refresh,
    SetQuery(String),
    ClearQuery,
    /// Move the list selection by `n` rows (negative = up).
    MoveSelection(isize),
    SelectFirst,
    SelectLast,
    OpenSelected,
    OpenCountry(String),
    Back,
    /// Highlight the next (`true`) or previous empty-state suggestion.
    CycleSuggestion(bool),
    ApplySuggestion,
    Quit,
}

/// I/O the adapter must perform after an update.
#[derive(Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Spawn a fetch of the country list.
    Fetch,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::EnsureFresh(now) => {
            if app.queries.needs_fetch(&app.countries_key, now) {
                start_fetch(app)
            } else {
                Effect::None
            }
        }
        Action::CountriesLoaded(generation, result) => {
            let loaded = result.as_ref().ok().map(Vec::len);
            if app
                .queries
                .resolve(&app.countries_key, generation, result, Instant::now())
            {
                app.clamp_selection();
                app.status_message = match loaded {
                    Some(count) => format!("{count} countries"),
                    None => "Failed to load countries".to_string(),
                };
            }
            Effect::None
        }
        Action::Retry | Action::Refresh => {
            info!("Refetching {}", app.countries_key);
            app.queries.invalidate(&app.countries_key);
            start_fetch(app)
        }
        Action::SetQuery(query) => {
            if query != app.search_query {
                debug!("Search query: {:?}", query);
                app.search_query = query;
                app.selected = 0;
            }
            Effect::None
        }
        Action::ClearQuery => {
            app.search_query.clear();
            app.selected = 0;
            Effect::None
        }
        Action::MoveSelection(delta) => {
            let len = app.visible_countries().len();
            if len > 0 {
                let target = app.selected as isize + delta;
                app.selected = target.clamp(0, len as isize - 1) as usize;
            }
            Effect::None
        }
        Action::SelectFirst => {
            app.selected = 0;
            Effect::None
        }
        Action::SelectLast => {
            app.selected = app.visible_countries().len().saturating_sub(1);
            Effect::None
        }
        Action::OpenSelected => {
            match app.selected_country().map(|c| c.name.common.clone()) {
                Some(name) => update(app, Action::OpenCountry(name)),
                None => Effect::None,
            }
        }
        Action::OpenCountry(name) => {
            info!("Opening details for {}", name);
            app.screen = Screen::Details { name };
            Effect::None
        }
        Action::Back => {
            if app.screen == Screen::List {
                return Effect::None;
            }
            debug!("Back to list");
            app.screen = Screen::List;
            update(app, Action::EnsureFresh(Instant::now()))
        }
        Action::CycleSuggestion(forward) => {
            let len = SUGGESTIONS.len();
            app.suggestion = if forward {
                (app.suggestion + 1) % len
            } else {
                (app.suggestion + len - 1) % len
            };
            Effect::None
        }
        Action::ApplySuggestion => {
            let suggestion = app.current_suggestion().to_string();
            update(app, Action::SetQuery(suggestion))
        }
        Action::Quit => Effect::Quit,
    }
}

fn start_fetch(app: &mut App) -> Effect {
    app.queries.begin_fetch(&app.countries_key);
    app.status_message = "Loading countries...".to_string();
    Effect::Fetch
}
