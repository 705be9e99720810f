//! # Application State
//!
//! Core business state for Globe. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── source: Arc<dyn CountrySource>     // where the list comes from
//! ├── countries_key: QueryKey            // cache key for the region query
//! ├── queries: QueryCache<Vec<Country>>  // the only copy of fetched data
//! ├── screen: Screen                     // list or details(name)
//! ├── search_query: String               // list filter text
//! ├── selected: usize                    // index into the filtered list
//! ├── suggestion: usize                  // highlighted empty-state suggestion
//! └── status_message: String             // status line text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::sync::Arc;

use crate::api::{Country, CountrySource};
use crate::core::catalog::{filter_countries, find_by_name};
use crate::core::config::ResolvedConfig;
use crate::core::query::{QueryCache, QueryKey, QueryStatus};

/// Offered when a search matches nothing.
pub const SUGGESTIONS: [&str; 4] = ["France", "Germany", "Italy", "Spain"];

/// Which screen is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    List,
    /// Detail screen for the country with this common name.
    Details { name: String },
}

/// Result of resolving the detail screen's name against the cache.
#[derive(Debug, PartialEq)]
pub enum DetailLookup<'a> {
    /// The list has not been loaded.
    NotLoaded,
    /// The list is loaded but has no country with that name.
    Missing,
    Found(&'a Country),
}

pub struct App {
    pub source: Arc<dyn CountrySource>,
    pub countries_key: QueryKey,
    pub queries: QueryCache<Vec<Country>>,
    pub screen: Screen,
    pub search_query: String,
    pub selected: usize,
    pub suggestion: usize,
    pub status_message: String,
}

impl App {
    pub fn new(source: Arc<dyn CountrySource>, config: &ResolvedConfig) -> Self {
        Self {
            source,
            countries_key: QueryKey::countries(&config.region),
            queries: QueryCache::new(config.stale_time),
            screen: Screen::List,
            search_query: String::new(),
            selected: 0,
            suggestion: 0,
            status_message: String::new(),
        }
    }

    pub fn countries_status(&self) -> QueryStatus<'_, Vec<Country>> {
        self.queries.status(&self.countries_key)
    }

    pub fn countries(&self) -> Option<&[Country]> {
        self.queries
            .data(&self.countries_key)
            .map(|countries| countries.as_slice())
    }

    /// Countries matching the current search, in list order.
    pub fn visible_countries(&self) -> Vec<&Country> {
        self.countries()
            .map(|countries| filter_countries(countries, &self.search_query))
            .unwrap_or_default()
    }

    pub fn selected_country(&self) -> Option<&Country> {
        self.visible_countries().get(self.selected).copied()
    }

    pub fn detail_lookup(&self) -> DetailLookup<'_> {
        let Screen::Details { name } = &self.screen else {
            return DetailLookup::NotLoaded;
        };
        match self.countries() {
            None => DetailLookup::NotLoaded,
            Some(countries) => match find_by_name(countries, name) {
                Some(country) => DetailLookup::Found(country),
                None => DetailLookup::Missing,
            },
        }
    }

    pub fn current_suggestion(&self) -> &'static str {
        SUGGESTIONS[self.suggestion % SUGGESTIONS.len()]
    }

    /// Keeps `selected` inside the filtered list.
    pub fn clamp_selection(&mut self) {
        let len = self.visible_countries().len();
        self.selected = if len == 0 { 0 } else { self.selected.min(len - 1) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{france, germany, loaded_app, test_app};

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.screen, Screen::List);
        assert!(app.search_query.is_empty());
        assert_eq!(app.countries_key.to_string(), "countries/europe");
        assert_eq!(app.countries_status(), QueryStatus::Idle);
        assert!(app.visible_countries().is_empty());
    }

    #[test]
    fn test_visible_countries_follow_query() {
        let mut app = loaded_app(vec![france(), germany()]);
        assert_eq!(app.visible_countries().len(), 2);
        app.search_query = "berlin".to_string();
        let visible = app.visible_countries();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].common_name(), "Germany");
    }

    #[test]
    fn test_detail_lookup_states() {
        let mut app = test_app();
        app.screen = Screen::Details {
            name: "Germany".to_string(),
        };
        assert_eq!(app.detail_lookup(), DetailLookup::NotLoaded);

        let mut app = loaded_app(vec![germany(), france()]);
        app.screen = Screen::Details {
            name: "Germany".to_string(),
        };
        match app.detail_lookup() {
            DetailLookup::Found(country) => assert_eq!(country.population, 83783942),
            other => panic!("expected Found, got {other:?}"),
        }

        app.screen = Screen::Details {
            name: "Atlantis".to_string(),
        };
        assert_eq!(app.detail_lookup(), DetailLookup::Missing);
    }

    #[test]
    fn test_clamp_selection() {
        let mut app = loaded_app(vec![france(), germany()]);
        app.selected = 5;
        app.clamp_selection();
        assert_eq!(app.selected, 1);

        app.search_query = "nothing matches".to_string();
        app.clamp_selection();
        assert_eq!(app.selected, 0);
    }
}
