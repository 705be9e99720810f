//! # Query Cache
//!
//! Keyed store for fetched data and its fetch status. The `App` owns the
//! only instance; nothing else holds fetched data.
//!
//! ```text
//!            begin_fetch              resolve(Ok)
//!   Idle ───────────────▶ Loading ───────────────▶ Success ──┐
//!                            │                        ▲      │ stale / invalidate
//!                            │ resolve(Err)           │      │ + begin_fetch
//!                            ▼                        │      ▼
//!                          Error ──── invalidate ─────┴── (refetching, data
//!                                     + begin_fetch        stays visible)
//! ```
//!
//! Policy:
//! - An entry needs a fetch when it has never been fetched, its last fetch
//!   failed, or its data is older than the stale time. An entry with a fetch
//!   in flight never needs another.
//! - Every `begin_fetch` hands out a new generation. `resolve` only accepts
//!   the generation currently in flight, so a response from before an
//!   `invalidate` (or from a superseded request) is dropped.

use chrono::{DateTime, Local};
use log::{debug, info};
use std::collections::HashMap;
use std::fmt;
use std::time::{Duration, Instant};

/// Identity of a query, e.g. `countries/europe`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey(String);

impl QueryKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn countries(region: &str) -> Self {
        Self(format!("countries/{}", region.to_lowercase()))
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What a view sees when it reads a query.
#[derive(Debug, PartialEq)]
pub enum QueryStatus<'a, T> {
    /// Never fetched.
    Idle,
    /// First fetch in flight, nothing to show yet.
    Loading,
    /// Last fetch failed.
    Error(&'a str),
    /// Data available (possibly being refetched in the background).
    Success(&'a T),
}

struct QueryEntry<T> {
    data: Option<T>,
    error: Option<String>,
    /// Generation of the request whose result will be accepted.
    in_flight: Option<u64>,
    generation: u64,
    fetched_at: Option<Instant>,
    updated_at: Option<DateTime<Local>>,
}

impl<T> Default for QueryEntry<T> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            in_flight: None,
            generation: 0,
            fetched_at: None,
            updated_at: None,
        }
    }
}

pub struct QueryCache<T> {
    entries: HashMap<QueryKey, QueryEntry<T>>,
    stale_time: Duration,
}

impl<T> QueryCache<T> {
    pub fn new(stale_time: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            stale_time,
        }
    }

    pub fn status(&self, key: &QueryKey) -> QueryStatus<'_, T> {
        let Some(entry) = self.entries.get(key) else {
            return QueryStatus::Idle;
        };
        if let Some(error) = &entry.error {
            return QueryStatus::Error(error);
        }
        match (&entry.data, entry.in_flight.is_some()) {
            (Some(data), _) => QueryStatus::Success(data),
            (None, true) => QueryStatus::Loading,
            (None, false) => QueryStatus::Idle,
        }
    }

    pub fn data(&self, key: &QueryKey) -> Option<&T> {
        self.entries.get(key).and_then(|entry| entry.data.as_ref())
    }

    pub fn is_fetching(&self, key: &QueryKey) -> bool {
        self.entries.get(key).is_some_and(|entry| entry.in_flight.is_some())
    }

    /// Generation of the fetch currently in flight, if any.
    pub fn in_flight(&self, key: &QueryKey) -> Option<u64> {
        self.entries.get(key).and_then(|entry| entry.in_flight)
    }

    /// Monotonic time of the last successful fetch, used for staleness.
    pub fn fetched_at(&self, key: &QueryKey) -> Option<Instant> {
        self.entries.get(key).and_then(|entry| entry.fetched_at)
    }

    /// Wall-clock time of the last successful fetch.
    pub fn updated_at(&self, key: &QueryKey) -> Option<DateTime<Local>> {
        self.entries.get(key).and_then(|entry| entry.updated_at)
    }

    pub fn needs_fetch(&self, key: &QueryKey, now: Instant) -> bool {
        let Some(entry) = self.entries.get(key) else {
            return true;
        };
        if entry.in_flight.is_some() {
            return false;
        }
        if entry.error.is_some() {
            return true;
        }
        match entry.fetched_at {
            Some(at) => now.saturating_duration_since(at) >= self.stale_time,
            None => true,
        }
    }

    /// Marks the query as in flight and returns the generation its result
    /// must carry. Existing data stays readable.
    pub fn begin_fetch(&mut self, key: &QueryKey) -> u64 {
        let entry = self.entries.entry(key.clone()).or_default();
        entry.generation += 1;
        entry.in_flight = Some(entry.generation);
        entry.error = None;
        debug!(
            "Query {} fetching #{} (has data: {})",
            key,
            entry.generation,
            entry.data.is_some()
        );
        entry.generation
    }

    /// Stores the outcome of fetch `generation`. Returns `false` if it was
    /// dropped.
    pub fn resolve(
        &mut self,
        key: &QueryKey,
        generation: u64,
        result: Result<T, String>,
        now: Instant,
    ) -> bool {
        let Some(entry) = self.entries.get_mut(key) else {
            debug!("Dropping result for unknown query {}", key);
            return false;
        };
        if entry.in_flight != Some(generation) {
            debug!(
                "Dropping stale result #{} for query {} (in flight: {:?})",
                generation, key, entry.in_flight
            );
            return false;
        }

        entry.in_flight = None;
        match result {
            Ok(data) => {
                info!("Query {} succeeded", key);
                entry.data = Some(data);
                entry.error = None;
                entry.fetched_at = Some(now);
                entry.updated_at = Some(Local::now());
            }
            Err(message) => {
                info!("Query {} failed: {}", key, message);
                entry.error = Some(message);
            }
        }
        true
    }

    /// Marks the query stale and cancels interest in any in-flight result.
    pub fn invalidate(&mut self, key: &QueryKey) {
        if let Some(entry) = self.entries.get_mut(key) {
            debug!("Query {} invalidated", key);
            entry.in_flight = None;
            entry.error = None;
            entry.fetched_at = None;
        }
    }
}
