//! # Core Application Logic
//!
//! This module contains Globe's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Query cache          │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                   ┌────────────┴────────────┐
//!                   ▼                         ▼
//!            ┌────────────┐            ┌────────────┐
//!            │    TUI     │            │    API     │
//!            │  Adapter   │            │  (reqwest) │
//!            │ (ratatui)  │            │            │
//!            └────────────┘            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`query`]: Keyed cache of fetch status and data
//! - [`catalog`]: Sort, filter, and lookup over the country list
//! - [`collate`]: Locale-aware string comparison
//! - [`format`]: Number and field formatting for display
//! - [`config`]: Config file, env, and CLI resolution

pub mod action;
pub mod catalog;
pub mod collate;
pub mod config;
pub mod format;
pub mod query;
pub mod state;
