//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as fields and are rebuilt
//! every frame:
//! - `TitleBar`: header with the match count and refresh status
//! - `LoadingState`, `ErrorState`, `EmptyState`: full-screen placeholders
//!
//! ### Stateful Components
//!
//! Components whose presentation state must survive between frames. The
//! state struct lives in `TuiState`; a transient wrapper borrows it for
//! one render pass:
//! - `SearchInput`: owns its text buffer, emits `SearchEvent`s
//! - `CountryList` / `CountryListState`: list rows and scroll offset
//! - `CountryDetails` / `CountryDetailsState`: fact cards in a scroll view
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as fields, never by reaching into
//! `App`. This keeps dependencies explicit and lets every component be
//! rendered on a `TestBackend` in isolation.
//!
//! ```rust,ignore
//! // Good: dependencies are explicit
//! TitleBar::new(visible.len(), is_fetching, updated_at, theme).render(frame, area);
//!
//! // Bad: hidden dependency on global state
//! TitleBar::from_app(app).render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs              (this file)
//! ├── title_bar.rs        (header + count badge)
//! ├── search_input.rs     (search box)
//! ├── country_list.rs     (scrollable rows)
//! ├── country_details.rs  (detail screen)
//! ├── loading_state.rs    (spinner + skeleton rows)
//! ├── error_state.rs      (rings + retry)
//! └── empty_state.rs      (no matches + suggestions)
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod country_details;
pub mod country_list;
pub mod empty_state;
pub mod error_state;
pub mod loading_state;
pub mod search_input;

pub use country_details::{CountryDetails, CountryDetailsState};
pub use country_list::{CountryList, CountryListState};
pub use empty_state::EmptyState;
pub use error_state::ErrorState;
pub use loading_state::LoadingState;
pub use search_input::{SearchEvent, SearchInput};

/// Flatten a rendered buffer into text, one line per row.
#[cfg(test)]
pub fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area;
    let mut out = String::with_capacity((area.width as usize + 1) * area.height as usize);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buffer.cell((x, y)) {
                out.push_str(cell.symbol());
            }
        }
        out.push('\n');
    }
    out
}
