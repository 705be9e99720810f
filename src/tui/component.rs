use ratatui::Frame;
use ratatui::layout::Rect;

use super::event::TuiEvent;

/// Something that draws itself into a region of the frame.
///
/// Screens are built from these: `TitleBar` and `SearchInput` above a
/// `CountryList`, or a single full-height `LoadingState`. Data arrives as
/// struct fields set by the caller, usually borrowed from `App` for one
/// frame.
///
/// `render` takes `&mut self` because some components write back during
/// the pass: `CountryList` stores the page size it measured, and
/// `CountryDetails` clamps its scroll offset to the content it laid out.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that consumes terminal input and reports what it means.
pub trait EventHandler {
    /// The high-level event this component emits, e.g. `SearchEvent`.
    type Event;

    /// Returns `None` when the event was ignored or changed nothing.
    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}
