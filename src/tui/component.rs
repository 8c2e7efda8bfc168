use ratatui::Frame;
use ratatui::layout::Rect;

/// A screen region that can draw itself.
///
/// Components take their data as props (struct fields, usually borrowed
/// view models from the projector) and render into the given `Rect`.
///
/// `render` takes `&mut self` so stateful components (the filter prompt,
/// popups) can update scroll offsets or cached widths while drawing.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that consumes terminal events while it has focus.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
