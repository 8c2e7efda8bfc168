//! # Popup Component
//!
//! Centered overlay for one-shot notices, the describe-recipe text and the
//! keybinding list. Arrow keys scroll; any other key dismisses.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `PopupState` lives in `TuiState` while the popup is open
//! - `Popup` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupKind {
    /// Short message, small box.
    Notice,
    /// Long text, most of the screen.
    Page,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupState {
    pub kind: PopupKind,
    pub title: String,
    pub lines: Vec<String>,
    pub scroll: u16,
}

/// Events emitted by a popup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopupEvent {
    Dismiss,
}

impl PopupState {
    pub fn notice(message: &str) -> Self {
        Self {
            kind: PopupKind::Notice,
            title: String::new(),
            lines: vec![message.to_string()],
            scroll: 0,
        }
    }

    pub fn page(title: &str, lines: Vec<String>) -> Self {
        Self {
            kind: PopupKind::Page,
            title: title.to_string(),
            lines,
            scroll: 0,
        }
    }

    fn max_scroll(&self) -> u16 {
        u16::try_from(self.lines.len().saturating_sub(1)).unwrap_or(u16::MAX)
    }
}

impl EventHandler for PopupState {
    type Event = PopupEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<PopupEvent> {
        match event {
            TuiEvent::CursorUp => {
                self.scroll = self.scroll.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown => {
                self.scroll = (self.scroll + 1).min(self.max_scroll());
                None
            }
            TuiEvent::Resize => None,
            _ => Some(PopupEvent::Dismiss),
        }
    }
}

/// Transient render wrapper for a popup.
pub struct Popup<'a> {
    state: &'a PopupState,
}

impl<'a> Popup<'a> {
    pub fn new(state: &'a PopupState) -> Self {
        Self { state }
    }
}

impl Component for Popup<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = match self.state.kind {
            PopupKind::Notice => centered_rect(50, 20, area),
            PopupKind::Page => centered_rect(80, 70, area),
        };
        frame.render_widget(Clear, overlay);

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(1));
        if !self.state.title.is_empty() {
            block = block.title(format!(" {} ", self.state.title));
        }
        if self.state.kind == PopupKind::Page {
            block = block.title_bottom(Line::from(" Esc Back ").centered());
        }

        let lines: Vec<Line> = self
            .state
            .lines
            .iter()
            .map(|l| Line::raw(l.clone()))
            .collect();
        let alignment = match self.state.kind {
            PopupKind::Notice => Alignment::Center,
            PopupKind::Page => Alignment::Left,
        };
        let paragraph = Paragraph::new(lines)
            .block(block)
            .alignment(alignment)
            .wrap(Wrap { trim: false })
            .scroll((self.state.scroll, 0));
        frame.render_widget(paragraph, overlay);
    }
}

/// Compute a centered rect using percentage of the outer rect.
pub fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_any_key_dismisses() {
        let mut popup = PopupState::notice("Nothing selected!");
        assert_eq!(popup.handle_event(&TuiEvent::InputChar('x')), Some(PopupEvent::Dismiss));
        assert_eq!(popup.handle_event(&TuiEvent::Escape), Some(PopupEvent::Dismiss));
        assert_eq!(popup.handle_event(&TuiEvent::Resize), None);
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut popup = PopupState::page("Keys", vec!["a".into(), "b".into()]);
        assert_eq!(popup.handle_event(&TuiEvent::CursorDown), None);
        assert_eq!(popup.handle_event(&TuiEvent::CursorDown), None);
        assert_eq!(popup.scroll, 1);
        popup.handle_event(&TuiEvent::CursorUp);
        popup.handle_event(&TuiEvent::CursorUp);
        assert_eq!(popup.scroll, 0);
    }

    #[test]
    fn test_render_notice() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let state = PopupState::notice("You can't do that!");
        terminal
            .draw(|f| Popup::new(&state).render(f, f.area()))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("You can't do that!"));
    }

    #[test]
    fn test_centered_rect_inside_outer() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(80, 70, outer);
        assert!(inner.x >= outer.x && inner.right() <= outer.right());
        assert!(inner.y >= outer.y && inner.bottom() <= outer.bottom());
        assert_eq!(inner.width, 80);
    }
}
