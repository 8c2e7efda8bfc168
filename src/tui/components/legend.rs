//! # Legend Component
//!
//! Key hints along the bottom edge.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub struct Legend<'a> {
    pub lines: &'a [String],
}

impl<'a> Legend<'a> {
    pub fn new(lines: &'a [String]) -> Self {
        Self { lines }
    }
}

impl Component for Legend<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = self
            .lines
            .iter()
            .map(|l| Line::styled(l.clone(), Style::default().fg(Color::Gray)))
            .collect();
        frame.render_widget(Paragraph::new(lines), area);
    }
}
