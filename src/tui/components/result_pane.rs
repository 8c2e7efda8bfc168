//! # ResultPane Component
//!
//! Right pane of the wide layout: name and info of the item the selected
//! recipe makes. Scrollable with PageUp/PageDown; `scroll` is clamped to
//! the wrapped text on render.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::projector::ResultView;
use crate::tui::component::Component;

pub struct ResultPane<'a> {
    pub view: Option<&'a ResultView>,
    pub scroll: u16,
}

impl<'a> ResultPane<'a> {
    pub fn new(view: Option<&'a ResultView>, scroll: u16) -> Self {
        Self { view, scroll }
    }
}

impl Component for ResultPane<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut block = Block::bordered().border_style(Style::default().fg(Color::DarkGray));
        let Some(view) = self.view else {
            frame.render_widget(block, area);
            return;
        };
        let title_style = if view.available {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        block = block.title(Line::styled(format!(" {} ", view.name), title_style));

        let lines: Vec<Line> = view.info.iter().map(|l| Line::raw(l.clone())).collect();
        let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });

        // line_count adds the border rows but wraps at the width it is given
        let inner_width = area.width.saturating_sub(2);
        let total = u16::try_from(paragraph.line_count(inner_width)).unwrap_or(u16::MAX);
        self.scroll = self.scroll.min(total.saturating_sub(area.height));

        frame.render_widget(paragraph.scroll((self.scroll, 0)), area);
    }
}
