//! # RecipeList Component
//!
//! The left pane: the visible window of candidate rows (already chosen by
//! the projector) and a scrollbar for the whole list.

use ratatui::Frame;
use ratatui::layout::{Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState};

use crate::core::projector::{ListPaneView, ListRow};
use crate::tui::component::Component;

pub struct RecipeList<'a> {
    pub view: &'a ListPaneView,
}

impl<'a> RecipeList<'a> {
    pub fn new(view: &'a ListPaneView) -> Self {
        Self { view }
    }
}

fn row_style(row: &ListRow) -> Style {
    let base = if row.available {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    if row.selected {
        base.add_modifier(Modifier::REVERSED)
    } else {
        base
    }
}

impl Component for RecipeList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered().border_style(Style::default().fg(Color::DarkGray));
        let lines: Vec<Line> = self
            .view
            .rows
            .iter()
            .map(|row| Line::styled(row.name.clone(), row_style(row)))
            .collect();
        frame.render_widget(Paragraph::new(lines).block(block), area);

        if self.view.total > self.view.rows.len() {
            let mut state = ScrollbarState::new(self.view.total).position(self.view.position);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight),
                area.inner(Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut state,
            );
        }
    }
}
