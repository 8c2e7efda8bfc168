//! # TabBar Component
//!
//! Two rows: category tabs, then the subcategory tabs of the current
//! category. While searching or in batch mode a single tab replaces the
//! category row and the subcategory row is left empty.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::projector::{TabBarView, TabLabel};
use crate::tui::component::Component;

pub struct TabBar<'a> {
    pub view: &'a TabBarView,
}

impl<'a> TabBar<'a> {
    pub fn new(view: &'a TabBarView) -> Self {
        Self { view }
    }
}

fn tab_line(labels: &[TabLabel], selected: Style) -> Line<'static> {
    let mut spans = Vec::with_capacity(labels.len() * 2);
    for label in labels {
        if label.selected {
            spans.push(Span::styled(format!("<{}>", label.label), selected));
        } else {
            spans.push(Span::styled(
                format!(" {} ", label.label),
                Style::default().fg(Color::Gray),
            ));
        }
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

impl Component for TabBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [tabs_area, subtabs_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

        let tab_style = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED);
        frame.render_widget(Paragraph::new(tab_line(&self.view.tabs, tab_style)), tabs_area);

        let subtab_style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
        frame.render_widget(
            Paragraph::new(tab_line(&self.view.subtabs, subtab_style)),
            subtabs_area,
        );
    }
}
