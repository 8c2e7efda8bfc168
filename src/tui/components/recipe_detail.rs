//! # RecipeDetail Component
//!
//! The middle pane. Lines arrive already folded and paged; this only
//! colours them by tone.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Padding, Paragraph};

use crate::core::projector::{DetailPaneView, Tone};
use crate::tui::component::Component;

pub struct RecipeDetail<'a> {
    pub view: &'a DetailPaneView,
}

impl<'a> RecipeDetail<'a> {
    pub fn new(view: &'a DetailPaneView) -> Self {
        Self { view }
    }
}

pub fn tone_style(tone: Tone) -> Style {
    match tone {
        Tone::Normal => Style::default().fg(Color::White),
        Tone::Dim => Style::default().fg(Color::Gray),
        Tone::Met => Style::default().fg(Color::Green),
        Tone::Unmet => Style::default().fg(Color::Red),
    }
}

impl Component for RecipeDetail<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = self
            .view
            .lines
            .iter()
            .map(|l| Line::styled(l.text.clone(), tone_style(l.tone)))
            .collect();
        let block = Block::new().padding(Padding::horizontal(1));
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::projector::DetailLine;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_requirement_tones() {
        let view = DetailPaneView {
            lines: vec![
                DetailLine {
                    text: "Components required:".into(),
                    tone: Tone::Normal,
                },
                DetailLine {
                    text: "> nail (4)".into(),
                    tone: Tone::Met,
                },
                DetailLine {
                    text: "> plank (2)".into(),
                    tone: Tone::Unmet,
                },
            ],
        };
        let mut terminal = Terminal::new(TestBackend::new(30, 3)).unwrap();
        terminal
            .draw(|f| RecipeDetail::new(&view).render(f, f.area()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(1, 0)].symbol(), "C");
        assert_eq!(buffer[(1, 1)].fg, Color::Green);
        assert_eq!(buffer[(1, 2)].fg, Color::Red);
    }
}
