//! # FilterPrompt Component
//!
//! Modal single-line editor for the recipe filter, with the prefix help
//! shown underneath. Opens prefilled with the current filter; Enter submits
//! (an empty submission clears the filter), Esc cancels.
//!
//! The cursor is a byte offset into `buffer`, always on a char boundary.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::filter::FILTER_HELP;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::popup::centered_rect;
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptEvent {
    Submit(String),
    Cancel,
}

#[derive(Debug, Clone)]
pub struct FilterPrompt {
    pub buffer: String,
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    pos: usize,
}

impl FilterPrompt {
    pub fn new(initial: &str) -> Self {
        Self {
            buffer: initial.to_string(),
            pos: initial.len(),
        }
    }

    pub fn cursor(&self) -> usize {
        self.pos
    }

    /// Text to show in a field `width` columns wide, and the cursor column in it.
    /// Scrolls horizontally so the cursor stays visible.
    fn visible(&self, width: usize) -> (&str, usize) {
        let width = width.max(1);
        let mut start = 0;
        while self.buffer[start..self.pos].width() >= width {
            start = next_char_boundary(&self.buffer, start);
        }
        (&self.buffer[start..], self.buffer[start..self.pos].width())
    }

    fn insert(&mut self, text: &str) {
        self.buffer.insert_str(self.pos, text);
        self.pos += text.len();
    }
}

impl EventHandler for FilterPrompt {
    type Event = PromptEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<PromptEvent> {
        match event {
            TuiEvent::InputChar(c) => {
                self.insert(c.encode_utf8(&mut [0; 4]));
                None
            }
            TuiEvent::Paste(text) => {
                let line: String = text.chars().filter(|c| !c.is_control()).collect();
                self.insert(&line);
                None
            }
            TuiEvent::Backspace => {
                if self.pos > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.pos);
                    self.buffer.drain(prev..self.pos);
                    self.pos = prev;
                }
                None
            }
            TuiEvent::Delete => {
                if self.pos < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.pos);
                    self.buffer.drain(self.pos..next);
                }
                None
            }
            TuiEvent::CursorLeft => {
                if self.pos > 0 {
                    self.pos = prev_char_boundary(&self.buffer, self.pos);
                }
                None
            }
            TuiEvent::CursorRight => {
                if self.pos < self.buffer.len() {
                    self.pos = next_char_boundary(&self.buffer, self.pos);
                }
                None
            }
            TuiEvent::CursorHome => {
                self.pos = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.pos = self.buffer.len();
                None
            }
            TuiEvent::Submit => Some(PromptEvent::Submit(self.buffer.clone())),
            TuiEvent::Escape => Some(PromptEvent::Cancel),
            _ => None,
        }
    }
}

impl Component for FilterPrompt {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(70, 80, area);
        frame.render_widget(Clear, overlay);

        let help_height = u16::try_from(FILTER_HELP.lines().count()).unwrap_or(u16::MAX);
        let [input_area, help_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Max(help_height + 2),
        ])
        .areas(overlay);

        let field_width = usize::from(input_area.width.saturating_sub(2));
        let (text, cursor_col) = self.visible(field_width);
        let input = Paragraph::new(text.to_string())
            .style(Style::default().fg(Color::Green))
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .title(" Search: "),
            );
        frame.render_widget(input, input_area);

        let help = Paragraph::new(FILTER_HELP)
            .style(Style::default().fg(Color::Gray))
            .block(Block::bordered().border_style(Style::default().fg(Color::DarkGray)));
        frame.render_widget(help, help_area);

        let x = input_area.x + 1 + u16::try_from(cursor_col).unwrap_or(0);
        frame.set_cursor_position((x, input_area.y + 1));
    }
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn type_str(prompt: &mut FilterPrompt, text: &str) {
        for c in text.chars() {
            prompt.handle_event(&TuiEvent::InputChar(c));
        }
    }

    #[test]
    fn test_prefilled_with_cursor_at_end() {
        let prompt = FilterPrompt::new("c:nail");
        assert_eq!(prompt.buffer, "c:nail");
        assert_eq!(prompt.cursor(), 6);
    }

    #[test]
    fn test_editing() {
        let mut prompt = FilterPrompt::new("");
        type_str(&mut prompt, "cafe");
        prompt.handle_event(&TuiEvent::Backspace);
        type_str(&mut prompt, "é");
        assert_eq!(prompt.buffer, "café");

        prompt.handle_event(&TuiEvent::CursorHome);
        type_str(&mut prompt, "n:");
        assert_eq!(prompt.buffer, "n:café");

        prompt.handle_event(&TuiEvent::CursorEnd);
        prompt.handle_event(&TuiEvent::CursorLeft);
        prompt.handle_event(&TuiEvent::Delete);
        assert_eq!(prompt.buffer, "n:caf");
    }

    #[test]
    fn test_paste_drops_newlines() {
        let mut prompt = FilterPrompt::new("");
        prompt.handle_event(&TuiEvent::Paste("two by\nfour".into()));
        assert_eq!(prompt.buffer, "two byfour");
    }

    #[test]
    fn test_submit_and_cancel() {
        let mut prompt = FilterPrompt::new("hammer ");
        assert_eq!(
            prompt.handle_event(&TuiEvent::Submit),
            Some(PromptEvent::Submit("hammer ".into()))
        );
        let mut prompt = FilterPrompt::new("  c:nail");
        assert_eq!(
            prompt.handle_event(&TuiEvent::Submit),
            Some(PromptEvent::Submit("  c:nail".into()))
        );
        assert_eq!(prompt.handle_event(&TuiEvent::Escape), Some(PromptEvent::Cancel));
    }

    #[test]
    fn test_char_boundaries() {
        let s = "a🔥b";
        assert_eq!(prev_char_boundary(s, 5), 1);
        assert_eq!(next_char_boundary(s, 1), 5);
        assert_eq!(next_char_boundary(s, 5), 6);
    }

    #[test]
    fn test_visible_scrolls_to_cursor() {
        let prompt = FilterPrompt::new("abcdefghij");
        let (text, col) = prompt.visible(4);
        assert_eq!(text, "hij");
        assert_eq!(col, 3);

        let short = FilterPrompt::new("ab");
        let (text, col) = short.visible(4);
        assert_eq!((text, col), ("ab", 2));
    }

    #[test]
    fn test_render_shows_text_and_help() {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        let mut prompt = FilterPrompt::new("t:saw");
        terminal.draw(|f| prompt.render(f, f.area())).unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Search:"));
        assert!(text.contains("t:saw"));
        assert!(text.contains("[t] search tools"));
    }
}
