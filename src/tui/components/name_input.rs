//! # NameInput Component
//!
//! Single-line text field for the greeting screen.
//!
//! The buffer and cursor are internal state. Every edit emits
//! `NameEvent::Changed` with the full buffer so the core's `GreetingInput`
//! always mirrors what is on screen; Enter emits `NameEvent::Submit`.
//! The buffer is never cleared on submit.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Borders take one column on each side.
const BORDER_OFFSET: u16 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameEvent {
    Changed(String),
    Submit,
}

pub struct NameInput {
    pub buffer: String,
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    cursor: usize,
    /// Whether the terminal cursor should be placed in this field
    pub focused: bool,
}

impl NameInput {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            focused: true,
        }
    }

    fn insert_str(&mut self, text: &str) {
        self.buffer.insert_str(self.cursor, text);
        self.cursor += text.len();
    }

    fn prev_boundary(&self) -> usize {
        self.buffer[..self.cursor]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i)
    }

    fn next_boundary(&self) -> usize {
        self.buffer[self.cursor..]
            .chars()
            .next()
            .map_or(self.cursor, |c| self.cursor + c.len_utf8())
    }

    /// Display column of the cursor inside the field.
    fn cursor_column(&self) -> u16 {
        u16::try_from(self.buffer[..self.cursor].width()).unwrap_or(u16::MAX)
    }
}

impl Default for NameInput {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for NameInput {
    type Event = NameEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<NameEvent> {
        match event {
            TuiEvent::Submit => return Some(NameEvent::Submit),
            TuiEvent::InputChar(c) if !c.is_control() => {
                let mut utf8 = [0u8; 4];
                self.insert_str(c.encode_utf8(&mut utf8));
            }
            TuiEvent::Paste(text) => {
                // Single-line field: fold pasted newlines into spaces
                let line: String = text
                    .chars()
                    .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
                    .filter(|c| !c.is_control())
                    .collect();
                if line.is_empty() {
                    return None;
                }
                self.insert_str(&line);
            }
            TuiEvent::Backspace => {
                if self.cursor == 0 {
                    return None;
                }
                let start = self.prev_boundary();
                self.buffer.replace_range(start..self.cursor, "");
                self.cursor = start;
            }
            TuiEvent::Delete => {
                if self.cursor == self.buffer.len() {
                    return None;
                }
                let end = self.next_boundary();
                self.buffer.replace_range(self.cursor..end, "");
            }
            TuiEvent::CursorLeft => {
                self.cursor = self.prev_boundary();
                return None;
            }
            TuiEvent::CursorRight => {
                self.cursor = self.next_boundary();
                return None;
            }
            TuiEvent::Home => {
                self.cursor = 0;
                return None;
            }
            TuiEvent::End => {
                self.cursor = self.buffer.len();
                return None;
            }
            _ => return None,
        }
        Some(NameEvent::Changed(self.buffer.clone()))
    }
}

impl Component for NameInput {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(BORDER_OFFSET * 2);
        // Scroll horizontally so the cursor stays visible
        let column = self.cursor_column();
        let scroll = column.saturating_sub(inner_width.saturating_sub(1));

        let paragraph = Paragraph::new(self.buffer.as_str())
            .block(Block::bordered().title("Enter your name"))
            .scroll((0, scroll));
        frame.render_widget(paragraph, area);

        if self.focused && area.height > BORDER_OFFSET * 2 {
            frame.set_cursor_position(Position::new(
                area.x + BORDER_OFFSET + (column - scroll),
                area.y + BORDER_OFFSET,
            ));
        }
    }
}
