//! # Greeting Screen
//!
//! Heading, name field, and the greeting once one has been derived.
//! The field itself is `NameInput`; this component only lays it out.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;
use crate::tui::components::NameInput;

pub const HEADING: &str = "Hello there!";
const HINT: &str = "Enter: Greet Me";

pub struct GreetingScreen<'a> {
    /// Derived greeting from core state (empty until the first greet)
    pub greeting: &'a str,
    pub input: &'a mut NameInput,
}

impl Component for GreetingScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Length, Min};
        let [heading_area, _, input_area, hint_area, _, greeting_area, _] = Layout::vertical([
            Length(1),
            Length(1),
            Length(3),
            Length(1),
            Length(1),
            Length(1),
            Min(0),
        ])
        .areas(area);

        frame.render_widget(
            Line::from(Span::styled(
                HEADING,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            heading_area,
        );

        self.input.focused = true;
        self.input.render(frame, input_area);

        frame.render_widget(
            Line::from(Span::styled(HINT, Style::default().fg(Color::DarkGray))),
            hint_area,
        );

        if !self.greeting.trim().is_empty() {
            let greeting = Paragraph::new(self.greeting).style(
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            );
            frame.render_widget(greeting, greeting_area);
        }
    }
}
