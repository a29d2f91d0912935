#[cfg(test)]
#[path = "chat_log_test.rs"]
mod tests;

use ratatui::prelude::Backend;
use ratatui::prelude::Rect;
use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::domain::models::Author;
use crate::domain::models::Message;
use crate::domain::models::MessageType;

/// Renders transcript messages as labeled, width-wrapped lines.
#[derive(Default)]
pub struct ChatLog {
    lines: Vec<Line<'static>>,
}

impl ChatLog {
    pub fn set_messages(&mut self, messages: &[Message], line_width: u16) {
        let wrap_width = usize::from(line_width.saturating_sub(2)).max(1);

        let mut lines: Vec<Line<'static>> = vec![];
        for message in messages {
            let mut label_style = Style::default().add_modifier(Modifier::BOLD);
            label_style = match message.author {
                Author::User => label_style.fg(Color::Blue),
                Author::Assistant => label_style.fg(Color::Magenta),
            };

            let mut text_style = Style::default();
            if message.message_type() == MessageType::Error {
                text_style = text_style.fg(Color::Red);
            }

            lines.push(Line::from(Span::styled(
                message.author.to_string(),
                label_style,
            )));
            for text_line in message.as_string_lines(wrap_width) {
                lines.push(Line::from(Span::styled(text_line, text_style)));
            }
            lines.push(Line::from(""));
        }

        self.lines = lines;
    }

    pub fn len(&self) -> usize {
        return self.lines.len();
    }

    pub fn render<B: Backend>(&self, frame: &mut Frame<B>, rect: Rect, scroll: u16) {
        frame.render_widget(Paragraph::new(self.lines.clone()).scroll((scroll, 0)), rect);
    }
}
