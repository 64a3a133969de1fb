//! Content view revealed beneath the splash

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::config::ContentConfig;
use crate::tui::styles::{FadeLevel, Theme};

pub struct ContentView {
    title: String,
    body: String,
}

impl ContentView {
    pub fn new(content: &ContentConfig) -> Self {
        Self {
            title: content.title.clone(),
            body: content.body.clone(),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme, fade: FadeLevel) {
        if fade == FadeLevel::Hidden {
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(30),
                Constraint::Length(2),
                Constraint::Min(1),
            ])
            .split(area);

        let title = Paragraph::new(Line::from(Span::styled(
            &*self.title,
            Style::default().fg(theme.faded(theme.accent, fade)).bold(),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(title, chunks[1]);

        let body = Paragraph::new(&*self.body)
            .style(Style::default().fg(theme.faded(theme.text, fade)))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(body, chunks[2]);
    }
}
