//! Splash overlay: simulated terminal window with typed commands

use ratatui::prelude::*;
use ratatui::widgets::*;
use unicode_width::UnicodeWidthStr;

use crate::splash::Typewriter;
use crate::tui::styles::{FadeLevel, Theme};

pub struct SplashScreen {
    prompt_user: String,
    prompt_path: String,
}

impl SplashScreen {
    pub fn new(prompt_user: &str, prompt_path: &str) -> Self {
        Self {
            prompt_user: prompt_user.to_string(),
            prompt_path: prompt_path.to_string(),
        }
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        theme: &Theme,
        fade: FadeLevel,
        typewriter: &Typewriter,
    ) {
        if fade == FadeLevel::Hidden {
            return;
        }

        let window = self.window_area(area, typewriter);
        frame.render_widget(Clear, window);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.faded(theme.border, fade)));
        let inner = block.inner(window);
        frame.render_widget(block, window);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(2)
            .constraints([
                Constraint::Length(1), // title bar
                Constraint::Length(1),
                Constraint::Min(1), // typed lines
            ])
            .split(inner);

        frame.render_widget(self.title_bar(theme, fade), chunks[0]);
        frame.render_widget(self.typed_lines(theme, fade, typewriter), chunks[2]);
    }

    /// Centered window sized to the script.
    fn window_area(&self, area: Rect, typewriter: &Typewriter) -> Rect {
        let prompt_width = self.prompt_user.width() + self.prompt_path.width() + 4;
        let widest = typewriter
            .lines()
            .map(|l| l.full.width())
            .max()
            .unwrap_or(0);
        // Order-safe: on a terminal narrower than the preferred minimum the
        // window shrinks to fit instead of asserting in `clamp`.
        let width = ((prompt_width + widest + 8) as u16).clamp(40.min(area.width), area.width);
        // Initial prompt, one row per line, resting prompt, chrome.
        let rows = typewriter.lines().count() as u16 + 2;
        let height = (rows + 4).min(area.height);

        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    fn title_bar(&self, theme: &Theme, fade: FadeLevel) -> Paragraph<'_> {
        let dot = |color| Span::styled("●", Style::default().fg(theme.faded(color, fade)));
        Paragraph::new(Line::from(vec![
            dot(Color::Red),
            Span::raw(" "),
            dot(Color::Yellow),
            Span::raw(" "),
            dot(Color::Green),
            Span::raw("   "),
            Span::styled(
                "Terminal",
                Style::default().fg(theme.faded(theme.dimmed, fade)),
            ),
        ]))
    }

    fn typed_lines<'a>(
        &'a self,
        theme: &Theme,
        fade: FadeLevel,
        typewriter: &'a Typewriter,
    ) -> Paragraph<'a> {
        let text_style = Style::default().fg(theme.faded(theme.text, fade));
        let cursor = Span::styled("█", Style::default().fg(theme.faded(theme.cursor, fade)));

        // Initial bare prompt above the typed commands.
        let mut rows = vec![Line::from(self.prompt(theme, fade))];

        let mut cursor_placed = false;
        for line in typewriter.lines() {
            if line.complete {
                let mut spans = self.prompt(theme, fade);
                spans.push(Span::styled(line.typed, text_style));
                rows.push(Line::from(spans));
            } else {
                // In-flight line carries the cursor; later lines stay hidden.
                let mut spans = self.prompt(theme, fade);
                spans.push(Span::styled(line.typed, text_style));
                spans.push(cursor.clone());
                rows.push(Line::from(spans));
                cursor_placed = true;
                break;
            }
        }

        // Resting prompt once every line is fully typed.
        if !cursor_placed {
            let mut spans = self.prompt(theme, fade);
            spans.push(cursor);
            rows.push(Line::from(spans));
        }

        Paragraph::new(rows)
    }

    fn prompt(&self, theme: &Theme, fade: FadeLevel) -> Vec<Span<'_>> {
        vec![
            Span::styled(
                &*self.prompt_user,
                Style::default().fg(theme.faded(theme.prompt_user, fade)),
            ),
            Span::raw(" "),
            Span::styled(
                &*self.prompt_path,
                Style::default().fg(theme.faded(theme.prompt_path, fade)),
            ),
            Span::raw(" "),
            Span::styled("$", Style::default().fg(theme.faded(theme.text, fade))),
            Span::raw(" "),
        ]
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use super::*;
    use crate::splash::{Schedule, ScheduleOptions};

    fn typewriter(items: &[&str]) -> Typewriter {
        let lines: Vec<String> = items.iter().map(|s| s.to_string()).collect();
        let schedule = Schedule::resolve(
            &lines,
            &ScheduleOptions {
                total_duration_ms: 4600,
                ..Default::default()
            },
        );
        Typewriter::new(lines, schedule)
    }

    fn draw(width: u16, height: u16, typewriter: &Typewriter) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let splash = SplashScreen::new("user@portfolio", "~");
        terminal
            .draw(|frame| {
                splash.render(
                    frame,
                    frame.area(),
                    &Theme::default(),
                    FadeLevel::Full,
                    typewriter,
                )
            })
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn renders_on_a_narrow_terminal() {
        let mut tw = typewriter(&["cd myportfolio", "code ."]);
        tw.advance_to(Duration::from_millis(500));
        // Narrower than the preferred 40-column window.
        let screen = draw(30, 12, &tw);
        assert!(screen.contains("$"));
    }

    #[test]
    fn renders_on_a_tiny_terminal() {
        let tw = typewriter(&["cd myportfolio"]);
        for (w, h) in [(10, 3), (1, 1), (0, 0), (5, 40)] {
            draw(w, h, &tw);
        }
    }

    #[test]
    fn shows_terminal_chrome_when_there_is_room() {
        let mut tw = typewriter(&["cd myportfolio", "code ."]);
        tw.advance_to(Duration::from_millis(4600));
        let screen = draw(80, 24, &tw);
        assert!(screen.contains("Terminal"));
        assert!(screen.contains("cd myportfolio"));
        assert!(screen.contains("code ."));
    }
}
