//! Application shell: owns the splash-to-content hand-off

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use tracing::{debug, info};

use crate::config::Config;
use crate::splash::{Schedule, ScheduleOptions, Typewriter};
use crate::tui::components::{ContentView, SplashScreen};
use crate::tui::events::{Event, Events};
use crate::tui::styles::{FadeLevel, Theme};
use crate::tui::TerminalGuard;

/// Length of the splash-to-content cross-fade.
pub const FADE_MS: u64 = 600;

/// Shell lifecycle. Strictly forward; there is no way back to the splash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellPhase {
    ShowingSplash,
    Transitioning { since: Duration },
    ShowingContent,
}

pub struct App {
    typewriter: Typewriter,
    splash: SplashScreen,
    content: ContentView,
    theme: Theme,
    phase: ShellPhase,
    skippable: bool,
    elapsed: Duration,
    should_quit: bool,
}

impl App {
    pub fn new(config: &Config, theme: Theme) -> Self {
        let schedule = Schedule::resolve(
            &config.splash.lines,
            &ScheduleOptions {
                total_duration_ms: config.splash.total_duration_ms,
                char_interval_ms: config.splash.char_interval_ms,
                line_pause_ms: config.splash.line_pause_ms,
            },
        );
        Self {
            typewriter: Typewriter::new(config.splash.lines.clone(), schedule),
            splash: SplashScreen::new(&config.splash.prompt_user, &config.splash.prompt_path),
            content: ContentView::new(&config.content),
            theme,
            phase: ShellPhase::ShowingSplash,
            skippable: config.splash.skippable,
            elapsed: Duration::ZERO,
            should_quit: false,
        }
    }

    pub async fn run(mut self, terminal: &mut TerminalGuard, events: &mut Events) -> anyhow::Result<()> {
        let started = Instant::now();
        info!("splash started");
        loop {
            terminal.draw(|frame| self.draw(frame))?;

            match events.next().await {
                Some(Event::Tick) => self.on_tick(started.elapsed()),
                Some(Event::Key(key)) => self.on_key(key),
                Some(Event::Resize) => {}
                None => break,
            }

            if self.should_quit {
                break;
            }
        }
        Ok(())
    }

    /// Advance animation state to `elapsed` since mount.
    pub fn on_tick(&mut self, elapsed: Duration) {
        self.elapsed = elapsed;

        if self.typewriter.advance_to(elapsed) {
            self.on_splash_done();
        }

        if let ShellPhase::Transitioning { since } = self.phase {
            if elapsed.saturating_sub(since) >= Duration::from_millis(FADE_MS) {
                debug!("cross-fade finished");
                self.phase = ShellPhase::ShowingContent;
            }
        }
    }

    /// Completion hand-off from the splash. Idempotent: the timer fires it
    /// once, but extra calls must not restart the fade.
    pub fn on_splash_done(&mut self) {
        if self.phase == ShellPhase::ShowingSplash {
            info!("splash complete, starting cross-fade");
            self.phase = ShellPhase::Transitioning {
                since: self.elapsed,
            };
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            _ if self.skippable && self.phase == ShellPhase::ShowingSplash => {
                if self.typewriter.skip() {
                    self.on_splash_done();
                }
            }
            _ => {}
        }
    }

    pub fn phase(&self) -> ShellPhase {
        self.phase
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn fades(&self) -> (FadeLevel, FadeLevel) {
        match self.phase {
            ShellPhase::ShowingSplash => (FadeLevel::Full, FadeLevel::Hidden),
            ShellPhase::Transitioning { since } => {
                let ratio = self.elapsed.saturating_sub(since).as_millis() as f32
                    / FADE_MS as f32;
                let ratio = ratio.clamp(0.0, 1.0);
                (
                    FadeLevel::from_ratio(1.0 - ratio),
                    FadeLevel::from_ratio(ratio),
                )
            }
            ShellPhase::ShowingContent => (FadeLevel::Hidden, FadeLevel::Full),
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let (splash_fade, content_fade) = self.fades();

        // Content sits beneath; the splash overlays it while visible.
        self.content.render(frame, area, &self.theme, content_fade);
        self.splash
            .render(frame, area, &self.theme, splash_fade, &self.typewriter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn make_app(skippable: bool) -> App {
        let mut config = Config::default();
        config.splash.skippable = skippable;
        App::new(&config, Theme::default())
    }

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        }
    }

    #[test]
    fn phases_progress_forward_only() {
        let mut app = make_app(false);
        assert_eq!(app.phase(), ShellPhase::ShowingSplash);

        // Default schedule completes at 4600ms; fade runs 600ms after.
        for t in (0..=4500).step_by(33) {
            app.on_tick(ms(t));
            assert_eq!(app.phase(), ShellPhase::ShowingSplash);
        }
        app.on_tick(ms(4600));
        assert!(matches!(app.phase(), ShellPhase::Transitioning { .. }));
        app.on_tick(ms(5200));
        assert_eq!(app.phase(), ShellPhase::ShowingContent);

        // Later ticks never resurrect the splash.
        app.on_tick(ms(60_000));
        assert_eq!(app.phase(), ShellPhase::ShowingContent);
    }

    #[test]
    fn splash_done_is_idempotent() {
        let mut app = make_app(false);
        app.on_tick(ms(4600));
        let ShellPhase::Transitioning { since } = app.phase() else {
            panic!("expected transition");
        };
        app.on_splash_done();
        app.on_splash_done();
        assert_eq!(app.phase(), ShellPhase::Transitioning { since });
    }

    #[test]
    fn any_key_skips_only_when_enabled() {
        let mut app = make_app(false);
        app.on_tick(ms(100));
        app.on_key(key(KeyCode::Char('x')));
        assert_eq!(app.phase(), ShellPhase::ShowingSplash);

        let mut app = make_app(true);
        app.on_tick(ms(100));
        app.on_key(key(KeyCode::Char('x')));
        assert!(matches!(app.phase(), ShellPhase::Transitioning { .. }));
        // A second press during the fade changes nothing.
        app.on_key(key(KeyCode::Char('x')));
        assert!(matches!(app.phase(), ShellPhase::Transitioning { .. }));
    }

    #[test]
    fn quit_keys_work_in_every_phase() {
        let mut app = make_app(false);
        app.on_key(key(KeyCode::Char('q')));
        assert!(app.should_quit());

        let mut app = make_app(false);
        app.on_tick(ms(10_000));
        app.on_key(key(KeyCode::Esc));
        assert!(app.should_quit());
    }
}
