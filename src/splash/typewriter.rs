//! Typewriter state machine

use std::time::Duration;

use tracing::debug;

use super::{CompletionLatch, Schedule};

/// Where the animation currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Revealing characters of line `line`.
    Typing { line: usize },
    /// Line `line` is fully typed, holding before the next one starts.
    LinePause { line: usize },
    /// Everything is typed; waiting out the duration floor.
    Holding,
    Done,
}

/// One line of the script with its revealed prefix.
#[derive(Debug, Clone, Copy)]
pub struct TypedLine<'a> {
    pub full: &'a str,
    pub typed: &'a str,
    pub complete: bool,
}

/// Character-by-character reveal of a fixed line list.
///
/// The machine is pure over elapsed time: [`Typewriter::advance_to`] takes
/// the absolute duration since start and steps through every boundary it has
/// crossed, so the host's tick cadence (UI timer, test clock) cannot change
/// the observable schedule. Revealed prefixes only ever grow, and the
/// completion signal is latched to fire exactly once per instance.
#[derive(Debug)]
pub struct Typewriter {
    lines: Vec<String>,
    schedule: Schedule,
    /// Characters revealed per line, monotonically non-decreasing.
    progress: Vec<usize>,
    phase: Phase,
    last_elapsed: Duration,
    latch: CompletionLatch,
}

impl Typewriter {
    pub fn new(lines: Vec<String>, schedule: Schedule) -> Self {
        let phase = if lines.is_empty() {
            Phase::Holding
        } else {
            Phase::Typing { line: 0 }
        };
        Self {
            progress: vec![0; lines.len()],
            lines,
            schedule,
            phase,
            last_elapsed: Duration::ZERO,
            latch: CompletionLatch::new(),
        }
    }

    /// Advance the machine to `elapsed` since start.
    ///
    /// Returns `true` exactly once, on the call that completes the splash.
    /// Elapsed times below the high-water mark are ignored, so a late or
    /// reordered tick can never roll progress back.
    pub fn advance_to(&mut self, elapsed: Duration) -> bool {
        if elapsed < self.last_elapsed {
            return false;
        }
        self.last_elapsed = elapsed;

        let interval = self.schedule.char_interval();
        let pause = self.schedule.line_pause();
        let mut t = elapsed;

        for (i, &chars) in self.schedule.char_counts().iter().enumerate() {
            let typing_span = interval * chars as u32;
            if t < typing_span {
                let revealed = (t.as_millis() / interval.as_millis().max(1)) as usize;
                self.progress[i] = self.progress[i].max(revealed.min(chars));
                self.set_phase(Phase::Typing { line: i });
                return false;
            }
            t -= typing_span;
            self.progress[i] = chars;
            if t < pause {
                self.set_phase(Phase::LinePause { line: i });
                return false;
            }
            t -= pause;
        }

        if elapsed < self.schedule.completion_at() {
            self.set_phase(Phase::Holding);
            return false;
        }

        self.set_phase(Phase::Done);
        self.latch.fire()
    }

    /// Jump straight to the end of the script and latch completion.
    ///
    /// Used for the opt-in any-key skip. Goes through the same latch as the
    /// timed path, so completion still fires at most once.
    pub fn skip(&mut self) -> bool {
        for (i, &chars) in self.schedule.char_counts().iter().enumerate() {
            self.progress[i] = chars;
        }
        self.last_elapsed = self.last_elapsed.max(self.schedule.completion_at());
        self.set_phase(Phase::Done);
        self.latch.fire()
    }

    fn set_phase(&mut self, phase: Phase) {
        if self.phase != phase {
            debug!(?phase, "splash phase change");
            self.phase = phase;
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True while any line still has characters (or its pause) ahead.
    pub fn is_typing(&self) -> bool {
        matches!(self.phase, Phase::Typing { .. } | Phase::LinePause { .. })
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Current reveal state of every line, in script order.
    pub fn lines(&self) -> impl Iterator<Item = TypedLine<'_>> {
        self.lines.iter().zip(&self.progress).map(|(line, &n)| {
            let end = line
                .char_indices()
                .nth(n)
                .map(|(i, _)| i)
                .unwrap_or(line.len());
            TypedLine {
                full: line.as_str(),
                typed: &line[..end],
                complete: n == line.chars().count(),
            }
        })
    }
}
