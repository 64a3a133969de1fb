//! Timing resolution for the splash animation

use std::time::Duration;

use super::{CHAR_INTERVAL_FLOOR_MS, CHAR_INTERVAL_MS, LINE_PAUSE_MS, MIN_TOTAL_MS, SETTLE_MS};

/// Caller-supplied knobs for [`Schedule::resolve`].
#[derive(Debug, Clone, Copy)]
pub struct ScheduleOptions {
    /// Lower bound on total visible duration, clamped up to [`MIN_TOTAL_MS`].
    pub total_duration_ms: u64,
    /// Fixed per-character interval instead of the derived one.
    pub char_interval_ms: Option<u64>,
    /// Hold after each completed line.
    pub line_pause_ms: Option<u64>,
}

impl Default for ScheduleOptions {
    fn default() -> Self {
        Self {
            total_duration_ms: MIN_TOTAL_MS,
            char_interval_ms: None,
            line_pause_ms: None,
        }
    }
}

/// Fully resolved timing for one splash run.
///
/// All boundaries are precomputed here so the typewriter's transition
/// function stays a pure lookup over elapsed time.
#[derive(Debug, Clone)]
pub struct Schedule {
    char_interval: Duration,
    line_pause: Duration,
    floor: Duration,
    typing_end: Duration,
    completion_at: Duration,
    char_counts: Vec<usize>,
}

impl Schedule {
    /// Resolve the timing policy for `lines`.
    ///
    /// The per-character interval is derived by dividing the typing budget
    /// (duration floor minus settle buffer minus line pauses) by the total
    /// character count, clamped to `[CHAR_INTERVAL_FLOOR_MS, CHAR_INTERVAL_MS]`.
    /// With short line lists this resolves to the default 80ms/char; a very
    /// long script compresses toward the 20ms floor so it still fits.
    pub fn resolve(lines: &[String], opts: &ScheduleOptions) -> Self {
        let char_counts: Vec<usize> = lines.iter().map(|l| l.chars().count()).collect();
        let total_chars: u64 = char_counts.iter().map(|&c| c as u64).sum();

        let floor_ms = opts.total_duration_ms.max(MIN_TOTAL_MS);
        let pause_ms = opts.line_pause_ms.unwrap_or(LINE_PAUSE_MS);
        let pauses_total = pause_ms * lines.len() as u64;

        let interval_ms = match opts.char_interval_ms {
            Some(ms) => ms.max(CHAR_INTERVAL_FLOOR_MS),
            None if total_chars == 0 => CHAR_INTERVAL_MS,
            None => {
                let budget = floor_ms
                    .saturating_sub(SETTLE_MS)
                    .saturating_sub(pauses_total);
                (budget / total_chars).clamp(CHAR_INTERVAL_FLOOR_MS, CHAR_INTERVAL_MS)
            }
        };

        let typing_end_ms = total_chars * interval_ms + pauses_total;
        let completion_ms = typing_end_ms.max(floor_ms);

        Self {
            char_interval: Duration::from_millis(interval_ms),
            line_pause: Duration::from_millis(pause_ms),
            floor: Duration::from_millis(floor_ms),
            typing_end: Duration::from_millis(typing_end_ms),
            completion_at: Duration::from_millis(completion_ms),
            char_counts,
        }
    }

    pub fn char_interval(&self) -> Duration {
        self.char_interval
    }

    pub fn line_pause(&self) -> Duration {
        self.line_pause
    }

    /// Clamped minimum total visible duration.
    pub fn floor(&self) -> Duration {
        self.floor
    }

    /// Moment the last line (and its trailing pause) finishes.
    pub fn typing_end(&self) -> Duration {
        self.typing_end
    }

    /// Moment the completion signal fires: typing end or the duration floor,
    /// whichever is later.
    pub fn completion_at(&self) -> Duration {
        self.completion_at
    }

    pub fn char_counts(&self) -> &[usize] {
        &self.char_counts
    }

    /// Start and end of the typing span for each line (pause excluded).
    pub fn line_spans(&self) -> Vec<(Duration, Duration)> {
        let mut spans = Vec::with_capacity(self.char_counts.len());
        let mut cursor = Duration::ZERO;
        for &chars in &self.char_counts {
            let end = cursor + self.char_interval * chars as u32;
            spans.push((cursor, end));
            cursor = end + self.line_pause;
        }
        spans
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn default_lines_resolve_to_classic_interval() {
        let lines = lines(&["cd myportfolio", "code ."]);
        let schedule = Schedule::resolve(
            &lines,
            &ScheduleOptions {
                total_duration_ms: 4600,
                ..Default::default()
            },
        );
        // 20 chars in a 3400ms budget derives well above the cap.
        assert_eq!(schedule.char_interval(), Duration::from_millis(80));
        assert_eq!(schedule.floor(), Duration::from_millis(4600));
        // 20 * 80 + 2 * 300 = 2200ms of typing, floor wins.
        assert_eq!(schedule.typing_end(), Duration::from_millis(2200));
        assert_eq!(schedule.completion_at(), Duration::from_millis(4600));
    }

    #[test]
    fn requested_duration_is_clamped_to_minimum() {
        let schedule = Schedule::resolve(
            &lines(&["hi"]),
            &ScheduleOptions {
                total_duration_ms: 100,
                ..Default::default()
            },
        );
        assert_eq!(schedule.floor(), Duration::from_millis(MIN_TOTAL_MS));
    }

    #[test]
    fn long_script_compresses_but_never_below_floor_interval() {
        let long = lines(&["x".repeat(2000).as_str()]);
        let schedule = Schedule::resolve(
            &long,
            &ScheduleOptions {
                total_duration_ms: 4000,
                ..Default::default()
            },
        );
        assert_eq!(
            schedule.char_interval(),
            Duration::from_millis(CHAR_INTERVAL_FLOOR_MS)
        );
        // Typing overruns the floor, so completion tracks typing end.
        assert_eq!(schedule.completion_at(), schedule.typing_end());
    }

    #[test]
    fn empty_line_list_completes_at_floor() {
        let schedule = Schedule::resolve(&[], &ScheduleOptions::default());
        assert_eq!(schedule.typing_end(), Duration::ZERO);
        assert_eq!(schedule.completion_at(), schedule.floor());
    }

    #[test]
    fn char_counts_are_characters_not_bytes() {
        let schedule = Schedule::resolve(&lines(&["héllo ✓"]), &ScheduleOptions::default());
        assert_eq!(schedule.char_counts(), &[7]);
    }

    #[test]
    fn line_spans_are_contiguous_with_pauses() {
        let schedule = Schedule::resolve(
            &lines(&["ab", "cd"]),
            &ScheduleOptions {
                total_duration_ms: 3000,
                char_interval_ms: Some(100),
                line_pause_ms: Some(300),
            },
        );
        let spans = schedule.line_spans();
        assert_eq!(spans[0], (Duration::ZERO, Duration::from_millis(200)));
        assert_eq!(
            spans[1],
            (Duration::from_millis(500), Duration::from_millis(700))
        );
    }

    #[test]
    fn explicit_interval_override_respects_floor() {
        let schedule = Schedule::resolve(
            &lines(&["abc"]),
            &ScheduleOptions {
                total_duration_ms: 3000,
                char_interval_ms: Some(1),
                line_pause_ms: None,
            },
        );
        assert_eq!(
            schedule.char_interval(),
            Duration::from_millis(CHAR_INTERVAL_FLOOR_MS)
        );
    }
}
