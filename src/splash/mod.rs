//! Splash animation core: timing resolution and the typewriter state machine

mod latch;
mod schedule;
mod typewriter;

pub use latch::CompletionLatch;
pub use schedule::{Schedule, ScheduleOptions};
pub use typewriter::{Phase, TypedLine, Typewriter};

/// Minimum total visible duration. Requests below this are clamped up.
pub const MIN_TOTAL_MS: u64 = 3000;

/// Tail window reserved after typing finishes, so the resting prompt gets a
/// visible beat before the fade starts.
pub const SETTLE_MS: u64 = 600;

/// Default per-character typing interval.
pub const CHAR_INTERVAL_MS: u64 = 80;

/// Lower bound on the per-character interval. Below this the reveal reads as
/// flashing rather than typing.
pub const CHAR_INTERVAL_FLOOR_MS: u64 = 20;

/// Hold after a line reaches full length before the next line starts.
pub const LINE_PAUSE_MS: u64 = 300;
