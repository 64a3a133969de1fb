//! One-shot completion latch

/// Guards the completion signal of a single splash lifecycle.
///
/// Owned by the timer instance rather than held as module state, so two
/// concurrently mounted splashes can never observe each other's completion.
#[derive(Debug, Default)]
pub struct CompletionLatch {
    fired: bool,
}

impl CompletionLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` the first time it is called, `false` ever after.
    pub fn fire(&mut self) -> bool {
        if self.fired {
            return false;
        }
        self.fired = true;
        true
    }

    pub fn is_fired(&self) -> bool {
        self.fired
    }
}
