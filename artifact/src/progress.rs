#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

/// Stage captions shown while a generation request is outstanding.
pub const STAGES: [&str; 5] = [
    "Analyzing your request...",
    "Structuring the narrative...",
    "Drafting content points...",
    "Designing visual layout...",
    "Finalizing styles...",
];

/// Position in the simulated progress sequence. Advances one stage per tick
/// and holds on the final stage if generation outlasts the list. Purely
/// cosmetic; never feeds back into the request lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Progress {
    step: usize,
}

impl Progress {
    #[must_use]
    pub fn step(self) -> usize {
        self.step
    }

    #[must_use]
    pub fn caption(self) -> &'static str {
        STAGES[self.step.min(STAGES.len() - 1)]
    }

    #[must_use]
    pub fn advanced(self) -> Self {
        Self {
            step: (self.step + 1).min(STAGES.len() - 1),
        }
    }
}
