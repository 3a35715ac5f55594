//! The fixed sequence of values the explorer steps through.

use numcube_core::Magnitude;
use serde::Serialize;
use thiserror::Error;

/// One stop in the explorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NumberStep {
    /// The value shown.
    pub value: Magnitude,
    /// Numeral handed to the speech layer.
    pub spoken: &'static str,
    /// Digits shown in the header.
    pub digits: &'static str,
}

const fn step(value: u128, spoken: &'static str, digits: &'static str) -> NumberStep {
    NumberStep {
        value: Magnitude::new(value),
        spoken,
        digits,
    }
}

/// Powers of ten up to 10^16, then whole multiples of 10^16 up to 10^17.
pub const NUMBER_STEPS: [NumberStep; 25] = [
    step(1, "一", "1"),
    step(100, "一百", "100"),
    step(1_000, "一千", "1000"),
    step(10_000, "一万", "10000"),
    step(100_000, "十万", "100000"),
    step(1_000_000, "一百万", "1000000"),
    step(10_000_000, "一千万", "10000000"),
    step(100_000_000, "一亿", "100000000"),
    step(1_000_000_000, "十亿", "1000000000"),
    step(10_000_000_000, "一百亿", "10000000000"),
    step(100_000_000_000, "一千亿", "100000000000"),
    step(1_000_000_000_000, "一万亿", "1000000000000"),
    step(10_000_000_000_000, "十万亿", "10000000000000"),
    step(100_000_000_000_000, "一百万亿", "100000000000000"),
    step(1_000_000_000_000_000, "一千万亿", "1000000000000000"),
    step(10_000_000_000_000_000, "一亿亿", "10000000000000000"),
    step(20_000_000_000_000_000, "二亿亿", "20000000000000000"),
    step(30_000_000_000_000_000, "三亿亿", "30000000000000000"),
    step(40_000_000_000_000_000, "四亿亿", "40000000000000000"),
    step(50_000_000_000_000_000, "五亿亿", "50000000000000000"),
    step(60_000_000_000_000_000, "六亿亿", "60000000000000000"),
    step(70_000_000_000_000_000, "七亿亿", "70000000000000000"),
    step(80_000_000_000_000_000, "八亿亿", "80000000000000000"),
    step(90_000_000_000_000_000, "九亿亿", "90000000000000000"),
    step(100_000_000_000_000_000, "十亿亿", "100000000000000000"),
];

/// Navigation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepError {
    /// A cursor needs at least one step.
    #[error("step sequence is empty")]
    Empty,
    /// Requested index past the end of the sequence.
    #[error("step {index} is out of range (0..{len})")]
    OutOfRange {
        /// Requested index.
        index: usize,
        /// Number of steps.
        len: usize,
    },
}

/// Position in a step sequence; `next` and `prev` wrap around.
#[derive(Debug, Clone)]
pub struct StepCursor<'a> {
    steps: &'a [NumberStep],
    index: usize,
}

impl StepCursor<'static> {
    /// Cursor over [`NUMBER_STEPS`] at the first step.
    pub fn standard() -> Self {
        Self {
            steps: &NUMBER_STEPS,
            index: 0,
        }
    }
}

impl<'a> StepCursor<'a> {
    /// Cursor over `steps` at the first step.
    pub fn new(steps: &'a [NumberStep]) -> Result<Self, StepError> {
        if steps.is_empty() {
            return Err(StepError::Empty);
        }
        Ok(Self { steps, index: 0 })
    }

    /// Index of the current step.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false; an empty cursor cannot be built.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The current step.
    pub fn current(&self) -> &'a NumberStep {
        &self.steps[self.index]
    }

    /// Advance, wrapping from the last step to the first.
    pub fn next(&mut self) -> &'a NumberStep {
        self.index = (self.index + 1) % self.steps.len();
        self.current()
    }

    /// Go back, wrapping from the first step to the last.
    pub fn prev(&mut self) -> &'a NumberStep {
        let len = self.steps.len();
        self.index = (self.index + len - 1) % len;
        self.current()
    }

    /// Return to the first step.
    pub fn reset(&mut self) -> &'a NumberStep {
        self.index = 0;
        self.current()
    }

    /// Move to `index`.
    pub fn jump(&mut self, index: usize) -> Result<&'a NumberStep, StepError> {
        if index >= self.steps.len() {
            return Err(StepError::OutOfRange {
                index,
                len: self.steps.len(),
            });
        }
        self.index = index;
        Ok(self.current())
    }
}
