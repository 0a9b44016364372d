//! # Stepped Index Ranges
//!
//! [`StepRange`] yields the student indices a run walks over: `start`,
//! `start + step`, `start + 2 * step`, ... for as long as the value stays at or
//! below the inclusive `end`. The iterator is lazy and `Clone`, so a range can
//! be restarted by cloning it before it is consumed.

use crate::error::{Error, Result};

/// A lazy, finite, inclusive range of indices advancing by a fixed step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRange {
    next: Option<u32>,
    end: u32,
    step: u32,
}

impl StepRange {
    /// Creates a range from `start` to `end` (inclusive).
    ///
    /// A `step` of zero would never terminate and is rejected. A `start`
    /// greater than `end` produces an empty range.
    pub fn new(start: u32, end: u32, step: u32) -> Result<Self> {
        if step == 0 {
            return Err(Error::InvalidStep { step });
        }
        Ok(Self {
            next: Some(start),
            end,
            step,
        })
    }

    /// Shortcut for `1..=end` with a step of one.
    pub fn up_to(end: u32) -> Self {
        Self {
            next: Some(1),
            end,
            step: 1,
        }
    }
}

impl Iterator for StepRange {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let current = self.next.filter(|value| *value <= self.end)?;
        // Overflow past u32::MAX ends the sequence.
        self.next = current.checked_add(self.step);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            Some(current) if current <= self.end => {
                let remaining = ((self.end - current) / self.step) as usize + 1;
                (remaining, Some(remaining))
            }
            _ => (0, Some(0)),
        }
    }
}

impl ExactSizeIterator for StepRange {}
