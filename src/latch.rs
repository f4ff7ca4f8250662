//! Memoizing gates - hold one upstream value across repeated evaluations
//!
//! Useful for control flow: when one value has to influence several
//! decisions within the same cycle, latch it once and evaluate the latch
//! as often as needed, then reset at the end of the loop.

use crate::gate::{Gate, Reset};

/// One-shot memoizing gate.
///
/// The first evaluation after construction or [`reset`](Reset::reset)
/// pulls and stores the input value; every further evaluation returns the
/// stored value without pulling. Presence is tracked explicitly, so a
/// latched zero is held just like any other value.
pub struct Latch<I: Gate> {
    input: I,
    held: Option<I::Output>,
}

impl<I: Gate> Latch<I> {
    pub fn new(input: I) -> Self {
        Self { input, held: None }
    }
}

impl<I: Gate> Gate for Latch<I> {
    type Output = I::Output;

    fn evaluate(&mut self) -> I::Output {
        match self.held {
            Some(value) => value,
            None => {
                let value = self.input.evaluate();
                self.held = Some(value);
                value
            }
        }
    }
}

impl<I: Gate> Reset for Latch<I> {
    /// Drop the held value, re-arming the one-shot pull.
    fn reset(&mut self) {
        self.held = None;
    }
}

/// Memoizing gate with an explicit switch.
///
/// Behaves like [`Latch`] but exposes the latched/pulling state through
/// [`state`](SwitchedLatch::state) and lets the caller flip it directly
/// with [`toggle`](SwitchedLatch::toggle) instead of a full reset.
pub struct SwitchedLatch<I: Gate>
where
    I::Output: Default,
{
    input: I,
    value: I::Output,
    latched: bool,
}

impl<I> SwitchedLatch<I>
where
    I: Gate,
    I::Output: Default,
{
    pub fn new(input: I) -> Self {
        Self {
            input,
            value: I::Output::default(),
            latched: false,
        }
    }

    /// Flip between holding the stored value and pulling a fresh one.
    pub fn toggle(&mut self) {
        self.latched = !self.latched;
    }

    /// `true` while the gate is holding a value, `false` while it is
    /// waiting to pull one.
    pub fn state(&self) -> bool {
        self.latched
    }
}

impl<I> Gate for SwitchedLatch<I>
where
    I: Gate,
    I::Output: Default,
{
    type Output = I::Output;

    fn evaluate(&mut self) -> I::Output {
        if !self.latched {
            self.latched = true;
            self.value = self.input.evaluate();
        }
        self.value
    }
}

impl<I> Reset for SwitchedLatch<I>
where
    I: Gate,
    I::Output: Default,
{
    fn reset(&mut self) {
        self.latched = false;
    }
}
