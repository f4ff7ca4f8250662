//! Windowed aggregators - running sums and averages over the last N pulls
//!
//! Both gates own a [`RingBuffer`] of fixed capacity N and share the same
//! shape: each evaluation pulls one value from the input, pushes it into
//! the window, and folds the window into the output. Partial windows are
//! zero-padded, not shrunk - the aggregate always ranges over all N slots.
//!
//! The `use_zeros` policy (default: on) controls whether a freshly pulled
//! zero enters the window. Turning it off preserves the prior window
//! contents across zero readings, an anti-noise measure for sparse or
//! event-driven sources.

use num_traits::{NumCast, One, Zero};

use crate::gate::{Gate, Reset, Sample};
use crate::ring::RingBuffer;

/// Running sum of the last N input values.
pub struct Accumulator<I: Gate> {
    input: I,
    use_zeros: bool,
    window: RingBuffer<I::Output>,
}

impl<I> Accumulator<I>
where
    I: Gate,
    I::Output: Sample,
{
    /// Create an accumulator over a window of `capacity` pulls.
    ///
    /// Zero readings enter the window; use
    /// [`with_zero_policy`](Accumulator::with_zero_policy) to skip them.
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn new(input: I, capacity: usize) -> Self {
        Self::with_zero_policy(input, capacity, true)
    }

    /// Create an accumulator with an explicit zero policy.
    pub fn with_zero_policy(input: I, capacity: usize, use_zeros: bool) -> Self {
        Self {
            input,
            use_zeros,
            window: RingBuffer::new(capacity),
        }
    }

    /// Current sum without pulling a new value - a read-only peek.
    pub fn report(&self) -> I::Output {
        self.window
            .iter()
            .copied()
            .fold(I::Output::zero(), |acc, v| acc + v)
    }
}

impl<I> Gate for Accumulator<I>
where
    I: Gate,
    I::Output: Sample,
{
    type Output = I::Output;

    fn evaluate(&mut self) -> I::Output {
        let value = self.input.evaluate();
        if !value.is_zero() || self.use_zeros {
            self.window.push(value);
        }
        self.report()
    }
}

impl<I> Reset for Accumulator<I>
where
    I: Gate,
    I::Output: Sample,
{
    fn reset(&mut self) {
        self.window.fill(I::Output::zero());
    }
}

/// Mean of the last N input values.
///
/// Identical to [`Accumulator`] except that the window sum is divided by
/// the window capacity N - including during warm-up, so the k-th output
/// for a constant input v is `k * v / N`.
pub struct MovingAverage<I: Gate> {
    input: I,
    use_zeros: bool,
    window: RingBuffer<I::Output>,
    divisor: I::Output,
}

impl<I> MovingAverage<I>
where
    I: Gate,
    I::Output: Sample,
{
    /// Create a moving average over a window of `capacity` pulls.
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn new(input: I, capacity: usize) -> Self {
        Self::with_zero_policy(input, capacity, true)
    }

    /// Create a moving average with an explicit zero policy.
    pub fn with_zero_policy(input: I, capacity: usize, use_zeros: bool) -> Self {
        Self {
            input,
            use_zeros,
            window: RingBuffer::new(capacity),
            divisor: NumCast::from(capacity).unwrap_or_else(I::Output::one),
        }
    }

    /// Current average without pulling a new value.
    pub fn report(&self) -> I::Output {
        let sum = self
            .window
            .iter()
            .copied()
            .fold(I::Output::zero(), |acc, v| acc + v);
        sum / self.divisor
    }
}

impl<I> Gate for MovingAverage<I>
where
    I: Gate,
    I::Output: Sample,
{
    type Output = I::Output;

    fn evaluate(&mut self) -> I::Output {
        let value = self.input.evaluate();
        if !value.is_zero() || self.use_zeros {
            self.window.push(value);
        }
        self.report()
    }
}

impl<I> Reset for MovingAverage<I>
where
    I: Gate,
    I::Output: Sample,
{
    fn reset(&mut self) {
        self.window.fill(I::Output::zero());
    }
}
