//! Gradient gates - deltas between measurement points

use num_traits::Zero;

use crate::gate::{Gate, Reset, Sample};
use crate::ring::RingBuffer;

/// Difference between the two most recent input values.
///
/// Holds exactly the last pair; each evaluation shifts the pair and
/// returns `current - previous`.
pub struct Gradient<I: Gate> {
    input: I,
    previous: I::Output,
    current: I::Output,
}

impl<I> Gradient<I>
where
    I: Gate,
    I::Output: Sample,
{
    pub fn new(input: I) -> Self {
        Self {
            input,
            previous: I::Output::zero(),
            current: I::Output::zero(),
        }
    }
}

impl<I> Gate for Gradient<I>
where
    I: Gate,
    I::Output: Sample,
{
    type Output = I::Output;

    fn evaluate(&mut self) -> I::Output {
        self.previous = self.current;
        self.current = self.input.evaluate();
        self.current - self.previous
    }
}

impl<I> Reset for Gradient<I>
where
    I: Gate,
    I::Output: Sample,
{
    fn reset(&mut self) {
        self.previous = I::Output::zero();
        self.current = I::Output::zero();
    }
}

/// Difference between the newest input value and the value N pulls ago.
///
/// The window is zero-filled at construction, so the missing history of
/// the first N - 1 evaluations reads as zero and early outputs are deltas
/// against that implicit baseline. Callers that need a full warm-up must
/// discard the first N - 1 outputs.
pub struct WindowGradient<I: Gate> {
    input: I,
    window: RingBuffer<I::Output>,
}

impl<I> WindowGradient<I>
where
    I: Gate,
    I::Output: Sample,
{
    /// Create a gradient spanning `steps` evaluations.
    ///
    /// # Panics
    /// Panics if `steps` is zero.
    pub fn new(input: I, steps: usize) -> Self {
        let mut window = RingBuffer::new(steps);
        window.fill(I::Output::zero());
        Self { input, window }
    }

    /// The window the gradient is computed over, for inspection.
    pub fn window(&self) -> &RingBuffer<I::Output> {
        &self.window
    }
}

impl<I> Gate for WindowGradient<I>
where
    I: Gate,
    I::Output: Sample,
{
    type Output = I::Output;

    fn evaluate(&mut self) -> I::Output {
        self.window.push(self.input.evaluate());
        self.window.back() - self.window.front()
    }
}

impl<I> Reset for WindowGradient<I>
where
    I: Gate,
    I::Output: Sample,
{
    fn reset(&mut self) {
        self.window.fill(I::Output::zero());
    }
}
