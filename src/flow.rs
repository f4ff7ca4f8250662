//! Flow-control gates - conditional forwarding and cross-gate resets

use crate::gate::{Gate, Reset, Shared};

/// Forwards the input value while a boolean activator is true, the
/// default value otherwise.
pub struct PassThrough<I, A>
where
    I: Gate,
    A: Gate<Output = bool>,
{
    input: I,
    activator: A,
}

impl<I, A> PassThrough<I, A>
where
    I: Gate,
    A: Gate<Output = bool>,
    I::Output: Default,
{
    pub fn new(input: I, activator: A) -> Self {
        Self { input, activator }
    }
}

impl<I, A> Gate for PassThrough<I, A>
where
    I: Gate,
    A: Gate<Output = bool>,
    I::Output: Default,
{
    type Output = I::Output;

    fn evaluate(&mut self) -> I::Output {
        if self.activator.evaluate() {
            self.input.evaluate()
        } else {
            I::Output::default()
        }
    }
}

/// Forwards the input value while it exceeds a limit, the default value
/// otherwise. A self-activating [`PassThrough`].
pub struct ThresholdPassThrough<I: Gate> {
    input: I,
    limit: I::Output,
}

impl<I> ThresholdPassThrough<I>
where
    I: Gate,
    I::Output: Default + PartialOrd,
{
    pub fn new(input: I, limit: I::Output) -> Self {
        Self { input, limit }
    }
}

impl<I> Gate for ThresholdPassThrough<I>
where
    I: Gate,
    I::Output: Default + PartialOrd,
{
    type Output = I::Output;

    fn evaluate(&mut self) -> I::Output {
        let value = self.input.evaluate();
        if value > self.limit {
            value
        } else {
            I::Output::default()
        }
    }
}

/// Like [`PassThrough`], but holds the last forwarded value while the
/// activator is false instead of dropping to the default.
pub struct BufferedPassThrough<I, A>
where
    I: Gate,
    A: Gate<Output = bool>,
{
    input: I,
    activator: A,
    value: I::Output,
}

impl<I, A> BufferedPassThrough<I, A>
where
    I: Gate,
    A: Gate<Output = bool>,
    I::Output: Default,
{
    pub fn new(input: I, activator: A) -> Self {
        Self {
            input,
            activator,
            value: I::Output::default(),
        }
    }
}

impl<I, A> Gate for BufferedPassThrough<I, A>
where
    I: Gate,
    A: Gate<Output = bool>,
    I::Output: Default,
{
    type Output = I::Output;

    fn evaluate(&mut self) -> I::Output {
        if self.activator.evaluate() {
            self.value = self.input.evaluate();
        }
        self.value
    }
}

/// Fires [`Reset::reset`] on a shared target whenever the boolean input
/// evaluates true. Always evaluates to `true` itself so it can sit inside
/// a larger boolean chain without changing its result.
pub struct Resetter<I, T>
where
    I: Gate<Output = bool>,
    T: Reset,
{
    input: I,
    target: Shared<T>,
}

impl<I, T> Resetter<I, T>
where
    I: Gate<Output = bool>,
    T: Reset,
{
    pub fn new(input: I, target: Shared<T>) -> Self {
        Self { input, target }
    }
}

impl<I, T> Gate for Resetter<I, T>
where
    I: Gate<Output = bool>,
    T: Reset,
{
    type Output = bool;

    fn evaluate(&mut self) -> bool {
        if self.input.evaluate() {
            self.target.borrow_mut().reset();
        }
        true
    }
}
