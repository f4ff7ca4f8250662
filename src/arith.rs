//! Stateless arithmetic combinators

use std::ops::{Add, Mul, Neg};

use crate::gate::Gate;

/// Multiplies the input value by a constant.
pub struct Factor<I: Gate> {
    input: I,
    constant: I::Output,
}

impl<I> Factor<I>
where
    I: Gate,
    I::Output: Mul<Output = I::Output>,
{
    pub fn new(input: I, constant: I::Output) -> Self {
        Self { input, constant }
    }

    pub fn set_constant(&mut self, constant: I::Output) {
        self.constant = constant;
    }
}

impl<I> Gate for Factor<I>
where
    I: Gate,
    I::Output: Mul<Output = I::Output>,
{
    type Output = I::Output;

    fn evaluate(&mut self) -> I::Output {
        self.input.evaluate() * self.constant
    }
}

/// Adds a constant to the input value.
pub struct Offset<I: Gate> {
    input: I,
    offset: I::Output,
}

impl<I> Offset<I>
where
    I: Gate,
    I::Output: Add<Output = I::Output>,
{
    pub fn new(input: I, offset: I::Output) -> Self {
        Self { input, offset }
    }

    pub fn offset(&self) -> I::Output {
        self.offset
    }

    pub fn set_offset(&mut self, offset: I::Output) {
        self.offset = offset;
    }
}

impl<I> Gate for Offset<I>
where
    I: Gate,
    I::Output: Add<Output = I::Output>,
{
    type Output = I::Output;

    fn evaluate(&mut self) -> I::Output {
        self.input.evaluate() + self.offset
    }
}

/// Negates the input value.
pub struct Inverter<I: Gate> {
    input: I,
}

impl<I> Inverter<I>
where
    I: Gate,
    I::Output: Neg<Output = I::Output>,
{
    pub fn new(input: I) -> Self {
        Self { input }
    }
}

impl<I> Gate for Inverter<I>
where
    I: Gate,
    I::Output: Neg<Output = I::Output>,
{
    type Output = I::Output;

    fn evaluate(&mut self) -> I::Output {
        -self.input.evaluate()
    }
}
