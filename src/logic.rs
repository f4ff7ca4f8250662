//! Boolean combinators over any number of inputs
//!
//! [`AndGate`] and [`OrGate`] take an explicit ordered list of boolean
//! gates and fold it with the operator. Every input is evaluated exactly
//! once per call, in list order, with no short-circuiting - each upstream
//! gate must see its per-cycle pull regardless of the running result.

use crate::gate::Gate;

/// A boxed boolean gate, the element type of the combinator input lists.
pub type BoolGate = Box<dyn Gate<Output = bool>>;

/// True while every input evaluates true.
///
/// An empty input list folds to the operator identity (`true`).
pub struct AndGate {
    inputs: Vec<BoolGate>,
}

impl AndGate {
    pub fn new(inputs: Vec<BoolGate>) -> Self {
        Self { inputs }
    }
}

impl Gate for AndGate {
    type Output = bool;

    fn evaluate(&mut self) -> bool {
        self.inputs
            .iter_mut()
            .fold(true, |acc, input| input.evaluate() && acc)
    }
}

/// True while at least one input evaluates true.
///
/// An empty input list folds to the operator identity (`false`).
pub struct OrGate {
    inputs: Vec<BoolGate>,
}

impl OrGate {
    pub fn new(inputs: Vec<BoolGate>) -> Self {
        Self { inputs }
    }
}

impl Gate for OrGate {
    type Output = bool;

    fn evaluate(&mut self) -> bool {
        self.inputs
            .iter_mut()
            .fold(false, |acc, input| input.evaluate() || acc)
    }
}

/// Negates one boolean input.
pub struct NotGate<I: Gate<Output = bool>> {
    input: I,
}

impl<I: Gate<Output = bool>> NotGate<I> {
    pub fn new(input: I) -> Self {
        Self { input }
    }
}

impl<I: Gate<Output = bool>> Gate for NotGate<I> {
    type Output = bool;

    fn evaluate(&mut self) -> bool {
        !self.input.evaluate()
    }
}
