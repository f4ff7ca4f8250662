//! Comparison gates - numeric inputs in, booleans out

use std::ops::Sub;

use crate::gate::Gate;

/// True while the input value exceeds a limit.
pub struct Threshold<I: Gate> {
    input: I,
    limit: I::Output,
}

impl<I> Threshold<I>
where
    I: Gate,
    I::Output: PartialOrd,
{
    pub fn new(input: I, limit: I::Output) -> Self {
        Self { input, limit }
    }

    pub fn set_limit(&mut self, limit: I::Output) {
        self.limit = limit;
    }
}

impl<I> Gate for Threshold<I>
where
    I: Gate,
    I::Output: PartialOrd,
{
    type Output = bool;

    fn evaluate(&mut self) -> bool {
        self.input.evaluate() > self.limit
    }
}

/// True while two inputs are within a tolerance of each other.
///
/// Typical use: checking that two redundant sensors agree within their
/// measurement error.
pub struct Approximate<I, J>
where
    I: Gate,
    J: Gate<Output = I::Output>,
{
    first: I,
    second: J,
    tolerance: I::Output,
}

impl<I, J> Approximate<I, J>
where
    I: Gate,
    J: Gate<Output = I::Output>,
    I::Output: Sub<Output = I::Output> + PartialOrd,
{
    pub fn new(first: I, second: J, tolerance: I::Output) -> Self {
        Self {
            first,
            second,
            tolerance,
        }
    }

    pub fn set_tolerance(&mut self, tolerance: I::Output) {
        self.tolerance = tolerance;
    }
}

impl<I, J> Gate for Approximate<I, J>
where
    I: Gate,
    J: Gate<Output = I::Output>,
    I::Output: Sub<Output = I::Output> + PartialOrd,
{
    type Output = bool;

    fn evaluate(&mut self) -> bool {
        let lhs = self.first.evaluate();
        let rhs = self.second.evaluate();

        // subtract smaller from larger so unsigned samples cannot wrap
        if lhs > rhs {
            lhs - rhs <= self.tolerance
        } else {
            rhs - lhs <= self.tolerance
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::Channel;
    use crate::gate::Shared;

    #[test]
    fn test_threshold() {
        let n_rpm = Shared::new(Channel::<u32>::new("n_rpm", "1/min", 1, 0));
        let mut over_limit = Threshold::new(n_rpm.clone(), 3000);

        n_rpm.write(2500);
        assert!(!over_limit.evaluate());

        n_rpm.write(3200);
        assert!(over_limit.evaluate());

        over_limit.set_limit(3500);
        assert!(!over_limit.evaluate());
    }

    #[test]
    fn test_approximate() {
        let left = Shared::new(Channel::<f64>::named("left"));
        let right = Shared::new(Channel::<f64>::named("right"));
        let mut agree = Approximate::new(left.clone(), right.clone(), 0.5);

        left.write(10.0);
        right.write(10.3);
        assert!(agree.evaluate());

        right.write(11.0);
        assert!(!agree.evaluate());

        agree.set_tolerance(2.0);
        assert!(agree.evaluate());
    }

    #[test]
    fn test_approximate_unsigned_no_wrap() {
        let left = Shared::new(Channel::<u32>::named("left"));
        let right = Shared::new(Channel::<u32>::named("right"));
        let mut agree = Approximate::new(left.clone(), right.clone(), 3);

        left.write(2);
        right.write(9);
        assert!(!agree.evaluate());
    }
}
