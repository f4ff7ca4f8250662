//! Cycle counters and the watchdog over them

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::gate::{Gate, Reset, Shared};

/// Plain upward counter.
///
/// Evaluation reads the current count without stepping; advancing is an
/// explicit [`step`](Counter::step), typically once per control cycle.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Counter {
    count: u64,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting from a preloaded value.
    pub fn with_initial(count: u64) -> Self {
        Self { count }
    }

    /// Increment by one and return the new count.
    pub fn step(&mut self) -> u64 {
        self.count += 1;
        self.count
    }
}

impl Gate for Counter {
    type Output = u64;

    fn evaluate(&mut self) -> u64 {
        self.count
    }
}

impl Reset for Counter {
    fn reset(&mut self) {
        self.count = 0;
    }
}

/// Counter that steps every call and snaps back to zero whenever its
/// boolean input fires.
///
/// Typical use: counting cycles since a condition last held.
pub struct ResetCounter<I: Gate<Output = bool>> {
    input: I,
    counter: Counter,
}

impl<I: Gate<Output = bool>> ResetCounter<I> {
    pub fn new(input: I) -> Self {
        Self {
            input,
            counter: Counter::new(),
        }
    }
}

impl<I: Gate<Output = bool>> Gate for ResetCounter<I> {
    type Output = u64;

    fn evaluate(&mut self) -> u64 {
        if self.input.evaluate() {
            self.counter.reset();
        } else {
            self.counter.step();
        }
        self.counter.evaluate()
    }
}

/// Counter that steps only while its boolean input fires.
pub struct BooleanCounter<I: Gate<Output = bool>> {
    input: I,
    counter: Counter,
}

impl<I: Gate<Output = bool>> BooleanCounter<I> {
    pub fn new(input: I) -> Self {
        Self {
            input,
            counter: Counter::new(),
        }
    }
}

impl<I: Gate<Output = bool>> Gate for BooleanCounter<I> {
    type Output = u64;

    fn evaluate(&mut self) -> u64 {
        if self.input.evaluate() {
            self.counter.step()
        } else {
            self.counter.evaluate()
        }
    }
}

/// Watches a shared [`Counter`] and evaluates true exactly when the
/// watched count changed since the previous evaluation.
pub struct CounterWatchdog {
    counter: Shared<Counter>,
    seen: u64,
}

impl CounterWatchdog {
    pub fn new(counter: Shared<Counter>) -> Self {
        let seen = counter.borrow_mut().evaluate();
        Self { counter, seen }
    }
}

impl Gate for CounterWatchdog {
    type Output = bool;

    fn evaluate(&mut self) -> bool {
        let count = self.counter.borrow_mut().evaluate();
        if count != self.seen {
            self.seen = count;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::Channel;
    use crate::compare::Threshold;

    #[test]
    fn test_counter() {
        let mut counter = Counter::new();

        assert_eq!(counter.evaluate(), 0);
        assert_eq!(counter.step(), 1);
        assert_eq!(counter.evaluate(), 1);
        assert_eq!(counter.step(), 2);

        counter.reset();
        assert_eq!(counter.evaluate(), 0);
    }

    #[test]
    fn test_counter_with_initial() {
        let mut counter = Counter::with_initial(41);
        assert_eq!(counter.step(), 42);
    }

    #[test]
    fn test_reset_counter() {
        let p_manifold = Shared::new(Channel::<f64>::new("p_manifold", "mbar", 1.0, 0.0));
        let high = Threshold::new(p_manifold.clone(), 2570.0);
        let mut cycles_low = ResetCounter::new(high);

        p_manifold.write(2500.0);
        for i in 1..6 {
            assert_eq!(cycles_low.evaluate(), i);
        }

        p_manifold.write(2600.0);
        for _ in 0..5 {
            assert_eq!(cycles_low.evaluate(), 0);
        }
    }

    #[test]
    fn test_boolean_counter() {
        let p_manifold = Shared::new(Channel::<f64>::new("p_manifold", "mbar", 1.0, 0.0));
        let high = Threshold::new(p_manifold.clone(), 2570.0);
        let mut overpressure_cycles = BooleanCounter::new(high);

        p_manifold.write(2500.0);
        assert_eq!(overpressure_cycles.evaluate(), 0);

        p_manifold.write(2600.0);
        assert_eq!(overpressure_cycles.evaluate(), 1);
        assert_eq!(overpressure_cycles.evaluate(), 2);
        assert_eq!(overpressure_cycles.evaluate(), 3);

        p_manifold.write(2500.0);
        assert_eq!(overpressure_cycles.evaluate(), 3);
    }

    #[test]
    fn test_counter_watchdog() {
        let counter = Shared::new(Counter::new());
        let mut watchdog = CounterWatchdog::new(counter.clone());

        assert!(!watchdog.evaluate());

        counter.borrow_mut().step();
        assert!(watchdog.evaluate());
        assert!(!watchdog.evaluate());
    }
}
