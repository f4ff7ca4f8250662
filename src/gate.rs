//! The evaluation protocol shared by every gate

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use num_traits::{Num, NumCast};

/// Numeric sample carried between gates.
///
/// Blanket-implemented for every built-in numeric type. Gates are generic
/// over their sample type, so a pipeline of `f64` channels and a pipeline
/// of `u32` channels monomorphize to the same zero-overhead code.
pub trait Sample: Num + NumCast + Copy + Default + PartialOrd {}

impl<T> Sample for T where T: Num + NumCast + Copy + Default + PartialOrd {}

/// A node in a pull-evaluation pipeline.
///
/// Every gate exposes exactly one operation: [`evaluate`](Gate::evaluate),
/// which reads the gate's upstream input(s), advances its internal state,
/// and returns the new output value. This uniform shape is what makes
/// gates freely nestable: any gate can feed any other gate whose sample
/// type matches.
///
/// Evaluating is the *only* sanctioned way to read a gate. Evaluation is
/// not idempotent in general - a windowed gate shifts its window on every
/// call - so a value that must be consulted more than once per cycle
/// should be routed through a [`Latch`](crate::Latch).
pub trait Gate {
    /// Value produced by this gate.
    type Output: Copy;

    /// Pull one value through the gate.
    fn evaluate(&mut self) -> Self::Output;
}

impl<G: Gate + ?Sized> Gate for Box<G> {
    type Output = G::Output;

    fn evaluate(&mut self) -> G::Output {
        (**self).evaluate()
    }
}

/// A gate whose internal state can be rolled back to its baseline.
///
/// Implemented by every stateful gate (aggregators, gradients, latches,
/// counters) so a [`Resetter`](crate::Resetter) can target any of them.
pub trait Reset {
    /// Restore the gate's construction-time state.
    fn reset(&mut self);
}

/// Shared handle to a gate.
///
/// Downstream gates normally own their upstream gate by value, which is
/// the zero-overhead default. A `Shared` handle covers the two cases
/// where single ownership does not work:
///
/// - a [`Channel`](crate::Channel) the application keeps writing to while
///   downstream gates keep reading it,
/// - fan-out, where one gate feeds several consumers.
///
/// `Shared` is a thin `Rc<RefCell<_>>` newtype and itself implements
/// [`Gate`], so handles nest exactly like owned gates. The pipeline is
/// single-threaded by construction; wiring a cycle through `Shared`
/// handles is a caller error and surfaces as a borrow panic during
/// evaluation.
pub struct Shared<G>(Rc<RefCell<G>>);

impl<G> Shared<G> {
    /// Wrap a gate in a shared handle.
    pub fn new(gate: G) -> Self {
        Self(Rc::new(RefCell::new(gate)))
    }

    /// Immutably borrow the underlying gate.
    pub fn borrow(&self) -> Ref<'_, G> {
        self.0.borrow()
    }

    /// Mutably borrow the underlying gate.
    pub fn borrow_mut(&self) -> RefMut<'_, G> {
        self.0.borrow_mut()
    }
}

impl<G> Clone for Shared<G> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<G> fmt::Debug for Shared<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shared").finish_non_exhaustive()
    }
}

impl<G: Gate> Gate for Shared<G> {
    type Output = G::Output;

    fn evaluate(&mut self) -> G::Output {
        self.0.borrow_mut().evaluate()
    }
}

impl<G: Reset> Reset for Shared<G> {
    fn reset(&mut self) {
        self.0.borrow_mut().reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Constant(u32);

    impl Gate for Constant {
        type Output = u32;

        fn evaluate(&mut self) -> u32 {
            self.0
        }
    }

    #[test]
    fn test_boxed_gate_evaluates() {
        let mut boxed: Box<dyn Gate<Output = u32>> = Box::new(Constant(7));
        assert_eq!(boxed.evaluate(), 7);
    }

    #[test]
    fn test_shared_handles_alias_one_gate() {
        let original = Shared::new(Constant(3));
        let mut alias = original.clone();

        assert_eq!(alias.evaluate(), 3);
        original.borrow_mut().0 = 9;
        assert_eq!(alias.evaluate(), 9);
    }
}
