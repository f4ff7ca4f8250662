//! Pullgate - composable pull-evaluation signal gates for control loops
//!
//! Small "gate" nodes (sources, scalers, aggregators, comparators,
//! boolean combinators) wire together into a directed pull-evaluation
//! graph. Each gate exposes a single [`evaluate`](Gate::evaluate)
//! operation that reads its upstream gate(s) and produces a new value.
//!
//! # Core Types
//!
//! - **[`RingBuffer`]**: Fixed-capacity circular buffer, the storage
//!   engine behind every windowed gate
//! - **[`Channel`]** / **[`BoolChannel`]**: The external data interface -
//!   raw samples in, dirty-gated normalized values out
//! - **[`Gate`]**: The evaluation protocol every node implements
//! - **[`Shared`]**: Handle for fan-out and application-written channels
//!
//! # Architecture: write / evaluate / reset
//!
//! Data flows strictly upstream-to-downstream on each evaluation call:
//!
//! 1. **Write** - the application submits one raw sample per channel per
//!    control cycle; a channel only goes dirty when the value changed
//! 2. **Evaluate** - a downstream gate's evaluation pulls through its
//!    transitive upstream gates, each recomputing at most once thanks to
//!    dirty-bit and latch caching
//! 3. **Reset** - stateful gates roll back to their baseline, either
//!    directly or through a [`Resetter`] wired into the graph
//!
//! The whole pipeline is single-threaded and synchronous: no scheduler,
//! no suspension points, no cancellation. Graphs are wired at
//! construction time and never re-wired.
//!
//! # Core Concepts
//!
//! - **Pull evaluation**: Calling a gate is the only way to read it
//! - **Dirty bit**: Channels renormalize only after an actual change
//! - **Window**: Aggregators retain the last N pulls, zero-padded while
//!   warming up, oldest-evicted once full
//! - **Dynamic normalization**: A channel's factor/offset can itself be
//!   supplied by another channel
//!
//! # Example: overboost detection
//!
//! ```rust
//! use pullgate::{Channel, Gate, MovingAverage, Shared, Threshold};
//!
//! // Channels are the external data interface; a `Shared` handle lets
//! // the application keep writing while downstream gates keep reading.
//! let boost = Shared::new(Channel::new("p_boost", "mbar", 1.0, 0.0));
//!
//! // Average the last 4 samples, alarm when the average passes 1500.
//! let smoothed = MovingAverage::new(boost.clone(), 4);
//! let mut alarm = Threshold::new(smoothed, 1500.0);
//!
//! boost.write(1200.0);
//! assert!(!alarm.evaluate()); // window: 1200 / 4 = 300
//!
//! boost.write(6800.0);
//! assert!(alarm.evaluate()); // window: (1200 + 6800) / 4 = 2000
//! ```
//!
//! # Key Insight
//!
//! Because every gate has the same shape - no arguments in, one value
//! out - composition is purely structural: any gate can feed any other
//! gate whose sample type matches, to any nesting depth.

mod arith;
mod channel;
mod compare;
mod counter;
mod flow;
mod gate;
mod gradient;
mod latch;
mod logic;
mod ring;
mod window;

pub use arith::{Factor, Inverter, Offset};
pub use channel::{BoolChannel, Channel};
pub use compare::{Approximate, Threshold};
pub use counter::{BooleanCounter, Counter, CounterWatchdog, ResetCounter};
pub use flow::{BufferedPassThrough, PassThrough, Resetter, ThresholdPassThrough};
pub use gate::{Gate, Reset, Sample, Shared};
pub use gradient::{Gradient, WindowGradient};
pub use latch::{Latch, SwitchedLatch};
pub use logic::{AndGate, BoolGate, NotGate, OrGate};
pub use ring::RingBuffer;
pub use window::{Accumulator, MovingAverage};
