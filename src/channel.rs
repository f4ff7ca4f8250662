//! Source channels - where external data enters a pipeline
//!
//! A channel is the only gate without an upstream. The owning application
//! writes one raw sample per control cycle; downstream gates pull the
//! normalized value through the evaluation protocol. Writing and
//! normalizing are decoupled by a dirty bit: a write only marks the
//! channel dirty when the raw value actually changed, and the
//! normalization `(raw + offset) * factor` runs at most once per change,
//! on the next evaluation.

use std::fmt;

use crate::gate::{Gate, Sample, Shared};

/// External data interface of a pipeline.
///
/// The factor and offset each have a static part (defaults 1 and 0) and
/// an optional dynamic part supplied by another channel: the effective
/// factor is `static * dynamic`, the effective offset `static + dynamic`.
/// Dynamic references are consulted only while recomputing after a write
/// changed the raw value - a channel does not re-normalize merely because
/// its dynamic source moved on its own.
#[derive(Debug)]
pub struct Channel<T: Sample> {
    name: String,
    unit: String,
    factor: T,
    offset: T,
    dynamic_factor: Option<Shared<Channel<T>>>,
    dynamic_offset: Option<Shared<Channel<T>>>,
    raw: T,
    out: T,
    dirty: bool,
}

impl<T: Sample> Channel<T> {
    /// Create a channel with explicit normalization parameters.
    pub fn new(name: impl Into<String>, unit: impl Into<String>, factor: T, offset: T) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
            factor,
            offset,
            dynamic_factor: None,
            dynamic_offset: None,
            raw: T::default(),
            out: T::default(),
            dirty: false,
        }
    }

    /// Create a channel with no unit, factor 1 and offset 0.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, "", T::one(), T::zero())
    }

    /// Channel name (cosmetic, used by the diagnostic dump).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Channel unit (cosmetic).
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Static normalization factor.
    pub fn factor(&self) -> T {
        self.factor
    }

    /// Static normalization offset.
    pub fn offset(&self) -> T {
        self.offset
    }

    /// Channel currently supplying the dynamic factor, if any.
    pub fn dynamic_factor(&self) -> Option<&Shared<Channel<T>>> {
        self.dynamic_factor.as_ref()
    }

    /// Channel currently supplying the dynamic offset, if any.
    pub fn dynamic_offset(&self) -> Option<&Shared<Channel<T>>> {
        self.dynamic_offset.as_ref()
    }

    /// Set the static factor. The multiplicative base is retained even
    /// when a dynamic factor source is set.
    pub fn set_factor(&mut self, factor: T) {
        self.factor = factor;
    }

    /// Set the static offset.
    pub fn set_offset(&mut self, offset: T) {
        self.offset = offset;
    }

    /// Source the dynamic factor from another channel, replacing any
    /// previously set source.
    pub fn set_dynamic_factor(&mut self, source: Shared<Channel<T>>) {
        self.dynamic_factor = Some(source);
    }

    /// Source the dynamic offset from another channel, replacing any
    /// previously set source.
    pub fn set_dynamic_offset(&mut self, source: Shared<Channel<T>>) {
        self.dynamic_offset = Some(source);
    }

    /// Submit a new raw sample.
    ///
    /// Accepted unconditionally and O(1); the channel only goes dirty
    /// when the value differs from the stored raw value, so rewriting an
    /// unchanged sample never triggers renormalization.
    pub fn write(&mut self, value: T) {
        if value != self.raw {
            self.raw = value;
            self.dirty = true;
        }
    }
}

impl<T: Sample> Default for Channel<T> {
    fn default() -> Self {
        Self::named("")
    }
}

impl<T: Sample> Gate for Channel<T> {
    type Output = T;

    fn evaluate(&mut self) -> T {
        if self.dirty {
            self.dirty = false;

            let mut factor = self.factor;
            if let Some(source) = &self.dynamic_factor {
                factor = factor * source.borrow_mut().evaluate();
            }

            let mut offset = self.offset;
            if let Some(source) = &self.dynamic_offset {
                offset = offset + source.borrow_mut().evaluate();
            }

            self.out = (self.raw + offset) * factor;
        }

        self.out
    }
}

impl<T: Sample> Shared<Channel<T>> {
    /// Submit a new raw sample through a shared handle.
    pub fn write(&self, value: T) {
        self.borrow_mut().write(value);
    }
}

impl<T: Sample + fmt::Display> fmt::Display for Channel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = if self.unit.is_empty() { "none" } else { &self.unit };
        let dynamic_factor = self
            .dynamic_factor
            .as_ref()
            .map(|source| source.borrow().name.clone())
            .unwrap_or_else(|| "none".to_string());
        let dynamic_offset = self
            .dynamic_offset
            .as_ref()
            .map(|source| source.borrow().name.clone())
            .unwrap_or_else(|| "none".to_string());

        writeln!(f, "channel {{")?;
        writeln!(f, "  name:           {},", self.name)?;
        writeln!(f, "  unit:           {},", unit)?;
        writeln!(f, "  factor:         {},", self.factor)?;
        writeln!(f, "  dynamic factor: {},", dynamic_factor)?;
        writeln!(f, "  offset:         {},", self.offset)?;
        writeln!(f, "  dynamic offset: {},", dynamic_offset)?;
        writeln!(f, "  current value:  {}", self.out)?;
        write!(f, "}}")
    }
}

/// Boolean source channel.
///
/// Factor/offset normalization makes no sense for a boolean signal, so
/// this variant drops it entirely: evaluation is a dirty-gated
/// pass-through of the raw value.
#[derive(Debug, Default)]
pub struct BoolChannel {
    name: String,
    unit: String,
    raw: bool,
    out: bool,
    dirty: bool,
}

impl BoolChannel {
    /// Create a boolean channel.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Channel name (cosmetic).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Channel unit (cosmetic).
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Submit a new raw sample; dirty only on change.
    pub fn write(&mut self, value: bool) {
        if value != self.raw {
            self.raw = value;
            self.dirty = true;
        }
    }
}

impl Gate for BoolChannel {
    type Output = bool;

    fn evaluate(&mut self) -> bool {
        if self.dirty {
            self.dirty = false;
            self.out = self.raw;
        }
        self.out
    }
}

impl Shared<BoolChannel> {
    /// Submit a new raw sample through a shared handle.
    pub fn write(&self, value: bool) {
        self.borrow_mut().write(value);
    }
}

impl fmt::Display for BoolChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = if self.unit.is_empty() { "none" } else { &self.unit };

        writeln!(f, "channel {{")?;
        writeln!(f, "  name:           {},", self.name)?;
        writeln!(f, "  unit:           {},", unit)?;
        writeln!(f, "  current value:  {}", self.out)?;
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let chan: Channel<f64> = Channel::named("p_manifold");

        assert_eq!(chan.name(), "p_manifold");
        assert_eq!(chan.unit(), "");
        assert_eq!(chan.factor(), 1.0);
        assert_eq!(chan.offset(), 0.0);
        assert!(chan.dynamic_factor().is_none());
    }

    #[test]
    fn test_static_normalization() {
        let mut chan = Channel::new("p_manifold", "mbar", 2.0, 10.0);

        chan.write(5.0);
        // offset applies before factor
        assert_eq!(chan.evaluate(), 30.0);
    }

    #[test]
    fn test_write_then_evaluate() {
        let mut chan: Channel<f64> = Channel::named("test");

        for i in 0..5 {
            chan.write(i as f64);
        }
        assert_eq!(chan.evaluate(), 4.0);
    }

    #[test]
    fn test_unchanged_write_stays_clean() {
        let mut chan: Channel<f64> = Channel::named("test");

        chan.write(3.0);
        assert_eq!(chan.evaluate(), 3.0);

        // same raw value again: evaluation must keep the cached output
        chan.write(3.0);
        assert_eq!(chan.evaluate(), 3.0);

        chan.write(4.0);
        assert_eq!(chan.evaluate(), 4.0);
    }

    #[test]
    fn test_dynamic_factor_and_offset_chain() {
        let source = Shared::new(Channel::<f64>::named("source"));
        let mut chan: Channel<f64> = Channel::named("chan");
        chan.set_dynamic_factor(source.clone());
        chan.set_dynamic_offset(source.clone());

        for i in 0..5 {
            let v = i as f64;
            source.write(v);
            chan.write(v);
            assert_eq!(chan.evaluate(), (v + v) * v);
        }
    }

    #[test]
    fn test_dynamic_source_only_read_when_dirty() {
        let source = Shared::new(Channel::<f64>::named("source"));
        let mut chan: Channel<f64> = Channel::named("chan");
        chan.set_dynamic_factor(source.clone());

        source.write(2.0);
        chan.write(10.0);
        assert_eq!(chan.evaluate(), 20.0);

        // moving the dynamic source alone must not re-normalize
        source.write(5.0);
        assert_eq!(chan.evaluate(), 20.0);

        // the next change of this channel picks the new factor up
        chan.write(11.0);
        assert_eq!(chan.evaluate(), 55.0);
    }

    #[test]
    fn test_bool_channel_pass_through() {
        let mut chan = BoolChannel::new("brake");

        assert!(!chan.evaluate());
        chan.write(true);
        assert!(chan.evaluate());
        chan.write(false);
        assert!(!chan.evaluate());
    }

    #[test]
    fn test_display_dump() {
        let source = Shared::new(Channel::<f64>::named("n_engine"));
        let mut chan = Channel::new("p_boost", "mbar", 1.0, 0.0);
        chan.set_dynamic_factor(source);

        let dump = chan.to_string();
        assert!(dump.contains("name:           p_boost"));
        assert!(dump.contains("unit:           mbar"));
        assert!(dump.contains("dynamic factor: n_engine"));
        assert!(dump.contains("dynamic offset: none"));
    }
}
