//! RNG module - gap placement randomness
//!
//! Pipes draw their gap center from a [`GapRng`]. The default source is a
//! small LCG so games are reproducible from a seed; tests can plug in a
//! [`SequenceRng`] to script exact gap positions.

/// Source of uniform integers for pipe gap placement
pub trait GapRng {
    /// Uniform integer in `[lo, hi]` (both inclusive).
    ///
    /// Returns `lo` when the range is empty.
    fn range_inclusive(&mut self, lo: i32, hi: i32) -> i32;
}

impl<R: GapRng + ?Sized> GapRng for &mut R {
    fn range_inclusive(&mut self, lo: i32, hi: i32) -> i32 {
        (**self).range_inclusive(lo, hi)
    }
}

impl<R: GapRng + ?Sized> GapRng for Box<R> {
    fn range_inclusive(&mut self, lo: i32, hi: i32) -> i32 {
        (**self).range_inclusive(lo, hi)
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // The high bits of an LCG are far better distributed than the low ones.
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl GapRng for SimpleRng {
    fn range_inclusive(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        let span = (hi - lo) as u32 + 1;
        lo + self.next_range(span) as i32
    }
}

/// Scripted RNG that replays a fixed list of values.
///
/// Values are clamped into the requested range and the list wraps around,
/// so a one-element sequence always yields the same gap.
#[derive(Debug, Clone)]
pub struct SequenceRng {
    values: Vec<i32>,
    next: usize,
}

impl SequenceRng {
    pub fn new(values: impl Into<Vec<i32>>) -> Self {
        Self {
            values: values.into(),
            next: 0,
        }
    }

    /// Always produce `value` (clamped).
    pub fn constant(value: i32) -> Self {
        Self::new(vec![value])
    }
}

impl GapRng for SequenceRng {
    fn range_inclusive(&mut self, lo: i32, hi: i32) -> i32 {
        if self.values.is_empty() || hi <= lo {
            return lo;
        }
        let v = self.values[self.next % self.values.len()];
        self.next = self.next.wrapping_add(1);
        v.clamp(lo, hi)
    }
}
