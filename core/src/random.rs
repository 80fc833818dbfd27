use alloc::vec::Vec;
use rand::rngs::SmallRng;

/// Source of uniformly distributed card positions.
///
/// The round controller never touches ambient randomness, everything goes through this so that a session can be
/// replayed from a seed or driven by a fixed script.
pub trait RandomSource {
    /// Returns an index uniformly distributed in `0..bound`. `bound` is never zero.
    fn index_below(&mut self, bound: usize) -> usize;
}

impl RandomSource for SmallRng {
    fn index_below(&mut self, bound: usize) -> usize {
        use rand::Rng;
        self.random_range(0..bound)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn index_below(&mut self, bound: usize) -> usize {
        (**self).index_below(bound)
    }
}

/// Replays a fixed list of indices, wrapping around when it runs out.
///
/// Values that don't fit the requested bound are clamped to the last valid index.
#[derive(Clone, Debug, PartialEq)]
pub struct ScriptedRandom {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedRandom {
    pub fn new(script: impl Into<Vec<usize>>) -> Self {
        let script = script.into();
        assert!(!script.is_empty(), "script must not be empty");
        Self { script, cursor: 0 }
    }

    /// How many values were drawn so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRandom {
    fn index_below(&mut self, bound: usize) -> usize {
        let value = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        value.min(bound - 1)
    }
}
