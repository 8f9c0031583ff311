//! Sources of randomness for picking the next edge to contract.
//!
//! The estimators only ever ask for "an index in `0..len`", so the source is a
//! small trait. [`UniformSelector`] wraps a seedable RNG and is what callers
//! normally use; [`ScriptedSelector`] replays fixed picks so a contraction
//! sequence can be reproduced exactly in tests.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Picks the index of the edge to contract next.
pub trait EdgeSelector {
    /// Returns an index in `0..len`. `len` is never zero.
    fn select(&mut self, len: usize) -> usize;

    /// Derives an independent selector for a parallel branch.
    fn fork(&mut self) -> Self
    where
        Self: Sized;
}

/// Uniform edge selection backed by a seedable RNG.
#[derive(Debug, Clone)]
pub struct UniformSelector<R = ChaCha20Rng> {
    rng: R,
}

/// Selector used when none is supplied.
pub type DefaultSelector = UniformSelector<ChaCha20Rng>;

impl<R: Rng + SeedableRng> UniformSelector<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Seeds the RNG from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: R::from_entropy(),
        }
    }

    /// Seeds the RNG deterministically so runs can be reproduced.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: R::seed_from_u64(seed),
        }
    }
}

impl<R: Rng + SeedableRng> EdgeSelector for UniformSelector<R> {
    fn select(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    fn fork(&mut self) -> Self {
        Self::seeded(self.rng.gen())
    }
}

/// Replays a fixed list of picks, wrapping each one into range with `% len`
/// and starting over once the list is exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedSelector {
    picks: Vec<usize>,
    position: usize,
}

impl ScriptedSelector {
    /// An empty script always picks index 0.
    pub fn new(picks: Vec<usize>) -> Self {
        Self { picks, position: 0 }
    }
}

impl EdgeSelector for ScriptedSelector {
    fn select(&mut self, len: usize) -> usize {
        if self.picks.is_empty() {
            return 0;
        }
        let pick = self.picks[self.position % self.picks.len()];
        self.position += 1;
        pick % len
    }

    /// Forks continue the script from the current position.
    fn fork(&mut self) -> Self {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_selector_stays_in_range() {
        let mut selector = DefaultSelector::seeded(7);
        for len in 1..50 {
            assert!(selector.select(len) < len);
        }
    }

    #[test]
    fn test_seeded_selectors_repeat() {
        let mut a = DefaultSelector::seeded(42);
        let mut b = DefaultSelector::seeded(42);
        let picks_a: Vec<usize> = (0..20).map(|_| a.select(1000)).collect();
        let picks_b: Vec<usize> = (0..20).map(|_| b.select(1000)).collect();
        assert_eq!(picks_a, picks_b);
    }

    #[test]
    fn test_forks_diverge_from_parent() {
        let mut parent = DefaultSelector::seeded(1);
        let mut first = parent.fork();
        let mut second = parent.fork();
        let a: Vec<usize> = (0..16).map(|_| first.select(1 << 20)).collect();
        let b: Vec<usize> = (0..16).map(|_| second.select(1 << 20)).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn test_uniform_selector_covers_all_indices() {
        let mut selector = DefaultSelector::seeded(3);
        let mut counts = [0usize; 4];
        for _ in 0..4000 {
            counts[selector.select(4)] += 1;
        }
        for &count in &counts {
            assert!(count > 800, "counts {:?}", counts);
        }
    }

    #[test]
    fn test_scripted_selector_wraps() {
        let mut selector = ScriptedSelector::new(vec![5, 1]);
        assert_eq!(selector.select(3), 2);
        assert_eq!(selector.select(3), 1);
        assert_eq!(selector.select(4), 1);

        let mut empty = ScriptedSelector::new(Vec::new());
        assert_eq!(empty.select(10), 0);
    }
}
