//! RNG module - sources of upcoming piece kinds
//!
//! The controller only needs an endless stream of kinds, expressed by the
//! [`PieceSource`] trait. Three sources are provided:
//!
//! - [`SevenBag`]: each bag holds one of every kind, shuffled
//! - [`Uniform`]: every kind equally likely on every draw
//! - [`Sequence`]: a fixed list repeated forever, for tests and puzzles
//!
//! Randomness comes from a small LCG so games are reproducible from a seed.

use blockfall_types::PieceKind;

/// Endless supply of piece kinds
pub trait PieceSource {
    fn next_kind(&mut self) -> PieceKind;
}

impl<S: PieceSource + ?Sized> PieceSource for Box<S> {
    fn next_kind(&mut self) -> PieceKind {
        (**self).next_kind()
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

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // Low bits of an LCG have short periods.
        (self.next_u32() >> 16) % max.max(1)
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// 7-bag piece generator
#[derive(Debug, Clone)]
pub struct SevenBag {
    bag: [PieceKind; 7],
    /// Index of the next kind to hand out
    bag_index: usize,
    rng: SimpleRng,
}

impl SevenBag {
    pub fn new(seed: u32) -> Self {
        Self {
            bag: PieceKind::ALL,
            // Force a shuffle on the first draw.
            bag_index: PieceKind::ALL.len(),
            rng: SimpleRng::new(seed),
        }
    }

    fn refill_bag(&mut self) {
        self.bag = PieceKind::ALL;
        self.rng.shuffle(&mut self.bag);
        self.bag_index = 0;
    }
}

impl PieceSource for SevenBag {
    fn next_kind(&mut self) -> PieceKind {
        if self.bag_index >= self.bag.len() {
            self.refill_bag();
        }
        let kind = self.bag[self.bag_index];
        self.bag_index += 1;
        kind
    }
}

/// Independent uniform draw per piece
#[derive(Debug, Clone)]
pub struct Uniform {
    rng: SimpleRng,
}

impl Uniform {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }
}

impl PieceSource for Uniform {
    fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.next_range(PieceKind::ALL.len() as u32) as usize]
    }
}

/// Repeat a fixed list of kinds forever
#[derive(Debug, Clone)]
pub struct Sequence {
    kinds: Vec<PieceKind>,
    index: usize,
}

impl Sequence {
    /// # Panics
    ///
    /// If `kinds` is empty.
    pub fn new(kinds: impl Into<Vec<PieceKind>>) -> Self {
        let kinds = kinds.into();
        assert!(!kinds.is_empty(), "piece sequence needs at least one kind");
        Self { kinds, index: 0 }
    }
}

impl PieceSource for Sequence {
    fn next_kind(&mut self) -> PieceKind {
        let kind = self.kinds[self.index];
        self.index = (self.index + 1) % self.kinds.len();
        kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_zero_seed_is_not_stuck() {
        let mut rng = SimpleRng::new(0);
        let a = rng.next_u32();
        let b = rng.next_u32();
        assert_ne!(a, b);
    }

    #[test]
    fn test_next_range_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(7) < 7);
        }
    }

    #[test]
    fn test_seven_bag_draws_all_seven() {
        let mut bag = SevenBag::new(1);
        for _ in 0..3 {
            let mut drawn: Vec<PieceKind> = (0..7).map(|_| bag.next_kind()).collect();
            drawn.sort();
            assert_eq!(drawn, PieceKind::ALL.to_vec());
        }
    }

    #[test]
    fn test_seven_bag_same_seed_same_order() {
        let mut a = SevenBag::new(99);
        let mut b = SevenBag::new(99);
        for _ in 0..21 {
            assert_eq!(a.next_kind(), b.next_kind());
        }
    }

    #[test]
    fn test_uniform_reaches_every_kind() {
        let mut source = Uniform::new(3);
        let mut seen = std::collections::BTreeSet::new();
        for _ in 0..500 {
            seen.insert(source.next_kind());
        }
        assert_eq!(seen.len(), 7);
    }

    #[test]
    fn test_sequence_cycles() {
        let mut source = Sequence::new(vec![PieceKind::I, PieceKind::O]);
        let drawn: Vec<_> = (0..5).map(|_| source.next_kind()).collect();
        assert_eq!(
            drawn,
            vec![PieceKind::I, PieceKind::O, PieceKind::I, PieceKind::O, PieceKind::I]
        );
    }

    #[test]
    fn test_boxed_source() {
        let mut source: Box<dyn PieceSource> = Box::new(Sequence::new([PieceKind::T]));
        assert_eq!(source.next_kind(), PieceKind::T);
    }
}
