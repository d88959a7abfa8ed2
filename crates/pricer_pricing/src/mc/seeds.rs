//! Deterministic scenario seeds.

/// The ordered seeds `{init_seed, init_seed + 1, …, init_seed + n - 1}`.
///
/// Seed `i` depends only on the start seed and `i`, so a scenario draws the
/// same path whatever order or thread evaluates it. Addition wraps at
/// `u64::MAX`.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::ScenarioSeedSet;
///
/// let seeds = ScenarioSeedSet::new(10, 3);
/// assert_eq!(seeds.iter().collect::<Vec<_>>(), vec![10, 11, 12]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScenarioSeedSet {
    init_seed: u64,
    n_scenarios: usize,
}

impl ScenarioSeedSet {
    /// Creates the seed set for `n_scenarios` scenarios.
    #[inline]
    pub fn new(init_seed: u64, n_scenarios: usize) -> Self {
        Self {
            init_seed,
            n_scenarios,
        }
    }

    /// First seed.
    #[inline]
    pub fn init_seed(&self) -> u64 {
        self.init_seed
    }

    /// Number of seeds.
    #[inline]
    pub fn len(&self) -> usize {
        self.n_scenarios
    }

    /// Returns `true` if the set holds no seeds.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n_scenarios == 0
    }

    /// Seed of scenario `index`.
    #[inline]
    pub fn seed(&self, index: usize) -> u64 {
        self.init_seed.wrapping_add(index as u64)
    }

    /// Seeds in scenario order.
    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        (0..self.n_scenarios).map(move |i| self.seed(i))
    }
}
