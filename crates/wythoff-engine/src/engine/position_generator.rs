use std::{fmt, str::FromStr};

use log::debug;
use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{ParseSeedError, SeedRangeError, core::position::Position};

/// Inclusive range the initial pile sizes are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedRange {
    min: u32,
    max: u32,
}

impl Default for SeedRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl SeedRange {
    /// `10..=30`
    pub const DEFAULT: Self = Self { min: 10, max: 30 };

    /// Creates a range, rejecting ranges that contain no non-losing pair.
    ///
    /// Any range with `max >= 1` contains `(max, max)`, which is winning.
    pub fn new(min: u32, max: u32) -> Result<Self, SeedRangeError> {
        if min > max {
            return Err(SeedRangeError::Empty { min, max });
        }
        if max == 0 {
            return Err(SeedRangeError::TerminalOnly);
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub const fn min(&self) -> u32 {
        self.min
    }

    #[must_use]
    pub const fn max(&self) -> u32 {
        self.max
    }

    #[must_use]
    pub const fn contains(&self, value: u32) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Seed for deterministic position generation.
///
/// 128-bit seed for the generator's `Pcg32`. The same seed and range always
/// produce the same sequence of starting positions, which makes recorded games
/// and simulations reproducible. Serialized as a 32-character hex string.
///
/// ```
/// use rand::Rng as _;
/// use wythoff_engine::{PositionGenerator, PositionSeed, SeedRange};
///
/// let seed: PositionSeed = rand::rng().random();
/// let mut first = PositionGenerator::with_seed(SeedRange::DEFAULT, seed);
/// let mut second = PositionGenerator::with_seed(SeedRange::DEFAULT, seed);
/// assert_eq!(first.next_position(), second.next_position());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionSeed([u8; 16]);

impl PositionSeed {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub const fn to_bytes(self) -> [u8; 16] {
        self.0
    }
}

impl fmt::Display for PositionSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

impl FromStr for PositionSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 32 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseSeedError::new(s));
        }
        let num = u128::from_str_radix(s, 16).map_err(|_| ParseSeedError::new(s))?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl Serialize for PositionSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PositionSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

impl Distribution<PositionSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PositionSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        PositionSeed(seed)
    }
}

/// Draws starting positions uniformly from a [`SeedRange`].
///
/// Both piles are drawn independently; a draw that lands on a losing position
/// is rejected and redrawn, so the player who moves first always has a winning
/// move available.
#[derive(Debug, Clone)]
pub struct PositionGenerator {
    rng: Pcg32,
    seed: PositionSeed,
    range: SeedRange,
}

impl PositionGenerator {
    /// Creates a generator with a random seed.
    #[must_use]
    pub fn new(range: SeedRange) -> Self {
        Self::with_seed(range, rand::rng().random())
    }

    #[must_use]
    pub fn with_seed(range: SeedRange, seed: PositionSeed) -> Self {
        Self {
            rng: Pcg32::from_seed(seed.0),
            seed,
            range,
        }
    }

    #[must_use]
    pub fn seed(&self) -> PositionSeed {
        self.seed
    }

    #[must_use]
    pub fn range(&self) -> SeedRange {
        self.range
    }

    /// Draws the next non-losing starting position.
    pub fn next_position(&mut self) -> Position {
        loop {
            let first = self.rng.random_range(self.range.min..=self.range.max);
            let second = self.rng.random_range(self.range.min..=self.range.max);
            let position = Position::new(first, second);
            if !position.is_losing() {
                return position;
            }
            debug!("rejected losing starting position {position}");
        }
    }
}
