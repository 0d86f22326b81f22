//! Seeded generator for placeholder skill ratings
//!
//! Datasets without real ratings (such as HR attrition exports) get ratings
//! from here. The values are demo data only and every dataset built with
//! them is flagged as synthetic.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const SYNTHETIC_MIN_RATING: u8 = 7;
pub const SYNTHETIC_MAX_RATING: u8 = 10;

pub struct SyntheticRatingGenerator {
    rng: StdRng,
    min: u8,
    max: u8,
}

impl SyntheticRatingGenerator {
    pub fn new(seed: u64) -> Self {
        Self::with_range(seed, SYNTHETIC_MIN_RATING, SYNTHETIC_MAX_RATING)
    }

    /// Ratings drawn uniformly from `min..=max`; the bounds are swapped if reversed.
    pub fn with_range(seed: u64, min: u8, max: u8) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            rng: StdRng::seed_from_u64(seed),
            min,
            max,
        }
    }

    pub fn rating(&mut self) -> u8 {
        self.rng.gen_range(self.min..=self.max)
    }

    pub fn ratings(&mut self, count: usize) -> Vec<u8> {
        (0..count).map(|_| self.rating()).collect()
    }

    /// Ratings in the comma-separated form used by candidate records.
    pub fn ratings_field(&mut self, count: usize) -> String {
        self.ratings(count)
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}
