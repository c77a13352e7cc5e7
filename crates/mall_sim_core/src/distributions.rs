//! Sampling primitives for population generation.
//!
//! Every agent draws from its own RNG stream derived from the run seed and the
//! agent index, so agents can be generated in any order (or in parallel) and
//! still come out identical for the same seed.

use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::agents::IncomeClass;

/// Golden-ratio increment used to spread per-agent seeds.
const SEED_STRIDE: u64 = 0x9e37_79b9_7f4a_7c15;

/// RNG for agent `index` within a run seeded with `seed`.
pub fn agent_rng(seed: u64, index: usize) -> StdRng {
    StdRng::seed_from_u64(seed ^ (index as u64).wrapping_add(1).wrapping_mul(SEED_STRIDE))
}

/// Normal distribution sampled with the Box-Muller transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Normal {
    pub mean: f64,
    pub std_dev: f64,
}

impl Normal {
    pub fn new(mean: f64, std_dev: f64) -> Self {
        Self {
            mean,
            std_dev: std_dev.max(0.0),
        }
    }

    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        // u1 in (0, 1] so ln() stays finite
        let u1: f64 = 1.0 - rng.gen::<f64>();
        let u2: f64 = rng.gen();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        self.mean + self.std_dev * z
    }
}

/// Categorical distribution over income classes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IncomeMix {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

impl Default for IncomeMix {
    fn default() -> Self {
        Self {
            low: 0.20,
            medium: 0.50,
            high: 0.30,
        }
    }
}

impl IncomeMix {
    pub fn probability(&self, income: IncomeClass) -> f64 {
        match income {
            IncomeClass::Low => self.low,
            IncomeClass::Medium => self.medium,
            IncomeClass::High => self.high,
        }
    }

    /// Inverse-CDF sample from a uniform draw in `[0, 1)`.
    pub fn class_for(&self, u: f64) -> IncomeClass {
        let total = self.low + self.medium + self.high;
        let u = u * total;
        if u < self.low {
            IncomeClass::Low
        } else if u < self.low + self.medium {
            IncomeClass::Medium
        } else {
            IncomeClass::High
        }
    }

    pub fn sample<R: Rng>(&self, rng: &mut R) -> IncomeClass {
        self.class_for(rng.gen())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn agent_rng_is_reproducible() {
        let a: f64 = agent_rng(42, 7).gen();
        let b: f64 = agent_rng(42, 7).gen();
        let c: f64 = agent_rng(42, 8).gen();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn normal_sample_moments() {
        let normal = Normal::new(6.5, 2.0);
        let mut rng = StdRng::seed_from_u64(1);
        let samples: Vec<f64> = (0..20_000).map(|_| normal.sample(&mut rng)).collect();
        let mean = samples.iter().sum::<f64>() / samples.len() as f64;
        let var = samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / samples.len() as f64;
        assert!((mean - 6.5).abs() < 0.1, "mean {mean}");
        assert!((var.sqrt() - 2.0).abs() < 0.1, "std dev {}", var.sqrt());
    }

    #[test]
    fn income_thresholds() {
        let mix = IncomeMix::default();
        assert_eq!(mix.class_for(0.0), IncomeClass::Low);
        assert_eq!(mix.class_for(0.19), IncomeClass::Low);
        assert_eq!(mix.class_for(0.2), IncomeClass::Medium);
        assert_eq!(mix.class_for(0.69), IncomeClass::Medium);
        assert_eq!(mix.class_for(0.7), IncomeClass::High);
        assert_eq!(mix.class_for(0.999), IncomeClass::High);
    }

    #[test]
    fn income_sample_frequencies() {
        let mix = IncomeMix::default();
        let mut rng = StdRng::seed_from_u64(9);
        let n = 20_000;
        let mut counts = [0usize; 3];
        for _ in 0..n {
            counts[mix.sample(&mut rng).code() as usize - 1] += 1;
        }
        for (count, income) in counts.iter().zip(IncomeClass::ALL) {
            let freq = *count as f64 / n as f64;
            assert!(
                (freq - mix.probability(income)).abs() < 0.02,
                "{income}: {freq}"
            );
        }
    }
}
