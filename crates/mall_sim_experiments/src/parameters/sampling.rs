use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::combinations::{ParameterCombination, ParameterVariations};
use super::constraints::{canonical_count, canonicalize};
use super::conversion::combination_to_parameter_sets;
use super::{ParameterSet, ParameterSpace};

pub(super) const MAX_ATTEMPTS: usize = 10_000;

fn pick<'a, T, R: Rng>(rng: &mut R, values: &'a [T]) -> &'a T {
    &values[rng.gen_range(0..values.len())]
}

/// Draw up to `count` unique canonical combinations.
///
/// Returns the combinations in draw order and the number of draws it took.
pub(super) fn sample_combinations(
    variations: &ParameterVariations,
    count: usize,
    seed: u64,
) -> (Vec<ParameterCombination>, usize) {
    let target = count.min(canonical_count(variations));
    let mut rng = StdRng::seed_from_u64(seed);
    let mut seen = HashSet::new();
    let mut combinations = Vec::with_capacity(target);
    let mut attempts = 0;

    while combinations.len() < target && attempts < MAX_ATTEMPTS {
        attempts += 1;

        let combo = canonicalize(
            ParameterCombination {
                subject_attractiveness: *pick(&mut rng, &variations.subject_attractiveness),
                tenant_mix: pick(&mut rng, &variations.tenant_mixes).clone(),
                traffic: *pick(&mut rng, &variations.traffic),
                phase: *pick(&mut rng, &variations.phases),
                agent_count: *pick(&mut rng, &variations.agent_counts),
            },
            variations,
        );

        if seen.insert(combo.key()) {
            combinations.push(combo);
        }
    }

    (combinations, attempts)
}

impl ParameterSpace {
    /// Generate random parameter sets (Monte Carlo sampling).
    ///
    /// Samples up to `count` unique combinations from the space. Stops early
    /// when the space has fewer unique combinations than requested.
    pub fn sample_random(&self, count: usize, seed: u64) -> Vec<ParameterSet> {
        let variations = ParameterVariations::from_space(self);
        let (combinations, _) = sample_combinations(&variations, count, seed);

        combinations
            .into_iter()
            .enumerate()
            .flat_map(|(experiment_id, combo)| {
                combination_to_parameter_sets(&self.base, combo, experiment_id, self.runs_per_combination)
            })
            .collect()
    }
}
