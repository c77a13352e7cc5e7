use mall_sim_core::ProjectPhase;

use super::combinations::{ParameterCombination, ParameterVariations};

/// During construction the subject is closed: its quality and tenant mix have
/// no effect, so only the first value of each is kept.
pub(super) fn is_canonical_combination(
    combo: &ParameterCombination,
    variations: &ParameterVariations,
) -> bool {
    if combo.phase != ProjectPhase::Construction {
        return true;
    }
    let first_quality = variations.subject_attractiveness.first().copied();
    let first_mix = variations.tenant_mixes.first();
    Some(combo.subject_attractiveness) == first_quality && Some(&combo.tenant_mix) == first_mix
}

/// Map a combination onto its canonical representative.
pub(super) fn canonicalize(
    mut combo: ParameterCombination,
    variations: &ParameterVariations,
) -> ParameterCombination {
    if combo.phase == ProjectPhase::Construction {
        if let Some(quality) = variations.subject_attractiveness.first() {
            combo.subject_attractiveness = *quality;
        }
        if let Some(mix) = variations.tenant_mixes.first() {
            combo.tenant_mix = mix.clone();
        }
    }
    combo
}

/// Number of distinct combinations left once construction duplicates collapse.
pub(super) fn canonical_count(variations: &ParameterVariations) -> usize {
    variations
        .generate_combinations()
        .filter(|combo| is_canonical_combination(combo, variations))
        .map(|combo| combo.key())
        .collect::<std::collections::HashSet<_>>()
        .len()
}
