use super::*;

#[test]
fn test_grid_search_single_parameter() {
    let space = ParameterSpace::grid().subject_attractiveness(vec![60.0, 80.0, 100.0]);
    let sets = space.generate();
    assert_eq!(sets.len(), 3);
}

#[test]
fn test_grid_search_multiple_parameters() {
    let space = ParameterSpace::grid()
        .subject_attractiveness(vec![60.0, 80.0])
        .traffic(vec![false, true]);
    let sets = space.generate();
    assert_eq!(sets.len(), 4);
}

#[test]
fn empty_space_uses_base_configuration() {
    let base = SimulationConfig::default().with_agent_count(250).with_traffic(true);
    let sets = ParameterSpace::grid().with_base(base.clone()).generate();

    assert_eq!(sets.len(), 1);
    assert_eq!(sets[0].config, base);
    assert_eq!(sets[0].phase, ProjectPhase::Stabilization);
}

#[test]
fn all_tenant_mixes_is_power_set() {
    let mixes = ParameterSpace::all_tenant_mixes();
    assert_eq!(mixes.len(), 16);
    assert!(mixes[0].is_empty());
    assert_eq!(mixes[15].len(), 4);

    let unique: std::collections::HashSet<Vec<TenantFeature>> = mixes.into_iter().collect();
    assert_eq!(unique.len(), 16);
}

#[test]
fn construction_collapses_quality_and_tenants() {
    let space = ParameterSpace::grid()
        .subject_attractiveness(vec![60.0, 80.0, 100.0])
        .tenant_mixes(ParameterSpace::all_tenant_mixes())
        .phases(vec![ProjectPhase::Construction, ProjectPhase::Stabilization]);
    let sets = space.generate();

    let construction = sets
        .iter()
        .filter(|s| s.phase == ProjectPhase::Construction)
        .count();
    assert_eq!(construction, 1);
    assert_eq!(sets.len(), 1 + 3 * 16);
}

#[test]
fn experiment_ids_are_sequential_and_shared_by_replicates() {
    let sets = ParameterSpace::grid()
        .subject_attractiveness(vec![60.0, 80.0])
        .runs_per_combination(3)
        .generate();

    assert_eq!(sets.len(), 6);
    let ids: Vec<(&str, usize)> = sets.iter().map(|s| (s.experiment_id.as_str(), s.run_id)).collect();
    assert_eq!(
        ids,
        vec![
            ("exp_0", 0),
            ("exp_0", 1),
            ("exp_0", 2),
            ("exp_1", 0),
            ("exp_1", 1),
            ("exp_1", 2),
        ]
    );

    let seeds: std::collections::HashSet<u64> = sets.iter().map(|s| s.seed).collect();
    assert_eq!(seeds.len(), 6);
}

#[test]
fn runs_per_combination_is_at_least_one() {
    let sets = ParameterSpace::grid().runs_per_combination(0).generate();
    assert_eq!(sets.len(), 1);
}

#[test]
fn parameter_set_values_follow_combination() {
    let sets = ParameterSpace::grid()
        .subject_attractiveness(vec![95.0])
        .tenant_mixes(vec![vec![TenantFeature::Play]])
        .agent_counts(vec![321])
        .generate();

    let config = &sets[0].config;
    assert_eq!(config.attractiveness.get(DestinationId::SUBJECT), 95.0);
    assert_eq!(config.tenant_features.len(), 1);
    assert!(config.tenant_features.contains(&TenantFeature::Play));
    assert_eq!(config.agent_count, 321);
}

#[test]
fn effective_config_applies_phase() {
    let sets = ParameterSpace::grid()
        .subject_attractiveness(vec![70.0])
        .phases(vec![ProjectPhase::GrandOpening])
        .generate();

    let effective = sets[0].effective_config();
    assert_eq!(effective.attractiveness.get(DestinationId::SUBJECT), 85.0);
    assert_eq!(sets[0].config.attractiveness.get(DestinationId::SUBJECT), 70.0);
}

#[test]
fn test_random_sampling() {
    let space = ParameterSpace::grid()
        .subject_attractiveness(vec![50.0, 60.0, 70.0, 80.0])
        .traffic(vec![false, true])
        .agent_counts(vec![100, 200, 300]);
    let sets = space.sample_random(10, 42);
    assert_eq!(sets.len(), 10);
}

#[test]
fn random_sampling_stops_at_space_size() {
    let space = ParameterSpace::grid()
        .subject_attractiveness(vec![50.0, 60.0])
        .traffic(vec![false, true]);
    let sets = space.sample_random(50, 7);
    assert_eq!(sets.len(), 4);
}

#[test]
fn random_sampling_is_deterministic() {
    let space = ParameterSpace::grid()
        .subject_attractiveness(vec![50.0, 60.0, 70.0])
        .tenant_mixes(ParameterSpace::all_tenant_mixes());
    assert_eq!(space.sample_random(8, 3), space.sample_random(8, 3));
}

#[test]
fn sampling_with_construction_stops_at_canonical_count() {
    let space = ParameterSpace::grid()
        .subject_attractiveness(vec![60.0, 80.0, 100.0])
        .tenant_mixes(ParameterSpace::all_tenant_mixes())
        .phases(vec![ProjectPhase::Construction, ProjectPhase::GrandOpening]);
    let variations = super::combinations::ParameterVariations::from_space(&space);

    assert_eq!(super::constraints::canonical_count(&variations), 1 + 3 * 16);

    let (combinations, attempts) = super::sampling::sample_combinations(&variations, 500, 9);
    assert_eq!(combinations.len(), 49);
    assert!(attempts < super::sampling::MAX_ATTEMPTS, "took {attempts} draws");
    assert_eq!(space.sample_random(500, 9).len(), 49);
}

#[test]
fn base_phase_applies_when_no_phases_listed() {
    let sets = ParameterSpace::grid()
        .with_base_phase(ProjectPhase::GrandOpening)
        .generate();
    assert_eq!(sets.len(), 1);
    assert_eq!(sets[0].phase, ProjectPhase::GrandOpening);
}
