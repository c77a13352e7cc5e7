//! Example: tenant mix and quality sweep for the subject mall.
//!
//! Runs every tenant mix at three quality levels across the opening and
//! stabilized phases, scores each run, prints the best strategy and writes
//! the results to CSV.

use mall_sim_core::{ProjectPhase, SimulationConfig};
use mall_sim_experiments::{
    export_to_csv, find_best_parameters, find_best_result_index, run_parallel_experiments,
    summarize_replicates, ParameterSpace, StrategyWeights,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Starting strategy sweep...");

    let space = ParameterSpace::grid()
        .with_base(SimulationConfig::default().with_agent_count(2_000))
        .subject_attractiveness(vec![60.0, 80.0, 100.0])
        .tenant_mixes(ParameterSpace::all_tenant_mixes())
        .phases(vec![ProjectPhase::GrandOpening, ProjectPhase::Stabilization])
        .runs_per_combination(3);

    let parameter_sets = space.generate();
    println!("Generated {} parameter sets", parameter_sets.len());

    let results = run_parallel_experiments(parameter_sets.clone(), None)?;
    println!("Completed {} simulations", results.len());

    let weights = StrategyWeights::default();
    let best_idx = find_best_result_index(&results, &weights).ok_or("no results to analyze")?;
    let best = &results[best_idx];

    println!("\n=== Best Run ===");
    println!("Experiment: {} (run {})", best.experiment_id, best.run_id);
    println!("Phase: {}", best.phase);
    println!("Tenant mix: {}", best.tenant_mix);
    println!("Subject quality: {:.0}", best.subject_attractiveness);
    println!("Subject share: {:.1}%", best.subject_share);
    println!("Subject revenue: ${:.0}", best.subject_revenue);

    if let Some(params) = find_best_parameters(&results, &parameter_sets, &weights) {
        println!("Seed: {}", params.seed);
    }

    let summaries = summarize_replicates(&results);
    if let Some(top) = summaries
        .iter()
        .max_by(|a, b| a.avg_subject_revenue.total_cmp(&b.avg_subject_revenue))
    {
        println!(
            "\nHighest average subject revenue: {} (${:.0} over {} runs)",
            top.experiment_id, top.avg_subject_revenue, top.runs
        );
    }

    export_to_csv(&results, "strategy_results.csv")?;
    println!("\nExported to strategy_results.csv");

    Ok(())
}
