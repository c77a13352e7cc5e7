//! Run the default forecast (1000 shoppers, Shop + Eat tenants) for every
//! project phase and print the reports.
//!
//! Run with: cargo run -p mall_sim_core --example forecast_run

use mall_sim_core::report::render_report;
use mall_sim_core::{run, ProjectPhase, SimulationConfig};

fn main() {
    const SEED: u64 = 123;
    let config = SimulationConfig::default();

    for phase in ProjectPhase::ALL {
        let effective = phase.apply(&config);
        match run(&effective, SEED) {
            Ok(run) => println!("{}", render_report(&run, &effective, phase)),
            Err(err) => eprintln!("{phase}: {err}"),
        }
    }
}
