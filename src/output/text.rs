//! Human-readable text output

use crate::config::Config;
use crate::output::SimulationReport;
use crate::stats::ArrivalSummary;

/// Print the configuration the driver is about to run
pub fn print_configuration(config: &Config) {
    let sim = &config.simulation;

    println!("Configuration:");
    println!("  Simulation:");
    println!("    Mode: {}", sim.mode);
    println!("    Runs: {}", format_number(sim.runs as u64));
    println!("    Steps: {}", format_number(sim.steps as u64));
    println!("    Dimension: {}", sim.dim);
    match sim.seed {
        Some(seed) => println!("    Seed: {}", seed),
        None => println!("    Seed: (entropy)"),
    }
    if let Some(chunk) = sim.step_chunk {
        println!("    Step chunk: {}", format_number(chunk as u64));
    }

    println!("  Analysis:");
    let targets: Vec<String> = config.analysis.targets.iter().map(|t| t.to_string()).collect();
    println!("    Targets: {}", targets.join(", "));

    if let Some(ref path) = config.output.json_output {
        println!("  Output:");
        println!("    JSON: {}", path.display());
    }
}

/// Print simulation results to console
pub fn print_report(report: &SimulationReport) {
    println!("═══════════════════════════════════════════════════════════");
    println!("                  SIMULATION RESULTS");
    println!("═══════════════════════════════════════════════════════════");
    println!();

    println!("Elapsed Time: {:.3}s", report.elapsed_secs);
    println!(
        "Walks: {} runs of {} steps in {} dimensions ({})",
        format_number(report.runs as u64),
        format_number(report.steps as u64),
        report.dim,
        report.mode
    );
    println!();

    println!("First Arrival:");
    for summary in &report.arrivals {
        println!("  {}", format_arrival(summary));
    }
    println!();

    println!("═══════════════════════════════════════════════════════════");
}

/// One-line description of an arrival summary
pub fn format_arrival(summary: &ArrivalSummary) -> String {
    let reached = format!(
        "{}/{} runs ({:.1}%)",
        summary.reached_runs,
        summary.total_runs,
        summary.reached_fraction() * 100.0
    );

    match summary.mean_first_arrival {
        Some(mean) => format!("distance {}: mean {:.2} steps, {}", summary.target, mean, reached),
        None => format!("distance {}: no arrivals, {}", summary.target, reached),
    }
}

/// Format a number with thousands separators
fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let mut count = 0;

    for c in s.chars().rev() {
        if count > 0 && count % 3 == 0 {
            result.push(',');
        }
        result.push(c);
        count += 1;
    }

    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn test_format_arrival() {
        let summary = ArrivalSummary {
            target: 30.0,
            total_runs: 1000,
            reached_runs: 750,
            mean_first_arrival: Some(1234.5),
        };
        assert_eq!(format_arrival(&summary), "distance 30: mean 1234.50 steps, 750/1000 runs (75.0%)");
    }

    #[test]
    fn test_format_no_arrivals() {
        let summary = ArrivalSummary {
            target: 50.0,
            total_runs: 10,
            reached_runs: 0,
            mean_first_arrival: None,
        };
        assert_eq!(format_arrival(&summary), "distance 50: no arrivals, 0/10 runs (0.0%)");
    }
}
