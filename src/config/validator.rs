//! Configuration validation
//!
//! Two layers live here. The count gate ([`ensure_positive`],
//! [`validate_count`]) is shared by every library entry point and runs
//! before any randomness is drawn. [`validate_config`] checks a merged
//! configuration before the driver starts a simulation.

use super::*;
use anyhow::Result;

/// Reject a zero count
///
/// The library API takes counts as `usize`, so the type system already rules
/// out negatives and non-integers; zero is the one remaining invalid value.
pub fn ensure_positive(name: &'static str, value: usize) -> Result<usize, WalkError> {
    if value == 0 {
        return Err(WalkError::not_positive(name, 0u8));
    }
    Ok(value)
}

/// Convert a signed count to `usize`, rejecting zero and negatives
pub fn validate_count(name: &'static str, value: i128) -> Result<usize, WalkError> {
    if value <= 0 {
        return Err(WalkError::not_positive(name, value));
    }
    usize::try_from(value).map_err(|_| WalkError::wrong_type(name, format!("out-of-range integer {}", value)))
}

/// Validate complete configuration
pub fn validate_config(config: &Config) -> Result<()> {
    validate_simulation(&config.simulation)?;
    validate_analysis(&config.analysis)?;
    Ok(())
}

/// Validate simulation parameters
pub fn validate_simulation(sim: &SimulationConfig) -> Result<()> {
    ensure_positive("runs", sim.runs)?;
    ensure_positive("steps", sim.steps)?;
    ensure_positive("dim", sim.dim)?;

    if sim.seed == Some(0) {
        return Err(WalkError::not_positive("seed", 0u8).into());
    }

    if let Some(chunk) = sim.step_chunk {
        ensure_positive("step_chunk", chunk)?;
        if sim.mode == SimulationMode::Batch {
            log::warn!("step_chunk {} is ignored in batch mode", chunk);
        }
    }

    Ok(())
}

/// Validate analysis parameters
pub fn validate_analysis(analysis: &AnalysisConfig) -> Result<()> {
    if analysis.targets.is_empty() {
        anyhow::bail!("At least one target distance must be specified");
    }

    for (i, &target) in analysis.targets.iter().enumerate() {
        if !target.is_finite() || target <= 0.0 {
            anyhow::bail!("Target {} must be a finite positive distance, got {}", i, target);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_positive() {
        assert_eq!(ensure_positive("steps", 3).unwrap(), 3);
        assert!(matches!(
            ensure_positive("steps", 0),
            Err(WalkError::NotPositive { name: "steps", value: 0 })
        ));
    }

    #[test]
    fn test_validate_count() {
        assert_eq!(validate_count("runs", 12).unwrap(), 12);
        assert!(matches!(validate_count("runs", 0), Err(WalkError::NotPositive { value: 0, .. })));
        assert!(matches!(validate_count("runs", -3), Err(WalkError::NotPositive { value: -3, .. })));
        assert!(matches!(validate_count("runs", i128::MAX), Err(WalkError::WrongType { name: "runs", .. })));
    }

    #[test]
    fn test_validate_default_config() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_simulation_counts() {
        let mut sim = SimulationConfig::default();
        sim.steps = 0;
        assert!(validate_simulation(&sim).is_err());

        let mut sim = SimulationConfig::default();
        sim.seed = Some(0);
        assert!(validate_simulation(&sim).is_err());

        let mut sim = SimulationConfig::default();
        sim.step_chunk = Some(0);
        assert!(validate_simulation(&sim).is_err());
    }

    #[test]
    fn test_validate_targets() {
        let mut analysis = AnalysisConfig::default();
        assert!(validate_analysis(&analysis).is_ok());

        analysis.targets = vec![];
        assert!(validate_analysis(&analysis).is_err());

        analysis.targets = vec![20.0, -1.0];
        assert!(validate_analysis(&analysis).is_err());

        analysis.targets = vec![f64::NAN];
        assert!(validate_analysis(&analysis).is_err());
    }
}
