//! First-arrival time analysis
//!
//! A run arrives at distance `d` at the first time index `t` where
//! `|pos[r, t, :]| >= d` (Euclidean norm, inclusive comparison). The mean
//! first-arrival time averages `t` over the runs that arrive; runs that
//! never reach the target are left out of the mean.
//!
//! When no run arrives the mean is reported as `None`, never as NaN or as a
//! made-up number.

use crate::error::WalkError;
use ndarray::{Array2, ArrayBase, Axis, Data, Ix3};
use serde::{Deserialize, Serialize};

/// Target distance used when none is configured
pub const DEFAULT_TARGET_DISTANCE: f64 = 30.0;

/// Arrival statistics of one tensor for one target distance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrivalSummary {
    /// Target distance from the origin
    pub target: f64,

    /// Number of runs examined
    pub total_runs: usize,

    /// Number of runs that reached the target at some recorded time
    pub reached_runs: usize,

    /// Mean first-arrival time over the runs that reached the target
    pub mean_first_arrival: Option<f64>,
}

impl ArrivalSummary {
    /// Fraction of runs that reached the target (0.0 for an empty tensor)
    pub fn reached_fraction(&self) -> f64 {
        if self.total_runs == 0 {
            return 0.0;
        }
        self.reached_runs as f64 / self.total_runs as f64
    }
}

/// Euclidean distance from the origin for every (run, time), shape `(R, T)`
pub fn distances_from_origin<S>(pos: &ArrayBase<S, Ix3>) -> Array2<f64>
where
    S: Data<Elem = f64>,
{
    pos.map_axis(Axis(2), |coords| coords.dot(&coords).sqrt())
}

/// First time index at which each run reaches `target`, `None` if never
pub fn first_arrivals<S>(pos: &ArrayBase<S, Ix3>, target: f64) -> Result<Vec<Option<usize>>, WalkError>
where
    S: Data<Elem = f64>,
{
    check_target(target)?;

    let distances = distances_from_origin(pos);
    Ok(distances
        .outer_iter()
        .map(|run| run.iter().position(|&d| d >= target))
        .collect())
}

/// Arrival counts and mean first-arrival time for `target`
pub fn arrival_summary<S>(pos: &ArrayBase<S, Ix3>, target: f64) -> Result<ArrivalSummary, WalkError>
where
    S: Data<Elem = f64>,
{
    let arrivals = first_arrivals(pos, target)?;
    let times: Vec<usize> = arrivals.iter().flatten().copied().collect();

    let mean_first_arrival = if times.is_empty() {
        None
    } else {
        Some(times.iter().sum::<usize>() as f64 / times.len() as f64)
    };

    log::debug!("Target {}: {} of {} runs arrived", target, times.len(), arrivals.len());

    Ok(ArrivalSummary {
        target,
        total_runs: arrivals.len(),
        reached_runs: times.len(),
        mean_first_arrival,
    })
}

/// Mean first-arrival time over the runs that reach `target`
///
/// Returns `Ok(None)` when no run reaches the target.
pub fn mean_first_arrival<S>(pos: &ArrayBase<S, Ix3>, target: f64) -> Result<Option<f64>, WalkError>
where
    S: Data<Elem = f64>,
{
    Ok(arrival_summary(pos, target)?.mean_first_arrival)
}

fn check_target(target: f64) -> Result<(), WalkError> {
    if !target.is_finite() || target <= 0.0 {
        return Err(WalkError::InvalidTarget(target));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::uniform::UniformStepDistribution;
    use crate::walk::simulate_with;
    use ndarray::{array, Array3};

    /// Two 2D runs of three steps:
    /// run 0 walks straight along x, run 1 wanders back to the origin
    fn fixture() -> Array3<f64> {
        array![
            [[0.0, 0.0], [1.0, 0.0], [2.0, 0.0], [3.0, 0.0]],
            [[0.0, 0.0], [0.0, 1.0], [0.0, 0.0], [0.0, -1.0]],
        ]
    }

    #[test]
    fn test_distances() {
        let pos = array![[[0.0, 0.0], [3.0, 4.0]]];
        assert_eq!(distances_from_origin(&pos), array![[0.0, 5.0]]);
    }

    #[test]
    fn test_first_arrivals() {
        let pos = fixture();

        assert_eq!(first_arrivals(&pos, 1.0).unwrap(), vec![Some(1), Some(1)]);
        assert_eq!(first_arrivals(&pos, 2.0).unwrap(), vec![Some(2), None]);
        assert_eq!(first_arrivals(&pos, 3.5).unwrap(), vec![None, None]);
    }

    #[test]
    fn test_arrival_is_inclusive() {
        let pos = array![[[0.0, 0.0], [3.0, 4.0]]];
        assert_eq!(first_arrivals(&pos, 5.0).unwrap(), vec![Some(1)]);
    }

    #[test]
    fn test_mean_over_arrived_runs_only() {
        let pos = fixture();

        assert_eq!(mean_first_arrival(&pos, 1.0).unwrap(), Some(1.0));
        // Run 1 never reaches 2.0 and is left out of the mean
        assert_eq!(mean_first_arrival(&pos, 2.0).unwrap(), Some(2.0));
    }

    #[test]
    fn test_no_arrivals() {
        let pos = fixture();

        assert_eq!(mean_first_arrival(&pos, 10.0).unwrap(), None);

        let summary = arrival_summary(&pos, 10.0).unwrap();
        assert_eq!(summary.reached_runs, 0);
        assert_eq!(summary.total_runs, 2);
        assert_eq!(summary.reached_fraction(), 0.0);
    }

    #[test]
    fn test_summary_counts() {
        let summary = arrival_summary(&fixture(), 2.0).unwrap();

        assert_eq!(summary.target, 2.0);
        assert_eq!(summary.reached_runs, 1);
        assert_eq!(summary.reached_fraction(), 0.5);
    }

    #[test]
    fn test_invalid_target() {
        let pos = fixture();

        for target in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(mean_first_arrival(&pos, target), Err(WalkError::InvalidTarget(_))));
        }
    }

    #[test]
    fn test_arrival_monotonic_in_target() {
        let mut source = UniformStepDistribution::with_seed(2024);
        let pos = simulate_with(&mut source, 200, 400, 3).unwrap();

        let mut previous: Option<f64> = None;
        for target in [2.0, 4.0, 6.0, 8.0, 10.0] {
            if let Some(mean) = mean_first_arrival(&pos, target).unwrap() {
                if let Some(prev) = previous {
                    assert!(prev <= mean, "mean for {} ({}) below previous ({})", target, mean, prev);
                }
                previous = Some(mean);
            }
        }
        assert!(previous.is_some());
    }

    #[test]
    fn test_first_arrival_not_before_target_distance() {
        // A lattice walk needs at least ceil(d) steps to get distance d away
        let mut source = UniformStepDistribution::with_seed(8);
        let pos = simulate_with(&mut source, 50, 200, 2).unwrap();

        for time in first_arrivals(&pos, 6.0).unwrap().into_iter().flatten() {
            assert!(time >= 6);
        }
    }
}
