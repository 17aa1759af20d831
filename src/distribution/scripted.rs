//! Scripted step source
//!
//! Replays a fixed list of (axis, sign) draws in order, wrapping back to the
//! start when the list is exhausted. Used to build walks whose positions are
//! known in advance.

use crate::distribution::StepDistribution;

/// Step source replaying a fixed draw sequence
///
/// Axis and sign lists advance independently, matching the independent
/// axis/sign draws of the uniform source.
#[derive(Debug, Clone)]
pub struct ScriptedStepDistribution {
    axes: Vec<usize>,
    signs: Vec<i8>,
    next_axis: usize,
    next_sign: usize,
}

impl ScriptedStepDistribution {
    /// Create a source from a list of (axis, sign) pairs
    ///
    /// Axes are reduced modulo the requested dimension when drawn. Signs
    /// other than -1 are treated as +1.
    ///
    /// # Panics
    ///
    /// Panics if `draws` is empty.
    pub fn new(draws: Vec<(usize, i8)>) -> Self {
        assert!(!draws.is_empty(), "Scripted source needs at least one draw");

        let (axes, signs): (Vec<usize>, Vec<i8>) = draws
            .into_iter()
            .map(|(axis, sign)| (axis, if sign == -1 { -1 } else { 1 }))
            .unzip();

        Self {
            axes,
            signs,
            next_axis: 0,
            next_sign: 0,
        }
    }
}

impl StepDistribution for ScriptedStepDistribution {
    fn next_axis(&mut self, dim: usize) -> usize {
        let axis = self.axes[self.next_axis];
        self.next_axis = (self.next_axis + 1) % self.axes.len();
        if dim == 0 {
            return 0;
        }
        axis % dim
    }

    fn next_sign(&mut self) -> i8 {
        let sign = self.signs[self.next_sign];
        self.next_sign = (self.next_sign + 1) % self.signs.len();
        sign
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_replay() {
        let mut dist = ScriptedStepDistribution::new(vec![(0, 1), (2, -1)]);

        assert_eq!(dist.next_axis(3), 0);
        assert_eq!(dist.next_axis(3), 2);
        assert_eq!(dist.next_sign(), 1);
        assert_eq!(dist.next_sign(), -1);
    }

    #[test]
    fn test_scripted_wraparound() {
        let mut dist = ScriptedStepDistribution::new(vec![(1, -1)]);

        for _ in 0..5 {
            assert_eq!(dist.next_axis(2), 1);
            assert_eq!(dist.next_sign(), -1);
        }
    }

    #[test]
    fn test_scripted_axis_reduced_modulo_dim() {
        let mut dist = ScriptedStepDistribution::new(vec![(5, 1)]);
        assert_eq!(dist.next_axis(3), 2);
    }

    #[test]
    #[should_panic(expected = "at least one draw")]
    fn test_scripted_empty() {
        let _ = ScriptedStepDistribution::new(vec![]);
    }
}
