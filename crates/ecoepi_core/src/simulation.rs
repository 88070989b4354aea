//! Trajectory generation for the discrete map.

use crate::discrete::DiscreteDynamics;
use crate::error::{ModelError, Result};
use crate::solvers::DiscreteMap;
use crate::state::State;
use crate::traits::Steppable;
use serde::{Deserialize, Serialize};

/// Defaults for a single simulation run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SimulationSettings {
    pub max_iter: usize,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self { max_iter: 10_000 }
    }
}

/// Time series of the three populations, aligned by step index.
///
/// Fully populated on construction and read-only afterwards. A trajectory
/// always holds at least the initial state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trajectory {
    #[serde(rename = "S")]
    s: Vec<f64>,
    #[serde(rename = "I")]
    i: Vec<f64>,
    #[serde(rename = "Y")]
    y: Vec<f64>,
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.s.len()
    }

    pub fn is_empty(&self) -> bool {
        self.s.is_empty()
    }

    pub fn s(&self) -> &[f64] {
        &self.s
    }

    pub fn i(&self) -> &[f64] {
        &self.i
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn state(&self, index: usize) -> Option<State> {
        (index < self.len()).then(|| State::new(self.s[index], self.i[index], self.y[index]))
    }

    pub fn initial(&self) -> Option<State> {
        self.state(0)
    }

    /// The terminal state, used as the steady-state estimate by sweeps.
    pub fn terminal(&self) -> State {
        let idx = self.len() - 1;
        State::new(self.s[idx], self.i[idx], self.y[idx])
    }

    pub fn iter(&self) -> impl Iterator<Item = State> + '_ {
        self.s
            .iter()
            .zip(&self.i)
            .zip(&self.y)
            .map(|((&s, &i), &y)| State::new(s, i, y))
    }

    /// Index of the first state with a NaN or infinite component, if any.
    pub fn first_non_finite(&self) -> Option<usize> {
        self.iter().position(|state| !state.is_finite())
    }
}

/// Iterates a [`DiscreteDynamics`] map step by step.
///
/// Each step depends on the previous one. Overflow and NaN are stored as
/// produced and keep propagating; the run never stops early.
pub struct TrajectorySimulator<'a> {
    dynamics: &'a DiscreteDynamics,
    stepper: DiscreteMap,
}

impl<'a> TrajectorySimulator<'a> {
    pub fn new(dynamics: &'a DiscreteDynamics) -> Self {
        Self {
            dynamics,
            stepper: DiscreteMap::new(State::DIMENSION),
        }
    }

    pub fn run(&mut self, initial: State, max_iter: usize) -> Result<Trajectory> {
        if max_iter == 0 {
            return Err(ModelError::InvalidIterationCount { max_iter });
        }

        let mut s = vec![0.0; max_iter];
        let mut i = vec![0.0; max_iter];
        let mut y = vec![0.0; max_iter];
        s[0] = initial.s;
        i[0] = initial.i;
        y[0] = initial.y;

        let mut current = initial.to_array();
        let mut t = 0.0;
        for step in 1..max_iter {
            self.stepper.step(self.dynamics, &mut t, &mut current, 1.0);
            s[step] = current[0];
            i[step] = current[1];
            y[step] = current[2];
        }

        Ok(Trajectory { s, i, y })
    }

    /// Runs with the iteration count taken from `settings`.
    pub fn run_with_settings(
        &mut self,
        initial: State,
        settings: &SimulationSettings,
    ) -> Result<Trajectory> {
        self.run(initial, settings.max_iter)
    }
}
