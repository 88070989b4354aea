//! One-parameter steady-state sweeps.
//!
//! For each sampled parameter value the map is iterated from the same initial
//! state and the terminal state is kept as the equilibrium estimate. Nothing
//! checks for convergence: on a cycle or a chaotic attractor the recorded
//! point is just the state reached after `max_iter - 1` steps.
//!
//! Each sample runs on its own copy of the parameters, so the caller's set is
//! never modified and samples can be evaluated on independent threads.

use crate::discrete::DiscreteDynamics;
use crate::error::{ModelError, Result};
use crate::parameters::{ModelParameters, ParameterName};
use crate::simulation::Trajectory;
use crate::state::State;
use log::{debug, trace, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepRequest {
    /// Key of the swept constant (`r`, `K`, `beta`, `c`, `m`, `b`, `k` or `d`).
    pub parameter: String,
    pub lower_bound: f64,
    pub upper_bound: f64,
    pub initial_state: State,
    pub num_points: usize,
    #[serde(default = "default_max_iter")]
    pub max_iter: usize,
}

fn default_max_iter() -> usize {
    10_000
}

/// Terminal states aligned with the sampled parameter values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepResult {
    pub parameter: ParameterName,
    pub values: Vec<f64>,
    #[serde(rename = "S")]
    pub s: Vec<f64>,
    #[serde(rename = "I")]
    pub i: Vec<f64>,
    #[serde(rename = "Y")]
    pub y: Vec<f64>,
}

impl SweepResult {
    fn from_terminals(parameter: ParameterName, values: Vec<f64>, terminals: &[State]) -> Self {
        Self {
            parameter,
            values,
            s: terminals.iter().map(|state| state.s).collect(),
            i: terminals.iter().map(|state| state.i).collect(),
            y: terminals.iter().map(|state| state.y).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn state(&self, index: usize) -> Option<State> {
        (index < self.len()).then(|| State::new(self.s[index], self.i[index], self.y[index]))
    }
}

/// `n` evenly spaced values over `[lower, upper]`. The first value is exactly
/// `lower` and, for `n >= 2`, the last is exactly `upper`.
pub fn sample_values(lower: f64, upper: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![lower],
        _ => {
            let last = (n - 1) as f64;
            let step = (upper - lower) / last;
            (0..n)
                .map(|idx| {
                    if idx == 0 {
                        lower
                    } else if idx == n - 1 {
                        upper
                    } else if step.is_finite() {
                        lower + idx as f64 * step
                    } else {
                        // The span overflows f64; interpolate without forming it.
                        let t = idx as f64 / last;
                        lower * (1.0 - t) + upper * t
                    }
                })
                .collect()
        }
    }
}

pub struct SteadyStateSweeper {
    base: ModelParameters,
}

impl SteadyStateSweeper {
    pub fn new(base: ModelParameters) -> Self {
        Self { base }
    }

    pub fn parameters(&self) -> &ModelParameters {
        &self.base
    }

    /// Sequential sweep over the discrete map.
    pub fn sweep(&self, request: &SweepRequest) -> Result<SweepResult> {
        self.sweep_with(request, |params, initial, max_iter| {
            DiscreteDynamics::new(*params).run(initial, max_iter)
        })
    }

    /// Sequential sweep where each sample's trajectory comes from `simulate`.
    ///
    /// `simulate` is not called at all when the request is rejected.
    pub fn sweep_with<F>(&self, request: &SweepRequest, mut simulate: F) -> Result<SweepResult>
    where
        F: FnMut(&ModelParameters, State, usize) -> Result<Trajectory>,
    {
        let (parameter, values) = self.plan(request)?;

        let mut terminals = Vec::with_capacity(values.len());
        for &value in &values {
            let snapshot = self.base.with(parameter, value);
            let trajectory = simulate(&snapshot, request.initial_state, request.max_iter)?;
            terminals.push(record_terminal(parameter, value, &trajectory));
        }

        Ok(SweepResult::from_terminals(parameter, values, &terminals))
    }

    /// Evaluates the samples on the rayon thread pool. Output order and
    /// values match [`SteadyStateSweeper::sweep`].
    pub fn sweep_parallel(&self, request: &SweepRequest) -> Result<SweepResult> {
        let (parameter, values) = self.plan(request)?;

        let terminals = values
            .par_iter()
            .map(|&value| -> Result<State> {
                let dynamics = DiscreteDynamics::new(self.base.with(parameter, value));
                let trajectory = dynamics.run(request.initial_state, request.max_iter)?;
                Ok(record_terminal(parameter, value, &trajectory))
            })
            .collect::<Result<Vec<State>>>()?;

        Ok(SweepResult::from_terminals(parameter, values, &terminals))
    }

    fn plan(&self, request: &SweepRequest) -> Result<(ParameterName, Vec<f64>)> {
        let parameter = request
            .parameter
            .parse::<ParameterName>()
            .inspect_err(|err| warn!("Sweep rejected: {err}"))?;

        let (lower, upper) = (request.lower_bound, request.upper_bound);
        if !lower.is_finite() || !upper.is_finite() || lower > upper {
            return Err(ModelError::InvalidSweepBounds { lower, upper });
        }
        if request.num_points == 0 {
            return Err(ModelError::InvalidSampleCount {
                num_points: request.num_points,
            });
        }
        if request.max_iter == 0 {
            return Err(ModelError::InvalidIterationCount {
                max_iter: request.max_iter,
            });
        }

        debug!(
            "Sweeping {parameter} over [{lower}, {upper}] with {} samples of {} iterations",
            request.num_points, request.max_iter
        );
        Ok((parameter, sample_values(lower, upper, request.num_points)))
    }
}

fn record_terminal(parameter: ParameterName, value: f64, trajectory: &Trajectory) -> State {
    let terminal = trajectory.terminal();
    trace!("{parameter} = {value}: terminal state {terminal:?}");
    if let Some(step) = trajectory.first_non_finite() {
        debug!("{parameter} = {value}: trajectory diverged at step {step}");
    }
    terminal
}
