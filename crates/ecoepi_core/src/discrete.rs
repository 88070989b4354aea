//! Discrete-time eco-epidemiological map (Hu, Teng, Jia et al., Adv. Differ.
//! Equ. 2014:265):
//!
//! ```text
//! S(t+1) = S(t) * exp(r*(1 - (S + I)/K) - beta*I)
//! I(t+1) = I(t) * exp(beta*S - c - b*Y/(m*Y + I))
//! Y(t+1) = Y(t) * exp(k*b*I/(m*Y + I) - d)
//! ```
//!
//! Every component is multiplied by an exponential, so a strictly positive
//! state with a finite functional response maps to a strictly positive state.

use crate::error::Result;
use crate::parameters::ModelParameters;
use crate::simulation::{Trajectory, TrajectorySimulator};
use crate::state::State;
use crate::sweep::{SteadyStateSweeper, SweepRequest, SweepResult};
use crate::traits::{DynamicsKernel, SystemKind};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscreteDynamics {
    params: ModelParameters,
}

impl DiscreteDynamics {
    pub fn new(params: ModelParameters) -> Self {
        Self { params }
    }

    /// Applies the map once.
    pub fn next_step(&self, s: f64, i: f64, y: f64) -> State {
        State::new(self.s_next(s, i), self.i_next(s, i, y), self.y_next(i, y))
    }

    /// Iterates the map from `initial` and returns all `max_iter` states,
    /// the initial one included.
    pub fn run(&self, initial: State, max_iter: usize) -> Result<Trajectory> {
        TrajectorySimulator::new(self).run(initial, max_iter)
    }

    /// Steady-state estimates over an evenly spaced range of one parameter.
    /// The parameters held by `self` are never modified.
    pub fn sweep(&self, request: &SweepRequest) -> Result<SweepResult> {
        SteadyStateSweeper::new(self.params).sweep(request)
    }

    /// Same as [`DiscreteDynamics::sweep`] with samples spread over the rayon
    /// thread pool.
    pub fn sweep_parallel(&self, request: &SweepRequest) -> Result<SweepResult> {
        SteadyStateSweeper::new(self.params).sweep_parallel(request)
    }

    fn s_next(&self, s: f64, i: f64) -> f64 {
        let p = &self.params;
        s * (p.r * (1.0 - (s + i) / p.carrying_capacity) - p.beta * i).exp()
    }

    fn i_next(&self, s: f64, i: f64, y: f64) -> f64 {
        let p = &self.params;
        i * (p.beta * s - p.c - (p.b * y) / (p.m * y + i)).exp()
    }

    fn y_next(&self, i: f64, y: f64) -> f64 {
        let p = &self.params;
        y * ((p.k * p.b * i) / (p.m * y + i) - p.d).exp()
    }
}

impl DynamicsKernel for DiscreteDynamics {
    fn kind(&self) -> SystemKind {
        SystemKind::Map
    }

    fn parameters(&self) -> &ModelParameters {
        &self.params
    }

    fn from_parameters(params: ModelParameters) -> Self {
        Self::new(params)
    }

    fn transition(&self, state: State) -> State {
        self.next_step(state.s, state.i, state.y)
    }
}
