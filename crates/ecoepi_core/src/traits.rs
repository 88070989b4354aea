use crate::parameters::ModelParameters;
use crate::state::State;
use serde::{Deserialize, Serialize};

/// Whether a system's evaluation is a vector field or a map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SystemKind {
    Flow,
    Map,
}

/// Represents a dynamical system (Flow or Map) over a flat state slice.
pub trait DynamicalSystem {
    /// Returns the dimension of the state space.
    fn dimension(&self) -> usize;

    /// Evaluates the vector field (flow) or map function.
    /// x: current state
    /// t: current time
    /// out: buffer to write the result (dx/dt or x_{n+1})
    fn apply(&self, t: f64, x: &[f64], out: &mut [f64]);
}

/// A trait for solvers that can step a system forward.
pub trait Steppable {
    /// Performs one step of size dt, advancing both `t` and `state` in place.
    fn step(&mut self, system: &impl DynamicalSystem, t: &mut f64, state: &mut [f64], dt: f64);
}

/// One state transition of the eco-epidemiological model under a fixed
/// parameter set.
///
/// For a [`SystemKind::Flow`] kernel the transition is the instantaneous rate
/// of change; for a [`SystemKind::Map`] kernel it is the next state.
pub trait DynamicsKernel {
    /// Flow (rate of change) or map (next state).
    fn kind(&self) -> SystemKind;

    /// Rate constants the kernel evaluates with.
    fn parameters(&self) -> &ModelParameters;

    /// Builds a kernel over its own copy of `params`.
    fn from_parameters(params: ModelParameters) -> Self
    where
        Self: Sized;

    /// Evaluates one transition from `state`.
    fn transition(&self, state: State) -> State;
}

impl<K: DynamicsKernel> DynamicalSystem for K {
    fn dimension(&self) -> usize {
        State::DIMENSION
    }

    fn apply(&self, _t: f64, x: &[f64], out: &mut [f64]) {
        let next = self.transition(State::from_slice(x));
        out[..State::DIMENSION].copy_from_slice(&next.to_array());
    }
}
