//! Continuous-time ratio-dependent predator-prey model with disease in the
//! prey (Xiao & Chen, Appl. Math. Comput. 131, 2002):
//!
//! ```text
//! dS/dt = r*S*(1 - (S + I)/K) - beta*S*I
//! dI/dt = beta*S*I - c*I - b*I*Y/(m*Y + I)
//! dY/dt = -d*Y + k*b*I*Y/(m*Y + I)
//! ```
//!
//! Only the right-hand side lives here. Time stepping and error control
//! belong to whatever integrator consumes [`ContinuousDynamics`] through
//! [`DynamicalSystem`](crate::traits::DynamicalSystem).

use crate::parameters::ModelParameters;
use crate::state::State;
use crate::traits::{DynamicsKernel, SystemKind};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContinuousDynamics {
    params: ModelParameters,
}

impl ContinuousDynamics {
    pub fn new(params: ModelParameters) -> Self {
        Self { params }
    }

    /// Returns `(dS/dt, dI/dt, dY/dt)` packed as a [`State`].
    ///
    /// With `I = Y = 0` the functional response is `0/0` and the NaN is
    /// returned as is.
    pub fn derivatives(&self, s: f64, i: f64, y: f64) -> State {
        State::new(self.ds_dt(s, i), self.di_dt(s, i, y), self.dy_dt(i, y))
    }

    fn ds_dt(&self, s: f64, i: f64) -> f64 {
        let p = &self.params;
        p.r * s * (1.0 - (s + i) / p.carrying_capacity) - p.beta * s * i
    }

    fn di_dt(&self, s: f64, i: f64, y: f64) -> f64 {
        let p = &self.params;
        p.beta * s * i - p.c * i - (p.b * i * y) / (p.m * y + i)
    }

    fn dy_dt(&self, i: f64, y: f64) -> f64 {
        let p = &self.params;
        -p.d * y + (p.k * p.b * i * y) / (p.m * y + i)
    }
}

impl DynamicsKernel for ContinuousDynamics {
    fn kind(&self) -> SystemKind {
        SystemKind::Flow
    }

    fn parameters(&self) -> &ModelParameters {
        &self.params
    }

    fn from_parameters(params: ModelParameters) -> Self {
        Self::new(params)
    }

    fn transition(&self, state: State) -> State {
        self.derivatives(state.s, state.i, state.y)
    }
}
