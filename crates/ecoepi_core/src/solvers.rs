use crate::traits::{DynamicalSystem, Steppable};

/// Classic fixed-step Runge-Kutta 4th order integrator.
///
/// Serves as the reference consumer of a flow's right-hand side. There is no
/// error estimate and no step-size control.
pub struct RK4 {
    k: [Vec<f64>; 4],
    tmp: Vec<f64>,
}

impl RK4 {
    pub fn new(dim: usize) -> Self {
        Self {
            k: std::array::from_fn(|_| vec![0.0; dim]),
            tmp: vec![0.0; dim],
        }
    }
}

impl Steppable for RK4 {
    fn step(&mut self, system: &impl DynamicalSystem, t: &mut f64, state: &mut [f64], dt: f64) {
        let t0 = *t;
        let [k1, k2, k3, k4] = &mut self.k;

        system.apply(t0, state, k1);

        for (tmp, (x, k)) in self.tmp.iter_mut().zip(state.iter().zip(k1.iter())) {
            *tmp = x + 0.5 * dt * k;
        }
        system.apply(t0 + 0.5 * dt, &self.tmp, k2);

        for (tmp, (x, k)) in self.tmp.iter_mut().zip(state.iter().zip(k2.iter())) {
            *tmp = x + 0.5 * dt * k;
        }
        system.apply(t0 + 0.5 * dt, &self.tmp, k3);

        for (tmp, (x, k)) in self.tmp.iter_mut().zip(state.iter().zip(k3.iter())) {
            *tmp = x + dt * k;
        }
        system.apply(t0 + dt, &self.tmp, k4);

        for (idx, x) in state.iter_mut().enumerate() {
            *x += dt / 6.0 * (k1[idx] + 2.0 * k2[idx] + 2.0 * k3[idx] + k4[idx]);
        }

        *t = t0 + dt;
    }
}

/// Discrete map stepper: `x_{n+1} = f(x_n)`.
///
/// `dt` only advances the iteration clock; the map itself ignores it.
pub struct DiscreteMap {
    tmp: Vec<f64>,
}

impl DiscreteMap {
    pub fn new(dim: usize) -> Self {
        Self {
            tmp: vec![0.0; dim],
        }
    }
}

impl Steppable for DiscreteMap {
    fn step(&mut self, system: &impl DynamicalSystem, t: &mut f64, state: &mut [f64], dt: f64) {
        system.apply(*t, state, &mut self.tmp);
        state.copy_from_slice(&self.tmp);
        *t += dt;
    }
}
