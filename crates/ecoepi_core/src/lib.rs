//! The `ecoepi_core` crate is the population-dynamics engine for a
//! three-species eco-epidemiological community: susceptible prey `S`,
//! infected prey `I` and a predator `Y` with a ratio-dependent functional
//! response on the infected prey.
//!
//! Key components:
//! - **Parameters**: `ModelParameters`, the eight rate constants shared by both formulations.
//! - **Kernels**: `ContinuousDynamics` (ODE right-hand side) and `DiscreteDynamics` (exponential map),
//!   both implementing `DynamicsKernel` and therefore `DynamicalSystem`.
//! - **Solvers**: `DiscreteMap` (map iteration) and a fixed-step `RK4` for flows.
//! - **Simulation**: `TrajectorySimulator` iterates the discrete map into a `Trajectory`.
//! - **Sweep**: `SteadyStateSweeper` records terminal states while one parameter varies.

pub mod continuous;
pub mod discrete;
pub mod error;
pub mod parameters;
pub mod simulation;
pub mod solvers;
pub mod state;
pub mod sweep;
pub mod traits;

pub use continuous::ContinuousDynamics;
pub use discrete::DiscreteDynamics;
pub use error::{ModelError, Result};
pub use parameters::{ModelParameters, ParameterName};
pub use simulation::{SimulationSettings, Trajectory, TrajectorySimulator};
pub use state::State;
pub use sweep::{sample_values, SteadyStateSweeper, SweepRequest, SweepResult};
pub use traits::{DynamicalSystem, DynamicsKernel, Steppable, SystemKind};
