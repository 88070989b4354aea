use crate::error::{ModelError, Result};
use serde::{Deserialize, Serialize};

/// Population densities: susceptible prey `S`, infected prey `I` and
/// predator `Y`.
///
/// Values are never clamped. A negative or non-finite component means the
/// trajectory that produced it has diverged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct State {
    #[serde(rename = "S")]
    pub s: f64,
    #[serde(rename = "I")]
    pub i: f64,
    #[serde(rename = "Y")]
    pub y: f64,
}

impl State {
    pub const DIMENSION: usize = 3;

    pub fn new(s: f64, i: f64, y: f64) -> Self {
        Self { s, i, y }
    }

    /// Reads an initial state from a mapping keyed `S0`, `I0`, `Y0`.
    pub fn from_initial_conditions<I, K>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        let mut s = None;
        let mut i = None;
        let mut y = None;
        for (key, value) in entries {
            match key.as_ref() {
                "S0" => s = Some(value),
                "I0" => i = Some(value),
                "Y0" => y = Some(value),
                _ => {}
            }
        }
        let missing = |name: &str| ModelError::MissingInitialCondition {
            name: name.to_string(),
        };
        Ok(Self {
            s: s.ok_or_else(|| missing("S0"))?,
            i: i.ok_or_else(|| missing("I0"))?,
            y: y.ok_or_else(|| missing("Y0"))?,
        })
    }

    pub fn from_slice(x: &[f64]) -> Self {
        Self::new(x[0], x[1], x[2])
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.s, self.i, self.y]
    }

    pub fn is_finite(&self) -> bool {
        self.s.is_finite() && self.i.is_finite() && self.y.is_finite()
    }

    pub fn is_strictly_positive(&self) -> bool {
        self.s > 0.0 && self.i > 0.0 && self.y > 0.0
    }
}

impl From<[f64; 3]> for State {
    fn from([s, i, y]: [f64; 3]) -> Self {
        Self { s, i, y }
    }
}

impl From<State> for [f64; 3] {
    fn from(state: State) -> Self {
        state.to_array()
    }
}
