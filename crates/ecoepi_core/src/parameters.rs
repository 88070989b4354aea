use crate::error::{ModelError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Names of the eight rate constants, keyed the way they appear in the model
/// equations. `K` (carrying capacity) and `k` (conversion efficiency) are
/// distinct keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParameterName {
    #[serde(rename = "r")]
    R,
    #[serde(rename = "K")]
    CarryingCapacity,
    #[serde(rename = "beta")]
    Beta,
    #[serde(rename = "c")]
    C,
    #[serde(rename = "m")]
    M,
    #[serde(rename = "b")]
    B,
    #[serde(rename = "k")]
    Conversion,
    #[serde(rename = "d")]
    D,
}

impl ParameterName {
    pub const ALL: [ParameterName; 8] = [
        ParameterName::R,
        ParameterName::CarryingCapacity,
        ParameterName::Beta,
        ParameterName::C,
        ParameterName::M,
        ParameterName::B,
        ParameterName::Conversion,
        ParameterName::D,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ParameterName::R => "r",
            ParameterName::CarryingCapacity => "K",
            ParameterName::Beta => "beta",
            ParameterName::C => "c",
            ParameterName::M => "m",
            ParameterName::B => "b",
            ParameterName::Conversion => "k",
            ParameterName::D => "d",
        }
    }
}

impl FromStr for ParameterName {
    type Err = ModelError;

    fn from_str(name: &str) -> Result<Self> {
        ParameterName::ALL
            .into_iter()
            .find(|candidate| candidate.as_str() == name)
            .ok_or_else(|| ModelError::UnknownParameter {
                name: name.to_string(),
            })
    }
}

impl fmt::Display for ParameterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rate constants shared by the continuous and discrete formulations.
///
/// Construction only checks that all eight keys are present. Values are not
/// range-checked: a zero `m`, a negative rate and so on surface later as
/// non-finite simulation output. `m` appears only in the denominator
/// `m*Y + I` of the ratio-dependent functional response.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "HashMap<String, f64>")]
pub struct ModelParameters {
    /// Prey intrinsic growth rate.
    pub r: f64,
    /// Prey carrying capacity.
    #[serde(rename = "K")]
    pub carrying_capacity: f64,
    /// Disease transmission rate.
    pub beta: f64,
    /// Disease-induced death rate of infected prey.
    pub c: f64,
    /// Ratio-dependence constant.
    pub m: f64,
    /// Predation coefficient.
    pub b: f64,
    /// Conversion efficiency of prey into predator offspring.
    pub k: f64,
    /// Predator natural death rate.
    pub d: f64,
}

impl ModelParameters {
    /// Builds a parameter set from any `(key, value)` mapping. Unrelated keys
    /// are ignored; the first absent key of `r, K, beta, c, m, b, k, d` is
    /// reported.
    pub fn from_mapping<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let mut found: [Option<f64>; 8] = [None; 8];
        for (key, value) in entries {
            if let Ok(name) = key.as_ref().parse::<ParameterName>() {
                found[name as usize] = Some(value);
            }
        }

        let mut values = [0.0; 8];
        for name in ParameterName::ALL {
            values[name as usize] = found[name as usize].ok_or_else(|| {
                ModelError::MissingParameter {
                    name: name.as_str().to_string(),
                }
            })?;
        }

        let [r, carrying_capacity, beta, c, m, b, k, d] = values;
        Ok(Self {
            r,
            carrying_capacity,
            beta,
            c,
            m,
            b,
            k,
            d,
        })
    }

    pub fn get(&self, name: ParameterName) -> f64 {
        match name {
            ParameterName::R => self.r,
            ParameterName::CarryingCapacity => self.carrying_capacity,
            ParameterName::Beta => self.beta,
            ParameterName::C => self.c,
            ParameterName::M => self.m,
            ParameterName::B => self.b,
            ParameterName::Conversion => self.k,
            ParameterName::D => self.d,
        }
    }

    pub fn set(&mut self, name: ParameterName, value: f64) {
        let slot = match name {
            ParameterName::R => &mut self.r,
            ParameterName::CarryingCapacity => &mut self.carrying_capacity,
            ParameterName::Beta => &mut self.beta,
            ParameterName::C => &mut self.c,
            ParameterName::M => &mut self.m,
            ParameterName::B => &mut self.b,
            ParameterName::Conversion => &mut self.k,
            ParameterName::D => &mut self.d,
        };
        *slot = value;
    }

    /// Returns a copy with one constant replaced, leaving `self` untouched.
    pub fn with(&self, name: ParameterName, value: f64) -> Self {
        let mut snapshot = *self;
        snapshot.set(name, value);
        snapshot
    }

    /// Disease threshold `beta*K/c`.
    pub fn basic_reproduction_number(&self) -> f64 {
        self.beta * self.carrying_capacity / self.c
    }
}

impl TryFrom<HashMap<String, f64>> for ModelParameters {
    type Error = ModelError;

    fn try_from(map: HashMap<String, f64>) -> Result<Self> {
        Self::from_mapping(map)
    }
}

#[cfg(test)]
mod tests {
    use super::{ModelParameters, ParameterName};
    use crate::error::ModelError;

    fn reference_entries() -> Vec<(&'static str, f64)> {
        vec![
            ("r", 1.0),
            ("K", 10.0),
            ("beta", 0.01),
            ("c", 0.1),
            ("m", 0.5),
            ("b", 0.2),
            ("k", 0.5),
            ("d", 0.1),
        ]
    }

    #[test]
    fn from_mapping_reads_all_eight_constants() {
        let params = ModelParameters::from_mapping(reference_entries()).expect("valid mapping");
        assert_eq!(params.r, 1.0);
        assert_eq!(params.carrying_capacity, 10.0);
        assert_eq!(params.beta, 0.01);
        assert_eq!(params.c, 0.1);
        assert_eq!(params.m, 0.5);
        assert_eq!(params.b, 0.2);
        assert_eq!(params.k, 0.5);
        assert_eq!(params.d, 0.1);
    }

    #[test]
    fn from_mapping_reports_missing_key() {
        let entries: Vec<_> = reference_entries()
            .into_iter()
            .filter(|(key, _)| *key != "beta")
            .collect();
        let err = ModelParameters::from_mapping(entries).expect_err("beta is absent");
        assert_eq!(
            err,
            ModelError::MissingParameter {
                name: "beta".to_string()
            }
        );
    }

    #[test]
    fn from_mapping_does_not_confuse_carrying_capacity_with_conversion() {
        let entries: Vec<_> = reference_entries()
            .into_iter()
            .filter(|(key, _)| *key != "K")
            .collect();
        let err = ModelParameters::from_mapping(entries).expect_err("K is absent");
        assert!(format!("{err}").contains("\"K\""));
    }

    #[test]
    fn from_mapping_accepts_unvalidated_values_and_extra_keys() {
        let mut entries = reference_entries();
        entries.push(("unused", 42.0));
        entries.retain(|(key, _)| *key != "m");
        entries.push(("m", 0.0));
        let params = ModelParameters::from_mapping(entries).expect("no range validation");
        assert_eq!(params.m, 0.0);
    }

    #[test]
    fn deserialize_goes_through_mapping_validation() {
        let params: ModelParameters = serde_json::from_str(
            r#"{"r": 1.0, "K": 10.0, "beta": 0.01, "c": 0.1, "m": 0.5, "b": 0.2, "k": 0.5, "d": 0.1}"#,
        )
        .expect("complete mapping deserializes");
        assert_eq!(params.carrying_capacity, 10.0);
        assert_eq!(params.k, 0.5);

        let err = serde_json::from_str::<ModelParameters>(r#"{"r": 1.0, "K": 10.0}"#)
            .expect_err("incomplete mapping");
        assert!(err.to_string().contains("Missing model parameter"));
    }

    #[test]
    fn serialize_uses_equation_keys() {
        let params = ModelParameters::from_mapping(reference_entries()).expect("valid mapping");
        let value = serde_json::to_value(params).expect("serializes");
        assert_eq!(value["K"], 10.0);
        assert_eq!(value["k"], 0.5);
        let back: ModelParameters = serde_json::from_value(value).expect("round trip");
        assert_eq!(back, params);
    }

    #[test]
    fn parameter_names_parse_case_sensitively() {
        for name in ParameterName::ALL {
            assert_eq!(name.as_str().parse::<ParameterName>(), Ok(name));
        }
        assert_eq!("K".parse::<ParameterName>(), Ok(ParameterName::CarryingCapacity));
        assert_eq!("k".parse::<ParameterName>(), Ok(ParameterName::Conversion));
        assert!(matches!(
            "Beta".parse::<ParameterName>(),
            Err(ModelError::UnknownParameter { .. })
        ));
    }

    #[test]
    fn with_returns_modified_copy() {
        let params = ModelParameters::from_mapping(reference_entries()).expect("valid mapping");
        let snapshot = params.with(ParameterName::D, 0.3);
        assert_eq!(snapshot.get(ParameterName::D), 0.3);
        assert_eq!(params.get(ParameterName::D), 0.1);

        let mut owned = params;
        owned.set(ParameterName::Beta, 0.02);
        assert_eq!(owned.beta, 0.02);
    }

    #[test]
    fn basic_reproduction_number_is_beta_k_over_c() {
        let params = ModelParameters::from_mapping(reference_entries()).expect("valid mapping");
        assert!((params.basic_reproduction_number() - 1.0).abs() < 1e-12);
    }
}
