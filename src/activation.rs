use std::{fmt, str::FromStr};

use serde::{Serialize, Deserialize};

use crate::error::Error;


pub fn relu(x: f64) -> f64 { x.max(0.) }

/// Exponential linear unit. `alpha` outside `[0, 1]` falls back to `1.0`.
pub fn elu(x: f64, alpha: f64) -> f64 {
    let alpha = if (0.0..=1.0).contains(&alpha) { alpha } else { 1. };
    if x > 0. {
        x
    } else {
        alpha * (x.exp() - 1.)
    }
}

pub fn sigmoid(x: f64) -> f64 {
    use std::f64::consts::E;
    1. / (1. + E.powf(-x))
}


/// Elementwise nonlinearity applied to the raw features before weighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ActivationKind {
    Relu,
    Sigmoid,
    Elu,
}

impl ActivationKind {
    pub const ELU_ALPHA: f64 = 1.;

    #[inline(always)]
    pub fn apply(self, x: f64) -> f64 {
        match self {
            ActivationKind::Relu => relu(x),
            ActivationKind::Sigmoid => sigmoid(x),
            ActivationKind::Elu => elu(x, Self::ELU_ALPHA),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ActivationKind::Relu => "relu",
            ActivationKind::Sigmoid => "sigmoid",
            ActivationKind::Elu => "elu",
        }
    }
}

impl fmt::Display for ActivationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ActivationKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "relu" => Ok(ActivationKind::Relu),
            "sigmoid" => Ok(ActivationKind::Sigmoid),
            "elu" => Ok(ActivationKind::Elu),
            _ => Err(Error::InvalidArgument(format!("unknown activation kind '{}'", s))),
        }
    }
}

impl TryFrom<String> for ActivationKind {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
