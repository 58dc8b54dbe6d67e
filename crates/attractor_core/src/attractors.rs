//! The supported strange attractors.
//!
//! The set is closed: each variant carries its own constant parameters and the
//! right-hand side is dispatched by `match`, so every field inlines into the
//! integrator loop.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TubeError;
use crate::traits::{State, VectorField};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attractor {
    Aizawa,
    ChenLee,
    Lorenz,
    Rucklidge,
}

// Aizawa
const AIZAWA_A: f64 = 0.95;
const AIZAWA_B: f64 = 0.7;
const AIZAWA_C: f64 = 0.6;
const AIZAWA_D: f64 = 3.5;
const AIZAWA_E: f64 = 0.25;
const AIZAWA_F: f64 = 0.1;

// Chen-Lee
const CHEN_LEE_A: f64 = 5.0;
const CHEN_LEE_B: f64 = -10.0;
const CHEN_LEE_C: f64 = -0.38;

// Lorenz
const LORENZ_SIGMA: f64 = 10.0;
const LORENZ_RHO: f64 = 28.0;
const LORENZ_BETA: f64 = 8.0 / 3.0;

// Rucklidge
const RUCKLIDGE_KAPPA: f64 = 2.0;
const RUCKLIDGE_ALPHA: f64 = 6.7;

impl Attractor {
    pub const ALL: [Attractor; 4] = [
        Attractor::Aizawa,
        Attractor::ChenLee,
        Attractor::Lorenz,
        Attractor::Rucklidge,
    ];

    /// Human-readable name, suitable for a selection list.
    pub fn name(self) -> &'static str {
        match self {
            Attractor::Aizawa => "Aizawa",
            Attractor::ChenLee => "Chen Lee",
            Attractor::Lorenz => "Lorenz",
            Attractor::Rucklidge => "Rucklidge",
        }
    }

    /// Stable machine identifier, matching the serde representation.
    pub fn id(self) -> &'static str {
        match self {
            Attractor::Aizawa => "aizawa",
            Attractor::ChenLee => "chen_lee",
            Attractor::Lorenz => "lorenz",
            Attractor::Rucklidge => "rucklidge",
        }
    }
}

impl VectorField for Attractor {
    #[inline]
    fn derivative(&self, p: &State) -> State {
        let (x, y, z) = (p.x, p.y, p.z);
        match self {
            Attractor::Aizawa => State::new(
                (z - AIZAWA_B) * x - AIZAWA_D * y,
                AIZAWA_D * x + (z - AIZAWA_B) * y,
                AIZAWA_C + AIZAWA_A * z - (z * z * z / 3.0) - (x * x + y * y) * (1.0 + AIZAWA_E * z)
                    + AIZAWA_F * z * x * x * x,
            ),
            Attractor::ChenLee => State::new(
                CHEN_LEE_A * x - y * z,
                CHEN_LEE_B * y + x * z,
                CHEN_LEE_C * z + x * y,
            ),
            Attractor::Lorenz => State::new(
                LORENZ_SIGMA * (y - x),
                x * (LORENZ_RHO - z) - y,
                x * y - LORENZ_BETA * z,
            ),
            Attractor::Rucklidge => State::new(
                -RUCKLIDGE_KAPPA * x + RUCKLIDGE_ALPHA * y - y * z,
                x,
                -z + y * y,
            ),
        }
    }

    fn time_divisor(&self) -> f64 {
        match self {
            Attractor::Lorenz => 5.0,
            Attractor::ChenLee => 10.0,
            Attractor::Aizawa | Attractor::Rucklidge => 1.0,
        }
    }
}

impl fmt::Display for Attractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Attractor {
    type Err = TubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "aizawa" => Ok(Attractor::Aizawa),
            "chenlee" => Ok(Attractor::ChenLee),
            "lorenz" | "lorentz" => Ok(Attractor::Lorenz),
            "rucklidge" => Ok(Attractor::Rucklidge),
            _ => Err(TubeError::UnknownAttractor(s.to_string())),
        }
    }
}
