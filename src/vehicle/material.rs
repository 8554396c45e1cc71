use serde::Deserialize;

use crate::constants::{DENSITY_AL_2219_T87, DENSITY_AL_6061_T6, DENSITY_AL_7075_T6};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum BodyMaterial {
    #[serde(rename = "Aluminum 6061-T6")]
    Aluminum6061T6,
    #[serde(rename = "Aluminum 7075-T6")]
    Aluminum7075T6,
    #[serde(rename = "Aluminum 2219-T87")]
    Aluminum2219T87,
}

impl BodyMaterial {
    pub fn density(&self) -> f64 {
        match self {
            BodyMaterial::Aluminum6061T6 => DENSITY_AL_6061_T6,
            BodyMaterial::Aluminum7075T6 => DENSITY_AL_7075_T6,
            BodyMaterial::Aluminum2219T87 => DENSITY_AL_2219_T87,
        }
    }
}
