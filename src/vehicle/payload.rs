use serde::Deserialize;

use crate::constants::{PAF_MASS_MISSION_ONE, PAF_MASS_MISSION_TWO};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum MissionProfile {
    One,
    Two,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PafPlacement {
    BaseOfFairing,
    MidFairing,
}

impl MissionProfile {
    pub fn paf_mass(&self) -> f64 {
        match self {
            MissionProfile::One => PAF_MASS_MISSION_ONE,
            MissionProfile::Two => PAF_MASS_MISSION_TWO,
        }
    }

    pub fn paf_placement(&self) -> PafPlacement {
        match self {
            MissionProfile::One => PafPlacement::BaseOfFairing,
            MissionProfile::Two => PafPlacement::MidFairing,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Payload {
    pub mass: f64, // kg
    pub mission: MissionProfile,
}

impl Payload {
    pub fn new(mass: f64, mission: MissionProfile) -> Self {
        Payload { mass, mission }
    }

    pub fn get_mass(&self) -> f64 {
        self.mass
    }

    pub fn paf_mass(&self) -> f64 {
        self.mission.paf_mass()
    }
}
