use std::fs;
use std::path::Path;

use log::info;
use serde::Deserialize;

use crate::errors::{MassPropertiesError, MassResult};
use crate::mass_properties::load::BurnConditions;
use crate::mass_properties::thickness::{ThicknessOverride, ThicknessTable};
use crate::vehicle::launch_vehicle::LaunchVehicle;
use crate::vehicle::material::BodyMaterial;
use crate::vehicle::payload::Payload;
use crate::vehicle::stage::Stage;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VehicleConfig {
    pub name: String,
    pub body_material: BodyMaterial,
    pub payload: Payload,
    // Bottom stage first.
    pub stages: Vec<Stage>,
    #[serde(default)]
    pub thickness_overrides: Vec<ThicknessOverride>,
    #[serde(default)]
    pub max_q: Option<BurnConditions>,
}

impl VehicleConfig {
    pub fn from_json(json: &str) -> MassResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> MassResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        info!(
            "Loaded vehicle '{}' ({} stages) from {}",
            config.name,
            config.stages.len(),
            path.display()
        );
        Ok(config)
    }

    pub fn into_vehicle(self) -> MassResult<(LaunchVehicle, Option<BurnConditions>)> {
        for o in &self.thickness_overrides {
            if !(o.thickness_mm > 0.0) {
                return Err(MassPropertiesError::Config(format!(
                    "thickness override for stage {} '{}' must be positive",
                    o.stage,
                    o.item.name()
                )));
            }
        }
        let vehicle = LaunchVehicle::new(
            self.name,
            self.body_material,
            self.stages,
            self.payload,
            ThicknessTable::new(self.thickness_overrides),
        )?;
        Ok((vehicle, self.max_q))
    }
}
