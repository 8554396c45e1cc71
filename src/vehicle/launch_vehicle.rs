use log::warn;

use crate::errors::{MassPropertiesError, MassResult};
use crate::mass_properties::load::{BurnConditions, LoadCondition};
use crate::mass_properties::pipeline;
use crate::mass_properties::table::MassProperties;
use crate::mass_properties::thickness::ThicknessTable;
use crate::utils::geometry::{cylinder_surface_area, frustum_surface_area};
use crate::vehicle::material::BodyMaterial;
use crate::vehicle::payload::Payload;
use crate::vehicle::stage::{Dimensions, Propulsion, Stage};

#[derive(Debug, Clone, PartialEq)]
pub struct LaunchVehicle {
    pub name: String,
    pub material: BodyMaterial,
    pub stages: Vec<Stage>, // bottom stage first
    pub payload: Payload,
    pub thickness: ThicknessTable,
}

impl LaunchVehicle {
    pub fn new(
        name: impl Into<String>,
        material: BodyMaterial,
        stages: Vec<Stage>,
        payload: Payload,
        thickness: ThicknessTable,
    ) -> MassResult<Self> {
        let mut vehicle = LaunchVehicle {
            name: name.into(),
            material,
            stages,
            payload,
            thickness,
        };
        vehicle.validate()?;
        vehicle.init_interstages();
        Ok(vehicle)
    }

    pub fn validate(&self) -> MassResult<()> {
        if self.stages.is_empty() {
            return Err(MassPropertiesError::Config(format!(
                "vehicle '{}' has no stages",
                self.name
            )));
        }

        for (index, stage) in self.stages.iter().enumerate() {
            if stage.step_num != index + 1 {
                return Err(MassPropertiesError::Config(format!(
                    "stage at position {} has step number {}; stages must run 1..{} from the bottom",
                    index + 1,
                    stage.step_num,
                    self.stages.len()
                )));
            }
            if !(stage.radius > 0.0) || !stage.radius.is_finite() {
                return Err(MassPropertiesError::missing(
                    stage.step_num,
                    "Radius",
                    format!("radius must be positive, got {}", stage.radius),
                ));
            }
            if stage.multiplier == 0 {
                return Err(MassPropertiesError::Config(format!(
                    "stage {} has a multiplier of 0",
                    stage.step_num
                )));
            }
            if stage.multiplier > 1 && !stage.parallel {
                warn!(
                    "Stage {} is serial but has multiplier {}",
                    stage.step_num, stage.multiplier
                );
            }
        }

        if self.stages.last().map_or(false, |s| s.parallel) {
            return Err(MassPropertiesError::Config(
                "the top stage carries the payload and cannot be parallel".to_string(),
            ));
        }
        Ok(())
    }

    pub fn init_interstages(&mut self) {
        let count = self.stages.len();
        for i in 0..count {
            let interstage = match self.stages.get(i + 1) {
                None => Dimensions::default(),
                Some(next) => interstage(&self.stages[i], next),
            };
            self.stages[i].geometry.interstage = interstage;
        }
    }

    pub fn top_stage(&self) -> MassResult<&Stage> {
        self.stages
            .last()
            .ok_or_else(|| MassPropertiesError::Config(format!("vehicle '{}' has no stages", self.name)))
    }

    pub fn mass_moments(
        &self,
        load: LoadCondition,
        burn: Option<&BurnConditions>,
    ) -> MassResult<MassProperties> {
        pipeline::run(self, load, burn)
    }
}

fn interstage(stage: &Stage, next: &Stage) -> Dimensions {
    let g = &stage.geometry;
    let r = stage.radius;
    match stage.propulsion {
        // Gap of r/4 between this stage's fuel dome and the upper nozzle exit.
        Propulsion::Liquid => {
            let length = g.fuel_dome.length + next.geometry.nozzle_length + r / 4.0;
            let area = if stage.parallel {
                cylinder_surface_area(length, r)
            } else {
                frustum_surface_area(length, r, next.radius)
            };
            Dimensions::new(length, area, 0.0)
        }
        // A booster's forward section only houses its pressurant tank.
        Propulsion::Solid if stage.parallel => {
            let length = 2.0 * g.pressurant_tank.length + r / 2.0;
            Dimensions::new(length, cylinder_surface_area(length, r), 0.0)
        }
        Propulsion::Solid => {
            let length = 2.0 * g.pressurant_tank.length + next.geometry.nozzle_length + r / 4.0;
            Dimensions::new(length, frustum_surface_area(length, r, next.radius), 0.0)
        }
    }
}
