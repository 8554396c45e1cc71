use std::fmt;

use serde::Deserialize;

use crate::errors::{MassPropertiesError, MassResult};
use crate::vehicle::stage::Stage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadCondition {
    GroundWindLoads,
    MaxQ,
}

impl fmt::Display for LoadCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadCondition::GroundWindLoads => write!(f, "Ground Wind-Loads Condition"),
            LoadCondition::MaxQ => write!(f, "Max-Q Condition"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageRole {
    Core,
    Booster,
}

impl StageRole {
    pub fn of(stage: &Stage) -> Self {
        if stage.parallel {
            StageRole::Booster
        } else {
            StageRole::Core
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BurnAdjustment {
    Consumed(f64),
    Remaining(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct StageBurn {
    pub stage: usize,
    #[serde(default = "default_role")]
    pub role: StageRole,
    #[serde(flatten)]
    pub adjustment: BurnAdjustment,
}

fn default_role() -> StageRole {
    StageRole::Core
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct BurnConditions {
    pub stages: Vec<StageBurn>,
}

impl BurnConditions {
    pub fn new(stages: Vec<StageBurn>) -> Self {
        BurnConditions { stages }
    }

    pub fn lookup(&self, step_num: usize, role: StageRole) -> Option<BurnAdjustment> {
        self.stages
            .iter()
            .find(|b| b.stage == step_num && b.role == role)
            .map(|b| b.adjustment)
    }
}

// Stage 1 is always burning at Max-Q, so it must have an entry.
pub fn burn_adjustment(
    load: LoadCondition,
    burn: Option<&BurnConditions>,
    stage: &Stage,
) -> MassResult<Option<BurnAdjustment>> {
    match load {
        LoadCondition::GroundWindLoads => Ok(None),
        LoadCondition::MaxQ => {
            let role = StageRole::of(stage);
            let missing = MassPropertiesError::MissingBurnCondition {
                stage: stage.step_num,
                role,
            };
            let burn = burn.ok_or(missing)?;
            match burn.lookup(stage.step_num, role) {
                Some(adjustment) => Ok(Some(adjustment)),
                None if stage.step_num == 1 => Err(MassPropertiesError::MissingBurnCondition {
                    stage: stage.step_num,
                    role,
                }),
                None => Ok(None),
            }
        }
    }
}
