pub mod config;
pub mod constants;
pub mod errors;
pub mod mass_properties;
pub mod report_system;
pub mod utils;
pub mod vehicle;

pub use config::VehicleConfig;
pub use constants::*;
pub use errors::{MassPropertiesError, MassResult};

// Re-export commonly used items from mass_properties
pub use mass_properties::inertia::{Primitive, Shape};
pub use mass_properties::load::{BurnAdjustment, BurnConditions, LoadCondition, StageBurn, StageRole};
pub use mass_properties::schema::ItemKind;
pub use mass_properties::table::{Item, MassProperties, MassPropertiesTable, StageMass};
pub use mass_properties::thickness::{ThicknessOverride, ThicknessTable};

// Re-export the vehicle model
pub use vehicle::launch_vehicle::LaunchVehicle;
pub use vehicle::material::BodyMaterial;
pub use vehicle::payload::{MissionProfile, Payload};
pub use vehicle::stage::{
    Dimensions, EngineParameters, Fairing, PropellantLoad, Propulsion, Stage, StageBuilder,
    StageGeometry,
};

// Re-export commonly used items from report_system
pub use report_system::report::Report;
