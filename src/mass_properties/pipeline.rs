use log::info;

use crate::errors::MassResult;
use crate::mass_properties::aggregator::aggregate;
use crate::mass_properties::load::{BurnConditions, LoadCondition};
use crate::mass_properties::resolver::resolve;
use crate::mass_properties::synthesizer::synthesize;
use crate::mass_properties::table::{MassProperties, MassPropertiesTable};
use crate::mass_properties::walker::{place, walk};
use crate::vehicle::launch_vehicle::LaunchVehicle;

pub fn run(
    vehicle: &LaunchVehicle,
    load: LoadCondition,
    burn: Option<&BurnConditions>,
) -> MassResult<MassProperties> {
    info!("{}: starting {} pass", vehicle.name, load);

    let resolution = resolve(vehicle, load, burn)?;
    let propellant = resolution.propellant_masses();
    let vehicle_walk = walk(vehicle, &resolution)?;
    let placed = place(vehicle, resolution, &vehicle_walk)?;
    let synthesis = synthesize(placed)?;
    let (items, stage_masses) = aggregate(synthesis.items, &vehicle.stages, &propellant)?;

    info!(
        "{}: {} pass complete, {} items",
        vehicle.name,
        load,
        items.len()
    );

    Ok(MassProperties {
        load_condition: load,
        table: MassPropertiesTable::new(items),
        center_of_mass: synthesis.center_of_mass,
        total_mass: synthesis.total_mass,
        total_pitch_yaw: synthesis.total_pitch_yaw,
        total_roll: synthesis.total_roll,
        stage_masses,
    })
}
