use log::info;

use crate::errors::{MassPropertiesError, MassResult};
use crate::mass_properties::table::Item;
use crate::mass_properties::walker::PlacedItem;

#[derive(Debug, Clone, PartialEq)]
pub struct Synthesis {
    pub items: Vec<Item>,
    pub center_of_mass: f64,
    pub total_mass: f64,
    pub total_pitch_yaw: f64,
    pub total_roll: f64,
}

// (total mass, CM)
pub fn center_of_mass(placed: &[PlacedItem]) -> MassResult<(f64, f64)> {
    let total_mass: f64 = placed.iter().map(|p| p.item.mass).sum();
    let total_moment: f64 = placed.iter().map(|p| p.item.mass * p.distance).sum();

    if !(total_mass > 0.0) || !total_mass.is_finite() {
        return Err(MassPropertiesError::Degenerate(format!(
            "total mass is {}; centre of mass is undefined",
            total_mass
        )));
    }
    let cm = total_moment / total_mass;
    if !cm.is_finite() {
        return Err(MassPropertiesError::Degenerate(
            "centre of mass is not finite".to_string(),
        ));
    }
    Ok((total_mass, cm))
}

fn inertia(value: Option<f64>, mass: f64, name: &str) -> MassResult<f64> {
    match value {
        Some(v) => Ok(v),
        None if mass == 0.0 => Ok(0.0),
        None => Err(MassPropertiesError::Degenerate(format!(
            "'{}' blends two shapes with no surface area",
            name
        ))),
    }
}

fn check_finite(item: &Item) -> MassResult<()> {
    match item.numeric_columns().iter().find(|(_, v)| !v.is_finite()) {
        Some((column, value)) => Err(MassPropertiesError::Degenerate(format!(
            "{} of '{}' is {}",
            column, item.name, value
        ))),
        None => Ok(()),
    }
}

pub fn synthesize_item(placed: PlacedItem, center_of_mass: f64) -> MassResult<Item> {
    let PlacedItem { item, distance } = placed;
    let mass = item.mass;
    let distance_from_cm = distance - center_of_mass;
    let parallel_axis = mass * distance_from_cm.powi(2);
    let j0 = inertia(item.shape.self_inertia(mass), mass, &item.name)?;
    let roll = inertia(item.shape.roll_inertia(mass), mass, &item.name)?;

    let row = Item {
        name: item.name,
        kind: item.kind,
        stage: item.step_num,
        height: item.height,
        thickness: item.thickness,
        mass,
        distance,
        moment: mass * distance,
        distance_from_cm,
        j0,
        parallel_axis,
        pitch_yaw: j0 + parallel_axis,
        roll,
    };
    check_finite(&row)?;
    Ok(row)
}

pub fn synthesize(placed: Vec<PlacedItem>) -> MassResult<Synthesis> {
    let (total_mass, center_of_mass) = center_of_mass(&placed)?;

    let items = placed
        .into_iter()
        .map(|p| synthesize_item(p, center_of_mass))
        .collect::<MassResult<Vec<_>>>()?;

    let total_pitch_yaw: f64 = items.iter().map(|i| i.pitch_yaw).sum();
    let total_roll: f64 = items.iter().map(|i| i.roll).sum();
    if !total_pitch_yaw.is_finite() || !total_roll.is_finite() {
        return Err(MassPropertiesError::Degenerate(
            "vehicle inertia is not finite".to_string(),
        ));
    }

    info!(
        "CM {:.3} m, mass {:.2} kg, pitch/yaw {:.1} kg·m², roll {:.1} kg·m²",
        center_of_mass, total_mass, total_pitch_yaw, total_roll
    );

    Ok(Synthesis {
        items,
        center_of_mass,
        total_mass,
        total_pitch_yaw,
        total_roll,
    })
}
