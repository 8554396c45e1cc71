use log::{debug, warn};

use crate::errors::{MassPropertiesError, MassResult};
use crate::mass_properties::resolver::{ResolvedItem, Resolution, TankFill};
use crate::mass_properties::schema::{block_size, index_of, item_label, ItemKind, StageContext};
use crate::utils::geometry::{circle_area, cone_centroid, dome_centroid_offset, frustum_centroid};
use crate::vehicle::launch_vehicle::LaunchVehicle;
use crate::vehicle::payload::{MissionProfile, PafPlacement};
use crate::vehicle::stage::{Dimensions, Fairing, Propulsion, Stage};

#[derive(Debug, Clone, PartialEq)]
pub struct StageWalk {
    pub step_num: usize,
    pub base: f64,
    // None where the walk never reached the item.
    pub distances: Vec<Option<f64>>,
    pub top: f64,
}

impl StageWalk {
    pub fn distance(&self, kind: ItemKind, propulsion: Propulsion) -> MassResult<Option<f64>> {
        Ok(self.distances[index_of(kind, propulsion)?])
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VehicleWalk {
    pub payload: Vec<f64>,
    pub stages: Vec<StageWalk>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedItem {
    pub item: ResolvedItem,
    pub distance: f64,
}

struct Cursor {
    step_num: usize,
    propulsion: Propulsion,
    base: f64,
    cg: f64,
    distances: Vec<Option<f64>>,
}

impl Cursor {
    fn new(stage: &Stage, base: f64) -> Self {
        Cursor {
            step_num: stage.step_num,
            propulsion: stage.propulsion,
            base,
            cg: base,
            distances: vec![None; block_size(stage.propulsion)],
        }
    }

    fn advance(&mut self, dx: f64) {
        self.cg += dx;
    }

    fn step(&mut self, dx: f64, kinds: &[ItemKind]) -> MassResult<()> {
        self.advance(dx);
        for &kind in kinds {
            self.pin(kind, self.cg)?;
        }
        Ok(())
    }

    fn pin(&mut self, kind: ItemKind, distance: f64) -> MassResult<()> {
        let index = index_of(kind, self.propulsion)?;
        self.distances[index] = Some(distance);
        Ok(())
    }

    fn finish(self) -> StageWalk {
        StageWalk {
            step_num: self.step_num,
            base: self.base,
            distances: self.distances,
            top: self.cg,
        }
    }
}

// Measured from the apex of the bottom dome. The dome fills first.
pub fn bulk_propellant_centroid(mass: f64, density: f64, radius: f64, dome: &Dimensions) -> f64 {
    let h = dome.length;
    let dome_cg = h - dome_centroid_offset(h);
    let volume = mass / density;
    let cylinder_volume = volume - dome.volume;
    if volume <= 0.0 || cylinder_volume <= 0.0 {
        return dome_cg;
    }
    let cylinder_cg = h + cylinder_volume / circle_area(radius) / 2.0;
    (dome.volume * dome_cg + cylinder_volume * cylinder_cg) / volume
}

fn tank_centroid(
    stage: &Stage,
    kind: ItemKind,
    mass: f64,
    density: f64,
    dome: &Dimensions,
) -> MassResult<f64> {
    if mass <= 0.0 {
        return Ok(bulk_propellant_centroid(0.0, 1.0, stage.radius, dome));
    }
    if density <= 0.0 {
        return Err(MassPropertiesError::missing(
            stage.step_num,
            item_label(kind, Some(stage.step_num)),
            "propellant density must be positive",
        ));
    }
    if mass / density < dome.volume {
        warn!(
            "Stage {}: {} sits below the top of the bottom dome; using the dome centroid",
            stage.step_num,
            kind.name()
        );
    }
    Ok(bulk_propellant_centroid(mass, density, stage.radius, dome))
}

pub fn walk_liquid(
    stage: &Stage,
    next: Option<&Stage>,
    base: f64,
    fill: &TankFill,
) -> MassResult<StageWalk> {
    let g = &stage.geometry;
    let p = &stage.propellant;
    let r = stage.radius;
    let h_ox = g.ox_dome.length;
    let h_f = g.fuel_dome.length;
    let d_ox = dome_centroid_offset(h_ox);
    let d_f = dome_centroid_offset(h_f);
    let ox_cg = tank_centroid(stage, ItemKind::Oxidizer, fill.oxidizer, p.oxidizer_density, &g.ox_dome)?;
    let fuel_cg = tank_centroid(stage, ItemKind::Fuel, fill.fuel, p.fuel_density, &g.fuel_dome)?;

    let mut c = Cursor::new(stage, base);
    // Wiring runs the full stage length: placed at mid-stage, not at 0 with no moment.
    c.pin(ItemKind::Wiring, base + stage.total_length / 2.0)?;

    c.step(r / 4.0, &[ItemKind::Engines])?;
    c.step(g.nozzle_length - r / 4.0, &[ItemKind::Gimbals])?;
    c.step(
        g.thrust_structure_length / 2.0 - g.nozzle_length,
        &[ItemKind::ThrustStructure],
    )?;
    c.step(
        g.aft_skirt.length / 2.0 - g.thrust_structure_length / 2.0,
        &[ItemKind::AftSkirt],
    )?;

    // Oxidizer tank
    c.step(g.aft_skirt.length / 2.0 - d_ox, &[ItemKind::OxDomeBottom])?;
    c.step(
        d_ox + g.ox_cylinder.length / 2.0,
        &[
            ItemKind::OxCylinder,
            ItemKind::OxInsulation,
            ItemKind::PressurantTank,
        ],
    )?;
    let ox_cylinder_base = c.cg - g.ox_cylinder.length / 2.0;
    c.pin(ItemKind::OxResidual, ox_cylinder_base - h_ox / 2.0)?;
    c.pin(ItemKind::Oxidizer, ox_cylinder_base - h_ox + ox_cg)?;
    c.step(g.ox_cylinder.length / 2.0 + d_ox, &[ItemKind::OxDomeTop])?;

    c.step(-d_ox + g.intertank.length / 2.0, &[ItemKind::Intertank])?;

    // Fuel tank
    c.step(r / 4.0 + h_f - d_f, &[ItemKind::FuelDomeBottom])?;
    c.step(
        d_f + g.fuel_cylinder.length / 2.0,
        &[ItemKind::FuelCylinder, ItemKind::FuelInsulation],
    )?;
    let fuel_cylinder_base = c.cg - g.fuel_cylinder.length / 2.0;
    c.pin(ItemKind::FuelResidual, fuel_cylinder_base - h_f / 2.0)?;
    c.pin(ItemKind::Fuel, fuel_cylinder_base - h_f + fuel_cg)?;
    c.step(g.fuel_cylinder.length / 2.0 + d_f, &[ItemKind::FuelDomeTop])?;

    match next {
        Some(next) => {
            let length = g.interstage.length;
            let centroid = if stage.parallel {
                length / 2.0
            } else {
                frustum_centroid(length, r, next.radius)
            };
            c.step(-d_f + centroid, &[ItemKind::ForwardSkirt, ItemKind::Avionics])?;
            c.advance(length - centroid);
        }
        None => {
            let length = g.forward_skirt.length;
            c.step(
                length / 2.0 - d_f,
                &[ItemKind::ForwardSkirt, ItemKind::Avionics],
            )?;
            c.advance(length / 2.0);
        }
    }

    Ok(c.finish())
}

pub fn walk_solid(stage: &Stage, next: Option<&Stage>, base: f64) -> MassResult<StageWalk> {
    let g = &stage.geometry;
    let r = stage.radius;
    let d = dome_centroid_offset(g.srm_dome.length);
    let press = g.pressurant_tank.length;

    let mut c = Cursor::new(stage, base);
    // Wiring runs the full stage length: placed at mid-stage, not at 0 with no moment.
    c.pin(ItemKind::Wiring, base + stage.total_length / 2.0)?;

    c.step(r / 4.0, &[ItemKind::Nozzle])?;
    c.step(g.nozzle_length - r / 4.0, &[ItemKind::Gimbals])?;
    c.step(g.aft_skirt.length / 2.0 - g.nozzle_length, &[ItemKind::AftSkirt])?;
    c.step(g.aft_skirt.length / 2.0 + d, &[ItemKind::SrmDomeBottom])?;
    // Grain burns radially, so the propellant centroid stays at mid casing.
    c.step(
        -d + g.srm_casing.length / 2.0,
        &[
            ItemKind::SolidPropellantCasing,
            ItemKind::SolidPropellantResidual,
            ItemKind::SolidPropellant,
        ],
    )?;
    c.step(g.srm_casing.length / 2.0 + d, &[ItemKind::SrmDomeTop])?;

    match next {
        Some(_) if stage.parallel => {
            let length = g.interstage.length;
            c.step(-d + length / 2.0, &[ItemKind::ForwardSkirt, ItemKind::Avionics])?;
            c.step(-length / 2.0 + r / 2.0 + press, &[ItemKind::PressurantTank])?;
            c.step(
                -r / 2.0 - press + length + cone_centroid(g.nose_cone.length),
                &[ItemKind::NoseCone],
            )?;
        }
        Some(next) => {
            let length = g.interstage.length;
            let centroid = frustum_centroid(length, r, next.radius);
            c.step(-d + centroid, &[ItemKind::ForwardSkirt, ItemKind::Avionics])?;
            c.pin(ItemKind::PressurantTank, c.cg - centroid + r / 2.0 + press)?;
            c.advance(length - centroid);
        }
        None => {
            let length = g.forward_skirt.length;
            c.advance(-d);
            c.pin(ItemKind::PressurantTank, c.cg + d + press + r / 2.0)?;
            c.step(length / 2.0, &[ItemKind::ForwardSkirt, ItemKind::Avionics])?;
            c.advance(length / 2.0);
        }
    }

    Ok(c.finish())
}

pub fn fairing_centroid(fairing: &Fairing) -> MassResult<f64> {
    let cyl = &fairing.cylinder;
    let cone = &fairing.cone;
    let area = cyl.surface_area + cone.surface_area;
    if area <= 0.0 {
        return Err(MassPropertiesError::Degenerate(
            "payload fairing has no surface area".to_string(),
        ));
    }
    Ok((cyl.surface_area * cyl.length / 2.0
        + cone.surface_area * (cone_centroid(cone.length) + cyl.length))
        / area)
}

pub fn walk_payload(base: f64, fairing: &Fairing, mission: MissionProfile) -> MassResult<Vec<f64>> {
    let mid_cylinder = base + fairing.cylinder.length / 2.0;
    let paf = match mission.paf_placement() {
        PafPlacement::BaseOfFairing => base,
        PafPlacement::MidFairing => mid_cylinder,
    };
    Ok(vec![
        base + fairing.total_length(),
        base + fairing_centroid(fairing)?,
        mid_cylinder,
        paf,
    ])
}

pub fn walk(vehicle: &LaunchVehicle, resolution: &Resolution) -> MassResult<VehicleWalk> {
    let stages = vehicle.stages.as_slice();
    if resolution.stages.len() != stages.len() {
        return Err(MassPropertiesError::SchemaMismatch(format!(
            "{} resolved stages for a {}-stage vehicle",
            resolution.stages.len(),
            stages.len()
        )));
    }

    let mut cursor = 0.0;
    let mut walks = Vec::with_capacity(stages.len());
    for (index, (stage, resolved)) in stages.iter().zip(&resolution.stages).enumerate() {
        let next = stages.get(index + 1);
        let walk = match stage.propulsion {
            Propulsion::Liquid => walk_liquid(stage, next, cursor, &resolved.fill)?,
            Propulsion::Solid => walk_solid(stage, next, cursor)?,
        };
        debug!(
            "Stage {} walked from {:.3} m to {:.3} m",
            stage.step_num, walk.base, walk.top
        );

        cursor = if stage.parallel {
            if index != 0 {
                warn!(
                    "Stage {} is parallel but not the bottom stage; the stack restarts at the base",
                    stage.step_num
                );
            }
            0.0
        } else {
            walk.top
        };
        walks.push(walk);
    }

    let top = vehicle.top_stage()?;
    let payload = walk_payload(cursor, &top.geometry.fairing, vehicle.payload.mission)?;

    Ok(VehicleWalk {
        payload,
        stages: walks,
    })
}

pub fn place(
    vehicle: &LaunchVehicle,
    resolution: Resolution,
    walk: &VehicleWalk,
) -> MassResult<Vec<PlacedItem>> {
    let mut placed = Vec::new();

    if resolution.payload.len() != walk.payload.len() {
        return Err(MassPropertiesError::SchemaMismatch(
            "payload stack does not match its placements".to_string(),
        ));
    }
    placed.extend(
        resolution
            .payload
            .into_iter()
            .zip(&walk.payload)
            .map(|(item, &distance)| PlacedItem { item, distance }),
    );

    for (index, (resolved, stage_walk)) in resolution.stages.into_iter().zip(&walk.stages).enumerate() {
        let ctx = StageContext::of(&vehicle.stages, index);
        if resolved.items.len() != stage_walk.distances.len() {
            return Err(MassPropertiesError::SchemaMismatch(format!(
                "stage {} has {} items but {} placements",
                ctx.step_num,
                resolved.items.len(),
                stage_walk.distances.len()
            )));
        }
        for (item, slot) in resolved.items.into_iter().zip(&stage_walk.distances) {
            let distance = match *slot {
                Some(distance) => distance,
                None if !ctx.includes(item.kind) => stage_walk.base,
                None => {
                    return Err(MassPropertiesError::SchemaMismatch(format!(
                        "no position was assigned to '{}'",
                        item.name
                    )))
                }
            };
            placed.push(PlacedItem { item, distance });
        }
    }

    Ok(placed)
}
