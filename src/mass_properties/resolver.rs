use log::debug;

use crate::constants::*;
use crate::errors::{MassPropertiesError, MassResult};
use crate::mass_properties::inertia::{Primitive, Shape};
use crate::mass_properties::load::{burn_adjustment, BurnAdjustment, BurnConditions, LoadCondition};
use crate::mass_properties::schema::{item_label, items_for, ItemKind, StageContext, PAYLOAD_ITEMS};
use crate::vehicle::launch_vehicle::LaunchVehicle;
use crate::vehicle::stage::{Propulsion, Stage};

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedItem {
    pub kind: ItemKind,
    pub step_num: Option<usize>,
    pub name: String,
    pub height: Option<f64>,
    pub thickness: f64,
    // Multiplier included.
    pub mass: f64,
    pub shape: Shape,
}

// Per unit.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TankFill {
    pub fuel: f64,
    pub oxidizer: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStage {
    pub items: Vec<ResolvedItem>,
    // After burn adjustment and multiplier.
    pub propellant_mass: f64,
    pub fill: TankFill,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub payload: Vec<ResolvedItem>,
    // Bottom stage first.
    pub stages: Vec<ResolvedStage>,
}

impl Resolution {
    pub fn propellant_masses(&self) -> Vec<f64> {
        self.stages.iter().map(|s| s.propellant_mass).collect()
    }
}

pub fn skin_mass(surface_area: f64, density: f64, thickness: f64) -> f64 {
    surface_area * density * thickness
}

pub fn wiring_mass(stage_mass: f64, stage_length: f64) -> f64 {
    WIRING_COEFFICIENT * stage_mass.sqrt() * stage_length.powf(0.25) / WIRING_SCALE_DOWN
}

pub fn thrust_structure_mass(thrust_sl: f64) -> f64 {
    THRUST_STRUCTURE_COEFFICIENT * thrust_sl
}

pub fn gimbal_mass(num_gimballed: u32, thrust_per_engine: f64, chamber_pressure: f64) -> f64 {
    f64::from(num_gimballed)
        * GIMBAL_COEFFICIENT
        * (thrust_per_engine / chamber_pressure).powf(GIMBAL_EXPONENT)
}

pub fn engine_mass(num_engines: u32, thrust_per_engine: f64, expansion_ratio: f64) -> f64 {
    f64::from(num_engines)
        * (thrust_per_engine
            * (ENGINE_THRUST_COEFFICIENT + ENGINE_EXPANSION_COEFFICIENT * expansion_ratio.sqrt())
            + ENGINE_BASE_MASS)
}

pub fn split_consumed(consumed: f64, fuel_fraction: f64) -> (f64, f64) {
    (consumed * fuel_fraction, consumed * (1.0 - fuel_fraction))
}

fn liquid_fill(stage: &Stage, adjustment: Option<BurnAdjustment>) -> TankFill {
    let p = &stage.propellant;
    let fuel = p.fuel_mass + p.fuel_fraction * p.startup_mass;
    let oxidizer = p.oxidizer_mass + p.oxidizer_fraction * p.startup_mass;
    match adjustment {
        None => TankFill { fuel, oxidizer },
        Some(BurnAdjustment::Consumed(consumed)) => {
            let (df, dox) = split_consumed(consumed, p.fuel_fraction);
            TankFill {
                fuel: fuel - df,
                oxidizer: oxidizer - dox,
            }
        }
        Some(BurnAdjustment::Remaining(remaining)) => {
            let (f, ox) = split_consumed(remaining, p.fuel_fraction);
            TankFill {
                fuel: f,
                oxidizer: ox,
            }
        }
    }
}

fn solid_propellant(stage: &Stage, adjustment: Option<BurnAdjustment>) -> f64 {
    let solid = stage.propellant.solid_mass;
    match adjustment {
        None => solid,
        Some(BurnAdjustment::Consumed(consumed)) => solid - consumed,
        Some(BurnAdjustment::Remaining(remaining)) => remaining,
    }
}

struct StageInputs<'a> {
    stage: &'a Stage,
    next: Option<&'a Stage>,
    ctx: StageContext,
    body_density: f64,
}

impl StageInputs<'_> {
    fn missing(&self, kind: ItemKind, reason: &str) -> MassPropertiesError {
        MassPropertiesError::missing(self.stage.step_num, kind.name(), reason)
    }

    // Interstage for lower stages, forward skirt on the last one.
    fn forward_section(&self) -> (f64, f64, Primitive) {
        let g = &self.stage.geometry;
        let r = self.stage.radius;
        match self.next {
            Some(next) => {
                let s = &g.interstage;
                let shape = if self.stage.parallel {
                    Primitive::ThinCylinder {
                        radius: r,
                        height: s.length,
                    }
                } else {
                    Primitive::ThinFrustum {
                        r1: r,
                        r2: next.radius,
                        height: s.length,
                    }
                };
                (s.length, s.surface_area, shape)
            }
            None => {
                let s = &g.forward_skirt;
                let shape = Primitive::ThinCylinder {
                    radius: r,
                    height: s.length,
                };
                (s.length, s.surface_area, shape)
            }
        }
    }

    fn gimbals(&self) -> MassResult<f64> {
        let e = &self.stage.engines;
        if e.num_gimballed_engines == 0 {
            return Ok(0.0);
        }
        if e.chamber_pressure <= 0.0 {
            return Err(self.missing(ItemKind::Gimbals, "chamber pressure must be positive"));
        }
        Ok(gimbal_mass(
            e.num_gimballed_engines,
            e.thrust_sl_per_engine,
            e.chamber_pressure,
        ))
    }

    fn liquid_item(
        &self,
        kind: ItemKind,
        thickness: f64,
        fill: &TankFill,
    ) -> MassResult<(f64, Option<f64>, Shape)> {
        let stage = self.stage;
        let g = &stage.geometry;
        let p = &stage.propellant;
        let r = stage.radius;
        let rho = self.body_density;
        let tank_height_f = g.fuel_cylinder.length + 2.0 * g.fuel_dome.length;
        let tank_height_ox = g.ox_cylinder.length + 2.0 * g.ox_dome.length;
        let thin_cyl = |height: f64| Shape::Single(Primitive::ThinCylinder { radius: r, height });
        let dome = |height: f64| Shape::Single(Primitive::ThinEllipsoid { radius: r, height });

        let resolved = match kind {
            ItemKind::ForwardSkirt => {
                let (length, area, shape) = self.forward_section();
                (skin_mass(area, rho, thickness), Some(length), Shape::Single(shape))
            }
            ItemKind::Avionics => (
                AVIONICS_MASS,
                None,
                Shape::Single(Primitive::ThinRing { radius: r }),
            ),
            ItemKind::Wiring => (
                wiring_mass(stage.mass_estimate, stage.total_length),
                Some(stage.total_length),
                Shape::Single(Primitive::SolidRod {
                    length: stage.total_length,
                }),
            ),
            ItemKind::FuelDomeTop | ItemKind::FuelDomeBottom => (
                skin_mass(g.fuel_dome.surface_area, p.fuel_tank_density, thickness),
                Some(g.fuel_dome.length),
                dome(g.fuel_dome.length),
            ),
            ItemKind::FuelCylinder => (
                skin_mass(g.fuel_cylinder.surface_area, p.fuel_tank_density, thickness),
                Some(g.fuel_cylinder.length),
                thin_cyl(g.fuel_cylinder.length),
            ),
            ItemKind::FuelInsulation => {
                let dome_area = 2.0 * g.fuel_dome.surface_area;
                let cyl_area = g.fuel_cylinder.surface_area;
                (
                    (dome_area + cyl_area) * p.fuel_insulation_areal_density,
                    Some(tank_height_f),
                    Shape::AreaBlend {
                        first: Primitive::ThinEllipsoid {
                            radius: r,
                            height: g.fuel_dome.length,
                        },
                        first_area: dome_area,
                        second: Primitive::ThinCylinder {
                            radius: r,
                            height: g.fuel_cylinder.length,
                        },
                        second_area: cyl_area,
                    },
                )
            }
            ItemKind::FuelResidual => (p.residual_fraction * p.fuel_mass, None, Shape::Point),
            ItemKind::Intertank => (
                skin_mass(g.intertank.surface_area, rho, thickness),
                Some(g.intertank.length),
                thin_cyl(g.intertank.length),
            ),
            ItemKind::OxDomeTop | ItemKind::OxDomeBottom => (
                skin_mass(g.ox_dome.surface_area, p.oxidizer_tank_density, thickness),
                Some(g.ox_dome.length),
                dome(g.ox_dome.length),
            ),
            ItemKind::OxCylinder => (
                skin_mass(g.ox_cylinder.surface_area, p.oxidizer_tank_density, thickness),
                Some(g.ox_cylinder.length),
                thin_cyl(g.ox_cylinder.length),
            ),
            ItemKind::OxInsulation => {
                let dome_area = 2.0 * g.ox_dome.surface_area;
                let cyl_area = g.ox_cylinder.surface_area;
                (
                    (dome_area + cyl_area) * p.oxidizer_insulation_areal_density,
                    Some(tank_height_ox),
                    Shape::AreaBlend {
                        first: Primitive::ThinEllipsoid {
                            radius: r,
                            height: g.ox_dome.length,
                        },
                        first_area: dome_area,
                        second: Primitive::ThinCylinder {
                            radius: r,
                            height: g.ox_cylinder.length,
                        },
                        second_area: cyl_area,
                    },
                )
            }
            ItemKind::OxResidual => (p.residual_fraction * p.oxidizer_mass, None, Shape::Point),
            ItemKind::PressurantTank => (
                skin_mass(g.pressurant_tank.surface_area, rho, thickness),
                Some(2.0 * g.pressurant_tank.length),
                Shape::Single(Primitive::ThinHemisphere { radius: r }),
            ),
            ItemKind::AftSkirt => (
                skin_mass(g.aft_skirt.surface_area, rho, thickness),
                Some(g.aft_skirt.length),
                thin_cyl(g.aft_skirt.length),
            ),
            ItemKind::ThrustStructure => (
                thrust_structure_mass(stage.engines.thrust_sl),
                Some(g.thrust_structure_length),
                Shape::Point,
            ),
            ItemKind::Gimbals => (self.gimbals()?, None, Shape::Point),
            ItemKind::Engines => {
                let e = &stage.engines;
                (
                    engine_mass(e.num_engines, e.thrust_sl_per_engine, e.expansion_ratio),
                    Some(g.nozzle_length),
                    Shape::Point,
                )
            }
            ItemKind::Fuel => (fill.fuel, Some(tank_height_f), Shape::Point),
            ItemKind::Oxidizer => (fill.oxidizer, Some(tank_height_ox), Shape::Point),
            other => {
                return Err(MassPropertiesError::SchemaMismatch(format!(
                    "'{}' has no mass law for a liquid stage",
                    other.name()
                )))
            }
        };
        Ok(resolved)
    }

    fn solid_item(
        &self,
        kind: ItemKind,
        thickness: f64,
        propellant: f64,
    ) -> MassResult<(f64, Option<f64>, Shape)> {
        let stage = self.stage;
        let g = &stage.geometry;
        let p = &stage.propellant;
        let r = stage.radius;
        let rho = self.body_density;

        // Casing mass scales with the full load and is shared out by area.
        let srm_share = |area: f64| -> MassResult<f64> {
            let casing = p.casing_mass_fraction * p.solid_mass;
            let total_area = 2.0 * g.srm_dome.surface_area + g.srm_casing.surface_area;
            if casing == 0.0 {
                Ok(0.0)
            } else if total_area > 0.0 {
                Ok(casing * area / total_area)
            } else {
                Err(MassPropertiesError::Degenerate(format!(
                    "stage {} has SRM casing mass but no casing surface area",
                    stage.step_num
                )))
            }
        };

        let resolved = match kind {
            ItemKind::NoseCone => {
                let mass = if self.ctx.includes(ItemKind::NoseCone) {
                    skin_mass(g.nose_cone.surface_area, rho, thickness)
                } else {
                    0.0
                };
                (
                    mass,
                    Some(g.nose_cone.length),
                    Shape::Single(Primitive::ThinCone {
                        radius: r,
                        height: g.nose_cone.length,
                    }),
                )
            }
            ItemKind::ForwardSkirt => {
                let (length, area, shape) = self.forward_section();
                (skin_mass(area, rho, thickness), Some(length), Shape::Single(shape))
            }
            ItemKind::Avionics => (
                AVIONICS_MASS,
                None,
                Shape::Single(Primitive::ThinRing { radius: r }),
            ),
            ItemKind::Wiring => (
                wiring_mass(stage.mass_estimate, stage.total_length),
                Some(stage.total_length),
                Shape::Single(Primitive::SolidRod {
                    length: stage.total_length,
                }),
            ),
            ItemKind::PressurantTank => (
                skin_mass(g.pressurant_tank.surface_area, rho, thickness),
                Some(2.0 * g.pressurant_tank.length),
                Shape::Single(Primitive::ThinHemisphere { radius: r }),
            ),
            ItemKind::SrmDomeTop | ItemKind::SrmDomeBottom => (
                srm_share(g.srm_dome.surface_area)?,
                Some(g.srm_dome.length),
                Shape::Single(Primitive::ThinEllipsoid {
                    radius: r,
                    height: g.srm_dome.length,
                }),
            ),
            ItemKind::SolidPropellantCasing => (
                srm_share(g.srm_casing.surface_area)?,
                Some(g.srm_casing.length),
                Shape::Single(Primitive::ThinCylinder {
                    radius: r,
                    height: g.srm_casing.length,
                }),
            ),
            ItemKind::SolidPropellantResidual => (p.solid_residual_mass, None, Shape::Point),
            ItemKind::AftSkirt => (
                skin_mass(g.aft_skirt.surface_area, rho, thickness),
                Some(g.aft_skirt.length),
                Shape::Single(Primitive::ThinCylinder {
                    radius: r,
                    height: g.aft_skirt.length,
                }),
            ),
            ItemKind::Gimbals => {
                let mass = if stage.parallel { 0.0 } else { self.gimbals()? };
                (mass, None, Shape::Point)
            }
            ItemKind::Nozzle => (0.0, Some(g.nozzle_length), Shape::Point),
            ItemKind::SolidPropellant => (
                propellant,
                Some(g.srm_casing.length),
                Shape::AreaBlend {
                    first: Primitive::SolidEllipsoid {
                        radius: r,
                        height: g.srm_dome.length,
                    },
                    first_area: 2.0 * g.srm_dome.surface_area,
                    second: Primitive::SolidCylinder {
                        radius: r,
                        height: g.srm_casing.length,
                    },
                    second_area: g.srm_casing.surface_area,
                },
            ),
            other => {
                return Err(MassPropertiesError::SchemaMismatch(format!(
                    "'{}' has no mass law for a solid stage",
                    other.name()
                )))
            }
        };
        Ok(resolved)
    }
}

pub fn resolve_stage(
    vehicle: &LaunchVehicle,
    index: usize,
    adjustment: Option<BurnAdjustment>,
) -> MassResult<ResolvedStage> {
    let stages = vehicle.stages.as_slice();
    let stage = stages.get(index).ok_or_else(|| {
        MassPropertiesError::SchemaMismatch(format!("no stage at position {}", index))
    })?;
    let inputs = StageInputs {
        stage,
        next: stages.get(index + 1),
        ctx: StageContext::of(stages, index),
        body_density: vehicle.material.density(),
    };
    let factor = stage.multiplier_factor();

    let (fill, unit_propellant) = match stage.propulsion {
        Propulsion::Liquid => {
            let fill = liquid_fill(stage, adjustment);
            (fill, fill.fuel + fill.oxidizer)
        }
        Propulsion::Solid => {
            let solid = solid_propellant(stage, adjustment);
            (TankFill::default(), solid)
        }
    };

    let mut items = Vec::with_capacity(items_for(stage.propulsion).len());
    for &kind in items_for(stage.propulsion) {
        let thickness = vehicle
            .thickness
            .thickness(&vehicle.name, Some(stage.step_num), kind);
        let (unit_mass, height, shape) = match stage.propulsion {
            Propulsion::Liquid => inputs.liquid_item(kind, thickness, &fill)?,
            Propulsion::Solid => inputs.solid_item(kind, thickness, unit_propellant)?,
        };
        if unit_mass < 0.0 || !unit_mass.is_finite() {
            return Err(inputs.missing(
                kind,
                &format!("resolved mass {:.3} kg is not a valid mass", unit_mass),
            ));
        }
        items.push(ResolvedItem {
            kind,
            step_num: Some(stage.step_num),
            name: item_label(kind, Some(stage.step_num)),
            height,
            thickness,
            mass: unit_mass * factor,
            shape,
        });
    }

    let propellant_mass = unit_propellant * factor;
    debug!(
        "Stage {} resolved: {} items, propellant {:.2} kg (x{})",
        stage.step_num,
        items.len(),
        propellant_mass,
        stage.multiplier
    );

    Ok(ResolvedStage {
        items,
        propellant_mass,
        fill,
    })
}

pub fn resolve_payload(vehicle: &LaunchVehicle) -> MassResult<Vec<ResolvedItem>> {
    let top = vehicle.top_stage()?;
    let fairing = &top.geometry.fairing;
    let r = top.radius;

    PAYLOAD_ITEMS
        .iter()
        .map(|&kind| {
            let thickness = vehicle.thickness.thickness(&vehicle.name, None, kind);
            let (mass, height, shape) = match kind {
                ItemKind::TopOfFairing => (0.0, None, Shape::Point),
                ItemKind::Fairing => (
                    skin_mass(fairing.total_surface_area(), fairing.density, thickness),
                    Some(fairing.total_length()),
                    Shape::AreaBlend {
                        first: Primitive::ThinCylinder {
                            radius: r,
                            height: fairing.cylinder.length,
                        },
                        first_area: fairing.cylinder.surface_area,
                        second: Primitive::ThinCone {
                            radius: r,
                            height: fairing.cone.length,
                        },
                        second_area: fairing.cone.surface_area,
                    },
                ),
                ItemKind::Payload => (
                    vehicle.payload.get_mass(),
                    Some(fairing.total_length()),
                    Shape::Single(Primitive::SolidCylinder {
                        radius: r,
                        height: fairing.cylinder.length,
                    }),
                ),
                ItemKind::PayloadAttachFitting => (
                    vehicle.payload.paf_mass(),
                    None,
                    Shape::Single(Primitive::ThinRing { radius: r }),
                ),
                other => {
                    return Err(MassPropertiesError::SchemaMismatch(format!(
                        "'{}' is not a payload stack item",
                        other.name()
                    )))
                }
            };
            Ok(ResolvedItem {
                kind,
                step_num: None,
                name: item_label(kind, None),
                height,
                thickness,
                mass,
                shape,
            })
        })
        .collect()
}

pub fn resolve(
    vehicle: &LaunchVehicle,
    load: LoadCondition,
    burn: Option<&BurnConditions>,
) -> MassResult<Resolution> {
    let payload = resolve_payload(vehicle)?;
    let stages = vehicle
        .stages
        .iter()
        .enumerate()
        .map(|(index, stage)| {
            let adjustment = burn_adjustment(load, burn, stage)?;
            resolve_stage(vehicle, index, adjustment)
        })
        .collect::<MassResult<Vec<_>>>()?;

    Ok(Resolution { payload, stages })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mass_properties::load::{StageBurn, StageRole};
    use crate::mass_properties::schema::index_of;
    use crate::mass_properties::thickness::ThicknessTable;
    use crate::vehicle::material::BodyMaterial;
    use crate::vehicle::payload::{MissionProfile, Payload};
    use crate::vehicle::stage::{
        Dimensions, EngineParameters, Fairing, PropellantLoad, StageBuilder, StageGeometry,
    };
    use approx::assert_abs_diff_eq;

    fn liquid_stage(step_num: usize) -> Stage {
        StageBuilder::new(step_num, 1.0, Propulsion::Liquid)
            .total_length(12.0)
            .mass_estimate(16_000.0)
            .geometry(StageGeometry {
                forward_skirt: Dimensions::new(1.0, 6.28, 0.0),
                aft_skirt: Dimensions::new(1.5, 9.42, 0.0),
                intertank: Dimensions::new(0.8, 5.03, 0.0),
                fuel_dome: Dimensions::new(0.5, 4.0, 1.05),
                fuel_cylinder: Dimensions::new(2.0, 12.57, 6.28),
                ox_dome: Dimensions::new(0.5, 4.0, 1.05),
                ox_cylinder: Dimensions::new(4.0, 25.13, 12.57),
                pressurant_tank: Dimensions::new(0.3, 1.2, 0.1),
                nozzle_length: 1.2,
                thrust_structure_length: 0.6,
                fairing: Fairing {
                    cylinder: Dimensions::new(2.0, 12.57, 0.0),
                    cone: Dimensions::new(1.5, 5.7, 0.0),
                    density: 1600.0,
                },
                ..StageGeometry::default()
            })
            .engines(EngineParameters {
                thrust_sl: 400_000.0,
                thrust_sl_per_engine: 100_000.0,
                chamber_pressure: 7.0e6,
                expansion_ratio: 16.0,
                num_engines: 4,
                num_gimballed_engines: 4,
            })
            .propellant(PropellantLoad {
                fuel_mass: 3000.0,
                oxidizer_mass: 7000.0,
                startup_mass: 100.0,
                fuel_fraction: 0.3,
                oxidizer_fraction: 0.7,
                residual_fraction: 0.01,
                fuel_density: 820.0,
                oxidizer_density: 1141.0,
                fuel_tank_density: 2810.0,
                oxidizer_tank_density: 2810.0,
                fuel_insulation_areal_density: 0.0,
                oxidizer_insulation_areal_density: 1.0,
                ..PropellantLoad::default()
            })
            .build()
    }

    fn vehicle(stages: Vec<Stage>) -> LaunchVehicle {
        LaunchVehicle::new(
            "Test-1",
            BodyMaterial::Aluminum7075T6,
            stages,
            Payload::new(250.0, MissionProfile::One),
            ThicknessTable::default(),
        )
        .unwrap()
    }

    fn mass_of(stage: &ResolvedStage, kind: ItemKind) -> f64 {
        stage.items[index_of(kind, Propulsion::Liquid).unwrap()].mass
    }

    #[test]
    fn test_mass_laws() {
        assert_abs_diff_eq!(thrust_structure_mass(400_000.0), 102.0, epsilon = 1e-9);
        assert_abs_diff_eq!(
            engine_mass(1, 100_000.0, 16.0),
            100_000.0 * (7.81e-4 + 3.37e-5 * 4.0) + 22.0,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(
            wiring_mass(10_000.0, 16.0),
            1.058 * 100.0 * 2.0 / 10.0,
            epsilon = 1e-9
        );
        assert_eq!(gimbal_mass(0, 100_000.0, 7.0e6), 0.0);
    }

    #[test]
    fn test_consumed_split() {
        let (fuel, ox) = split_consumed(100.0, 0.3);
        assert_abs_diff_eq!(fuel, 30.0, epsilon = 1e-12);
        assert_abs_diff_eq!(ox, 70.0, epsilon = 1e-12);
    }

    #[test]
    fn test_liquid_stage_skin_and_propellant() {
        let v = vehicle(vec![liquid_stage(1)]);
        let stage = resolve_stage(&v, 0, None).unwrap();

        assert_eq!(stage.items.len(), 21);
        // Last stage uses the plain forward skirt.
        assert_abs_diff_eq!(
            mass_of(&stage, ItemKind::ForwardSkirt),
            6.28 * 2810.0 * 0.001,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(mass_of(&stage, ItemKind::Fuel), 3030.0, epsilon = 1e-9);
        assert_abs_diff_eq!(mass_of(&stage, ItemKind::Oxidizer), 7070.0, epsilon = 1e-9);
        assert_abs_diff_eq!(mass_of(&stage, ItemKind::FuelResidual), 30.0, epsilon = 1e-9);
        assert_abs_diff_eq!(
            mass_of(&stage, ItemKind::OxInsulation),
            2.0 * 4.0 + 25.13,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(stage.propellant_mass, 10_100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_max_q_consumed_split_by_fuel_fraction() {
        let v = vehicle(vec![liquid_stage(1)]);
        let ground = resolve_stage(&v, 0, None).unwrap();
        let max_q = resolve_stage(&v, 0, Some(BurnAdjustment::Consumed(100.0))).unwrap();

        let d_fuel = mass_of(&ground, ItemKind::Fuel) - mass_of(&max_q, ItemKind::Fuel);
        let d_ox = mass_of(&ground, ItemKind::Oxidizer) - mass_of(&max_q, ItemKind::Oxidizer);
        assert_abs_diff_eq!(d_fuel, 30.0, epsilon = 1e-9);
        assert_abs_diff_eq!(d_ox, 70.0, epsilon = 1e-9);
        assert_abs_diff_eq!(max_q.propellant_mass, 10_000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_overburn_is_rejected() {
        let v = vehicle(vec![liquid_stage(1)]);
        let err = resolve_stage(&v, 0, Some(BurnAdjustment::Consumed(50_000.0))).unwrap_err();
        assert!(matches!(err, MassPropertiesError::MissingInput { stage: 1, .. }));
    }

    #[test]
    fn test_multiplier_scoped_to_stage() {
        let booster = StageBuilder::new(1, 1.0, Propulsion::Liquid)
            .parallel(3)
            .build();
        let booster = Stage {
            geometry: liquid_stage(1).geometry,
            engines: liquid_stage(1).engines,
            propellant: liquid_stage(1).propellant,
            ..booster
        };
        let single = Stage {
            multiplier: 1,
            ..booster.clone()
        };

        let tripled = vehicle(vec![booster, liquid_stage(2)]);
        let plain = vehicle(vec![single, liquid_stage(2)]);
        let a = resolve(&tripled, LoadCondition::GroundWindLoads, None).unwrap();
        let b = resolve(&plain, LoadCondition::GroundWindLoads, None).unwrap();

        for (x, y) in a.stages[0].items.iter().zip(&b.stages[0].items) {
            assert_abs_diff_eq!(x.mass, 3.0 * y.mass, epsilon = 1e-9);
        }
        assert_eq!(a.stages[1], b.stages[1]);
        assert_eq!(a.payload, b.payload);
        assert_abs_diff_eq!(
            a.stages[0].propellant_mass,
            3.0 * b.stages[0].propellant_mass,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_max_q_without_stage_one_entry_fails() {
        let v = vehicle(vec![liquid_stage(1)]);
        let burn = BurnConditions::new(vec![StageBurn {
            stage: 2,
            role: StageRole::Core,
            adjustment: BurnAdjustment::Consumed(10.0),
        }]);
        let err = resolve(&v, LoadCondition::MaxQ, Some(&burn)).unwrap_err();
        assert!(matches!(
            err,
            MassPropertiesError::MissingBurnCondition { stage: 1, .. }
        ));
    }

    #[test]
    fn test_payload_stack() {
        let v = vehicle(vec![liquid_stage(1)]);
        let payload = resolve_payload(&v).unwrap();
        assert_eq!(payload.len(), 4);
        assert_eq!(payload[0].mass, 0.0);
        assert_abs_diff_eq!(payload[1].mass, (12.57 + 5.7) * 1600.0 * 0.001, epsilon = 1e-9);
        assert_eq!(payload[2].mass, 250.0);
        assert_eq!(payload[3].mass, 7.0);
    }

    #[test]
    fn test_solid_casing_split_by_area() {
        let stage = StageBuilder::new(1, 0.5, Propulsion::Solid)
            .geometry(StageGeometry {
                srm_dome: Dimensions::new(0.3, 1.0, 0.1),
                srm_casing: Dimensions::new(5.0, 8.0, 3.9),
                ..StageGeometry::default()
            })
            .propellant(PropellantLoad {
                solid_mass: 5000.0,
                solid_residual_mass: 40.0,
                casing_mass_fraction: 0.1,
                ..PropellantLoad::default()
            })
            .build();
        let v = vehicle(vec![stage]);
        let resolved = resolve_stage(&v, 0, Some(BurnAdjustment::Remaining(1200.0))).unwrap();
        let mass = |kind| resolved.items[index_of(kind, Propulsion::Solid).unwrap()].mass;

        assert_abs_diff_eq!(mass(ItemKind::SrmDomeTop), 50.0, epsilon = 1e-9);
        assert_abs_diff_eq!(mass(ItemKind::SolidPropellantCasing), 400.0, epsilon = 1e-9);
        assert_abs_diff_eq!(mass(ItemKind::SolidPropellant), 1200.0, epsilon = 1e-9);
        assert_eq!(mass(ItemKind::NoseCone), 0.0);
        assert_eq!(mass(ItemKind::Nozzle), 0.0);
    }
}
