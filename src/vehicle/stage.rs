use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Propulsion {
    Liquid,
    Solid,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Dimensions {
    pub length: f64,       // m
    pub surface_area: f64, // m²
    pub volume: f64,       // m³
}

impl Dimensions {
    pub fn new(length: f64, surface_area: f64, volume: f64) -> Self {
        Dimensions {
            length,
            surface_area,
            volume,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Fairing {
    pub cylinder: Dimensions,
    pub cone: Dimensions,
    pub density: f64, // kg/m³
}

impl Fairing {
    pub fn total_length(&self) -> f64 {
        self.cylinder.length + self.cone.length
    }

    pub fn total_surface_area(&self) -> f64 {
        self.cylinder.surface_area + self.cone.surface_area
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StageGeometry {
    pub forward_skirt: Dimensions,
    pub aft_skirt: Dimensions,
    pub intertank: Dimensions,
    pub interstage: Dimensions,
    pub fuel_dome: Dimensions,
    pub fuel_cylinder: Dimensions,
    pub ox_dome: Dimensions,
    pub ox_cylinder: Dimensions,
    pub srm_dome: Dimensions,
    pub srm_casing: Dimensions,
    // `length` is the tank half-height.
    pub pressurant_tank: Dimensions,
    pub nose_cone: Dimensions,
    pub fairing: Fairing,
    pub nozzle_length: f64,
    pub thrust_structure_length: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EngineParameters {
    pub thrust_sl: f64,            // N, whole stage
    pub thrust_sl_per_engine: f64, // N
    pub chamber_pressure: f64,     // Pa
    pub expansion_ratio: f64,
    pub num_engines: u32,
    pub num_gimballed_engines: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PropellantLoad {
    pub fuel_mass: f64,      // kg, ideal load
    pub oxidizer_mass: f64,  // kg, ideal load
    pub startup_mass: f64,   // kg, split by the mixture fractions
    pub fuel_fraction: f64,
    pub oxidizer_fraction: f64,
    pub residual_fraction: f64,
    pub fuel_density: f64,     // kg/m³
    pub oxidizer_density: f64, // kg/m³
    pub fuel_tank_density: f64,
    pub oxidizer_tank_density: f64,
    pub fuel_insulation_areal_density: f64,     // kg/m²
    pub oxidizer_insulation_areal_density: f64, // kg/m²
    pub solid_mass: f64,            // kg
    pub solid_residual_mass: f64,   // kg
    pub casing_mass_fraction: f64,  // casing mass per kg of solid propellant
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Stage {
    pub step_num: usize,
    pub radius: f64,
    pub propulsion: Propulsion,
    #[serde(default)]
    pub parallel: bool,
    #[serde(default = "default_multiplier")]
    pub multiplier: u32,
    #[serde(default)]
    pub total_length: f64,
    // Gross mass from sizing, used by the wiring law.
    #[serde(default)]
    pub mass_estimate: f64,
    #[serde(default)]
    pub geometry: StageGeometry,
    #[serde(default)]
    pub engines: EngineParameters,
    #[serde(default)]
    pub propellant: PropellantLoad,
}

fn default_multiplier() -> u32 {
    1
}

impl Stage {
    pub fn new(step_num: usize, radius: f64, propulsion: Propulsion) -> Self {
        Stage {
            step_num,
            radius,
            propulsion,
            parallel: false,
            multiplier: 1,
            total_length: 0.0,
            mass_estimate: 0.0,
            geometry: StageGeometry::default(),
            engines: EngineParameters::default(),
            propellant: PropellantLoad::default(),
        }
    }

    pub fn multiplier_factor(&self) -> f64 {
        f64::from(self.multiplier)
    }
}

pub struct StageBuilder {
    stage: Stage,
}

impl StageBuilder {
    pub fn new(step_num: usize, radius: f64, propulsion: Propulsion) -> Self {
        StageBuilder {
            stage: Stage::new(step_num, radius, propulsion),
        }
    }

    pub fn parallel(mut self, multiplier: u32) -> Self {
        self.stage.parallel = true;
        self.stage.multiplier = multiplier;
        self
    }

    pub fn total_length(mut self, v: f64) -> Self {
        self.stage.total_length = v;
        self
    }

    pub fn mass_estimate(mut self, v: f64) -> Self {
        self.stage.mass_estimate = v;
        self
    }

    pub fn geometry(mut self, geometry: StageGeometry) -> Self {
        self.stage.geometry = geometry;
        self
    }

    pub fn engines(mut self, engines: EngineParameters) -> Self {
        self.stage.engines = engines;
        self
    }

    pub fn propellant(mut self, propellant: PropellantLoad) -> Self {
        self.stage.propellant = propellant;
        self
    }

    pub fn build(self) -> Stage {
        self.stage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stage_defaults() {
        let stage = Stage::new(1, 1.2, Propulsion::Liquid);
        assert_eq!(stage.step_num, 1);
        assert_eq!(stage.multiplier, 1);
        assert!(!stage.parallel);
        assert_eq!(stage.propulsion, Propulsion::Liquid);
    }

    #[test]
    fn test_builder_parallel_sets_multiplier() {
        let stage = StageBuilder::new(1, 0.5, Propulsion::Solid)
            .parallel(3)
            .total_length(8.0)
            .build();
        assert!(stage.parallel);
        assert_eq!(stage.multiplier_factor(), 3.0);
        assert_eq!(stage.total_length, 8.0);
    }

    #[test]
    fn test_stage_deserializes_with_defaults() {
        let json = r#"{ "step_num": 2, "radius": 0.8, "propulsion": "Solid" }"#;
        let stage: Stage = serde_json::from_str(json).unwrap();
        assert_eq!(stage.multiplier, 1);
        assert_eq!(stage.propulsion, Propulsion::Solid);
        assert_eq!(stage.geometry, StageGeometry::default());
    }

    #[test]
    fn test_fairing_totals() {
        let fairing = Fairing {
            cylinder: Dimensions::new(2.0, 6.0, 0.0),
            cone: Dimensions::new(1.5, 3.0, 0.0),
            density: 1600.0,
        };
        assert_eq!(fairing.total_length(), 3.5);
        assert_eq!(fairing.total_surface_area(), 9.0);
    }
}
