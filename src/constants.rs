// Unit conversions
pub const MM_TO_M: f64 = 0.001;

// Structural material densities
pub const DENSITY_AL_6061_T6: f64 = 2700.0; // kg/m³
pub const DENSITY_AL_7075_T6: f64 = 2810.0; // kg/m³
pub const DENSITY_AL_2219_T87: f64 = 2840.0; // kg/m³

// Default skin thickness for structural shells
pub const DEFAULT_SKIN_THICKNESS_MM: f64 = 1.0;

// Mass estimating relationships
pub const AVIONICS_MASS: f64 = 0.84; // kg, per stage
pub const WIRING_COEFFICIENT: f64 = 1.058;
pub const WIRING_SCALE_DOWN: f64 = 10.0; // small launch vehicle correction
pub const THRUST_STRUCTURE_COEFFICIENT: f64 = 2.55e-4; // kg/N
pub const GIMBAL_COEFFICIENT: f64 = 237.8;
pub const GIMBAL_EXPONENT: f64 = 0.9375;
pub const ENGINE_THRUST_COEFFICIENT: f64 = 7.81e-4; // kg/N
pub const ENGINE_EXPANSION_COEFFICIENT: f64 = 3.37e-5; // kg/N
pub const ENGINE_BASE_MASS: f64 = 22.0; // kg, per engine

// Payload attach fitting
pub const PAF_MASS_MISSION_ONE: f64 = 7.0; // kg
pub const PAF_MASS_MISSION_TWO: f64 = 14.0; // kg

// Tolerance used when checking aggregated masses
pub const MASS_TOLERANCE: f64 = 1e-6; // kg
