use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;
use vehicle_mass_properties::*;

const DEMO_VEHICLE: &str = include_str!("../demos/minerva.json");

#[derive(Parser)]
#[command(name = "main")]
#[command(about = "Mass, CM and inertia properties of a launch vehicle", long_about = None)]
struct Args {
    /// Vehicle description (JSON). Runs the bundled demo vehicle when omitted.
    path: Option<PathBuf>,
}

fn load_config(args: &Args) -> MassResult<VehicleConfig> {
    match &args.path {
        Some(path) => VehicleConfig::load(path),
        None => VehicleConfig::from_json(DEMO_VEHICLE),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().filter_or("MASS_PROPS_LOG", "info")).init();
    let args = Args::parse();

    let (vehicle, max_q) = load_config(&args)?.into_vehicle()?;

    for load in [LoadCondition::GroundWindLoads, LoadCondition::MaxQ] {
        if load == LoadCondition::MaxQ && max_q.is_none() {
            println!("No Max-Q burn data for {}; skipping {}.", vehicle.name, load);
            continue;
        }
        match vehicle.mass_moments(load, max_q.as_ref()) {
            Ok(properties) => Report::new(&vehicle.name, &properties).display(),
            Err(e) => {
                println!("Error during {}: {}", load, e);
                return Err(e.into());
            }
        }
    }

    Ok(())
}
