use std::fmt;

use crate::mass_properties::table::{Item, MassProperties};

pub struct Report<'a> {
    vehicle_name: &'a str,
    properties: &'a MassProperties,
}

impl<'a> Report<'a> {
    pub fn new(vehicle_name: &'a str, properties: &'a MassProperties) -> Self {
        Report {
            vehicle_name,
            properties,
        }
    }

    fn format_mass(mass: f64) -> String {
        if mass.abs() >= 1000.0 {
            format!("{:.3} t", mass / 1000.0)
        } else {
            format!("{:.2} kg", mass)
        }
    }

    fn format_height(height: Option<f64>) -> String {
        height.map_or_else(|| "-".to_string(), |h| format!("{:.3}", h))
    }

    fn format_row(item: &Item) -> String {
        format!(
            "{:<28} {:>8} {:>7.2} {:>11.3} {:>9.3} {:>12.2} {:>9.3} {:>12.2} {:>12.2} {:>12.2} {:>11.2}",
            item.name,
            Self::format_height(item.height),
            item.thickness * 1000.0,
            item.mass,
            item.distance,
            item.moment,
            item.distance_from_cm,
            item.j0,
            item.parallel_axis,
            item.pitch_yaw,
            item.roll
        )
    }

    pub fn render(&self) -> String {
        self.to_string()
    }

    pub fn display(&self) {
        println!("{}", self.render());
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.properties;

        writeln!(f, "--- {} Mass Properties: {} ---", self.vehicle_name, p.load_condition)?;
        writeln!(
            f,
            "{:<28} {:>8} {:>7} {:>11} {:>9} {:>12} {:>9} {:>12} {:>12} {:>12} {:>11}",
            "Item",
            "H (m)",
            "t (mm)",
            "Mass (kg)",
            "X (m)",
            "M (kg·m)",
            "dCM (m)",
            "J0",
            "m·d²",
            "Pitch/Yaw",
            "Roll"
        )?;
        for item in p.table.payload_items() {
            writeln!(f, "{}", Self::format_row(item))?;
        }
        for stage in p.stage_masses.iter().rev() {
            writeln!(f, "-- Stage {} --", stage.step_num)?;
            for item in p.table.stage_items(stage.step_num) {
                writeln!(f, "{}", Self::format_row(item))?;
            }
        }

        writeln!(f, "\n--- Vehicle Summary ---")?;
        writeln!(f, "Total Mass: {}", Self::format_mass(p.total_mass))?;
        writeln!(f, "Center of Mass: {:.3} m from base", p.center_of_mass)?;
        writeln!(f, "Pitch/Yaw Inertia: {:.2} kg·m²", p.total_pitch_yaw)?;
        writeln!(f, "Roll Inertia: {:.2} kg·m²", p.total_roll)?;

        writeln!(f, "\n--- Stage Masses ---")?;
        for stage in p.stage_masses.iter().rev() {
            writeln!(
                f,
                "Stage {}: initial {}, empty {}, propellant {}",
                stage.step_num,
                Self::format_mass(stage.initial_mass),
                Self::format_mass(stage.empty_mass),
                Self::format_mass(stage.propellant_mass)
            )?;
        }
        Ok(())
    }
}
