use serde::Deserialize;

use crate::constants::{DEFAULT_SKIN_THICKNESS_MM, MM_TO_M};
use crate::mass_properties::schema::ItemKind;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ThicknessOverride {
    // None applies to any vehicle.
    #[serde(default)]
    pub vehicle: Option<String>,
    pub stage: usize,
    pub item: ItemKind,
    pub thickness_mm: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThicknessTable {
    overrides: Vec<ThicknessOverride>,
}

impl ThicknessTable {
    pub fn new(overrides: Vec<ThicknessOverride>) -> Self {
        ThicknessTable { overrides }
    }

    // Metres.
    pub fn thickness(&self, vehicle: &str, step_num: Option<usize>, item: ItemKind) -> f64 {
        let base = if item.is_skin() {
            DEFAULT_SKIN_THICKNESS_MM
        } else {
            0.0
        };

        let thickness_mm = step_num
            .and_then(|step| {
                self.overrides.iter().rev().find(|o| {
                    o.stage == step
                        && o.item == item
                        && o.vehicle.as_deref().map_or(true, |v| v == vehicle)
                })
            })
            .map_or(base, |o| o.thickness_mm);

        thickness_mm * MM_TO_M
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn table() -> ThicknessTable {
        ThicknessTable::new(vec![
            ThicknessOverride {
                vehicle: Some("Minerva-1".to_string()),
                stage: 1,
                item: ItemKind::AftSkirt,
                thickness_mm: 1.9,
            },
            ThicknessOverride {
                vehicle: None,
                stage: 2,
                item: ItemKind::Intertank,
                thickness_mm: 1.5,
            },
        ])
    }

    #[test]
    fn test_defaults() {
        let t = ThicknessTable::default();
        assert_abs_diff_eq!(t.thickness("X", Some(1), ItemKind::FuelCylinder), 0.001);
        assert_eq!(t.thickness("X", Some(1), ItemKind::Engines), 0.0);
        assert_abs_diff_eq!(t.thickness("X", None, ItemKind::Fairing), 0.001);
    }

    #[test]
    fn test_vehicle_scoped_override() {
        let t = table();
        assert_abs_diff_eq!(t.thickness("Minerva-1", Some(1), ItemKind::AftSkirt), 0.0019);
        assert_abs_diff_eq!(t.thickness("Latona-1", Some(1), ItemKind::AftSkirt), 0.001);
        assert_abs_diff_eq!(t.thickness("Minerva-1", Some(2), ItemKind::AftSkirt), 0.001);
    }

    #[test]
    fn test_unscoped_override_applies_to_any_vehicle() {
        let t = table();
        assert_abs_diff_eq!(t.thickness("Anything", Some(2), ItemKind::Intertank), 0.0015);
    }
}
