use serde::Deserialize;

use crate::errors::{MassPropertiesError, MassResult};
use crate::vehicle::stage::{Propulsion, Stage};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    // Payload stack
    TopOfFairing,
    Fairing,
    Payload,
    PayloadAttachFitting,
    // Shared by both propulsion kinds
    NoseCone,
    ForwardSkirt,
    Avionics,
    Wiring,
    PressurantTank,
    AftSkirt,
    Gimbals,
    // Liquid stages
    FuelDomeTop,
    FuelCylinder,
    FuelDomeBottom,
    FuelInsulation,
    FuelResidual,
    Intertank,
    OxDomeTop,
    OxCylinder,
    OxDomeBottom,
    OxInsulation,
    OxResidual,
    ThrustStructure,
    Engines,
    Fuel,
    Oxidizer,
    // Solid stages
    SrmDomeTop,
    SolidPropellantCasing,
    SrmDomeBottom,
    SolidPropellantResidual,
    Nozzle,
    SolidPropellant,
}

pub const PAYLOAD_ITEMS: [ItemKind; 4] = [
    ItemKind::TopOfFairing,
    ItemKind::Fairing,
    ItemKind::Payload,
    ItemKind::PayloadAttachFitting,
];

pub const LIQUID_ITEMS: [ItemKind; 21] = [
    ItemKind::ForwardSkirt,
    ItemKind::Avionics,
    ItemKind::Wiring,
    ItemKind::FuelDomeTop,
    ItemKind::FuelCylinder,
    ItemKind::FuelDomeBottom,
    ItemKind::FuelInsulation,
    ItemKind::FuelResidual,
    ItemKind::Intertank,
    ItemKind::OxDomeTop,
    ItemKind::OxCylinder,
    ItemKind::OxDomeBottom,
    ItemKind::OxInsulation,
    ItemKind::OxResidual,
    ItemKind::PressurantTank,
    ItemKind::AftSkirt,
    ItemKind::ThrustStructure,
    ItemKind::Gimbals,
    ItemKind::Engines,
    ItemKind::Fuel,
    ItemKind::Oxidizer,
];

pub const SOLID_ITEMS: [ItemKind; 13] = [
    ItemKind::NoseCone,
    ItemKind::ForwardSkirt,
    ItemKind::Avionics,
    ItemKind::Wiring,
    ItemKind::PressurantTank,
    ItemKind::SrmDomeTop,
    ItemKind::SolidPropellantCasing,
    ItemKind::SrmDomeBottom,
    ItemKind::SolidPropellantResidual,
    ItemKind::AftSkirt,
    ItemKind::Gimbals,
    ItemKind::Nozzle,
    ItemKind::SolidPropellant,
];

impl ItemKind {
    pub fn name(&self) -> &'static str {
        match self {
            ItemKind::TopOfFairing => "Top of Fairing",
            ItemKind::Fairing => "Payload Fairing",
            ItemKind::Payload => "Payload",
            ItemKind::PayloadAttachFitting => "Payload Attach Fitting",
            ItemKind::NoseCone => "Nose Cone",
            ItemKind::ForwardSkirt => "Forward Skirt",
            ItemKind::Avionics => "Avionics",
            ItemKind::Wiring => "Wiring",
            ItemKind::PressurantTank => "Pressurant Tank",
            ItemKind::AftSkirt => "Aft Skirt",
            ItemKind::Gimbals => "Gimbals",
            ItemKind::FuelDomeTop => "Fuel Dome Top",
            ItemKind::FuelCylinder => "Fuel Cylinder",
            ItemKind::FuelDomeBottom => "Fuel Dome Bottom",
            ItemKind::FuelInsulation => "Fuel Insulation",
            ItemKind::FuelResidual => "Fuel Residual",
            ItemKind::Intertank => "Intertank",
            ItemKind::OxDomeTop => "Ox Dome Top",
            ItemKind::OxCylinder => "Ox Cylinder",
            ItemKind::OxDomeBottom => "Ox Dome Bottom",
            ItemKind::OxInsulation => "Ox Insulation",
            ItemKind::OxResidual => "Ox Residual",
            ItemKind::ThrustStructure => "Thrust Structure",
            ItemKind::Engines => "Engines",
            ItemKind::Fuel => "Fuel",
            ItemKind::Oxidizer => "Oxidizer",
            ItemKind::SrmDomeTop => "SRM Dome Top",
            ItemKind::SolidPropellantCasing => "Solid Propellant Casing",
            ItemKind::SrmDomeBottom => "SRM Dome Bottom",
            ItemKind::SolidPropellantResidual => "Solid Propellant Residual",
            ItemKind::Nozzle => "Nozzle",
            ItemKind::SolidPropellant => "Solid Propellant",
        }
    }

    pub fn is_skin(&self) -> bool {
        matches!(
            self,
            ItemKind::Fairing
                | ItemKind::NoseCone
                | ItemKind::ForwardSkirt
                | ItemKind::PressurantTank
                | ItemKind::AftSkirt
                | ItemKind::FuelDomeTop
                | ItemKind::FuelCylinder
                | ItemKind::FuelDomeBottom
                | ItemKind::Intertank
                | ItemKind::OxDomeTop
                | ItemKind::OxCylinder
                | ItemKind::OxDomeBottom
                | ItemKind::SrmDomeTop
                | ItemKind::SolidPropellantCasing
                | ItemKind::SrmDomeBottom
        )
    }
}

pub fn items_for(propulsion: Propulsion) -> &'static [ItemKind] {
    match propulsion {
        Propulsion::Liquid => &LIQUID_ITEMS,
        Propulsion::Solid => &SOLID_ITEMS,
    }
}

pub fn block_size(propulsion: Propulsion) -> usize {
    items_for(propulsion).len()
}

pub fn index_of(kind: ItemKind, propulsion: Propulsion) -> MassResult<usize> {
    items_for(propulsion)
        .iter()
        .position(|k| *k == kind)
        .ok_or_else(|| {
            MassPropertiesError::SchemaMismatch(format!(
                "'{}' is not an item of a {:?} stage",
                kind.name(),
                propulsion
            ))
        })
}

pub fn item_label(kind: ItemKind, step_num: Option<usize>) -> String {
    match step_num {
        Some(n) => format!("{} {}", kind.name(), n),
        None => kind.name().to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageContext {
    pub step_num: usize,
    pub propulsion: Propulsion,
    pub is_last: bool,
    pub parallel: bool,
}

impl StageContext {
    pub fn of(stages: &[Stage], index: usize) -> Self {
        let stage = &stages[index];
        StageContext {
            step_num: stage.step_num,
            propulsion: stage.propulsion,
            is_last: index + 1 == stages.len(),
            parallel: stage.parallel,
        }
    }

    // Absent items keep their slot as massless placeholders.
    pub fn includes(&self, kind: ItemKind) -> bool {
        match kind {
            ItemKind::NoseCone => {
                self.propulsion == Propulsion::Solid && self.parallel && !self.is_last
            }
            _ => items_for(self.propulsion).contains(&kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vehicle::stage::StageBuilder;

    #[test]
    fn test_block_sizes() {
        assert_eq!(block_size(Propulsion::Liquid), 21);
        assert_eq!(block_size(Propulsion::Solid), 13);
        assert_eq!(PAYLOAD_ITEMS.len(), 4);
    }

    #[test]
    fn test_index_of_rejects_foreign_item() {
        assert_eq!(index_of(ItemKind::Fuel, Propulsion::Liquid).unwrap(), 19);
        let err = index_of(ItemKind::Fuel, Propulsion::Solid).unwrap_err();
        assert!(matches!(err, MassPropertiesError::SchemaMismatch(_)));
    }

    #[test]
    fn test_parallel_booster_includes_nose_cone() {
        let stages = vec![
            StageBuilder::new(1, 0.5, Propulsion::Solid).parallel(2).build(),
            StageBuilder::new(2, 1.0, Propulsion::Liquid).build(),
        ];
        let booster = StageContext::of(&stages, 0);
        assert!(booster.includes(ItemKind::NoseCone));
        assert!(!booster.includes(ItemKind::Fuel));
        let core = StageContext::of(&stages, 1);
        assert!(!core.includes(ItemKind::NoseCone));
        assert!(core.includes(ItemKind::Intertank));
    }

    #[test]
    fn test_nose_cone_only_on_parallel_boosters() {
        let stages = vec![
            StageBuilder::new(1, 0.5, Propulsion::Solid).build(),
            StageBuilder::new(2, 0.5, Propulsion::Solid).build(),
        ];
        assert!(!StageContext::of(&stages, 0).includes(ItemKind::NoseCone));
        assert!(!StageContext::of(&stages, 1).includes(ItemKind::NoseCone));
        assert!(StageContext::of(&stages, 1).is_last);
    }

    #[test]
    fn test_item_label() {
        assert_eq!(item_label(ItemKind::OxCylinder, Some(2)), "Ox Cylinder 2");
        assert_eq!(item_label(ItemKind::Fairing, None), "Payload Fairing");
    }
}
