use log::debug;

use crate::constants::MASS_TOLERANCE;
use crate::errors::{MassPropertiesError, MassResult};
use crate::mass_properties::schema::{block_size, PAYLOAD_ITEMS};
use crate::mass_properties::table::{Item, StageMass};
use crate::vehicle::stage::Stage;

pub fn aggregate(
    items: Vec<Item>,
    stages: &[Stage],
    propellant: &[f64],
) -> MassResult<(Vec<Item>, Vec<StageMass>)> {
    let expected = PAYLOAD_ITEMS.len()
        + stages
            .iter()
            .map(|s| block_size(s.propulsion))
            .sum::<usize>();
    if items.len() != expected {
        return Err(MassPropertiesError::SchemaMismatch(format!(
            "table has {} rows, the schema expects {}",
            items.len(),
            expected
        )));
    }
    if propellant.len() != stages.len() {
        return Err(MassPropertiesError::SchemaMismatch(format!(
            "{} propellant totals for {} stages",
            propellant.len(),
            stages.len()
        )));
    }

    let mut rows = items.into_iter();
    let payload: Vec<Item> = rows.by_ref().take(PAYLOAD_ITEMS.len()).collect();

    let mut blocks = Vec::with_capacity(stages.len());
    let mut stage_masses = Vec::with_capacity(stages.len());
    for (stage, &propellant_mass) in stages.iter().zip(propellant) {
        let block: Vec<Item> = rows.by_ref().take(block_size(stage.propulsion)).collect();
        let initial_mass: f64 = block.iter().map(|item| item.mass).sum();
        if propellant_mass > initial_mass + MASS_TOLERANCE {
            return Err(MassPropertiesError::SchemaMismatch(format!(
                "stage {} tracks {:.3} kg of propellant but its rows sum to {:.3} kg",
                stage.step_num, propellant_mass, initial_mass
            )));
        }
        let stage_mass = StageMass {
            step_num: stage.step_num,
            initial_mass,
            empty_mass: initial_mass - propellant_mass,
            propellant_mass,
        };
        debug!(
            "Stage {}: initial {:.2} kg, empty {:.2} kg, propellant {:.2} kg",
            stage_mass.step_num,
            stage_mass.initial_mass,
            stage_mass.empty_mass,
            stage_mass.propellant_mass
        );
        stage_masses.push(stage_mass);
        blocks.push(block);
    }

    let mut ordered = payload;
    for block in blocks.into_iter().rev() {
        ordered.extend(block);
    }
    Ok((ordered, stage_masses))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mass_properties::schema::{items_for, ItemKind};
    use crate::vehicle::stage::{Propulsion, StageBuilder};

    fn row(kind: ItemKind, stage: Option<usize>, mass: f64) -> Item {
        Item {
            name: kind.name().to_string(),
            kind,
            stage,
            height: None,
            thickness: 0.0,
            mass,
            distance: 0.0,
            moment: 0.0,
            distance_from_cm: 0.0,
            j0: 0.0,
            parallel_axis: 0.0,
            pitch_yaw: 0.0,
            roll: 0.0,
        }
    }

    fn working_table(stages: &[Stage]) -> Vec<Item> {
        let mut items: Vec<Item> = PAYLOAD_ITEMS.iter().map(|&k| row(k, None, 1.0)).collect();
        for stage in stages {
            items.extend(
                items_for(stage.propulsion)
                    .iter()
                    .map(|&k| row(k, Some(stage.step_num), 10.0)),
            );
        }
        items
    }

    #[test]
    fn test_stage_triples_and_order() {
        let stages = vec![
            StageBuilder::new(1, 1.0, Propulsion::Solid).build(),
            StageBuilder::new(2, 1.0, Propulsion::Liquid).build(),
        ];
        let (ordered, masses) =
            aggregate(working_table(&stages), &stages, &[60.0, 50.0]).unwrap();

        assert_eq!(masses[0].initial_mass, 130.0);
        assert_eq!(masses[0].empty_mass, 70.0);
        assert_eq!(masses[1].initial_mass, 210.0);
        assert_eq!(masses[1].propellant_mass, 50.0);

        // Payload stack, then stage 2, then stage 1.
        assert_eq!(ordered[0].kind, ItemKind::TopOfFairing);
        assert_eq!(ordered[4].stage, Some(2));
        assert_eq!(ordered[ordered.len() - 1].stage, Some(1));
        assert_eq!(ordered[ordered.len() - 1].kind, ItemKind::SolidPropellant);
    }

    #[test]
    fn test_row_count_mismatch() {
        let stages = vec![StageBuilder::new(1, 1.0, Propulsion::Liquid).build()];
        let mut items = working_table(&stages);
        items.pop();
        let err = aggregate(items, &stages, &[0.0]).unwrap_err();
        assert!(matches!(err, MassPropertiesError::SchemaMismatch(_)));
    }

    #[test]
    fn test_propellant_exceeding_block_is_rejected() {
        let stages = vec![StageBuilder::new(1, 1.0, Propulsion::Liquid).build()];
        let err = aggregate(working_table(&stages), &stages, &[500.0]).unwrap_err();
        assert!(matches!(err, MassPropertiesError::SchemaMismatch(_)));
    }
}
