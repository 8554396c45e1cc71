use crate::mass_properties::load::LoadCondition;
use crate::mass_properties::schema::ItemKind;

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub name: String,
    pub kind: ItemKind,
    pub stage: Option<usize>,
    pub height: Option<f64>,         // m
    pub thickness: f64,              // m
    pub mass: f64,                   // kg
    pub distance: f64,               // m from the vehicle base
    pub moment: f64,                 // kg·m
    pub distance_from_cm: f64,       // m
    pub j0: f64,                     // kg·m², about the item's own centroid
    pub parallel_axis: f64,          // kg·m²
    pub pitch_yaw: f64,              // kg·m²
    pub roll: f64,                   // kg·m², about the centerline
}

impl Item {
    pub fn numeric_columns(&self) -> [(&'static str, f64); 9] {
        [
            ("thickness", self.thickness),
            ("mass", self.mass),
            ("distance", self.distance),
            ("moment", self.moment),
            ("distance from CM", self.distance_from_cm),
            ("J0", self.j0),
            ("parallel axis", self.parallel_axis),
            ("pitch/yaw", self.pitch_yaw),
            ("roll", self.roll),
        ]
    }
}

// Multiplier included.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageMass {
    pub step_num: usize,
    pub initial_mass: f64,
    pub empty_mass: f64,
    pub propellant_mass: f64,
}

// Nose-to-tail: payload stack, then the top stage down to stage 1.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MassPropertiesTable {
    items: Vec<Item>,
}

impl MassPropertiesTable {
    pub fn new(items: Vec<Item>) -> Self {
        MassPropertiesTable { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn find(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name == name)
    }

    pub fn stage_items(&self, step_num: usize) -> impl Iterator<Item = &Item> {
        self.items
            .iter()
            .filter(move |item| item.stage == Some(step_num))
    }

    pub fn payload_items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|item| item.stage.is_none())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MassProperties {
    pub load_condition: LoadCondition,
    pub table: MassPropertiesTable,
    pub center_of_mass: f64,
    pub total_mass: f64,
    pub total_pitch_yaw: f64,
    pub total_roll: f64,
    // Bottom stage first.
    pub stage_masses: Vec<StageMass>,
}
