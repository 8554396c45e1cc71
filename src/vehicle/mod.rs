pub mod launch_vehicle;
pub mod material;
pub mod payload;
pub mod stage;
