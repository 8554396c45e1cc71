pub mod aggregator;
pub mod inertia;
pub mod load;
pub mod pipeline;
pub mod resolver;
pub mod schema;
pub mod synthesizer;
pub mod table;
pub mod thickness;
pub mod walker;
