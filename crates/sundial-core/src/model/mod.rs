pub mod bodies;
pub mod orbit;
pub mod rng;
pub mod sky;
