pub mod states;
pub mod params;
pub mod engine;
pub mod forces;
pub mod collisions;
pub mod integrator;
pub mod scenario;
