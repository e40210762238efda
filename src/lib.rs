pub mod simulation;
pub mod configuration;

pub use simulation::states::{safe_normalize, Body, NVec2, System, NORMALIZE_EPS};
pub use simulation::params::Parameters;
pub use simulation::forces::{AccelSet, Acceleration, NewtonianGravity};
pub use simulation::collisions::CollisionResolver;
pub use simulation::integrator::semi_implicit_euler;
pub use simulation::engine::Engine;
pub use simulation::scenario::Scenario;

pub use configuration::config::{EngineConfig, ParametersConfig, PopulationConfig, ScenarioConfig};
