//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - fixed physics step size and the accumulator cap,
//! - simulation speed multiplier,
//! - softening and gravitational constant (`eps2`, `g`),
//! - collision slop/percent and the random seed

#[derive(Debug, Clone)]
pub struct Parameters {
    pub dt: f64, // fixed physics step size
    pub sim_speed: f64, // wall-time multiplier fed into the accumulator
    pub max_accumulator: f64, // cap on unsimulated time, bounds catch-up ticks
    pub g: f64, // gravitational constant
    pub eps2: f64, // squared softening length
    pub collision_slop: f64, // tolerated penetration left uncorrected
    pub collision_percent: f64, // fraction of remaining overlap corrected per pass
    pub seed: u64, // deterministic seed to make runs reproducible
}
