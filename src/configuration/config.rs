//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – engine options (parallel force pass)
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`PopulationConfig`] – how the initial body population is generated
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   parallel: true            # fan the force pass out over worker threads
//!
//! parameters:
//!   dt: 0.000833333333        # fixed physics step (s)
//!   sim_speed: 2.0            # wall-time multiplier
//!   max_accumulator: 0.25     # accumulator cap (s), bounds catch-up ticks
//!   g: 6674.0                 # gravitational constant
//!   softening: 0.1            # softening length epsilon
//!   collision_slop: 0.01      # penetration tolerated without correction
//!   collision_percent: 0.8    # fraction of overlap corrected per pass
//!   seed: 42                  # RNG seed for the initial population
//!
//! population:
//!   bodies: 420               # total count, including the anchor
//!   anchor_mass: 200000.0
//!   anchor_radius: 300.0
//!   anchor_restitution: 0.7
//!   orbit_radius: [5000.0, 7000.0]
//!   mass: [10.0, 80.0]
//!   restitution: [0.7, 1.0]
//!   tangential_factor: [0.85, 0.98]
//!   radial_factor: 0.0
//!   radius_per_mass: 0.3      # disc radius = mass * radius_per_mass
//! ```
//!
//! The engine maps this configuration into its internal runtime scenario
//! representation; all knobs here are tuning parameters, not hard-coded
//! invariants.

use anyhow::{ensure, Result};
use serde::Deserialize;

/// High-level engine configuration
#[derive(Deserialize, Debug, Clone)]
pub struct EngineConfig {
    pub parallel: bool, // `true` - chunk the force pass over the thread pool
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub dt: f64,                // fixed physics step size
    pub sim_speed: f64,         // simulated seconds per wall second
    pub max_accumulator: f64,   // accumulator cap - spiral-of-death guard
    pub g: f64,                 // gravitational constant
    pub softening: f64,         // softening length, prevents singular forces
    pub collision_slop: f64,    // tolerated penetration depth
    pub collision_percent: f64, // positional correction fraction
    pub seed: u64,              // deterministic seed to make runs reproducible
}

/// How the initial body population is generated: one heavy anchor at the
/// origin plus `bodies - 1` orbiters drawn from the ranges below.
/// All `[lo, hi]` pairs are sampled uniformly.
#[derive(Deserialize, Debug, Clone)]
pub struct PopulationConfig {
    pub bodies: usize,              // total body count, anchor included
    pub anchor_mass: f64,
    pub anchor_radius: f64,
    pub anchor_restitution: f64,
    pub orbit_radius: [f64; 2],     // annulus around the anchor
    pub mass: [f64; 2],             // per-orbiter mass range
    pub restitution: [f64; 2],      // per-orbiter restitution range
    pub tangential_factor: [f64; 2], // scale on the circular-orbit speed
    pub radial_factor: f64,         // radial velocity as fraction of v_circ
    pub radius_per_mass: f64,       // disc radius = mass * radius_per_mass
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,
    pub parameters: ParametersConfig,
    pub population: PopulationConfig,
}

impl ScenarioConfig {
    /// Fail-fast validation. A configuration that passes here can never
    /// produce a zero or negative mass, a non-positive timestep, or a
    /// restitution outside [0, 1] at runtime.
    pub fn validate(&self) -> Result<()> {
        let p = &self.parameters;
        ensure!(p.dt > 0.0, "dt must be positive, got {}", p.dt);
        ensure!(p.sim_speed > 0.0, "sim_speed must be positive");
        ensure!(
            p.max_accumulator >= p.dt,
            "max_accumulator ({}) must cover at least one step ({})",
            p.max_accumulator,
            p.dt
        );
        ensure!(p.softening >= 0.0, "softening must be non-negative");
        ensure!(p.collision_slop >= 0.0, "collision_slop must be non-negative");
        ensure!(
            p.collision_percent > 0.0 && p.collision_percent <= 1.0,
            "collision_percent must be in (0, 1], got {}",
            p.collision_percent
        );

        let pop = &self.population;
        ensure!(pop.bodies >= 1, "population must contain at least one body");
        ensure!(pop.anchor_mass > 0.0, "anchor_mass must be positive");
        ensure!(pop.anchor_radius >= 0.0, "anchor_radius must be non-negative");
        ensure!(
            (0.0..=1.0).contains(&pop.anchor_restitution),
            "anchor_restitution must be in [0, 1]"
        );

        for (name, range) in [
            ("orbit_radius", pop.orbit_radius),
            ("mass", pop.mass),
            ("restitution", pop.restitution),
            ("tangential_factor", pop.tangential_factor),
        ] {
            ensure!(
                range[0] <= range[1],
                "{} range [{}, {}] is not ordered",
                name,
                range[0],
                range[1]
            );
        }
        ensure!(pop.mass[0] > 0.0, "mass range must be strictly positive");
        ensure!(pop.orbit_radius[0] > 0.0, "orbit_radius range must be positive");
        ensure!(
            pop.restitution[0] >= 0.0 && pop.restitution[1] <= 1.0,
            "restitution range must lie within [0, 1]"
        );
        ensure!(pop.radius_per_mass >= 0.0, "radius_per_mass must be non-negative");

        Ok(())
    }
}
