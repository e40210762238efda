//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - active force set (`AccelSet`) and collision resolver
//! - the fixed-step engine
//!
//! The initial population is one heavy anchor body at the origin plus
//! N-1 bodies on randomized near-circular orbits around it, drawn from a
//! seeded RNG so the layout is reproducible per seed.

use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::configuration::config::ScenarioConfig;
use crate::simulation::collisions::CollisionResolver;
use crate::simulation::engine::Engine;
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System};

/// A fully-initialized simulation: parameters, state, force set, collision
/// resolver and the fixed-step engine, bundled for the run loop.
pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
    pub forces: AccelSet,
    pub collisions: CollisionResolver,
    pub engine: Engine,
}

impl Scenario {
    /// Validate `cfg` and build the runtime bundle. Configuration
    /// violations are rejected here, before the loop ever starts.
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        cfg.validate()?;

        let p_cfg = &cfg.parameters;
        let parameters = Parameters {
            dt: p_cfg.dt,
            sim_speed: p_cfg.sim_speed,
            max_accumulator: p_cfg.max_accumulator,
            g: p_cfg.g,
            eps2: p_cfg.softening * p_cfg.softening,
            collision_slop: p_cfg.collision_slop,
            collision_percent: p_cfg.collision_percent,
            seed: p_cfg.seed,
        };

        let pop = &cfg.population;
        let mut rng = StdRng::seed_from_u64(parameters.seed);
        let mut bodies = Vec::with_capacity(pop.bodies);

        // Body 0: heavy anchor at the origin, at rest
        bodies.push(Body {
            x: NVec2::zeros(),
            v: NVec2::zeros(),
            m: pop.anchor_mass,
            radius: pop.anchor_radius,
            restitution: pop.anchor_restitution,
        });

        for _ in 1..pop.bodies {
            let r = rng.gen_range(pop.orbit_radius[0]..=pop.orbit_radius[1]);
            let a = rng.gen_range(0.0..std::f64::consts::TAU);

            // Radial and tangential unit vectors at angle `a`
            let er = NVec2::new(a.cos(), a.sin());
            let et = NVec2::new(-er.y, er.x);

            let m = rng.gen_range(pop.mass[0]..=pop.mass[1]);
            let restitution = rng.gen_range(pop.restitution[0]..=pop.restitution[1]);

            // Circular-orbit speed around the anchor at radius r, scaled by
            // a random tangential factor slightly below 1 so orbits decay
            // slowly inward instead of dispersing
            let v_circ = (parameters.g * pop.anchor_mass / r).sqrt();
            let tangential = rng.gen_range(pop.tangential_factor[0]..=pop.tangential_factor[1]);

            bodies.push(Body {
                x: r * er,
                v: (v_circ * tangential) * et + (pop.radial_factor * v_circ) * er,
                m,
                // Disc radius proportional to mass; the factor is a policy
                // knob in the config, not a physical law
                radius: m * pop.radius_per_mass,
                restitution,
            });
        }

        let system = System { bodies, t: 0.0 };

        let forces = AccelSet::new().with(NewtonianGravity {
            g: parameters.g,
            eps2: parameters.eps2,
            parallel: cfg.engine.parallel,
        });
        let collisions = CollisionResolver::new(parameters.collision_slop, parameters.collision_percent);
        let engine = Engine::new(system.bodies.len());

        Ok(Self {
            parameters,
            system,
            forces,
            collisions,
            engine,
        })
    }

    /// Advance physics by exactly one fixed step.
    pub fn step(&mut self) {
        let Self {
            parameters,
            system,
            forces,
            collisions,
            engine,
        } = self;
        engine.step(system, forces, collisions, parameters);
    }

    /// Per-frame entry point; see [`Engine::advance`]. Returns the number
    /// of physics ticks executed.
    pub fn advance(&mut self, frame_dt: f64) -> u32 {
        let Self {
            parameters,
            system,
            forces,
            collisions,
            engine,
        } = self;
        engine.advance(system, forces, collisions, parameters, frame_dt)
    }

    pub fn paused(&self) -> bool {
        self.engine.paused()
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.engine.set_paused(paused);
    }

    /// Read-only view for the render boundary (positions and radii at
    /// minimum); physics never runs while the renderer holds this.
    pub fn system(&self) -> &System {
        &self.system
    }
}
