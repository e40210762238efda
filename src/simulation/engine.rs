//! Fixed-timestep simulation driver
//!
//! `Engine` owns the time accumulator that decouples the variable rendering
//! frame rate from the constant physics step. Per frame the caller hands it
//! the elapsed wall time; the engine then runs zero or more fixed steps,
//! each a strict Force -> Collision -> Integrate sequence.

use crate::simulation::collisions::CollisionResolver;
use crate::simulation::forces::AccelSet;
use crate::simulation::integrator::semi_implicit_euler;
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec2, System};

pub struct Engine {
    accumulator: f64, // seconds of unsimulated time
    paused: bool,
    accels: Vec<NVec2>, // per-tick scratch, reused across steps
    warned_non_finite: bool,
}

impl Engine {
    pub fn new(n_bodies: usize) -> Self {
        Self {
            accumulator: 0.0,
            paused: false,
            accels: vec![NVec2::zeros(); n_bodies],
            warned_non_finite: false,
        }
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    /// Pausing freezes accumulation and stepping entirely; the accumulator
    /// and body state are left untouched so resuming continues exactly
    /// where the run left off.
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    /// Advance physics by exactly one fixed step.
    pub fn step(
        &mut self,
        sys: &mut System,
        forces: &AccelSet,
        collisions: &CollisionResolver,
        params: &Parameters,
    ) {
        self.accels.resize(sys.bodies.len(), NVec2::zeros());
        // The force pass may fan out over worker threads but has fully
        // joined by the time accumulate_accels returns; collision resolution
        // always observes a complete acceleration buffer.
        forces.accumulate_accels(sys.t, sys, &mut self.accels);
        collisions.resolve(sys);
        semi_implicit_euler(sys, &self.accels, params.dt);
    }

    /// Per-frame entry point: fold `frame_dt` seconds of wall time into the
    /// accumulator and run as many fixed steps as it covers. Returns the
    /// number of steps executed.
    ///
    /// The accumulator is clamped to `params.max_accumulator` so a stall
    /// (hitch, debugger pause) can never trigger an unbounded catch-up
    /// burst. Output depends only on the sequence of `frame_dt` values.
    pub fn advance(
        &mut self,
        sys: &mut System,
        forces: &AccelSet,
        collisions: &CollisionResolver,
        params: &Parameters,
        frame_dt: f64,
    ) -> u32 {
        if self.paused {
            return 0;
        }

        self.accumulator += frame_dt * params.sim_speed;
        if self.accumulator > params.max_accumulator {
            log::debug!(
                "accumulator clamped, dropping {:.3}s of unsimulated time",
                self.accumulator - params.max_accumulator
            );
            self.accumulator = params.max_accumulator;
        }

        let mut ticks = 0;
        while self.accumulator >= params.dt {
            self.step(sys, forces, collisions, params);
            self.accumulator -= params.dt;
            ticks += 1;
        }

        if ticks > 0 && !self.warned_non_finite && !sys.all_finite() {
            self.warned_non_finite = true;
            log::warn!("non-finite body state detected at t = {:.3}", sys.t);
        }

        ticks
    }
}
