//! Core state types for the N-body simulation.
//!
//! Defines the 2D body/system structs used by every other component:
//! - `Body` with position, velocity, mass, disc radius and restitution
//! - `System` holding the list of bodies and the current simulation time `t`
//!
//! Vector math is `nalgebra`'s `Vector2<f64>`, aliased as `NVec2`.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// Length below which [`safe_normalize`] returns the zero vector.
pub const NORMALIZE_EPS: f64 = 1e-10;

/// Normalize `v`, returning the zero vector when `v` is too short to carry
/// a meaningful direction. Callers must not assume the result has unit
/// length; a near-zero input never produces NaN/Inf.
pub fn safe_normalize(v: NVec2) -> NVec2 {
    v.try_normalize(NORMALIZE_EPS).unwrap_or_else(NVec2::zeros)
}

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub m: f64, // mass, always > 0
    pub radius: f64, // disc radius for collisions and rendering
    pub restitution: f64, // elasticity in [0, 1]
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // collection of bodies
    pub t: f64, // time
}

impl System {
    /// True while every body still has finite position and velocity.
    /// A NaN anywhere poisons the gravitational sums of every other body,
    /// so the engine checks this after stepping and logs when state went bad.
    pub fn all_finite(&self) -> bool {
        self.bodies
            .iter()
            .all(|b| b.x.iter().all(|c| c.is_finite()) && b.v.iter().all(|c| c.is_finite()))
    }
}
