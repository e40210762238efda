//! Force / acceleration contributors for the n-body engine
//!
//! Defines the acceleration trait and direct Newtonian gravity with
//! softening, in serial (pair-symmetric) and parallel (chunked) variants.

use crate::simulation::states::{NVec2, System};
use rayon::prelude::*;

/// Collection of acceleration terms (gravity, drag, etc.)
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations at time `t` for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, t: f64, sys: &System, out: &mut [NVec2]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        // Iterate over all acceleration contributors
        for term in &self.terms {
            term.acceleration(t, sys, out);
        }
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for acceleration sources operating on [`System`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, t: f64, sys: &System, out: &mut [NVec2]);
}

/// Direct O(n^2) Newtonian gravity with softening
///
/// The softened squared separation is `|r|^2 + eps2`, which keeps the
/// force finite as two bodies approach coincidence. With `eps2 == 0`
/// an exactly coincident pair is skipped instead of producing Inf.
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
    pub eps2: f64, // squared softening length
    pub parallel: bool, // fan the per-body sums out over the rayon pool
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, _t: f64, sys: &System, out: &mut [NVec2]) {
        if sys.bodies.len() < 2 {
            return;
        }
        if self.parallel {
            self.accumulate_chunked(sys, out);
        } else {
            self.accumulate_pairwise(sys, out);
        }
    }
}

impl NewtonianGravity {
    /// Serial path: each unordered pair (i, j) with i < j is evaluated once
    /// and applied with equal-and-opposite contributions (Newton's third law).
    fn accumulate_pairwise(&self, sys: &System, out: &mut [NVec2]) {
        let n = sys.bodies.len();
        for i in 0..n {
            let bi = &sys.bodies[i];
            let xi = bi.x;
            let mi = bi.m;

            for j in (i + 1)..n {
                let bj = &sys.bodies[j];

                // r points from i to j: i is pulled along +r, j along -r
                let r = bj.x - xi;
                let r2 = r.dot(&r);
                if r2 == 0.0 && self.eps2 == 0.0 {
                    // Coincident pair without softening has no defined force
                    continue;
                }

                // Softened squared distance: d2 = |r|^2 + eps2
                let d2 = r2 + self.eps2;

                // a = G * m * r / |r_soft|^3
                let inv_r = d2.sqrt().recip();
                let inv_r3 = inv_r * inv_r * inv_r;
                let coef = self.g * inv_r3;

                out[i] += coef * bj.m * r;
                out[j] -= coef * mi * r;
            }
        }
    }

    /// Parallel path: the acceleration buffer is split into contiguous
    /// chunks, one per worker. Each worker reads the whole body list but
    /// writes only its own chunk, so the writes are disjoint and need no
    /// locking. All workers have completed when this returns.
    ///
    /// Each body's sum runs over all others in ascending index order, so the
    /// result does not depend on how many workers the pool happens to have.
    fn accumulate_chunked(&self, sys: &System, out: &mut [NVec2]) {
        let n = sys.bodies.len();
        let workers = rayon::current_num_threads().max(1);
        let chunk = (n + workers - 1) / workers;

        out.par_chunks_mut(chunk).enumerate().for_each(|(c, accels)| {
            let start = c * chunk;
            for (k, a) in accels.iter_mut().enumerate() {
                let i = start + k;
                let bi = &sys.bodies[i];
                let mut sum = NVec2::zeros();

                for (j, bj) in sys.bodies.iter().enumerate() {
                    if j == i {
                        continue;
                    }
                    let r = bj.x - bi.x;
                    let r2 = r.dot(&r);
                    if r2 == 0.0 && self.eps2 == 0.0 {
                        continue;
                    }
                    let d2 = r2 + self.eps2;
                    let inv_r = d2.sqrt().recip();
                    sum += (self.g * bj.m * inv_r * inv_r * inv_r) * r;
                }

                *a += sum;
            }
        });
    }
}
