//! Pairwise disc collision detection and resolution
//!
//! Two overlapping discs get an impulse-based velocity correction
//! (1D restitution along the contact normal, tangential components kept)
//! followed by a positional de-penetration scaled by inverse mass.
//!
//! The pass is stateless: every tick re-detects contacts from scratch in
//! canonical ascending (i, j > i) order. The order matters numerically when
//! a body overlaps several others in the same tick, so it is fixed here.

use crate::simulation::states::{Body, NVec2, System};

/// Separation below which the contact normal is undefined and the pair
/// is skipped entirely rather than dividing by zero.
const DEGENERATE_DIST: f64 = 1e-10;

/// Resolves disc overlaps with impulse + positional correction
pub struct CollisionResolver {
    pub slop: f64, // penetration depth tolerated without correction
    pub percent: f64, // fraction of the remaining overlap corrected per pass
}

impl CollisionResolver {
    pub fn new(slop: f64, percent: f64) -> Self {
        Self { slop, percent }
    }

    /// Detect and resolve every overlapping pair in `sys`, mutating
    /// velocities (impulse) and positions (de-penetration) in place.
    pub fn resolve(&self, sys: &mut System) {
        let n = sys.bodies.len();
        for i in 0..n {
            for j in (i + 1)..n {
                // Two disjoint &mut into the body list
                let (head, tail) = sys.bodies.split_at_mut(j);
                let bi = &mut head[i];
                let bj = &mut tail[0];

                // A zero-radius body exerts gravity but never collides
                if bi.radius <= 0.0 || bj.radius <= 0.0 {
                    continue;
                }

                let delta = bj.x - bi.x;
                let radius_sum = bi.radius + bj.radius;
                let dist2 = delta.dot(&delta);
                if dist2 > radius_sum * radius_sum {
                    continue;
                }

                let dist = dist2.sqrt();
                if dist < DEGENERATE_DIST {
                    // Coincident centers: no usable contact normal
                    continue;
                }
                let normal = delta / dist;

                Self::resolve_impulse(bi, bj, normal);
                // Positional correction applies whenever overlapping, even
                // when the impulse was skipped for a separating pair
                self.separate_overlap(bi, bj, normal, dist);
            }
        }
    }

    /// Impulse resolution along the contact normal `n` (pointing i -> j).
    ///
    /// Velocities are decomposed into tangential (kept) and normal
    /// (replaced) components; the new normal speeds come from the 1D
    /// restitution formula with `e = min(e_i, e_j)`.
    fn resolve_impulse(bi: &mut Body, bj: &mut Body, normal: NVec2) {
        debug_assert!(bi.m > 0.0 && bj.m > 0.0);

        let v1 = bi.v.dot(&normal);
        let v2 = bj.v.dot(&normal);

        // Only resolve approaching pairs. Touching a pair that is already
        // separating along the normal would add energy to the system.
        if v1 - v2 <= 0.0 {
            return;
        }

        let e = bi.restitution.min(bj.restitution);

        let p1 = bi.m * v1;
        let p2 = bj.m * v2;
        let mass_sum = bi.m + bj.m;

        // v' = (1 + e)(p1 + p2) / (m1 + m2) - e * v
        let v1_after = (1.0 + e) * (p1 + p2) / mass_sum - e * v1;
        let v2_after = (1.0 + e) * (p1 + p2) / mass_sum - e * v2;

        let t1 = bi.v - v1 * normal;
        let t2 = bj.v - v2 * normal;

        bi.v = t1 + v1_after * normal;
        bj.v = t2 + v2_after * normal;
    }

    /// Baumgarte-style positional correction: push the pair apart along the
    /// normal by `percent` of the penetration beyond `slop`, split by
    /// inverse mass so the heavier body moves less.
    fn separate_overlap(&self, bi: &mut Body, bj: &mut Body, normal: NVec2, dist: f64) {
        let penetration = (bi.radius + bj.radius) - dist;
        debug_assert!(penetration >= 0.0);

        let inv_m1 = 1.0 / bi.m;
        let inv_m2 = 1.0 / bj.m;

        let corr_mag = self.percent * (penetration - self.slop).max(0.0) / (inv_m1 + inv_m2);
        let correction = corr_mag * normal;

        bi.x -= inv_m1 * correction;
        bj.x += inv_m2 * correction;
    }
}
