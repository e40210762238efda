//! Fixed-step time integration
//!
//! Semi-implicit (symplectic) Euler: the velocity update runs first and the
//! position update uses the already-updated velocity. That ordering is what
//! keeps orbits stable over long runs compared to explicit Euler.

use super::states::{NVec2, System};

/// Advance every body in `sys` by one fixed step `dt` given accelerations
/// already accumulated for this tick. Cannot fail on finite inputs.
pub fn semi_implicit_euler(sys: &mut System, accels: &[NVec2], dt: f64) {
    debug_assert_eq!(sys.bodies.len(), accels.len());

    for (b, a) in sys.bodies.iter_mut().zip(accels.iter()) {
        // v_n+1 = v_n + a_n * dt
        b.v += *a * dt;
        // x_n+1 = x_n + v_n+1 * dt  (updated velocity)
        b.x += b.v * dt;
    }

    sys.t += dt;
}
