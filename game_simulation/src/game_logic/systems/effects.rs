//! Path: game_simulation/src/game_logic/systems/effects.rs
//! Summary: パーティクルの移動・減衰

use crate::world::GameWorld;

pub(crate) fn update_particles(w: &mut GameWorld, dt: f32) {
    let plen = w.particles.len();
    for i in 0..plen {
        if !w.particles.alive[i] {
            continue;
        }
        w.particles.positions_x[i] += w.particles.velocities_x[i] * dt;
        w.particles.positions_y[i] += w.particles.velocities_y[i] * dt;
        w.particles.velocities_y[i] += 200.0 * dt;
        w.particles.age[i] += dt;
        if w.particles.age[i] >= w.particles.lifetime[i] {
            w.particles.kill(i);
        }
    }
}
