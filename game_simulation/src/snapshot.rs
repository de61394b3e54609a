//! Path: game_simulation/src/snapshot.rs
//! Summary: GameWorld から読み取り専用フレームスナップショットを構築
//!
//! ホスト（描画・UI）にはワールドへの参照を渡さず、必要なデータを
//! SimFrame にコピーして所有権ごと渡す。

use game_core::entity_params::KinematicMode;
use game_core::util::exp_required_for_next;

use crate::world::{GamePhase, GameWorld, UpgradeOption};

#[derive(Clone, Debug)]
pub struct PlayerFrame {
    pub x:            f32,
    pub y:            f32,
    pub facing_angle: f32,
    pub hp:           f32,
    pub max_hp:       f32,
    pub level:        u32,
    pub exp:          u32,
    /// 次のレベルまでの残り EXP
    pub exp_to_next:  u32,
}

#[derive(Clone, Debug)]
pub struct EnemyFrame {
    pub x:      f32,
    pub y:      f32,
    pub hp:     f32,
    pub max_hp: f32,
    pub radius: f32,
    pub color:  [f32; 4],
}

#[derive(Clone, Debug)]
pub struct InstanceFrame {
    pub mode: KinematicMode,
    pub x:    f32,
    pub y:    f32,
    pub size: f32,
}

#[derive(Clone, Debug)]
pub struct PickupFrame {
    pub x:     f32,
    pub y:     f32,
    pub value: u32,
}

#[derive(Clone, Debug)]
pub struct ParticleFrame {
    pub x:     f32,
    pub y:     f32,
    pub size:  f32,
    pub color: [f32; 4],
    pub alpha: f32,
}

/// 1 フレーム分の読み取り専用スナップショット
#[derive(Clone, Debug)]
pub struct SimFrame {
    pub phase:           GamePhase,
    pub elapsed_seconds: f32,
    pub player:          PlayerFrame,
    pub enemies:         Vec<EnemyFrame>,
    pub instances:       Vec<InstanceFrame>,
    pub pickups:         Vec<PickupFrame>,
    pub particles:       Vec<ParticleFrame>,
    /// LevelUp 中のみ 3 件。それ以外は空
    pub offers:          Vec<UpgradeOption>,
}

/// GameWorld から SimFrame を構築する
pub fn build_sim_frame(w: &GameWorld) -> SimFrame {
    let exp_to_next =
        exp_required_for_next(w.player.level, &w.params.level_exp).saturating_sub(w.player.exp);
    let player = PlayerFrame {
        x:            w.player.x,
        y:            w.player.y,
        facing_angle: w.player.facing_angle,
        hp:           w.player.hp,
        max_hp:       w.player.max_hp,
        level:        w.player.level,
        exp:          w.player.exp,
        exp_to_next,
    };

    let mut enemies = Vec::with_capacity(w.enemies.count);
    for i in 0..w.enemies.len() {
        if !w.enemies.alive[i] {
            continue;
        }
        let Some(ep) = w.params.enemy(w.enemies.kind_ids[i]) else {
            continue;
        };
        enemies.push(EnemyFrame {
            x:      w.enemies.positions_x[i],
            y:      w.enemies.positions_y[i],
            hp:     w.enemies.hp[i],
            max_hp: ep.max_hp,
            radius: ep.radius,
            color:  ep.color,
        });
    }

    let mut instances = Vec::with_capacity(w.instances.count);
    for i in 0..w.instances.len() {
        if w.instances.alive[i] {
            instances.push(InstanceFrame {
                mode: w.instances.mode[i],
                x:    w.instances.positions_x[i],
                y:    w.instances.positions_y[i],
                size: w.instances.size[i],
            });
        }
    }

    let mut pickups = Vec::with_capacity(w.pickups.count);
    for i in 0..w.pickups.len() {
        if w.pickups.alive[i] {
            pickups.push(PickupFrame {
                x:     w.pickups.positions_x[i],
                y:     w.pickups.positions_y[i],
                value: w.pickups.value[i],
            });
        }
    }

    let mut particles = Vec::with_capacity(w.particles.count);
    for i in 0..w.particles.len() {
        if !w.particles.alive[i] {
            continue;
        }
        let alpha = (1.0 - w.particles.age[i] / w.particles.lifetime[i]).clamp(0.0, 1.0);
        particles.push(ParticleFrame {
            x:     w.particles.positions_x[i],
            y:     w.particles.positions_y[i],
            size:  w.particles.size[i],
            color: w.particles.color[i],
            alpha,
        });
    }

    SimFrame {
        phase:           w.phase,
        elapsed_seconds: w.elapsed_seconds,
        player,
        enemies,
        instances,
        pickups,
        particles,
        offers: if w.phase == GamePhase::LevelUp {
            w.pending_offers.clone()
        } else {
            Vec::new()
        },
    }
}
