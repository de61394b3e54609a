//! Path: game_simulation/src/game_logic/systems/pickups.rs
//! Summary: EXP ピックアップの吸引・吸収とレベルアップ判定

use crate::world::{FrameEvent, GameWorld};

use super::leveling::check_level_up;

/// ピックアップ更新: 吸引半径内は一定速度でプレイヤーへ向かい、
/// 吸収半径内は（吸引の有無と無関係に）即座に吸収される。
/// 吸収 1 回につきレベルアップ判定を 1 回だけ行う。
pub(crate) fn update_pickups(w: &mut GameWorld, dt: f32) {
    let px = w.player.x;
    let py = w.player.y;
    let attract_r = w.config.pickup_attract_radius;
    let absorb_r = w.config.pickup_absorb_radius;
    let attract_speed = w.config.pickup_attract_speed;

    let len = w.pickups.len();
    for i in 0..len {
        if !w.pickups.alive[i] {
            continue;
        }
        let dx = px - w.pickups.positions_x[i];
        let dy = py - w.pickups.positions_y[i];
        let dist = (dx * dx + dy * dy).sqrt();

        if dist <= absorb_r {
            absorb(w, i);
            continue;
        }

        if dist <= attract_r && dist > 0.001 {
            let step = attract_speed * dt;
            if step >= dist {
                // 1 ステップで届くならプレイヤー位置に吸着して吸収
                w.pickups.positions_x[i] = px;
                w.pickups.positions_y[i] = py;
                absorb(w, i);
            } else {
                w.pickups.positions_x[i] += (dx / dist) * step;
                w.pickups.positions_y[i] += (dy / dist) * step;
            }
        }
    }
}

fn absorb(w: &mut GameWorld, i: usize) {
    let value = w.pickups.value[i];
    w.player.exp += value;
    w.frame_events.push(FrameEvent::PickupAbsorbed { value });
    w.pickups.kill(i);
    // 吸収 1 回につき判定は 1 回。1 吸収で複数しきい値を跨いでも
    // レベルアップは 1 段だけ発生する（超過分の EXP は持ち越し）。
    check_level_up(w);
}
