//! Path: game_simulation/src/game_logic/systems/instances.rs
//! Summary: 武器インスタンスの移動・寿命管理と対敵衝突解決

use game_core::entity_params::KinematicMode;
use game_core::physics::shapes::{circle_hits_circle, sweep_rect_hits_circle};

use crate::world::{FrameEvent, GameWorld};

/// 最大敵半径ぶんの余白を足したクエリ半径を使う
const ENEMY_RADIUS_MARGIN: f32 = 64.0;

/// 武器インスタンスを移動・寿命更新する。寿命切れはこのティックの
/// 衝突判定より先に除去される。
///
/// 生成されたティックのインスタンスは位置を動かさない — 発射時の位置のまま
/// 同ティックの衝突判定を受ける。
pub(crate) fn update_instances(w: &mut GameWorld, dt: f32) {
    let px = w.player.x;
    let py = w.player.y;

    let len = w.instances.len();
    for i in 0..len {
        if !w.instances.alive[i] {
            continue;
        }
        let first_tick = w.instances.age[i] == 0.0;
        if !first_tick {
            match w.instances.mode[i] {
                KinematicMode::Homing | KinematicMode::Linear => {
                    w.instances.positions_x[i] += w.instances.velocities_x[i] * dt;
                    w.instances.positions_y[i] += w.instances.velocities_y[i] * dt;
                }
                KinematicMode::Boomerang => {
                    // 寿命の後半に入った瞬間、速度を発射元方向へ反転する
                    if !w.instances.returning[i]
                        && w.instances.age[i] >= w.instances.lifetime[i] * 0.5
                    {
                        let vx = w.instances.velocities_x[i];
                        let vy = w.instances.velocities_y[i];
                        let speed = (vx * vx + vy * vy).sqrt();
                        let dx = w.instances.origin_x[i] - w.instances.positions_x[i];
                        let dy = w.instances.origin_y[i] - w.instances.positions_y[i];
                        let dist = (dx * dx + dy * dy).sqrt();
                        if dist > 0.001 {
                            w.instances.velocities_x[i] = (dx / dist) * speed;
                            w.instances.velocities_y[i] = (dy / dist) * speed;
                        } else {
                            w.instances.velocities_x[i] = -vx;
                            w.instances.velocities_y[i] = -vy;
                        }
                        w.instances.returning[i] = true;
                    }
                    w.instances.positions_x[i] += w.instances.velocities_x[i] * dt;
                    w.instances.positions_y[i] += w.instances.velocities_y[i] * dt;
                }
                KinematicMode::Orbital => {
                    // 毎ティック: 中心 = プレイヤー現在地、角度を進めて位置を再計算
                    w.instances.angle[i] += w.instances.angular_speed[i] * dt;
                    let a = w.instances.angle[i];
                    let r = w.instances.radius[i];
                    w.instances.positions_x[i] = px + a.cos() * r;
                    w.instances.positions_y[i] = py + a.sin() * r;
                }
                KinematicMode::Aura => {
                    // オーラはプレイヤーに追従する
                    w.instances.positions_x[i] = px;
                    w.instances.positions_y[i] = py;
                }
                KinematicMode::Sweep => {}
            }
        }
        w.instances.age[i] += dt;
        if w.instances.age[i] >= w.instances.lifetime[i] {
            w.instances.kill(i);
        }
    }
}

/// 全ての生存インスタンス × 近傍の生存敵で当たり判定を解決する。
/// 1 ティック内で同じ敵が同じインスタンスに二度判定されることはなく、
/// 貫通上限に達したインスタンスはそのティックの残りの敵に当たらない。
pub(crate) fn resolve_instance_hits(w: &mut GameWorld) {
    let len = w.instances.len();
    let mut nearby: Vec<usize> = Vec::new();

    for ii in 0..len {
        if !w.instances.alive[ii] {
            continue;
        }
        let mode = w.instances.mode[ii];
        let ix = w.instances.positions_x[ii];
        let iy = w.instances.positions_y[ii];
        let size = w.instances.size[ii];

        // スイープは基点から range ぶん伸びるためクエリ半径を広げる
        let query_r = match mode {
            KinematicMode::Sweep => w.instances.radius[ii] + ENEMY_RADIUS_MARGIN,
            _ => size + ENEMY_RADIUS_MARGIN,
        };
        let (qx, qy) = match mode {
            KinematicMode::Sweep => (w.instances.origin_x[ii], w.instances.origin_y[ii]),
            _ => (ix, iy),
        };
        w.collision.query_nearby_into(qx, qy, query_r, &mut nearby);

        for &ei in &nearby {
            if !w.enemies.alive[ei] {
                continue;
            }
            // 同一インスタンスは同じ敵に生涯一度しかダメージを与えない
            if w.instances.hit_ids[ii].contains(&ei) {
                continue;
            }
            let Some(ep) = w.params.enemy(w.enemies.kind_ids[ei]) else {
                continue;
            };
            let enemy_r = ep.radius;
            let ex = w.enemies.positions_x[ei];
            let ey = w.enemies.positions_y[ei];

            let hit = match mode {
                KinematicMode::Sweep => sweep_rect_hits_circle(
                    w.instances.origin_x[ii],
                    w.instances.origin_y[ii],
                    w.instances.angle[ii],
                    w.instances.radius[ii],
                    size,
                    ex,
                    ey,
                    enemy_r,
                ),
                _ => circle_hits_circle(ix, iy, size, ex, ey, enemy_r),
            };
            if !hit {
                continue;
            }

            let dmg = w.instances.damage[ii];
            w.enemies.hp[ei] -= dmg;
            w.instances.hit_ids[ii].push(ei);
            w.instances.pierce_count[ii] += 1;

            if w.enemies.hp[ei] <= 0.0 {
                kill_enemy(w, ei, w.instances.kind_ids[ii]);
            } else {
                let color = w
                    .params
                    .enemy(w.enemies.kind_ids[ei])
                    .map(|p| p.color)
                    .unwrap_or([1.0, 0.9, 0.3, 1.0]);
                w.particles.emit(ex, ey, 3, color);
            }

            // 貫通上限に達したら除去（上限を使い切った敵にはもう当たらない）
            if w.instances.pierce_count[ii] >= w.instances.pierce_limit[ii] {
                w.instances.kill(ii);
                break;
            }
        }
    }
}

/// 敵の死亡処理: 除去・撃破カウント・イベント・パーティクル・EXP ピックアップ生成
pub(crate) fn kill_enemy(w: &mut GameWorld, ei: usize, weapon_kind: u8) {
    let kind = w.enemies.kind_ids[ei];
    let ex = w.enemies.positions_x[ei];
    let ey = w.enemies.positions_y[ei];
    let Some(ep) = w.params.enemy(kind) else {
        w.enemies.kill(ei);
        return;
    };
    let color = ep.color;
    let mut value = ep.exp_reward;

    w.enemies.kill(ei);
    w.kill_count += 1;
    w.frame_events.push(FrameEvent::EnemyKilled {
        enemy_kind: kind,
        weapon_kind,
    });
    w.particles.emit(ex, ey, 8, color);

    // luck 倍率の超過分を、報酬 2 倍の抽選確率として使う
    let bonus_chance = (w.player.stats.luck - 1.0).max(0.0);
    if bonus_chance > 0.0 && w.rng.next_f32() < bonus_chance {
        value *= 2;
    }
    w.pickups.spawn(ex, ey, value);
}
