//! Path: game_simulation/src/game_logic/sim_step.rs
//! Summary: フレームステップ内部実装（固定サブシステム順・終端判定）

use game_core::constants::{
    ENEMY_SEPARATION_FORCE, ENEMY_SEPARATION_RADIUS, PLAYER_RADIUS,
};
use game_core::physics::separation::apply_separation;

use super::chase_ai::update_chase_ai;
use super::systems::effects::update_particles;
use super::systems::instances::{resolve_instance_hits, update_instances};
use super::systems::pickups::update_pickups;
use super::systems::spawn::try_spawn;
use super::systems::weapons::update_weapon_attacks;
use crate::world::{FrameEvent, GamePhase, GameWorld, RunOutcome, RunReport};

/// 1 フレーム分の内部実装。サブシステムは固定順で実行される:
/// 武器発射 → 敵移動・接触ダメージ → インスタンス移動 → 衝突解決
/// → ピックアップ吸収 → パーティクル減衰 → スポーン試行。
/// このフレームで発射されたインスタンスは発射位置のまま同フレームの
/// 衝突解決の対象になる。
pub(crate) fn sim_step_inner(w: &mut GameWorld, dt: f32) {
    if w.phase != GamePhase::Playing {
        return;
    }
    log::trace!("sim_step: dt={}s frame_id={}", dt, w.frame_id);

    w.frame_id += 1;
    w.elapsed_seconds += dt;

    // ── 生存時間が規定に達した瞬間に勝利（同ティックの接触より優先）──
    if w.elapsed_seconds >= w.config.survive_duration {
        finish_run(w, RunOutcome::Victory);
        return;
    }

    // ── プレイヤー移動・向き ────────────────────────────────────
    let dx = w.player.input_dx;
    let dy = w.player.input_dy;
    let len = (dx * dx + dy * dy).sqrt();
    if len > 0.001 {
        // 斜め移動を正規化して速度を一定に保つ
        let nx = dx / len;
        let ny = dy / len;
        w.player.x += nx * w.player.move_speed * dt;
        w.player.y += ny * w.player.move_speed * dt;
        w.player.dir_x = nx;
        w.player.dir_y = ny;
        w.player.facing_angle = ny.atan2(nx);
    }

    // HP 自然回復
    if w.player.stats.health_regen > 0.0 {
        w.player.hp = (w.player.hp + w.player.stats.health_regen * dt).min(w.player.max_hp);
    }

    // ── 武器スロット発射処理 ────────────────────────────────────
    update_weapon_attacks(w, dt);

    // ── 敵移動（Chase AI + 分離パス）───────────────────────────
    let px = w.player.x;
    let py = w.player.y;
    update_chase_ai(&mut w.enemies, px, py, dt);
    apply_separation(&mut w.enemies, ENEMY_SEPARATION_RADIUS, ENEMY_SEPARATION_FORCE, dt);
    w.rebuild_collision();

    // ── 敵 vs プレイヤー接触ダメージ ────────────────────────────
    // 重なりが続く限り毎ティック適用する（無敵時間なし）
    let mut candidates: Vec<usize> = Vec::new();
    let max_enemy_r = 64.0_f32;
    w.collision
        .query_nearby_into(px, py, PLAYER_RADIUS + max_enemy_r, &mut candidates);
    for &ei in &candidates {
        if !w.enemies.alive[ei] {
            continue;
        }
        let Some(ep) = w.params.enemy(w.enemies.kind_ids[ei]) else {
            continue;
        };
        let hit_r = PLAYER_RADIUS + ep.radius;
        let ddx = px - w.enemies.positions_x[ei];
        let ddy = py - w.enemies.positions_y[ei];
        if ddx * ddx + ddy * ddy >= hit_r * hit_r {
            continue;
        }
        if w.player.hp <= 0.0 {
            break;
        }
        let dmg = ep.damage_per_sec * dt * (1.0 - w.player.stats.defense);
        w.player.hp = (w.player.hp - dmg).max(0.0);
        w.frame_events.push(FrameEvent::PlayerDamaged { damage: dmg });
        w.particles.emit(px, py, 6, [1.0, 0.15, 0.15, 1.0]);
    }
    if w.player.hp <= 0.0 {
        finish_run(w, RunOutcome::Defeat);
        return;
    }

    // ── インスタンス移動 + 寿命（衝突解決より先に除去）──────────
    update_instances(w, dt);

    // ── インスタンス vs 敵 衝突解決 ─────────────────────────────
    resolve_instance_hits(w);

    // ── ピックアップ吸引・吸収（レベルアップ判定を含む）────────
    update_pickups(w, dt);
    if w.phase == GamePhase::LevelUp {
        // 選択が届くまでクロックは論理停止
        return;
    }

    // ── パーティクル減衰 ────────────────────────────────────────
    update_particles(w, dt);

    // ── スポーン試行 ────────────────────────────────────────────
    try_spawn(w);
}

/// 終端遷移: フェーズ確定・最終レポート構築・イベント発行。以後のティックは no-op。
fn finish_run(w: &mut GameWorld, outcome: RunOutcome) {
    w.phase = match outcome {
        RunOutcome::Defeat  => GamePhase::GameOver,
        RunOutcome::Victory => GamePhase::Victory,
    };
    w.frame_events.push(match outcome {
        RunOutcome::Defeat  => FrameEvent::GameOver,
        RunOutcome::Victory => FrameEvent::Victory,
    });
    w.report = Some(RunReport {
        survived_seconds: w.elapsed_seconds,
        level:            w.player.level,
        kill_count:       w.kill_count,
        outcome,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::config::SimConfig;
    use game_core::entity_params::{ParamTables, ENEMY_ID_SLIME};
    use game_core::util::exp_required_for_next;

    const DT: f32 = 1.0 / 60.0;

    fn playing_world() -> GameWorld {
        let mut w = GameWorld::new(ParamTables::default(), SimConfig::default(), 42);
        w.start();
        w
    }

    fn spawn_enemy_at(w: &mut GameWorld, x: f32, y: f32) -> usize {
        let params = w.params.enemy(ENEMY_ID_SLIME).unwrap().clone();
        w.enemies.spawn_one(x, y, ENEMY_ID_SLIME, &params)
    }

    #[test]
    fn menu_phase_does_not_step() {
        let mut w = GameWorld::new(ParamTables::default(), SimConfig::default(), 1);
        w.advance(DT);
        assert_eq!(w.frame_id, 0);
        assert_eq!(w.phase, GamePhase::Menu);
    }

    #[test]
    fn stopped_run_performs_no_mutation() {
        let mut w = playing_world();
        w.control.stop();
        w.advance(DT);
        assert_eq!(w.frame_id, 0);
        assert!(w.elapsed_seconds.abs() < f32::EPSILON);
    }

    #[test]
    fn movement_normalizes_diagonal_input_and_sets_facing() {
        let mut w = playing_world();
        w.set_movement_input(1.0, 1.0);
        w.advance(DT);
        let expected = w.player.move_speed * DT / std::f32::consts::SQRT_2;
        assert!((w.player.x - expected).abs() < 0.01);
        assert!((w.player.y - expected).abs() < 0.01);
        assert!((w.player.facing_angle - std::f32::consts::FRAC_PI_4).abs() < 0.001);

        // 入力が止まっても向きは保持される
        w.set_movement_input(0.0, 0.0);
        w.advance(DT);
        assert!((w.player.facing_angle - std::f32::consts::FRAC_PI_4).abs() < 0.001);
    }

    /// 接触中の敵は毎ティックダメージを与える（単発トリガーではない）
    #[test]
    fn contact_damage_repeats_every_tick() {
        let mut w = playing_world();
        let (ex, ey) = (w.player.x + 1.0, w.player.y);
        spawn_enemy_at(&mut w, ex, ey);
        let hp0 = w.player.hp;
        w.advance(DT);
        let hp1 = w.player.hp;
        w.advance(DT);
        let hp2 = w.player.hp;
        assert!(hp1 < hp0);
        assert!(hp2 < hp1);
    }

    #[test]
    fn defense_scales_contact_damage() {
        let mut w = playing_world();
        let (ex, ey) = (w.player.x + 1.0, w.player.y);
        spawn_enemy_at(&mut w, ex, ey);
        w.advance(DT);
        let plain_loss = 100.0 - w.player.hp;

        let mut w2 = playing_world();
        w2.player.stats.defense = 0.5;
        let (ex2, ey2) = (w2.player.x + 1.0, w2.player.y);
        spawn_enemy_at(&mut w2, ex2, ey2);
        w2.advance(DT);
        let armored_loss = 100.0 - w2.player.hp;
        assert!((armored_loss - plain_loss * 0.5).abs() < 0.01);
    }

    /// GameOver は HP が尽きた最初のティックに一度だけ発火し、
    /// 以後のティックでは一切の状態変化が起きない
    #[test]
    fn game_over_fires_exactly_once_then_freezes() {
        let mut w = playing_world();
        w.player.hp = 0.01;
        let (ex, ey) = (w.player.x + 1.0, w.player.y);
        spawn_enemy_at(&mut w, ex, ey);
        w.advance(DT);
        assert_eq!(w.phase, GamePhase::GameOver);
        let report = w.report.clone().unwrap();
        assert_eq!(report.outcome, RunOutcome::Defeat);

        let events = w.drain_events();
        assert_eq!(
            events.iter().filter(|e| matches!(e, FrameEvent::GameOver)).count(),
            1
        );

        let enemy_x = w.enemies.positions_x[0];
        let frame = w.frame_id;
        w.advance(DT);
        w.advance(DT);
        assert_eq!(w.frame_id, frame);
        assert!((w.enemies.positions_x[0] - enemy_x).abs() < f32::EPSILON);
        assert!(w.drain_events().is_empty());
    }

    /// 生存時間が規定値に達したら、同ティックに敵と接触していても勝利になる
    #[test]
    fn victory_wins_over_simultaneous_contact() {
        let mut w = playing_world();
        w.player.hp = 0.01;
        let (ex, ey) = (w.player.x + 1.0, w.player.y);
        spawn_enemy_at(&mut w, ex, ey);
        w.elapsed_seconds = w.config.survive_duration - DT * 0.5;
        w.advance(DT);
        assert_eq!(w.phase, GamePhase::Victory);
        let report = w.report.clone().unwrap();
        assert_eq!(report.outcome, RunOutcome::Victory);
        assert!(w.player.hp > 0.0);
    }

    /// レベルアップ中はクロックが論理停止し、敵もインスタンスも動かない
    #[test]
    fn level_up_pauses_all_motion_until_choice() {
        let mut w = playing_world();
        let (ex, ey) = (w.player.x + 500.0, w.player.y);
        let ei = spawn_enemy_at(&mut w, ex, ey);
        let required = exp_required_for_next(w.player.level, &w.params.level_exp);
        w.pickups.spawn(w.player.x, w.player.y, required);

        w.advance(DT);
        assert_eq!(w.phase, GamePhase::LevelUp);
        assert_eq!(w.pending_offers.len(), 3);

        let ex = w.enemies.positions_x[ei];
        let elapsed = w.elapsed_seconds;
        w.advance(DT);
        w.advance(DT);
        assert!((w.enemies.positions_x[ei] - ex).abs() < f32::EPSILON);
        assert!((w.elapsed_seconds - elapsed).abs() < f32::EPSILON);

        w.choose_upgrade(0);
        assert_eq!(w.phase, GamePhase::Playing);
        w.advance(DT);
        assert!((w.enemies.positions_x[ei] - ex).abs() > f32::EPSILON);
    }

    #[test]
    fn health_regen_ticks_toward_max() {
        let mut w = playing_world();
        w.player.hp = 50.0;
        w.player.stats.health_regen = 6.0;
        w.advance(DT);
        assert!((w.player.hp - (50.0 + 6.0 * DT)).abs() < 0.001);
    }

    /// スポーンディレクタはステップ経由でも間隔とランプに従う
    #[test]
    fn spawning_happens_through_advance() {
        let mut w = playing_world();
        // 最初の間隔を確実に超える
        for _ in 0..((2.5 / DT) as usize) {
            w.advance(DT);
            if w.phase != GamePhase::Playing {
                break;
            }
        }
        assert!(w.enemies.count >= 1);
    }
}
