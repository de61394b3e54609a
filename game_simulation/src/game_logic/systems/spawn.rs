//! Path: game_simulation/src/game_logic/systems/spawn.rs
//! Summary: 時間ゲート式の敵スポーン（難易度ランプ・ティア解禁）

use game_core::util::{archetype_for_elapsed, spawn_interval, spawn_position_at_radius};

use crate::world::GameWorld;

/// 1 回の呼び出しで最大 1 体をスポーンする。
/// 条件: 前回スポーンからの経過 ≥ 現在の間隔 かつ 生存数 < 上限。
/// スポーン位置はプレイヤーを中心とする固定半径の円周上のランダム角。
pub(crate) fn try_spawn(w: &mut GameWorld) {
    let interval = spawn_interval(
        w.elapsed_seconds,
        w.config.base_spawn_interval,
        w.config.spawn_ramp_per_min,
        w.config.spawn_interval_floor,
    );
    if w.elapsed_seconds - w.last_spawn_secs < interval {
        return;
    }
    if w.enemies.count >= w.config.max_enemies {
        return;
    }

    let tier_times: Vec<f32> = w.params.enemies.iter().map(|e| e.tier_time).collect();
    let kind_id = archetype_for_elapsed(w.elapsed_seconds, &tier_times);
    let Some(params) = w.params.enemy(kind_id) else {
        log::warn!("enemy id {} not in params table, spawn skipped", kind_id);
        return;
    };
    let params = params.clone();

    let (x, y) = spawn_position_at_radius(
        &mut w.rng,
        w.player.x,
        w.player.y,
        w.config.spawn_distance,
    );
    w.enemies.spawn_one(x, y, kind_id, &params);
    w.last_spawn_secs = w.elapsed_seconds;
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::config::SimConfig;
    use game_core::entity_params::{ParamTables, ENEMY_ID_GOLEM, ENEMY_ID_SLIME};

    fn playing_world() -> GameWorld {
        let mut w = GameWorld::new(ParamTables::default(), SimConfig::default(), 42);
        w.start();
        w
    }

    /// 現在の間隔未満で 2 回試行しても 2 体目は湧かない
    #[test]
    fn second_attempt_within_interval_spawns_nothing() {
        let mut w = playing_world();
        w.elapsed_seconds = 10.0;
        w.last_spawn_secs = 0.0;
        try_spawn(&mut w);
        assert_eq!(w.enemies.count, 1);
        // 間隔の途中でもう一度
        w.elapsed_seconds += 0.1;
        try_spawn(&mut w);
        assert_eq!(w.enemies.count, 1);
    }

    #[test]
    fn cap_blocks_spawn() {
        let mut w = playing_world();
        w.config.max_enemies = 2;
        let params = w.params.enemy(ENEMY_ID_SLIME).unwrap().clone();
        w.enemies.spawn_one(0.0, 0.0, ENEMY_ID_SLIME, &params);
        w.enemies.spawn_one(1.0, 0.0, ENEMY_ID_SLIME, &params);
        w.elapsed_seconds = 100.0;
        w.last_spawn_secs = 0.0;
        try_spawn(&mut w);
        assert_eq!(w.enemies.count, 2);
    }

    /// スポーンは常にプレイヤーから spawn_distance の距離
    #[test]
    fn spawn_lands_on_configured_radius() {
        let mut w = playing_world();
        w.player.x = 500.0;
        w.player.y = -200.0;
        w.elapsed_seconds = 10.0;
        w.last_spawn_secs = 0.0;
        try_spawn(&mut w);
        assert_eq!(w.enemies.count, 1);
        let dx = w.enemies.positions_x[0] - 500.0;
        let dy = w.enemies.positions_y[0] + 200.0;
        let dist = (dx * dx + dy * dy).sqrt();
        assert!((dist - w.config.spawn_distance).abs() < 0.5);
    }

    /// 選ばれるティアは経過時間とともに単調非減少
    #[test]
    fn chosen_tier_never_downgrades() {
        let mut w = playing_world();
        let mut prev_kind = 0u8;
        for minute in 0..12 {
            w.elapsed_seconds = minute as f32 * 60.0 + 1.0;
            w.last_spawn_secs = 0.0;
            let before = w.enemies.len();
            try_spawn(&mut w);
            assert_eq!(w.enemies.len(), before + 1);
            let kind = w.enemies.kind_ids[before];
            assert!(kind >= prev_kind);
            prev_kind = kind;
        }
        assert_eq!(prev_kind, ENEMY_ID_GOLEM);
    }
}
