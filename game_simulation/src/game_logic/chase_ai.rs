//! Path: game_simulation/src/game_logic/chase_ai.rs
//! Summary: 敵 Chase AI と最近接探索（find_nearest_*）

use crate::world::EnemyWorld;
use rayon::prelude::*;

/// 最近接の生存敵インデックスを返す。
/// 同距離の場合は線形走査で先に見つかった方を採用する。
pub fn find_nearest_enemy(enemies: &EnemyWorld, px: f32, py: f32) -> Option<usize> {
    let mut min_dist = f32::MAX;
    let mut nearest  = None;
    for i in 0..enemies.len() {
        if !enemies.alive[i] {
            continue;
        }
        let dx   = enemies.positions_x[i] - px;
        let dy   = enemies.positions_y[i] - py;
        let dist = dx * dx + dy * dy;
        if dist < min_dist {
            min_dist = dist;
            nearest  = Some(i);
        }
    }
    nearest
}

/// 指定インデックスを除外した最近接の生存敵インデックスを返す
pub fn find_nearest_enemy_excluding(
    enemies: &EnemyWorld,
    px: f32,
    py: f32,
    exclude: &[usize],
) -> Option<usize> {
    let mut min_dist = f32::MAX;
    let mut nearest  = None;
    for i in 0..enemies.len() {
        if !enemies.alive[i] || exclude.contains(&i) {
            continue;
        }
        let dx   = enemies.positions_x[i] - px;
        let dy   = enemies.positions_y[i] - py;
        let dist = dx * dx + dy * dy;
        if dist < min_dist {
            min_dist = dist;
            nearest  = Some(i);
        }
    }
    nearest
}

/// Chase AI: 全敵をプレイヤーに向けて移動（rayon で並列化）。
/// 距離ゼロ近傍では移動しない（縮退入力は「相互作用なし」に倒す）。
pub fn update_chase_ai(enemies: &mut EnemyWorld, player_x: f32, player_y: f32, dt: f32) {
    let len = enemies.len();
    let positions_x = &mut enemies.positions_x[..len];
    let positions_y = &mut enemies.positions_y[..len];
    let speeds      = &enemies.speeds[..len];
    let alive       = &enemies.alive[..len];

    (positions_x, positions_y, speeds, alive)
        .into_par_iter()
        .for_each(|(px, py, speed, is_alive)| {
            if !*is_alive {
                return;
            }
            let dx   = player_x - *px;
            let dy   = player_y - *py;
            let dist = (dx * dx + dy * dy).sqrt();
            if dist < 0.001 {
                return;
            }
            *px += (dx / dist) * speed * dt;
            *py += (dy / dist) * speed * dt;
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::entity_params::{ParamTables, ENEMY_ID_BAT, ENEMY_ID_SLIME};

    fn world_with(positions: &[(f32, f32)]) -> EnemyWorld {
        let tables = ParamTables::default();
        let params = tables.enemy(ENEMY_ID_SLIME).unwrap();
        let mut enemies = EnemyWorld::new();
        for &(x, y) in positions {
            enemies.spawn_one(x, y, ENEMY_ID_SLIME, params);
        }
        enemies
    }

    #[test]
    fn nearest_picks_closest_alive() {
        let mut enemies = world_with(&[(100.0, 0.0), (50.0, 0.0), (200.0, 0.0)]);
        assert_eq!(find_nearest_enemy(&enemies, 0.0, 0.0), Some(1));
        enemies.kill(1);
        assert_eq!(find_nearest_enemy(&enemies, 0.0, 0.0), Some(0));
    }

    #[test]
    fn nearest_with_no_enemies_is_none() {
        let enemies = EnemyWorld::new();
        assert_eq!(find_nearest_enemy(&enemies, 0.0, 0.0), None);
    }

    #[test]
    fn excluding_skips_listed() {
        let enemies = world_with(&[(100.0, 0.0), (50.0, 0.0)]);
        assert_eq!(find_nearest_enemy_excluding(&enemies, 0.0, 0.0, &[1]), Some(0));
    }

    #[test]
    fn chase_moves_toward_player_by_speed_dt() {
        let tables = ParamTables::default();
        let params = tables.enemy(ENEMY_ID_BAT).unwrap();
        let mut enemies = EnemyWorld::new();
        enemies.spawn_one(100.0, 0.0, ENEMY_ID_BAT, params);
        update_chase_ai(&mut enemies, 0.0, 0.0, 0.1);
        let expected = 100.0 - params.speed * 0.1;
        assert!((enemies.positions_x[0] - expected).abs() < 0.01);
        assert!(enemies.positions_y[0].abs() < 0.01);
    }

    #[test]
    fn chase_ignores_coincident_positions() {
        let tables = ParamTables::default();
        let params = tables.enemy(ENEMY_ID_SLIME).unwrap();
        let mut enemies = EnemyWorld::new();
        enemies.spawn_one(0.0, 0.0, ENEMY_ID_SLIME, params);
        update_chase_ai(&mut enemies, 0.0, 0.0, 0.1);
        assert!(enemies.positions_x[0].abs() < f32::EPSILON);
    }
}
