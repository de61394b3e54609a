//! Path: game_core/src/util.rs
//! Summary: 経験値計算・スポーン間隔・スポーン位置などの共通ユーティリティ

use crate::physics::rng::SimpleRng;

/// 現在の `level` から次のレベルに上がるために必要な累積 EXP を返す。
/// テーブル末尾を超えたレベルは「末尾値 + 50 × 超過レベル数」で外挿する。
pub fn exp_required_for_next(level: u32, table: &[u32]) -> u32 {
    let idx = level as usize;
    if idx < table.len() {
        table[idx]
    } else {
        let last = *table.last().unwrap_or(&0);
        last + (idx as u32 - (table.len() as u32 - 1)) * 50
    }
}

/// 経過時間に応じた現在のスポーン間隔（秒）。
/// 経過分数に比例して線形に短縮し、下限を割らない。
pub fn spawn_interval(elapsed_secs: f32, base: f32, ramp_per_min: f32, floor: f32) -> f32 {
    (base - ramp_per_min * (elapsed_secs / 60.0)).max(floor)
}

/// 解禁済みティアのうち最上位の敵 ID を返す。
/// `tier_times` は ID 順に並んだ解禁秒数（昇順前提）。
pub fn archetype_for_elapsed(elapsed_secs: f32, tier_times: &[f32]) -> u8 {
    let mut id = 0u8;
    for (i, &t) in tier_times.iter().enumerate() {
        if elapsed_secs >= t {
            id = i as u8;
        }
    }
    id
}

/// プレイヤーを中心とする半径 `dist` の円周上にランダムな角度で配置
/// （ビューポートを知らずに画面外スポーンを保証する）
pub fn spawn_position_at_radius(rng: &mut SimpleRng, player_x: f32, player_y: f32, dist: f32) -> (f32, f32) {
    let angle = rng.next_f32() * std::f32::consts::TAU;
    (player_x + angle.cos() * dist, player_y + angle.sin() * dist)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: [u32; 10] = [0, 10, 25, 45, 70, 100, 135, 175, 220, 270];

    #[test]
    fn test_exp_required_for_next() {
        assert_eq!(exp_required_for_next(0, &TABLE), 0);
        assert_eq!(exp_required_for_next(1, &TABLE), 10);
        assert_eq!(exp_required_for_next(9, &TABLE), 270);
        // 外挿領域
        assert_eq!(exp_required_for_next(10, &TABLE), 320);
        assert_eq!(exp_required_for_next(12, &TABLE), 420);
    }

    #[test]
    fn spawn_interval_is_non_increasing_and_floored() {
        let mut prev = f32::MAX;
        for m in 0..30 {
            let iv = spawn_interval(m as f32 * 60.0, 2.0, 0.25, 0.5);
            assert!(iv <= prev);
            assert!(iv >= 0.5);
            prev = iv;
        }
        assert!((spawn_interval(6000.0, 2.0, 0.25, 0.5) - 0.5).abs() < 0.001);
    }

    #[test]
    fn archetype_never_downgrades() {
        let tiers = [0.0, 60.0, 180.0, 360.0, 540.0];
        let mut prev = 0u8;
        for s in 0..700 {
            let id = archetype_for_elapsed(s as f32, &tiers);
            assert!(id >= prev);
            prev = id;
        }
        assert_eq!(archetype_for_elapsed(0.0, &tiers), 0);
        assert_eq!(archetype_for_elapsed(60.0, &tiers), 1);
        assert_eq!(archetype_for_elapsed(9999.0, &tiers), 4);
    }

    #[test]
    fn spawn_position_lies_on_circle() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..50 {
            let (x, y) = spawn_position_at_radius(&mut rng, 100.0, -40.0, 900.0);
            let d = ((x - 100.0).powi(2) + (y + 40.0).powi(2)).sqrt();
            assert!((d - 900.0).abs() < 0.5);
        }
    }
}
