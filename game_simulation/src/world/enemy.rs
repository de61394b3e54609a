//! Path: game_simulation/src/world/enemy.rs
//! Summary: 敵 SoA（EnemyWorld）と EnemySeparation の実装

use game_core::entity_params::EnemyParams;
use game_core::physics::separation::EnemySeparation;

/// 敵 SoA（Structure of Arrays）。座標はすべて中心座標。
pub struct EnemyWorld {
    pub positions_x:  Vec<f32>,
    pub positions_y:  Vec<f32>,
    pub speeds:       Vec<f32>,
    pub hp:           Vec<f32>,
    pub alive:        Vec<bool>,
    pub kind_ids:     Vec<u8>,
    pub count:        usize,
    /// 分離パス用の作業バッファ（毎フレーム再利用してアロケーションを回避）
    pub sep_x:        Vec<f32>,
    pub sep_y:        Vec<f32>,
    /// 近隣クエリ結果の再利用バッファ
    pub neighbor_buf: Vec<usize>,
    /// 空きスロットのインデックススタック — O(1) でスロットを取得・返却
    free_list:        Vec<usize>,
}

impl EnemyWorld {
    pub fn new() -> Self {
        Self {
            positions_x:  Vec::new(),
            positions_y:  Vec::new(),
            speeds:       Vec::new(),
            hp:           Vec::new(),
            alive:        Vec::new(),
            kind_ids:     Vec::new(),
            count:        0,
            sep_x:        Vec::new(),
            sep_y:        Vec::new(),
            neighbor_buf: Vec::new(),
            free_list:    Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.positions_x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// 敵を 1 体スポーンし、スロットのインデックスを返す
    pub fn spawn_one(&mut self, x: f32, y: f32, kind_id: u8, params: &EnemyParams) -> usize {
        if let Some(i) = self.free_list.pop() {
            // O(1): フリーリストから再利用
            self.positions_x[i] = x;
            self.positions_y[i] = y;
            self.speeds[i]      = params.speed;
            self.hp[i]          = params.max_hp;
            self.alive[i]       = true;
            self.kind_ids[i]    = kind_id;
            self.sep_x[i]       = 0.0;
            self.sep_y[i]       = 0.0;
            self.count += 1;
            i
        } else {
            self.positions_x.push(x);
            self.positions_y.push(y);
            self.speeds.push(params.speed);
            self.hp.push(params.max_hp);
            self.alive.push(true);
            self.kind_ids.push(kind_id);
            self.sep_x.push(0.0);
            self.sep_y.push(0.0);
            self.count += 1;
            self.positions_x.len() - 1
        }
    }

    pub fn kill(&mut self, i: usize) {
        if self.alive[i] {
            self.alive[i] = false;
            self.count = self.count.saturating_sub(1);
            self.free_list.push(i);
        }
    }
}

impl EnemySeparation for EnemyWorld {
    fn enemy_count(&self) -> usize          { self.positions_x.len() }
    fn is_alive(&self, i: usize) -> bool    { self.alive[i] }
    fn pos_x(&self, i: usize) -> f32        { self.positions_x[i] }
    fn pos_y(&self, i: usize) -> f32        { self.positions_y[i] }
    fn add_pos_x(&mut self, i: usize, v: f32) { self.positions_x[i] += v; }
    fn add_pos_y(&mut self, i: usize, v: f32) { self.positions_y[i] += v; }
    fn sep_buf_x(&mut self) -> &mut Vec<f32>  { &mut self.sep_x }
    fn sep_buf_y(&mut self) -> &mut Vec<f32>  { &mut self.sep_y }
    fn neighbor_buf(&mut self) -> &mut Vec<usize> { &mut self.neighbor_buf }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::entity_params::{ParamTables, ENEMY_ID_SLIME};

    #[test]
    fn spawn_reuses_killed_slot() {
        let tables = ParamTables::default();
        let params = tables.enemy(ENEMY_ID_SLIME).unwrap();
        let mut enemies = EnemyWorld::new();
        let a = enemies.spawn_one(0.0, 0.0, ENEMY_ID_SLIME, params);
        enemies.kill(a);
        assert_eq!(enemies.count, 0);
        let b = enemies.spawn_one(5.0, 5.0, ENEMY_ID_SLIME, params);
        assert_eq!(a, b);
        assert_eq!(enemies.count, 1);
        assert_eq!(enemies.len(), 1);
    }
}
