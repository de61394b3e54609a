//! Path: game_simulation/src/world/instance.rs
//! Summary: 武器インスタンス SoA（InstanceWorld）と運動モード別スポーン

use game_core::entity_params::KinematicMode;

/// 武器インスタンス SoA（Structure of Arrays）。
///
/// 運動モードごとにフィールドの意味が変わる:
/// - `angle` / `radius`: Orbital では周回角と周回半径、Sweep では向きと薙ぎ払い長
/// - `origin_x/y`: Boomerang の帰還先、Sweep の基点
/// - `size`: 当たり判定半径（Sweep では矩形の半幅）
pub struct InstanceWorld {
    pub mode:          Vec<KinematicMode>,
    pub kind_ids:      Vec<u8>,
    pub positions_x:   Vec<f32>,
    pub positions_y:   Vec<f32>,
    pub velocities_x:  Vec<f32>,
    pub velocities_y:  Vec<f32>,
    pub angle:         Vec<f32>,
    pub radius:        Vec<f32>,
    pub angular_speed: Vec<f32>,
    pub origin_x:      Vec<f32>,
    pub origin_y:      Vec<f32>,
    /// ステータス倍率適用済みのダメージ
    pub damage:        Vec<f32>,
    pub pierce_limit:  Vec<u32>,
    pub pierce_count:  Vec<u32>,
    pub age:           Vec<f32>,
    pub lifetime:      Vec<f32>,
    pub size:          Vec<f32>,
    /// Boomerang: 帰還フェーズに入ったか
    pub returning:     Vec<bool>,
    /// このインスタンスが既にダメージを与えた敵インデックス
    pub hit_ids:       Vec<Vec<usize>>,
    pub alive:         Vec<bool>,
    pub count:         usize,
    /// 空きスロットのインデックススタック — O(1) でスロットを取得・返却
    free_list:         Vec<usize>,
}

/// spawn_ex に渡す 1 インスタンス分の生成パラメータ
pub struct InstanceSpawn {
    pub mode:          KinematicMode,
    pub kind_id:       u8,
    pub x:             f32,
    pub y:             f32,
    pub vx:            f32,
    pub vy:            f32,
    pub angle:         f32,
    pub radius:        f32,
    pub angular_speed: f32,
    pub origin_x:      f32,
    pub origin_y:      f32,
    pub damage:        f32,
    pub pierce_limit:  u32,
    pub lifetime:      f32,
    pub size:          f32,
}

impl InstanceWorld {
    pub fn new() -> Self {
        Self {
            mode:          Vec::new(),
            kind_ids:      Vec::new(),
            positions_x:   Vec::new(),
            positions_y:   Vec::new(),
            velocities_x:  Vec::new(),
            velocities_y:  Vec::new(),
            angle:         Vec::new(),
            radius:        Vec::new(),
            angular_speed: Vec::new(),
            origin_x:      Vec::new(),
            origin_y:      Vec::new(),
            damage:        Vec::new(),
            pierce_limit:  Vec::new(),
            pierce_count:  Vec::new(),
            age:           Vec::new(),
            lifetime:      Vec::new(),
            size:          Vec::new(),
            returning:     Vec::new(),
            hit_ids:       Vec::new(),
            alive:         Vec::new(),
            count:         0,
            free_list:     Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.positions_x.len()
    }

    pub fn spawn(&mut self, s: InstanceSpawn) -> usize {
        if let Some(i) = self.free_list.pop() {
            // O(1): フリーリストから空きスロットを取得
            self.mode[i]          = s.mode;
            self.kind_ids[i]      = s.kind_id;
            self.positions_x[i]   = s.x;
            self.positions_y[i]   = s.y;
            self.velocities_x[i]  = s.vx;
            self.velocities_y[i]  = s.vy;
            self.angle[i]         = s.angle;
            self.radius[i]        = s.radius;
            self.angular_speed[i] = s.angular_speed;
            self.origin_x[i]      = s.origin_x;
            self.origin_y[i]      = s.origin_y;
            self.damage[i]        = s.damage;
            self.pierce_limit[i]  = s.pierce_limit;
            self.pierce_count[i]  = 0;
            self.age[i]           = 0.0;
            self.lifetime[i]      = s.lifetime;
            self.size[i]          = s.size;
            self.returning[i]     = false;
            self.hit_ids[i].clear();
            self.alive[i]         = true;
            self.count += 1;
            i
        } else {
            self.mode.push(s.mode);
            self.kind_ids.push(s.kind_id);
            self.positions_x.push(s.x);
            self.positions_y.push(s.y);
            self.velocities_x.push(s.vx);
            self.velocities_y.push(s.vy);
            self.angle.push(s.angle);
            self.radius.push(s.radius);
            self.angular_speed.push(s.angular_speed);
            self.origin_x.push(s.origin_x);
            self.origin_y.push(s.origin_y);
            self.damage.push(s.damage);
            self.pierce_limit.push(s.pierce_limit);
            self.pierce_count.push(0);
            self.age.push(0.0);
            self.lifetime.push(s.lifetime);
            self.size.push(s.size);
            self.returning.push(false);
            self.hit_ids.push(Vec::new());
            self.alive.push(true);
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

#[cfg(test)]
mod tests {
    use super::*;

    fn proto() -> InstanceSpawn {
        InstanceSpawn {
            mode: KinematicMode::Linear,
            kind_id: 1,
            x: 0.0, y: 0.0,
            vx: 100.0, vy: 0.0,
            angle: 0.0, radius: 0.0, angular_speed: 0.0,
            origin_x: 0.0, origin_y: 0.0,
            damage: 10.0, pierce_limit: 1, lifetime: 1.0, size: 5.0,
        }
    }

    #[test]
    fn reused_slot_resets_pierce_and_hits() {
        let mut inst = InstanceWorld::new();
        let a = inst.spawn(proto());
        inst.pierce_count[a] = 1;
        inst.hit_ids[a].push(7);
        inst.kill(a);
        let b = inst.spawn(proto());
        assert_eq!(a, b);
        assert_eq!(inst.pierce_count[b], 0);
        assert!(inst.hit_ids[b].is_empty());
        assert!((inst.age[b]).abs() < f32::EPSILON);
    }
}
