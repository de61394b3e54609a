//! Path: game_core/src/weapon.rs
//! Summary: 装備スロット・クールダウン・実効ダメージの共通定義

use crate::entity_params::WeaponParams;
use crate::stats::StatBlock;

pub const MAX_WEAPON_LEVEL:  u32 = 8;
pub const MAX_WEAPON_SLOTS:  usize = 6;
pub const MAX_PASSIVE_SLOTS: usize = 6;

// ─── WeaponSlot ───────────────────────────────────────────────

/// 装備中の武器 1 本分の状態。kind_id はパラメータテーブルの武器 ID。
#[derive(Clone, Debug)]
pub struct WeaponSlot {
    pub kind_id:        u8,
    pub level:          u32,
    pub cooldown_timer: f32,
}

impl WeaponSlot {
    pub fn new(kind_id: u8) -> Self {
        Self { kind_id, level: 1, cooldown_timer: 0.0 }
    }

    /// レベルとステータス倍率を織り込んだクールダウン（基礎値の半分を下限とする）
    pub fn effective_cooldown(&self, params: &WeaponParams, stats: &StatBlock) -> f32 {
        let base = params.cooldown;
        let leveled = (base * (1.0 - (self.level as f32 - 1.0) * 0.07)).max(base * 0.5);
        leveled * stats.cooldown
    }

    /// レベルとステータス倍率を織り込んだダメージ
    pub fn effective_damage(&self, params: &WeaponParams, stats: &StatBlock) -> f32 {
        let base = params.damage;
        let leveled = base + (self.level as f32 - 1.0) * (base * 0.25).max(1.0);
        leveled * stats.damage
    }
}
