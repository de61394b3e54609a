//! Path: game_core/src/stats.rs
//! Summary: プレイヤーのステータス倍率（StatBlock）とパッシブ効果の適用

use serde::{Deserialize, Serialize};

use crate::entity_params::PassiveEffect;

/// 永続アップグレードで変化するステータス倍率の束。
/// 乗算系は 1.0、加算系（defense / health_regen）は 0.0 が初期値。
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct StatBlock {
    pub damage:           f32,
    /// 被ダメージ軽減率（0.0〜0.8 にクランプ）
    pub defense:          f32,
    /// HP 自然回復量（hp/s）
    pub health_regen:     f32,
    /// クールダウン倍率（小さいほど速い、0.4 を下限にクランプ）
    pub cooldown:         f32,
    pub projectile_speed: f32,
    pub area:             f32,
    pub duration:         f32,
    pub luck:             f32,
}

impl Default for StatBlock {
    fn default() -> Self {
        Self {
            damage:           1.0,
            defense:          0.0,
            health_regen:     0.0,
            cooldown:         1.0,
            projectile_speed: 1.0,
            area:             1.0,
            duration:         1.0,
            luck:             1.0,
        }
    }
}

impl StatBlock {
    /// パッシブ効果を適用する。MaxHealth は StatBlock の外（プレイヤー側）で処理するため
    /// ここでは何もしない。
    pub fn apply(&mut self, effect: PassiveEffect, magnitude: f32) {
        match effect {
            PassiveEffect::Damage          => self.damage += magnitude,
            PassiveEffect::Defense         => self.defense = (self.defense + magnitude).min(0.8),
            PassiveEffect::HealthRegen     => self.health_regen += magnitude,
            PassiveEffect::Cooldown        => self.cooldown = (self.cooldown - magnitude).max(0.4),
            PassiveEffect::ProjectileSpeed => self.projectile_speed += magnitude,
            PassiveEffect::Area            => self.area += magnitude,
            PassiveEffect::Duration        => self.duration += magnitude,
            PassiveEffect::Luck            => self.luck += magnitude,
            PassiveEffect::MaxHealth       => {}
        }
    }
}
