//! Path: game_core/src/config.rs
//! Summary: ラン全体の数値ノブ（SimConfig）

use serde::{Deserialize, Serialize};

use crate::constants::{
    BASE_SPAWN_INTERVAL, MAX_ENEMIES, PICKUP_ABSORB_RADIUS, PICKUP_ATTRACT_RADIUS,
    PICKUP_ATTRACT_SPEED, SPAWN_DISTANCE, SPAWN_INTERVAL_FLOOR, SPAWN_RAMP_PER_MIN,
    SURVIVE_DURATION,
};

/// ラン初期化時に注入される数値ノブ。実行中は不変。
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimConfig {
    /// 生存勝利までの秒数
    pub survive_duration:     f32,
    /// 同時生存できる敵の上限
    pub max_enemies:          usize,
    /// スポーン間隔の初期値（秒）
    pub base_spawn_interval:  f32,
    /// 経過 1 分あたりのスポーン間隔短縮量（秒）
    pub spawn_ramp_per_min:   f32,
    /// スポーン間隔の下限（秒）
    pub spawn_interval_floor: f32,
    /// プレイヤーからのスポーン距離（画面外保証）
    pub spawn_distance:       f32,
    /// ピックアップ吸引が始まる半径
    pub pickup_attract_radius: f32,
    /// ピックアップが吸収される半径
    pub pickup_absorb_radius:  f32,
    /// 吸引中のピックアップ移動速度
    pub pickup_attract_speed:  f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            survive_duration:      SURVIVE_DURATION,
            max_enemies:           MAX_ENEMIES,
            base_spawn_interval:   BASE_SPAWN_INTERVAL,
            spawn_ramp_per_min:    SPAWN_RAMP_PER_MIN,
            spawn_interval_floor:  SPAWN_INTERVAL_FLOOR,
            spawn_distance:        SPAWN_DISTANCE,
            pickup_attract_radius: PICKUP_ATTRACT_RADIUS,
            pickup_absorb_radius:  PICKUP_ABSORB_RADIUS,
            pickup_attract_speed:  PICKUP_ATTRACT_SPEED,
        }
    }
}
