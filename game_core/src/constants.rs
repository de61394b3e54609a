//! Path: game_core/src/constants.rs
//! Summary: プレイヤー・物理・スポーンの定数定義

// Player
pub const PLAYER_RADIUS: f32 = 16.0;
pub const PLAYER_SPEED:  f32 = 200.0;
pub const PLAYER_MAX_HP: f32 = 100.0;

// Spatial hash cell size
pub const CELL_SIZE: f32 = 80.0;

// Enemy separation: 敵同士が重ならないための押し出し半径・強さ
pub const ENEMY_SEPARATION_RADIUS: f32 = 28.0;
pub const ENEMY_SEPARATION_FORCE:  f32 = 120.0;

// Run defaults（SimConfig::default が参照する）
pub const SURVIVE_DURATION:     f32 = 900.0;
pub const MAX_ENEMIES:          usize = 300;
pub const BASE_SPAWN_INTERVAL:  f32 = 2.0;
pub const SPAWN_RAMP_PER_MIN:   f32 = 0.25;
pub const SPAWN_INTERVAL_FLOOR: f32 = 0.5;
pub const SPAWN_DISTANCE:       f32 = 900.0;

// Pickup
pub const PICKUP_ATTRACT_RADIUS: f32 = 120.0;
pub const PICKUP_ABSORB_RADIUS:  f32 = 24.0;
pub const PICKUP_ATTRACT_SPEED:  f32 = 320.0;

/// パーティクル用 RNG シード
pub const PARTICLE_RNG_SEED: u64 = 67890;
