//! Path: game_simulation/src/world/frame_event.rs
//! Summary: フレーム内で発生したゲームイベント（EventBus 用）

/// フレーム内で発生したゲームイベント。毎フレーム drain される。
#[derive(Debug, Clone, PartialEq)]
pub enum FrameEvent {
    EnemyKilled     { enemy_kind: u8, weapon_kind: u8 },
    PlayerDamaged   { damage: f32 },
    LevelUp         { new_level: u32 },
    PickupAbsorbed  { value: u32 },
    WeaponEvolved   { from: u8, to: u8 },
    GameOver,
    Victory,
}
