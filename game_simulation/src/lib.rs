//! Path: game_simulation/src/lib.rs
//! Summary: モジュール宣言・pub use（サバイバルシミュレーションのエントリ）

mod game_logic;
mod snapshot;
mod world;

pub use game_logic::{find_nearest_enemy, find_nearest_enemy_excluding, update_chase_ai};
pub use snapshot::{
    build_sim_frame, EnemyFrame, InstanceFrame, ParticleFrame, PickupFrame, PlayerFrame, SimFrame,
};
pub use world::{
    EnemyWorld, FrameEvent, GamePhase, GameWorld, InstanceSpawn, InstanceWorld, ParticleWorld,
    PickupWorld, PlayerState, RunControl, RunOutcome, RunReport, StatBoost, UpgradeKind,
    UpgradeOption,
};
