//! Path: game_simulation/src/world/mod.rs
//! Summary: ワールド型（PlayerState, EnemyWorld, InstanceWorld, PickupWorld, ParticleWorld, GameWorld）

mod enemy;
mod frame_event;
mod game_world;
mod instance;
mod particle;
mod pickup;
mod player;
mod run_control;
mod upgrade;

pub use enemy::EnemyWorld;
pub use frame_event::FrameEvent;
pub use game_world::{GamePhase, GameWorld, RunOutcome, RunReport};
pub use instance::{InstanceSpawn, InstanceWorld};
pub use particle::ParticleWorld;
pub use pickup::PickupWorld;
pub use player::PlayerState;
pub use run_control::RunControl;
pub use upgrade::{StatBoost, UpgradeKind, UpgradeOption};
