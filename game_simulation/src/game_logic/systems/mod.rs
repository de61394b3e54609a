//! Path: game_simulation/src/game_logic/systems/mod.rs
//! Summary: フレーム内サブシステム（武器・インスタンス・ピックアップ・スポーン・レベリング）

pub(crate) mod effects;
pub(crate) mod instances;
pub(crate) mod leveling;
pub(crate) mod pickups;
pub(crate) mod spawn;
pub(crate) mod weapons;
