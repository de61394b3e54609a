//! Path: game_core/src/physics/mod.rs
//! Summary: 物理プリミティブ（RNG・空間ハッシュ・分離パス・形状判定）

pub mod rng;
pub mod separation;
pub mod shapes;
pub mod spatial_hash;
