//! Path: game_simulation/src/world/player.rs
//! Summary: プレイヤー状態（座標・入力・向き・HP・ステータス・装備）

use game_core::constants::{PLAYER_MAX_HP, PLAYER_SPEED};
use game_core::stats::StatBlock;
use game_core::weapon::WeaponSlot;

/// プレイヤー状態。ランの開始時に生成され、ラン終了までコアが専有する。
pub struct PlayerState {
    pub x:          f32,
    pub y:          f32,
    pub input_dx:   f32,
    pub input_dy:   f32,
    /// 最後に入力があった移動方向（正規化済み）。停止中も保持する
    pub dir_x:      f32,
    pub dir_y:      f32,
    /// 向いている角度（ラジアン）。dir から導出
    pub facing_angle: f32,
    pub move_speed: f32,
    pub hp:         f32,
    pub max_hp:     f32,
    /// 1 始まりのレベル
    pub level:      u32,
    /// 累積 EXP（レベルアップで減算しない）
    pub exp:        u32,
    pub stats:      StatBlock,
    /// 装備中の武器スロット（最大 6・重複なし）
    pub weapon_slots:  Vec<WeaponSlot>,
    /// 装備中のパッシブアイテム ID（最大 6・重複なし）
    pub passive_items: Vec<u8>,
}

impl PlayerState {
    pub fn new() -> Self {
        Self {
            x:          0.0,
            y:          0.0,
            input_dx:   0.0,
            input_dy:   0.0,
            dir_x:      1.0,
            dir_y:      0.0,
            facing_angle: 0.0,
            move_speed: PLAYER_SPEED,
            hp:         PLAYER_MAX_HP,
            max_hp:     PLAYER_MAX_HP,
            level:      1,
            exp:        0,
            stats:      StatBlock::default(),
            weapon_slots:  Vec::new(),
            passive_items: Vec::new(),
        }
    }

    pub fn owns_weapon(&self, kind_id: u8) -> bool {
        self.weapon_slots.iter().any(|s| s.kind_id == kind_id)
    }

    pub fn owns_passive(&self, item_id: u8) -> bool {
        self.passive_items.contains(&item_id)
    }
}
