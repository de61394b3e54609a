//! Path: game_core/src/entity_params.rs
//! Summary: 敵・武器・パッシブアイテムの ID ベースパラメータテーブル
//!
//! `ParamTables` をワールド生成時に注入することで外部から差し替え可能にする。
//! 組み込みテーブルは `ParamTables::default()` で初期化する。

use serde::{Deserialize, Serialize};

// ─── KinematicMode ──────────────────────────────────────────────

/// 武器インスタンスの運動モード。発射・移動・当たり判定のディスパッチキー。
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum KinematicMode {
    /// 前方扇状の薙ぎ払い（矩形スイープ判定）
    Sweep,
    /// 発射時に最近接敵を取得して直進（ターゲット必須）
    Homing,
    /// 向いている方向へ直進（ターゲット不要）
    Linear,
    /// プレイヤー周回（角度を毎ティック再計算）
    Orbital,
    /// 寿命前半は最近接敵へ直進、後半は発射元へ反転
    Boomerang,
    /// プレイヤー中心の固定半径オーラ（短命・クールダウンで再生成）
    Aura,
}

// ─── EnemyParams ────────────────────────────────────────────────

/// 敵のパラメータ（kind_id: u8 で参照）
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EnemyParams {
    pub name:           String,
    pub max_hp:         f32,
    pub speed:          f32,
    pub radius:         f32,
    pub exp_reward:     u32,
    pub damage_per_sec: f32,
    /// このティアが解禁される経過秒数
    pub tier_time:      f32,
    /// パーティクル・スナップショット色 [r, g, b, a]
    pub color:          [f32; 4],
}

pub const ENEMY_ID_SLIME:    u8 = 0;
pub const ENEMY_ID_BAT:      u8 = 1;
pub const ENEMY_ID_SKELETON: u8 = 2;
pub const ENEMY_ID_GHOST:    u8 = 3;
pub const ENEMY_ID_GOLEM:    u8 = 4;

// ─── WeaponParams ───────────────────────────────────────────────

/// 武器のパラメータ（kind_id: u8 で参照）
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WeaponParams {
    pub name:     String,
    pub mode:     KinematicMode,
    pub cooldown: f32,
    pub damage:   f32,
    /// Sweep: 薙ぎ払い長, Orbital: 周回半径, Aura: オーラ半径。直進系は未使用
    pub range:    f32,
    /// 直進系: 弾速 (px/s), Orbital: 角速度 (rad/s)
    pub speed:    f32,
    pub lifetime: f32,
    /// 当たり判定半径（Sweep では矩形の半幅）
    pub size:     f32,
    /// 1 インスタンスがダメージを与えられる敵の数
    pub pierce:   u32,
    /// 進化先の武器 ID（進化済み武器は None）
    pub evolves_to:    Option<u8>,
    /// 進化に必要なパッシブアイテム ID
    pub requires_item: Option<u8>,
}

pub const WEAPON_ID_MAGIC_WAND: u8 = 0;
pub const WEAPON_ID_KNIFE:      u8 = 1;
pub const WEAPON_ID_WHIP:       u8 = 2;
pub const WEAPON_ID_AXE:        u8 = 3;
pub const WEAPON_ID_CROSS:      u8 = 4;
pub const WEAPON_ID_GARLIC:     u8 = 5;
pub const WEAPON_ID_HOLY_WAND:     u8 = 6;
pub const WEAPON_ID_THOUSAND_EDGE: u8 = 7;
pub const WEAPON_ID_BLOOD_LASH:    u8 = 8;
pub const WEAPON_ID_DEATH_SPIRAL:  u8 = 9;
pub const WEAPON_ID_HEAVEN_SWORD:  u8 = 10;
pub const WEAPON_ID_SOUL_EATER:    u8 = 11;

// ─── PassiveParams ──────────────────────────────────────────────

/// パッシブアイテムの効果種別
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum PassiveEffect {
    Damage,
    Defense,
    MaxHealth,
    HealthRegen,
    Cooldown,
    ProjectileSpeed,
    Area,
    Duration,
    Luck,
}

/// パッシブアイテムのパラメータ（item_id: u8 で参照）
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PassiveParams {
    pub name:      String,
    pub effect:    PassiveEffect,
    pub magnitude: f32,
}

pub const ITEM_ID_TOME:          u8 = 0;
pub const ITEM_ID_BRACER:        u8 = 1;
pub const ITEM_ID_HOLLOW_HEART:  u8 = 2;
pub const ITEM_ID_CANDELABRA:    u8 = 3;
pub const ITEM_ID_CLOVER:        u8 = 4;
pub const ITEM_ID_PUMMAROLA:     u8 = 5;
pub const ITEM_ID_SPINACH:       u8 = 6;
pub const ITEM_ID_ARMOR:         u8 = 7;
pub const ITEM_ID_SPELLBINDER:   u8 = 8;

// ─── ParamTables ────────────────────────────────────────────────

/// ワールド生成時に注入される不変パラメータテーブル一式。
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ParamTables {
    pub enemies:  Vec<EnemyParams>,
    pub weapons:  Vec<WeaponParams>,
    pub passives: Vec<PassiveParams>,
    /// レベル n → n+1 に必要な累積 EXP。テーブル末尾を超えたら外挿する
    pub level_exp: Vec<u32>,
}

impl ParamTables {
    pub fn enemy(&self, id: u8) -> Option<&EnemyParams> {
        self.enemies.get(id as usize)
    }

    pub fn weapon(&self, id: u8) -> Option<&WeaponParams> {
        self.weapons.get(id as usize)
    }

    pub fn passive(&self, id: u8) -> Option<&PassiveParams> {
        self.passives.get(id as usize)
    }

    /// 他武器の進化先として登場する武器 ID か（進化先はレベルアップ候補に出さない）
    pub fn is_evolution_target(&self, id: u8) -> bool {
        self.weapons.iter().any(|w| w.evolves_to == Some(id))
    }
}

impl Default for ParamTables {
    fn default() -> Self {
        Self {
            enemies: vec![
                EnemyParams { name: "slime".into(),    max_hp: 30.0,  speed: 80.0,  radius: 14.0, exp_reward: 5,  damage_per_sec: 20.0, tier_time: 0.0,   color: [1.0, 0.5, 0.1, 1.0] },
                EnemyParams { name: "bat".into(),      max_hp: 15.0,  speed: 150.0, radius: 10.0, exp_reward: 3,  damage_per_sec: 10.0, tier_time: 60.0,  color: [0.7, 0.2, 0.9, 1.0] },
                EnemyParams { name: "skeleton".into(), max_hp: 60.0,  speed: 65.0,  radius: 15.0, exp_reward: 10, damage_per_sec: 15.0, tier_time: 180.0, color: [0.9, 0.85, 0.7, 1.0] },
                EnemyParams { name: "ghost".into(),    max_hp: 45.0,  speed: 110.0, radius: 12.0, exp_reward: 8,  damage_per_sec: 14.0, tier_time: 360.0, color: [0.5, 0.5, 1.0, 0.8] },
                EnemyParams { name: "golem".into(),    max_hp: 160.0, speed: 42.0,  radius: 22.0, exp_reward: 20, damage_per_sec: 40.0, tier_time: 540.0, color: [0.6, 0.6, 0.6, 1.0] },
            ],
            weapons: vec![
                WeaponParams { name: "magic_wand".into(), mode: KinematicMode::Homing,    cooldown: 1.2,  damage: 10.0, range: 0.0,   speed: 420.0, lifetime: 2.5,  size: 6.0,  pierce: 1,  evolves_to: Some(WEAPON_ID_HOLY_WAND),     requires_item: Some(ITEM_ID_TOME) },
                WeaponParams { name: "knife".into(),      mode: KinematicMode::Linear,    cooldown: 0.9,  damage: 8.0,  range: 0.0,   speed: 500.0, lifetime: 1.8,  size: 5.0,  pierce: 1,  evolves_to: Some(WEAPON_ID_THOUSAND_EDGE), requires_item: Some(ITEM_ID_BRACER) },
                WeaponParams { name: "whip".into(),       mode: KinematicMode::Sweep,     cooldown: 1.4,  damage: 15.0, range: 120.0, speed: 0.0,   lifetime: 0.15, size: 28.0, pierce: 3,  evolves_to: Some(WEAPON_ID_BLOOD_LASH),    requires_item: Some(ITEM_ID_HOLLOW_HEART) },
                WeaponParams { name: "axe".into(),        mode: KinematicMode::Orbital,   cooldown: 3.0,  damage: 20.0, range: 90.0,  speed: 3.0,   lifetime: 4.0,  size: 12.0, pierce: 5,  evolves_to: Some(WEAPON_ID_DEATH_SPIRAL),  requires_item: Some(ITEM_ID_CANDELABRA) },
                WeaponParams { name: "cross".into(),      mode: KinematicMode::Boomerang, cooldown: 2.2,  damage: 18.0, range: 0.0,   speed: 380.0, lifetime: 2.4,  size: 10.0, pierce: 3,  evolves_to: Some(WEAPON_ID_HEAVEN_SWORD),  requires_item: Some(ITEM_ID_CLOVER) },
                WeaponParams { name: "garlic".into(),     mode: KinematicMode::Aura,      cooldown: 0.5,  damage: 4.0,  range: 70.0,  speed: 0.0,   lifetime: 0.1,  size: 70.0, pierce: 32, evolves_to: Some(WEAPON_ID_SOUL_EATER),    requires_item: Some(ITEM_ID_PUMMAROLA) },
                WeaponParams { name: "holy_wand".into(),     mode: KinematicMode::Homing,    cooldown: 0.6,  damage: 18.0, range: 0.0,   speed: 500.0, lifetime: 2.5,  size: 7.0,  pierce: 2,  evolves_to: None, requires_item: None },
                WeaponParams { name: "thousand_edge".into(), mode: KinematicMode::Linear,    cooldown: 0.25, damage: 10.0, range: 0.0,   speed: 560.0, lifetime: 1.8,  size: 5.0,  pierce: 1,  evolves_to: None, requires_item: None },
                WeaponParams { name: "blood_lash".into(),    mode: KinematicMode::Sweep,     cooldown: 1.1,  damage: 28.0, range: 150.0, speed: 0.0,   lifetime: 0.15, size: 34.0, pierce: 5,  evolves_to: None, requires_item: None },
                WeaponParams { name: "death_spiral".into(),  mode: KinematicMode::Orbital,   cooldown: 2.4,  damage: 30.0, range: 110.0, speed: 3.6,   lifetime: 5.0,  size: 14.0, pierce: 8,  evolves_to: None, requires_item: None },
                WeaponParams { name: "heaven_sword".into(),  mode: KinematicMode::Boomerang, cooldown: 1.6,  damage: 30.0, range: 0.0,   speed: 440.0, lifetime: 2.6,  size: 12.0, pierce: 5,  evolves_to: None, requires_item: None },
                WeaponParams { name: "soul_eater".into(),    mode: KinematicMode::Aura,      cooldown: 0.45, damage: 7.0,  range: 90.0,  speed: 0.0,   lifetime: 0.1,  size: 90.0, pierce: 40, evolves_to: None, requires_item: None },
            ],
            passives: vec![
                PassiveParams { name: "tome".into(),         effect: PassiveEffect::Cooldown,        magnitude: 0.08 },
                PassiveParams { name: "bracer".into(),       effect: PassiveEffect::ProjectileSpeed, magnitude: 0.10 },
                PassiveParams { name: "hollow_heart".into(), effect: PassiveEffect::MaxHealth,       magnitude: 20.0 },
                PassiveParams { name: "candelabra".into(),   effect: PassiveEffect::Area,            magnitude: 0.10 },
                PassiveParams { name: "clover".into(),       effect: PassiveEffect::Luck,            magnitude: 0.10 },
                PassiveParams { name: "pummarola".into(),    effect: PassiveEffect::HealthRegen,     magnitude: 0.5 },
                PassiveParams { name: "spinach".into(),      effect: PassiveEffect::Damage,          magnitude: 0.10 },
                PassiveParams { name: "armor".into(),        effect: PassiveEffect::Defense,         magnitude: 0.08 },
                PassiveParams { name: "spellbinder".into(),  effect: PassiveEffect::Duration,        magnitude: 0.10 },
            ],
            level_exp: vec![0, 10, 25, 45, 70, 100, 135, 175, 220, 270],
        }
    }
}
