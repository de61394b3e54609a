//! Path: game_simulation/src/world/upgrade.rs
//! Summary: レベルアップ時に提示するアップグレード選択肢の記述子

/// 汎用ステータスブースト（選択肢プールの埋め草として抽選される）
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StatBoost {
    Damage,
    MoveSpeed,
    MaxHealth,
    Cooldown,
}

/// 選択肢の種別と対象 ID
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum UpgradeKind {
    /// 未所持の武器を新規装備する
    NewWeapon(u8),
    /// 未所持のパッシブアイテムを新規装備する
    NewPassive(u8),
    /// 装備済み武器のレベルを 1 上げる
    WeaponUpgrade(u8),
    /// 汎用ステータスブースト
    StatBoost(StatBoost),
}

/// ホストの選択 UI に渡す記述子。LevelUp 突入時にちょうど 3 件生成される。
#[derive(Clone, Debug)]
pub struct UpgradeOption {
    pub kind:        UpgradeKind,
    pub name:        String,
    pub description: String,
}
