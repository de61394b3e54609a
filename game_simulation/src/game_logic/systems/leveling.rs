//! Path: game_simulation/src/game_logic/systems/leveling.rs
//! Summary: レベルアップ判定・アップグレード選択肢の生成と適用・武器進化

use game_core::entity_params::PassiveEffect;
use game_core::util::exp_required_for_next;
use game_core::weapon::{WeaponSlot, MAX_PASSIVE_SLOTS, MAX_WEAPON_LEVEL, MAX_WEAPON_SLOTS};

use crate::world::{FrameEvent, GamePhase, GameWorld, StatBoost, UpgradeKind, UpgradeOption};

// 汎用ステータスブーストの固定量
const BOOST_DAMAGE:     f32 = 0.10;
const BOOST_MOVE_SPEED: f32 = 1.10;
const BOOST_MAX_HEALTH: f32 = 20.0;
const BOOST_COOLDOWN:   f32 = 0.08;

/// 累積 EXP がしきい値に達していたら LevelUp フェーズへ遷移し、選択肢を 3 件生成する。
/// 呼び出し 1 回につきレベルアップは最大 1 段。
pub(crate) fn check_level_up(w: &mut GameWorld) {
    if w.phase != GamePhase::Playing {
        return;
    }
    let required = exp_required_for_next(w.player.level, &w.params.level_exp);
    if w.player.exp < required {
        return;
    }
    w.phase = GamePhase::LevelUp;
    w.pending_offers = build_upgrade_offers(w);
    w.frame_events.push(FrameEvent::LevelUp {
        new_level: w.player.level + 1,
    });
}

/// 選択肢プールを組み立て、非復元抽選でちょうど 3 件にする。
/// プール: {未所持武器から 1}（武器枠に空きがあるときのみ）
///       ∪ {未所持パッシブから 1}（アイテム枠に空きがあるときのみ）
///       ∪ {装備武器ごとのレベルアップ}（最大レベルは除外）
/// 不足分は汎用ステータスブーストで埋める。
pub(crate) fn build_upgrade_offers(w: &mut GameWorld) -> Vec<UpgradeOption> {
    let mut pool: Vec<UpgradeOption> = Vec::new();

    if w.player.weapon_slots.len() < MAX_WEAPON_SLOTS {
        let candidates: Vec<u8> = (0..w.params.weapons.len() as u8)
            .filter(|&id| !w.player.owns_weapon(id) && !w.params.is_evolution_target(id))
            .collect();
        if !candidates.is_empty() {
            let id = candidates[w.rng.next_index(candidates.len())];
            let name = w.params.weapon(id).map(|p| p.name.clone()).unwrap_or_default();
            pool.push(UpgradeOption {
                kind: UpgradeKind::NewWeapon(id),
                description: format!("Equip the {}", name),
                name,
            });
        }
    }

    if w.player.passive_items.len() < MAX_PASSIVE_SLOTS {
        let candidates: Vec<u8> = (0..w.params.passives.len() as u8)
            .filter(|&id| !w.player.owns_passive(id))
            .collect();
        if !candidates.is_empty() {
            let id = candidates[w.rng.next_index(candidates.len())];
            let (name, desc) = w
                .params
                .passive(id)
                .map(|p| (p.name.clone(), describe_passive(p.effect)))
                .unwrap_or_default();
            pool.push(UpgradeOption {
                kind: UpgradeKind::NewPassive(id),
                name,
                description: desc,
            });
        }
    }

    for slot in &w.player.weapon_slots {
        if slot.level >= MAX_WEAPON_LEVEL {
            continue;
        }
        let Some(wp) = w.params.weapon(slot.kind_id) else {
            continue;
        };
        pool.push(UpgradeOption {
            kind: UpgradeKind::WeaponUpgrade(slot.kind_id),
            name: wp.name.clone(),
            description: format!("{} Lv.{} → Lv.{}", wp.name, slot.level, slot.level + 1),
        });
    }

    let mut offers: Vec<UpgradeOption> = Vec::new();
    while offers.len() < 3 && !pool.is_empty() {
        let i = w.rng.next_index(pool.len());
        offers.push(pool.swap_remove(i));
    }

    // 埋め草の汎用ブースト（同種は重複させない）
    let mut boosts = vec![
        StatBoost::Damage,
        StatBoost::MoveSpeed,
        StatBoost::MaxHealth,
        StatBoost::Cooldown,
    ];
    while offers.len() < 3 {
        let i = w.rng.next_index(boosts.len());
        offers.push(stat_boost_option(boosts.swap_remove(i)));
    }
    offers
}

fn describe_passive(effect: PassiveEffect) -> String {
    match effect {
        PassiveEffect::Damage          => "Increases weapon damage".to_string(),
        PassiveEffect::Defense         => "Reduces damage taken".to_string(),
        PassiveEffect::MaxHealth       => "Raises max health".to_string(),
        PassiveEffect::HealthRegen     => "Regenerates health over time".to_string(),
        PassiveEffect::Cooldown        => "Shortens weapon cooldowns".to_string(),
        PassiveEffect::ProjectileSpeed => "Speeds up projectiles".to_string(),
        PassiveEffect::Area            => "Widens attack area".to_string(),
        PassiveEffect::Duration        => "Extends attack duration".to_string(),
        PassiveEffect::Luck            => "Improves drop fortune".to_string(),
    }
}

fn stat_boost_option(boost: StatBoost) -> UpgradeOption {
    let (name, description) = match boost {
        StatBoost::Damage    => ("Power",    "Damage +10%"),
        StatBoost::MoveSpeed => ("Swiftness", "Move speed +10%"),
        StatBoost::MaxHealth => ("Vitality", "Max health +20"),
        StatBoost::Cooldown  => ("Haste",    "Cooldowns -8%"),
    };
    UpgradeOption {
        kind: UpgradeKind::StatBoost(boost),
        name: name.to_string(),
        description: description.to_string(),
    }
}

/// LevelUp 中の選択を適用し、進化を再判定して Playing に復帰する。
/// 範囲外インデックス・不正フェーズは無視される。
pub(crate) fn apply_upgrade_choice(w: &mut GameWorld, index: usize) {
    if w.phase != GamePhase::LevelUp {
        return;
    }
    let Some(option) = w.pending_offers.get(index).cloned() else {
        log::warn!("upgrade choice {} out of range, ignored", index);
        return;
    };

    match option.kind {
        UpgradeKind::NewWeapon(id) => {
            if w.params.weapon(id).is_none() {
                log::warn!("weapon id {} not in params table, choice ignored", id);
            } else if !w.player.owns_weapon(id) && w.player.weapon_slots.len() < MAX_WEAPON_SLOTS {
                w.player.weapon_slots.push(WeaponSlot::new(id));
            }
        }
        UpgradeKind::NewPassive(id) => match w.params.passive(id) {
            None => log::warn!("passive id {} not in params table, choice ignored", id),
            Some(p) => {
                if !w.player.owns_passive(id) && w.player.passive_items.len() < MAX_PASSIVE_SLOTS {
                    let effect = p.effect;
                    let magnitude = p.magnitude;
                    w.player.passive_items.push(id);
                    if effect == PassiveEffect::MaxHealth {
                        w.player.max_hp += magnitude;
                        w.player.hp += magnitude;
                    } else {
                        w.player.stats.apply(effect, magnitude);
                    }
                }
            }
        },
        UpgradeKind::WeaponUpgrade(id) => {
            if let Some(slot) = w.player.weapon_slots.iter_mut().find(|s| s.kind_id == id) {
                slot.level = (slot.level + 1).min(MAX_WEAPON_LEVEL);
            }
        }
        UpgradeKind::StatBoost(boost) => match boost {
            StatBoost::Damage    => w.player.stats.damage += BOOST_DAMAGE,
            StatBoost::MoveSpeed => w.player.move_speed *= BOOST_MOVE_SPEED,
            StatBoost::MaxHealth => {
                w.player.max_hp += BOOST_MAX_HEALTH;
                w.player.hp += BOOST_MAX_HEALTH;
            }
            StatBoost::Cooldown => w.player.stats.apply(PassiveEffect::Cooldown, BOOST_COOLDOWN),
        },
    }

    check_evolutions(w);

    w.player.level += 1;
    w.pending_offers.clear();
    w.phase = GamePhase::Playing;
}

/// 進化の再判定: 進化先を持つ装備武器のうち、必要なパッシブを所持しているものを
/// その場で進化後 ID に置き換える。進化済み武器には進化先がないため冪等。
pub(crate) fn check_evolutions(w: &mut GameWorld) {
    let slot_count = w.player.weapon_slots.len();
    for si in 0..slot_count {
        let kind_id = w.player.weapon_slots[si].kind_id;
        let Some(wp) = w.params.weapon(kind_id) else {
            continue;
        };
        let (Some(target), Some(required)) = (wp.evolves_to, wp.requires_item) else {
            continue;
        };
        if !w.player.owns_passive(required) {
            continue;
        }
        if w.params.weapon(target).is_none() {
            log::warn!("evolution target {} not in params table, ignored", target);
            continue;
        }
        w.player.weapon_slots[si].kind_id = target;
        w.frame_events.push(FrameEvent::WeaponEvolved {
            from: kind_id,
            to: target,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::config::SimConfig;
    use game_core::entity_params::{
        ParamTables, ITEM_ID_TOME, WEAPON_ID_HOLY_WAND, WEAPON_ID_MAGIC_WAND,
    };

    fn playing_world() -> GameWorld {
        let mut w = GameWorld::new(ParamTables::default(), SimConfig::default(), 42);
        w.start();
        w
    }

    fn enter_level_up(w: &mut GameWorld) {
        w.player.exp = 1000;
        check_level_up(w);
        assert_eq!(w.phase, GamePhase::LevelUp);
    }

    #[test]
    fn offers_are_exactly_three_and_distinct() {
        let mut w = playing_world();
        enter_level_up(&mut w);
        assert_eq!(w.pending_offers.len(), 3);
        for a in 0..3 {
            for b in (a + 1)..3 {
                assert_ne!(w.pending_offers[a].kind, w.pending_offers[b].kind);
            }
        }
    }

    /// 武器 0・アイテム 6 の状態では、武器オファーが最大 1 件で
    /// パッシブの重複オファーは発生しない
    #[test]
    fn full_passives_and_no_weapons_offer_shape() {
        let mut w = playing_world();
        w.player.weapon_slots.clear();
        w.player.passive_items = vec![0, 1, 2, 3, 4, 5];
        enter_level_up(&mut w);

        assert_eq!(w.pending_offers.len(), 3);
        let weapons = w
            .pending_offers
            .iter()
            .filter(|o| matches!(o.kind, UpgradeKind::NewWeapon(_)))
            .count();
        let passives = w
            .pending_offers
            .iter()
            .filter(|o| matches!(o.kind, UpgradeKind::NewPassive(_)))
            .count();
        assert_eq!(weapons, 1);
        assert_eq!(passives, 0);
    }

    /// 武器枠が満杯なら新規武器はオファーされない
    #[test]
    fn no_weapon_offer_at_cap() {
        let mut w = playing_world();
        w.player.weapon_slots = (0u8..6).map(WeaponSlot::new).collect();
        enter_level_up(&mut w);
        assert!(w
            .pending_offers
            .iter()
            .all(|o| !matches!(o.kind, UpgradeKind::NewWeapon(_))));
    }

    /// 進化先の武器が新規武器としてオファーされることはない
    #[test]
    fn evolved_weapons_never_offered_as_new() {
        for seed in 0..20 {
            let mut w = GameWorld::new(ParamTables::default(), SimConfig::default(), seed);
            w.start();
            w.player.weapon_slots.clear();
            enter_level_up(&mut w);
            for o in &w.pending_offers {
                if let UpgradeKind::NewWeapon(id) = o.kind {
                    assert!(!w.params.is_evolution_target(id));
                }
            }
        }
    }

    #[test]
    fn applying_choice_resumes_play_and_increments_level() {
        let mut w = playing_world();
        enter_level_up(&mut w);
        let level = w.player.level;
        w.choose_upgrade(0);
        assert_eq!(w.phase, GamePhase::Playing);
        assert_eq!(w.player.level, level + 1);
        assert!(w.pending_offers.is_empty());
    }

    #[test]
    fn out_of_range_choice_is_ignored() {
        let mut w = playing_world();
        enter_level_up(&mut w);
        w.choose_upgrade(99);
        assert_eq!(w.phase, GamePhase::LevelUp);
    }

    /// 必要パッシブを所持した武器はその場で進化し、再判定は冪等
    #[test]
    fn evolution_fires_once_and_is_idempotent() {
        let mut w = playing_world();
        w.player.passive_items.push(ITEM_ID_TOME);
        check_evolutions(&mut w);
        assert_eq!(w.player.weapon_slots[0].kind_id, WEAPON_ID_HOLY_WAND);

        let slots_before: Vec<u8> = w.player.weapon_slots.iter().map(|s| s.kind_id).collect();
        check_evolutions(&mut w);
        let slots_after: Vec<u8> = w.player.weapon_slots.iter().map(|s| s.kind_id).collect();
        assert_eq!(slots_before, slots_after);
        // 進化イベントは最初の 1 回だけ
        let evolved = w
            .frame_events
            .iter()
            .filter(|e| matches!(e, FrameEvent::WeaponEvolved { .. }))
            .count();
        assert_eq!(evolved, 1);
    }

    /// レベルアップしても累積 EXP は保持される（持ち越し）
    #[test]
    fn exp_carries_over_across_level_up() {
        let mut w = playing_world();
        w.player.exp = 12; // しきい値 10 を超過
        check_level_up(&mut w);
        assert_eq!(w.phase, GamePhase::LevelUp);
        w.choose_upgrade(0);
        assert_eq!(w.player.exp, 12);
        assert_eq!(w.player.level, 2);
    }

    #[test]
    fn weapon_upgrade_choice_raises_slot_level() {
        let mut w = playing_world();
        enter_level_up(&mut w);
        // 装備中武器のアップグレードが出るまでシードを選んである必要はなく、
        // 直接適用経路を検証する
        w.pending_offers = vec![UpgradeOption {
            kind: UpgradeKind::WeaponUpgrade(WEAPON_ID_MAGIC_WAND),
            name: "magic_wand".to_string(),
            description: String::new(),
        }];
        w.choose_upgrade(0);
        assert_eq!(w.player.weapon_slots[0].level, 2);
    }
}
