//! Path: game_simulation/src/game_logic/systems/weapons.rs
//! Summary: 武器スロットのクールダウン管理と運動モード別発射ロジック

use game_core::entity_params::{KinematicMode, WeaponParams};

use crate::game_logic::chase_ai::find_nearest_enemy;
use crate::world::{GamePhase, GameWorld, InstanceSpawn};

/// 全武器スロットのクールダウンを進め、準備完了のスロットを発射する。
/// ターゲット取得に失敗した発射はタイマーを更新せず、次の適格ティックで再試行する。
pub(crate) fn update_weapon_attacks(w: &mut GameWorld, dt: f32) {
    if w.phase != GamePhase::Playing {
        return;
    }

    let px = w.player.x;
    let py = w.player.y;
    let facing = w.player.facing_angle;

    let slot_count = w.player.weapon_slots.len();
    for si in 0..slot_count {
        w.player.weapon_slots[si].cooldown_timer =
            (w.player.weapon_slots[si].cooldown_timer - dt).max(0.0);
        if w.player.weapon_slots[si].cooldown_timer > 0.0 {
            continue;
        }

        let kind_id = w.player.weapon_slots[si].kind_id;
        let Some(wp) = w.params.weapon(kind_id) else {
            // テーブルにない ID はスキップ（設定ミスは致命傷にしない）
            log::warn!("weapon id {} not in params table, slot ignored", kind_id);
            continue;
        };
        let wp = wp.clone();

        let slot = &w.player.weapon_slots[si];
        let stats = &w.player.stats;
        let cd = slot.effective_cooldown(&wp, stats);
        let dmg = slot.effective_damage(&wp, stats);

        let fired = match wp.mode {
            KinematicMode::Sweep     => fire_sweep(w, &wp, kind_id, px, py, facing, dmg),
            KinematicMode::Homing    => fire_homing(w, &wp, kind_id, px, py, dmg),
            KinematicMode::Linear    => fire_linear(w, &wp, kind_id, px, py, facing, dmg),
            KinematicMode::Orbital   => fire_orbital(w, &wp, kind_id, px, py, dmg),
            KinematicMode::Boomerang => fire_boomerang(w, &wp, kind_id, px, py, dmg),
            KinematicMode::Aura      => fire_aura(w, &wp, kind_id, px, py, dmg),
        };

        if fired {
            w.player.weapon_slots[si].cooldown_timer = cd;
        }
    }
}

/// 前方薙ぎ払い: 向いている角度に沿った矩形判定を持つ短命インスタンスを 1 つ生成
fn fire_sweep(w: &mut GameWorld, wp: &WeaponParams, kind_id: u8, px: f32, py: f32, facing: f32, dmg: f32) -> bool {
    let stats = &w.player.stats;
    let length = wp.range * stats.area;
    let half_width = wp.size * stats.area;
    w.instances.spawn(InstanceSpawn {
        mode: KinematicMode::Sweep,
        kind_id,
        x: px,
        y: py,
        vx: 0.0,
        vy: 0.0,
        angle: facing,
        radius: length,
        angular_speed: 0.0,
        origin_x: px,
        origin_y: py,
        damage: dmg,
        pierce_limit: wp.pierce,
        lifetime: wp.lifetime * stats.duration,
        size: half_width,
    });
    true
}

/// 最近接敵に向かう直進弾。敵がいなければ発射せず、タイマーも消費しない。
fn fire_homing(w: &mut GameWorld, wp: &WeaponParams, kind_id: u8, px: f32, py: f32, dmg: f32) -> bool {
    let Some(ti) = find_nearest_enemy(&w.enemies, px, py) else {
        return false;
    };
    let tx = w.enemies.positions_x[ti];
    let ty = w.enemies.positions_y[ti];
    let dx = tx - px;
    let dy = ty - py;
    let dist = (dx * dx + dy * dy).sqrt();
    if dist < 0.001 {
        return false;
    }
    let stats = &w.player.stats;
    let speed = wp.speed * stats.projectile_speed;
    w.instances.spawn(InstanceSpawn {
        mode: KinematicMode::Homing,
        kind_id,
        x: px,
        y: py,
        vx: (dx / dist) * speed,
        vy: (dy / dist) * speed,
        angle: 0.0,
        radius: 0.0,
        angular_speed: 0.0,
        origin_x: px,
        origin_y: py,
        damage: dmg,
        pierce_limit: wp.pierce,
        lifetime: wp.lifetime * stats.duration,
        size: wp.size * stats.area,
    });
    true
}

/// 向いている方向への直進弾。ターゲット不要で常に発射される。
fn fire_linear(w: &mut GameWorld, wp: &WeaponParams, kind_id: u8, px: f32, py: f32, facing: f32, dmg: f32) -> bool {
    let stats = &w.player.stats;
    let speed = wp.speed * stats.projectile_speed;
    w.instances.spawn(InstanceSpawn {
        mode: KinematicMode::Linear,
        kind_id,
        x: px,
        y: py,
        vx: facing.cos() * speed,
        vy: facing.sin() * speed,
        angle: 0.0,
        radius: 0.0,
        angular_speed: 0.0,
        origin_x: px,
        origin_y: py,
        damage: dmg,
        pierce_limit: wp.pierce,
        lifetime: wp.lifetime * stats.duration,
        size: wp.size * stats.area,
    });
    true
}

/// プレイヤー周回インスタンス。初期角はランダム、位置は毎ティック再計算される。
fn fire_orbital(w: &mut GameWorld, wp: &WeaponParams, kind_id: u8, px: f32, py: f32, dmg: f32) -> bool {
    let angle = w.rng.next_f32() * std::f32::consts::TAU;
    let stats = &w.player.stats;
    let radius = wp.range * stats.area;
    w.instances.spawn(InstanceSpawn {
        mode: KinematicMode::Orbital,
        kind_id,
        x: px + angle.cos() * radius,
        y: py + angle.sin() * radius,
        vx: 0.0,
        vy: 0.0,
        angle,
        radius,
        angular_speed: wp.speed * stats.projectile_speed,
        origin_x: px,
        origin_y: py,
        damage: dmg,
        pierce_limit: wp.pierce,
        lifetime: wp.lifetime * stats.duration,
        size: wp.size * stats.area,
    });
    true
}

/// ブーメラン: 寿命前半は最近接敵へ直進、後半は発射元へ反転する。
/// 敵がいなければ発射せず、タイマーも消費しない。
fn fire_boomerang(w: &mut GameWorld, wp: &WeaponParams, kind_id: u8, px: f32, py: f32, dmg: f32) -> bool {
    let Some(ti) = find_nearest_enemy(&w.enemies, px, py) else {
        return false;
    };
    let tx = w.enemies.positions_x[ti];
    let ty = w.enemies.positions_y[ti];
    let dx = tx - px;
    let dy = ty - py;
    let dist = (dx * dx + dy * dy).sqrt();
    if dist < 0.001 {
        return false;
    }
    let stats = &w.player.stats;
    let speed = wp.speed * stats.projectile_speed;
    w.instances.spawn(InstanceSpawn {
        mode: KinematicMode::Boomerang,
        kind_id,
        x: px,
        y: py,
        vx: (dx / dist) * speed,
        vy: (dy / dist) * speed,
        angle: 0.0,
        radius: 0.0,
        angular_speed: 0.0,
        origin_x: px,
        origin_y: py,
        damage: dmg,
        pierce_limit: wp.pierce,
        lifetime: wp.lifetime * stats.duration,
        size: wp.size * stats.area,
    });
    true
}

/// プレイヤー中心の固定半径オーラ。ごく短命で、クールダウンゲートが再生成する
/// ことで繰り返しパルスとして振る舞う。
fn fire_aura(w: &mut GameWorld, wp: &WeaponParams, kind_id: u8, px: f32, py: f32, dmg: f32) -> bool {
    let stats = &w.player.stats;
    w.instances.spawn(InstanceSpawn {
        mode: KinematicMode::Aura,
        kind_id,
        x: px,
        y: py,
        vx: 0.0,
        vy: 0.0,
        angle: 0.0,
        radius: 0.0,
        angular_speed: 0.0,
        origin_x: px,
        origin_y: py,
        damage: dmg,
        pierce_limit: wp.pierce,
        lifetime: wp.lifetime,
        size: wp.range * stats.area,
    });
    true
}
