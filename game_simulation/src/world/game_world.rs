//! Path: game_simulation/src/world/game_world.rs
//! Summary: ゲームワールド（GameWorld）・ランフェーズ・最終レポート

use game_core::config::SimConfig;
use game_core::constants::{CELL_SIZE, PARTICLE_RNG_SEED};
use game_core::entity_params::{ParamTables, WEAPON_ID_MAGIC_WAND};
use game_core::physics::rng::SimpleRng;
use game_core::physics::spatial_hash::SpatialHash;
use game_core::weapon::WeaponSlot;

use super::{
    EnemyWorld, FrameEvent, InstanceWorld, ParticleWorld, PickupWorld, PlayerState, RunControl,
    UpgradeOption,
};
use crate::game_logic::{apply_upgrade_choice, sim_step_inner};

/// ランの状態機械
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GamePhase {
    Menu,
    Playing,
    /// アップグレード選択待ち。選択が届くまでクロックは論理停止する
    LevelUp,
    GameOver,
    Victory,
}

/// 終端遷移の結果
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RunOutcome {
    Defeat,
    Victory,
}

/// 終端遷移時にホストへ渡す最終レポート
#[derive(Clone, Debug)]
pub struct RunReport {
    pub survived_seconds: f32,
    pub level:            u32,
    pub kill_count:       u32,
    pub outcome:          RunOutcome,
}

/// ゲームワールド。全ての可変状態をランの生存期間にわたって専有する。
/// 外部はスナップショットの読み取りと入力イベントの送信のみを行う。
pub struct GameWorld {
    pub params:    ParamTables,
    pub config:    SimConfig,
    pub phase:     GamePhase,
    pub frame_id:  u32,
    pub player:    PlayerState,
    pub enemies:   EnemyWorld,
    pub instances: InstanceWorld,
    pub pickups:   PickupWorld,
    pub particles: ParticleWorld,
    pub rng:       SimpleRng,
    pub collision: SpatialHash,
    /// ゲーム開始からの経過時間（秒）
    pub elapsed_seconds: f32,
    /// 最後に敵をスポーンした経過秒数
    pub last_spawn_secs: f32,
    pub kill_count:      u32,
    /// LevelUp 中に提示している選択肢（それ以外のフェーズでは空）
    pub pending_offers:  Vec<UpgradeOption>,
    /// このフレームで発生したイベント（毎フレーム drain される）
    pub frame_events:    Vec<FrameEvent>,
    pub control:         RunControl,
    /// 終端遷移後に一度だけ構築される
    pub report:          Option<RunReport>,
    seed:                u64,
}

impl GameWorld {
    /// パラメータテーブルとノブを注入してワールドを構築する。Menu フェーズで始まる。
    pub fn new(params: ParamTables, config: SimConfig, seed: u64) -> Self {
        Self {
            params,
            config,
            phase:     GamePhase::Menu,
            frame_id:  0,
            player:    PlayerState::new(),
            enemies:   EnemyWorld::new(),
            instances: InstanceWorld::new(),
            pickups:   PickupWorld::new(),
            particles: ParticleWorld::new(PARTICLE_RNG_SEED),
            rng:       SimpleRng::new(seed),
            collision: SpatialHash::new(CELL_SIZE),
            elapsed_seconds: 0.0,
            last_spawn_secs: 0.0,
            kill_count:      0,
            pending_offers:  Vec::new(),
            frame_events:    Vec::new(),
            control:         RunControl::new(),
            report:          None,
            seed,
        }
    }

    /// ランを開始（またはリスタート）する。初期武器を 1 本装備して Playing に入る。
    pub fn start(&mut self) {
        self.phase     = GamePhase::Playing;
        self.frame_id  = 0;
        self.player    = PlayerState::new();
        self.enemies   = EnemyWorld::new();
        self.instances = InstanceWorld::new();
        self.pickups   = PickupWorld::new();
        self.particles = ParticleWorld::new(PARTICLE_RNG_SEED);
        self.rng       = SimpleRng::new(self.seed);
        self.collision = SpatialHash::new(CELL_SIZE);
        self.elapsed_seconds = 0.0;
        self.last_spawn_secs = 0.0;
        self.kill_count      = 0;
        self.pending_offers.clear();
        self.frame_events.clear();
        self.report = None;
        self.control.resume();

        if self.params.weapon(WEAPON_ID_MAGIC_WAND).is_some() {
            self.player.weapon_slots.push(WeaponSlot::new(WEAPON_ID_MAGIC_WAND));
        } else {
            log::warn!("start weapon id {} missing from tables, starting unarmed", WEAPON_ID_MAGIC_WAND);
        }
    }

    /// 1 フレーム分シミュレーションを進める。Playing 以外では何もしない。
    pub fn advance(&mut self, dt: f32) {
        if !self.control.is_running() {
            return;
        }
        sim_step_inner(self, dt);
    }

    /// ホストから毎フレーム届く移動意図ベクトル（ゼロベクトル = 入力なし）
    pub fn set_movement_input(&mut self, dx: f32, dy: f32) {
        self.player.input_dx = dx;
        self.player.input_dy = dy;
    }

    /// LevelUp 中に提示された 3 択のうち `index` 番目を適用して Playing に復帰する。
    /// LevelUp 以外のフェーズ・範囲外インデックスは無視される。
    pub fn choose_upgrade(&mut self, index: usize) {
        apply_upgrade_choice(self, index);
    }

    /// このフレームまでに積まれたイベントを取り出す
    pub fn drain_events(&mut self) -> Vec<FrameEvent> {
        std::mem::take(&mut self.frame_events)
    }

    /// 衝突判定用の Spatial Hash を再構築する
    pub(crate) fn rebuild_collision(&mut self) {
        self.collision.clear();
        for i in 0..self.enemies.len() {
            if self.enemies.alive[i] {
                self.collision
                    .insert(i, self.enemies.positions_x[i], self.enemies.positions_y[i]);
            }
        }
    }
}
