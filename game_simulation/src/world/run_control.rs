//! Path: game_simulation/src/world/run_control.rs
//! Summary: ラン制御用（stop/resume）フラグ

use std::sync::atomic::{AtomicBool, Ordering};

/// ランの実行フラグ。ホストが stop すると次のフレームコールバックは
/// 状態を一切変更せずに戻る。
pub struct RunControl {
    running: AtomicBool,
}

impl RunControl {
    pub fn new() -> Self {
        Self {
            running: AtomicBool::new(true),
        }
    }
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }
    pub fn resume(&self) {
        self.running.store(true, Ordering::SeqCst);
    }
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }
}

impl Default for RunControl {
    fn default() -> Self {
        Self::new()
    }
}
