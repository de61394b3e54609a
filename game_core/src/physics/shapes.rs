//! Path: game_core/src/physics/shapes.rs
//! Summary: 円・スイープ矩形の当たり判定プリミティブ

/// 円 vs 円。縮退入力（NaN・ゼロ半径）は「当たりなし」に倒す。
pub fn circle_hits_circle(ax: f32, ay: f32, ar: f32, bx: f32, by: f32, br: f32) -> bool {
    let hit_r = ar + br;
    if !hit_r.is_finite() || hit_r <= 0.0 {
        return false;
    }
    let dx = ax - bx;
    let dy = ay - by;
    dx * dx + dy * dy < hit_r * hit_r
}

/// 原点 `(ox, oy)` から `angle` 方向に伸びる長さ `length`・半幅 `half_width` の
/// スイープ矩形 vs 円。円の中心を矩形ローカル座標へ回転してから軸判定する。
pub fn sweep_rect_hits_circle(
    ox: f32,
    oy: f32,
    angle: f32,
    length: f32,
    half_width: f32,
    cx: f32,
    cy: f32,
    cr: f32,
) -> bool {
    if length <= 0.0 || half_width <= 0.0 {
        return false;
    }
    let (sin, cos) = angle.sin_cos();
    let dx = cx - ox;
    let dy = cy - oy;
    // ローカル座標: local_x は矩形の長手方向、local_y は横方向
    let local_x = dx * cos + dy * sin;
    let local_y = -dx * sin + dy * cos;
    local_x >= -cr && local_x <= length + cr && local_y.abs() <= half_width + cr
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circles_overlap() {
        assert!(circle_hits_circle(0.0, 0.0, 5.0, 8.0, 0.0, 5.0));
        assert!(!circle_hits_circle(0.0, 0.0, 5.0, 11.0, 0.0, 5.0));
    }

    #[test]
    fn degenerate_circle_never_hits() {
        assert!(!circle_hits_circle(0.0, 0.0, 0.0, 0.0, 0.0, 0.0));
        assert!(!circle_hits_circle(0.0, 0.0, f32::NAN, 1.0, 1.0, 1.0));
    }

    #[test]
    fn sweep_hits_circle_ahead_only() {
        // 右向きスイープ: 前方の円には当たり、背後の円には当たらない
        assert!(sweep_rect_hits_circle(0.0, 0.0, 0.0, 100.0, 20.0, 60.0, 0.0, 10.0));
        assert!(!sweep_rect_hits_circle(0.0, 0.0, 0.0, 100.0, 20.0, -60.0, 0.0, 10.0));
        // 横に外れた円
        assert!(!sweep_rect_hits_circle(0.0, 0.0, 0.0, 100.0, 20.0, 50.0, 45.0, 10.0));
    }

    #[test]
    fn sweep_respects_facing_angle() {
        let up = std::f32::consts::FRAC_PI_2;
        assert!(sweep_rect_hits_circle(0.0, 0.0, up, 100.0, 20.0, 0.0, 60.0, 10.0));
        assert!(!sweep_rect_hits_circle(0.0, 0.0, up, 100.0, 20.0, 60.0, 0.0, 10.0));
    }

    #[test]
    fn zero_length_sweep_never_hits() {
        assert!(!sweep_rect_hits_circle(0.0, 0.0, 0.0, 0.0, 20.0, 0.0, 0.0, 10.0));
    }
}
