use serde::Serialize;

use crate::config::OverlayConfig;
use crate::geometry::{project_to_pixel_space, round_half_up};
use crate::pose::Landmark;

/// 点・線の描画スタイル（ピクセル）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OverlayStyle {
    pub point_radius: u32,
    pub line_width: u32,
    pub color: u32,
}

impl OverlayStyle {
    /// 表示倍率に合わせてスタイルを作成
    ///
    /// `zoom` は表示幅 ÷ キャンバス幅。縮小表示でも見た目の太さが変わらないよう
    /// 基準値を zoom で割る。0以下・非有限の zoom は 1.0 として扱う。
    pub fn scaled(config: &OverlayConfig, zoom: f32) -> Self {
        let zoom = if zoom.is_finite() && zoom > 0.0 { zoom } else { 1.0 };
        Self {
            point_radius: round_half_up(f64::from(config.point_radius / zoom)).max(1.0) as u32,
            line_width: round_half_up(f64::from(config.line_width / zoom)).max(1.0) as u32,
            color: config.color,
        }
    }
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self::scaled(&OverlayConfig::default(), 1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PixelPoint {
    pub joint: usize,
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PixelLine {
    pub from: (i32, i32),
    pub to: (i32, i32),
}

/// 1フレーム分の描画内容
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overlay {
    pub width: u32,
    pub height: u32,
    pub style: OverlayStyle,
    pub points: Vec<PixelPoint>,
    pub lines: Vec<PixelLine>,
}

/// 描画先（キャンバス）
pub trait DrawSurface {
    fn fill_circle(&mut self, cx: i32, cy: i32, radius: u32, color: u32);
    fn draw_line(&mut self, from: (i32, i32), to: (i32, i32), width: u32, color: u32);
}

/// ランドマークと骨からピクセル座標の描画内容を作る
///
/// 非表示指定のランドマークは点を省略する（線には使う）。
/// 端点がランドマーク列に無い骨はスキップする。
pub fn plan_overlay<F>(
    landmarks: &[Landmark],
    bones: &[(usize, usize)],
    is_suppressed: F,
    width: u32,
    height: u32,
    style: OverlayStyle,
) -> Overlay
where
    F: Fn(usize) -> bool,
{
    let points = landmarks
        .iter()
        .enumerate()
        .filter(|(i, _)| !is_suppressed(*i))
        .map(|(i, lm)| {
            let (x, y) = project_to_pixel_space(*lm, width, height);
            PixelPoint { joint: i, x, y }
        })
        .collect();

    let lines = bones
        .iter()
        .filter_map(|&(a, b)| {
            let start = landmarks.get(a)?;
            let end = landmarks.get(b)?;
            Some(PixelLine {
                from: project_to_pixel_space(*start, width, height),
                to: project_to_pixel_space(*end, width, height),
            })
        })
        .collect();

    Overlay {
        width,
        height,
        style,
        points,
        lines,
    }
}

/// 描画内容を描画先に渡す（点 → 線の順）
pub fn draw_overlay<S: DrawSurface + ?Sized>(surface: &mut S, overlay: &Overlay) {
    let style = overlay.style;
    for point in &overlay.points {
        surface.fill_circle(point.x, point.y, style.point_radius, style.color);
    }
    for line in &overlay.lines {
        surface.draw_line(line.from, line.to, style.line_width, style.color);
    }
}
