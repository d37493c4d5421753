use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::geometry::DEFAULT_REFERENCE_HIP_CM;
use crate::render::skeleton::OVERLAY_COLOR;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub metrics: MetricsConfig,
    #[serde(default)]
    pub detection: DetectionConfig,
    #[serde(default)]
    pub overlay: OverlayConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MetricsConfig {
    /// スケール校正に使う腰幅（cm）
    #[serde(default = "default_reference_hip_cm")]
    pub reference_hip_cm: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DetectionConfig {
    /// 解析する人物のインデックス
    #[serde(default)]
    pub body_index: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OverlayConfig {
    /// 点の半径（表示上のピクセル）
    #[serde(default = "default_point_radius")]
    pub point_radius: f32,
    /// 線の太さ（表示上のピクセル）
    #[serde(default = "default_line_width")]
    pub line_width: f32,
    /// 描画色 (0xRRGGBB)
    #[serde(default = "default_color")]
    pub color: u32,
    /// 表示倍率（表示幅 ÷ フレーム幅）
    #[serde(default = "default_zoom")]
    pub zoom: f32,
}

fn default_reference_hip_cm() -> f64 { DEFAULT_REFERENCE_HIP_CM }
fn default_point_radius() -> f32 { 3.0 }
fn default_line_width() -> f32 { 2.0 }
fn default_color() -> u32 { OVERLAY_COLOR }
fn default_zoom() -> f32 { 1.0 }

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            reference_hip_cm: default_reference_hip_cm(),
        }
    }
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self { body_index: 0 }
    }
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            point_radius: default_point_radius(),
            line_width: default_line_width(),
            color: default_color(),
            zoom: default_zoom(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Invalid config")?;
        Ok(config)
    }

    /// 読み込めなければ既定値を使う
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("{} not found, using defaults", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{:#}; using defaults", e);
                Self::default()
            }
        }
    }
}
