use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::landmark::Landmark;

/// 姿勢推定器の1画像分の出力
///
/// `landmarks` と `world_landmarks` は検出人物ごとの並列リスト。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PoseResult {
    /// 正規化座標のランドマーク（人物ごと）
    #[serde(default)]
    pub landmarks: Vec<Vec<Landmark>>,
    /// ワールド座標のランドマーク（人物ごと）
    #[serde(default, rename = "worldLandmarks")]
    pub world_landmarks: Vec<Vec<Landmark>>,
}

/// 1人分のランドマーク
#[derive(Debug, Clone, Copy)]
pub struct BodyLandmarks<'a> {
    pub landmarks: &'a [Landmark],
    pub world_landmarks: Option<&'a [Landmark]>,
}

impl PoseResult {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let result: PoseResult =
            serde_json::from_str(json).context("Failed to parse pose result JSON")?;
        Ok(result)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read pose result {}", path.display()))?;
        Self::from_json_str(&content)
    }

    /// 検出人数
    pub fn body_count(&self) -> usize {
        self.landmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    /// 指定インデックスの人物を取得
    pub fn body(&self, index: usize) -> Option<BodyLandmarks<'_>> {
        let landmarks = self.landmarks.get(index)?;
        Some(BodyLandmarks {
            landmarks,
            world_landmarks: self.world_landmarks.get(index).map(Vec::as_slice),
        })
    }
}
