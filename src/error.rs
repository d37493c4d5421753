//! ジオメトリ・解析のエラー型

use std::fmt;

/// ジオメトリ計算のエラー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// 大きさゼロのベクトル（一致するランドマーク）が計算に使われた
    DegenerateVector(&'static str),
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateVector(what) => write!(f, "Degenerate vector: {what}"),
        }
    }
}

impl std::error::Error for GeometryError {}

/// 1フレーム解析のエラー
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// 検出結果に人物が含まれない
    NoPoseDetected,
    /// 指定した人物インデックスが検出数を超えている
    BodyOutOfRange { index: usize, count: usize },
    /// 正規化ランドマークはあるがワールドランドマークがない
    MissingWorldLandmarks { index: usize },
    /// ランドマーク数が計算に必要な数に足りない
    TooFewLandmarks {
        index: usize,
        len: usize,
        required: usize,
    },
    /// メトリクス計算の失敗
    Geometry(GeometryError),
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPoseDetected => write!(f, "No pose detected in frame"),
            Self::BodyOutOfRange { index, count } => {
                write!(f, "Body index {index} out of range ({count} detected)")
            }
            Self::MissingWorldLandmarks { index } => {
                write!(f, "World landmarks missing for body {index}")
            }
            Self::TooFewLandmarks {
                index,
                len,
                required,
            } => write!(
                f,
                "Body {index} has {len} landmarks, at least {required} required"
            ),
            Self::Geometry(err) => write!(f, "Metrics error: {err}"),
        }
    }
}

impl std::error::Error for AnalysisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Geometry(err) => Some(err),
            _ => None,
        }
    }
}

impl From<GeometryError> for AnalysisError {
    fn from(err: GeometryError) -> Self {
        Self::Geometry(err)
    }
}
