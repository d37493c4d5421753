//! 姿勢ランドマークから骨格オーバーレイとスタンス計測値を作るライブラリ
//!
//! 推定器の出力（正規化ランドマーク・ワールドランドマーク）を受け取り、
//! 背骨の合成関節を追加し、描画用のピクセル座標と計測値を返す。

pub mod analysis;
pub mod config;
pub mod error;
pub mod geometry;
pub mod metrics;
pub mod pose;
pub mod render;

pub use analysis::{analyze_frame, FrameAnalysis};
pub use error::{AnalysisError, GeometryError};
pub use metrics::{compute_position_details, MetricEntry, MetricsBundle};
pub use pose::{derive_synthetic_joints, JointIndex, Landmark, PoseResult, Vector3};
