//! ワールド座標からのスタンス計測

use serde::Serialize;

use crate::error::GeometryError;
use crate::geometry::{angle_between, distance_3d, round_half_up, scale_coefficient, vector_between};
use crate::pose::{JointIndex, Landmark};

/// 1フレーム分の計測結果（cm / 度、整数に丸め済み）
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsBundle {
    pub knee_distance: f64,
    pub ankle_distance: f64,
    pub tibia_angle_difference: f64,
    pub shoulder_distance: f64,
}

/// 表示用の名前と整形済みの値
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricEntry {
    pub name: &'static str,
    pub value: String,
}

impl MetricEntry {
    fn new(name: &'static str, value: f64, unit: &str) -> Self {
        Self {
            name,
            value: format!("{value}{unit}"),
        }
    }
}

impl MetricsBundle {
    /// 表示側に渡すフラットな一覧
    ///
    /// 肩幅は構造体（JSON出力）にだけ含め、表示一覧には出さない。
    pub fn entries(&self) -> Vec<MetricEntry> {
        vec![
            MetricEntry::new("kneeDistance", self.knee_distance, "cm"),
            MetricEntry::new("ankleDistance", self.ankle_distance, "cm"),
            MetricEntry::new("tibiaAngleDifference", self.tibia_angle_difference, "°"),
        ]
    }
}

fn at(world: &[Landmark], joint: JointIndex) -> Landmark {
    world[joint.index()]
}

/// 左右の脛ベクトル（膝 - 足首）のなす角（度）
///
/// 両脚とも同じ向きで定義するので、平行に揃っていれば 0°。
pub fn tibia_angle_difference(world: &[Landmark]) -> Result<f64, GeometryError> {
    let right = vector_between(at(world, JointIndex::RightKnee), at(world, JointIndex::RightAnkle));
    let left = vector_between(at(world, JointIndex::LeftKnee), at(world, JointIndex::LeftAnkle));
    angle_between(right, left)
}

/// ワールド座標から計測値をまとめて計算
///
/// 腰幅を `reference_cm` とみなしてスケールを決め、各距離をcmに換算する。
pub fn compute_position_details(
    world: &[Landmark],
    reference_cm: f64,
) -> Result<MetricsBundle, GeometryError> {
    let coef = scale_coefficient(
        at(world, JointIndex::LeftHip),
        at(world, JointIndex::RightHip),
        reference_cm,
    )?;

    let scaled = |a: JointIndex, b: JointIndex| round_half_up(coef * distance_3d(at(world, a), at(world, b)));

    let bundle = MetricsBundle {
        knee_distance: scaled(JointIndex::LeftKnee, JointIndex::RightKnee),
        ankle_distance: scaled(JointIndex::LeftAnkle, JointIndex::RightAnkle),
        tibia_angle_difference: round_half_up(tibia_angle_difference(world)?),
        shoulder_distance: scaled(JointIndex::LeftShoulder, JointIndex::RightShoulder),
    };
    tracing::debug!(coef, ?bundle, "position details");
    Ok(bundle)
}
