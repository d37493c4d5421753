//! 1フレーム分の解析: 合成関節の追加・計測・描画内容の作成

use crate::error::AnalysisError;
use crate::metrics::{compute_position_details, MetricsBundle};
use crate::pose::{derive_synthetic_joints, JointIndex, Landmark, PoseResult};
use crate::render::{is_display_suppressed, plan_overlay, resolve_bones, Overlay, OverlayStyle};

/// 合成関節の導出に必要な正規化ランドマーク数（肩・腰まで）
pub const MIN_LANDMARKS: usize = JointIndex::RightHip.index() + 1;
/// 計測に必要なワールドランドマーク数（足首まで）
pub const MIN_WORLD_LANDMARKS: usize = JointIndex::RightAnkle.index() + 1;

/// 解析結果
#[derive(Debug, Clone)]
pub struct FrameAnalysis {
    /// 背骨の合成関節を追加した正規化ランドマーク
    pub landmarks: Vec<Landmark>,
    pub metrics: MetricsBundle,
}

impl FrameAnalysis {
    /// キャンバスサイズに合わせた描画内容
    pub fn overlay(&self, width: u32, height: u32, style: OverlayStyle) -> Overlay {
        plan_overlay(
            &self.landmarks,
            &resolve_bones(),
            is_display_suppressed,
            width,
            height,
            style,
        )
    }
}

/// 推定結果から指定人物を解析する
pub fn analyze_frame(
    result: &PoseResult,
    body_index: usize,
    reference_cm: f64,
) -> Result<FrameAnalysis, AnalysisError> {
    if result.is_empty() {
        return Err(AnalysisError::NoPoseDetected);
    }
    let body = result.body(body_index).ok_or(AnalysisError::BodyOutOfRange {
        index: body_index,
        count: result.body_count(),
    })?;
    let world = body
        .world_landmarks
        .ok_or(AnalysisError::MissingWorldLandmarks { index: body_index })?;

    ensure_len(body_index, body.landmarks, MIN_LANDMARKS)?;
    ensure_len(body_index, world, MIN_WORLD_LANDMARKS)?;

    let landmarks = derive_synthetic_joints(body.landmarks);
    let metrics = compute_position_details(world, reference_cm).map_err(|e| {
        tracing::warn!(body_index, "degenerate frame: {}", e);
        AnalysisError::from(e)
    })?;

    tracing::info!(
        body_index,
        bodies = result.body_count(),
        landmarks = landmarks.len(),
        "frame analyzed"
    );
    Ok(FrameAnalysis { landmarks, metrics })
}

/// 推定結果は外部入力なので、コアに渡す前に長さを確認する
fn ensure_len(index: usize, landmarks: &[Landmark], required: usize) -> Result<(), AnalysisError> {
    if landmarks.len() < required {
        return Err(AnalysisError::TooFewLandmarks {
            index,
            len: landmarks.len(),
            required,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeometryError;
    use crate::geometry::DEFAULT_REFERENCE_HIP_CM;

    fn body(scale: f64) -> Vec<Landmark> {
        let mut lms: Vec<Landmark> = (0..JointIndex::DETECTED_COUNT)
            .map(|i| Landmark::new(0.3 + i as f64 * 0.01, 0.2 + i as f64 * 0.02, 0.0))
            .map(|lm| Landmark::new(lm.x * scale, lm.y * scale, lm.z * scale))
            .collect();
        lms[JointIndex::LeftHip.index()] = Landmark::new(0.0, 0.0, 0.0);
        lms[JointIndex::RightHip.index()] = Landmark::new(20.0 * scale, 0.0, 0.0);
        lms[JointIndex::LeftKnee.index()] = Landmark::new(-5.0 * scale, 30.0 * scale, 0.0);
        lms[JointIndex::RightKnee.index()] = Landmark::new(5.0 * scale, 30.0 * scale, 0.0);
        lms
    }

    fn result() -> PoseResult {
        PoseResult {
            landmarks: vec![body(0.01)],
            world_landmarks: vec![body(1.0)],
        }
    }

    #[test]
    fn test_analyze_frame() {
        let analysis = analyze_frame(&result(), 0, DEFAULT_REFERENCE_HIP_CM).unwrap();
        assert_eq!(analysis.landmarks.len(), JointIndex::COUNT);
        assert_eq!(analysis.metrics.knee_distance, 10.0);

        let overlay = analysis.overlay(640, 480, OverlayStyle::default());
        assert_eq!(overlay.lines.len(), 11);
        assert_eq!(overlay.points.len(), 14);
    }

    #[test]
    fn test_no_pose() {
        let err = analyze_frame(&PoseResult::default(), 0, DEFAULT_REFERENCE_HIP_CM).unwrap_err();
        assert_eq!(err, AnalysisError::NoPoseDetected);
    }

    #[test]
    fn test_body_out_of_range() {
        let err = analyze_frame(&result(), 1, DEFAULT_REFERENCE_HIP_CM).unwrap_err();
        assert_eq!(err, AnalysisError::BodyOutOfRange { index: 1, count: 1 });
    }

    #[test]
    fn test_missing_world() {
        let mut r = result();
        r.world_landmarks.clear();
        let err = analyze_frame(&r, 0, DEFAULT_REFERENCE_HIP_CM).unwrap_err();
        assert_eq!(err, AnalysisError::MissingWorldLandmarks { index: 0 });
    }

    #[test]
    fn test_short_body() {
        let mut r = result();
        r.landmarks[0].truncate(10);
        let err = analyze_frame(&r, 0, DEFAULT_REFERENCE_HIP_CM).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::TooFewLandmarks { index: 0, len: 10, required: 25 }
        );
    }

    #[test]
    fn test_short_world_body() {
        let mut r = result();
        r.world_landmarks[0].truncate(25);
        let err = analyze_frame(&r, 0, DEFAULT_REFERENCE_HIP_CM).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::TooFewLandmarks { index: 0, len: 25, required: 29 }
        );
    }

    #[test]
    fn test_minimum_lengths_accepted() {
        let mut r = result();
        r.landmarks[0].truncate(MIN_LANDMARKS);
        r.world_landmarks[0].truncate(MIN_WORLD_LANDMARKS);
        let analysis = analyze_frame(&r, 0, DEFAULT_REFERENCE_HIP_CM).unwrap();
        assert_eq!(analysis.landmarks.len(), JointIndex::COUNT);
        assert_eq!(analysis.metrics.knee_distance, 10.0);
    }

    #[test]
    fn test_degenerate_propagates() {
        let mut r = result();
        r.world_landmarks[0][JointIndex::RightHip.index()] = Landmark::new(0.0, 0.0, 0.0);
        let err = analyze_frame(&r, 0, DEFAULT_REFERENCE_HIP_CM).unwrap_err();
        assert!(matches!(err, AnalysisError::Geometry(GeometryError::DegenerateVector(_))));
    }
}
