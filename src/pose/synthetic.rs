use super::joint::JointIndex;
use super::landmark::Landmark;
use crate::geometry::midpoint;

/// 背骨の両端（合成関節）を追加したランドマーク列を返す
///
/// - BottomSpine = 左右ヒップの中点
/// - TopSpine = 左右肩の中点
///
/// 入力は変更しない。既に合成関節を含む列を渡しても同じ式で上書きするだけなので冪等。
/// 入力が 33 未満の場合、隙間は `Landmark::default()` で埋める。
/// ヒップ・肩が入力に無いのは呼び出し側の契約違反。
pub fn derive_synthetic_joints(landmarks: &[Landmark]) -> Vec<Landmark> {
    let bottom_spine = midpoint(
        landmarks[JointIndex::LeftHip.index()],
        landmarks[JointIndex::RightHip.index()],
    );
    let top_spine = midpoint(
        landmarks[JointIndex::LeftShoulder.index()],
        landmarks[JointIndex::RightShoulder.index()],
    );

    let mut augmented = landmarks.to_vec();
    if augmented.len() < JointIndex::COUNT {
        augmented.resize(JointIndex::COUNT, Landmark::default());
    }
    augmented[JointIndex::BottomSpine.index()] = bottom_spine;
    augmented[JointIndex::TopSpine.index()] = top_spine;
    augmented
}
