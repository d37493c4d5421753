use crate::pose::JointIndex;

/// 描画する骨（関節ペア）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bone {
    RightTibia,
    RightFemur,
    Hips,
    LeftFemur,
    LeftTibia,
    RightForearm,
    RightUpperArm,
    Shoulders,
    LeftUpperArm,
    LeftForearm,
    Spine,
}

impl Bone {
    pub const COUNT: usize = 11;

    pub const ALL: [Bone; Self::COUNT] = [
        Self::RightTibia,
        Self::RightFemur,
        Self::Hips,
        Self::LeftFemur,
        Self::LeftTibia,
        Self::RightForearm,
        Self::RightUpperArm,
        Self::Shoulders,
        Self::LeftUpperArm,
        Self::LeftForearm,
        Self::Spine,
    ];

    /// 両端の関節
    pub const fn joints(self) -> (JointIndex, JointIndex) {
        use JointIndex::*;
        match self {
            Self::RightTibia => (RightAnkle, RightKnee),
            Self::RightFemur => (RightKnee, RightHip),
            Self::Hips => (RightHip, LeftHip),
            Self::LeftFemur => (LeftKnee, LeftHip),
            Self::LeftTibia => (LeftKnee, LeftAnkle),
            Self::RightForearm => (RightWrist, RightElbow),
            Self::RightUpperArm => (RightElbow, RightShoulder),
            Self::Shoulders => (RightShoulder, LeftShoulder),
            Self::LeftUpperArm => (LeftShoulder, LeftElbow),
            Self::LeftForearm => (LeftElbow, LeftWrist),
            Self::Spine => (BottomSpine, TopSpine),
        }
    }

    /// 両端のランドマークインデックス
    pub const fn indices(self) -> (usize, usize) {
        let (a, b) = self.joints();
        (a.index(), b.index())
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::RightTibia => "RTIBIA",
            Self::RightFemur => "RFEMUR",
            Self::Hips => "HIPS",
            Self::LeftFemur => "LFEMUR",
            Self::LeftTibia => "LTIBIA",
            Self::RightForearm => "RFOREARM",
            Self::RightUpperArm => "RUPPERARM",
            Self::Shoulders => "SHOULDERS",
            Self::LeftUpperArm => "LUPPERARM",
            Self::LeftForearm => "LFOREARM",
            Self::Spine => "SPINE",
        }
    }
}

/// 骨格の接続を (開始, 終了) のインデックスで返す
pub fn resolve_bones() -> Vec<(usize, usize)> {
    Bone::ALL.iter().map(|bone| bone.indices()).collect()
}

/// 点を描かないランドマーク（顔・手指・足先）
///
/// 線やメトリクスには使うが、画面がごちゃつくので点は省略する。
pub const DISPLAY_FILTER: [usize; 21] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 17, 18, 19, 20, 21, 22, 29, 30, 31, 32,
];

pub fn is_display_suppressed(joint_index: usize) -> bool {
    DISPLAY_FILTER.contains(&joint_index)
}

/// オーバーレイの既定色 (RGB)
pub const OVERLAY_COLOR: u32 = 0xFF0000; // 赤
