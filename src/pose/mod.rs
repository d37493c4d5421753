pub mod joint;
pub mod landmark;
pub mod result;
pub mod synthetic;

pub use joint::JointIndex;
pub use landmark::{Landmark, Vector3};
pub use result::{BodyLandmarks, PoseResult};
pub use synthetic::derive_synthetic_joints;
