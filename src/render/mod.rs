pub mod buffer;
pub mod overlay;
pub mod skeleton;
#[cfg(feature = "desktop")]
pub mod window;

pub use buffer::FrameBuffer;
pub use overlay::{draw_overlay, plan_overlay, DrawSurface, Overlay, OverlayStyle, PixelLine, PixelPoint};
pub use skeleton::{is_display_suppressed, resolve_bones, Bone, DISPLAY_FILTER, OVERLAY_COLOR};
#[cfg(feature = "desktop")]
pub use window::MinifbRenderer;
