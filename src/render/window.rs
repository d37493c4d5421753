use anyhow::Result;
use minifb::{Key, Window, WindowOptions};

use super::buffer::FrameBuffer;

/// minifbを使用したオーバーレイ表示ウィンドウ
pub struct MinifbRenderer {
    window: Window,
    width: usize,
    height: usize,
}

impl MinifbRenderer {
    /// ウィンドウを作成
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self> {
        let mut window = Window::new(
            title,
            width,
            height,
            WindowOptions {
                resize: false,
                ..WindowOptions::default()
            },
        )?;
        window.set_target_fps(30);

        Ok(Self {
            window,
            width,
            height,
        })
    }

    /// ウィンドウが開いているか（ESCで閉じる）
    pub fn is_open(&self) -> bool {
        self.window.is_open() && !self.window.is_key_down(Key::Escape)
    }

    /// バッファをウィンドウに表示
    pub fn show(&mut self, frame: &FrameBuffer) -> Result<()> {
        anyhow::ensure!(
            frame.width() == self.width && frame.height() == self.height,
            "Frame size {}x{} does not match window {}x{}",
            frame.width(),
            frame.height(),
            self.width,
            self.height
        );
        self.window
            .update_with_buffer(frame.pixels(), self.width, self.height)?;
        Ok(())
    }
}
