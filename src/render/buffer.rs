use super::overlay::DrawSurface;

/// RGB (0x00RRGGBB) のソフトウェア描画バッファ
///
/// minifb の `update_with_buffer` にそのまま渡せる形式。
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0u32; width * height],
        }
    }

    /// RGB8 のバイト列から作成（長さ不足の部分は黒）
    pub fn from_rgb8(width: usize, height: usize, rgb: &[u8]) -> Self {
        let mut buffer = Self::new(width, height);
        for (pixel, chunk) in buffer.pixels.iter_mut().zip(rgb.chunks_exact(3)) {
            *pixel = ((chunk[0] as u32) << 16) | ((chunk[1] as u32) << 8) | chunk[2] as u32;
        }
        buffer
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// RGB8 のバイト列に変換
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|&p| [(p >> 16) as u8, (p >> 8) as u8, p as u8])
            .collect()
    }

    /// ピクセルをセット（境界チェック付き）
    fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            self.pixels[y as usize * self.width + x as usize] = color;
        }
    }

    /// 塗りつぶし円（radius 0 は1ピクセル）
    fn stamp(&mut self, cx: i32, cy: i32, radius: i32, color: u32) {
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy <= radius * radius {
                    self.set_pixel(cx + dx, cy + dy, color);
                }
            }
        }
    }
}

impl DrawSurface for FrameBuffer {
    fn fill_circle(&mut self, cx: i32, cy: i32, radius: u32, color: u32) {
        self.stamp(cx, cy, radius as i32, color);
    }

    /// Bresenhamのアルゴリズムで線を描画
    ///
    /// 太さは各ステップで半径 width/2 の円を押して表現する。
    fn draw_line(&mut self, from: (i32, i32), to: (i32, i32), width: u32, color: u32) {
        let (x0, y0) = from;
        let (x1, y1) = to;
        let half = (width / 2) as i32;

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        let mut x = x0;
        let mut y = y0;

        loop {
            self.stamp(x, y, half, color);

            if x == x1 && y == y1 {
                break;
            }

            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }
}
