//! The premultiplied-RGBA8 draw surface and its compositing primitives.

use crate::assets::decode::SpriteImage;
use crate::foundation::error::{LoomError, LoomResult};
use crate::foundation::math::mul_div255;

/// Logical canvas width in pixels.
pub const CANVAS_WIDTH: u32 = 200;

/// Logical canvas height in pixels.
pub const CANVAS_HEIGHT: u32 = 200;

/// Premultiplied RGBA8 draw surface.
///
/// A render pass composes onto an off-screen `Surface` and publishes it in
/// one step, so a visible surface never exposes a partially drawn frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surface {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Surface {
    /// Create a fully transparent surface.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 4],
        }
    }

    /// Transparent surface at the fixed canvas size.
    pub fn canvas() -> Self {
        Self::new(CANVAS_WIDTH, CANVAS_HEIGHT)
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel bytes in row-major premultiplied RGBA8.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Premultiplied RGBA of one pixel; transparent outside the surface.
    pub fn pixel(&self, x: i32, y: i32) -> [u8; 4] {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return [0; 4];
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        [
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ]
    }

    /// Source-over composite `img` with its top-left corner at `(x, y)`,
    /// clipping anything outside the surface.
    pub(crate) fn blit(&mut self, img: &SpriteImage, x: i32, y: i32) {
        for sy in 0..img.height as i32 {
            let dy = y + sy;
            if dy < 0 || dy >= self.height as i32 {
                continue;
            }
            for sx in 0..img.width as i32 {
                let dx = x + sx;
                if dx < 0 || dx >= self.width as i32 {
                    continue;
                }
                let si = (sy as usize * img.width as usize + sx as usize) * 4;
                let di = (dy as usize * self.width as usize + dx as usize) * 4;
                let src = [
                    img.rgba8_premul[si],
                    img.rgba8_premul[si + 1],
                    img.rgba8_premul[si + 2],
                    img.rgba8_premul[si + 3],
                ];
                let dst = [
                    self.data[di],
                    self.data[di + 1],
                    self.data[di + 2],
                    self.data[di + 3],
                ];
                let out = over(dst, src);
                self.data[di..di + 4].copy_from_slice(&out);
            }
        }
    }

    /// Nearest-neighbor scaled copy.
    pub fn scale_nearest(&self, scale: f64) -> LoomResult<Surface> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(LoomError::validation("scale must be finite and > 0"));
        }
        if (scale - 1.0).abs() < f64::EPSILON {
            return Ok(self.clone());
        }

        let out_w = ((f64::from(self.width) * scale).round() as u32).max(1);
        let out_h = ((f64::from(self.height) * scale).round() as u32).max(1);
        let mut out = Surface::new(out_w, out_h);
        for y in 0..out_h {
            let sy = ((f64::from(y) / scale) as u32).min(self.height - 1);
            for x in 0..out_w {
                let sx = ((f64::from(x) / scale) as u32).min(self.width - 1);
                let si = (sy as usize * self.width as usize + sx as usize) * 4;
                let di = (y as usize * out_w as usize + x as usize) * 4;
                out.data[di..di + 4].copy_from_slice(&self.data[si..si + 4]);
            }
        }
        Ok(out)
    }
}

/// Source-over for premultiplied RGBA8 pixels.
fn over(dst: [u8; 4], src: [u8; 4]) -> [u8; 4] {
    if src[3] == 0 {
        return dst;
    }
    if src[3] == 255 {
        return src;
    }

    let inv = 255u16 - u16::from(src[3]);
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = src[i].saturating_add(mul_div255(u16::from(dst[i]), inv));
    }
    out
}
