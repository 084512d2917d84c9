use crate::graphics::{CpuRenderer, Renderer2d};
use crate::surface::{Surface, SurfaceSize};

use pixels::Pixels;

/// Windowed presenter built on `pixels`.
///
/// The pixel buffer keeps the fixed canvas size for the whole session; `pixels` scales it to the
/// window surface (letterboxing when the aspect ratio differs), so game code always draws into
/// the same logical canvas.
pub struct PixelsRenderer2d {
    pixels: Pixels,
    canvas: SurfaceSize,
}

impl PixelsRenderer2d {
    pub fn new(pixels: Pixels, canvas: SurfaceSize) -> Self {
        Self { pixels, canvas }
    }

    /// Follows a window resize. The canvas resolution does not change.
    pub fn resize_surface(&mut self, window: SurfaceSize) -> Result<(), pixels::Error> {
        if window.is_empty() {
            return Ok(());
        }
        self.pixels.resize_surface(window.width, window.height)?;
        Ok(())
    }

    /// Maps a physical window position to canvas pixel coordinates.
    ///
    /// Positions in the letterbox margins map to `None`.
    pub fn window_pos_to_canvas(&self, pos: (f32, f32)) -> Option<(u32, u32)> {
        self.pixels
            .window_pos_to_pixel(pos)
            .ok()
            .map(|(x, y)| (x as u32, y as u32))
    }

    pub fn draw_frame<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut dyn Renderer2d) -> R,
    {
        let size = self.canvas;
        let mut cpu = CpuRenderer::new(self.pixels.frame_mut(), size);
        cpu.begin_frame(size);
        f(&mut cpu)
    }
}

impl Surface for PixelsRenderer2d {
    type Error = pixels::Error;

    fn size(&self) -> SurfaceSize {
        self.canvas
    }

    fn frame_mut(&mut self) -> &mut [u8] {
        self.pixels.frame_mut()
    }

    fn present(&mut self) -> Result<(), Self::Error> {
        self.pixels.render()
    }
}
