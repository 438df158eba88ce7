use std::sync::Arc;

use pixels::{Error, Pixels, SurfaceTexture};
use winit::window::Window;

use super::Viewport;
use crate::app::scene::{Frame, RectPx};

pub struct Renderer {
    window: Arc<Window>,
    pixels: Pixels<'static>,
    viewport: Viewport,
}

impl Renderer {
    pub fn new(window: Arc<Window>) -> Result<Self, Error> {
        let size = window.inner_size();
        let pixels = Self::build_pixels(Arc::clone(&window), size.width, size.height)?;
        Ok(Self {
            window,
            pixels,
            viewport: Viewport {
                width: size.width,
                height: size.height,
            },
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), Error> {
        if width == 0 || height == 0 {
            return Ok(());
        }
        self.pixels = Self::build_pixels(Arc::clone(&self.window), width, height)?;
        self.viewport = Viewport { width, height };
        Ok(())
    }

    fn build_pixels(
        window: Arc<Window>,
        width: u32,
        height: u32,
    ) -> Result<Pixels<'static>, Error> {
        let surface = SurfaceTexture::new(width, height, window);
        Pixels::new(width, height, surface)
    }

    pub fn render_frame(&mut self, frame: &Frame) -> Result<(), Error> {
        if self.viewport.width == 0 || self.viewport.height == 0 {
            return Ok(());
        }

        let buffer = self.pixels.frame_mut();
        let clear_color = frame.clear_color();
        for chunk in buffer.chunks_exact_mut(4) {
            chunk.copy_from_slice(&clear_color);
        }

        for rect in frame.rects() {
            fill_rect_clipped(buffer, self.viewport.width, self.viewport.height, rect);
        }

        self.pixels.render()
    }
}

fn fill_rect_clipped(buffer: &mut [u8], width: u32, height: u32, rect: &RectPx) {
    let left = rect.x_px.max(0);
    let top = rect.y_px.max(0);
    let right = rect.x_px.saturating_add(rect.width_px as i32).min(width as i32);
    let bottom = rect
        .y_px
        .saturating_add(rect.height_px as i32)
        .min(height as i32);

    if right <= left || bottom <= top {
        return;
    }

    for y in top..bottom {
        let row_start = (y as usize * width as usize + left as usize) * 4;
        let row_end = (y as usize * width as usize + right as usize) * 4;
        for pixel in buffer[row_start..row_end].chunks_exact_mut(4) {
            pixel.copy_from_slice(&rect.color);
        }
    }
}
