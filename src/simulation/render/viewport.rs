/// Window size as reported by the host page. The canvas is drawn at
/// `scale` of it; camera projection lives on the JS side and only needs the
/// aspect ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub window_width: u32,
    pub window_height: u32,
    pub scale: f32,
}

impl Viewport {
    pub fn new(scale: f32) -> Self {
        Self { window_width: 0, window_height: 0, scale }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.window_width = width;
        self.window_height = height;
    }

    pub fn canvas_size(&self) -> (u32, u32) {
        (
            (self.window_width as f32 * self.scale) as u32,
            (self.window_height as f32 * self.scale) as u32,
        )
    }

    /// Width / height of the window; 1.0 until the first resize
    pub fn aspect(&self) -> f32 {
        if self.window_height == 0 {
            1.0
        } else {
            self.window_width as f32 / self.window_height as f32
        }
    }
}
