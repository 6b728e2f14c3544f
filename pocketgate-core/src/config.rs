/// Pixel dimensions of the attached panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    pub width: u16,
    pub height: u16,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: Self::LANDSCAPE_WIDTH,
            height: Self::LANDSCAPE_HEIGHT,
        }
    }
}

impl DisplayConfig {
    const LANDSCAPE_WIDTH: u16 = 160;
    const LANDSCAPE_HEIGHT: u16 = 128;

    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Same panel rotated by 90 degrees (the ST7735 boots as 128x160).
    pub fn portrait() -> Self {
        Self {
            width: Self::LANDSCAPE_HEIGHT,
            height: Self::LANDSCAPE_WIDTH,
        }
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Number of bytes a full-screen transfer puts on the bus.
    pub fn frame_bytes(&self) -> usize {
        self.pixel_count() * 2
    }
}
