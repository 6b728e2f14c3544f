//! Moving the front buffer onto the display bus.
//!
//! The panel expects every 16-bit pixel most significant byte first. Pixels
//! stay in native order while resident in a [`Surface`]; [`Surface::present`]
//! converts the front buffer to bus order in place, transmits it as one
//! block and converts it back before returning, even if the bus failed.

use crate::color::Rgb565;
use crate::config::DisplayConfig;
use crate::surface::Surface;
use crate::Result;
use log::debug;

/// Inclusive pixel rectangle addressed by the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub x1: u16,
    pub y1: u16,
    pub x2: u16,
    pub y2: u16,
}

impl Window {
    pub fn new(x1: u16, y1: u16, x2: u16, y2: u16) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn full_screen(config: DisplayConfig) -> Self {
        Self::new(
            0,
            0,
            config.width.saturating_sub(1),
            config.height.saturating_sub(1),
        )
    }

    /// Bytes a transfer into this window carries.
    pub fn byte_len(&self) -> usize {
        let columns = (self.x2 as usize + 1).saturating_sub(self.x1 as usize);
        let rows = (self.y2 as usize + 1).saturating_sub(self.y1 as usize);

        columns * rows * 2
    }
}

/// The two primitives required from the display driver.
pub trait DisplayBus {
    fn set_window(&mut self, window: Window) -> Result<()>;

    /// Blocks until all of `data` has been written.
    fn transmit(&mut self, data: &[u8]) -> Result<()>;
}

impl<B: DisplayBus + ?Sized> DisplayBus for &mut B {
    fn set_window(&mut self, window: Window) -> Result<()> {
        (**self).set_window(window)
    }

    fn transmit(&mut self, data: &[u8]) -> Result<()> {
        (**self).transmit(data)
    }
}

/// Bus that keeps everything it is sent.
#[derive(Debug, Default)]
pub struct RecordingBus {
    pub windows: Vec<Window>,
    pub frames: Vec<Vec<u8>>,
}

impl RecordingBus {
    pub fn last_frame(&self) -> Option<&[u8]> {
        self.frames.last().map(Vec::as_slice)
    }

    /// Decodes the most recent transmission back into pixels.
    pub fn last_frame_pixels(&self) -> Option<Vec<Rgb565>> {
        self.last_frame().map(from_bus_order)
    }
}

impl DisplayBus for RecordingBus {
    fn set_window(&mut self, window: Window) -> Result<()> {
        self.windows.push(window);

        Ok(())
    }

    fn transmit(&mut self, data: &[u8]) -> Result<()> {
        self.frames.push(data.to_vec());

        Ok(())
    }
}

/// Reads big-endian pixel pairs as they appear on the wire.
pub fn from_bus_order(bytes: &[u8]) -> Vec<Rgb565> {
    bytes
        .chunks_exact(2)
        .map(|pair| Rgb565(u16::from_be_bytes([pair[0], pair[1]])))
        .collect()
}

fn to_bus_order(pixels: &mut [Rgb565]) {
    for pixel in bytemuck::cast_slice_mut::<Rgb565, u16>(pixels) {
        *pixel = pixel.to_be();
    }
}

fn to_native_order(pixels: &mut [Rgb565]) {
    for pixel in bytemuck::cast_slice_mut::<Rgb565, u16>(pixels) {
        *pixel = u16::from_be(*pixel);
    }
}

impl Surface {
    /// Sends the whole front buffer to `bus`.
    pub fn present<B: DisplayBus>(&mut self, mut bus: B) -> Result<()> {
        let window = Window::full_screen(self.config());
        debug!("Presenting {} bytes into {window:?}", window.byte_len());

        bus.set_window(window)?;

        let front = self.front_buffer_mut();
        to_bus_order(front);
        let sent = bus.transmit(bytemuck::cast_slice::<Rgb565, u8>(front));
        to_native_order(front);

        sent
    }

    /// Clears both buffers to black and shows the result.
    pub fn init<B: DisplayBus>(&mut self, bus: B) -> Result<()> {
        self.fill(Rgb565::BLACK);
        self.swap();
        self.fill(Rgb565::BLACK);

        self.present(bus)
    }
}
