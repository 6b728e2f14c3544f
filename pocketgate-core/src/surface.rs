//! Double-buffered pixel surface.
//!
//! Drawing goes to the back buffer, the transfer layer reads the front
//! buffer. [`Surface::swap`] exchanges the two boxed slices, so only the
//! pointers move and pixel data is never copied.

use crate::color::Rgb565;
use crate::config::DisplayConfig;
use log::trace;
use std::mem;

#[derive(Debug)]
pub struct Surface {
    config: DisplayConfig,
    front: Box<[Rgb565]>,
    back: Box<[Rgb565]>,
}

impl Surface {
    pub fn new(config: DisplayConfig) -> Self {
        let pixel_count = config.pixel_count();

        Self {
            config,
            front: vec![Rgb565::BLACK; pixel_count].into_boxed_slice(),
            back: vec![Rgb565::BLACK; pixel_count].into_boxed_slice(),
        }
    }

    pub fn config(&self) -> DisplayConfig {
        self.config
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.config.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.config.height
    }

    /// Writes outside the surface are dropped.
    pub fn set_pixel(&mut self, x: u16, y: u16, color: Rgb565) {
        if x >= self.width() || y >= self.height() {
            return;
        }

        let index = self.index(x, y);
        self.back[index] = color;
    }

    pub fn fill(&mut self, color: Rgb565) {
        self.back.fill(color);
    }

    pub fn swap(&mut self) {
        mem::swap(&mut self.front, &mut self.back);
        trace!("Swapped buffers, front now at {:p}", self.front.as_ptr());
    }

    pub fn front_buffer(&self) -> &[Rgb565] {
        &self.front
    }

    pub fn back_buffer(&self) -> &[Rgb565] {
        &self.back
    }

    pub(crate) fn front_buffer_mut(&mut self) -> &mut [Rgb565] {
        &mut self.front
    }

    pub(crate) fn back_buffer_mut(&mut self) -> &mut [Rgb565] {
        &mut self.back
    }

    /// Back-buffer pixel, `None` outside the surface.
    pub fn pixel(&self, x: u16, y: u16) -> Option<Rgb565> {
        if x >= self.width() || y >= self.height() {
            return None;
        }

        Some(self.back[self.index(x, y)])
    }

    #[inline]
    pub(crate) fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width() as usize + x as usize
    }
}
