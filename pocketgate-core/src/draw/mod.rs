//! Drawing primitives. Every primitive writes into the back buffer of a
//! [`Surface`] and leaves the front buffer alone.
//!
//! Checked primitives validate their whole target area first and return
//! [`DrawError`] without touching a single pixel when it does not fit.

mod blit;
mod line;
mod rect;

use crate::surface::Surface;
use derive_more::{Display, Error};
use log::error;

pub use blit::{ALPHA_CUTOFF, CHROMA_KEY, blend};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum DrawError {
    #[display("area at ({x}, {y}) sized {width}x{height} exceeds the surface")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },
    #[display("source holds {actual} pixels but {expected} are required")]
    SourceTooShort { expected: usize, actual: usize },
}

impl Surface {
    /// Rows are validated as `y <= height` and `rows <= height - y`,
    /// columns the same way against the surface width.
    pub(crate) fn check_area(
        &self,
        y: u16,
        height: u16,
        x: u16,
        width: u16,
    ) -> Result<(), DrawError> {
        let rows_fit = y <= self.height() && height <= self.height() - y;
        let columns_fit = x <= self.width() && width <= self.width() - x;

        if rows_fit && columns_fit {
            return Ok(());
        }

        if !rows_fit {
            error!("Rows {y}..{} out of bounds", y as u32 + height as u32);
        } else {
            error!("Columns {x}..{} out of bounds", x as u32 + width as u32);
        }

        Err(DrawError::OutOfBounds {
            x: x.into(),
            y: y.into(),
            width: width.into(),
            height: height.into(),
        })
    }

    pub(crate) fn check_point(&self, x: i32, y: i32) -> Result<(), DrawError> {
        if (0..self.width() as i32).contains(&x) && (0..self.height() as i32).contains(&y) {
            return Ok(());
        }

        error!("Point ({x}, {y}) out of bounds");

        Err(DrawError::OutOfBounds {
            x,
            y,
            width: 1,
            height: 1,
        })
    }
}

pub(crate) fn check_source_len(expected: usize, actual: usize) -> Result<(), DrawError> {
    if actual < expected {
        error!("Sprite source has {actual} pixels, expected {expected}");
        return Err(DrawError::SourceTooShort { expected, actual });
    }

    Ok(())
}
