//! Packed 16-bit color as the panel consumes it:
//!
//! ```text
//! 15      11 10        5 4       0
//! ---------- ----------- ---------
//! R R R R R  G G G G G G B B B B B
//! ```
//!
//! Values held in a surface are always in host (native) byte order. The
//! conversion to bus order happens only inside the transfer layer.

use bytemuck::{Pod, Zeroable};
use derive_more::{Display, From, Into};

pub type Rgb888 = (u8, u8, u8);

const RED_MASK: u16 = 0x1f;
const GREEN_MASK: u16 = 0x3f;
const BLUE_MASK: u16 = 0x1f;

#[repr(transparent)]
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Pod, Zeroable, Display, From, Into,
)]
#[display("{_0:#06x}")]
pub struct Rgb565(pub u16);

impl Rgb565 {
    pub const RED: Self = Self(0xf800);
    pub const GREEN: Self = Self(0x07e0);
    pub const BLUE: Self = Self(0x001f);
    pub const WHITE: Self = Self(0xffff);
    pub const BLACK: Self = Self(0x0000);
    pub const GRAY: Self = Self(0x8410);
    pub const YELLOW: Self = Self(0xffe0);
    pub const CYAN: Self = Self(0x07ff);
    pub const MAGENTA: Self = Self(0xf81f);

    pub const fn from_channels(red: u8, green: u8, blue: u8) -> Self {
        Self(
            ((red as u16 & RED_MASK) << 11)
                | ((green as u16 & GREEN_MASK) << 5)
                | (blue as u16 & BLUE_MASK),
        )
    }

    /// Drops the low bits of every 8-bit channel.
    pub const fn from_rgb888(red: u8, green: u8, blue: u8) -> Self {
        Self::from_channels(red >> 3, green >> 2, blue >> 3)
    }

    /// 5-bit red channel.
    #[inline]
    pub const fn red(self) -> u8 {
        ((self.0 >> 11) & RED_MASK) as u8
    }

    /// 6-bit green channel.
    #[inline]
    pub const fn green(self) -> u8 {
        ((self.0 >> 5) & GREEN_MASK) as u8
    }

    /// 5-bit blue channel.
    #[inline]
    pub const fn blue(self) -> u8 {
        (self.0 & BLUE_MASK) as u8
    }

    pub const fn to_rgb888(self) -> Rgb888 {
        (self.red() << 3, self.green() << 2, self.blue() << 3)
    }

    /// Byte-swapped form, i.e. how the value reads back when its bytes were
    /// stored in the opposite order.
    pub const fn swapped(self) -> Self {
        Self(self.0.swap_bytes())
    }
}
