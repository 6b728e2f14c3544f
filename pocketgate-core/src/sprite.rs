//! Binary sprite assets.
//!
//! ```text
//! offset  size  field
//! 0       2     width  (u16, little-endian)
//! 2       2     height (u16, little-endian)
//! 4       ...   width * height records, row-major
//! ```
//!
//! Chroma-key records are a 2-byte color where [`FILE_CHROMA_KEY`] marks a
//! transparent pixel. Alpha records are a 2-byte color followed by one byte of
//! coverage. Colors are little-endian RGB565. One file never mixes the two.

use crate::Result;
use crate::color::Rgb565;
use crate::draw::{ALPHA_CUTOFF, CHROMA_KEY};
use anyhow::{anyhow, bail};
use log::warn;

/// Reserved magenta marking transparent records in chroma-key files.
pub const FILE_CHROMA_KEY: Rgb565 = Rgb565::MAGENTA;

const HEADER_SIZE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteHeader {
    pub width: u16,
    pub height: u16,
}

impl TryFrom<&[u8]> for SpriteHeader {
    type Error = anyhow::Error;

    fn try_from(data: &[u8]) -> Result<Self> {
        let header = data
            .get(..HEADER_SIZE)
            .ok_or_else(|| anyhow!("Sprite data too short for header ({} bytes)", data.len()))?;

        Ok(Self {
            width: u16::from_le_bytes([header[0], header[1]]),
            height: u16::from_le_bytes([header[2], header[3]]),
        })
    }
}

impl SpriteHeader {
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    fn to_bytes(self) -> [u8; HEADER_SIZE] {
        let [w0, w1] = self.width.to_le_bytes();
        let [h0, h1] = self.height.to_le_bytes();

        [w0, w1, h0, h1]
    }

    /// Record bytes following the header, trailing garbage dropped.
    fn records(self, data: &[u8], format: SpriteFormat) -> Result<&[u8]> {
        let expected = self.pixel_count() * format.record_size();
        let body = &data[HEADER_SIZE..];

        if body.len() < expected {
            bail!(
                "{format:?} sprite {}x{} needs {expected} bytes of pixel data, got {}",
                self.width,
                self.height,
                body.len()
            );
        }
        if body.len() > expected {
            warn!(
                "Ignoring {} trailing bytes after {format:?} sprite data",
                body.len() - expected
            );
        }

        Ok(&body[..expected])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteFormat {
    ChromaKey,
    Alpha,
}

impl SpriteFormat {
    pub const fn record_size(self) -> usize {
        match self {
            Self::ChromaKey => 2,
            Self::Alpha => 3,
        }
    }

    /// Picks the variant whose size matches `data` exactly.
    pub fn detect(data: &[u8]) -> Result<Self> {
        let header = SpriteHeader::try_from(data)?;
        let body = data.len() - HEADER_SIZE;

        [Self::Alpha, Self::ChromaKey]
            .into_iter()
            .find(|format| header.pixel_count() * format.record_size() == body)
            .ok_or_else(|| {
                anyhow!(
                    "{} bytes of pixel data match no record size for a {}x{} sprite",
                    body,
                    header.width,
                    header.height
                )
            })
    }
}

/// One record of the alpha variant.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SpritePixel {
    pub color: Rgb565,
    /// 0 is fully transparent, 255 fully opaque.
    pub alpha: u8,
}

/// Counts of what a sprite asset holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteSummary {
    pub format: SpriteFormat,
    pub width: u16,
    pub height: u16,
    pub transparent: usize,
    pub opaque: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlphaSprite {
    pub width: u16,
    pub height: u16,
    pub pixels: Vec<SpritePixel>,
}

impl AlphaSprite {
    pub fn parse(data: &[u8]) -> Result<Self> {
        let header = SpriteHeader::try_from(data)?;
        let pixels = header
            .records(data, SpriteFormat::Alpha)?
            .chunks_exact(SpriteFormat::Alpha.record_size())
            .map(|record| SpritePixel {
                color: Rgb565(u16::from_le_bytes([record[0], record[1]])),
                alpha: record[2],
            })
            .collect();

        Ok(Self {
            width: header.width,
            height: header.height,
            pixels,
        })
    }

    /// Builds a sprite from tightly packed 8-bit RGBA rows.
    pub fn from_rgba8(width: u16, height: u16, rgba: &[u8]) -> Result<Self> {
        let pixels = rgba_records(width, height, rgba)?
            .map(|[r, g, b, a]| SpritePixel {
                color: Rgb565::from_rgb888(r, g, b),
                alpha: a,
            })
            .collect();

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let header = SpriteHeader {
            width: self.width,
            height: self.height,
        };
        let mut bytes = Vec::with_capacity(HEADER_SIZE + self.pixels.len() * 3);
        bytes.extend_from_slice(&header.to_bytes());

        for pixel in &self.pixels {
            bytes.extend_from_slice(&pixel.color.0.to_le_bytes());
            bytes.push(pixel.alpha);
        }

        bytes
    }

    pub fn summary(&self) -> SpriteSummary {
        let transparent = self
            .pixels
            .iter()
            .filter(|pixel| pixel.alpha < ALPHA_CUTOFF)
            .count();

        SpriteSummary {
            format: SpriteFormat::Alpha,
            width: self.width,
            height: self.height,
            transparent,
            opaque: self.pixels.len() - transparent,
        }
    }
}

/// Chroma-key sprite ready for [`crate::Surface::draw_sprite`]: transparent
/// records are stored as the blit key [`CHROMA_KEY`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChromaSprite {
    pub width: u16,
    pub height: u16,
    pub pixels: Vec<Rgb565>,
}

impl ChromaSprite {
    pub fn parse(data: &[u8]) -> Result<Self> {
        let header = SpriteHeader::try_from(data)?;
        let pixels: Vec<_> = header
            .records(data, SpriteFormat::ChromaKey)?
            .chunks_exact(SpriteFormat::ChromaKey.record_size())
            .map(|record| match Rgb565(u16::from_le_bytes([record[0], record[1]])) {
                FILE_CHROMA_KEY => CHROMA_KEY,
                color => color,
            })
            .collect();

        let collisions = data[HEADER_SIZE..]
            .chunks_exact(2)
            .take(pixels.len())
            .filter(|record| Rgb565(u16::from_le_bytes([record[0], record[1]])) == CHROMA_KEY)
            .count();
        if collisions > 0 {
            warn!("{collisions} opaque pixels equal the blit key {CHROMA_KEY} and will not be drawn");
        }

        Ok(Self {
            width: header.width,
            height: header.height,
            pixels,
        })
    }

    /// Coverage below [`ALPHA_CUTOFF`] becomes transparent. Opaque colors
    /// that pack to either key are moved to [`opaque_safe`] neighbours.
    pub fn from_rgba8(width: u16, height: u16, rgba: &[u8]) -> Result<Self> {
        let mut remapped = 0;
        let pixels = rgba_records(width, height, rgba)?
            .map(|[r, g, b, a]| match a {
                0..ALPHA_CUTOFF => CHROMA_KEY,
                _ => {
                    let color = Rgb565::from_rgb888(r, g, b);
                    let safe = opaque_safe(color);
                    if safe != color {
                        remapped += 1;
                    }
                    safe
                }
            })
            .collect();

        if remapped > 0 {
            warn!("Moved {remapped} opaque pixels off the chroma keys");
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let header = SpriteHeader {
            width: self.width,
            height: self.height,
        };
        let mut bytes = Vec::with_capacity(HEADER_SIZE + self.pixels.len() * 2);
        bytes.extend_from_slice(&header.to_bytes());

        for &pixel in &self.pixels {
            let stored = match pixel {
                CHROMA_KEY => FILE_CHROMA_KEY,
                FILE_CHROMA_KEY => {
                    warn!("Writing opaque {pixel} as {}", opaque_safe(pixel));
                    opaque_safe(pixel)
                }
                color => color,
            };
            bytes.extend_from_slice(&stored.0.to_le_bytes());
        }

        bytes
    }

    pub fn summary(&self) -> SpriteSummary {
        let transparent = self.pixels.iter().filter(|&&p| p == CHROMA_KEY).count();

        SpriteSummary {
            format: SpriteFormat::ChromaKey,
            width: self.width,
            height: self.height,
            transparent,
            opaque: self.pixels.len() - transparent,
        }
    }
}

/// Nearest color that is neither [`FILE_CHROMA_KEY`] nor [`CHROMA_KEY`]:
/// the lowest green bit of a key is flipped, other colors pass through.
pub const fn opaque_safe(color: Rgb565) -> Rgb565 {
    const GREEN_LSB: u16 = 1 << 5;

    if color.0 == FILE_CHROMA_KEY.0 || color.0 == CHROMA_KEY.0 {
        Rgb565(color.0 ^ GREEN_LSB)
    } else {
        color
    }
}

fn rgba_records(
    width: u16,
    height: u16,
    rgba: &[u8],
) -> Result<impl Iterator<Item = [u8; 4]> + '_> {
    let expected = width as usize * height as usize * 4;
    if rgba.len() != expected {
        bail!(
            "RGBA data for {width}x{height} must be {expected} bytes, got {}",
            rgba.len()
        );
    }

    Ok(rgba
        .chunks_exact(4)
        .map(|pixel| [pixel[0], pixel[1], pixel[2], pixel[3]]))
}
