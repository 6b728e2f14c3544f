use crate::color::Rgb565;
use crate::draw::{DrawError, check_source_len};
use crate::sprite::SpritePixel;
use crate::surface::Surface;

/// Pixels equal to this value are skipped by [`Surface::draw_sprite`].
///
/// It is the magenta asset key ([`crate::sprite::FILE_CHROMA_KEY`]) with its
/// bytes exchanged, which is how the key reads in legacy embedded sprite
/// tables. Sprites loaded through [`crate::sprite::ChromaSprite`] are mapped
/// onto it.
pub const CHROMA_KEY: Rgb565 = Rgb565::MAGENTA.swapped();

/// Coverage below this value is treated as fully transparent.
pub const ALPHA_CUTOFF: u8 = 10;

/// Mixes `src` over `dst` per channel, at each channel's native bit width:
/// `(src * alpha + dst * (255 - alpha)) / 255`.
pub fn blend(src: Rgb565, dst: Rgb565, alpha: u8) -> Rgb565 {
    let alpha = alpha as u16;
    let inverse = 255 - alpha;
    let mix = |s: u8, d: u8| ((s as u16 * alpha + d as u16 * inverse) / 255) as u8;

    Rgb565::from_channels(
        mix(src.red(), dst.red()),
        mix(src.green(), dst.green()),
        mix(src.blue(), dst.blue()),
    )
}

impl Surface {
    /// Copies a `width x height` block of `sprite` (row-major) to `(x, y)`,
    /// skipping pixels equal to [`CHROMA_KEY`].
    pub fn draw_sprite(
        &mut self,
        y: u16,
        height: u16,
        x: u16,
        width: u16,
        sprite: &[Rgb565],
    ) -> Result<(), DrawError> {
        self.check_area(y, height, x, width)?;
        check_source_len(width as usize * height as usize, sprite.len())?;

        for (row, line) in sprite
            .chunks_exact(width.max(1) as usize)
            .take(height as usize)
            .enumerate()
        {
            let start = self.index(x, y + row as u16);
            let target = &mut self.back_buffer_mut()[start..start + width as usize];

            for (dst, &src) in target.iter_mut().zip(line) {
                if src != CHROMA_KEY {
                    *dst = src;
                }
            }
        }

        Ok(())
    }

    /// Alpha-blended variant of [`Surface::draw_sprite`]. Coverage below
    /// [`ALPHA_CUTOFF`] is skipped and full coverage overwrites directly.
    pub fn draw_sprite_alpha(
        &mut self,
        y: u16,
        height: u16,
        x: u16,
        width: u16,
        sprite: &[SpritePixel],
    ) -> Result<(), DrawError> {
        self.check_area(y, height, x, width)?;
        check_source_len(width as usize * height as usize, sprite.len())?;

        for (row, line) in sprite
            .chunks_exact(width.max(1) as usize)
            .take(height as usize)
            .enumerate()
        {
            let start = self.index(x, y + row as u16);
            let target = &mut self.back_buffer_mut()[start..start + width as usize];

            for (dst, src) in target.iter_mut().zip(line) {
                *dst = match src.alpha {
                    0..ALPHA_CUTOFF => continue,
                    u8::MAX => src.color,
                    alpha => blend(src.color, *dst, alpha),
                };
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DisplayConfig;
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;

    fn surface() -> Surface {
        let mut surface = Surface::new(DisplayConfig::new(12, 8));
        surface.fill(Rgb565::BLUE);
        surface
    }

    fn gradient(width: u16, height: u16) -> Vec<Rgb565> {
        (0..width * height)
            .map(|n| Rgb565::from_channels((n % 32) as u8, (n * 3 % 64) as u8, 7))
            .collect()
    }

    fn with_alpha(colors: &[Rgb565], alpha: u8) -> Vec<SpritePixel> {
        colors
            .iter()
            .map(|&color| SpritePixel { color, alpha })
            .collect()
    }

    #[test]
    fn sprite_is_copied_to_its_position() {
        let mut surface = surface();
        let sprite = gradient(3, 2);
        surface
            .draw_sprite(4, 2, 5, 3, &sprite)
            .expect("sprite fits");

        for row in 0..2 {
            for column in 0..3 {
                assert_eq!(
                    Some(sprite[(row * 3 + column) as usize]),
                    surface.pixel(5 + column, 4 + row)
                );
            }
        }
        assert_matches!(surface.pixel(4, 4), Some(Rgb565::BLUE));
        assert_matches!(surface.pixel(8, 5), Some(Rgb565::BLUE));
    }

    #[test]
    fn chroma_key_pixels_are_skipped() {
        let mut surface = surface();
        let sprite = [Rgb565::RED, CHROMA_KEY, CHROMA_KEY, Rgb565::GREEN];
        surface
            .draw_sprite(0, 2, 0, 2, &sprite)
            .expect("sprite fits");

        assert_matches!(surface.pixel(0, 0), Some(Rgb565::RED));
        assert_matches!(surface.pixel(1, 0), Some(Rgb565::BLUE));
        assert_matches!(surface.pixel(0, 1), Some(Rgb565::BLUE));
        assert_matches!(surface.pixel(1, 1), Some(Rgb565::GREEN));
    }

    #[test]
    fn file_magenta_is_opaque_for_raw_blit() {
        let mut surface = surface();
        surface
            .draw_sprite(0, 1, 0, 1, &[Rgb565::MAGENTA])
            .expect("sprite fits");

        assert_matches!(surface.pixel(0, 0), Some(Rgb565::MAGENTA));
    }

    #[test]
    fn sprite_out_of_bounds_or_short_source_draws_nothing() {
        let mut surface = surface();
        let before = surface.back_buffer().to_vec();

        assert_matches!(
            surface.draw_sprite(7, 2, 0, 1, &gradient(1, 2)),
            Err(DrawError::OutOfBounds { .. })
        );
        assert_matches!(
            surface.draw_sprite(0, 2, 0, 2, &gradient(2, 1)),
            Err(DrawError::SourceTooShort {
                expected: 4,
                actual: 2
            })
        );
        assert_matches!(
            surface.draw_sprite_alpha(0, 1, 11, 2, &with_alpha(&gradient(2, 1), 255)),
            Err(DrawError::OutOfBounds { .. })
        );
        assert_eq!(before, surface.back_buffer());
    }

    #[test]
    fn opaque_alpha_sprite_matches_plain_blit() {
        let sprite = gradient(5, 4);
        let mut plain = surface();
        let mut alpha = surface();

        plain.draw_sprite(2, 4, 6, 5, &sprite).expect("sprite fits");
        alpha
            .draw_sprite_alpha(2, 4, 6, 5, &with_alpha(&sprite, 255))
            .expect("sprite fits");

        assert_eq!(plain.back_buffer(), alpha.back_buffer());
    }

    #[test]
    fn nearly_transparent_pixels_leave_destination_untouched() {
        let sprite = gradient(5, 4);

        for alpha in 0..ALPHA_CUTOFF {
            let mut surface = surface();
            let before = surface.back_buffer().to_vec();
            surface
                .draw_sprite_alpha(1, 4, 1, 5, &with_alpha(&sprite, alpha))
                .expect("sprite fits");

            assert_eq!(before, surface.back_buffer());
        }
    }

    #[test]
    fn partial_coverage_blends_each_channel() {
        let mut surface = Surface::new(DisplayConfig::new(2, 1));
        surface.fill(Rgb565::from_channels(0, 0, 31));
        let sprite = [SpritePixel {
            color: Rgb565::from_channels(31, 63, 0),
            alpha: 128,
        }];
        surface
            .draw_sprite_alpha(0, 1, 0, 1, &sprite)
            .expect("sprite fits");

        // 31 * 128 / 255 = 15, 63 * 128 / 255 = 31, 31 * 127 / 255 = 15
        assert_eq!(Some(Rgb565::from_channels(15, 31, 15)), surface.pixel(0, 0));
        assert_matches!(surface.pixel(1, 0), Some(Rgb565(0x001f)));
    }

    #[test]
    fn blend_endpoints() {
        let src = Rgb565::from_channels(20, 40, 10);
        let dst = Rgb565::from_channels(5, 7, 30);

        assert_eq!(src, blend(src, dst, 255));
        assert_eq!(dst, blend(src, dst, 0));
    }

    #[test]
    fn blit_chroma_key_is_byte_swapped_magenta() {
        assert_eq!(Rgb565(0x1ff8), CHROMA_KEY);
    }
}
