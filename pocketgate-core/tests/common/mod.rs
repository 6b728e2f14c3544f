use pocketgate_core::{DisplayConfig, Rgb565, Surface};

pub const CONFIG: DisplayConfig = DisplayConfig {
    width: 32,
    height: 24,
};

pub fn surface_filled_with(color: Rgb565) -> Surface {
    let mut surface = Surface::new(CONFIG);
    surface.fill(color);
    surface.swap();
    surface.fill(color);
    surface
}

#[allow(unused)]
pub fn count_color(pixels: &[Rgb565], color: Rgb565) -> usize {
    pixels.iter().filter(|&&pixel| pixel == color).count()
}
