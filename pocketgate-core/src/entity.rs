use crate::color::Rgb565;
use crate::config::DisplayConfig;
use crate::draw::DrawError;
use crate::fixed::Fixed;
use crate::sprite::AlphaSprite;
use crate::surface::Surface;
use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
    pub struct Direction: u8 {
        const UP    = 0b0000_0001;
        const DOWN  = 0b0000_0010;
        const LEFT  = 0b0000_0100;
        const RIGHT = 0b0000_1000;
    }
}

/// Axis-aligned box whose position moves in sub-pixel steps. The size is
/// fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entity {
    pub y: Fixed,
    height: u16,
    pub x: Fixed,
    width: u16,
    pub color: Rgb565,
}

impl Entity {
    pub fn new(y: i32, height: u16, x: i32, width: u16, color: Rgb565) -> Self {
        Self {
            y: Fixed::from_int(y),
            height,
            x: Fixed::from_int(x),
            width,
            color,
        }
    }

    /// Box of `width x height` centered on the display.
    pub fn centered(display: DisplayConfig, height: u16, width: u16, color: Rgb565) -> Self {
        Self::new(
            display.height as i32 / 2 - height as i32 / 2,
            height,
            display.width as i32 / 2 - width as i32 / 2,
            width,
            color,
        )
    }

    /// Moves by `movement` (usually `speed * dt`) along every requested
    /// direction whose result keeps the box on the display. Returns whether
    /// the position changed.
    pub fn step(&mut self, directions: Direction, movement: Fixed, display: DisplayConfig) -> bool {
        let screen_width = Fixed::from_int(display.width.into());
        let screen_height = Fixed::from_int(display.height.into());
        let width = Fixed::from_int(self.width.into());
        let height = Fixed::from_int(self.height.into());
        let mut moved = false;

        if directions.contains(Direction::UP) && self.y - movement >= Fixed::ZERO {
            self.y -= movement;
            moved = true;
        }
        if directions.contains(Direction::LEFT) && self.x - movement >= Fixed::ZERO {
            self.x -= movement;
            moved = true;
        }
        if directions.contains(Direction::DOWN) && self.y + height + movement <= screen_height {
            self.y += movement;
            moved = true;
        }
        if directions.contains(Direction::RIGHT) && self.x + width + movement <= screen_width {
            self.x += movement;
            moved = true;
        }

        moved
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Whole-pixel position `(x, y)`.
    pub fn position(&self) -> (u16, u16) {
        (clamp_to_u16(self.x), clamp_to_u16(self.y))
    }

    pub fn draw(&self, surface: &mut Surface) -> Result<(), DrawError> {
        let (x, y) = self.position();
        surface.draw_rectangle_fast(y, self.height, x, self.width, self.color)
    }

    /// Draws `sprite` at the entity position, using the sprite's own size.
    pub fn draw_sprite(&self, surface: &mut Surface, sprite: &AlphaSprite) -> Result<(), DrawError> {
        let (x, y) = self.position();
        surface.draw_sprite_alpha(y, sprite.height, x, sprite.width, &sprite.pixels)
    }
}

fn clamp_to_u16(value: Fixed) -> u16 {
    value.to_int().clamp(0, u16::MAX.into()) as u16
}
