//! Isometric projection between world space and screen pixels.
//!
//! ```text
//! screen_x = (x - y)           + camera.offset_x
//! screen_y = ((x + y) / 2 - z) + camera.offset_y
//! ```
//!
//! World axes: `x` east, `y` north, `z` up. The fixed-point results are
//! truncated to whole pixels as the last step.

use crate::fixed::Fixed;

const TWO: Fixed = Fixed::from_int(2);

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WorldPoint {
    pub x: Fixed,
    pub y: Fixed,
    pub z: Fixed,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Camera {
    pub offset_x: i32,
    pub offset_y: i32,
}

impl WorldPoint {
    pub fn new(x: Fixed, y: Fixed, z: Fixed) -> Self {
        Self { x, y, z }
    }

    pub fn ground(x: Fixed, y: Fixed) -> Self {
        Self::new(x, y, Fixed::ZERO)
    }
}

impl ScreenPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Camera {
    pub fn new(offset_x: i32, offset_y: i32) -> Self {
        Self { offset_x, offset_y }
    }
}

pub fn world_to_screen(world: WorldPoint, camera: Camera) -> ScreenPoint {
    let sx = world.x - world.y;
    let sy = (world.x + world.y) / TWO - world.z;

    ScreenPoint {
        x: sx.to_int() + camera.offset_x,
        y: sy.to_int() + camera.offset_y,
    }
}

/// Inverse projection onto the ground plane (`z = 0`).
pub fn screen_to_world(screen: ScreenPoint, camera: Camera) -> WorldPoint {
    screen_to_world_at(screen, camera, Fixed::ZERO)
}

/// Inverse projection onto the horizontal plane at height `z`.
///
/// Raising a point by `z` moves it up the screen by `z` pixels, so the screen
/// row is shifted back down by `z` before solving the ground-plane system.
pub fn screen_to_world_at(screen: ScreenPoint, camera: Camera, z: Fixed) -> WorldPoint {
    let sx = Fixed::from_int(screen.x - camera.offset_x);
    let sy = Fixed::from_int(screen.y - camera.offset_y) + z;
    let half_sx = sx / TWO;

    WorldPoint {
        x: half_sx + sy,
        y: sy - half_sx,
        z,
    }
}
