use pocketgate_core::iso::{screen_to_world, world_to_screen};
use pocketgate_core::{
    AlphaSprite, Camera, Direction, Entity, Fixed, RecordingBus, Result, Rgb565, Window,
    WorldPoint,
};
use pretty_assertions::assert_eq;

mod common;

use common::{CONFIG, count_color, surface_filled_with};

#[test]
fn draw_swap_present_cycle() -> Result<()> {
    let mut surface = surface_filled_with(Rgb565::BLACK);
    let mut bus = RecordingBus::default();

    surface.draw_rectangle_fast(2, 4, 3, 5, Rgb565::YELLOW)?;
    surface.swap();
    surface.present(&mut bus)?;

    surface.fill(Rgb565::BLUE);
    surface.draw_line_bresenham(0, 0, 31, 23, Rgb565::WHITE)?;
    surface.swap();
    surface.present(&mut bus)?;

    assert_eq!(vec![Window::new(0, 0, 31, 23); 2], bus.windows);
    assert_eq!(2, bus.frames.len());

    let first = pocketgate_core::transfer::from_bus_order(&bus.frames[0]);
    assert_eq!(20, count_color(&first, Rgb565::YELLOW));
    assert_eq!(32 * 24 - 20, count_color(&first, Rgb565::BLACK));

    let second = bus.last_frame_pixels().expect("second frame sent");
    assert_eq!(0, count_color(&second, Rgb565::YELLOW));
    assert_eq!(32, count_color(&second, Rgb565::WHITE));

    // Back buffer still holds the first frame, in native order.
    assert_eq!(20, count_color(surface.back_buffer(), Rgb565::YELLOW));

    Ok(())
}

#[test]
fn presented_bytes_are_big_endian() -> Result<()> {
    let mut surface = surface_filled_with(Rgb565::GREEN);
    let mut bus = RecordingBus::default();
    surface.present(&mut bus)?;

    let frame = bus.last_frame().expect("frame sent");
    assert_eq!(CONFIG.frame_bytes(), frame.len());
    assert!(frame.chunks_exact(2).all(|pair| pair == [0x07, 0xe0]));

    Ok(())
}

#[test]
fn moving_sprite_entity_over_frames() -> Result<()> {
    let mut surface = surface_filled_with(Rgb565::WHITE);
    let mut bus = RecordingBus::default();
    let sprite = AlphaSprite::from_rgba8(2, 2, &[255, 0, 0, 255].repeat(4))?;
    let mut wizard = Entity::new(0, sprite.height, 0, sprite.width, Rgb565::BLACK);
    let movement = Fixed::from_int(60) * Fixed::from_f32(1.0 / 60.0);

    for _ in 0..10 {
        wizard.step(Direction::RIGHT | Direction::DOWN, movement, CONFIG);
        surface.fill(Rgb565::WHITE);
        wizard.draw_sprite(&mut surface, &sprite)?;
        surface.swap();
        surface.present(&mut bus)?;
    }

    let last = bus.last_frame_pixels().expect("frames sent");
    let (x, y) = wizard.position();
    assert_eq!(4, count_color(&last, Rgb565::RED));
    assert_eq!(Rgb565::RED, last[y as usize * 32 + x as usize]);
    assert_eq!(10, bus.frames.len());

    Ok(())
}

#[test]
fn isometric_tile_outline_lands_on_projected_point() -> Result<()> {
    let mut surface = surface_filled_with(Rgb565::BLACK);
    let camera = Camera::new(16, 4);
    let tile = WorldPoint::ground(Fixed::from_int(8), Fixed::from_int(8));
    let center = world_to_screen(tile, camera);

    surface.draw_diamond_outline(center.x, center.y, 6, 3, Rgb565::CYAN)?;

    assert_eq!(Some(Rgb565::CYAN), surface.pixel(center.x as u16 + 6, center.y as u16));
    let picked = screen_to_world(center, camera);
    assert_eq!(tile.x, picked.x);
    assert_eq!(tile.y, picked.y);

    Ok(())
}
