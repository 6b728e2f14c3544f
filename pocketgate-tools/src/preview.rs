//! Desktop stand-in for the panel: scenes are drawn into a [`Surface`],
//! presented through a [`RecordingBus`] and the captured bus bytes are
//! turned back into an image.

use crate::config::PreviewConfig;
use crate::convert::encode_png;
use anyhow::anyhow;
use clap::ValueEnum;
use log::info;
use pocketgate_core::iso::world_to_screen;
use pocketgate_core::{
    AlphaSprite, Camera, DisplayConfig, Entity, Fixed, RecordingBus, Result, Rgb565, SpritePixel,
    Surface, WorldPoint,
};

const COLOR_BARS: [Rgb565; 9] = [
    Rgb565::RED,
    Rgb565::GREEN,
    Rgb565::BLUE,
    Rgb565::WHITE,
    Rgb565::BLACK,
    Rgb565::GRAY,
    Rgb565::YELLOW,
    Rgb565::CYAN,
    Rgb565::MAGENTA,
];
const TILE_SIZE: i32 = 12;
const TILES: i32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Scene {
    Colors,
    Rectangle,
    Lines,
    Diamond,
    Sprite,
    Iso,
}

/// Renders `scene` and returns the pixels as they arrived on the bus.
pub fn render_scene(
    scene: Scene,
    display: DisplayConfig,
    color: Rgb565,
    sprite: Option<&AlphaSprite>,
) -> Result<Vec<Rgb565>> {
    let mut surface = Surface::new(display);
    let mut bus = RecordingBus::default();
    surface.init(&mut bus)?;

    match scene {
        Scene::Colors => draw_color_bars(&mut surface)?,
        Scene::Rectangle => {
            surface.fill(Rgb565::BLACK);
            Entity::centered(display, 25, 25, color).draw(&mut surface)?;
        }
        Scene::Lines => {
            let right = display.width as i32 - 1;
            let bottom = display.height as i32 - 1;
            surface.fill(Rgb565::BLACK);
            surface.draw_line_bresenham(0, 0, right, bottom, color)?;
            surface.draw_line_bresenham(right / 2, 0, right / 2, bottom, color)?;
            surface.draw_line_bresenham(0, bottom / 2, right, bottom / 2, color)?;
            surface.draw_line_bresenham(right, 0, 0, bottom, color)?;
        }
        Scene::Diamond => {
            surface.fill(Rgb565::BLACK);
            surface.draw_diamond_outline(
                (display.width as i32 - 1) / 2,
                (display.height as i32 - 1) / 2,
                32,
                16,
                color,
            )?;
        }
        Scene::Sprite => {
            let fallback = soft_disc(16);
            draw_sprite_corners(&mut surface, sprite.unwrap_or(&fallback))?;
        }
        Scene::Iso => draw_iso_grid(&mut surface, color)?,
    }

    surface.swap();
    surface.present(&mut bus)?;

    bus.last_frame_pixels()
        .ok_or_else(|| anyhow!("No frame reached the bus"))
}

/// Expands a frame to RGB888 with every pixel repeated `scale` times in
/// both directions.
pub fn frame_to_rgb(pixels: &[Rgb565], display: DisplayConfig, scale: u32) -> Vec<u8> {
    let scale = scale.max(1) as usize;
    let width = display.width as usize;
    let mut rgb = Vec::with_capacity(pixels.len() * scale * scale * 3);

    for row in pixels.chunks_exact(width.max(1)) {
        let line: Vec<u8> = row
            .iter()
            .flat_map(|pixel| {
                let (r, g, b) = pixel.to_rgb888();
                [r, g, b].repeat(scale)
            })
            .collect();
        for _ in 0..scale {
            rgb.extend_from_slice(&line);
        }
    }

    rgb
}

pub fn run(config: &PreviewConfig) -> Result<()> {
    let sprite = match &config.sprite {
        Some(path) => Some(AlphaSprite::parse(&std::fs::read(path)?)?),
        None => None,
    };

    let display = config.display();
    let frame = render_scene(config.scene, display, config.color, sprite.as_ref())?;
    let rgb = frame_to_rgb(&frame, display, config.scale);
    let png = encode_png(
        config.image_width(),
        config.image_height(),
        png::ColorType::Rgb,
        &rgb,
    )?;
    std::fs::write(&config.output, png)?;

    info!(
        "Rendered {:?} scene ({}x{} at {}x) into {}",
        config.scene,
        display.width,
        display.height,
        config.scale,
        config.output.display()
    );

    Ok(())
}

fn draw_color_bars(surface: &mut Surface) -> Result<()> {
    let bar_width = surface.width() / COLOR_BARS.len() as u16;
    let height = surface.height();

    surface.fill(Rgb565::BLACK);
    for (n, &color) in COLOR_BARS.iter().enumerate() {
        surface.draw_rectangle_fast(0, height, n as u16 * bar_width, bar_width, color)?;
    }

    Ok(())
}

fn draw_sprite_corners(surface: &mut Surface, sprite: &AlphaSprite) -> Result<()> {
    let right = surface.width().saturating_sub(sprite.width);
    let bottom = surface.height().saturating_sub(sprite.height);
    let spots = [
        (0, 0),
        (right, 0),
        (right / 2, bottom / 2),
        (0, bottom),
        (right, bottom),
    ];

    surface.fill(Rgb565::WHITE);
    for (x, y) in spots {
        surface.draw_sprite_alpha(y, sprite.height, x, sprite.width, &sprite.pixels)?;
    }

    Ok(())
}

fn draw_iso_grid(surface: &mut Surface, color: Rgb565) -> Result<()> {
    let camera = Camera::new(surface.width() as i32 / 2, TILE_SIZE / 2 + 2);

    surface.fill(Rgb565::BLACK);
    for tile_x in 0..TILES {
        for tile_y in 0..TILES {
            let center = world_to_screen(
                WorldPoint::ground(
                    Fixed::from_int(tile_x * TILE_SIZE),
                    Fixed::from_int(tile_y * TILE_SIZE),
                ),
                camera,
            );
            surface.draw_diamond_outline(center.x, center.y, TILE_SIZE, TILE_SIZE / 2, color)?;
        }
    }

    Ok(())
}

/// Red disc whose coverage fades towards the rim.
fn soft_disc(size: u16) -> AlphaSprite {
    let radius = size as i32 / 2;
    let pixels = (0..size as i32)
        .flat_map(|y| (0..size as i32).map(move |x| (x - radius, y - radius)))
        .map(|(dx, dy)| {
            let distance = dx * dx + dy * dy;
            let limit = radius * radius;
            let alpha = if distance >= limit {
                0
            } else {
                255 - distance * 255 / limit
            };
            SpritePixel {
                color: Rgb565::RED,
                alpha: alpha as u8,
            }
        })
        .collect();

    AlphaSprite {
        width: size,
        height: size,
        pixels,
    }
}
