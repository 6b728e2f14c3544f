use anyhow::{anyhow, bail};
use clap::ValueEnum;
use log::info;
use pocketgate_core::sprite::SpriteSummary;
use pocketgate_core::{AlphaSprite, ChromaSprite, Result};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AssetFormat {
    /// RGB565 plus one byte of coverage per pixel
    Alpha,
    /// RGB565 with magenta marking transparent pixels
    ChromaKey,
}

/// Decoded image as tightly packed 8-bit RGBA rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaImage {
    pub width: u16,
    pub height: u16,
    pub data: Vec<u8>,
}

pub fn decode_png(bytes: &[u8]) -> Result<RgbaImage> {
    let mut decoder = png::Decoder::new(bytes);
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder.read_info()?;
    let mut buffer = vec![0; reader.output_buffer_size()];
    let frame = reader.next_frame(&mut buffer)?;
    buffer.truncate(frame.buffer_size());

    let data = match frame.color_type {
        png::ColorType::Rgba => buffer,
        png::ColorType::Rgb => buffer
            .chunks_exact(3)
            .flat_map(|p| [p[0], p[1], p[2], u8::MAX])
            .collect(),
        png::ColorType::GrayscaleAlpha => buffer
            .chunks_exact(2)
            .flat_map(|p| [p[0], p[0], p[0], p[1]])
            .collect(),
        png::ColorType::Grayscale => buffer
            .iter()
            .flat_map(|&g| [g, g, g, u8::MAX])
            .collect(),
        png::ColorType::Indexed => bail!("Indexed PNG was not expanded to RGB"),
    };

    let width = u16::try_from(frame.width)
        .map_err(|_| anyhow!("Image width {} does not fit a sprite", frame.width))?;
    let height = u16::try_from(frame.height)
        .map_err(|_| anyhow!("Image height {} does not fit a sprite", frame.height))?;

    Ok(RgbaImage {
        width,
        height,
        data,
    })
}

pub fn encode_png(width: u32, height: u32, color: png::ColorType, data: &[u8]) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    let mut encoder = png::Encoder::new(&mut bytes, width, height);
    encoder.set_color(color);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(data)?;
    writer.finish()?;

    Ok(bytes)
}

/// Converts PNG bytes into a sprite file, returning the file contents and
/// what they hold.
pub fn png_to_sprite(png: &[u8], format: AssetFormat) -> Result<(Vec<u8>, SpriteSummary)> {
    let image = decode_png(png)?;

    Ok(match format {
        AssetFormat::Alpha => {
            let sprite = AlphaSprite::from_rgba8(image.width, image.height, &image.data)?;
            (sprite.to_bytes(), sprite.summary())
        }
        AssetFormat::ChromaKey => {
            let sprite = ChromaSprite::from_rgba8(image.width, image.height, &image.data)?;
            (sprite.to_bytes(), sprite.summary())
        }
    })
}

pub fn default_output(input: &Path) -> PathBuf {
    input.with_extension("sprite")
}

pub fn convert_file(input: &Path, output: Option<&Path>, format: AssetFormat) -> Result<PathBuf> {
    let output = output.map_or_else(|| default_output(input), Path::to_path_buf);
    let png = std::fs::read(input)
        .map_err(|err| anyhow!("Failed to read {}: {err}", input.display()))?;
    let (bytes, summary) = png_to_sprite(&png, format)?;

    std::fs::write(&output, &bytes)?;
    info!(
        "Converted {} ({}x{}, {} transparent) into {} bytes at {}",
        input.display(),
        summary.width,
        summary.height,
        summary.transparent,
        bytes.len(),
        output.display()
    );

    Ok(output)
}
