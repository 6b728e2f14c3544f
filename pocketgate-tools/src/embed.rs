//! Sprite files as Rust source, for targets without a filesystem.
//!
//! The emitted module holds `<NAME>_WIDTH`, `<NAME>_HEIGHT` and `<NAME>_DATA`
//! constants that can be handed straight to `Surface::draw_sprite` or
//! `Surface::draw_sprite_alpha`.

use anyhow::{anyhow, bail};
use log::info;
use pocketgate_core::sprite::SpriteFormat;
use pocketgate_core::{AlphaSprite, ChromaSprite, Result};
use std::fmt::Write;
use std::path::{Path, PathBuf};

const COLORS_PER_LINE: usize = 8;

/// Upper snake case identifier built from `name`.
pub fn constant_prefix(name: &str) -> Result<String> {
    let mut prefix: String = name
        .chars()
        .map(|c| match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' => c.to_ascii_uppercase(),
            _ => '_',
        })
        .collect();

    if prefix.chars().all(|c| c == '_') {
        bail!("{name:?} contains nothing usable as a constant name");
    }
    if prefix.starts_with(|c: char| c.is_ascii_digit()) {
        prefix.insert(0, '_');
    }

    Ok(prefix)
}

/// Renders the contents of a sprite file as a Rust module.
pub fn render_module(data: &[u8], prefix: &str, source: &str) -> Result<String> {
    let mut module = format!("//! Generated by `pocketgate embed` from {source}.\n\n");

    match SpriteFormat::detect(data)? {
        SpriteFormat::Alpha => {
            let sprite = AlphaSprite::parse(data)?;
            module.push_str("use pocketgate_core::{Rgb565, SpritePixel};\n\n");
            write_dimensions(&mut module, prefix, sprite.width, sprite.height)?;
            writeln!(
                module,
                "pub const {prefix}_DATA: [SpritePixel; {}] = [",
                sprite.pixels.len()
            )?;
            for pixel in &sprite.pixels {
                writeln!(
                    module,
                    "    SpritePixel {{ color: Rgb565({:#06X}), alpha: {} }},",
                    pixel.color.0, pixel.alpha
                )?;
            }
        }
        SpriteFormat::ChromaKey => {
            let sprite = ChromaSprite::parse(data)?;
            module.push_str("use pocketgate_core::Rgb565;\n\n");
            write_dimensions(&mut module, prefix, sprite.width, sprite.height)?;
            module.push_str("/// Transparent pixels hold `pocketgate_core::draw::CHROMA_KEY`.\n");
            writeln!(
                module,
                "pub const {prefix}_DATA: [Rgb565; {}] = [",
                sprite.pixels.len()
            )?;
            for line in sprite.pixels.chunks(COLORS_PER_LINE) {
                let colors = line
                    .iter()
                    .map(|color| format!("Rgb565({:#06X})", color.0))
                    .collect::<Vec<_>>()
                    .join(", ");
                writeln!(module, "    {colors},")?;
            }
        }
    }
    module.push_str("];\n");

    Ok(module)
}

pub fn default_output(input: &Path) -> PathBuf {
    input.with_extension("rs")
}

pub fn embed_file(input: &Path, output: Option<&Path>, name: Option<&str>) -> Result<PathBuf> {
    let output = output.map_or_else(|| default_output(input), Path::to_path_buf);
    let name = match name {
        Some(name) => name.to_owned(),
        None => input
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .ok_or_else(|| anyhow!("Cannot derive a name from {}", input.display()))?,
    };
    let prefix = constant_prefix(&name)?;
    let data = std::fs::read(input)
        .map_err(|err| anyhow!("Failed to read {}: {err}", input.display()))?;

    let source = input
        .file_name()
        .map_or_else(|| input.display().to_string(), |n| n.to_string_lossy().into_owned());
    let module = render_module(&data, &prefix, &source)?;
    std::fs::write(&output, &module)?;
    info!(
        "Embedded {} as {prefix}_DATA into {}",
        input.display(),
        output.display()
    );

    Ok(output)
}

fn write_dimensions(module: &mut String, prefix: &str, width: u16, height: u16) -> Result<()> {
    writeln!(module, "pub const {prefix}_WIDTH: u16 = {width};")?;
    writeln!(module, "pub const {prefix}_HEIGHT: u16 = {height};\n")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use pocketgate_core::{Rgb565, SpritePixel};
    use pretty_assertions::assert_eq;

    #[test]
    fn prefix_is_upper_snake_case() {
        assert_matches!(constant_prefix("dark-wizard"), Ok(p) if p == "DARK_WIZARD");
        assert_matches!(constant_prefix("8bit"), Ok(p) if p == "_8BIT");
        assert_matches!(constant_prefix("--"), Err(_));
    }

    #[test]
    fn alpha_sprite_becomes_pixel_table() {
        let sprite = AlphaSprite {
            width: 2,
            height: 1,
            pixels: vec![
                SpritePixel {
                    color: Rgb565::RED,
                    alpha: 255,
                },
                SpritePixel {
                    color: Rgb565::BLUE,
                    alpha: 64,
                },
            ],
        };

        let module = render_module(&sprite.to_bytes(), "WIZARD", "wizard.sprite").expect("renders");

        assert_eq!(
            "//! Generated by `pocketgate embed` from wizard.sprite.\n\
             \n\
             use pocketgate_core::{Rgb565, SpritePixel};\n\
             \n\
             pub const WIZARD_WIDTH: u16 = 2;\n\
             pub const WIZARD_HEIGHT: u16 = 1;\n\
             \n\
             pub const WIZARD_DATA: [SpritePixel; 2] = [\n    \
             SpritePixel { color: Rgb565(0xF800), alpha: 255 },\n    \
             SpritePixel { color: Rgb565(0x001F), alpha: 64 },\n\
             ];\n",
            module
        );
    }

    #[test]
    fn chroma_sprite_keeps_blit_key() {
        let sprite = ChromaSprite {
            width: 3,
            height: 3,
            pixels: vec![Rgb565::GREEN; 9],
        };
        let mut data = sprite.to_bytes();
        data[4..6].copy_from_slice(&[0x1f, 0xf8]);

        let module = render_module(&data, "BUSH", "bush.sprite").expect("renders");

        assert!(module.contains("pub const BUSH_WIDTH: u16 = 3;"));
        assert!(module.contains("pub const BUSH_HEIGHT: u16 = 3;"));
        assert!(module.contains(
            "pub const BUSH_DATA: [Rgb565; 9] = [\n    Rgb565(0x1FF8), Rgb565(0x07E0),"
        ));
        assert!(module.contains("\n    Rgb565(0x07E0),\n];\n"));
    }

    #[test]
    fn broken_sprite_is_rejected() {
        assert_matches!(render_module(&[2, 0, 2, 0, 1], "X", "x.sprite"), Err(_));
    }
}
